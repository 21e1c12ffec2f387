//! Folio Core Library
//!
//! Behavior behind a personal portfolio page, kept free of any UI toolkit.
//!
//! ## Overview
//!
//! - [`gallery`]: lightbox modal with circular navigation, keyboard and swipe
//!   input. The only stateful part of the page.
//! - [`reveal`]: scroll-triggered fade-in of sections
//! - [`export`]: compact single-page PDF export
//! - [`typography`]: widow prevention
//! - [`content`]: the declarative page content everything is built from
//!
//! ## Quick Start
//!
//! ```
//! use folio_core::gallery::{Command, GalleryRegistry, ModalController};
//! use folio_core::PageContent;
//!
//! let content = PageContent::from_json(r#"{
//!     "title": "Jane Doe",
//!     "sections": [{
//!         "id": "work",
//!         "heading": "Work",
//!         "gallery": { "id": "portfolio", "thumbs": [
//!             { "image": { "src": "a.jpg" } },
//!             { "image": { "src": "b.jpg" } },
//!             { "image": { "src": "c.jpg" } }
//!         ] }
//!     }]
//! }"#).unwrap();
//!
//! let mut modal = ModalController::new(GalleryRegistry::scan(&content));
//! modal.dispatch(Command::open("portfolio", 2));
//! modal.dispatch(Command::Next);
//! assert_eq!(modal.current_item().unwrap().source(), "a.jpg");
//! ```

pub mod content;
pub mod error;
pub mod export;
pub mod gallery;
pub mod reveal;
pub mod typography;

// Re-exports
pub use content::{entry_runs, Entry, EntryRun, GalleryStrip, Link, PageContent, Section, TextBlock, Thumb, ThumbImage};
pub use error::{FolioError, FolioResult};
pub use export::{AutoFit, ExportJob, FixedScale, Html2PdfOptions, PdfRenderer, ScalePolicy};
pub use gallery::{Command, GalleryRegistry, ModalController, ModalEffect, ModalState};
pub use reveal::{Rect, RevealTracker, VisibilityPolicy};
