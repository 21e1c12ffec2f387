//! Gallery lightbox subsystem.
//!
//! ```text
//! Input adapters ──▶ ModalController ──▶ Vec<ModalEffect> ──▶ host UI
//!                        │
//!                        └── reads GalleryRegistry
//! ```
//!
//! - [`registry`]: galleries scanned once from page content
//! - [`modal`]: open/closed state machine and cursor
//! - [`input`]: thumbnail, keyboard, backdrop and control adapters
//! - [`swipe`]: touch gesture interpretation

pub mod input;
pub mod modal;
pub mod registry;
pub mod swipe;

pub use input::{
    activate_thumb, backdrop_click, control_click, Activation, Command, ModalPart,
    ModalSubscription, NavKey, ThumbResponse,
};
pub use modal::{ModalController, ModalEffect, ModalState};
pub use registry::{Gallery, GalleryItem, GalleryRegistry, ThumbHandle, ThumbLocation};
pub use swipe::{SwipeTracker, TouchPoint, SWIPE_THRESHOLD_PX};
