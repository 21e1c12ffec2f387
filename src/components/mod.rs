//! UI Components for the portfolio page.

mod download_button;
mod entry_list;
mod gallery_modal;
mod gallery_strip;
mod page_section;
mod text_block;

pub use download_button::{DownloadButton, PrintView};
pub use entry_list::EntryList;
pub use gallery_modal::GalleryModal;
pub use gallery_strip::GalleryStripView;
pub use page_section::PageSection;
pub use text_block::TextBlockView;
