//! Shared page context for Folio.
//!
//! Holds the page configuration set from the command line and the hooks
//! child components use to reach the gallery host.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! let host = GalleryHost::provide(&config.content);
//!
//! // In child components
//! let host = use_gallery_host();
//! host.run(Command::Next);
//! ```

use std::str::FromStr;

use dioxus::prelude::*;
use folio_core::export::{default_filename, AutoFit, FixedScale, ScalePolicy};
use folio_core::PageContent;

use crate::gallery_host::GalleryHost;

/// How the PDF export shrinks the staged profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExportScale {
    /// Fit to one A4 page
    Auto,
    /// Fixed factor
    Fixed(f64),
}

impl ExportScale {
    pub fn policy(&self) -> Box<dyn ScalePolicy> {
        match *self {
            ExportScale::Auto => Box::new(AutoFit::default()),
            ExportScale::Fixed(factor) => Box::new(FixedScale(factor)),
        }
    }
}

impl FromStr for ExportScale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("auto") {
            return Ok(ExportScale::Auto);
        }
        match s.parse::<f64>() {
            Ok(factor) if factor > 0.0 && factor <= 1.0 => Ok(ExportScale::Fixed(factor)),
            Ok(factor) => Err(format!("scale must be in (0, 1], got {}", factor)),
            Err(_) => Err(format!("expected \"auto\" or a number, got \"{}\"", s)),
        }
    }
}

/// Page configuration resolved at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub content: PageContent,
    pub export_scale: ExportScale,
    pub filename: String,
}

impl AppConfig {
    pub fn with_content(content: PageContent) -> Self {
        let filename = default_filename(&content.title);
        Self {
            content,
            export_scale: ExportScale::Auto,
            filename,
        }
    }
}

/// Get the page configuration.
pub fn get_app_config() -> &'static AppConfig {
    crate::get_app_config()
}

/// Hook to access the gallery host from context.
pub fn use_gallery_host() -> GalleryHost {
    use_context::<GalleryHost>()
}
