//! Single-page PDF export of the profile.
//!
//! Export works on a compacted copy of the page content: each section keeps
//! its first few entries and galleries are dropped. The copy is rendered
//! offscreen by the host, scaled according to a [`ScalePolicy`], and handed to
//! an external HTML-to-PDF converter together with [`Html2PdfOptions`].

use serde::{Deserialize, Serialize};

use crate::content::PageContent;

/// Entries kept per section in the printed profile.
pub const PRINT_ENTRY_LIMIT: usize = 3;

/// A4 page height in CSS pixels at 96 dpi.
pub const A4_HEIGHT_PX: f64 = 1122.0;

/// Width of the offscreen staging container, in CSS pixels.
pub const STAGING_WIDTH_PX: f64 = 800.0;

/// Clone `content` keeping at most `limit` entries per section.
pub fn compact_for_print(content: &PageContent, limit: usize) -> PageContent {
    let mut compact = content.clone();
    for section in &mut compact.sections {
        section.entries.truncate(limit);
        section.gallery = None;
        section.collapsible = false;
    }
    compact
}

/// Decides how far the staged profile is shrunk before rasterizing.
pub trait ScalePolicy: Send + Sync {
    /// Scale factor in `(0, 1]` for content `content_height_px` tall.
    fn scale_for(&self, content_height_px: f64) -> f64;
}

/// Shrink just enough to fit one page; never enlarge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoFit {
    pub page_height_px: f64,
}

impl Default for AutoFit {
    fn default() -> Self {
        Self {
            page_height_px: A4_HEIGHT_PX,
        }
    }
}

impl ScalePolicy for AutoFit {
    fn scale_for(&self, content_height_px: f64) -> f64 {
        if content_height_px <= 0.0 || !content_height_px.is_finite() {
            return 1.0;
        }
        (self.page_height_px / content_height_px).min(1.0)
    }
}

/// Always shrink by the same factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedScale(pub f64);

impl Default for FixedScale {
    fn default() -> Self {
        FixedScale(0.85)
    }
}

impl ScalePolicy for FixedScale {
    fn scale_for(&self, _content_height_px: f64) -> f64 {
        self.0.clamp(f64::MIN_POSITIVE, 1.0)
    }
}

/// Inline styles applied to the staged copy.
#[derive(Debug, Clone, PartialEq)]
pub struct CompactStyle {
    pub scale: f64,
    pub font_size: &'static str,
    pub line_height: &'static str,
    pub heading_font_size: &'static str,
    pub heading_margin_bottom: &'static str,
    pub section_spacing: &'static str,
}

impl CompactStyle {
    pub fn with_scale(scale: f64) -> Self {
        Self {
            scale,
            font_size: "12px",
            line_height: "1.3",
            heading_font_size: "0.9rem",
            heading_margin_bottom: "0.4rem",
            section_spacing: "0.9rem",
        }
    }

    /// Style for the content root: scaled from the top-left corner and
    /// widened so the scaled result still spans the container.
    pub fn content_style(&self) -> String {
        format!(
            "transform: scale({scale}); transform-origin: top left; width: {width}%; \
             font-size: {font}; line-height: {line}; margin: 0 auto;",
            scale = self.scale,
            width = 100.0 / self.scale,
            font = self.font_size,
            line = self.line_height,
        )
    }

    pub fn heading_style(&self) -> String {
        format!(
            "font-size: {}; margin-bottom: {};",
            self.heading_font_size, self.heading_margin_bottom
        )
    }

    pub fn section_style(&self) -> String {
        format!(
            "margin-bottom: {0}; padding-bottom: {0};",
            self.section_spacing
        )
    }
}

/// Options understood by the html2pdf converter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Html2PdfOptions {
    /// Page margin in `jspdf.unit`
    pub margin: f64,
    pub filename: String,
    pub image: ImageOptions,
    pub html2canvas: CanvasOptions,
    #[serde(rename = "jsPDF")]
    pub js_pdf: PageOptions,
    pub pagebreak: PageBreakOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageOptions {
    #[serde(rename = "type")]
    pub kind: String,
    pub quality: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasOptions {
    /// Raster scale relative to CSS pixels
    pub scale: f64,
    #[serde(rename = "useCORS")]
    pub use_cors: bool,
    pub scroll_y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageOptions {
    pub unit: String,
    pub format: String,
    pub orientation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageBreakOptions {
    pub mode: Vec<String>,
}

impl Html2PdfOptions {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            margin: 0.25,
            filename: filename.into(),
            image: ImageOptions {
                kind: "jpeg".to_string(),
                quality: 1.0,
            },
            html2canvas: CanvasOptions {
                scale: 2.0,
                use_cors: true,
                scroll_y: 0.0,
            },
            js_pdf: PageOptions {
                unit: "in".to_string(),
                format: "a4".to_string(),
                orientation: "portrait".to_string(),
            },
            pagebreak: PageBreakOptions {
                mode: vec!["avoid-all".to_string()],
            },
        }
    }
}

/// Default file name derived from the page title.
pub fn default_filename(title: &str) -> String {
    let slug: Vec<&str> = title.split_whitespace().collect();
    if slug.is_empty() {
        "Resume.pdf".to_string()
    } else {
        format!("{}-Resume.pdf", slug.join("-"))
    }
}

/// Everything the host needs to stage and convert one export.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportJob {
    pub content: PageContent,
    pub style: CompactStyle,
    pub options: Html2PdfOptions,
}

impl ExportJob {
    /// Prepare a job for content measured at `content_height_px` when staged
    /// unscaled.
    pub fn prepare(
        content: &PageContent,
        content_height_px: f64,
        policy: &dyn ScalePolicy,
        filename: impl Into<String>,
    ) -> Self {
        let scale = policy.scale_for(content_height_px);
        tracing::debug!(content_height_px, scale, "Prepared PDF export");
        Self {
            content: compact_for_print(content, PRINT_ENTRY_LIMIT),
            style: CompactStyle::with_scale(scale),
            options: Html2PdfOptions::new(filename),
        }
    }
}

/// External HTML-to-PDF capability.
///
/// `staging_id` is the DOM id of the offscreen container holding the staged
/// copy; the renderer removes it once the file is saved.
pub trait PdfRenderer {
    type Error: std::fmt::Display;

    fn render(&self, staging_id: &str, options: &Html2PdfOptions) -> Result<(), Self::Error>;
}
