//! PDF export through html2pdf running inside the webview.

use dioxus::prelude::*;
use folio_core::export::{ExportJob, Html2PdfOptions, PdfRenderer};
use folio_core::PageContent;

const HTML2PDF_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/html2pdf.js/0.10.1/html2pdf.bundle.min.js";

/// DOM id of the offscreen container the profile is staged in.
pub const STAGING_ID: &str = "pdf-staging";

/// Progress of a PDF export.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ExportStage {
    #[default]
    Idle,
    /// Compacted copy staged unscaled so its height can be measured
    Measuring(PageContent),
    /// Scaled copy staged and handed to the converter
    Rendering(ExportJob),
}

impl ExportStage {
    pub fn is_busy(&self) -> bool {
        !matches!(self, ExportStage::Idle)
    }
}

/// Hands the staged container to html2pdf, loading the library on first use.
/// The stage returns to idle once the file is saved or conversion fails.
pub struct WebviewPdfRenderer {
    pub stage: Signal<ExportStage>,
}

impl PdfRenderer for WebviewPdfRenderer {
    type Error = serde_json::Error;

    fn render(&self, staging_id: &str, options: &Html2PdfOptions) -> Result<(), Self::Error> {
        let options_json = serde_json::to_string(options)?;
        let id_json = serde_json::to_string(staging_id)?;
        let url_json = serde_json::to_string(HTML2PDF_URL)?;
        let js = format!(
            r#"
            const load = () => new Promise((resolve, reject) => {{
                if (window.html2pdf) {{ resolve(); return; }}
                const s = document.createElement('script');
                s.src = {url};
                s.onload = resolve;
                s.onerror = reject;
                document.head.appendChild(s);
            }});
            await load();
            await html2pdf().set({options}).from(document.getElementById({id})).save();
            return true;
            "#,
            url = url_json,
            options = options_json,
            id = id_json,
        );

        let filename = options.filename.clone();
        let mut stage = self.stage;
        spawn(async move {
            match document::eval(&js).await {
                Ok(_) => tracing::info!(file = %filename, "PDF saved"),
                Err(e) => tracing::warn!(file = %filename, "PDF export failed: {:?}", e),
            }
            stage.set(ExportStage::Idle);
        });
        Ok(())
    }
}
