//! PDF Download Components
//!
//! - `DownloadButton`: starts an export of the compacted profile
//! - `PrintView`: offscreen staging container, measured then handed to the
//!   converter

use dioxus::prelude::*;
use folio_core::export::{compact_for_print, ExportJob, PdfRenderer, PRINT_ENTRY_LIMIT};
use folio_core::PageContent;

use super::EntryList;
use crate::context::get_app_config;
use crate::pdf::{ExportStage, WebviewPdfRenderer, STAGING_ID};

#[component]
pub fn DownloadButton() -> Element {
    let mut stage = use_context::<Signal<ExportStage>>();
    let busy = stage.read().is_busy();

    rsx! {
        button {
            id: "download-btn",
            disabled: busy,
            onclick: move |_| {
                if stage.peek().is_busy() {
                    return;
                }
                let content = &get_app_config().content;
                tracing::info!("Staging profile for PDF export");
                stage.set(ExportStage::Measuring(compact_for_print(content, PRINT_ENTRY_LIMIT)));
            },
            if busy { "Preparing PDF..." } else { "Download PDF" }
        }
    }
}

/// Offscreen copy of the profile used for PDF export.
#[component]
pub fn PrintView() -> Element {
    let mut stage = use_context::<Signal<ExportStage>>();

    let current = stage.read().clone();
    match current {
        ExportStage::Idle => VNode::empty(),
        ExportStage::Measuring(content) => {
            let measured = content.clone();
            rsx! {
                div {
                    key: "measure",
                    id: STAGING_ID,
                    onmounted: move |evt: MountedEvent| {
                        let element = evt.data();
                        let content = measured.clone();
                        spawn(async move {
                            let height = match element.get_scroll_size().await {
                                Ok(size) => size.height,
                                Err(e) => {
                                    tracing::warn!("Could not measure staged profile: {:?}", e);
                                    0.0
                                }
                            };
                            let config = get_app_config();
                            let policy = config.export_scale.policy();
                            let job = ExportJob::prepare(&content, height, policy.as_ref(), config.filename.clone());
                            stage.set(ExportStage::Rendering(job));
                        });
                    },
                    PrintContent { content }
                }
            }
        }
        ExportStage::Rendering(job) => {
            let options = job.options.clone();
            rsx! {
                div {
                    key: "render",
                    id: STAGING_ID,
                    onmounted: move |_| {
                        let renderer = WebviewPdfRenderer { stage };
                        if let Err(e) = renderer.render(STAGING_ID, &options) {
                            tracing::error!("Could not start PDF export: {}", e);
                            stage.set(ExportStage::Idle);
                        }
                    },
                    PrintContent {
                        content: job.content.clone(),
                        content_style: job.style.content_style(),
                        heading_style: job.style.heading_style(),
                        section_style: job.style.section_style(),
                    }
                }
            }
        }
    }
}

#[component]
fn PrintContent(
    content: PageContent,
    /// Inline styles; empty while measuring
    #[props(default)]
    content_style: String,
    #[props(default)]
    heading_style: String,
    #[props(default)]
    section_style: String,
) -> Element {
    rsx! {
        div { style: "{content_style}",
            header { class: "page-header",
                div {
                    h1 { "{content.title}" }
                    if let Some(tagline) = &content.tagline {
                        p { class: "tagline", "{tagline}" }
                    }
                }
            }
            for sec in content.sections.iter() {
                section { key: "{sec.id}", style: "{section_style}",
                    h2 { style: "{heading_style}", "{sec.heading}" }
                    EntryList { entries: sec.entries.clone() }
                }
            }
        }
    }
}
