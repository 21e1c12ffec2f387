use dioxus::prelude::*;
use folio_core::reveal::FADE_IN_CSS;

use crate::components::{DownloadButton, GalleryModal, PageSection, PrintView};
use crate::context::get_app_config;
use crate::gallery_host::GalleryHost;
use crate::pdf::ExportStage;
use crate::reveal_host::RevealHost;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, the gallery and reveal hosts, and the export stage.
/// The page container doubles as the scroll viewport. Modal keys are heard at
/// the document level by the gallery host.
#[component]
pub fn App() -> Element {
    let content = &get_app_config().content;

    let gallery = GalleryHost::provide(content);
    let mut reveal = RevealHost::provide();
    let export_stage: Signal<ExportStage> = use_signal(ExportStage::default);
    use_context_provider(|| export_stage);

    let scroll_locked = gallery.scroll_locked;

    // Gallery strips are numbered in document order, matching the registry scan
    let mut strip_counter = 0usize;
    let sections: Vec<_> = content
        .sections
        .iter()
        .map(|section| {
            let strip_index = strip_counter;
            if section.gallery.is_some() {
                strip_counter += 1;
            }
            (section.id.clone(), section.clone(), strip_index)
        })
        .collect();

    rsx! {
        style { {GLOBAL_STYLES} }
        style { {FADE_IN_CSS} }

        div {
            class: if scroll_locked() { "page scroll-locked" } else { "page" },
            onmounted: move |evt: MountedEvent| reveal.set_viewport(evt.data()),
            onscroll: move |_| reveal.refresh(),
            onresize: move |_| reveal.refresh(),

            main { id: "profile-content",
                header { class: "page-header",
                    div {
                        h1 { "{content.title}" }
                        if let Some(tagline) = &content.tagline {
                            p { class: "tagline", "{tagline}" }
                        }
                    }
                    DownloadButton {}
                }

                for (id, section, strip_index) in sections {
                    PageSection { key: "{id}", section, strip_index }
                }
            }

            GalleryModal {}
            PrintView {}
        }
    }
}
