//! Page Section Component
//!
//! A top-level section: fades in on first sight, optionally folds away, and
//! hosts at most one gallery strip.

use dioxus::prelude::*;
use folio_core::reveal::VISIBLE_CLASS;
use folio_core::Section;

use super::{EntryList, GalleryStripView};
use crate::reveal_host::RevealHost;

#[component]
pub fn PageSection(
    section: Section,
    /// Document-order index of this section's gallery strip
    #[props(default)]
    strip_index: usize,
) -> Element {
    let mut reveal = use_context::<RevealHost>();
    let mut collapsed = use_signal(|| false);

    let revealed = reveal.is_revealed(&section.id);
    let class = if revealed { VISIBLE_CLASS } else { "" };
    let section_id = section.id.clone();

    rsx! {
        section {
            id: "{section.id}",
            class: "{class}",
            onmounted: move |evt: MountedEvent| reveal.register(section_id.clone(), evt.data()),

            if section.collapsible {
                button {
                    class: if collapsed() { "section-toggle collapsed" } else { "section-toggle" },
                    "aria-expanded": if collapsed() { "false" } else { "true" },
                    onclick: move |_| {
                        let current = collapsed();
                        collapsed.set(!current);
                    },
                    h2 { "{section.heading}" }
                    span { class: "chevron", "\u{25BE}" }
                }
            } else {
                h2 { "{section.heading}" }
            }

            if !collapsed() {
                EntryList { entries: section.entries.clone() }

                if let Some(strip) = &section.gallery {
                    GalleryStripView { strip: strip.clone(), strip_index }
                }
            }
        }
    }
}
