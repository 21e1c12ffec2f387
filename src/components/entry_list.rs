//! Section entries in document order; consecutive list items share one `ul`.

use dioxus::prelude::*;
use folio_core::{entry_runs, Entry, EntryRun};

use super::TextBlockView;

#[component]
pub fn EntryList(entries: Vec<Entry>) -> Element {
    let runs = entry_runs(&entries);

    rsx! {
        for (i, run) in runs.into_iter().enumerate() {
            {match run {
                EntryRun::Block { heading, paragraphs } => rsx! {
                    div { key: "{i}", class: "entry",
                        if let Some(heading) = heading {
                            h3 { "{heading}" }
                        }
                        for (j, paragraph) in paragraphs.iter().enumerate() {
                            p { key: "{j}", TextBlockView { block: paragraph.clone() } }
                        }
                    }
                },
                EntryRun::Items(items) => rsx! {
                    ul { key: "{i}",
                        for (j, block) in items.into_iter().enumerate() {
                            li { key: "{j}", TextBlockView { block: block.clone() } }
                        }
                    }
                },
            }}
        }
    }
}
