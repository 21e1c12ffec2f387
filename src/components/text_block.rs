//! Text run with an optional trailing link.

use dioxus::prelude::*;
use folio_core::TextBlock;

#[component]
pub fn TextBlockView(block: TextBlock) -> Element {
    rsx! {
        "{block.text}"
        if let Some(link) = &block.link {
            " "
            a { href: "{link.href}", "{link.label}" }
        }
    }
}
