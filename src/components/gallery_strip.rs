//! Gallery Strip Component
//!
//! Row of thumbnails for one gallery. Each thumbnail opens the modal at its
//! own index on click, Enter or Space.

use dioxus::prelude::*;
use folio_core::gallery::{activate_thumb, Activation, NavKey, ThumbHandle};
use folio_core::GalleryStrip;

use crate::context::use_gallery_host;

/// Thumbnail row
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     GalleryStripView { strip: section.gallery.clone().unwrap(), strip_index: 0 }
/// }
/// ```
#[component]
pub fn GalleryStripView(
    /// Gallery strip from page content
    strip: GalleryStrip,
    /// Document-order index of this strip among all strips
    strip_index: usize,
) -> Element {
    let host = use_gallery_host();

    rsx! {
        div {
            class: "gallery-strip",
            "data-gallery": "{strip.id}",

            for (position, thumb) in strip.thumbs.iter().enumerate() {
                {
                    // Thumbnails of a strip shadowed by a later duplicate id stay inert
                    let target = host
                        .controller
                        .peek()
                        .registry()
                        .locate(&strip.id, ThumbHandle::new(strip_index, position))
                        .map(|loc| (loc.gallery_id.to_string(), loc.index));
                    let on_click = {
                        let target = target.clone();
                        let mut host = host;
                        move |_: MouseEvent| {
                            if let Some((gallery_id, index)) = &target {
                                if let Some(resp) = activate_thumb(gallery_id, *index, Activation::Click) {
                                    host.run(resp.command);
                                }
                            }
                        }
                    };
                    let on_keydown = {
                        let target = target.clone();
                        let mut host = host;
                        move |evt: KeyboardEvent| {
                            let Some((gallery_id, index)) = &target else {
                                return;
                            };
                            let key = NavKey::from_dom_key(&evt.key().to_string());
                            if let Some(resp) = activate_thumb(gallery_id, *index, Activation::Key(key)) {
                                if resp.prevent_default {
                                    evt.prevent_default();
                                }
                                host.run(resp.command);
                            }
                        }
                    };
                    let (src, alt) = thumb
                        .image
                        .as_ref()
                        .map(|img| (img.src.clone(), img.alt.clone()))
                        .unwrap_or_default();

                    rsx! {
                        div {
                            key: "{position}",
                            class: "thumb",
                            tabindex: "0",
                            role: "button",
                            "data-src": thumb.full_src.clone().unwrap_or_default(),
                            onclick: on_click,
                            onkeydown: on_keydown,

                            if !src.is_empty() {
                                img { src: "{src}", alt: "{alt}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
