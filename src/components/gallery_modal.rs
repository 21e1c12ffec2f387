//! Gallery Modal Component
//!
//! Full-screen lightbox for the gallery host. Always mounted; the `open`
//! class and `aria-hidden` follow the controller state.

use dioxus::prelude::*;
use folio_core::gallery::{backdrop_click, control_click, ModalPart, SwipeTracker, TouchPoint as SwipePoint};

use crate::context::use_gallery_host;

fn first_point(points: Vec<TouchPoint>) -> Option<SwipePoint> {
    points.first().map(|p| {
        let client = p.client_coordinates();
        SwipePoint::new(client.x, client.y)
    })
}

/// Controls leave the tab order while the modal is hidden.
fn control_tabindex(is_open: bool) -> &'static str {
    if is_open {
        "0"
    } else {
        "-1"
    }
}

/// Gallery lightbox
///
/// Clicks on the overlay itself close the modal; clicks on the image or the
/// controls never bubble up to it.
#[component]
pub fn GalleryModal() -> Element {
    let host = use_gallery_host();
    let mut swipe = use_signal(SwipeTracker::new);

    let is_open = host.is_open();
    let displayed = host.displayed.read().clone();
    let tabindex = control_tabindex(is_open);

    let on_part = move |part: ModalPart| {
        let mut host = host;
        move |evt: MouseEvent| {
            if part != ModalPart::Overlay {
                evt.stop_propagation();
            }
            let command = match part {
                ModalPart::Overlay | ModalPart::Image => backdrop_click(part),
                _ => control_click(part),
            };
            if let Some(command) = command {
                host.run(command);
            }
        }
    };

    rsx! {
        div {
            id: "gallery-modal",
            class: if is_open { "open" } else { "" },
            role: "dialog",
            "aria-modal": "true",
            "aria-hidden": if is_open { "false" } else { "true" },
            onclick: on_part(ModalPart::Overlay),

            button {
                id: "modal-close",
                "aria-label": "Close",
                tabindex,
                onmounted: move |evt: MountedEvent| {
                    let mut close_button = host.close_button;
                    close_button.set(Some(evt.data()));
                },
                onclick: on_part(ModalPart::CloseButton),
                "\u{00D7}"
            }

            button {
                id: "modal-prev",
                "aria-label": "Previous image",
                tabindex,
                onclick: on_part(ModalPart::PrevButton),
                "\u{2039}"
            }

            img {
                id: "gallery-modal-img",
                src: "{displayed.src}",
                alt: "{displayed.alt}",
                draggable: "false",
                onclick: on_part(ModalPart::Image),
                ondragstart: move |evt: DragEvent| evt.prevent_default(),
                ontouchstart: move |evt: TouchEvent| {
                    swipe.write().touch_start(first_point(evt.touches()));
                },
                ontouchmove: move |evt: TouchEvent| {
                    swipe.write().touch_move(first_point(evt.touches()));
                },
                ontouchend: move |evt: TouchEvent| {
                    let command = swipe.write().touch_end(first_point(evt.touches_changed()));
                    if let Some(command) = command {
                        let mut host = host;
                        host.run(command);
                    }
                },
                ontouchcancel: move |_: TouchEvent| swipe.write().touch_cancel(),
            }

            button {
                id: "modal-next",
                "aria-label": "Next image",
                tabindex,
                onclick: on_part(ModalPart::NextButton),
                "\u{203A}"
            }
        }
    }
}
