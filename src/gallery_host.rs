//! Gallery host: binds the core modal controller to the page.
//!
//! The controller decides; the host applies the returned effects. Signals are
//! `Copy`, so the host is passed around by value into event closures.

use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::gallery::{Command, GalleryRegistry, ModalController, ModalEffect, NavKey};
use folio_core::PageContent;

/// Image currently rewritten into the modal's display element.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DisplayedImage {
    pub src: String,
    pub alt: String,
}

/// Keys cancelled in the page while the modal is shown.
const MODAL_KEYS: [&str; 3] = ["Escape", "ArrowLeft", "ArrowRight"];

/// Forwards every keydown on the document to the host, whatever has focus.
fn key_listener_js() -> String {
    format!(
        r#"
document.addEventListener('keydown', (e) => {{
    const modal = document.getElementById('gallery-modal');
    if (modal && modal.classList.contains('open') && {keys}.includes(e.key)) {{
        e.preventDefault();
    }}
    dioxus.send(e.key);
}});
"#,
        keys = serde_json::json!(MODAL_KEYS),
    )
}

#[derive(Clone, Copy)]
pub struct GalleryHost {
    pub controller: Signal<ModalController>,
    pub displayed: Signal<DisplayedImage>,
    pub scroll_locked: Signal<bool>,
    pub close_button: Signal<Option<Rc<MountedData>>>,
}

impl GalleryHost {
    /// Build the registry from `content` and provide the host as context.
    pub fn provide(content: &PageContent) -> Self {
        let host = Self {
            controller: use_signal(|| ModalController::new(GalleryRegistry::scan(content))),
            displayed: use_signal(DisplayedImage::default),
            scroll_locked: use_signal(|| false),
            close_button: use_signal(|| None),
        };
        let host = use_context_provider(|| host);
        host.listen_document_keys();
        host
    }

    /// Route document-level keydowns into [`GalleryHost::key`] for the
    /// lifetime of the page.
    fn listen_document_keys(self) {
        use_effect(move || {
            let mut host = self;
            spawn(async move {
                let mut listener = document::eval(&key_listener_js());
                while let Ok(key) = listener.recv::<String>().await {
                    host.key(NavKey::from_dom_key(&key));
                }
                tracing::debug!("Document key listener stopped");
            });
        });
    }

    pub fn is_open(&self) -> bool {
        self.controller.read().is_open()
    }

    pub fn run(&mut self, command: Command) {
        let effects = self.controller.write().dispatch(command);
        self.apply(effects);
    }

    /// Document-level key; only acts while the modal subscription exists.
    pub fn key(&mut self, key: NavKey) -> bool {
        if self.controller.peek().subscription().is_none() {
            return false;
        }
        let effects = self.controller.write().handle_key(key);
        let handled = !effects.is_empty();
        self.apply(effects);
        handled
    }

    fn apply(&mut self, effects: Vec<ModalEffect>) {
        for effect in effects {
            match effect {
                ModalEffect::Show { source, alt } => {
                    self.displayed.set(DisplayedImage { src: source, alt });
                }
                ModalEffect::Preload(source) => preload(source),
                ModalEffect::FocusClose => self.focus_close(),
                ModalEffect::LockScroll => self.scroll_locked.set(true),
                ModalEffect::UnlockScroll => self.scroll_locked.set(false),
            }
        }
    }

    fn focus_close(&self) {
        let Some(button) = self.close_button.read().clone() else {
            return;
        };
        spawn(async move {
            if let Err(e) = button.set_focus(true).await {
                tracing::debug!("Could not focus close button: {:?}", e);
            }
        });
    }
}

/// Fire-and-forget fetch into a detached image; outcome is never observed.
fn preload(source: String) {
    let Ok(literal) = serde_json::to_string(&source) else {
        return;
    };
    let js = format!("(new Image()).src = {};", literal);
    spawn(async move {
        if let Err(e) = document::eval(&js).await {
            tracing::trace!("Preload script failed: {:?}", e);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_listener_is_document_level() {
        let js = key_listener_js();
        assert!(js.contains("document.addEventListener('keydown'"));
        assert!(js.contains("dioxus.send(e.key)"));
        assert!(js.contains(r#"["Escape","ArrowLeft","ArrowRight"]"#));
    }

    #[test]
    fn test_cancelled_keys_are_modal_keys() {
        for key in MODAL_KEYS {
            assert_ne!(NavKey::from_dom_key(key), NavKey::Other);
        }
    }
}
