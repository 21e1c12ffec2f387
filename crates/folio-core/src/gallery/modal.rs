//! Modal controller: the gallery lightbox state machine.
//!
//! ## State machine
//!
//! ```text
//!            open(valid gallery)
//!   Closed ───────────────────────▶ Open ◀──┐
//!     ▲  │                           │      │ next / prev
//!     │  └─ open(unknown/empty) ─┐   │      │
//!     │         (soft-fail)      │   └──────┘
//!     │◀─────────────────────────┘
//!     └──────────── close ───────────── Open
//! ```
//!
//! The controller owns the [`ModalState`] and is its only writer. It never
//! touches the UI; each operation returns the [`ModalEffect`]s the host must
//! apply in order.

use super::input::{Command, ModalSubscription, NavKey};
use super::registry::{Gallery, GalleryItem, GalleryRegistry};

/// Cursor of the modal.
///
/// `active_gallery_id` is `None` exactly when the modal is closed; when open,
/// `active_index` is in bounds for the active gallery.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    is_open: bool,
    active_gallery_id: Option<String>,
    active_index: usize,
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn active_gallery_id(&self) -> Option<&str> {
        self.active_gallery_id.as_deref()
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalEffect {
    /// Rewrite the display image
    Show { source: String, alt: String },
    /// Fetch a neighbor in the background; failures are ignored
    Preload(String),
    /// Move input focus to the close control
    FocusClose,
    /// Suppress page scroll while open
    LockScroll,
    /// Restore page scroll
    UnlockScroll,
}

pub struct ModalController {
    registry: GalleryRegistry,
    state: ModalState,
    subscription: Option<ModalSubscription>,
}

impl ModalController {
    pub fn new(registry: GalleryRegistry) -> Self {
        Self {
            registry,
            state: ModalState::default(),
            subscription: None,
        }
    }

    pub fn registry(&self) -> &GalleryRegistry {
        &self.registry
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    /// Global keyboard subscription; only present while open.
    pub fn subscription(&self) -> Option<&ModalSubscription> {
        self.subscription.as_ref()
    }

    /// Item currently shown, if open.
    pub fn current_item(&self) -> Option<&GalleryItem> {
        self.active_gallery()?.get(self.state.active_index)
    }

    fn active_gallery(&self) -> Option<&Gallery> {
        let id = self.state.active_gallery_id.as_deref()?;
        self.registry.get(id)
    }

    /// Apply an adapter command.
    pub fn dispatch(&mut self, command: Command) -> Vec<ModalEffect> {
        match command {
            Command::Open { gallery_id, index } => self.open(&gallery_id, index),
            Command::Next => self.next(),
            Command::Prev => self.prev(),
            Command::Close => self.close(),
        }
    }

    /// Route a document-level key through the subscription, if any.
    pub fn handle_key(&mut self, key: NavKey) -> Vec<ModalEffect> {
        match self.subscription.as_ref().and_then(|sub| sub.map_key(key)) {
            Some(command) => self.dispatch(command),
            None => Vec::new(),
        }
    }

    /// Open `gallery_id` at `index` (first item when `None`).
    ///
    /// Unknown or empty galleries leave the modal untouched. An index past
    /// the end wraps around the gallery length.
    pub fn open(&mut self, gallery_id: &str, index: Option<usize>) -> Vec<ModalEffect> {
        let len = match self.registry.get(gallery_id) {
            Some(gallery) if !gallery.is_empty() => gallery.len(),
            _ => {
                tracing::debug!(gallery = gallery_id, "Ignoring open of unknown or empty gallery");
                return Vec::new();
            }
        };

        let requested = index.unwrap_or(0);
        let index = if requested < len { requested } else { requested % len };

        self.state = ModalState {
            is_open: true,
            active_gallery_id: Some(gallery_id.to_string()),
            active_index: index,
        };
        self.subscription = Some(ModalSubscription::new());
        tracing::debug!(gallery = gallery_id, index, "Gallery modal opened");

        let mut effects = self.image_update();
        effects.push(ModalEffect::FocusClose);
        effects.push(ModalEffect::LockScroll);
        effects
    }

    /// Close and reset the cursor. Safe to call in any state.
    pub fn close(&mut self) -> Vec<ModalEffect> {
        if self.state.is_open {
            tracing::debug!(gallery = ?self.state.active_gallery_id, "Gallery modal closed");
        }
        self.state = ModalState::default();
        self.subscription = None;
        vec![ModalEffect::UnlockScroll]
    }

    pub fn next(&mut self) -> Vec<ModalEffect> {
        self.step(|index, len| (index + 1) % len)
    }

    pub fn prev(&mut self) -> Vec<ModalEffect> {
        self.step(|index, len| (index + len - 1) % len)
    }

    fn step(&mut self, advance: impl FnOnce(usize, usize) -> usize) -> Vec<ModalEffect> {
        let Some(len) = self.active_gallery().map(Gallery::len).filter(|&n| n > 0) else {
            return Vec::new();
        };
        self.state.active_index = advance(self.state.active_index, len);
        tracing::trace!(index = self.state.active_index, "Gallery modal moved");
        self.image_update()
    }

    /// Show the current item and preload both wrapped neighbors.
    fn image_update(&self) -> Vec<ModalEffect> {
        let Some(gallery) = self.active_gallery() else {
            return Vec::new();
        };
        let len = gallery.len();
        let index = self.state.active_index;
        let Some(item) = gallery.get(index) else {
            return Vec::new();
        };

        let mut effects = vec![ModalEffect::Show {
            source: item.source().to_string(),
            alt: item.alt_text().to_string(),
        }];

        let neighbors = [(index + 1) % len, (index + len - 1) % len];
        for neighbor in neighbors {
            if let Some(source) = gallery.get(neighbor).map(GalleryItem::source) {
                if !source.is_empty() {
                    effects.push(ModalEffect::Preload(source.to_string()));
                }
            }
        }
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{GalleryStrip, Thumb, ThumbImage};

    fn registry(galleries: &[(&str, &[&str])]) -> GalleryRegistry {
        let strips: Vec<GalleryStrip> = galleries
            .iter()
            .map(|(id, sources)| GalleryStrip {
                id: id.to_string(),
                thumbs: sources
                    .iter()
                    .map(|src| Thumb {
                        full_src: None,
                        image: Some(ThumbImage {
                            src: src.to_string(),
                            alt: format!("alt {}", src),
                        }),
                    })
                    .collect(),
            })
            .collect();
        GalleryRegistry::from_strips(&strips)
    }

    fn controller() -> ModalController {
        ModalController::new(registry(&[("portfolio", &["A", "B", "C"]), ("empty", &[])]))
    }

    #[test]
    fn test_starts_closed() {
        let c = controller();
        assert!(!c.is_open());
        assert_eq!(c.state().active_gallery_id(), None);
        assert!(c.subscription().is_none());
        assert!(c.current_item().is_none());
    }

    #[test]
    fn test_open_effects() {
        let mut c = controller();
        let effects = c.open("portfolio", Some(1));
        assert_eq!(
            effects,
            vec![
                ModalEffect::Show {
                    source: "B".to_string(),
                    alt: "alt B".to_string()
                },
                ModalEffect::Preload("C".to_string()),
                ModalEffect::Preload("A".to_string()),
                ModalEffect::FocusClose,
                ModalEffect::LockScroll,
            ]
        );
        assert!(c.subscription().is_some());
    }

    #[test]
    fn test_open_defaults_to_first_item() {
        let mut c = controller();
        c.open("portfolio", None);
        assert_eq!(c.state().active_index(), 0);
        assert_eq!(c.current_item().unwrap().source(), "A");
    }

    #[test]
    fn test_open_out_of_range_wraps() {
        let mut c = controller();
        c.open("portfolio", Some(4));
        assert_eq!(c.state().active_index(), 1);
    }

    #[test]
    fn test_open_unknown_or_empty_is_noop() {
        let mut c = controller();
        assert!(c.open("missing", Some(0)).is_empty());
        assert!(c.open("empty", None).is_empty());
        assert_eq!(c.state(), &ModalState::default());
        assert!(c.subscription().is_none());
    }

    #[test]
    fn test_open_unknown_while_open_keeps_cursor() {
        let mut c = controller();
        c.open("portfolio", Some(2));
        c.open("missing", Some(0));
        assert!(c.is_open());
        assert_eq!(c.state().active_gallery_id(), Some("portfolio"));
        assert_eq!(c.state().active_index(), 2);
    }

    #[test]
    fn test_next_prev_closed_are_noops() {
        let mut c = controller();
        assert!(c.next().is_empty());
        assert!(c.prev().is_empty());
        assert_eq!(c.state(), &ModalState::default());
    }

    #[test]
    fn test_close_resets_and_unlocks() {
        let mut c = controller();
        c.open("portfolio", Some(2));
        assert_eq!(c.close(), vec![ModalEffect::UnlockScroll]);
        assert_eq!(c.state(), &ModalState::default());
        assert!(c.subscription().is_none());
    }

    #[test]
    fn test_keys_only_while_open() {
        let mut c = controller();
        assert!(c.handle_key(NavKey::ArrowRight).is_empty());
        assert_eq!(c.state().active_index(), 0);

        c.open("portfolio", Some(0));
        c.handle_key(NavKey::ArrowRight);
        assert_eq!(c.state().active_index(), 1);
        c.handle_key(NavKey::ArrowLeft);
        c.handle_key(NavKey::ArrowLeft);
        assert_eq!(c.state().active_index(), 2);
        c.handle_key(NavKey::Escape);
        assert!(!c.is_open());
    }

    #[test]
    fn test_single_item_gallery_preloads_itself() {
        let mut c = ModalController::new(registry(&[("solo", &["only"])]));
        let effects = c.open("solo", None);
        let preloads: Vec<_> = effects
            .iter()
            .filter(|e| matches!(e, ModalEffect::Preload(_)))
            .collect();
        assert_eq!(preloads.len(), 2);
        c.next();
        assert_eq!(c.state().active_index(), 0);
    }

    #[test]
    fn test_empty_source_not_preloaded() {
        let strips = vec![GalleryStrip {
            id: "g".to_string(),
            thumbs: vec![
                Thumb {
                    full_src: None,
                    image: None,
                },
                Thumb {
                    full_src: Some("x.jpg".to_string()),
                    image: None,
                },
            ],
        }];
        let mut c = ModalController::new(GalleryRegistry::from_strips(&strips));
        let effects = c.open("g", Some(1));
        assert_eq!(
            effects[0],
            ModalEffect::Show {
                source: "x.jpg".to_string(),
                alt: String::new()
            }
        );
        assert!(!effects.contains(&ModalEffect::Preload(String::new())));
    }
}
