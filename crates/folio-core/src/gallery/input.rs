//! Input adapters.
//!
//! Thumbnail activation, global keys, backdrop clicks and control buttons are
//! normalized into a single [`Command`] vocabulary consumed by the modal
//! controller. Touch gestures live in [`super::swipe`].

/// Abstract modal command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open a gallery; `None` index means the first item
    Open {
        gallery_id: String,
        index: Option<usize>,
    },
    Next,
    Prev,
    Close,
}

impl Command {
    pub fn open(gallery_id: impl Into<String>, index: usize) -> Self {
        Command::Open {
            gallery_id: gallery_id.into(),
            index: Some(index),
        }
    }
}

/// Keys the gallery reacts to. Everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Enter,
    Space,
    Escape,
    ArrowLeft,
    ArrowRight,
    Other,
}

impl NavKey {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "Enter" => NavKey::Enter,
            " " | "Spacebar" => NavKey::Space,
            "Escape" | "Esc" => NavKey::Escape,
            "ArrowLeft" => NavKey::ArrowLeft,
            "ArrowRight" => NavKey::ArrowRight,
            _ => NavKey::Other,
        }
    }
}

/// How a thumbnail was activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Primary pointer click
    Click,
    /// Key pressed while the thumbnail has focus
    Key(NavKey),
}

/// Result of activating a thumbnail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbResponse {
    pub command: Command,
    /// The host must cancel the event's default action (page scroll on Space)
    pub prevent_default: bool,
}

/// Thumbnail adapter: click, Enter or Space open the gallery at the
/// thumbnail's index. Any other key is ignored.
pub fn activate_thumb(gallery_id: &str, index: usize, activation: Activation) -> Option<ThumbResponse> {
    let prevent_default = match activation {
        Activation::Click => false,
        Activation::Key(NavKey::Enter) | Activation::Key(NavKey::Space) => true,
        Activation::Key(_) => return None,
    };
    Some(ThumbResponse {
        command: Command::open(gallery_id, index),
        prevent_default,
    })
}

/// Parts of the modal a click can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalPart {
    /// The overlay root itself
    Overlay,
    Image,
    CloseButton,
    PrevButton,
    NextButton,
}

/// Backdrop adapter: only a click whose direct target is the overlay root
/// closes. Children of the overlay never close it.
pub fn backdrop_click(target: ModalPart) -> Option<Command> {
    (target == ModalPart::Overlay).then_some(Command::Close)
}

/// Control button adapter.
pub fn control_click(target: ModalPart) -> Option<Command> {
    match target {
        ModalPart::CloseButton => Some(Command::Close),
        ModalPart::PrevButton => Some(Command::Prev),
        ModalPart::NextButton => Some(Command::Next),
        ModalPart::Overlay | ModalPart::Image => None,
    }
}

/// Global keyboard adapter.
///
/// Only obtainable from the controller while the modal is open, so an
/// instance existing means the modal is listening.
#[derive(Debug, PartialEq, Eq)]
pub struct ModalSubscription {
    _private: (),
}

impl ModalSubscription {
    pub(crate) fn new() -> Self {
        Self { _private: () }
    }

    pub fn map_key(&self, key: NavKey) -> Option<Command> {
        match key {
            NavKey::Escape => Some(Command::Close),
            NavKey::ArrowRight => Some(Command::Next),
            NavKey::ArrowLeft => Some(Command::Prev),
            NavKey::Enter | NavKey::Space | NavKey::Other => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dom_key_mapping() {
        assert_eq!(NavKey::from_dom_key("Enter"), NavKey::Enter);
        assert_eq!(NavKey::from_dom_key(" "), NavKey::Space);
        assert_eq!(NavKey::from_dom_key("Escape"), NavKey::Escape);
        assert_eq!(NavKey::from_dom_key("ArrowLeft"), NavKey::ArrowLeft);
        assert_eq!(NavKey::from_dom_key("ArrowRight"), NavKey::ArrowRight);
        assert_eq!(NavKey::from_dom_key("a"), NavKey::Other);
    }

    #[test]
    fn test_thumb_click_opens_without_prevent_default() {
        let resp = activate_thumb("work", 2, Activation::Click).unwrap();
        assert_eq!(resp.command, Command::open("work", 2));
        assert!(!resp.prevent_default);
    }

    #[test]
    fn test_thumb_space_suppresses_scroll() {
        let resp = activate_thumb("work", 0, Activation::Key(NavKey::Space)).unwrap();
        assert_eq!(resp.command, Command::open("work", 0));
        assert!(resp.prevent_default);

        let resp = activate_thumb("work", 1, Activation::Key(NavKey::Enter)).unwrap();
        assert!(resp.prevent_default);
    }

    #[test]
    fn test_thumb_other_keys_ignored() {
        assert!(activate_thumb("work", 0, Activation::Key(NavKey::Escape)).is_none());
        assert!(activate_thumb("work", 0, Activation::Key(NavKey::Other)).is_none());
    }

    #[test]
    fn test_backdrop_identity_hit_test() {
        assert_eq!(backdrop_click(ModalPart::Overlay), Some(Command::Close));
        assert_eq!(backdrop_click(ModalPart::Image), None);
        assert_eq!(backdrop_click(ModalPart::CloseButton), None);
        assert_eq!(backdrop_click(ModalPart::NextButton), None);
    }

    #[test]
    fn test_control_buttons() {
        assert_eq!(control_click(ModalPart::CloseButton), Some(Command::Close));
        assert_eq!(control_click(ModalPart::PrevButton), Some(Command::Prev));
        assert_eq!(control_click(ModalPart::NextButton), Some(Command::Next));
        assert_eq!(control_click(ModalPart::Image), None);
    }

    #[test]
    fn test_subscription_keys() {
        let sub = ModalSubscription::new();
        assert_eq!(sub.map_key(NavKey::Escape), Some(Command::Close));
        assert_eq!(sub.map_key(NavKey::ArrowRight), Some(Command::Next));
        assert_eq!(sub.map_key(NavKey::ArrowLeft), Some(Command::Prev));
        assert_eq!(sub.map_key(NavKey::Enter), None);
    }
}
