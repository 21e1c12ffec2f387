//! Reveal host: feeds measured section rectangles into the core tracker.

use std::rc::Rc;

use dioxus::html::geometry::PixelsRect;
use dioxus::prelude::*;
use folio_core::reveal::{Rect, RevealTracker};

fn to_rect(rect: PixelsRect) -> Rect {
    Rect::new(rect.origin.x, rect.origin.y, rect.size.width, rect.size.height)
}

#[derive(Clone, Copy)]
pub struct RevealHost {
    tracker: Signal<RevealTracker>,
    sections: Signal<Vec<(String, Rc<MountedData>)>>,
    viewport: Signal<Option<Rc<MountedData>>>,
}

impl RevealHost {
    pub fn provide() -> Self {
        let host = Self {
            tracker: use_signal(RevealTracker::default),
            sections: use_signal(Vec::new),
            viewport: use_signal(|| None),
        };
        use_context_provider(|| host)
    }

    /// Reactive: re-renders the caller once the section is revealed.
    pub fn is_revealed(&self, section_id: &str) -> bool {
        self.tracker.read().is_revealed(section_id)
    }

    pub fn set_viewport(&mut self, element: Rc<MountedData>) {
        self.viewport.set(Some(element));
        self.refresh();
    }

    pub fn register(&mut self, section_id: String, element: Rc<MountedData>) {
        self.sections.write().push((section_id, element));
        self.refresh();
    }

    /// Measure every section not yet revealed against the viewport.
    pub fn refresh(&self) {
        let Some(viewport) = self.viewport.peek().clone() else {
            return;
        };
        let pending: Vec<(String, Rc<MountedData>)> = {
            let tracker = self.tracker.peek();
            self.sections
                .peek()
                .iter()
                .filter(|(id, _)| !tracker.is_revealed(id))
                .cloned()
                .collect()
        };
        if pending.is_empty() {
            return;
        }

        let mut tracker = self.tracker;
        spawn(async move {
            let Ok(viewport) = viewport.get_client_rect().await else {
                return;
            };
            let viewport = to_rect(viewport);
            for (id, element) in pending {
                let Ok(rect) = element.get_client_rect().await else {
                    continue;
                };
                let rect = to_rect(rect);
                if tracker.peek().policy().is_visible(&rect, &viewport) {
                    tracker.write().observe(&id, &rect, &viewport);
                }
            }
        });
    }
}
