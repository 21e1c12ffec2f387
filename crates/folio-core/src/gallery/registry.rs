//! Gallery registry built once from page content.
//!
//! Maps each gallery id to its ordered items. Thumbnails are read in document
//! order; each item prefers the thumbnail's explicit full-resolution source and
//! falls back to the thumbnail image itself.

use std::collections::HashMap;

use crate::content::{GalleryStrip, PageContent, Thumb};

/// Opaque handle to the thumbnail an item was built from.
///
/// `strip` is the document-order index of the gallery strip, `position` the
/// index of the thumbnail inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThumbHandle {
    strip: usize,
    position: usize,
}

impl ThumbHandle {
    pub fn new(strip: usize, position: usize) -> Self {
        Self { strip, position }
    }
}

/// One selectable image of a gallery.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryItem {
    source: String,
    alt_text: String,
    origin: ThumbHandle,
}

impl GalleryItem {
    fn from_thumb(thumb: &Thumb, origin: ThumbHandle) -> Self {
        let source = thumb
            .full_src
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| thumb.image.as_ref().map(|img| img.src.as_str()))
            .unwrap_or_default()
            .to_string();
        let alt_text = thumb
            .image
            .as_ref()
            .map(|img| img.alt.clone())
            .unwrap_or_default();

        Self {
            source,
            alt_text,
            origin,
        }
    }

    /// Full-resolution source shown in the modal
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn alt_text(&self) -> &str {
        &self.alt_text
    }

    pub fn origin(&self) -> ThumbHandle {
        self.origin
    }
}

/// Ordered, immutable sequence of items sharing a gallery id.
#[derive(Debug, Clone, PartialEq)]
pub struct Gallery {
    id: String,
    items: Vec<GalleryItem>,
}

impl Gallery {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&GalleryItem> {
        self.items.get(index)
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }
}

/// Where a thumbnail leads when activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbLocation<'a> {
    pub gallery_id: &'a str,
    pub index: usize,
}

/// All galleries of the page, keyed by id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GalleryRegistry {
    galleries: HashMap<String, Gallery>,
}

impl GalleryRegistry {
    /// Scan every gallery strip of the page in document order.
    pub fn scan(content: &PageContent) -> Self {
        Self::from_strips(content.gallery_strips())
    }

    /// Build from strips in document order.
    ///
    /// A strip without thumbnails registers an empty gallery. A strip reusing
    /// an earlier id replaces that gallery.
    pub fn from_strips<'a>(strips: impl IntoIterator<Item = &'a GalleryStrip>) -> Self {
        let mut galleries = HashMap::new();

        for (strip_index, strip) in strips.into_iter().enumerate() {
            let items: Vec<GalleryItem> = strip
                .thumbs
                .iter()
                .enumerate()
                .map(|(position, thumb)| {
                    GalleryItem::from_thumb(thumb, ThumbHandle::new(strip_index, position))
                })
                .collect();

            if items.is_empty() {
                tracing::debug!(gallery = %strip.id, "Gallery strip has no thumbnails");
            }

            let gallery = Gallery {
                id: strip.id.clone(),
                items,
            };
            if galleries.insert(strip.id.clone(), gallery).is_some() {
                tracing::warn!(gallery = %strip.id, "Duplicate gallery id, later strip wins");
            }
        }

        tracing::debug!(count = galleries.len(), "Gallery registry built");
        Self { galleries }
    }

    pub fn get(&self, gallery_id: &str) -> Option<&Gallery> {
        self.galleries.get(gallery_id)
    }

    pub fn len(&self) -> usize {
        self.galleries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.galleries.is_empty()
    }

    /// Resolve the thumbnail at `origin` of strip `gallery_id` to its item.
    ///
    /// Returns `None` for thumbnails whose strip was replaced by a later strip
    /// with the same id; such thumbnails stay inert.
    pub fn locate<'a>(&'a self, gallery_id: &str, origin: ThumbHandle) -> Option<ThumbLocation<'a>> {
        let gallery = self.galleries.get(gallery_id)?;
        let item = gallery.items.get(origin.position)?;
        (item.origin == origin).then(|| ThumbLocation {
            gallery_id: gallery.id.as_str(),
            index: origin.position,
        })
    }
}
