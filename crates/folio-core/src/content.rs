//! Page content model.
//!
//! The portfolio page is described by a declarative JSON document. Sections
//! hold text entries and optionally one gallery strip; the gallery strip is the
//! data the gallery registry is built from.
//!
//! ## Example
//!
//! ```json
//! {
//!   "title": "Jane Doe",
//!   "sections": [
//!     {
//!       "id": "work",
//!       "heading": "Selected Work",
//!       "entries": [{ "kind": "item", "text": "Brand identity for a bakery" }],
//!       "gallery": {
//!         "id": "portfolio",
//!         "thumbs": [
//!           { "full_src": "img/a-full.jpg", "image": { "src": "img/a.jpg", "alt": "A" } }
//!         ]
//!       }
//!     }
//!   ]
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};
use crate::typography::bind_last_words;

/// Whole page: header plus ordered sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageContent {
    /// Page title (rendered as the h1)
    pub title: String,
    /// Optional line under the title
    #[serde(default)]
    pub tagline: Option<String>,
    /// Sections in document order
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// A top-level section of the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Page-unique identifier, also used as the DOM id
    pub id: String,
    /// Section heading (rendered as h2)
    pub heading: String,
    /// Entries in document order
    #[serde(default)]
    pub entries: Vec<Entry>,
    /// Whether the section can be folded away
    #[serde(default)]
    pub collapsible: bool,
    /// Optional gallery strip shown below the entries
    #[serde(default)]
    pub gallery: Option<GalleryStrip>,
}

/// One entry of a section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Entry {
    /// A block with an optional h3 and paragraphs
    Block {
        #[serde(default)]
        heading: Option<String>,
        #[serde(default)]
        paragraphs: Vec<TextBlock>,
    },
    /// A single list item
    Item(TextBlock),
}

/// A run of text, optionally followed by a link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    pub text: String,
    #[serde(default)]
    pub link: Option<Link>,
}

impl TextBlock {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: None,
        }
    }

    /// Widow prevention for this block; blocks carrying a link are left as is.
    fn bind_last_words(&mut self) {
        if self.link.is_none() {
            self.text = bind_last_words(&self.text);
        }
    }
}

/// Entries as they are laid out: blocks stand alone, consecutive items share
/// one list.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryRun<'a> {
    Block {
        heading: Option<&'a str>,
        paragraphs: &'a [TextBlock],
    },
    Items(Vec<&'a TextBlock>),
}

impl EntryRun<'_> {
    /// Number of entries this run stands for.
    pub fn len(&self) -> usize {
        match self {
            EntryRun::Block { .. } => 1,
            EntryRun::Items(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Group `entries` into runs without reordering them.
pub fn entry_runs(entries: &[Entry]) -> Vec<EntryRun<'_>> {
    let mut runs = Vec::new();
    for entry in entries {
        match entry {
            Entry::Block {
                heading,
                paragraphs,
            } => runs.push(EntryRun::Block {
                heading: heading.as_deref(),
                paragraphs,
            }),
            Entry::Item(block) => match runs.last_mut() {
                Some(EntryRun::Items(items)) => items.push(block),
                _ => runs.push(EntryRun::Items(vec![block])),
            },
        }
    }
    runs
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

/// A gallery strip: the container carrying the gallery identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryStrip {
    /// Gallery identifier, unique per page
    pub id: String,
    /// Thumbnails in document order
    #[serde(default)]
    pub thumbs: Vec<Thumb>,
}

/// A thumbnail inside a gallery strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thumb {
    /// Explicit full-resolution source, preferred over the thumbnail image
    #[serde(default)]
    pub full_src: Option<String>,
    /// Nested thumbnail image; fallback source and alt text
    #[serde(default)]
    pub image: Option<ThumbImage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThumbImage {
    pub src: String,
    #[serde(default)]
    pub alt: String,
}

impl PageContent {
    /// Parse a content document from JSON text.
    pub fn from_json(json: &str) -> FolioResult<Self> {
        let content: PageContent = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    /// Read and parse a content document from disk.
    pub fn load(path: impl AsRef<Path>) -> FolioResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let content = Self::from_json(&json)?;
        tracing::info!(
            path = %path.display(),
            sections = content.sections.len(),
            "Loaded page content"
        );
        Ok(content)
    }

    /// Section ids become DOM ids and reveal keys, so they must be unique.
    fn validate(&self) -> FolioResult<()> {
        let mut seen = HashSet::new();
        for section in &self.sections {
            if section.id.trim().is_empty() {
                return Err(FolioError::InvalidContent(format!(
                    "section '{}' has an empty id",
                    section.heading
                )));
            }
            if !seen.insert(section.id.as_str()) {
                return Err(FolioError::InvalidContent(format!(
                    "duplicate section id: {}",
                    section.id
                )));
            }
        }
        Ok(())
    }

    /// Gallery strips in document order.
    pub fn gallery_strips(&self) -> impl Iterator<Item = &GalleryStrip> {
        self.sections.iter().filter_map(|s| s.gallery.as_ref())
    }

    /// Bind the last two words of every heading, paragraph and list item
    /// with a non-breaking space. Text blocks carrying a link are skipped.
    pub fn apply_widow_prevention(&mut self) {
        self.title = bind_last_words(&self.title);
        if let Some(tagline) = self.tagline.as_mut() {
            *tagline = bind_last_words(tagline);
        }
        for section in &mut self.sections {
            section.heading = bind_last_words(&section.heading);
            for entry in &mut section.entries {
                match entry {
                    Entry::Block {
                        heading,
                        paragraphs,
                    } => {
                        if let Some(h) = heading.as_mut() {
                            *h = bind_last_words(h);
                        }
                        paragraphs.iter_mut().for_each(TextBlock::bind_last_words);
                    }
                    Entry::Item(block) => block.bind_last_words(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "title": "Jane Doe",
        "tagline": "Designer and illustrator",
        "sections": [
            {
                "id": "experience",
                "heading": "Work Experience",
                "entries": [
                    { "kind": "block", "heading": "Studio North", "paragraphs": [{ "text": "Led the brand team" }] },
                    { "kind": "item", "text": "Portfolio online", "link": { "label": "site", "href": "https://example.com" } }
                ]
            },
            {
                "id": "work",
                "heading": "Work",
                "collapsible": true,
                "gallery": {
                    "id": "portfolio",
                    "thumbs": [
                        { "full_src": "a-full.jpg", "image": { "src": "a.jpg", "alt": "A" } },
                        { "image": { "src": "b.jpg" } }
                    ]
                }
            }
        ]
    }"#;

    #[test]
    fn test_parse_sample() {
        let content = PageContent::from_json(SAMPLE).unwrap();
        assert_eq!(content.sections.len(), 2);
        assert!(content.sections[1].collapsible);

        let strips: Vec<_> = content.gallery_strips().collect();
        assert_eq!(strips.len(), 1);
        assert_eq!(strips[0].thumbs[1].image.as_ref().unwrap().alt, "");
        assert!(strips[0].thumbs[1].full_src.is_none());
    }

    #[test]
    fn test_duplicate_section_rejected() {
        let json = r#"{ "title": "x", "sections": [
            { "id": "a", "heading": "A" },
            { "id": "a", "heading": "B" }
        ] }"#;
        let err = PageContent::from_json(json).unwrap_err();
        assert!(matches!(err, FolioError::InvalidContent(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = PageContent::from_json("{ not json").unwrap_err();
        assert!(matches!(err, FolioError::Json(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        std::fs::write(&path, SAMPLE).unwrap();

        let content = PageContent::load(&path).unwrap();
        assert_eq!(content.title, "Jane Doe");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = PageContent::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, FolioError::Io(_)));
    }

    #[test]
    fn test_entry_runs_keep_document_order() {
        let entries = vec![
            Entry::Item(TextBlock::plain("first")),
            Entry::Block {
                heading: Some("Studio".to_string()),
                paragraphs: vec![TextBlock::plain("second")],
            },
            Entry::Item(TextBlock::plain("third")),
            Entry::Item(TextBlock::plain("fourth")),
        ];
        let runs = entry_runs(&entries);

        assert_eq!(runs.len(), 3);
        assert!(matches!(&runs[0], EntryRun::Items(items) if items.len() == 1));
        assert!(matches!(runs[1], EntryRun::Block { heading: Some("Studio"), .. }));
        match &runs[2] {
            EntryRun::Items(items) => {
                let texts: Vec<_> = items.iter().map(|b| b.text.as_str()).collect();
                assert_eq!(texts, ["third", "fourth"]);
            }
            other => panic!("unexpected run: {:?}", other),
        }
        assert_eq!(runs.iter().map(EntryRun::len).sum::<usize>(), entries.len());
    }

    #[test]
    fn test_entry_runs_empty() {
        assert!(entry_runs(&[]).is_empty());
    }

    #[test]
    fn test_widow_prevention_skips_links() {
        let mut content = PageContent::from_json(SAMPLE).unwrap();
        content.apply_widow_prevention();

        assert_eq!(content.title, "Jane\u{a0}Doe");
        assert_eq!(content.sections[0].heading, "Work\u{a0}Experience");
        match &content.sections[0].entries[0] {
            Entry::Block { paragraphs, .. } => {
                assert_eq!(paragraphs[0].text, "Led the brand\u{a0}team");
            }
            other => panic!("unexpected entry: {:?}", other),
        }
        match &content.sections[0].entries[1] {
            Entry::Item(block) => assert_eq!(block.text, "Portfolio online"),
            other => panic!("unexpected entry: {:?}", other),
        }
    }
}
