//! Built-in sample page, used when no content document is supplied.

use base64::Engine;
use folio_core::{Entry, GalleryStrip, Link, PageContent, Section, TextBlock, Thumb, ThumbImage};

/// Solid-color SVG placeholder as a data URI.
fn placeholder_uri(label: &str, hue: u16, width: u32, height: u32) -> String {
    let svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}"><rect width="100%" height="100%" fill="hsl({hue},35%,55%)"/><text x="50%" y="50%" fill="#fff" font-family="Georgia" font-size="{fs}" text-anchor="middle" dominant-baseline="middle">{label}</text></svg>"#,
        w = width,
        h = height,
        hue = hue,
        fs = height / 6,
        label = label,
    );
    let encoded = base64::engine::general_purpose::STANDARD.encode(svg.as_bytes());
    format!("data:image/svg+xml;base64,{}", encoded)
}

fn sample_thumb(label: &str, hue: u16) -> Thumb {
    Thumb {
        full_src: Some(placeholder_uri(label, hue, 1600, 1100)),
        image: Some(ThumbImage {
            src: placeholder_uri(label, hue, 280, 200),
            alt: label.to_string(),
        }),
    }
}

fn item(text: &str) -> Entry {
    Entry::Item(TextBlock::plain(text))
}

fn block(heading: &str, paragraphs: &[&str]) -> Entry {
    Entry::Block {
        heading: Some(heading.to_string()),
        paragraphs: paragraphs.iter().map(|p| TextBlock::plain(*p)).collect(),
    }
}

pub fn page() -> PageContent {
    PageContent {
        title: "Alex Morgan".to_string(),
        tagline: Some("Graphic designer and illustrator based in Lisbon".to_string()),
        sections: vec![
            Section {
                id: "about".to_string(),
                heading: "About".to_string(),
                entries: vec![block(
                    "Hello",
                    &["I design identities, editorial layouts and the occasional picture book."],
                )],
                collapsible: false,
                gallery: None,
            },
            Section {
                id: "experience".to_string(),
                heading: "Experience".to_string(),
                entries: vec![
                    block("Studio Atlântico, 2021 to now", &["Lead designer for brand and packaging work."]),
                    block("Casa Editorial, 2018 to 2021", &["Book covers and magazine layouts."]),
                    block("Freelance, 2015 to 2018", &["Posters, logos and illustration commissions."]),
                    block("Print shop assistant, 2013 to 2015", &["Prepress and risograph printing."]),
                ],
                collapsible: true,
                gallery: None,
            },
            Section {
                id: "work".to_string(),
                heading: "Selected Work".to_string(),
                entries: vec![
                    item("Identity system for a neighbourhood bakery"),
                    item("Illustrated field guide to coastal birds"),
                ],
                collapsible: false,
                gallery: Some(GalleryStrip {
                    id: "portfolio".to_string(),
                    thumbs: vec![
                        sample_thumb("Bakery", 28),
                        sample_thumb("Birds", 200),
                        sample_thumb("Posters", 350),
                        sample_thumb("Covers", 120),
                    ],
                }),
            },
            Section {
                id: "sketchbook".to_string(),
                heading: "Sketchbook".to_string(),
                entries: vec![],
                collapsible: true,
                gallery: Some(GalleryStrip {
                    id: "sketches".to_string(),
                    thumbs: vec![sample_thumb("Harbour", 210), sample_thumb("Market", 40)],
                }),
            },
            Section {
                id: "skills".to_string(),
                heading: "Skills".to_string(),
                entries: vec![
                    item("Typography and layout"),
                    item("Illustration, both digital and ink"),
                    item("Brand strategy workshops"),
                    item("Print production"),
                ],
                collapsible: false,
                gallery: None,
            },
            Section {
                id: "contact".to_string(),
                heading: "Contact".to_string(),
                entries: vec![Entry::Item(TextBlock {
                    text: "Say hello at".to_string(),
                    link: Some(Link {
                        label: "alex@example.com".to_string(),
                        href: "mailto:alex@example.com".to_string(),
                    }),
                })],
                collapsible: false,
                gallery: None,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::GalleryRegistry;

    #[test]
    fn test_sample_page_has_galleries() {
        let registry = GalleryRegistry::scan(&page());
        assert_eq!(registry.get("portfolio").map(|g| g.len()), Some(4));
        assert_eq!(registry.get("sketches").map(|g| g.len()), Some(2));
    }

    #[test]
    fn test_placeholder_is_data_uri() {
        assert!(placeholder_uri("x", 0, 10, 10).starts_with("data:image/svg+xml;base64,"));
    }
}
