// SPDX-License-Identifier: MPL-2.0
//! Booklet markup reader.
//!
//! Extracts the parts of the document the application renders natively:
//!
//! | Markup                                   | Model                  |
//! |------------------------------------------|------------------------|
//! | `<title>` (or first `<h1>`)              | [`Booklet::title`]     |
//! | `#welcome` with `#start-explore`         | [`WelcomeContent`]     |
//! | `.content-section`                       | [`Section`]            |
//! | `.activity-card`, `.food-card`, `.contact-card` | [`Card`]        |
//! | `.gallery-img`                           | [`ImageDescriptor`]    |
//! | `.poi-item`                              | [`PointOfInterest`]    |
//! | `.accordion-header` + next sibling       | [`AccordionItem`]      |

use super::{
    AccordionItem, Booklet, Card, CardKind, PointOfInterest, Section, SourceBase, WelcomeContent,
};
use crate::error::MarkupError;
use crate::gallery::{ImageDescriptor, ImageSource};
use scraper::{ElementRef, Html, Selector};

/// Icon used when a point of interest names none.
pub const DEFAULT_POI_ICON: &str = "home";

/// Icon-set style classes that never name an icon.
const ICON_STYLE_CLASSES: [&str; 2] = ["fa-solid", "fa-fas"];

fn selector(css: &str) -> Result<Selector, MarkupError> {
    Selector::parse(css).map_err(|_| MarkupError::Selector(css.to_string()))
}

/// Collapses all whitespace runs of the element's text into single spaces.
fn text_of(element: ElementRef<'_>) -> String {
    normalize(&element.text().collect::<String>())
}

fn normalize(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn first_text(scope: ElementRef<'_>, sel: &Selector) -> Option<String> {
    scope
        .select(sel)
        .next()
        .map(text_of)
        .filter(|text| !text.is_empty())
}

fn attr(element: ElementRef<'_>, name: &str) -> Option<String> {
    element
        .value()
        .attr(name)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Parses a whole booklet document.
pub fn parse(html: &str, base: &SourceBase) -> Result<Booklet, MarkupError> {
    let document = Html::parse_document(html);
    let root = document.root_element();

    Ok(Booklet {
        title: parse_title(root)?,
        welcome: parse_welcome(root)?,
        sections: parse_sections(root)?,
        images: parse_gallery(root, base)?,
        points: parse_points(root)?,
        accordions: parse_accordions(root)?,
        origin: None,
    })
}

fn parse_title(root: ElementRef<'_>) -> Result<String, MarkupError> {
    let title = selector("title")?;
    let heading = selector("h1")?;
    Ok(first_text(root, &title)
        .or_else(|| first_text(root, &heading))
        .unwrap_or_default())
}

/// The welcome splash needs both its container and its start button.
fn parse_welcome(root: ElementRef<'_>) -> Result<Option<WelcomeContent>, MarkupError> {
    let welcome = selector("#welcome")?;
    let start = selector("#start-explore")?;
    let heading = selector("h1, h2")?;
    let paragraph = selector("p")?;

    let Some(container) = root.select(&welcome).next() else {
        return Ok(None);
    };
    let Some(button) = root.select(&start).next() else {
        return Ok(None);
    };

    let body = container
        .select(&paragraph)
        .map(text_of)
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n");

    Ok(Some(WelcomeContent {
        title: first_text(container, &heading).unwrap_or_default(),
        body,
        start_label: text_of(button),
    }))
}

fn parse_sections(root: ElementRef<'_>) -> Result<Vec<Section>, MarkupError> {
    let section_sel = selector(".content-section")?;
    let card_sel = selector(".activity-card, .food-card, .contact-card")?;

    let mut sections = Vec::new();
    for element in root.select(&section_sel) {
        let mut title = String::new();
        let mut paragraphs = Vec::new();

        for child in element.children().filter_map(ElementRef::wrap) {
            match child.value().name() {
                "h1" | "h2" | "h3" if title.is_empty() => title = text_of(child),
                "p" => {
                    let text = text_of(child);
                    if !text.is_empty() {
                        paragraphs.push(text);
                    }
                }
                _ => {}
            }
        }

        let cards = element
            .select(&card_sel)
            .map(parse_card)
            .collect::<Result<Vec<_>, _>>()?;

        sections.push(Section {
            id: element.value().id().map(str::to_string),
            title,
            paragraphs,
            cards,
        });
    }
    Ok(sections)
}

fn card_kind(element: ElementRef<'_>) -> CardKind {
    let mut kind = CardKind::Activity;
    for class in element.value().classes() {
        match class {
            "contact-card" => return CardKind::Contact,
            "food-card" => kind = CardKind::Food,
            _ => {}
        }
    }
    kind
}

fn parse_card(element: ElementRef<'_>) -> Result<Card, MarkupError> {
    let heading = selector("h3, h4")?;
    let paragraph = selector("p")?;
    let phone_attr = selector("[data-phone]")?;
    let tel_link = selector("a[href^=\"tel:\"]")?;

    let body = element
        .select(&paragraph)
        .map(text_of)
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    let phone = attr(element, "data-phone")
        .or_else(|| {
            element
                .select(&phone_attr)
                .next()
                .and_then(|el| attr(el, "data-phone"))
        })
        .or_else(|| {
            element
                .select(&tel_link)
                .next()
                .and_then(|el| attr(el, "href"))
                .map(|href| href.trim_start_matches("tel:").to_string())
        });

    Ok(Card {
        kind: card_kind(element),
        title: first_text(element, &heading).unwrap_or_default(),
        body,
        phone,
    })
}

fn parse_gallery(
    root: ElementRef<'_>,
    base: &SourceBase,
) -> Result<Vec<ImageDescriptor>, MarkupError> {
    let image_sel = selector(".gallery-img")?;
    Ok(root
        .select(&image_sel)
        .map(|element| {
            let raw = attr(element, "src").or_else(|| attr(element, "data-src"));
            ImageDescriptor {
                source: resolve_source(raw.as_deref(), base),
                alt: attr(element, "alt"),
                caption: attr(element, "data-caption"),
            }
        })
        .collect())
}

/// Resolves an image reference against the booklet location.
pub fn resolve_source(raw: Option<&str>, base: &SourceBase) -> ImageSource {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return ImageSource::Missing;
    };

    let lower = raw.to_ascii_lowercase();
    if lower.starts_with("http://")
        || lower.starts_with("https://")
        || lower.starts_with("//")
        || lower.starts_with("data:")
    {
        return ImageSource::Remote(raw.to_string());
    }

    let relative = raw.trim_start_matches("./");
    match base {
        SourceBase::Directory(dir) => ImageSource::File(dir.join(relative)),
        SourceBase::Embedded => ImageSource::Embedded(relative.to_string()),
    }
}

fn parse_points(root: ElementRef<'_>) -> Result<Vec<PointOfInterest>, MarkupError> {
    let item_sel = selector(".poi-item")?;
    let heading = selector("h4")?;
    let icon_sel = selector(".poi-icon i")?;

    Ok(root
        .select(&item_sel)
        .map(|element| PointOfInterest {
            lat: element.value().attr("data-lat").and_then(parse_coordinate),
            lng: element.value().attr("data-lng").and_then(parse_coordinate),
            title: first_text(element, &heading).unwrap_or_default(),
            icon: element
                .select(&icon_sel)
                .next()
                .and_then(icon_name)
                .unwrap_or_else(|| DEFAULT_POI_ICON.to_string()),
        })
        .collect())
}

/// Returns the first `fa-*` class that names an icon, without its prefix.
fn icon_name(element: ElementRef<'_>) -> Option<String> {
    element
        .value()
        .classes()
        .find(|class| class.starts_with("fa-") && !ICON_STYLE_CLASSES.contains(class))
        .map(|class| class["fa-".len()..].to_string())
        .filter(|name| !name.is_empty())
}

/// Reads a coordinate from the leading numeric part of an attribute.
///
/// Trailing garbage is ignored (`"43.6deg"` reads as `43.6`). Values with no
/// numeric prefix, and non-finite values, are rejected.
pub fn parse_coordinate(raw: &str) -> Option<f64> {
    let raw = raw.trim_start();
    let end = numeric_prefix_len(raw.as_bytes());
    raw[..end]
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Length of the longest prefix shaped like `[+-]digits[.digits][e[+-]digits]`.
fn numeric_prefix_len(bytes: &[u8]) -> usize {
    let digits = |from: usize| {
        bytes[from..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let integer = digits(end);
    end += integer;

    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = digits(end + 1);
        if integer + fraction > 0 {
            end += 1 + fraction;
        }
    }
    if integer + fraction == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let exponent_digits = digits(exponent);
        if exponent_digits > 0 {
            end = exponent + exponent_digits;
        }
    }
    end
}

fn parse_accordions(root: ElementRef<'_>) -> Result<Vec<AccordionItem>, MarkupError> {
    let header_sel = selector(".accordion-header")?;

    Ok(root
        .select(&header_sel)
        .map(|header| {
            let body = header
                .next_siblings()
                .find_map(ElementRef::wrap)
                .map(text_of)
                .unwrap_or_default();
            AccordionItem {
                title: text_of(header),
                body,
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const BOOKLET: &str = r#"<!DOCTYPE html>
<html>
<head><title> Villa   Azur </title></head>
<body>
  <div id="welcome">
    <h1>Welcome to Villa Azur</h1>
    <p>Make yourself at home.</p>
    <p>Enjoy the sea.</p>
    <button id="start-explore">Start exploring</button>
  </div>
  <nav class="main-nav"></nav>
  <section id="activities" class="content-section">
    <h2>Activities</h2>
    <p>Things to do nearby.</p>
    <div class="activity-card"><h3>Hiking</h3><p>Trail from the gate.</p></div>
    <div class="food-card"><h3>Bakery</h3><p>Open at 7.</p></div>
  </section>
  <section id="contacts" class="content-section">
    <h2>Contacts</h2>
    <div class="contact-card"><h3>Host</h3><a href="tel:0612345678">Call</a></div>
    <div class="contact-card" data-phone="+33 6 6123 45678"><h3>Cleaning</h3></div>
  </section>
  <div class="gallery">
    <img class="gallery-img" src="photos/a.jpg" alt="Terrace" data-caption="Evening terrace">
    <img class="gallery-img" src="./photos/b.jpg" alt="Pool">
    <img class="gallery-img" data-src="https://example.org/c.jpg" alt="" data-caption="">
  </div>
  <ul>
    <li class="poi-item" data-lat="43.6" data-lng="6.4">
      <span class="poi-icon"><i class="fa-solid fa-umbrella-beach"></i></span>
      <h4>Beach</h4>
    </li>
    <li class="poi-item" data-lat="north" data-lng="6.4"><h4>Nowhere</h4></li>
    <li class="poi-item" data-lat="43.55" data-lng="6.52"><h4>Market</h4></li>
  </ul>
  <div class="accordion-header">Check-in</div>
  <div class="accordion-content"><p>From 4 pm.</p></div>
  <div class="accordion-header">Wi-Fi</div>
  <div class="accordion-content">Network: azur</div>
</body>
</html>"#;

    fn parsed() -> Booklet {
        parse(BOOKLET, &SourceBase::Directory(PathBuf::from("/srv/villa"))).expect("parses")
    }

    #[test]
    fn title_whitespace_is_collapsed() {
        assert_eq!(parsed().title, "Villa Azur");
    }

    #[test]
    fn title_falls_back_to_first_heading() {
        let booklet = parse("<body><h1>Chalet</h1></body>", &SourceBase::Embedded).expect("parses");
        assert_eq!(booklet.title, "Chalet");
    }

    #[test]
    fn welcome_content_is_extracted() {
        let welcome = parsed().welcome.expect("welcome present");
        assert_eq!(welcome.title, "Welcome to Villa Azur");
        assert_eq!(welcome.body, "Make yourself at home.\n\nEnjoy the sea.");
        assert_eq!(welcome.start_label, "Start exploring");
    }

    #[test]
    fn welcome_without_start_button_is_absent() {
        let html = r#"<div id="welcome"><h1>Hi</h1></div>"#;
        let booklet = parse(html, &SourceBase::Embedded).expect("parses");
        assert!(booklet.welcome.is_none());
    }

    #[test]
    fn sections_and_cards_are_extracted() {
        let booklet = parsed();
        assert_eq!(booklet.sections.len(), 2);

        let activities = &booklet.sections[0];
        assert_eq!(activities.id.as_deref(), Some("activities"));
        assert_eq!(activities.title, "Activities");
        assert_eq!(activities.paragraphs, vec!["Things to do nearby."]);
        assert_eq!(activities.cards.len(), 2);
        assert_eq!(activities.cards[0].kind, CardKind::Activity);
        assert_eq!(activities.cards[1].kind, CardKind::Food);
        assert_eq!(activities.cards[1].body, "Open at 7.");
    }

    #[test]
    fn contact_phones_come_from_links_and_attributes() {
        let booklet = parsed();
        let phones: Vec<_> = booklet
            .contacts()
            .map(|card| card.phone.clone())
            .collect();
        assert_eq!(
            phones,
            vec![
                Some("0612345678".to_string()),
                Some("+33 6 6123 45678".to_string())
            ]
        );
    }

    #[test]
    fn gallery_images_keep_document_order() {
        let images = parsed().images;
        assert_eq!(images.len(), 3);
        assert_eq!(
            images[0].source,
            ImageSource::File(PathBuf::from("/srv/villa/photos/a.jpg"))
        );
        assert_eq!(
            images[1].source,
            ImageSource::File(PathBuf::from("/srv/villa/photos/b.jpg"))
        );
        assert_eq!(
            images[2].source,
            ImageSource::Remote("https://example.org/c.jpg".to_string())
        );
    }

    #[test]
    fn gallery_captions_and_alt_text() {
        let images = parsed().images;
        assert_eq!(images[0].caption.as_deref(), Some("Evening terrace"));
        assert_eq!(images[1].caption, None);
        assert_eq!(images[1].alt.as_deref(), Some("Pool"));
        assert_eq!(images[2].alt, None);
        assert_eq!(images[2].caption, None);
    }

    #[test]
    fn points_of_interest_are_extracted() {
        let points = parsed().points;
        assert_eq!(points.len(), 3);

        assert_eq!(points[0].coordinates(), Some((43.6, 6.4)));
        assert_eq!(points[0].title, "Beach");
        assert_eq!(points[0].icon, "umbrella-beach");

        assert_eq!(points[1].coordinates(), None);
        assert_eq!(points[1].title, "Nowhere");

        assert_eq!(points[2].icon, DEFAULT_POI_ICON);
    }

    #[test]
    fn accordion_body_is_next_sibling_text() {
        let accordions = parsed().accordions;
        assert_eq!(accordions.len(), 2);
        assert_eq!(accordions[0].title, "Check-in");
        assert_eq!(accordions[0].body, "From 4 pm.");
        assert_eq!(accordions[1].body, "Network: azur");
    }

    #[test]
    fn empty_document_yields_empty_booklet() {
        let booklet = parse("", &SourceBase::Embedded).expect("parses");
        assert!(booklet.title.is_empty());
        assert!(booklet.welcome.is_none());
        assert!(booklet.images.is_empty());
        assert!(booklet.points.is_empty());
    }

    #[test]
    fn coordinate_reads_numeric_prefix() {
        assert_eq!(parse_coordinate("43.6"), Some(43.6));
        assert_eq!(parse_coordinate(" -6.25 "), Some(-6.25));
        assert_eq!(parse_coordinate("43.6deg"), Some(43.6));
        assert_eq!(parse_coordinate("north"), None);
        assert_eq!(parse_coordinate(""), None);
        assert_eq!(parse_coordinate("inf"), None);
        assert_eq!(parse_coordinate("NaN"), None);
    }

    #[test]
    fn coordinate_prefix_forms() {
        assert_eq!(parse_coordinate("+.5N"), Some(0.5));
        assert_eq!(parse_coordinate("7."), Some(7.0));
        assert_eq!(parse_coordinate("4.36e1 deg"), Some(43.6));
        assert_eq!(parse_coordinate("43e"), Some(43.0));
        assert_eq!(parse_coordinate("-.e5"), None);
        assert_eq!(parse_coordinate("1e400"), None);
    }

    #[test]
    fn long_coordinate_attribute_reads_prefix() {
        let raw = format!("43.6{}", "x".repeat(200_000));
        assert_eq!(parse_coordinate(&raw), Some(43.6));
        assert_eq!(parse_coordinate(&"y".repeat(200_000)), None);
    }

    #[test]
    fn embedded_sources_strip_dot_prefix() {
        assert_eq!(
            resolve_source(Some("./images/a.svg"), &SourceBase::Embedded),
            ImageSource::Embedded("images/a.svg".to_string())
        );
        assert_eq!(
            resolve_source(Some("  "), &SourceBase::Embedded),
            ImageSource::Missing
        );
        assert_eq!(resolve_source(None, &SourceBase::Embedded), ImageSource::Missing);
    }

    #[test]
    fn icon_style_classes_are_skipped() {
        let html = r#"<div class="poi-item" data-lat="1" data-lng="2">
            <span class="poi-icon"><i class="fa-fas fa-utensils"></i></span><h4>Food</h4></div>"#;
        let booklet = parse(html, &SourceBase::Embedded).expect("parses");
        assert_eq!(booklet.points[0].icon, "utensils");
    }
}
