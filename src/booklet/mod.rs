// SPDX-License-Identifier: MPL-2.0
//! Booklet document model.
//!
//! A booklet is an HTML document written by the host. It is read once into an
//! owned [`Booklet`] and never consulted again, so the UI works on plain Rust
//! values instead of markup.
//!
//! Booklets come from two places:
//! - a file (or a directory holding `index.html`) given on the command line,
//! - the sample booklet embedded in the binary, used when no path is given or
//!   when the given booklet cannot be read.

pub mod markup;
pub mod phone;

use crate::app::paths;
use crate::error::{Error, MarkupError, Result};
use crate::gallery::ImageDescriptor;
use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(RustEmbed)]
#[folder = "assets/booklet/"]
struct SampleAsset;

/// Name of the entry document of the embedded sample booklet.
const SAMPLE_INDEX: &str = "index.html";

/// Where relative references (image sources) of a booklet are resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceBase {
    /// Relative to a directory on disk.
    Directory(PathBuf),
    /// Relative to the embedded sample assets.
    Embedded,
}

/// Content of the welcome splash screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WelcomeContent {
    pub title: String,
    pub body: String,
    pub start_label: String,
}

/// Kind of an informational card, taken from its class name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    Activity,
    Food,
    Contact,
}

/// A card inside a content section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub kind: CardKind,
    pub title: String,
    pub body: String,
    /// Raw phone number as written in the markup.
    pub phone: Option<String>,
}

/// A top-level content section of the booklet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: Option<String>,
    pub title: String,
    pub paragraphs: Vec<String>,
    pub cards: Vec<Card>,
}

/// A point of interest as found in the markup.
///
/// Coordinates are `None` when the attribute is missing or is not a number;
/// such points are listed but get no map marker.
#[derive(Debug, Clone, PartialEq)]
pub struct PointOfInterest {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub title: String,
    /// Short icon identifier (`utensils`, `umbrella-beach`, ...).
    pub icon: String,
}

impl PointOfInterest {
    /// Returns both coordinates when they are usable.
    #[must_use]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some((lat, lng)),
            _ => None,
        }
    }
}

/// A collapsible header and the content block that follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccordionItem {
    pub title: String,
    pub body: String,
}

/// Everything the application needs from a booklet document.
#[derive(Debug, Clone, PartialEq)]
pub struct Booklet {
    pub title: String,
    pub welcome: Option<WelcomeContent>,
    pub sections: Vec<Section>,
    /// Gallery images in document order.
    pub images: Vec<ImageDescriptor>,
    pub points: Vec<PointOfInterest>,
    pub accordions: Vec<AccordionItem>,
    /// Where the booklet was read from (`None` for the embedded sample).
    pub origin: Option<PathBuf>,
}

impl Booklet {
    /// Parses booklet markup, resolving relative references against `base`.
    pub fn parse(html: &str, base: &SourceBase) -> Result<Self> {
        markup::parse(html, base).map_err(Error::from)
    }

    /// Reads a booklet from a file, or from `index.html` inside a directory.
    pub fn load(path: &Path) -> Result<Self> {
        let document = paths::resolve_booklet_path(path);
        if path.is_dir() && !document.exists() {
            return Err(MarkupError::MissingIndex(path.display().to_string()).into());
        }

        let bytes = fs::read(&document)?;
        let html = String::from_utf8(bytes)?;
        let base = SourceBase::Directory(
            document
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
        );

        let mut booklet = Self::parse(&html, &base)?;
        booklet.origin = Some(document);
        tracing::info!(
            title = %booklet.title,
            images = booklet.images.len(),
            points = booklet.points.len(),
            "booklet loaded"
        );
        Ok(booklet)
    }

    /// Returns the sample booklet embedded in the binary.
    pub fn sample() -> Result<Self> {
        let file = SampleAsset::get(SAMPLE_INDEX)
            .ok_or_else(|| MarkupError::MissingIndex("embedded sample".to_string()))?;
        let html = String::from_utf8(file.data.into_owned())?;
        Self::parse(&html, &SourceBase::Embedded)
    }

    /// Loads the booklet at `path`, or the sample booklet when no path is
    /// given or the file cannot be read.
    ///
    /// Returns the booklet and, when a fallback happened, the i18n key of a
    /// warning to show.
    pub fn load_or_sample(path: Option<&Path>) -> (Self, Option<&'static str>) {
        let warning = match path {
            Some(path) => match Self::load(path) {
                Ok(booklet) => return (booklet, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "falling back to sample booklet");
                    Some(match &err {
                        Error::Markup(markup) => markup.i18n_key(),
                        _ => "notification-booklet-load-error",
                    })
                }
            },
            None => None,
        };

        match Self::sample() {
            Ok(booklet) => (booklet, warning),
            Err(err) => {
                tracing::error!(%err, "embedded sample booklet is unreadable");
                (Self::empty(), Some("notification-booklet-load-error"))
            }
        }
    }

    /// A booklet with no content at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            title: String::new(),
            welcome: None,
            sections: Vec::new(),
            images: Vec::new(),
            points: Vec::new(),
            accordions: Vec::new(),
            origin: None,
        }
    }

    /// All contact cards across sections, in document order.
    pub fn contacts(&self) -> impl Iterator<Item = &Card> {
        self.sections
            .iter()
            .flat_map(|section| section.cards.iter())
            .filter(|card| card.kind == CardKind::Contact)
    }
}

/// Returns the bytes of an embedded sample asset (gallery images).
#[must_use]
pub fn sample_asset(name: &str) -> Option<Cow<'static, [u8]>> {
    SampleAsset::get(name).map(|file| file.data)
}
