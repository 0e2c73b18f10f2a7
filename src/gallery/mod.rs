// SPDX-License-Identifier: MPL-2.0
//! Image gallery model and lightbox controller.
//!
//! The gallery is the ordered list of images found in the booklet. The
//! [`Lightbox`] controller owns everything that happens once one of them is
//! opened full-screen.

pub mod lightbox;
pub mod swipe;

pub use lightbox::{Control, Effect, KeyCommand, Lightbox, Phase, PointerTarget, SessionId, Timer, Timing};
pub use swipe::{SwipeDirection, SwipeTracker};

use std::path::PathBuf;

/// Where the pixels of a gallery image come from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImageSource {
    /// A file next to the booklet document.
    File(PathBuf),
    /// An asset of the embedded sample booklet.
    Embedded(String),
    /// A URL. Remote images are not fetched and render as a placeholder.
    Remote(String),
    /// The markup gave no source at all.
    Missing,
}

impl ImageSource {
    /// Returns true for SVG sources, which need a vector renderer.
    #[must_use]
    pub fn is_vector(&self) -> bool {
        let name = match self {
            ImageSource::File(path) => path.to_string_lossy(),
            ImageSource::Embedded(name) | ImageSource::Remote(name) => name.as_str().into(),
            ImageSource::Missing => return false,
        };
        name.to_ascii_lowercase().ends_with(".svg")
    }
}

/// One gallery entry, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageDescriptor {
    pub source: ImageSource,
    pub alt: Option<String>,
    pub caption: Option<String>,
}

impl ImageDescriptor {
    /// Text shown under the image in the lightbox.
    ///
    /// The explicit caption wins; the alt text is the fallback. `None` means
    /// no caption element is rendered.
    #[must_use]
    pub fn caption_text(&self) -> Option<&str> {
        self.caption
            .as_deref()
            .filter(|caption| !caption.is_empty())
            .or_else(|| self.alt.as_deref().filter(|alt| !alt.is_empty()))
    }

    /// Non-empty alt text, if any.
    #[must_use]
    pub fn alt_text(&self) -> Option<&str> {
        self.alt.as_deref().filter(|alt| !alt.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(alt: Option<&str>, caption: Option<&str>) -> ImageDescriptor {
        ImageDescriptor {
            source: ImageSource::Missing,
            alt: alt.map(str::to_string),
            caption: caption.map(str::to_string),
        }
    }

    #[test]
    fn caption_prefers_data_caption() {
        let image = descriptor(Some("Pool"), Some("Heated pool"));
        assert_eq!(image.caption_text(), Some("Heated pool"));
    }

    #[test]
    fn caption_falls_back_to_alt() {
        assert_eq!(descriptor(Some("Pool"), None).caption_text(), Some("Pool"));
        assert_eq!(descriptor(Some("Pool"), Some("")).caption_text(), Some("Pool"));
    }

    #[test]
    fn empty_caption_and_alt_render_nothing() {
        assert_eq!(descriptor(None, None).caption_text(), None);
        assert_eq!(descriptor(Some(""), Some("")).caption_text(), None);
        assert_eq!(descriptor(Some(""), None).alt_text(), None);
    }

    #[test]
    fn svg_sources_are_vector() {
        assert!(ImageSource::Embedded("images/terrace.svg".into()).is_vector());
        assert!(ImageSource::File(PathBuf::from("/srv/a.SVG")).is_vector());
        assert!(!ImageSource::File(PathBuf::from("/srv/a.jpg")).is_vector());
        assert!(!ImageSource::Missing.is_vector());
    }
}
