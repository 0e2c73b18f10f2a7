// SPDX-License-Identifier: MPL-2.0
//! Renderable handles for gallery images.

use crate::booklet::sample_asset;
use crate::gallery::{ImageDescriptor, ImageSource};
use iced::widget::{image, svg, Container, Text};
use crate::ui::design_tokens::spacing;
use iced::{ContentFit, Element, Length};

/// How a picture occupies the space it is laid out in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Frame {
    /// A fixed box; the image is letterboxed inside it.
    Fixed { width: f32, height: f32 },
    /// Bounds hug the scaled-down image, leaving the surrounding space to
    /// whatever lies beneath.
    Tight,
}

impl Frame {
    #[must_use]
    pub fn lengths(self) -> (Length, Length) {
        match self {
            Frame::Fixed { width, height } => (Length::Fixed(width), Length::Fixed(height)),
            Frame::Tight => (Length::Shrink, Length::Shrink),
        }
    }
}

/// A decoded-on-demand image handle, or the reason there is none.
#[derive(Debug, Clone)]
pub enum Picture {
    Raster(image::Handle),
    Vector(svg::Handle),
    Unavailable,
}

impl Picture {
    /// Resolves the handle for one gallery entry.
    ///
    /// Remote sources are never fetched. Missing embedded assets and absent
    /// files are logged and rendered as a placeholder.
    #[must_use]
    pub fn resolve(descriptor: &ImageDescriptor) -> Self {
        let vector = descriptor.source.is_vector();
        match &descriptor.source {
            ImageSource::Embedded(name) => match sample_asset(name) {
                Some(bytes) if vector => Picture::Vector(svg::Handle::from_memory(bytes)),
                Some(bytes) => Picture::Raster(image::Handle::from_bytes(bytes.into_owned())),
                None => {
                    tracing::warn!(%name, "embedded gallery asset not found");
                    Picture::Unavailable
                }
            },
            ImageSource::File(path) if !path.is_file() => {
                tracing::warn!(path = %path.display(), "gallery image not found");
                Picture::Unavailable
            }
            ImageSource::File(path) if vector => Picture::Vector(svg::Handle::from_path(path)),
            ImageSource::File(path) => Picture::Raster(image::Handle::from_path(path)),
            ImageSource::Remote(url) => {
                tracing::debug!(%url, "remote gallery image not fetched");
                Picture::Unavailable
            }
            ImageSource::Missing => Picture::Unavailable,
        }
    }

    /// Resolves every entry of a gallery, in order.
    #[must_use]
    pub fn resolve_all(images: &[ImageDescriptor]) -> Vec<Self> {
        let pictures: Vec<Self> = images.iter().map(Self::resolve).collect();
        let unavailable = pictures.iter().filter(|p| !p.is_available()).count();
        if unavailable > 0 {
            tracing::debug!(unavailable, total = pictures.len(), "gallery has placeholders");
        }
        pictures
    }

    #[must_use]
    pub fn is_available(&self) -> bool {
        !matches!(self, Picture::Unavailable)
    }

    /// Renders the picture in `frame` at `alpha` opacity.
    ///
    /// `placeholder` is shown for unavailable pictures.
    pub fn view<'a, Message: 'a>(
        &self,
        frame: Frame,
        alpha: f32,
        placeholder: String,
    ) -> Element<'a, Message> {
        let (width, height) = frame.lengths();
        match self {
            Picture::Raster(handle) => image::Image::new(handle.clone())
                .width(width)
                .height(height)
                .content_fit(ContentFit::Contain)
                .opacity(alpha)
                .into(),
            Picture::Vector(handle) => svg::Svg::new(handle.clone())
                .width(width)
                .height(height)
                .content_fit(ContentFit::Contain)
                .opacity(alpha)
                .into(),
            Picture::Unavailable => Container::new(Text::new(placeholder))
                .padding(spacing::LG)
                .width(width)
                .height(height)
                .center_x(width)
                .center_y(height)
                .style(crate::ui::styles::container::placeholder)
                .into(),
        }
    }
}
