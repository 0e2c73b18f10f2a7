// SPDX-License-Identifier: MPL-2.0
//! Gallery screen: thumbnail grid and the lightbox overlay.
//!
//! Thumbnails are the lightbox triggers. They are keyboard focusable
//! (Tab / Shift+Tab, Enter or Space opens) and stop responding while the
//! overlay is shown.

pub mod fade;
pub mod lightbox_view;
pub mod picture;

pub use fade::{Fade, LightboxFade};
pub use picture::{Frame, Picture};

use crate::gallery::ImageDescriptor;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::scrollable::{RelativeOffset, Viewport};
use iced::widget::{button, scrollable, Column, Container, Id, Row, Text};
use iced::{alignment::Horizontal, Element, Length};

/// Identifier of the gallery scrollable.
pub const SCROLLABLE_ID: &str = "gallery-scrollable";

/// Focus and scroll position of the thumbnail grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    focus: Option<usize>,
    offset: RelativeOffset,
}

impl Default for State {
    fn default() -> Self {
        Self {
            focus: None,
            offset: RelativeOffset::START,
        }
    }
}

impl State {
    #[must_use]
    pub fn focused(&self) -> Option<usize> {
        self.focus
    }

    /// Last observed scroll position, restored after the lightbox closes.
    #[must_use]
    pub fn offset(&self) -> RelativeOffset {
        self.offset
    }

    /// Moves keyboard focus among `count` thumbnails, wrapping at both ends.
    pub fn move_focus(&mut self, count: usize, forward: bool) {
        if count == 0 {
            self.focus = None;
            return;
        }
        self.focus = Some(match (self.focus, forward) {
            (None, true) => 0,
            (None, false) => count - 1,
            (Some(index), true) => (index + 1) % count,
            (Some(index), false) => (index + count - 1) % count,
        });
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Open(usize),
    Scrolled(Viewport),
    FocusNext,
    FocusPrevious,
    ActivateFocused,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Open(usize),
}

/// Process a gallery message. Triggers do nothing while the lightbox is open.
pub fn update(state: &mut State, message: Message, count: usize, lightbox_open: bool) -> Event {
    match message {
        Message::Scrolled(viewport) => {
            state.offset = viewport.relative_offset();
            Event::None
        }
        _ if lightbox_open => Event::None,
        Message::Open(index) if index < count => {
            state.focus = Some(index);
            Event::Open(index)
        }
        Message::Open(_) => Event::None,
        Message::FocusNext => {
            state.move_focus(count, true);
            Event::None
        }
        Message::FocusPrevious => {
            state.move_focus(count, false);
            Event::None
        }
        Message::ActivateFocused => match state.focus {
            Some(index) if index < count => Event::Open(index),
            _ => Event::None,
        },
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub images: &'a [ImageDescriptor],
    pub pictures: &'a [Picture],
    pub lightbox_open: bool,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .push(Text::new(ctx.i18n.tr("gallery-title")).size(typography::TITLE_LG));

    if ctx.images.is_empty() {
        content = content.push(Text::new(ctx.i18n.tr("gallery-empty")).size(typography::BODY));
    } else {
        content = content.push(
            Text::new(ctx.i18n.tr("gallery-open-hint")).size(typography::CAPTION),
        );
        let mut grid = Column::new().spacing(spacing::MD);
        let mut row = Row::new().spacing(spacing::MD);
        for (index, image) in ctx.images.iter().enumerate() {
            if index > 0 && index % sizing::THUMBNAIL_COLUMNS == 0 {
                grid = grid.push(row);
                row = Row::new().spacing(spacing::MD);
            }
            row = row.push(thumbnail(&ctx, index, image));
        }
        grid = grid.push(row);
        content = content.push(grid);
    }

    scrollable(
        Container::new(content)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .id(Id::new(SCROLLABLE_ID))
    .on_scroll(Message::Scrolled)
    .into()
}

fn thumbnail<'a>(
    ctx: &ViewContext<'a>,
    index: usize,
    image: &'a ImageDescriptor,
) -> Element<'a, Message> {
    let alpha = if ctx.lightbox_open {
        opacity::OVERLAY_STRONG
    } else {
        opacity::OPAQUE
    };
    let picture = ctx.pictures.get(index).map_or_else(
        || Text::new(ctx.i18n.tr("gallery-image-unavailable")).into(),
        |picture| {
            picture.view(
                Frame::Fixed {
                    width: sizing::THUMBNAIL_WIDTH,
                    height: sizing::THUMBNAIL_HEIGHT,
                },
                alpha,
                ctx.i18n.tr("gallery-image-unavailable"),
            )
        },
    );
    let label = image
        .alt_text()
        .map_or_else(|| ctx.i18n.tr("gallery-image-fallback-alt"), str::to_string);

    let tile = Column::new()
        .spacing(spacing::XXS)
        .push(picture)
        .push(Text::new(label).size(typography::CAPTION));

    let focused = ctx.state.focus == Some(index);
    let trigger = button(tile)
        .padding(spacing::XXS)
        .style(styles::button::thumbnail(focused));
    if ctx.lightbox_open {
        trigger.into()
    } else {
        trigger.on_press(Message::Open(index)).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::ImageSource;

    fn images(n: usize) -> Vec<ImageDescriptor> {
        (0..n)
            .map(|i| ImageDescriptor {
                source: ImageSource::Missing,
                alt: Some(format!("Image {i}")),
                caption: None,
            })
            .collect()
    }

    #[test]
    fn open_emits_event_when_closed() {
        let mut state = State::default();
        assert_eq!(update(&mut state, Message::Open(1), 3, false), Event::Open(1));
        assert_eq!(state.focused(), Some(1));
    }

    #[test]
    fn triggers_are_inert_while_lightbox_open() {
        let mut state = State::default();
        assert_eq!(update(&mut state, Message::Open(0), 3, true), Event::None);
        assert_eq!(update(&mut state, Message::FocusNext, 3, true), Event::None);
        assert_eq!(state.focused(), None);
    }

    #[test]
    fn out_of_range_open_is_ignored() {
        let mut state = State::default();
        assert_eq!(update(&mut state, Message::Open(5), 3, false), Event::None);
    }

    #[test]
    fn keyboard_focus_wraps_and_activates() {
        let mut state = State::default();
        update(&mut state, Message::FocusPrevious, 3, false);
        assert_eq!(state.focused(), Some(2));
        update(&mut state, Message::FocusNext, 3, false);
        assert_eq!(state.focused(), Some(0));

        assert_eq!(
            update(&mut state, Message::ActivateFocused, 3, false),
            Event::Open(0)
        );
    }

    #[test]
    fn activate_without_focus_does_nothing() {
        let mut state = State::default();
        assert_eq!(update(&mut state, Message::ActivateFocused, 3, false), Event::None);
    }

    #[test]
    fn gallery_view_renders_empty_and_full() {
        let i18n = I18n::default();
        let state = State::default();
        for n in [0, 4] {
            let images = images(n);
            let pictures = Picture::resolve_all(&images);
            let _element = view(ViewContext {
                i18n: &i18n,
                state: &state,
                images: &images,
                pictures: &pictures,
                lightbox_open: false,
            });
        }
    }
}
