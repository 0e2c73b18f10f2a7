// SPDX-License-Identifier: MPL-2.0
//! Lightbox overlay layer.
//!
//! Drawn above the whole window. Clicking the backdrop closes it; clicking
//! the image does not. Keyboard and touch input reach the model through the
//! application subscription, not through this view.

use super::{Frame, Picture};
use crate::gallery::{Control, Lightbox, PointerTarget};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, mouse_area, Column, Container, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length,
};

#[derive(Debug, Clone)]
pub enum Message {
    Pointer(PointerTarget),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub lightbox: &'a Lightbox,
    pub pictures: &'a [Picture],
    /// Overlay opacity, 0 to 1.
    pub overlay_alpha: f32,
    /// Image opacity relative to the overlay, 0 to 1.
    pub image_alpha: f32,
}

/// Renders the overlay, or `None` when no lightbox session exists.
pub fn view<'a>(ctx: ViewContext<'a>) -> Option<Element<'a, Message>> {
    let index = ctx.lightbox.displayed_index()?;
    let descriptor = ctx.lightbox.displayed()?;
    let alpha = ctx.overlay_alpha;

    let backdrop = mouse_area(
        Container::new(Text::new(""))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::overlay::backdrop(alpha)),
    )
    .on_press(Message::Pointer(PointerTarget::Background));

    let mut center = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(
            Container::new(image_target(&ctx, index))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
        );

    if let Some(caption) = descriptor.caption_text() {
        center = center.push(
            Container::new(Text::new(caption).size(typography::BODY_LG))
                .padding([spacing::XS, spacing::MD])
                .style(styles::overlay::caption(alpha)),
        );
    }

    let current = (index + 1).to_string();
    let total = ctx.lightbox.len().to_string();
    center = center.push(
        Container::new(
            Text::new(ctx.i18n.tr_with_args(
                "lightbox-counter",
                &[("current", current.as_str()), ("total", total.as_str())],
            ))
            .size(typography::CAPTION),
        )
        .padding([spacing::XXS, spacing::XS])
        .style(styles::overlay::caption(alpha)),
    );

    let content = Container::new(center)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding([spacing::XL, spacing::XXL + sizing::LIGHTBOX_CONTROL])
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(backdrop)
        .push(content);

    for control in ctx.lightbox.controls() {
        let (horizontal, vertical) = match control {
            Control::Prev => (Horizontal::Left, Vertical::Center),
            Control::Next => (Horizontal::Right, Vertical::Center),
            Control::Close => (Horizontal::Right, Vertical::Top),
        };
        stack = stack.push(
            Container::new(control_button(&ctx, *control))
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::MD)
                .align_x(horizontal)
                .align_y(vertical),
        );
    }

    Some(stack.into())
}

/// The displayed picture, hit-testable only within its own bounds. Presses
/// on the space around it fall through to the backdrop.
fn image_target<'a>(ctx: &ViewContext<'a>, index: usize) -> Element<'a, Message> {
    let placeholder = ctx.i18n.tr("gallery-image-unavailable");
    let picture = match ctx.pictures.get(index) {
        Some(picture) => picture.view(
            Frame::Tight,
            ctx.overlay_alpha * ctx.image_alpha,
            placeholder,
        ),
        None => Text::new(placeholder).into(),
    };

    mouse_area(picture)
        .on_press(Message::Pointer(PointerTarget::Image))
        .into()
}

fn control_button<'a>(ctx: &ViewContext<'a>, control: Control) -> Element<'a, Message> {
    let (glyph, key) = match control {
        Control::Prev => ("◀", "lightbox-previous"),
        Control::Next => ("▶", "lightbox-next"),
        Control::Close => ("✕", "lightbox-close"),
    };
    let focused = ctx.lightbox.focused() == Some(control);

    let trigger = button(
        Container::new(Text::new(glyph).size(typography::TITLE_MD))
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .width(Length::Fixed(sizing::LIGHTBOX_CONTROL))
    .height(Length::Fixed(sizing::LIGHTBOX_CONTROL))
    .style(styles::button::lightbox_control(focused, ctx.overlay_alpha))
    .on_press(Message::Pointer(PointerTarget::Control(control)));

    styles::tooltip::styled(
        trigger,
        ctx.i18n.tr(key),
        iced::widget::tooltip::Position::Bottom,
    )
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::{ImageDescriptor, ImageSource, Timing};

    fn lightbox(n: usize) -> Lightbox {
        let images = (0..n)
            .map(|i| ImageDescriptor {
                source: ImageSource::Missing,
                alt: None,
                caption: Some(format!("Caption {i}")),
            })
            .collect();
        Lightbox::new(images, Timing::default())
    }

    #[test]
    fn closed_lightbox_renders_nothing() {
        let i18n = I18n::default();
        let lightbox = lightbox(2);
        let rendered = view(ViewContext {
            i18n: &i18n,
            lightbox: &lightbox,
            pictures: &[],
            overlay_alpha: 1.0,
            image_alpha: 1.0,
        });
        assert!(rendered.is_none());
    }

    #[test]
    fn open_lightbox_renders_overlay() {
        let i18n = I18n::default();
        let mut lightbox = lightbox(2);
        lightbox.open(1);
        let pictures = Picture::resolve_all(lightbox.images());
        let rendered = view(ViewContext {
            i18n: &i18n,
            lightbox: &lightbox,
            pictures: &pictures,
            overlay_alpha: 0.5,
            image_alpha: 1.0,
        });
        assert!(rendered.is_some());
    }

    #[test]
    fn backdrop_and_image_presses_stay_distinct() {
        let i18n = I18n::default();
        let mut lightbox = lightbox(2);
        lightbox.open(0);
        let pictures = Picture::resolve_all(lightbox.images());
        let rendered = view(ViewContext {
            i18n: &i18n,
            lightbox: &lightbox,
            pictures: &pictures,
            overlay_alpha: 1.0,
            image_alpha: 1.0,
        });
        assert!(rendered.is_some());
        drop(rendered);

        assert!(lightbox.pointer(PointerTarget::Image).is_empty());
        assert!(lightbox.is_open());
        assert!(!lightbox.pointer(PointerTarget::Background).is_empty());
        assert_eq!(lightbox.phase(), Some(crate::gallery::Phase::Closing));
    }
}
