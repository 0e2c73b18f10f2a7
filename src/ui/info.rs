// SPDX-License-Identifier: MPL-2.0
//! Practical information screen.
//!
//! Shows the booklet's accordion items, each header toggling the block that
//! follows it, and the contact list with formatted phone numbers.

use crate::booklet::phone::format_phone_number;
use crate::booklet::{AccordionItem, Card};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, scrollable, text, Column, Container, Row, Text},
    Border, Element, Length, Theme,
};
use std::collections::HashSet;

/// Tracks which accordion items are expanded. Several may be open at once.
#[derive(Debug, Clone, Default)]
pub struct State {
    expanded: HashSet<usize>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_expanded(&self, item: usize) -> bool {
        self.expanded.contains(&item)
    }

    pub fn toggle(&mut self, item: usize) {
        if !self.expanded.remove(&item) {
            self.expanded.insert(item);
        }
    }
}

/// Contextual data needed to render the info screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub accordions: &'a [AccordionItem],
    pub contacts: Vec<&'a Card>,
}

#[derive(Debug, Clone)]
pub enum Message {
    ToggleItem(usize),
}

pub fn update(state: &mut State, message: Message) {
    match message {
        Message::ToggleItem(item) => state.toggle(item),
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new()
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .spacing(spacing::SM)
        .padding(spacing::LG)
        .push(Text::new(ctx.i18n.tr("info-title")).size(typography::TITLE_LG));

    if ctx.accordions.is_empty() && ctx.contacts.is_empty() {
        content = content.push(text(ctx.i18n.tr("info-empty")).size(typography::BODY));
    }

    for (index, item) in ctx.accordions.iter().enumerate() {
        content = content.push(accordion_item(index, item, ctx.state.is_expanded(index)));
    }

    if !ctx.contacts.is_empty() {
        content = content.push(
            Text::new(ctx.i18n.tr("info-contacts"))
                .size(typography::TITLE_MD)
                .width(Length::Fill),
        );
        for card in &ctx.contacts {
            content = content.push(contact_row(ctx.i18n, card));
        }
    }

    scrollable(
        Container::new(content)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .into()
}

fn accordion_item(index: usize, item: &AccordionItem, is_expanded: bool) -> Element<'_, Message> {
    let indicator = Text::new(if is_expanded { "▼" } else { "▶" }).size(typography::BODY);

    let header = button(
        Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(indicator)
            .push(Text::new(item.title.as_str()).size(typography::TITLE_SM)),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::button::text_row)
    .on_press(Message::ToggleItem(index));

    let mut column = Column::new().spacing(spacing::XS).push(header);
    if is_expanded {
        column = column.push(
            Container::new(Text::new(item.body.as_str()).size(typography::BODY))
                .padding(spacing::MD)
                .width(Length::Fill)
                .style(|theme: &Theme| container::Style {
                    background: Some(theme.extended_palette().background.weak.color.into()),
                    border: Border {
                        radius: radius::MD.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                }),
        );
    }
    column.into()
}

fn contact_row<'a>(i18n: &I18n, card: &'a Card) -> Element<'a, Message> {
    let phone = card
        .phone
        .as_deref()
        .map(|number| format!("{} {}", i18n.tr("info-call"), format_phone_number(number)))
        .unwrap_or_default();

    Container::new(
        Row::new()
            .spacing(spacing::MD)
            .align_y(Vertical::Center)
            .push(Text::new(card.title.as_str()).size(typography::BODY).width(Length::Fill))
            .push(Text::new(phone).size(typography::BODY)),
    )
    .padding(spacing::SM)
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booklet::CardKind;

    #[test]
    fn toggle_expands_and_collapses() {
        let mut state = State::new();
        assert!(!state.is_expanded(0));

        update(&mut state, Message::ToggleItem(0));
        assert!(state.is_expanded(0));

        update(&mut state, Message::ToggleItem(0));
        assert!(!state.is_expanded(0));
    }

    #[test]
    fn multiple_items_can_be_expanded() {
        let mut state = State::new();
        update(&mut state, Message::ToggleItem(0));
        update(&mut state, Message::ToggleItem(2));

        assert!(state.is_expanded(0));
        assert!(!state.is_expanded(1));
        assert!(state.is_expanded(2));
    }

    #[test]
    fn info_view_renders() {
        let i18n = I18n::default();
        let mut state = State::new();
        state.toggle(0);
        let accordions = vec![AccordionItem {
            title: "Wi-Fi".into(),
            body: "Network: azur".into(),
        }];
        let card = Card {
            kind: CardKind::Contact,
            title: "Host".into(),
            body: String::new(),
            phone: Some("0612345678".into()),
        };
        let _element = view(ViewContext {
            i18n: &i18n,
            state: &state,
            accordions: &accordions,
            contacts: vec![&card],
        });
    }
}
