// SPDX-License-Identifier: MPL-2.0
//! Home screen: the booklet's content sections and cards.
//!
//! Sections and cards fade in as they scroll into view. Their extents are
//! estimated from the text they hold, which is enough for a 10% visibility
//! threshold.

use crate::booklet::phone::format_phone_number;
use crate::booklet::{Card, CardKind, Section};
use crate::config::REVEAL_THRESHOLD;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::reveal::RevealTracker;
use crate::ui::styles;
use iced::widget::scrollable::Viewport;
use iced::widget::{scrollable, text, Column, Container, Id, Text};
use iced::{alignment::Horizontal, Color, Element, Length, Theme};

/// Identifier of the home scrollable.
pub const SCROLLABLE_ID: &str = "home-scrollable";

/// Average glyph width relative to the font size.
const GLYPH_WIDTH_RATIO: f32 = 0.55;
/// Line height relative to the font size.
const LINE_HEIGHT_RATIO: f32 = 1.3;

/// A revealable block of the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Block {
    Section(usize),
    Card { section: usize, card: usize },
}

#[derive(Debug, Clone)]
pub struct State {
    blocks: Vec<Block>,
    reveal: RevealTracker,
    /// Last scroll offset reported by the scrollable.
    scroll_top: f32,
}

impl State {
    /// Lays out the blocks of `sections` and starts observing them.
    #[must_use]
    pub fn new(title: &str, sections: &[Section]) -> Self {
        let text_width = sizing::CONTENT_MAX_WIDTH - 2.0 * spacing::LG;
        let card_width = text_width - 2.0 * spacing::MD;

        let mut blocks = Vec::new();
        let mut heights = Vec::new();
        for (index, section) in sections.iter().enumerate().filter(|(_, s)| is_shown(s)) {
            blocks.push(Block::Section(index));
            heights.push(section_height(section, text_width));
            for (card_index, card) in section.cards.iter().enumerate() {
                blocks.push(Block::Card {
                    section: index,
                    card: card_index,
                });
                heights.push(card_height(card, card_width));
            }
        }

        let header = spacing::LG + text_height(title, typography::TITLE_LG, text_width);
        Self {
            blocks,
            reveal: RevealTracker::stacked(&heights, spacing::MD, header, REVEAL_THRESHOLD),
            scroll_top: 0.0,
        }
    }

    /// Reveals blocks visible in the given viewport.
    pub fn observe(&mut self, top: f32, height: f32) {
        if self.reveal.all_revealed() {
            return;
        }
        let newly = self.reveal.observe(top, height);
        if newly > 0 {
            tracing::trace!(newly, "blocks revealed");
        }
    }

    /// Re-observes at the current offset with a new viewport height.
    ///
    /// The scrollable stays silent while its content fits, so the window
    /// size is the only signal for short pages.
    pub fn resize(&mut self, viewport_height: f32) {
        self.observe(self.scroll_top, viewport_height);
    }

    fn is_revealed(&self, block: Block) -> bool {
        self.blocks
            .iter()
            .position(|b| *b == block)
            .is_some_and(|index| self.reveal.is_revealed(index))
    }

    /// Number of blocks on the screen.
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        (0..self.blocks.len())
            .filter(|index| self.reveal.is_revealed(*index))
            .count()
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Scrolled(Viewport),
}

pub fn update(state: &mut State, message: Message) {
    match message {
        Message::Scrolled(viewport) => {
            state.scroll_top = viewport.absolute_offset().y;
            state.observe(state.scroll_top, viewport.bounds().height);
        }
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub title: &'a str,
    pub sections: &'a [Section],
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new()
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .push(Text::new(ctx.title).size(typography::TITLE_LG));

    if ctx.state.blocks.is_empty() {
        content = content.push(text(ctx.i18n.tr("home-empty")).size(typography::BODY));
    }

    for block in &ctx.state.blocks {
        let revealed = ctx.state.is_revealed(*block);
        let element = match *block {
            Block::Section(index) => section_view(&ctx.sections[index], revealed),
            Block::Card { section, card } => {
                card_view(&ctx.sections[section].cards[card], revealed)
            }
        };
        content = content.push(element);
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

fn is_shown(section: &Section) -> bool {
    !section.paragraphs.is_empty() || !section.cards.is_empty()
}

/// Text style of a block, faded until revealed.
fn reveal_style(revealed: bool) -> impl Fn(&Theme) -> text::Style {
    move |theme: &Theme| {
        let base = theme.palette().text;
        let alpha = if revealed {
            opacity::OPAQUE
        } else {
            opacity::OVERLAY_SUBTLE
        };
        text::Style {
            color: Some(Color { a: alpha, ..base }),
        }
    }
}

fn section_view(section: &Section, revealed: bool) -> Element<'_, Message> {
    let mut column = Column::new().spacing(spacing::XS);
    if !section.title.is_empty() {
        column = column.push(
            Text::new(section.title.as_str())
                .size(typography::TITLE_MD)
                .style(reveal_style(revealed)),
        );
    }
    for paragraph in &section.paragraphs {
        column = column.push(
            Text::new(paragraph.as_str())
                .size(typography::BODY)
                .style(reveal_style(revealed)),
        );
    }
    column.into()
}

fn card_view(card: &Card, revealed: bool) -> Element<'_, Message> {
    let mut column = Column::new().spacing(spacing::XXS).push(
        Text::new(card.title.as_str())
            .size(typography::TITLE_SM)
            .style(reveal_style(revealed)),
    );
    if !card.body.is_empty() {
        column = column.push(
            Text::new(card.body.as_str())
                .size(typography::BODY)
                .style(reveal_style(revealed)),
        );
    }
    if let (CardKind::Contact, Some(phone)) = (card.kind, card.phone.as_deref()) {
        column = column.push(
            Text::new(format_phone_number(phone))
                .size(typography::BODY)
                .style(reveal_style(revealed)),
        );
    }

    Container::new(column)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::card)
        .into()
}

fn text_height(content: &str, size: f32, width: f32) -> f32 {
    if content.is_empty() {
        return 0.0;
    }
    let per_line = (width / (size * GLYPH_WIDTH_RATIO)).max(1.0);
    #[allow(clippy::cast_precision_loss)]
    let glyphs = content.chars().count() as f32;
    (glyphs / per_line).ceil().max(1.0) * size * LINE_HEIGHT_RATIO
}

fn section_height(section: &Section, width: f32) -> f32 {
    let paragraphs: f32 = section
        .paragraphs
        .iter()
        .map(|p| text_height(p, typography::BODY, width) + spacing::XS)
        .sum();
    text_height(&section.title, typography::TITLE_MD, width) + paragraphs
}

fn card_height(card: &Card, width: f32) -> f32 {
    let phone = if card.phone.is_some() {
        typography::BODY * LINE_HEIGHT_RATIO
    } else {
        0.0
    };
    2.0 * spacing::MD
        + text_height(&card.title, typography::TITLE_SM, width)
        + text_height(&card.body, typography::BODY, width)
        + phone
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(title: &str, paragraphs: usize, cards: usize) -> Section {
        Section {
            id: None,
            title: title.to_string(),
            paragraphs: (0..paragraphs).map(|i| format!("Paragraph {i}")).collect(),
            cards: (0..cards)
                .map(|i| Card {
                    kind: CardKind::Activity,
                    title: format!("Card {i}"),
                    body: "Some text".to_string(),
                    phone: None,
                })
                .collect(),
        }
    }

    #[test]
    fn sections_without_content_are_not_blocks() {
        let state = State::new("Villa", &[section("Map", 0, 0), section("House", 1, 2)]);
        assert_eq!(state.block_count(), 3);
    }

    #[test]
    fn nothing_is_revealed_before_observation() {
        let state = State::new("Villa", &[section("House", 2, 1)]);
        assert_eq!(state.revealed_count(), 0);
    }

    #[test]
    fn first_screen_reveals_top_blocks() {
        let sections: Vec<_> = (0..20).map(|i| section(&format!("S{i}"), 3, 2)).collect();
        let mut state = State::new("Villa", &sections);
        state.observe(0.0, 600.0);

        let revealed = state.revealed_count();
        assert!(revealed > 0);
        assert!(revealed < state.block_count());

        state.observe(100_000.0, 600.0);
        assert_eq!(state.revealed_count(), revealed);
        state.observe(0.0, 100_000.0);
        assert_eq!(state.revealed_count(), state.block_count());
    }

    #[test]
    fn short_page_is_revealed_by_window_height() {
        let mut state = State::new("Villa", &[section("House", 1, 1)]);
        state.resize(600.0);
        assert_eq!(state.revealed_count(), state.block_count());
    }

    #[test]
    fn resize_keeps_scroll_offset() {
        let sections: Vec<_> = (0..20).map(|i| section(&format!("S{i}"), 3, 2)).collect();
        let mut state = State::new("Villa", &sections);
        state.scroll_top = 100_000.0;
        state.resize(600.0);
        assert!(!state.is_revealed(state.blocks[0]));
    }

    #[test]
    fn text_height_grows_with_length() {
        let short = text_height("short", typography::BODY, 400.0);
        let long = text_height(&"long ".repeat(200), typography::BODY, 400.0);
        assert!(long > short);
        assert_eq!(text_height("", typography::BODY, 400.0), 0.0);
    }

    #[test]
    fn home_view_renders() {
        let i18n = I18n::default();
        let sections = vec![section("House", 1, 1)];
        let state = State::new("Villa", &sections);
        let _element = view(ViewContext {
            i18n: &i18n,
            state: &state,
            title: "Villa",
            sections: &sections,
        });
    }
}
