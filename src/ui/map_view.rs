// SPDX-License-Identifier: MPL-2.0
//! Map screen: a canvas with the points of interest and a list beside it.
//!
//! Tiles are not downloaded. The canvas draws a land background with the
//! tile grid of the configured zoom level so marker placement stays readable.
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]

use crate::booklet::PointOfInterest;
use crate::i18n::fluent::I18n;
use crate::map::{self, MapModel, MapState, TILE_SIZE};
use crate::ui::design_tokens::{border, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::canvas::{self, Frame, Path, Stroke};
use iced::widget::{button, scrollable, Action, Column, Container, Row, Text};
use iced::{mouse, Element, Length, Point, Rectangle, Size, Vector};

/// Messages emitted by the map screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A marker was clicked on the canvas.
    SelectMarker(usize),
    /// A point of interest was picked from the list.
    SelectPoint(usize),
    ClearSelection,
}

pub fn update(state: &mut MapState, points: &[PointOfInterest], message: Message) {
    let Some(model) = state.model_mut() else {
        return;
    };
    match message {
        Message::SelectMarker(index) => model.select(index),
        Message::SelectPoint(poi_index) => match MapModel::marker_for_point(points, poi_index) {
            Some(index) => model.select(index),
            None => model.clear_selection(),
        },
        Message::ClearSelection => model.clear_selection(),
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a MapState,
    pub points: &'a [PointOfInterest],
    pub colors: ColorScheme,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let header = Text::new(ctx.i18n.tr("map-title")).size(typography::TITLE_LG);

    let body: Element<'a, Message> = match ctx.state {
        MapState::Unavailable(reason) => Container::new(
            Text::new(ctx.i18n.tr(reason.i18n_key())).size(typography::BODY_LG),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(styles::container::placeholder)
        .into(),
        MapState::Ready(model) => {
            let canvas = canvas::Canvas::new(MapCanvas {
                model,
                colors: ctx.colors.clone(),
            })
            .width(Length::Fill)
            .height(Length::Fill);

            Row::new()
                .spacing(spacing::MD)
                .push(canvas)
                .push(point_list(ctx.i18n, model, ctx.points, &ctx.colors))
                .height(Length::Fill)
                .into()
        }
    };

    Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .push(header)
        .push(body)
        .into()
}

fn point_list<'a>(
    i18n: &'a I18n,
    model: &'a MapModel,
    points: &'a [PointOfInterest],
    colors: &ColorScheme,
) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(i18n.tr("map-points-title")).size(typography::TITLE_SM));

    for (index, point) in points.iter().enumerate() {
        let mut entry = Column::new().push(Text::new(point.title.as_str()).size(typography::BODY));
        if point.coordinates().is_none() {
            entry = entry.push(Text::new(i18n.tr("map-no-coordinates")).size(typography::CAPTION));
        }
        column = column.push(
            button(entry)
                .width(Length::Fill)
                .padding(spacing::XS)
                .style(styles::button::text_row)
                .on_press(Message::SelectPoint(index)),
        );
    }

    if let Some(marker) = model.selected_marker() {
        let popup = Column::new()
            .spacing(spacing::XS)
            .push(Text::new(marker.title.as_str()).size(typography::BODY))
            .push(
                button(Text::new(i18n.tr("map-popup-close")).size(typography::CAPTION))
                    .padding([spacing::XXS, spacing::XS])
                    .style(styles::button::unselected)
                    .on_press(Message::ClearSelection),
            );
        column = column.push(
            Container::new(popup)
                .width(Length::Fill)
                .padding(spacing::SM)
                .style(styles::container::popup(colors.clone())),
        );
    }

    Container::new(scrollable(column))
        .width(Length::Fixed(sizing::POI_LIST_WIDTH))
        .height(Length::Fill)
        .into()
}

/// Screen position of every marker inside a canvas of `size`.
fn marker_positions(model: &MapModel, size: Size) -> Vec<Point> {
    let origin = Point::new(size.width / 2.0, size.height / 2.0);
    model
        .markers
        .iter()
        .map(|marker| {
            let (dx, dy) = map::project(marker.position, model.center, model.zoom);
            origin + Vector::new(dx, dy)
        })
        .collect()
}

/// Index of the marker closest to `cursor` within the hit radius.
#[must_use]
pub fn hit_test(model: &MapModel, size: Size, cursor: Point) -> Option<usize> {
    marker_positions(model, size)
        .into_iter()
        .enumerate()
        .map(|(index, position)| (index, position.distance(cursor)))
        .filter(|(_, distance)| *distance <= sizing::MARKER_HIT_RADIUS)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(index, _)| index)
}

/// Canvas program drawing the map background and markers.
struct MapCanvas<'a> {
    model: &'a MapModel,
    colors: ColorScheme,
}

impl canvas::Program<Message> for MapCanvas<'_> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        let iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) = event else {
            return None;
        };
        let position = cursor.position_in(bounds)?;

        let message = match hit_test(self.model, bounds.size(), position) {
            Some(index) => Message::SelectMarker(index),
            None => Message::ClearSelection,
        };
        Some(Action::publish(message).and_capture())
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), self.colors.map_land);

        self.draw_grid(&mut frame, bounds.size());

        let positions = marker_positions(self.model, bounds.size());
        for (index, position) in positions.iter().enumerate() {
            let selected = self.model.selected == Some(index);
            let color = if selected {
                self.colors.marker_selected
            } else {
                self.colors.marker
            };
            let radius = if selected {
                sizing::MARKER_RADIUS + border::WIDTH_MD
            } else {
                sizing::MARKER_RADIUS
            };
            let dot = Path::circle(*position, radius);
            frame.fill(&dot, color);
            frame.stroke(
                &dot,
                Stroke::default()
                    .with_width(border::WIDTH_MD)
                    .with_color(self.colors.popup_background),
            );
        }

        if let Some((marker, position)) = self
            .model
            .selected
            .and_then(|index| Some((self.model.markers.get(index)?, positions.get(index)?)))
        {
            self.draw_popup(&mut frame, *position, &marker.title);
        }

        frame.fill_text(canvas::Text {
            content: self.model.tile_layer.attribution.clone(),
            position: Point::new(spacing::XS, bounds.height - spacing::MD - spacing::XXS),
            color: self.colors.popup_text,
            size: typography::CAPTION.into(),
            ..canvas::Text::default()
        });

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        match cursor.position_in(bounds) {
            Some(position) if hit_test(self.model, bounds.size(), position).is_some() => {
                mouse::Interaction::Pointer
            }
            _ => mouse::Interaction::default(),
        }
    }
}

impl MapCanvas<'_> {
    /// Tile boundaries at the current zoom, aligned with the map center.
    fn draw_grid(&self, frame: &mut Frame, size: Size) {
        let tile = TILE_SIZE as f32;
        let (cx, cy) = map::projection::world_pixel(self.model.center, self.model.zoom);
        let offset_x = (size.width / 2.0 - cx.rem_euclid(TILE_SIZE) as f32).rem_euclid(tile);
        let offset_y = (size.height / 2.0 - cy.rem_euclid(TILE_SIZE) as f32).rem_euclid(tile);
        let stroke = Stroke::default()
            .with_width(border::WIDTH_SM)
            .with_color(self.colors.map_grid);

        let mut x = offset_x;
        while x < size.width {
            frame.stroke(&Path::line(Point::new(x, 0.0), Point::new(x, size.height)), stroke);
            x += tile;
        }
        let mut y = offset_y;
        while y < size.height {
            frame.stroke(&Path::line(Point::new(0.0, y), Point::new(size.width, y)), stroke);
            y += tile;
        }
    }

    fn draw_popup(&self, frame: &mut Frame, anchor: Point, title: &str) {
        let height = typography::BODY + 2.0 * spacing::XS;
        let top_left = Point::new(
            anchor.x - sizing::POPUP_WIDTH / 2.0,
            anchor.y - sizing::MARKER_RADIUS - spacing::XS - height,
        );
        let bubble = Path::rectangle(top_left, Size::new(sizing::POPUP_WIDTH, height));
        frame.fill(&bubble, self.colors.popup_background);
        frame.stroke(
            &bubble,
            Stroke::default()
                .with_width(border::WIDTH_SM)
                .with_color(self.colors.marker_selected),
        );
        frame.fill_text(canvas::Text {
            content: title.to_string(),
            position: top_left + Vector::new(spacing::XS, spacing::XS),
            color: self.colors.popup_text,
            size: typography::BODY.into(),
            ..canvas::Text::default()
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MapConfig;

    fn poi(lat: Option<f64>, lng: Option<f64>, title: &str) -> PointOfInterest {
        PointOfInterest {
            lat,
            lng,
            title: title.to_string(),
            icon: "home".to_string(),
        }
    }

    fn ready(points: &[PointOfInterest]) -> MapState {
        let config = MapConfig {
            center_lat: 43.5,
            center_lng: 6.5,
            zoom: 13,
            ..MapConfig::default()
        };
        map::bind(&config, points)
    }

    #[test]
    fn marker_at_center_is_hit() {
        let points = [poi(Some(43.5), Some(6.5), "Villa")];
        let state = ready(&points);
        let model = state.model().expect("map enabled");
        let size = Size::new(400.0, 300.0);

        assert_eq!(hit_test(model, size, Point::new(200.0, 300.0 / 2.0)), Some(0));
        assert_eq!(hit_test(model, size, Point::new(210.0, 150.0)), Some(0));
        assert_eq!(hit_test(model, size, Point::new(260.0, 150.0)), None);
    }

    #[test]
    fn selecting_a_point_opens_its_marker() {
        let points = [
            poi(None, None, "Nowhere"),
            poi(Some(43.5), Some(6.5), "Villa"),
        ];
        let mut state = ready(&points);

        update(&mut state, &points, Message::SelectPoint(1));
        assert_eq!(state.model().and_then(|m| m.selected), Some(0));

        update(&mut state, &points, Message::SelectPoint(0));
        assert_eq!(state.model().and_then(|m| m.selected), None);
    }

    #[test]
    fn clear_selection_closes_popup() {
        let points = [poi(Some(43.5), Some(6.5), "Villa")];
        let mut state = ready(&points);
        update(&mut state, &points, Message::SelectMarker(0));
        update(&mut state, &points, Message::ClearSelection);
        assert_eq!(state.model().and_then(|m| m.selected), None);
    }

    #[test]
    fn unavailable_map_ignores_messages() {
        let config = MapConfig {
            enabled: false,
            ..MapConfig::default()
        };
        let mut state = map::bind(&config, &[]);
        update(&mut state, &[], Message::SelectMarker(0));
        assert!(state.model().is_none());
    }
}
