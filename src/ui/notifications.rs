// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for startup warnings.
//!
//! Notifications carry an i18n key rather than text, so they follow language
//! changes. They stay until dismissed.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length};

/// Maximum number of notifications visible at once.
const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    fn color(self) -> Color {
        match self {
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }
}

pub type NotificationId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message_key: String,
}

impl Notification {
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
}

/// Queue of notifications, newest first.
#[derive(Debug, Default)]
pub struct Manager {
    visible: Vec<Notification>,
    last_id: NotificationId,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a notification. The oldest one is dropped beyond the visible limit.
    pub fn push(&mut self, severity: Severity, message_key: impl Into<String>) {
        self.last_id += 1;
        let notification = Notification {
            id: self.last_id,
            severity,
            message_key: message_key.into(),
        };
        tracing::warn!(key = notification.message_key(), ?severity, "notification");

        self.visible.insert(0, notification);
        self.visible.truncate(MAX_VISIBLE);
    }

    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.visible.len();
        self.visible.retain(|n| n.id != id);
        self.visible.len() != before
    }

    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(id);
            }
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Renders the visible toasts stacked in the bottom-right corner.
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let toasts = self.visible.iter().map(|notification| toast(notification, i18n));

        Container::new(
            Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .into()
    }
}

fn toast<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
    let message = Text::new(i18n.tr(notification.message_key())).size(typography::BODY);
    let dismiss = button(text("×").size(typography::TITLE_SM))
        .on_press(Message::Dismiss(notification.id()))
        .padding([0.0, spacing::XS])
        .style(styles::button::text_row);

    let dismiss = styles::tooltip::styled(
        dismiss,
        i18n.tr("notification-dismiss"),
        iced::widget::tooltip::Position::Left,
    );

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(message).width(Length::Fill))
        .push(dismiss);

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(styles::container::toast(notification.severity().color()))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_keeps_newest_first() {
        let mut manager = Manager::new();
        manager.push(Severity::Warning, "first");
        manager.push(Severity::Error, "second");

        let keys: Vec<_> = manager.visible().map(Notification::message_key).collect();
        assert_eq!(keys, vec!["second", "first"]);
    }

    #[test]
    fn visible_count_is_capped() {
        let mut manager = Manager::new();
        for key in ["a", "b", "c", "d"] {
            manager.push(Severity::Warning, key);
        }
        assert_eq!(manager.visible().count(), MAX_VISIBLE);
        assert!(manager.visible().all(|n| n.message_key() != "a"));
    }

    #[test]
    fn dismiss_removes_by_id() {
        let mut manager = Manager::new();
        manager.push(Severity::Warning, "a");
        let id = manager.visible().next().map(Notification::id).expect("pushed");

        manager.handle_message(Message::Dismiss(id));
        assert!(manager.is_empty());
        assert!(!manager.dismiss(id));
    }
}
