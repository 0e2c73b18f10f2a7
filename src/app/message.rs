// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::gallery::{KeyCommand, Timer};
use crate::ui::gallery::{self, lightbox_view};
use crate::ui::{home, info, map_view, navbar, notifications, welcome};
use iced::Size;
use std::path::PathBuf;
use std::time::Instant;

/// Touch input routed to the lightbox while it is open.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchInput {
    Pressed { finger: u64, x: f32 },
    Lifted { finger: u64, x: f32 },
    Lost { finger: u64 },
}

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Welcome(welcome::Message),
    Home(home::Message),
    Map(map_view::Message),
    Gallery(gallery::Message),
    Info(info::Message),
    Notification(notifications::Message),
    /// Pointer input on the lightbox overlay.
    Lightbox(lightbox_view::Message),
    LightboxKey(KeyCommand),
    LightboxTouch(TouchInput),
    /// A delayed lightbox transition is due.
    LightboxTimer(Timer),
    /// Re-read the booklet; starts a new visit in the same session.
    Reload,
    /// The window's inner size changed.
    WindowResized(Size),
    /// Animation frame while a lightbox fade is running.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Booklet document or directory. The embedded sample is used when absent.
    pub booklet_path: Option<PathBuf>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `WELCOME_BOOKLET_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
