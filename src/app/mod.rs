// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the booklet screens.
//!
//! The `App` struct wires together the loaded booklet, localization, user
//! preferences and the per-screen states, and translates messages into side
//! effects such as delayed lightbox transitions or scroll restoration.

mod message;
pub mod paths;
mod screen;
pub mod session;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message, TouchInput};
pub use screen::Screen;
pub use subscription::InputOwner;

use crate::booklet::Booklet;
use crate::config::{self, Config};
use crate::gallery::{Lightbox, Timing};
use crate::i18n::fluent::I18n;
use crate::map::{self, MapState};
use crate::ui::gallery::{self as gallery_ui, LightboxFade, Picture};
use crate::ui::notifications::{self, Severity};
use crate::ui::design_tokens::sizing;
use crate::ui::theming::ThemeMode;
use crate::ui::{home, info};
use iced::{window, Element, Subscription, Task, Theme};
use session::{MemorySession, WelcomeGate};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    theme_mode: ThemeMode,
    screen: Screen,
    booklet: Booklet,
    /// Path given on the command line, re-read on reload.
    booklet_path: Option<PathBuf>,
    session: MemorySession,
    welcome: WelcomeGate,
    home: home::State,
    map: MapState,
    gallery: gallery_ui::State,
    pictures: Vec<Picture>,
    lightbox: Lightbox,
    fade: LightboxFade,
    info: info::State,
    notifications: notifications::Manager,
    /// Height available to a screen below the navigation bar.
    viewport_height: f32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("booklet", &self.booklet.title)
            .field("lightbox_open", &self.lightbox.is_open())
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings.
#[allow(clippy::cast_precision_loss)]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot function; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the application from preferences and the booklet named in
    /// `flags`, falling back to the embedded sample.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        let (booklet, booklet_warning) = Booklet::load_or_sample(flags.booklet_path.as_deref());

        let mut app = Self::with_booklet(config, flags.lang, booklet, flags.booklet_path);
        if let Some(key) = config_warning {
            app.notifications.push(Severity::Warning, key);
        }
        if let Some(key) = booklet_warning {
            app.notifications.push(Severity::Warning, key);
        }

        (app, Task::none())
    }

    /// Assembles the state for an already loaded booklet.
    #[allow(clippy::cast_precision_loss)]
    pub fn with_booklet(
        config: Config,
        lang: Option<String>,
        booklet: Booklet,
        booklet_path: Option<PathBuf>,
    ) -> Self {
        let i18n = I18n::new(lang, &config);
        let theme_mode = config.general.theme_mode;
        let session = MemorySession::new();
        let now = Instant::now();

        let mut app = Self {
            i18n,
            theme_mode,
            screen: Screen::default(),
            booklet: Booklet::empty(),
            booklet_path,
            welcome: WelcomeGate::on_load(&session, false),
            session,
            home: home::State::new("", &[]),
            map: map::bind(&config.map, &[]),
            gallery: gallery_ui::State::default(),
            pictures: Vec::new(),
            lightbox: Lightbox::new(Vec::new(), Timing::from(&config.gallery)),
            fade: LightboxFade::new(now),
            info: info::State::new(),
            notifications: notifications::Manager::new(),
            viewport_height: screen_height(WINDOW_DEFAULT_HEIGHT as f32),
            config,
        };
        app.install(booklet);
        app
    }

    /// Replaces the booklet and starts a new visit.
    fn install(&mut self, booklet: Booklet) {
        self.home = home::State::new(&booklet.title, &booklet.sections);
        self.home.resize(self.viewport_height);
        self.map = map::bind(&self.config.map, &booklet.points);
        self.pictures = Picture::resolve_all(&booklet.images);
        self.lightbox
            .reset(booklet.images.clone(), Timing::from(&self.config.gallery));
        self.fade = LightboxFade::new(Instant::now());
        self.gallery = gallery_ui::State::default();
        self.info = info::State::new();
        self.welcome = WelcomeGate::on_load(&self.session, booklet.welcome.is_some());
        self.booklet = booklet;
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("app-title");
        if self.booklet.title.is_empty() {
            app_name
        } else {
            format!("{} - {app_name}", self.booklet.title)
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let owner = InputOwner::resolve(
            self.screen,
            self.welcome.overlay_active(),
            self.lightbox.is_open(),
        );
        let event_sub = subscription::create_event_subscription(owner);
        let window_sub = subscription::create_window_subscription();
        let tick_sub =
            subscription::create_tick_subscription(self.fade.is_animating(Instant::now()));

        Subscription::batch([event_sub, window_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    /// Records a new window height and lets the home screen reveal what fits.
    fn resize(&mut self, window_height: f32) {
        self.viewport_height = screen_height(window_height);
        self.home.resize(self.viewport_height);
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn booklet(&self) -> &Booklet {
        &self.booklet
    }

    #[must_use]
    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    #[must_use]
    pub fn welcome(&self) -> WelcomeGate {
        self.welcome
    }

    #[must_use]
    pub fn map_state(&self) -> &MapState {
        &self.map
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }
}

fn screen_height(window_height: f32) -> f32 {
    (window_height - sizing::NAVBAR_HEIGHT).max(0.0)
}
