// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes a `ViewContext`, a `Message` enum and an `update` function, and
//! reports to the application through an `Event` when it needs to.
//!
//! # Screens
//!
//! - [`home`] - Booklet sections and cards with scroll-triggered reveal
//! - [`map_view`] - Points of interest on a map canvas
//! - [`gallery`] - Thumbnail grid and the lightbox overlay
//! - [`info`] - Accordion items and contacts
//! - [`welcome`] - Splash shown once per session
//!
//! # Shared Infrastructure
//!
//! - [`navbar`] - Section navigation
//! - [`notifications`] - Toasts for load warnings
//! - [`reveal`] - Visibility tracking for the home screen
//! - [`widgets`] - Custom Iced widgets (scroll lock)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod gallery;
pub mod home;
pub mod info;
pub mod map_view;
pub mod navbar;
pub mod notifications;
pub mod reveal;
pub mod styles;
pub mod theming;
pub mod welcome;
pub mod widgets;
