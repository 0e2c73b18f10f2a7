// SPDX-License-Identifier: MPL-2.0
//! `welcome_booklet` presents a vacation-rental welcome booklet built with the
//! Iced GUI framework.
//!
//! A booklet is a single HTML document. It is read once into a [`booklet::Booklet`]
//! and shown as a welcome splash, content sections, a point-of-interest map,
//! an image gallery with a lightbox, and practical information.

pub mod app;
pub mod booklet;
pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod logging;
pub mod map;
pub mod ui;
