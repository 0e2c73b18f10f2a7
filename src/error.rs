// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Markup(MarkupError),
}

/// Problems found while reading booklet markup.
///
/// Most markup defects are tolerated (a point of interest with bad
/// coordinates is skipped, an image without a source renders broken).
/// These variants cover the cases where nothing usable can be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupError {
    /// The booklet file is not valid UTF-8.
    NotUtf8,

    /// A directory was given but it has no `index.html`.
    MissingIndex(String),

    /// A CSS selector failed to compile.
    Selector(String),
}

impl MarkupError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            MarkupError::NotUtf8 => "error-booklet-not-utf8",
            MarkupError::MissingIndex(_) => "error-booklet-missing-index",
            MarkupError::Selector(_) => "error-booklet-selector",
        }
    }
}

impl fmt::Display for MarkupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkupError::NotUtf8 => write!(f, "Booklet is not valid UTF-8"),
            MarkupError::MissingIndex(dir) => write!(f, "No index.html in {}", dir),
            MarkupError::Selector(selector) => write!(f, "Invalid selector: {}", selector),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Markup(e) => write!(f, "Markup Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<MarkupError> for Error {
    fn from(err: MarkupError) -> Self {
        Error::Markup(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(_err: std::string::FromUtf8Error) -> Self {
        Error::Markup(MarkupError::NotUtf8)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
