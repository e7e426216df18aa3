// Copyright 2026 the Tapguard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Leveled diagnostics.
//!
//! The guard traces its state transitions through [`tracing`] events
//! (`new button`, `add hidden`, `start prevent double click`, and so on).
//! Without a subscriber those events cost nothing and go nowhere, so the
//! guard runs the same whether or not the host has logging.
//!
//! [`LogLevel`] names the four levels the guard uses and converts into
//! `tracing`'s types. With the `std` feature, [`init`] installs a console
//! subscriber whose minimum level is the global threshold.

use core::fmt;
use core::str::FromStr;

use tracing::Level;
use tracing::level_filters::LevelFilter;

/// Minimum severity of emitted diagnostics.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum LogLevel {
    /// Every state transition.
    #[default]
    Debug,
    /// Notable events only.
    Info,
    /// Suspicious situations.
    Warn,
    /// Failures.
    Error,
}

impl LogLevel {
    /// Lowercase name, as accepted by [`FromStr`].
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        Self::from_level(level.into())
    }
}

/// Error returned when a string names no [`LogLevel`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ParseLogLevelError;

impl fmt::Display for ParseLogLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected one of: debug, info, warn, error")
    }
}

impl core::error::Error for ParseLogLevelError {}

impl FromStr for LogLevel {
    type Err = ParseLogLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Debug, Self::Info, Self::Warn, Self::Error]
            .into_iter()
            .find(|l| s.trim().eq_ignore_ascii_case(l.as_str()))
            .ok_or(ParseLogLevelError)
    }
}

/// Install a console subscriber that shows events at `level` and above.
///
/// `RUST_LOG`, when set, takes precedence. Returns false if a global
/// subscriber was already installed; that subscriber stays in place.
#[cfg(feature = "std")]
pub fn init(level: LogLevel) -> bool {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}
