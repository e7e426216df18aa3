// Copyright 2026 the Tapguard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Guard configuration.

use alloc::string::String;

/// Class that marks a control as guarded.
pub const DISABLE_SELECTOR_CLASS: &str = "disable-double-submit";

/// Attribute holding the text shown while a control is disabled.
pub const LOADING_ATTRIBUTE: &str = "data-disable-with";

/// Class added to styled controls and links while disabled.
pub const DISABLED_CLASS: &str = "disabled";

/// `href` given to disabled links so that following them does nothing.
pub const INERT_HREF: &str = "javascript:void(0)";

/// Cooldown before guarded controls are re-enabled.
pub const DEFAULT_TIMEOUT_MS: u32 = 3000;

/// Names and timings used by a [`Guard`](crate::guard::Guard).
///
/// ```
/// use tapguard::config::GuardConfig;
///
/// let config = GuardConfig {
///     timeout_ms: 1500,
///     ..GuardConfig::default()
/// };
/// assert_eq!(config.selector_class, "disable-double-submit");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardConfig {
    /// Class selecting guarded controls.
    pub selector_class: String,
    /// Attribute read for loading text.
    pub loading_attribute: String,
    /// Class toggled on styled controls and links.
    pub disabled_class: String,
    /// Replacement `href` for disabled links.
    pub inert_href: String,
    /// Cooldown used by the delegated click listener.
    pub timeout_ms: u32,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            selector_class: DISABLE_SELECTOR_CLASS.into(),
            loading_attribute: LOADING_ATTRIBUTE.into(),
            disabled_class: DISABLED_CLASS.into(),
            inert_href: INERT_HREF.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}
