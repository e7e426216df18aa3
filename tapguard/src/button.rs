// Copyright 2026 the Tapguard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-control state machine.
//!
//! ## States
//!
//! `Enabled --disable()--> Disabled --enable()--> Enabled`.
//!
//! While disabled the control carries the `disabled` attribute and, if a
//! loading text is configured and the original label is non-empty, shows the
//! loading label. Styled controls and links also carry the disabled class,
//! and links point at an inert `href`. `enable()` undoes each step exactly.

use alloc::string::String;

use crate::config::GuardConfig;
use crate::types::{ButtonKind, Dom};
use crate::variant::{Accessor, Variant};

bitflags::bitflags! {
    /// State bits of a guarded control.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ControlFlags: u8 {
        /// The control accepts activation.
        const ENABLED         = 0b0000_0001;
        /// A hidden replay field has been inserted after the control.
        const REPLAY_INJECTED = 0b0000_0010;
    }
}

impl Default for ControlFlags {
    fn default() -> Self {
        Self::ENABLED
    }
}

/// State of one guarded control.
///
/// Created by classification (see [`Guard::classify`](crate::guard::Guard::classify))
/// and kept for as long as the element lives.
#[derive(Clone, Debug)]
pub struct ButtonState<E> {
    element: E,
    variant: Variant,
    flags: ControlFlags,
    original: String,
    loading: Option<String>,
    form: Option<E>,
    /// Class added by the last `disable`, removed again by `enable`.
    disabled_class: Option<String>,
}

impl<E: Copy + Eq + core::fmt::Debug> ButtonState<E> {
    /// Capture the presentation of `el` and build its state.
    ///
    /// For markup labels the loading markup is derived from the original by
    /// replacing the first occurrence of the element's plain text, so that
    /// icons and wrapping tags survive the swap.
    pub fn new<D: Dom<Element = E>>(
        dom: &D,
        el: E,
        kind: ButtonKind,
        config: &GuardConfig,
    ) -> Self {
        let variant = Variant::capture(dom, el, kind);
        let accessor = variant.accessor();
        let original = accessor.read(dom, el);
        let configured = dom
            .attribute(el, &config.loading_attribute)
            .filter(|l| !l.is_empty());
        let loading = match (accessor, configured) {
            (Accessor::Markup, Some(text)) if !original.is_empty() => {
                let plain = dom.text_content(el);
                Some(original.replacen(&plain, &text, 1))
            }
            (_, configured) => configured,
        };
        Self {
            element: el,
            variant,
            flags: ControlFlags::default(),
            original,
            loading,
            form: dom.closest(el, "form"),
            disabled_class: None,
        }
    }

    /// The governed element.
    pub fn element(&self) -> E {
        self.element
    }

    /// Kind chosen at classification.
    pub fn kind(&self) -> ButtonKind {
        self.variant.kind()
    }

    /// State bits.
    pub fn flags(&self) -> ControlFlags {
        self.flags
    }

    /// Returns true unless the control is in its cooldown.
    pub fn is_enabled(&self) -> bool {
        self.flags.contains(ControlFlags::ENABLED)
    }

    /// Returns true once a replay field has been inserted.
    pub fn hidden_field_injected(&self) -> bool {
        self.flags.contains(ControlFlags::REPLAY_INJECTED)
    }

    /// Label captured at construction.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Label shown while disabled, if configured.
    pub fn loading(&self) -> Option<&str> {
        self.loading.as_deref()
    }

    /// Nearest enclosing form.
    pub fn form(&self) -> Option<E> {
        self.form
    }

    /// Returns true if the control sits inside a form.
    pub fn has_form(&self) -> bool {
        self.form.is_some()
    }

    /// `href` restored on enable; links only.
    pub fn original_href(&self) -> Option<&str> {
        self.variant.href()
    }

    /// Enter the disabled state.
    ///
    /// The disabled class in effect is remembered, so a later `enable`
    /// removes that class even if the configuration changed in between.
    pub fn disable<D: Dom<Element = E>>(&mut self, dom: &mut D, config: &GuardConfig) {
        let el = self.element;
        let class: &str = self
            .disabled_class
            .get_or_insert_with(|| config.disabled_class.clone());
        self.variant.before_disable(dom, el, class);
        self.flags.remove(ControlFlags::ENABLED);
        dom.set_attribute(el, "disabled", "disabled");
        if let Some(loading) = self.swap_label() {
            self.variant.accessor().write(dom, el, loading);
        }
        self.variant.after_disable(dom, el, config);
    }

    /// Leave the disabled state, restoring what `disable` changed.
    pub fn enable<D: Dom<Element = E>>(&mut self, dom: &mut D, config: &GuardConfig) {
        let el = self.element;
        let class = self
            .disabled_class
            .take()
            .unwrap_or_else(|| config.disabled_class.clone());
        self.variant.before_enable(dom, el, &class);
        if self.swap_label().is_some() {
            self.variant.accessor().write(dom, el, &self.original);
        }
        dom.remove_attribute(el, "disabled");
        self.flags.insert(ControlFlags::ENABLED);
        self.variant.after_enable(dom, el);
    }

    /// Insert the hidden replay field once, if the control has a name.
    ///
    /// Disabled controls are left out of form submission; the hidden input
    /// carries the control's name and current value in its place.
    pub(crate) fn inject_replay_field<D: Dom<Element = E>>(&mut self, dom: &mut D) -> Option<E> {
        if self.hidden_field_injected() {
            return None;
        }
        let name = dom
            .attribute(self.element, "name")
            .filter(|n| !n.is_empty())?;
        let value = dom.value(self.element);
        let hidden = dom.insert_hidden_input_after(self.element, &name, &value);
        self.flags.insert(ControlFlags::REPLAY_INJECTED);
        hidden
    }

    // Labels only swap when both sides are non-empty.
    fn swap_label(&self) -> Option<&str> {
        self.loading
            .as_deref()
            .filter(|l| !l.is_empty() && !self.original.is_empty())
    }
}
