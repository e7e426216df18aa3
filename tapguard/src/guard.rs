// Copyright 2026 the Tapguard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Guard engine.
//!
//! ## Overview
//!
//! [`Guard`] owns the host [`Dom`], the [`GuardConfig`], the per-element side
//! table, the submit hooks, and the pending re-enables. Every operation runs
//! synchronously on the caller's thread; the only deferred work is the
//! re-enable pass, which runs when the host reports its timer through
//! [`Guard::handle_timer`].
//!
//! ## Strategies
//!
//! - Submit-guard: a submit control inside a form. The replay field is
//!   inserted now; the freeze happens when the form's submit event arrives
//!   (see [`Guard::handle_submit`](crate::guard::Guard::handle_submit)).
//! - Click-guard: everything else. Freeze now. Links then navigate to their
//!   original `href` themselves, since their own `href` was just parked.
//!
//! Either way the freeze covers every guarded control in the document, not
//! just the one that was activated, and it always runs to completion.

use alloc::string::String;
use alloc::vec::Vec;

use tracing::{debug, trace};

use crate::button::ButtonState;
use crate::classify::{Registry, is_submit_control};
use crate::config::GuardConfig;
use crate::types::{ButtonKind, Dom, GuardOutcome, PendingEnable, Trigger};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct SubmitHook<E> {
    pub(crate) form: E,
    pub(crate) origin: E,
    pub(crate) timeout_ms: u32,
}

/// Double-submit guard over a host document.
///
/// ## Usage
///
/// - Construct with [`Guard::new`] (conventional names, 3000 ms cooldown) or
///   [`Guard::with_config`].
/// - Forward the host's click events to [`Guard::handle_click`], submit
///   events to [`Guard::handle_submit`], and fired timers to
///   [`Guard::handle_timer`].
/// - Or drive the operations directly: [`Guard::guard`],
///   [`Guard::disable_all`], [`Guard::enable_all`].
pub struct Guard<D: Dom> {
    pub(crate) dom: D,
    pub(crate) config: GuardConfig,
    pub(crate) registry: Registry<D::Element>,
    pub(crate) hooks: Vec<SubmitHook<D::Element>>,
    pub(crate) pending: Vec<PendingEnable<D::Element, D::Timer>>,
}

impl<D: Dom> core::fmt::Debug for Guard<D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Guard")
            .field("config", &self.config)
            .field("buttons", &self.registry.len())
            .field("hooks", &self.hooks.len())
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

impl<D: Dom> Guard<D> {
    /// Create a guard with the default configuration.
    pub fn new(dom: D) -> Self {
        Self::with_config(dom, GuardConfig::default())
    }

    /// Create a guard with an explicit configuration.
    pub fn with_config(dom: D, config: GuardConfig) -> Self {
        Self {
            dom,
            config,
            registry: Registry::default(),
            hooks: Vec::new(),
            pending: Vec::new(),
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    /// Replace the configuration.
    ///
    /// Controls classified earlier keep the labels they captured, and a
    /// cooldown already running thaws what it froze under the old names.
    pub fn set_config(&mut self, config: GuardConfig) {
        self.config = config;
    }

    /// Set the cooldown used by the delegated click listener.
    pub fn set_timeout_ms(&mut self, timeout_ms: u32) {
        self.config.timeout_ms = timeout_ms;
    }

    /// Host document.
    pub fn dom(&self) -> &D {
        &self.dom
    }

    /// Host document, mutably (for building or editing the page).
    pub fn dom_mut(&mut self) -> &mut D {
        &mut self.dom
    }

    /// Give the host document back.
    pub fn into_dom(self) -> D {
        self.dom
    }

    /// State for `el`, creating it on first sight.
    ///
    /// Repeated calls return the same state; classification never replaces.
    pub fn classify(&mut self, el: D::Element) -> &ButtonState<D::Element> {
        self.registry.classify(&self.dom, el, &self.config)
    }

    /// State for `el` if it was classified before.
    pub fn button(&self, el: D::Element) -> Option<&ButtonState<D::Element>> {
        self.registry.get(el)
    }

    /// Number of controls with state.
    pub fn tracked(&self) -> usize {
        self.registry.len()
    }

    /// Re-enables waiting on host timers, oldest first.
    pub fn pending(&self) -> &[PendingEnable<D::Element, D::Timer>] {
        &self.pending
    }

    /// Returns true if a submit hook is attached to `form`.
    pub fn is_hooked(&self, form: D::Element) -> bool {
        self.hooks.iter().any(|h| h.form == form)
    }

    /// Disable one control.
    pub fn disable(&mut self, el: D::Element) {
        self.registry
            .classify(&self.dom, el, &self.config)
            .disable(&mut self.dom, &self.config);
    }

    /// Enable one control.
    pub fn enable(&mut self, el: D::Element) {
        self.registry
            .classify(&self.dom, el, &self.config)
            .enable(&mut self.dom, &self.config);
    }

    /// Disable every guarded control in the document.
    pub fn disable_all(&mut self) {
        self.sweep();
        for el in self.dom.elements_with_class(&self.config.selector_class) {
            self.disable(el);
        }
    }

    /// Enable every guarded control in the document.
    pub fn enable_all(&mut self) {
        let selector = self.config.selector_class.clone();
        self.enable_matching(&selector);
    }

    /// Guard `el` with the configured cooldown.
    pub fn guard(&mut self, el: D::Element) -> GuardOutcome {
        self.guard_with_timeout(el, self.config.timeout_ms)
    }

    /// Guard `el`: submit-guard for a submit control inside a form,
    /// click-guard otherwise. Does nothing while `el` is disabled.
    pub fn guard_with_timeout(&mut self, el: D::Element, timeout_ms: u32) -> GuardOutcome {
        let state = self.registry.classify(&self.dom, el, &self.config);
        if !state.is_enabled() {
            trace!(element = ?el, "already disabled");
            return GuardOutcome::Skipped;
        }
        if state.has_form() && is_submit_control(&self.dom, el) {
            self.guard_submit(el, timeout_ms);
            GuardOutcome::Submit
        } else {
            self.guard_click(el, timeout_ms);
            GuardOutcome::Click
        }
    }

    /// Prepare `el` for submission: insert its replay field (once) and hook
    /// its form's submit event (once per form).
    ///
    /// Guarding again refreshes the hook, so the next submit uses this call's
    /// `timeout_ms`.
    pub fn guard_submit(&mut self, el: D::Element, timeout_ms: u32) {
        let state = self.registry.classify(&self.dom, el, &self.config);
        if let Some(hidden) = state.inject_replay_field(&mut self.dom) {
            debug!(element = ?el, ?hidden, "add hidden");
        }
        let Some(form) = state.form() else {
            return;
        };
        if let Some(hook) = self.hooks.iter_mut().find(|h| h.form == form) {
            // The latest guard decides the cooldown of the next submit.
            hook.origin = el;
            hook.timeout_ms = timeout_ms;
            return;
        }
        self.hooks.push(SubmitHook {
            form,
            origin: el,
            timeout_ms,
        });
        debug!(element = ?el, ?form, "hook submit");
    }

    /// Freeze every guarded control now and schedule the thaw.
    ///
    /// Links then navigate to their original `href`.
    pub fn guard_click(&mut self, el: D::Element, timeout_ms: u32) {
        let state = self.registry.classify(&self.dom, el, &self.config);
        let follow: Option<String> = match state.kind() {
            ButtonKind::Link => state.original_href().map(String::from),
            ButtonKind::Plain | ButtonKind::Styled => None,
        };
        self.disable_all();
        self.schedule_enable_all(el, Trigger::Click, timeout_ms);
        debug!(element = ?el, "start prevent double click");
        if let Some(href) = follow {
            self.dom.navigate(&href);
        }
    }

    /// Run a fired host timer. Returns false for timers this guard did not set.
    pub fn handle_timer(&mut self, timer: D::Timer) -> bool {
        let Some(idx) = self.pending.iter().position(|p| p.timer == timer) else {
            return false;
        };
        let done = self.pending.remove(idx);
        self.enable_matching(&done.selector_class);
        match done.trigger {
            Trigger::Click => debug!(element = ?done.origin, "stop prevent double click"),
            Trigger::Submit => debug!(element = ?done.origin, "stop prevent double submit"),
        }
        true
    }

    pub(crate) fn schedule_enable_all(
        &mut self,
        origin: D::Element,
        trigger: Trigger,
        timeout_ms: u32,
    ) {
        let timer = self.dom.set_timeout(timeout_ms);
        self.pending.push(PendingEnable {
            timer,
            origin,
            trigger,
            selector_class: self.config.selector_class.clone(),
        });
    }

    fn enable_matching(&mut self, selector: &str) {
        self.sweep();
        for el in self.dom.elements_with_class(selector) {
            self.enable(el);
        }
    }

    fn sweep(&mut self) {
        let swept = self.registry.sweep(&self.dom);
        if swept > 0 {
            trace!(swept, "dropped state of removed controls");
        }
        let dom = &self.dom;
        let before = self.hooks.len();
        self.hooks.retain(|h| dom.is_alive(h.form));
        let unhooked = before - self.hooks.len();
        if unhooked > 0 {
            trace!(unhooked, "dropped hooks of removed forms");
        }
    }
}
