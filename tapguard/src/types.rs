// Copyright 2026 the Tapguard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types: the host seam, control kinds, and guard outcomes.
//!
//! ## Overview
//!
//! [`Dom`] is everything the guard needs from its environment: element
//! lookup, attribute/class/markup manipulation, navigation, and a timer
//! primitive. The guard never owns document nodes; it holds `Dom::Element`
//! handles and asks the host to act on them.

use alloc::string::String;
use alloc::vec::Vec;

/// Host document services consumed by the guard.
///
/// Implementations are expected to treat every call as infallible: stale or
/// unknown elements should read as empty and ignore writes.
pub trait Dom {
    /// Element handle. Compared by identity; the order only keys side tables.
    type Element: Copy + Ord + core::fmt::Debug;
    /// Opaque token for a scheduled timer.
    type Timer: Copy + Eq + core::fmt::Debug;

    /// Lowercase tag name, or an empty string for unknown elements.
    fn tag_name(&self, el: Self::Element) -> String;

    /// Parent element, or `None` at the root.
    fn parent(&self, el: Self::Element) -> Option<Self::Element>;

    /// Returns false once the element has left the document for good.
    ///
    /// Used to sweep per-element state. Hosts without a notion of liveness
    /// can keep the default.
    fn is_alive(&self, _el: Self::Element) -> bool {
        true
    }

    /// Attribute value, if present.
    fn attribute(&self, el: Self::Element, name: &str) -> Option<String>;

    /// Set an attribute.
    fn set_attribute(&mut self, el: Self::Element, name: &str, value: &str);

    /// Remove an attribute.
    fn remove_attribute(&mut self, el: Self::Element, name: &str);

    /// Returns true if the element's class list contains `class`.
    fn has_class(&self, el: Self::Element, class: &str) -> bool;

    /// Add a class to the element's class list.
    fn add_class(&mut self, el: Self::Element, class: &str);

    /// Remove a class from the element's class list.
    fn remove_class(&mut self, el: Self::Element, class: &str);

    /// Form value of a control.
    fn value(&self, el: Self::Element) -> String;

    /// Set the form value of a control.
    fn set_value(&mut self, el: Self::Element, value: &str);

    /// Markup inside the element.
    fn inner_html(&self, el: Self::Element) -> String;

    /// Replace the markup inside the element.
    fn set_inner_html(&mut self, el: Self::Element, markup: &str);

    /// Plain text inside the element.
    fn text_content(&self, el: Self::Element) -> String;

    /// Every element carrying `class`, in document order.
    fn elements_with_class(&self, class: &str) -> Vec<Self::Element>;

    /// Insert `<input type="hidden" name=.. value=..>` right after `el`.
    fn insert_hidden_input_after(
        &mut self,
        el: Self::Element,
        name: &str,
        value: &str,
    ) -> Option<Self::Element>;

    /// Navigate the browsing context to `href`.
    fn navigate(&mut self, href: &str);

    /// Schedule a one-shot timer. The host reports it back through
    /// [`Guard::handle_timer`](crate::guard::Guard::handle_timer).
    fn set_timeout(&mut self, delay_ms: u32) -> Self::Timer;

    /// Nearest ancestor-or-self with the given tag name.
    fn closest(&self, el: Self::Element, tag: &str) -> Option<Self::Element> {
        let mut cur = Some(el);
        while let Some(n) = cur {
            if self.tag_name(n).eq_ignore_ascii_case(tag) {
                return Some(n);
            }
            cur = self.parent(n);
        }
        None
    }
}

/// Which behavior governs a control. Chosen once, at classification.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ButtonKind {
    /// Form control whose label is its `value` (for example `input`).
    Plain,
    /// `button` or `div` styled as a button; label is inner markup.
    Styled,
    /// Anchor acting as a button; also neutralizes and restores its `href`.
    Link,
}

/// Which strategy [`Guard::guard`](crate::guard::Guard::guard) took.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum GuardOutcome {
    /// Submit control inside a form: freeze on the form's submit event.
    Submit,
    /// Everything else: freeze immediately.
    Click,
    /// The control was already disabled; nothing happened.
    Skipped,
}

/// What started a cooldown.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Trigger {
    /// A click-guard.
    Click,
    /// A form submission observed by a submit hook.
    Submit,
}

/// A scheduled re-enable of every guarded control.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PendingEnable<E, T> {
    /// Host timer token.
    pub timer: T,
    /// Control whose guard scheduled this re-enable.
    pub origin: E,
    /// What started the cooldown.
    pub trigger: Trigger,
    /// Selector class of the freeze; the re-enable thaws the same controls.
    pub selector_class: String,
}
