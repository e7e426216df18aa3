// Copyright 2026 the Tapguard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Delegated event handling.
//!
//! ## Overview
//!
//! The guard listens once, at the document root, instead of on every
//! control. A click bubbles from its target up to the root; at each step
//! whose node carries the selector class, the delegated handler runs with
//! that node as the current element. The handler only acts when the current
//! element *is* the target, so clicks on an icon inside a guarded button are
//! ignored.
//!
//! Submit events are forwarded the same way: the guard reacts only to forms
//! that a submit-guard hooked.

use alloc::vec::Vec;

use tracing::{debug, trace};

use crate::guard::Guard;
use crate::types::{Dom, GuardOutcome, Trigger};

impl<D: Dom> Guard<D> {
    /// Delegated click listener.
    ///
    /// Returns the outcome of the guard if the click landed exactly on a
    /// guarded control, `None` otherwise.
    pub fn handle_click(&mut self, target: D::Element) -> Option<GuardOutcome> {
        let mut outcome = None;
        for current in self.bubble_path(target) {
            if !self.dom.has_class(current, &self.config.selector_class) {
                continue;
            }
            if current != target {
                trace!(?current, ?target, "click on descendant content");
                continue;
            }
            outcome = Some(self.guard(current));
        }
        outcome
    }

    /// Delegated submit listener. Returns true if `form` was hooked.
    ///
    /// Freezes every guarded control and schedules the thaw.
    pub fn handle_submit(&mut self, form: D::Element) -> bool {
        let Some(hook) = self.hooks.iter().find(|h| h.form == form).copied() else {
            return false;
        };
        self.disable_all();
        self.schedule_enable_all(hook.origin, Trigger::Submit, hook.timeout_ms);
        debug!(element = ?hook.origin, ?form, "start prevent double submit");
        true
    }

    /// Target → root, the order in which a click bubbles.
    fn bubble_path(&self, target: D::Element) -> Vec<D::Element> {
        let mut out = Vec::new();
        let mut cur = Some(target);
        // Collect to root; the host guarantees acyclic ancestry.
        while let Some(n) = cur {
            out.push(n);
            cur = self.dom.parent(n);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use crate::guard::Guard;
    use crate::types::{GuardOutcome, Trigger};
    use tapguard_dom::{Document, Element};

    const SEL: &str = "disable-double-submit";

    #[test]
    fn click_on_control_guards_it() {
        let mut doc = Document::new();
        let div = doc.insert(None, Element::new("div").class(SEL).content("Go"));
        let mut g = Guard::new(doc);
        assert_eq!(g.handle_click(div), Some(GuardOutcome::Click));
        assert!(!g.button(div).unwrap().is_enabled());
    }

    #[test]
    fn click_on_descendant_is_ignored() {
        let mut doc = Document::new();
        let button = doc.insert(None, Element::new("button").class(SEL));
        let icon = doc.insert(Some(button), Element::new("i"));
        let mut g = Guard::new(doc);
        assert_eq!(g.handle_click(icon), None);
        assert_eq!(g.tracked(), 0);
        assert!(g.pending().is_empty());
    }

    #[test]
    fn click_on_unguarded_element_is_ignored() {
        let mut doc = Document::new();
        let plain = doc.insert(None, Element::new("button"));
        let mut g = Guard::new(doc);
        assert_eq!(g.handle_click(plain), None);
    }

    #[test]
    fn submit_on_unhooked_form_is_ignored() {
        let mut doc = Document::new();
        let form = doc.insert(None, Element::new("form"));
        let input = doc.insert(Some(form), Element::new("input").class(SEL));
        let mut g = Guard::new(doc);
        assert!(!g.handle_submit(form));
        assert!(!g.dom().has_attribute(input, "disabled"));
    }

    #[test]
    fn hooked_submit_freezes_and_schedules() {
        let mut doc = Document::new();
        let form = doc.insert(None, Element::new("form"));
        let go = doc.insert(
            Some(form),
            Element::new("button").class(SEL).attr("name", "go").content("Go"),
        );
        let mut g = Guard::new(doc);
        assert_eq!(g.handle_click(go), Some(GuardOutcome::Submit));
        assert!(g.handle_submit(form));
        assert!(g.dom().has_attribute(go, "disabled"));
        assert!(g.dom().has_class(go, "disabled"));
        assert_eq!(g.pending().len(), 1);
        assert_eq!(g.pending()[0].trigger, Trigger::Submit);
        assert_eq!(g.pending()[0].origin, go);
    }
}
