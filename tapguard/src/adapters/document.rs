// Copyright 2026 the Tapguard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter for the in-memory Tapguard DOM.
//!
//! ## Feature
//!
//! Enable with `document`.
//!
//! ## Notes
//!
//! [`Document`] implements [`Dom`], so a `Guard<Document>` works like any
//! other guard. On top of that, [`Guard::click`], [`Guard::submit`], and
//! [`Guard::advance`] play the browser's part around the delegated
//! listeners: a disabled control swallows the click, handlers run, then the
//! default action follows (form submission or link navigation), and time
//! passes only when asked.

use alloc::string::String;
use alloc::vec::Vec;

use tapguard_dom::{DefaultAction, Document, Element, NodeId, Submission, TimerId};
use tracing::trace;

use crate::guard::Guard;
use crate::types::{Dom, GuardOutcome};

impl Dom for Document {
    type Element = NodeId;
    type Timer = TimerId;

    fn tag_name(&self, el: NodeId) -> String {
        Self::tag_name(self, el).unwrap_or_default().into()
    }

    fn parent(&self, el: NodeId) -> Option<NodeId> {
        Self::parent(self, el)
    }

    fn is_alive(&self, el: NodeId) -> bool {
        Self::is_alive(self, el)
    }

    fn attribute(&self, el: NodeId, name: &str) -> Option<String> {
        Self::attribute(self, el, name).map(String::from)
    }

    fn set_attribute(&mut self, el: NodeId, name: &str, value: &str) {
        Self::set_attribute(self, el, name, value);
    }

    fn remove_attribute(&mut self, el: NodeId, name: &str) {
        Self::remove_attribute(self, el, name);
    }

    fn has_class(&self, el: NodeId, class: &str) -> bool {
        Self::has_class(self, el, class)
    }

    fn add_class(&mut self, el: NodeId, class: &str) {
        Self::add_class(self, el, class);
    }

    fn remove_class(&mut self, el: NodeId, class: &str) {
        Self::remove_class(self, el, class);
    }

    fn value(&self, el: NodeId) -> String {
        Self::value(self, el).into()
    }

    fn set_value(&mut self, el: NodeId, value: &str) {
        Self::set_value(self, el, value);
    }

    fn inner_html(&self, el: NodeId) -> String {
        Self::inner_html(self, el)
    }

    fn set_inner_html(&mut self, el: NodeId, markup: &str) {
        Self::set_inner_html(self, el, markup);
    }

    fn text_content(&self, el: NodeId) -> String {
        Self::text_content(self, el)
    }

    fn elements_with_class(&self, class: &str) -> Vec<NodeId> {
        Self::elements_with_class(self, class)
    }

    fn insert_hidden_input_after(
        &mut self,
        el: NodeId,
        name: &str,
        value: &str,
    ) -> Option<NodeId> {
        let hidden = Element::new("input")
            .attr("type", "hidden")
            .attr("name", name)
            .attr("value", value);
        self.insert_after(el, hidden)
    }

    fn navigate(&mut self, href: &str) {
        Self::navigate(self, href);
    }

    fn set_timeout(&mut self, delay_ms: u32) -> TimerId {
        Self::set_timeout(self, delay_ms)
    }

    fn closest(&self, el: NodeId, tag: &str) -> Option<NodeId> {
        Self::closest(self, el, tag)
    }
}

impl Guard<Document> {
    /// Click `target` the way a browser would.
    ///
    /// Disabled form controls swallow the click. Otherwise the delegated
    /// listener runs, then the default action: submitting the owning form
    /// (which fires the submit listener) or following a link.
    pub fn click(&mut self, target: NodeId) -> Option<GuardOutcome> {
        if self.dom.blocks_activation(target) {
            trace!(?target, "click swallowed by disabled control");
            return None;
        }
        let outcome = self.handle_click(target);
        match self.dom.default_action(target) {
            Some(DefaultAction::Submit { form, submitter }) => {
                self.submit(form, Some(submitter));
            }
            Some(DefaultAction::Follow { href }) => self.dom.navigate(&href),
            None => {}
        }
        outcome
    }

    /// Submit `form`: the submit listener runs first, then the form data
    /// set is collected and recorded.
    pub fn submit(&mut self, form: NodeId, submitter: Option<NodeId>) -> Submission {
        self.handle_submit(form);
        self.dom.submit(form, submitter).clone()
    }

    /// Let `delta_ms` of virtual time pass, running due timers in order.
    ///
    /// Returns how many of the fired timers belonged to this guard.
    pub fn advance(&mut self, delta_ms: u64) -> usize {
        let fired = self.dom.advance(delta_ms);
        fired.into_iter().filter(|t| self.handle_timer(*t)).count()
    }
}
