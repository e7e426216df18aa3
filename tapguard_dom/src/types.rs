// Copyright 2026 the Tapguard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the document: node identifiers, element data, and records
//! of what the simulated browser did (submissions, navigations, timers).

use alloc::string::String;
use alloc::vec::Vec;

/// Identifier for an element in a [`Document`](crate::Document).
///
/// This is a small, copyable handle that stays stable across updates but becomes
/// invalid when the underlying slot is reused.
/// It consists of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed; any existing `NodeId` that pointed to that slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct `NodeId`.
///
/// Use [`Document::is_alive`](crate::Document::is_alive) to check whether a `NodeId` still refers to a live element.
/// Stale `NodeId`s never alias a different live element because the generation must match.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Element data: tag, attributes in insertion order, and leaf markup content.
///
/// Classes live in the `class` attribute, as they do in HTML.
/// Use the builder methods to describe an element before inserting it:
///
/// ```
/// use tapguard_dom::Element;
///
/// let el = Element::new("A")
///     .attr("href", "/next")
///     .class("disable-double-submit")
///     .content("<i></i> Next");
/// assert_eq!(el.tag(), "a");
/// assert_eq!(el.attribute("class"), Some("disable-double-submit"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    pub(crate) tag: String,
    pub(crate) attributes: Vec<(String, String)>,
    pub(crate) content: String,
}

impl Element {
    /// Create an element with the given tag name (stored lowercased).
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attributes: Vec::new(),
            content: String::new(),
        }
    }

    /// Set an attribute, replacing an existing value of the same name.
    #[must_use]
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Add a class to the `class` attribute.
    #[must_use]
    pub fn class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Set the leaf markup rendered before any child elements.
    #[must_use]
    pub fn content(mut self, markup: &str) -> Self {
        self.content = markup.into();
        self
    }

    /// Lowercase tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Attributes in insertion order.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Value of the named attribute, if present.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if the class list contains `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .is_some_and(|list| list.split_ascii_whitespace().any(|c| c == class))
    }

    pub(crate) fn set_attribute(&mut self, name: &str, value: &str) {
        match self
            .attributes
            .iter_mut()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
        {
            Some((_, v)) => *v = value.into(),
            None => self
                .attributes
                .push((name.to_ascii_lowercase(), value.into())),
        }
    }

    pub(crate) fn remove_attribute(&mut self, name: &str) {
        self.attributes.retain(|(n, _)| !n.eq_ignore_ascii_case(name));
    }

    pub(crate) fn add_class(&mut self, class: &str) {
        if self.has_class(class) {
            return;
        }
        let list = match self.attribute("class") {
            Some(list) if !list.trim().is_empty() => {
                let mut list = String::from(list.trim_end());
                list.push(' ');
                list.push_str(class);
                list
            }
            _ => class.into(),
        };
        self.set_attribute("class", &list);
    }

    pub(crate) fn remove_class(&mut self, class: &str) {
        let Some(list) = self.attribute("class") else {
            return;
        };
        if !self.has_class(class) {
            return;
        }
        let kept: Vec<&str> = list
            .split_ascii_whitespace()
            .filter(|c| *c != class)
            .collect();
        if kept.is_empty() {
            self.remove_attribute("class");
        } else {
            let list = kept.join(" ");
            self.set_attribute("class", &list);
        }
    }
}

/// What the browser does after click handlers have run.
///
/// Returned by [`Document::default_action`](crate::Document::default_action).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DefaultAction {
    /// Submit the owning form, with the clicked control as submitter.
    Submit {
        /// Form to submit.
        form: NodeId,
        /// Control that triggered the submission.
        submitter: NodeId,
    },
    /// Follow a hyperlink.
    Follow {
        /// Target of the navigation.
        href: String,
    },
}

/// A recorded form submission: the form data set that would reach the server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    /// Submitted form.
    pub form: NodeId,
    /// Control that triggered the submission, if any.
    pub submitter: Option<NodeId>,
    /// Name/value pairs in document order.
    pub fields: Vec<(String, String)>,
}

impl Submission {
    /// First value submitted under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Number of entries submitted under `name`.
    pub fn count(&self, name: &str) -> usize {
        self.fields.iter().filter(|(n, _)| n == name).count()
    }
}

/// Opaque handle returned by [`Document::set_timeout`](crate::Document::set_timeout).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct TimerId(pub(crate) u64);

/// A timer waiting on the virtual clock.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PendingTimer {
    /// Timer handle.
    pub id: TimerId,
    /// Virtual time (ms) at which the timer fires.
    pub due_at: u64,
    /// Scheduling order; breaks ties between timers due at the same time.
    pub order: u64,
}
