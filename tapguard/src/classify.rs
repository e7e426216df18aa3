// Copyright 2026 the Tapguard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Control classification and the per-element side table.
//!
//! ## Overview
//!
//! [`kind_of`] maps an element to the [`ButtonKind`] that governs it:
//! - `button`, `div` → [`ButtonKind::Styled`]
//! - `a` → [`ButtonKind::Link`]
//! - anything else → [`ButtonKind::Plain`]
//!
//! The guard remembers the resulting [`ButtonState`] in a side table keyed by
//! element identity instead of writing into the element. Classifying an
//! element twice returns the first state unchanged. Entries whose element the
//! host reports dead are swept on bulk passes.

use alloc::collections::BTreeMap;
use alloc::collections::btree_map::Entry;

use tracing::debug;

use crate::button::ButtonState;
use crate::config::GuardConfig;
use crate::types::{ButtonKind, Dom};

/// Which kind governs `el`, by tag name.
pub fn kind_of<D: Dom>(dom: &D, el: D::Element) -> ButtonKind {
    let tag = dom.tag_name(el);
    if tag.eq_ignore_ascii_case("button") || tag.eq_ignore_ascii_case("div") {
        ButtonKind::Styled
    } else if tag.eq_ignore_ascii_case("a") {
        ButtonKind::Link
    } else {
        ButtonKind::Plain
    }
}

/// Returns true if `el` is a submit control.
///
/// Matches `input[type=submit]` and `button` elements whose type is `submit`
/// or absent (the default button type).
///
/// Narrower than a browser: `input[type=image]` also submits its form, but it
/// is not a submit control here, so guarding one takes the click path.
pub fn is_submit_control<D: Dom>(dom: &D, el: D::Element) -> bool {
    let tag = dom.tag_name(el);
    let ty = dom.attribute(el, "type");
    if tag.eq_ignore_ascii_case("input") {
        ty.is_some_and(|t| t.eq_ignore_ascii_case("submit"))
    } else if tag.eq_ignore_ascii_case("button") {
        !ty.is_some_and(|t| t.eq_ignore_ascii_case("button") || t.eq_ignore_ascii_case("reset"))
    } else {
        false
    }
}

/// Side table of button states, one per element, keyed by handle.
#[derive(Clone, Debug)]
pub(crate) struct Registry<E> {
    entries: BTreeMap<E, ButtonState<E>>,
}

impl<E> Default for Registry<E> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<E: Copy + Ord + core::fmt::Debug> Registry<E> {
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn get(&self, el: E) -> Option<&ButtonState<E>> {
        self.entries.get(&el)
    }

    /// Return the state for `el`, creating it on first sight.
    pub(crate) fn classify<D: Dom<Element = E>>(
        &mut self,
        dom: &D,
        el: E,
        config: &GuardConfig,
    ) -> &mut ButtonState<E> {
        match self.entries.entry(el) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let kind = kind_of(dom, el);
                debug!(element = ?el, ?kind, "new button");
                entry.insert(ButtonState::new(dom, el, kind, config))
            }
        }
    }

    /// Drop entries for elements that left the document. Returns how many.
    pub(crate) fn sweep<D: Dom<Element = E>>(&mut self, dom: &D) -> usize {
        let before = self.entries.len();
        self.entries.retain(|el, _| dom.is_alive(*el));
        before - self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tapguard_dom::{Document, Element};

    #[test]
    fn kinds_by_tag() {
        let mut doc = Document::new();
        let button = doc.insert(None, Element::new("button"));
        let div = doc.insert(None, Element::new("DIV"));
        let link = doc.insert(None, Element::new("a"));
        let input = doc.insert(None, Element::new("input"));
        let span = doc.insert(None, Element::new("span"));
        assert_eq!(kind_of(&doc, button), ButtonKind::Styled);
        assert_eq!(kind_of(&doc, div), ButtonKind::Styled);
        assert_eq!(kind_of(&doc, link), ButtonKind::Link);
        assert_eq!(kind_of(&doc, input), ButtonKind::Plain);
        assert_eq!(kind_of(&doc, span), ButtonKind::Plain, "unknown tags fall back");
    }

    #[test]
    fn submit_controls() {
        let mut doc = Document::new();
        let input = doc.insert(None, Element::new("input").attr("type", "submit"));
        let image = doc.insert(None, Element::new("input").attr("type", "image"));
        let button = doc.insert(None, Element::new("button"));
        let plain = doc.insert(None, Element::new("button").attr("type", "button"));
        let link = doc.insert(None, Element::new("a").attr("type", "submit"));
        assert!(is_submit_control(&doc, input));
        assert!(
            !is_submit_control(&doc, image),
            "image inputs take the click path"
        );
        assert!(is_submit_control(&doc, button));
        assert!(!is_submit_control(&doc, plain));
        assert!(!is_submit_control(&doc, link));
    }

    #[test]
    fn classify_is_memoized() {
        let mut doc = Document::new();
        let el = doc.insert(
            None,
            Element::new("input").attr("type", "submit").attr("value", "Go"),
        );
        let config = GuardConfig::default();
        let mut reg = Registry::default();
        reg.classify(&doc, el, &config).disable(&mut doc, &config);
        assert_eq!(reg.len(), 1);

        // The second lookup must see the disabled state, not a fresh one.
        let again = reg.classify(&doc, el, &config);
        assert!(!again.is_enabled());
        assert_eq!(again.original(), "Go");
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn lookup_is_by_handle_not_insertion_order() {
        let mut doc = Document::new();
        let ids: alloc::vec::Vec<_> = (0..16)
            .map(|i| {
                let tag = if i % 2 == 0 { "a" } else { "div" };
                doc.insert(None, Element::new(tag))
            })
            .collect();
        let config = GuardConfig::default();
        let mut reg = Registry::default();
        for &id in ids.iter().rev() {
            reg.classify(&doc, id, &config);
        }
        assert_eq!(reg.len(), ids.len());
        for (i, &id) in ids.iter().enumerate() {
            let state = reg.get(id).unwrap();
            assert_eq!(state.element(), id);
            let expected = if i % 2 == 0 { ButtonKind::Link } else { ButtonKind::Styled };
            assert_eq!(state.kind(), expected);
        }
    }

    #[test]
    fn sweep_drops_removed_elements() {
        let mut doc = Document::new();
        let a = doc.insert(None, Element::new("a"));
        let b = doc.insert(None, Element::new("a"));
        let config = GuardConfig::default();
        let mut reg = Registry::default();
        reg.classify(&doc, a, &config);
        reg.classify(&doc, b, &config);
        doc.remove(a);
        assert_eq!(reg.sweep(&doc), 1);
        assert!(reg.get(a).is_none());
        assert!(reg.get(b).is_some());
    }
}
