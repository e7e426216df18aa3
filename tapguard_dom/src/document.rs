// Copyright 2026 the Tapguard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core document implementation: structure, attributes, markup, and the
//! browser behaviors that surround a click.

use alloc::string::String;
use alloc::vec::Vec;

use crate::markup::{close_tag, open_tag, strip_tags};
use crate::timers::TimerQueue;
use crate::types::{DefaultAction, Element, NodeId, PendingTimer, Submission, TimerId};

/// Top-level element tree.
#[derive(Clone)]
pub struct Document {
    nodes: Vec<Option<Node>>,
    generations: Vec<u32>,
    free_list: Vec<usize>,
    roots: Vec<NodeId>,
    location: Option<String>,
    navigations: Vec<String>,
    submissions: Vec<Submission>,
    timers: TimerQueue,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Document {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        f.debug_struct("Document")
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("free_list", &self.free_list.len())
            .field("now_ms", &self.timers.now_ms())
            .field("location", &self.location)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
struct Node {
    generation: u32,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    element: Element,
}

impl Document {
    /// Create an empty document at virtual time zero.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            roots: Vec::new(),
            location: None,
            navigations: Vec::new(),
            submissions: Vec::new(),
            timers: TimerQueue::default(),
        }
    }

    /// Insert a new element as the last child of `parent` (or as a root if `None`).
    ///
    /// A stale `parent` inserts a root.
    pub fn insert(&mut self, parent: Option<NodeId>, element: Element) -> NodeId {
        let id = self.alloc(element);
        match parent.filter(|p| self.is_alive(*p)) {
            Some(p) => {
                self.node_mut(p).children.push(id);
                self.node_mut(id).parent = Some(p);
            }
            None => self.roots.push(id),
        }
        id
    }

    /// Insert a new element immediately after `sibling`, under the same parent.
    ///
    /// Returns `None` if `sibling` is stale.
    pub fn insert_after(&mut self, sibling: NodeId, element: Element) -> Option<NodeId> {
        if !self.is_alive(sibling) {
            return None;
        }
        let parent = self.node(sibling).parent;
        let id = self.alloc(element);
        let siblings = match parent {
            Some(p) => &mut self.node_mut(p).children,
            None => &mut self.roots,
        };
        let pos = siblings
            .iter()
            .position(|s| *s == sibling)
            .map_or(siblings.len(), |i| i + 1);
        siblings.insert(pos, id);
        self.node_mut(id).parent = parent;
        Some(id)
    }

    /// Remove an element (and its subtree) from the document.
    pub fn remove(&mut self, id: NodeId) {
        if !self.is_alive(id) {
            return;
        }
        match self.node(id).parent {
            Some(p) => self.node_mut(p).children.retain(|c| *c != id),
            None => self.roots.retain(|r| *r != id),
        }
        self.free_subtree(id);
    }

    /// Returns true if `id` refers to a live element.
    ///
    /// A `NodeId` is live if its slot exists and its generation matches the
    /// generation stored in that slot.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.nodes
            .get(id.idx())
            .and_then(|n| n.as_ref())
            .is_some_and(|n| n.generation == id.1)
    }

    /// Element data, if `id` is live.
    pub fn element(&self, id: NodeId) -> Option<&Element> {
        self.node_opt(id).map(|n| &n.element)
    }

    /// Lowercase tag name, if `id` is live.
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(Element::tag)
    }

    /// Parent element, or `None` for roots and stale ids.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node_opt(id).and_then(|n| n.parent)
    }

    /// Child elements in order; empty for stale ids.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node_opt(id)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Nearest ancestor-or-self with the given tag name.
    pub fn closest(&self, id: NodeId, tag: &str) -> Option<NodeId> {
        let mut cur = Some(id).filter(|id| self.is_alive(*id));
        while let Some(n) = cur {
            if self.node(n).element.tag.eq_ignore_ascii_case(tag) {
                return Some(n);
            }
            cur = self.node(n).parent;
        }
        None
    }

    /// Descendants of `id` in document (pre-)order, excluding `id` itself.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        for &c in self.children(id) {
            self.collect_preorder(c, &mut out);
        }
        out
    }

    /// Every live element in document order.
    pub fn all_elements(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        for &r in &self.roots {
            self.collect_preorder(r, &mut out);
        }
        out
    }

    /// Every element whose class list contains `class`, in document order.
    pub fn elements_with_class(&self, class: &str) -> Vec<NodeId> {
        self.all_elements()
            .into_iter()
            .filter(|id| self.node(*id).element.has_class(class))
            .collect()
    }

    /// Value of the named attribute.
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id).and_then(|e| e.attribute(name))
    }

    /// Returns true if the named attribute is present.
    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        self.attribute(id, name).is_some()
    }

    /// Set an attribute; a no-op on stale ids.
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        if let Some(n) = self.node_opt_mut(id) {
            n.element.set_attribute(name, value);
        }
    }

    /// Remove an attribute; a no-op on stale ids.
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) {
        if let Some(n) = self.node_opt_mut(id) {
            n.element.remove_attribute(name);
        }
    }

    /// Returns true if the class list of `id` contains `class`.
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.element(id).is_some_and(|e| e.has_class(class))
    }

    /// Add a class; already-present classes are left untouched.
    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if let Some(n) = self.node_opt_mut(id) {
            n.element.add_class(class);
        }
    }

    /// Remove a class, preserving the order of the remaining ones.
    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        if let Some(n) = self.node_opt_mut(id) {
            n.element.remove_class(class);
        }
    }

    /// Form value of a control: its `value` attribute, or empty.
    pub fn value(&self, id: NodeId) -> &str {
        self.attribute(id, "value").unwrap_or("")
    }

    /// Set the form value of a control.
    pub fn set_value(&mut self, id: NodeId, value: &str) {
        self.set_attribute(id, "value", value);
    }

    /// Serialized markup inside `id`: leaf content followed by child elements.
    pub fn inner_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        if self.is_alive(id) {
            self.write_inner(id, &mut out);
        }
        out
    }

    /// Serialized markup of `id` including its own tag.
    pub fn outer_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        if self.is_alive(id) {
            self.write_outer(id, &mut out);
        }
        out
    }

    /// Replace the markup inside `id`. Child elements are removed.
    pub fn set_inner_html(&mut self, id: NodeId, markup: &str) {
        if !self.is_alive(id) {
            return;
        }
        let children = core::mem::take(&mut self.node_mut(id).children);
        for c in children {
            self.free_subtree(c);
        }
        self.node_mut(id).element.content = markup.into();
    }

    /// Plain text inside `id`.
    pub fn text_content(&self, id: NodeId) -> String {
        strip_tags(&self.inner_html(id))
    }

    /// Returns true if `id` submits its form when activated.
    ///
    /// Covers `input` of type `submit` or `image`, and `button` whose type is
    /// `submit`, missing, or not one of the known button types.
    pub fn is_submit_control(&self, id: NodeId) -> bool {
        let Some(el) = self.element(id) else {
            return false;
        };
        let ty = el.attribute("type");
        match el.tag() {
            "input" => ty.is_some_and(|t| {
                t.eq_ignore_ascii_case("submit") || t.eq_ignore_ascii_case("image")
            }),
            "button" => !ty.is_some_and(|t| {
                t.eq_ignore_ascii_case("button") || t.eq_ignore_ascii_case("reset")
            }),
            _ => false,
        }
    }

    /// Returns true if a click on `id` is swallowed by the browser.
    ///
    /// Disabled form controls never receive click events. Other elements
    /// (links, divs) ignore the `disabled` attribute.
    pub fn blocks_activation(&self, id: NodeId) -> bool {
        match self.tag_name(id) {
            Some("button" | "input" | "select" | "textarea") => self.has_attribute(id, "disabled"),
            Some(_) => false,
            None => true,
        }
    }

    /// Activation behavior for a click on `target`, evaluated after handlers ran.
    ///
    /// Walks from the target outward: the first submit control with a form
    /// submits it, the first link with a navigable `href` is followed.
    pub fn default_action(&self, target: NodeId) -> Option<DefaultAction> {
        let mut cur = Some(target).filter(|t| self.is_alive(*t));
        while let Some(n) = cur {
            if self.is_submit_control(n) {
                return self
                    .closest(n, "form")
                    .map(|form| DefaultAction::Submit { form, submitter: n });
            }
            if self.tag_name(n) == Some("a") {
                return self
                    .attribute(n, "href")
                    .filter(|href| !is_script_url(href))
                    .map(|href| DefaultAction::Follow { href: href.into() });
            }
            cur = self.parent(n);
        }
        None
    }

    /// Collect the form data set of `form` and record it as a submission.
    ///
    /// Disabled controls are excluded. Buttons only contribute when they are
    /// the submitter; checkboxes and radios only when checked.
    pub fn submit(&mut self, form: NodeId, submitter: Option<NodeId>) -> &Submission {
        let fields = if self.is_alive(form) {
            self.form_data(form, submitter)
        } else {
            Vec::new()
        };
        self.submissions.push(Submission {
            form,
            submitter,
            fields,
        });
        let last = self.submissions.len() - 1;
        &self.submissions[last]
    }

    /// Recorded submissions, oldest first.
    pub fn submissions(&self) -> &[Submission] {
        &self.submissions
    }

    /// Drain recorded submissions.
    pub fn take_submissions(&mut self) -> Vec<Submission> {
        core::mem::take(&mut self.submissions)
    }

    /// Navigate the browsing context.
    ///
    /// `javascript:` URLs do not navigate and are not recorded.
    pub fn navigate(&mut self, href: &str) {
        if is_script_url(href) {
            return;
        }
        self.location = Some(href.into());
        self.navigations.push(href.into());
    }

    /// Current location, if any navigation happened.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Recorded navigations, oldest first.
    pub fn navigations(&self) -> &[String] {
        &self.navigations
    }

    /// Drain recorded navigations.
    pub fn take_navigations(&mut self) -> Vec<String> {
        core::mem::take(&mut self.navigations)
    }

    /// Current virtual time in milliseconds.
    pub fn now_ms(&self) -> u64 {
        self.timers.now_ms()
    }

    /// Schedule a one-shot timer `delay_ms` from now.
    pub fn set_timeout(&mut self, delay_ms: u32) -> TimerId {
        self.timers.set_timeout(delay_ms)
    }

    /// Pending timers ordered by `(due_at, order)`.
    pub fn pending_timers(&self) -> Vec<PendingTimer> {
        self.timers.pending()
    }

    /// Advance the virtual clock and return the timers that fired, in order.
    pub fn advance(&mut self, delta_ms: u64) -> Vec<TimerId> {
        self.timers.advance(delta_ms)
    }

    // --- internals ---

    fn alloc(&mut self, element: Element) -> NodeId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node::new(generation, element));
            (idx, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Node::new(generation, element)));
            self.generations.push(generation);
            (self.nodes.len() - 1, generation)
        };
        #[allow(
            clippy::cast_possible_truncation,
            reason = "NodeId uses 32-bit indices by design."
        )]
        NodeId::new(idx as u32, generation)
    }

    fn free_subtree(&mut self, id: NodeId) {
        let children = core::mem::take(&mut self.node_mut(id).children);
        for c in children {
            self.free_subtree(c);
        }
        self.nodes[id.idx()] = None;
        self.free_list.push(id.idx());
    }

    /// Access a live node; panics if `id` is stale.
    fn node(&self, id: NodeId) -> &Node {
        self.nodes[id.idx()].as_ref().expect("dangling NodeId")
    }

    /// Access a live node mutably; panics if `id` is stale.
    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.nodes[id.idx()].as_mut().expect("dangling NodeId")
    }

    fn node_opt(&self, id: NodeId) -> Option<&Node> {
        self.nodes
            .get(id.idx())?
            .as_ref()
            .filter(|n| n.generation == id.1)
    }

    fn node_opt_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let n = self.nodes.get_mut(id.idx())?.as_mut()?;
        if n.generation != id.1 {
            return None;
        }
        Some(n)
    }

    fn collect_preorder(&self, id: NodeId, out: &mut Vec<NodeId>) {
        out.push(id);
        for &c in &self.node(id).children {
            self.collect_preorder(c, out);
        }
    }

    fn write_inner(&self, id: NodeId, out: &mut String) {
        let node = self.node(id);
        out.push_str(&node.element.content);
        for &c in &node.children {
            self.write_outer(c, out);
        }
    }

    fn write_outer(&self, id: NodeId, out: &mut String) {
        let el = &self.node(id).element;
        open_tag(el, out);
        self.write_inner(id, out);
        close_tag(el, out);
    }

    fn form_data(&self, form: NodeId, submitter: Option<NodeId>) -> Vec<(String, String)> {
        let mut fields = Vec::new();
        for id in self.descendants(form) {
            let el = &self.node(id).element;
            let Some(name) = el.attribute("name").filter(|n| !n.is_empty()) else {
                continue;
            };
            if el.attribute("disabled").is_some() {
                continue;
            }
            let ty = el
                .attribute("type")
                .map(str::to_ascii_lowercase)
                .unwrap_or_default();
            let value = match (el.tag(), ty.as_str()) {
                ("input", "submit" | "button" | "reset" | "image") | ("button", _) => {
                    if Some(id) != submitter || !self.is_submit_control(id) || ty == "image" {
                        continue;
                    }
                    self.value(id).into()
                }
                ("input", "checkbox" | "radio") => {
                    if el.attribute("checked").is_none() {
                        continue;
                    }
                    el.attribute("value").unwrap_or("on").into()
                }
                ("input" | "select", _) => self.value(id).into(),
                ("textarea", _) => self.text_content(id),
                _ => continue,
            };
            fields.push((name.into(), value));
        }
        fields
    }
}

impl Node {
    fn new(generation: u32, element: Element) -> Self {
        Self {
            generation,
            parent: None,
            children: Vec::new(),
            element,
        }
    }
}

fn is_script_url(href: &str) -> bool {
    href.trim_start()
        .get(..11)
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case("javascript:"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn form_with_button() -> (Document, NodeId, NodeId) {
        let mut doc = Document::new();
        let form = doc.insert(None, Element::new("form"));
        doc.insert(
            Some(form),
            Element::new("input").attr("name", "q").attr("value", "rust"),
        );
        let btn = doc.insert(
            Some(form),
            Element::new("input")
                .attr("type", "submit")
                .attr("name", "go")
                .attr("value", "Go"),
        );
        (doc, form, btn)
    }

    #[test]
    fn liveness_insert_remove_reuse() {
        let mut doc = Document::new();
        let root = doc.insert(None, Element::new("body"));
        let a = doc.insert(Some(root), Element::new("div"));
        assert!(doc.is_alive(root));
        assert!(doc.is_alive(a));

        doc.remove(a);
        assert!(!doc.is_alive(a));
        assert!(doc.children(root).is_empty());

        let b = doc.insert(Some(root), Element::new("div"));
        assert!(doc.is_alive(b));
        assert!(!doc.is_alive(a));
        if a.0 == b.0 {
            assert!(b.1 > a.1, "generation must increase on reuse");
        }
    }

    #[test]
    fn stale_ids_are_ignored() {
        let mut doc = Document::new();
        let a = doc.insert(None, Element::new("a").attr("href", "/x"));
        doc.remove(a);
        doc.set_attribute(a, "href", "/y");
        doc.add_class(a, "disabled");
        assert_eq!(doc.attribute(a, "href"), None);
        assert!(doc.insert_after(a, Element::new("input")).is_none());
        assert_eq!(doc.inner_html(a), "");
    }

    #[test]
    fn insert_after_places_next_sibling() {
        let (mut doc, form, btn) = form_with_button();
        let hidden = doc
            .insert_after(btn, Element::new("input").attr("type", "hidden"))
            .unwrap();
        assert_eq!(doc.children(form).last().copied(), Some(hidden));
        assert_eq!(doc.parent(hidden), Some(form));

        let first = doc.children(form)[0];
        let between = doc.insert_after(first, Element::new("span")).unwrap();
        assert_eq!(doc.children(form)[1], between);
    }

    #[test]
    fn class_list_round_trips() {
        let mut doc = Document::new();
        let a = doc.insert(None, Element::new("a").class("btn").class("primary"));
        doc.add_class(a, "disabled");
        doc.add_class(a, "disabled");
        assert_eq!(doc.attribute(a, "class"), Some("btn primary disabled"));
        doc.remove_class(a, "disabled");
        assert_eq!(doc.attribute(a, "class"), Some("btn primary"));
        doc.remove_class(a, "missing");
        assert_eq!(doc.attribute(a, "class"), Some("btn primary"));
    }

    #[test]
    fn elements_with_class_uses_document_order() {
        let mut doc = Document::new();
        let body = doc.insert(None, Element::new("body"));
        let form = doc.insert(Some(body), Element::new("form"));
        let a = doc.insert(Some(form), Element::new("button").class("g"));
        let b = doc.insert(Some(body), Element::new("a").class("g"));
        let c = doc.insert_after(a, Element::new("div").class("g")).unwrap();
        assert_eq!(doc.elements_with_class("g"), vec![a, c, b]);
    }

    #[test]
    fn markup_accessors() {
        let mut doc = Document::new();
        let btn = doc.insert(
            None,
            Element::new("button").content("<i class=\"icon\"></i> Save"),
        );
        assert_eq!(doc.inner_html(btn), "<i class=\"icon\"></i> Save");
        assert_eq!(doc.text_content(btn), " Save");
        assert_eq!(
            doc.outer_html(btn),
            "<button><i class=\"icon\"></i> Save</button>"
        );
        doc.set_inner_html(btn, "Saving");
        assert_eq!(doc.text_content(btn), "Saving");
    }

    #[test]
    fn set_inner_html_drops_children() {
        let mut doc = Document::new();
        let div = doc.insert(None, Element::new("div"));
        let child = doc.insert(Some(div), Element::new("span").content("x"));
        assert_eq!(doc.inner_html(div), "<span>x</span>");
        doc.set_inner_html(div, "y");
        assert!(!doc.is_alive(child));
        assert_eq!(doc.inner_html(div), "y");
    }

    #[test]
    fn submit_control_types() {
        let mut doc = Document::new();
        let plain = doc.insert(None, Element::new("button"));
        let typed = doc.insert(None, Element::new("button").attr("type", "button"));
        let input = doc.insert(None, Element::new("input").attr("type", "SUBMIT"));
        let text = doc.insert(None, Element::new("input"));
        assert!(doc.is_submit_control(plain));
        assert!(!doc.is_submit_control(typed));
        assert!(doc.is_submit_control(input));
        assert!(!doc.is_submit_control(text));
    }

    #[test]
    fn disabled_controls_block_activation_links_do_not() {
        let mut doc = Document::new();
        let btn = doc.insert(None, Element::new("button").attr("disabled", "disabled"));
        let link = doc.insert(None, Element::new("a").attr("disabled", "disabled"));
        assert!(doc.blocks_activation(btn));
        assert!(!doc.blocks_activation(link));
    }

    #[test]
    fn default_action_submits_or_follows() {
        let (mut doc, form, btn) = form_with_button();
        assert_eq!(
            doc.default_action(btn),
            Some(DefaultAction::Submit {
                form,
                submitter: btn
            })
        );

        let link = doc.insert(None, Element::new("a").attr("href", "/next"));
        let icon = doc.insert(Some(link), Element::new("i"));
        assert_eq!(
            doc.default_action(icon),
            Some(DefaultAction::Follow {
                href: "/next".into()
            })
        );

        doc.set_attribute(link, "href", "javascript:void(0)");
        assert_eq!(doc.default_action(link), None);
    }

    #[test]
    fn submission_excludes_disabled_and_non_submitter_buttons() {
        let (mut doc, form, btn) = form_with_button();
        doc.insert(
            Some(form),
            Element::new("button").attr("name", "other").attr("value", "x"),
        );
        let sub = doc.submit(form, Some(btn)).clone();
        assert_eq!(sub.get("q"), Some("rust"));
        assert_eq!(sub.get("go"), Some("Go"));
        assert_eq!(sub.get("other"), None);

        doc.set_attribute(btn, "disabled", "disabled");
        let sub = doc.submit(form, Some(btn)).clone();
        assert_eq!(sub.get("go"), None, "disabled submitter is not successful");
        assert_eq!(doc.submissions().len(), 2);
    }

    #[test]
    fn checkboxes_only_when_checked() {
        let mut doc = Document::new();
        let form = doc.insert(None, Element::new("form"));
        doc.insert(
            Some(form),
            Element::new("input").attr("type", "checkbox").attr("name", "a"),
        );
        doc.insert(
            Some(form),
            Element::new("input")
                .attr("type", "checkbox")
                .attr("name", "b")
                .attr("checked", ""),
        );
        let sub = doc.submit(form, None);
        assert_eq!(sub.get("a"), None);
        assert_eq!(sub.get("b"), Some("on"));
    }

    #[test]
    fn navigation_ignores_script_urls() {
        let mut doc = Document::new();
        doc.navigate("javascript:void(0)");
        doc.navigate(" JavaScript:alert(1)");
        assert!(doc.navigations().is_empty());
        doc.navigate("/next");
        assert_eq!(doc.location(), Some("/next"));
        assert_eq!(doc.take_navigations(), vec![String::from("/next")]);
        assert!(doc.navigations().is_empty());
    }

    #[test]
    fn timers_follow_virtual_clock() {
        let mut doc = Document::new();
        let t = doc.set_timeout(3000);
        assert_eq!(doc.pending_timers().len(), 1);
        assert!(doc.advance(1000).is_empty());
        assert_eq!(doc.advance(2000), vec![t]);
        assert_eq!(doc.now_ms(), 3000);
    }
}
