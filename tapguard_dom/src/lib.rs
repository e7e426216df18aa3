// Copyright 2026 the Tapguard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tapguard DOM: a deterministic, in-memory document for driving click guards.
//!
//! Tapguard's core talks to its host through a small `Dom` trait. In a browser
//! that host is the live document; everywhere else (tests, demos, benches) it
//! is this crate.
//!
//! - Represents a hierarchy of elements with tags, ordered attributes, class lists, and leaf markup.
//! - Reproduces the browser behaviors that surround a click: disabled controls swallow activation,
//!   submit controls submit their form, links navigate, and `javascript:` URLs do not.
//! - Records what happened ([`Submission`]s and navigations) so tests can assert on it.
//! - Runs one-shot timers on a virtual clock that only moves when asked.
//!
//! ## Not a browser
//!
//! There is no HTML parser, no CSS selector engine, no event propagation, and no script.
//! Leaf markup is stored verbatim; child elements are inserted explicitly.
//! Event routing belongs to the caller: the document only answers questions
//! (what is the parent, what would a click do) and applies mutations.
//!
//! ## API overview
//!
//! - [`Document`]: container managing elements, recorded effects, and the timer clock.
//! - [`Element`]: per-element data with builder methods.
//! - [`NodeId`]: generational handle of an element.
//! - [`DefaultAction`]: what a click does once handlers have run.
//! - [`Submission`]: the form data set of a submitted form.
//! - [`TimerId`] / [`PendingTimer`]: virtual timers.
//!
//! ## Minimal usage
//!
//! ```
//! use tapguard_dom::{DefaultAction, Document, Element};
//!
//! let mut doc = Document::new();
//! let form = doc.insert(None, Element::new("form"));
//! let go = doc.insert(
//!     Some(form),
//!     Element::new("input").attr("type", "submit").attr("name", "go").attr("value", "Go"),
//! );
//!
//! // A click on an enabled submit control submits its form.
//! assert_eq!(doc.default_action(go), Some(DefaultAction::Submit { form, submitter: go }));
//! let sub = doc.submit(form, Some(go));
//! assert_eq!(sub.get("go"), Some("Go"));
//!
//! // Disabled controls are not successful.
//! doc.set_attribute(go, "disabled", "disabled");
//! assert!(doc.blocks_activation(go));
//! assert_eq!(doc.submit(form, Some(go)).get("go"), None);
//! ```
//!
//! ## Timers
//!
//! ```
//! use tapguard_dom::Document;
//!
//! let mut doc = Document::new();
//! let t = doc.set_timeout(3000);
//! assert!(doc.advance(2999).is_empty());
//! assert_eq!(doc.advance(1), vec![t]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod document;
mod markup;
mod timers;
mod types;

pub use document::Document;
pub use markup::strip_tags;
pub use types::{DefaultAction, Element, NodeId, PendingTimer, Submission, TimerId};
