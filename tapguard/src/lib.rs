// Copyright 2026 the Tapguard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tapguard: a deterministic, `no_std` guard against double submits and double clicks.
//!
//! ## Overview
//!
//! Controls that carry the selector class (`disable-double-submit` by default) are guarded.
//! Activating one freezes *every* guarded control in the document for a cooldown (3000 ms by default), then thaws them all.
//! While frozen, a control carries `disabled="disabled"`, shows its loading label (from `data-disable-with`), and,
//! depending on its kind, also carries the `disabled` class and an inert `href`.
//! Thawing restores each control exactly as it was.
//!
//! ## Kinds
//!
//! Every guarded control is classified once, by tag name, into a [`ButtonKind`](crate::types::ButtonKind):
//! - `Plain`: form controls such as `input`. The label is the control's value.
//! - `Styled`: `button` and `div`. The label is inner markup; the loading markup replaces the first occurrence of the
//!   plain text inside it, so icons survive. The disabled class is toggled too.
//! - `Link`: `a`. Like `Styled`, and the `href` is parked on `javascript:void(0)` while disabled.
//!
//! ## Strategies
//!
//! - Submit-guard: a submit control inside a form. A hidden field replays the control's `name`/`value` (disabled controls are
//!   left out of the form data), and the form's submit event triggers the freeze.
//! - Click-guard: everything else. The freeze happens on the click itself; links then navigate to their original target.
//!
//! ## Host
//!
//! The guard never owns document nodes. It talks to its host through the [`Dom`](crate::types::Dom) trait: element
//! handles, attribute/class/markup edits, navigation, and a one-shot timer primitive. Deferred work runs only when the host
//! reports a fired timer back, so every transition is deterministic and testable without a browser.
//!
//! ## Workflow
//!
//! 1) Wrap the host document in a [`Guard`](crate::guard::Guard), optionally with a custom
//!    [`GuardConfig`](crate::config::GuardConfig).
//! 2) Forward document-level clicks to [`Guard::handle_click`](crate::guard::Guard::handle_click) and submit events to
//!    [`Guard::handle_submit`](crate::guard::Guard::handle_submit). Clicks that land on content *inside* a guarded control
//!    are ignored.
//! 3) When a timer the guard scheduled fires, pass it to [`Guard::handle_timer`](crate::guard::Guard::handle_timer).
//!
//! With the `document` feature, `tapguard_dom::Document` is a ready host that also plays the browser's part:
//!
//! ```
//! # #[cfg(feature = "document")] {
//! use tapguard::guard::Guard;
//! use tapguard::types::GuardOutcome;
//! use tapguard_dom::{Document, Element};
//!
//! let mut doc = Document::new();
//! let form = doc.insert(None, Element::new("form"));
//! let go = doc.insert(
//!     Some(form),
//!     Element::new("input")
//!         .class("disable-double-submit")
//!         .attr("type", "submit")
//!         .attr("name", "go")
//!         .attr("value", "Go")
//!         .attr("data-disable-with", "Working..."),
//! );
//!
//! let mut guard = Guard::new(doc);
//! assert_eq!(guard.click(go), Some(GuardOutcome::Submit));
//! assert_eq!(guard.dom().value(go), "Working...");
//! assert_eq!(guard.dom().submissions()[0].get("go"), Some("Go"));
//!
//! // A second click during the cooldown is swallowed.
//! assert_eq!(guard.click(go), None);
//!
//! guard.advance(3000);
//! assert_eq!(guard.dom().value(go), "Go");
//! # }
//! ```
//!
//! ## Logging
//!
//! State transitions are emitted as [`tracing`] events. See [`log`](crate::log) for levels and, with the `std` feature,
//! a console subscriber.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod adapters;
pub mod button;
pub mod classify;
pub mod config;
mod dispatch;
pub mod guard;
pub mod log;
pub mod types;
mod variant;
