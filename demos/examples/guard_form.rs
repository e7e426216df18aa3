// Copyright 2026 the Tapguard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Submit-guard basics.
//!
//! A submit input inside a form: the click inserts the replay field, the
//! form's submit freezes every guarded control, and the cooldown thaws them.
//! The recorded submission still carries the disabled control's name/value.
//!
//! Run:
//! - `cargo run -p tapguard_demos --example guard_form`
//! - `RUST_LOG=tapguard=trace cargo run -p tapguard_demos --example guard_form`

use tapguard::guard::Guard;
use tapguard::log::{self, LogLevel};
use tapguard_dom::{Document, Element};

fn main() {
    log::init(LogLevel::Debug);

    let mut doc = Document::new();
    let body = doc.insert(None, Element::new("body"));
    let form = doc.insert(Some(body), Element::new("form"));
    doc.insert(
        Some(form),
        Element::new("input").attr("name", "email").attr("value", "ada@example.com"),
    );
    let go = doc.insert(
        Some(form),
        Element::new("input")
            .class("disable-double-submit")
            .attr("type", "submit")
            .attr("name", "commit")
            .attr("value", "Sign up")
            .attr("data-disable-with", "Signing up..."),
    );

    let mut guard = Guard::new(doc);
    println!("before:   {}", guard.dom().outer_html(form));

    let outcome = guard.click(go);
    println!("outcome:  {outcome:?}");
    println!("frozen:   {}", guard.dom().outer_html(form));
    for sub in guard.dom().submissions() {
        println!("submitted {:?}", sub.fields);
    }

    println!("again:    {:?}", guard.click(go));

    let fired = guard.advance(3000);
    println!("fired:    {fired}");
    println!("after:    {}", guard.dom().outer_html(form));
}
