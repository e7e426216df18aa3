// Copyright 2026 the Tapguard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Link guard.
//!
//! A guarded anchor parks its `href` on an inert URL while disabled, then
//! navigates to the original target itself. Repeat clicks during the
//! cooldown go nowhere.
//!
//! Run:
//! - `cargo run -p tapguard_demos --example guard_link`

use tapguard::guard::Guard;
use tapguard::log::{self, LogLevel};
use tapguard_dom::{Document, Element};

fn main() {
    log::init(LogLevel::Debug);

    let mut doc = Document::new();
    let body = doc.insert(None, Element::new("body"));
    let link = doc.insert(
        Some(body),
        Element::new("a")
            .class("btn")
            .class("disable-double-submit")
            .attr("href", "/checkout")
            .attr("data-disable-with", "Loading...")
            .content("Checkout"),
    );

    let mut guard = Guard::new(doc);
    println!("before:   {}", guard.dom().outer_html(link));

    for _ in 0..3 {
        println!("click:    {:?}", guard.click(link));
    }
    println!("frozen:   {}", guard.dom().outer_html(link));
    println!("visited:  {:?}", guard.dom().navigations());

    guard.advance(3000);
    println!("after:    {}", guard.dom().outer_html(link));
}
