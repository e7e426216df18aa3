// Copyright 2026 the Tapguard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Styled controls and custom configuration.
//!
//! A styled button keeps its icon while showing the loading text, and a
//! shorter cooldown is configured. Clicking the icon itself is not a click
//! on the control, so it is ignored.
//!
//! Run:
//! - `cargo run -p tapguard_demos --example guard_styled`

use tapguard::config::GuardConfig;
use tapguard::guard::Guard;
use tapguard::log::{self, LogLevel};
use tapguard_dom::{Document, Element};

fn main() {
    log::init(LogLevel::Info);

    let mut doc = Document::new();
    let body = doc.insert(None, Element::new("body"));
    let run = doc.insert(
        Some(body),
        Element::new("div")
            .class("btn")
            .class("disable-double-submit")
            .attr("data-disable-with", "Running")
            .content("<i class=\"icon-play\"></i> Run"),
    );
    let icon = doc.insert(Some(run), Element::new("span").class("badge"));

    let config = GuardConfig {
        timeout_ms: 500,
        ..GuardConfig::default()
    };
    let mut guard = Guard::with_config(doc, config);

    println!("icon click:    {:?}", guard.click(icon));
    println!("control click: {:?}", guard.click(run));
    println!("frozen:        {}", guard.dom().outer_html(run));

    for step in [250, 250] {
        let fired = guard.advance(step);
        println!(
            "t={:>4}ms fired={fired} {}",
            guard.dom().now_ms(),
            guard.dom().outer_html(run)
        );
    }
}
