// Copyright 2026 the Tapguard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-kind behavior of guarded controls.
//!
//! The three kinds nest: a styled control is a plain one that also toggles the
//! disabled class and reads its label as markup; a link is a styled control
//! that also parks its `href` while disabled. Each hook below adds only its
//! own layer, and [`ButtonState`](crate::button::ButtonState) runs the shared
//! base steps between them.

use alloc::string::String;

use crate::config::GuardConfig;
use crate::types::{ButtonKind, Dom};

/// How a control's label is read and written.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Accessor {
    /// The `value` of a form control.
    Value,
    /// The inner markup.
    Markup,
}

impl Accessor {
    pub(crate) fn read<D: Dom>(self, dom: &D, el: D::Element) -> String {
        match self {
            Self::Value => dom.value(el),
            Self::Markup => dom.inner_html(el),
        }
    }

    pub(crate) fn write<D: Dom>(self, dom: &mut D, el: D::Element, text: &str) {
        match self {
            Self::Value => dom.set_value(el, text),
            Self::Markup => dom.set_inner_html(el, text),
        }
    }
}

/// Kind-specific data captured at construction.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Variant {
    Plain,
    Styled,
    Link {
        /// `href` at construction; `None` if the anchor had none.
        href: Option<String>,
    },
}

impl Variant {
    pub(crate) fn capture<D: Dom>(dom: &D, el: D::Element, kind: ButtonKind) -> Self {
        match kind {
            ButtonKind::Plain => Self::Plain,
            ButtonKind::Styled => Self::Styled,
            ButtonKind::Link => Self::Link {
                href: dom.attribute(el, "href"),
            },
        }
    }

    pub(crate) fn kind(&self) -> ButtonKind {
        match self {
            Self::Plain => ButtonKind::Plain,
            Self::Styled => ButtonKind::Styled,
            Self::Link { .. } => ButtonKind::Link,
        }
    }

    pub(crate) fn accessor(&self) -> Accessor {
        match self {
            Self::Plain => Accessor::Value,
            Self::Styled | Self::Link { .. } => Accessor::Markup,
        }
    }

    pub(crate) fn href(&self) -> Option<&str> {
        match self {
            Self::Link { href } => href.as_deref(),
            _ => None,
        }
    }

    pub(crate) fn before_disable<D: Dom>(&self, dom: &mut D, el: D::Element, class: &str) {
        if !matches!(self, Self::Plain) {
            dom.add_class(el, class);
        }
    }

    pub(crate) fn after_disable<D: Dom>(&self, dom: &mut D, el: D::Element, config: &GuardConfig) {
        if let Self::Link { .. } = self {
            dom.set_attribute(el, "href", &config.inert_href);
        }
    }

    pub(crate) fn before_enable<D: Dom>(&self, dom: &mut D, el: D::Element, class: &str) {
        if !matches!(self, Self::Plain) {
            dom.remove_class(el, class);
        }
    }

    pub(crate) fn after_enable<D: Dom>(&self, dom: &mut D, el: D::Element) {
        match self {
            Self::Link { href: Some(href) } => dom.set_attribute(el, "href", href),
            Self::Link { href: None } => dom.remove_attribute(el, "href"),
            Self::Plain | Self::Styled => {}
        }
    }
}
