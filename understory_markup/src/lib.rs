// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Markup: a small, host-agnostic element tree for component output.
//!
//! ## Overview
//!
//! Components in the Understory widget crates do not talk to a DOM or a scene graph directly.
//! They render into an [`Element`] tree: a tag, an ordered attribute list, and child [`Node`]s.
//! A host toolkit turns that tree into whatever it draws (HTML, a retained scene, a terminal buffer).
//!
//! The tree is plain data. It is cheap to build, compares with `==`, and prints as HTML-like text
//! through [`Display`](core::fmt::Display), which is handy for snapshots and debugging.
//!
//! ## Queries
//!
//! Accessibility attributes are part of the component contract, so the tree carries helpers for
//! asserting on them:
//!
//! - [`Element::get_attr`] and [`Element::has_attr`] for single attributes.
//! - [`Element::walk`] for a pre-order traversal of an element and its element descendants.
//! - [`Element::find_by_role`] / [`Element::find_all_by_role`] for `role` lookups.
//! - [`Element::text_content`] for the concatenated text below an element.
//!
//! ## Example
//!
//! ```
//! use understory_markup::Element;
//!
//! let list = Element::new("ul")
//!     .attr("role", "listbox")
//!     .child(Element::new("li").attr("role", "option").text("Apple"))
//!     .child(Element::new("li").attr("role", "option").text("Cherry"));
//!
//! assert_eq!(list.find_all_by_role("option").len(), 2);
//! assert_eq!(list.text_content(), "AppleCherry");
//! assert_eq!(
//!     list.to_string(),
//!     r#"<ul role="listbox"><li role="option">Apple</li><li role="option">Cherry</li></ul>"#
//! );
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod element;

pub use element::{Element, Node, Walk};
