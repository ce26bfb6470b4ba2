// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_select --heading-base-level=0

//! Understory Select: a headless, `no_std` select dropdown.
//!
//! ## Overview
//!
//! This crate implements the behavior of a single-value select control: an always-visible
//! trigger that shows the current choice, and an option list that appears below it while open.
//! It does not draw anything. Parts render into an [`Element`](understory_markup::Element) tree
//! that carries the ARIA contract, and events come in as plain values.
//!
//! ## Parts
//!
//! - [`SelectRoot`](crate::root::SelectRoot) owns the state: open flag, highlighted row, and the
//!   value source.
//! - [`SelectTrigger`](crate::trigger::SelectTrigger) is the button (`aria-haspopup="listbox"`,
//!   `aria-expanded`).
//! - [`SelectContent`](crate::content::SelectContent) is the `role="listbox"` container. It is
//!   absent from the output while closed.
//! - [`SelectOption`](crate::option::SelectOption) is one `role="option"` row.
//!
//! Parts reach the root's state through views passed in by parameter: a
//! [`SelectView`](crate::context::SelectView) when rendering and a
//! [`SelectContext`](crate::context::SelectContext) when handling events. A part used without
//! one fails with
//! [`SelectError::MissingContext`](crate::error::SelectError::MissingContext).
//!
//! ## Value source
//!
//! [`SelectValue`](crate::value::SelectValue) is either controlled (the caller owns the value and
//! feeds it back with [`SelectRoot::set_value`](crate::root::SelectRoot::set_value)) or uncontrolled
//! (the root stores it). Either way `on_change` runs once per commit.
//!
//! ## Keyboard
//!
//! [`keyboard::transition`](crate::keyboard::transition) is a pure function from the current state
//! and a key to the next state plus an effect. From closed, Enter, Space and ArrowDown open the
//! list with the first row highlighted. While open, the arrows, Home and End move the highlight
//! (clamped, no wrap), Enter and Space commit, and Escape closes and returns focus to the trigger.
//!
//! ## Outside interaction
//!
//! While open, a pointer-down outside both the trigger and the list closes it. The listener
//! is attached and detached in the root's commit step; see [`outside`](crate::outside).
//!
//! ## Example
//!
//! ```
//! use understory_select::Select;
//! use understory_select::props::SelectProps;
//! use understory_select::root::SelectEvent;
//! use understory_select::types::OptionRecord;
//!
//! let mut select = Select::root(
//!     SelectProps::new()
//!         .placeholder("Fruit")
//!         .options([
//!             OptionRecord::new("apple", "Apple"),
//!             OptionRecord::new("banana", "Banana").disabled(),
//!             OptionRecord::new("cherry", "Cherry"),
//!         ]),
//! )
//! .unwrap();
//!
//! assert_eq!(select.render().unwrap().text_content(), "Fruit");
//!
//! select.dispatch(SelectEvent::TriggerClick);
//! let open = select.render().unwrap();
//! assert_eq!(open.find_all_by_role("option").len(), 3);
//!
//! select.dispatch(SelectEvent::OptionClick(2));
//! assert!(!select.is_open());
//! assert_eq!(select.selected_value(), Some("cherry"));
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards `std` to Kurbo, `tracing`, and `thiserror`.
//! - `libm`: lets Kurbo use `libm` on `no_std` targets.

#![no_std]

extern crate alloc;

pub mod content;
pub mod context;
pub mod error;
pub mod hover;
pub mod keyboard;
pub mod layout;
pub mod option;
pub mod outside;
pub mod parts;
pub mod props;
pub mod root;
pub mod trigger;
pub mod types;
pub mod value;

pub use error::SelectError;
pub use parts::{Select, SelectPart};
pub use root::{SelectEvent, SelectRoot};
