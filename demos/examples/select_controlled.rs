// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controlled select.
//!
//! The caller owns the value: a commit only reports the choice, and the display follows once the
//! caller feeds the new value back.
//!
//! Run:
//! - `cargo run -p understory_examples --example select_controlled`

use std::cell::RefCell;
use std::rc::Rc;

use understory_select::Select;
use understory_select::props::SelectProps;
use understory_select::root::SelectEvent;
use understory_select::types::{OptionRecord, SelectSize, SelectVariant};
use understory_select::value::SelectValue;

fn main() {
    let pending: Rc<RefCell<Option<String>>> = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&pending);

    let mut select = Select::root(
        SelectProps::new()
            .options([
                OptionRecord::new("s", "Small"),
                OptionRecord::new("m", "Medium"),
                OptionRecord::new("l", "Large"),
            ])
            .variant(SelectVariant::Filled)
            .size(SelectSize::Large)
            .value(
                SelectValue::controlled(Some("m"))
                    .on_change(move |v| *sink.borrow_mut() = Some(v.to_string())),
            ),
    )
    .unwrap();

    select.dispatch(SelectEvent::TriggerClick);
    select.dispatch(SelectEvent::OptionClick(2));
    println!("== Reported, not applied ==\n  {}", select.render().unwrap());
    assert_eq!(pending.borrow().as_deref(), Some("l"));
    assert_eq!(select.selected_value(), Some("m"));

    // The owner accepts the change.
    let next = pending.borrow_mut().take();
    assert!(select.set_value(next));
    let el = select.render().unwrap();
    println!("== Applied ==\n  {}", el);
    assert_eq!(el.text_content(), "Large");

    // The owner can also clear it.
    select.set_value(None);
    assert_eq!(select.render().unwrap().text_content(), "Select an option");
}
