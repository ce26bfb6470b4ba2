// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Composed select.
//!
//! Assemble a select from parts with custom row content, tab into a row, and commit it with
//! the keyboard. Also shows what happens when a part is used outside a root.
//!
//! Run:
//! - `cargo run -p understory_examples --example select_composition`

use understory_markup::Element;
use understory_select::Select;
use understory_select::props::SelectProps;
use understory_select::root::SelectEvent;
use understory_select::types::{FocusTarget, Key, KeyEvent};

fn swatch(color: &str, name: &str) -> Element {
    Element::new("span")
        .child(Element::new("i").attr("data-swatch", color))
        .text(name)
}

fn main() {
    let mut select = Select::compose(
        SelectProps::new(),
        [
            Select::trigger().placeholder("Color").into(),
            Select::content([
                Select::option("red", swatch("#f00", "Red")),
                Select::option("green", swatch("#0f0", "Green")).disabled(),
                Select::option("blue", swatch("#00f", "Blue")),
            ])
            .into(),
        ],
    )
    .unwrap();

    select.dispatch(SelectEvent::TriggerFocus);
    select.dispatch(SelectEvent::Key(KeyEvent::new(Key::Enter)));
    let open = select.render().unwrap();
    println!("== Open ==\n  {}", open);
    let tabs: Vec<_> = open
        .find_all_by_role("option")
        .iter()
        .map(|r| r.get_attr("tabindex").unwrap_or_default().to_string())
        .collect();
    assert_eq!(tabs, ["0", "-1", "0"]);

    // Tab lands on the last focusable row; Space commits it.
    select.dispatch(SelectEvent::OptionFocus(2));
    select.dispatch(SelectEvent::Key(KeyEvent::new(Key::Space)));
    assert_eq!(select.selected_value(), Some("blue"));
    assert_eq!(select.focus(), Some(FocusTarget::Trigger));
    println!("== Selected ==\n  {}", select.render().unwrap());

    // A part without a root fails fast.
    let err = Select::trigger().render(None).unwrap_err();
    println!("== Misuse ==\n  {}", err);
    assert_eq!(err.to_string(), "`SelectTrigger` must be used within `SelectRoot`");
}
