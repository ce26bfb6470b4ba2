// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Select basics.
//!
//! Build a select from an option list, drive it with the keyboard and the pointer, and print
//! the rendered markup after each step.
//!
//! Run:
//! - `cargo run -p understory_examples --example select_basics`

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Rect};
use understory_select::layout::SelectLayout;
use understory_select::props::SelectProps;
use understory_select::root::{SelectEvent, SelectRoot};
use understory_select::types::{Key, KeyEvent, OptionRecord};
use understory_select::value::SelectValue;

fn key(k: Key) -> SelectEvent {
    SelectEvent::TriggerKey(KeyEvent::new(k))
}

fn main() {
    let changes = Rc::new(RefCell::new(Vec::<String>::new()));
    let sink = Rc::clone(&changes);

    let mut select = SelectRoot::new(
        SelectProps::new()
            .placeholder("Pick a fruit")
            .options([
                OptionRecord::new("apple", "Apple"),
                OptionRecord::new("banana", "Banana").disabled(),
                OptionRecord::new("cherry", "Cherry"),
            ])
            .value(
                SelectValue::uncontrolled(Some("apple"))
                    .on_change(move |v| sink.borrow_mut().push(v.to_string())),
            ),
    )
    .unwrap();

    // Bounds as a host would lay them out.
    select.set_layout(SelectLayout {
        trigger: Rect::new(0.0, 0.0, 160.0, 32.0),
        content: Some(Rect::new(0.0, 36.0, 160.0, 126.0)),
        rows: vec![
            Rect::new(0.0, 36.0, 160.0, 66.0),
            Rect::new(0.0, 66.0, 160.0, 96.0),
            Rect::new(0.0, 96.0, 160.0, 126.0),
        ],
    });

    println!("== Closed ==\n  {}", select.render().unwrap());

    // Keyboard: open, step onto the disabled row, try to commit it.
    select.dispatch(key(Key::ArrowDown));
    select.dispatch(key(Key::ArrowDown));
    select.dispatch(key(Key::Enter));
    println!("== Enter on disabled row ==\n  {}", select.render().unwrap());
    assert!(select.is_open());
    assert_eq!(select.highlighted_index(), Some(1));
    assert!(changes.borrow().is_empty());

    // Keyboard: move on and commit.
    select.dispatch(key(Key::ArrowDown));
    select.dispatch(key(Key::Enter));
    println!("== After commit ==\n  {}", select.render().unwrap());
    assert_eq!(select.selected_value(), Some("cherry"));
    assert!(!select.listener_attached());

    // Pointer: click the trigger, hover the first row, click outside.
    select.dispatch(SelectEvent::PointerDown(Point::new(10.0, 10.0)));
    select.dispatch(SelectEvent::Click(Point::new(10.0, 10.0)));
    select.dispatch(SelectEvent::PointerMove(Point::new(10.0, 50.0)));
    assert_eq!(select.highlighted_index(), Some(0));
    let open = select.render().unwrap();
    println!("== Reopened ==\n  {}", open);
    let checked = open
        .find(|e| e.get_attr("aria-selected") == Some("true"))
        .unwrap();
    assert_eq!(checked.get_attr("data-value"), Some("cherry"));

    select.dispatch(SelectEvent::PointerDown(Point::new(400.0, 400.0)));
    assert!(!select.is_open());

    println!("== Changes ==\n  {:?}", changes.borrow());
    assert_eq!(*changes.borrow(), vec!["cherry".to_string()]);
}
