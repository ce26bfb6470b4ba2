// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A select inside a form field.
//!
//! The field supplies the label, helper text and error; the select's trigger becomes the
//! field's control.
//!
//! Run:
//! - `cargo run -p understory_examples --example field_select`

use understory_field::parts::FieldControl;
use understory_field::root::FieldRoot;
use understory_markup::Element;
use understory_select::Select;
use understory_select::props::SelectProps;
use understory_select::root::SelectEvent;
use understory_select::types::OptionRecord;

/// Swap the trigger button in a rendered select for its field-wired version.
fn wire_trigger(select: Element, field: &FieldRoot) -> Element {
    let cx = field.context();
    let mut out = Element::new(select.tag());
    for (name, value) in select.attrs() {
        out.set_attr(name, value);
    }
    for child in select.child_elements() {
        if child.tag() == "button" {
            out.push(FieldControl::render(Some(&cx), child.clone()).unwrap());
        } else {
            out.push(child.clone());
        }
    }
    out
}

fn main() {
    let mut field = FieldRoot::new("country")
        .label("Country")
        .description("Where you live")
        .required(true);
    let mut select = Select::root(SelectProps::new().options([
        OptionRecord::new("de", "Germany"),
        OptionRecord::new("fr", "France"),
    ]))
    .unwrap();

    // Submitting with no choice marks the field invalid.
    if select.selected_value().is_none() {
        field.set_error(Some("Choose a country".into()));
    }
    let el = wire_trigger(select.render().unwrap(), &field);
    let rendered = field.render(el).unwrap();
    println!("== Invalid ==\n  {}", rendered);
    let trigger = rendered.find(|e| e.tag() == "button").unwrap();
    assert_eq!(trigger.get_attr("aria-invalid"), Some("true"));
    assert_eq!(trigger.get_attr("aria-describedby"), Some("country-message"));
    assert!(rendered.find_by_role("alert").is_some());

    select.dispatch(SelectEvent::TriggerClick);
    select.dispatch(SelectEvent::OptionClick(1));
    field.set_error(None);
    let el = wire_trigger(select.render().unwrap(), &field);
    let rendered = field.render(el).unwrap();
    println!("== Valid ==\n  {}", rendered);
    let trigger = rendered.find(|e| e.tag() == "button").unwrap();
    assert_eq!(trigger.get_attr("id"), Some("country"));
    assert_eq!(trigger.get_attr("aria-describedby"), Some("country-description"));
    assert_eq!(trigger.text_content(), "France");
}
