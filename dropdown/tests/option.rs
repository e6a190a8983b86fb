use std::sync::{Arc, Mutex};

use dropdown::{ClickHandler, OptionValue, SelectOption};
use layerdom::{Document, Element, Event, Rect, Style};

#[test]
fn test_option_defaults() {
    let option = SelectOption::new("k", "v");

    assert_eq!(option.key(), "k");
    assert_eq!(option.value(), &OptionValue::from("v"));
    assert!(!option.is_disabled());
    assert!(!option.is_selected());
    assert!(option.display_content().is_empty());
}

#[test]
fn test_build_renders_list_item() {
    let mut doc = Document::new();
    let option = SelectOption::new("k", 3)
        .label("three")
        .class("numeric")
        .style(Style::new().bold());

    let item = option.build(&mut doc, "owner");

    assert_eq!(item.id, "owner-opt-k");
    assert!(item.has_class("option"));
    assert!(item.has_class("numeric"));
    assert!(!item.has_class("disabled"));
    assert!(!item.has_class("selected"));
    assert!(item.style.text_style.bold);
    assert_eq!(item.text_content(), "three");
    assert_eq!(doc.handler_count(), 1);
}

#[test]
fn test_disabled_flag_adds_class() {
    let mut doc = Document::new();

    let item = SelectOption::new("k", "v")
        .label("off")
        .disabled(true)
        .build(&mut doc, "owner");

    assert!(item.has_class("disabled"));
    assert!(item.disabled);
}

#[test]
fn test_default_click_is_noop() {
    let mut doc = Document::new();
    let item = SelectOption::new("k", "v").label("x").build(&mut doc, "owner");
    doc.set_body(Element::col().child(item));
    doc.layout(Rect::from_size(10, 2));

    assert!(doc.click_at(0, 0).is_some());
}

#[test]
fn test_click_reaches_handler_through_content() {
    let hits = Arc::new(Mutex::new(0));
    let mut doc = Document::new();
    let counter = Arc::clone(&hits);
    let item = SelectOption::new("k", "v")
        .content(Element::row().child(Element::text("nested")))
        .on_click(move |_event| *counter.lock().unwrap() += 1)
        .build(&mut doc, "owner");
    doc.set_body(Element::col().child(item));
    doc.layout(Rect::from_size(10, 2));

    doc.click_at(2, 0);

    assert_eq!(*hits.lock().unwrap(), 1);
}

#[test]
fn test_wrap_on_click_composes() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let inner = Arc::clone(&calls);
    let outer = Arc::clone(&calls);

    let option = SelectOption::new("k", "v")
        .on_click(move |_| inner.lock().unwrap().push("original"))
        .wrap_on_click(move |original| {
            let wrapped: ClickHandler = Arc::new(move |event: &Event| {
                outer.lock().unwrap().push("wrapper");
                original(event);
            });
            wrapped
        });

    let mut doc = Document::new();
    let item = option.label("x").build(&mut doc, "owner");
    doc.set_body(Element::col().child(item));
    doc.layout(Rect::from_size(10, 2));
    doc.click_at(0, 0);

    assert_eq!(*calls.lock().unwrap(), vec!["wrapper", "original"]);
}
