//! Select Example
//!
//! Drives a select through a scripted session on a headless document and
//! prints each frame:
//! - Closed trigger showing the current value
//! - Trigger click opening the list in its own mount point
//! - Option click reporting the value and closing the list
//!
//! Logs go to `select.log`.

use std::fs::File;
use std::sync::{Arc, Mutex};

use dropdown::{OptionValue, Select, SelectOption, SelectProps};
use layerdom::{Buffer, Document, Element, Rect, Size};
use log::LevelFilter;
use simplelog::{Config, WriteLogger};

const VIEWPORT: Rect = Rect::from_size(40, 16);

fn props(value: &OptionValue, picked: &Arc<Mutex<OptionValue>>) -> SelectProps {
    let picked = Arc::clone(picked);
    SelectProps::new(value.clone())
        .on_select(move |value, _event| {
            if let Ok(mut guard) = picked.lock() {
                *guard = value.clone();
            }
        })
        .option(SelectOption::new("low", "low").label("Low"))
        .option(SelectOption::new("medium", "medium").label("Medium"))
        .option(
            SelectOption::new("high", "high")
                .label("High")
                .on_click(|_event| log::info!("high priority chosen")),
        )
        .option(
            SelectOption::new("blocker", "blocker")
                .label("Blocker")
                .disabled(true),
        )
}

fn frame(doc: &mut Document, select: &Select, value: &OptionValue, picked: &Arc<Mutex<OptionValue>>) {
    let trigger = select.render(doc, props(value, picked));
    doc.set_body(
        Element::col()
            .child(Element::box_().height(Size::Fixed(11)))
            .child(
                Element::row()
                    .gap(1)
                    .child(Element::box_().width(Size::Fixed(10)))
                    .child(Element::text("Priority:"))
                    .child(trigger),
            ),
    );
    doc.layout(VIEWPORT);
}

fn print(title: &str, doc: &Document) {
    let mut buf = Buffer::new(VIEWPORT.width, VIEWPORT.height);
    doc.render(&mut buf);
    println!("== {title}");
    for line in buf.lines() {
        println!("|{line}");
    }
}

fn click(doc: &mut Document, id: &str) {
    if let Some(rect) = doc.bounding_rect(id) {
        doc.click_at(rect.x, rect.y);
    }
}

fn main() {
    if let Ok(log_file) = File::create("select.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    let mut doc = Document::new();
    let select = Select::new();
    select.attach(&mut doc);

    let picked = Arc::new(Mutex::new(OptionValue::from("medium")));
    let current = |picked: &Arc<Mutex<OptionValue>>| {
        picked
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_else(|_| OptionValue::from("medium"))
    };

    frame(&mut doc, &select, &current(&picked), &picked);
    print("closed", &doc);

    click(&mut doc, &select.id_string());
    frame(&mut doc, &select, &current(&picked), &picked);
    print("open", &doc);

    click(&mut doc, &format!("{}-opt-high", select.id()));
    frame(&mut doc, &select, &current(&picked), &picked);
    print("after picking high", &doc);

    select.detach(&mut doc);
    println!(
        "detached: {} listeners, {} mount points",
        doc.listener_count(),
        doc.mount_count()
    );
}
