use std::sync::{Arc, Mutex};

use layerdom::{Document, DomError, Element, Event, EventKind, Position, Rect};

fn recorder() -> (Arc<Mutex<Vec<String>>>, impl Fn(&str) -> layerdom::Handler) {
    let log = Arc::new(Mutex::new(Vec::new()));
    let make = {
        let log = Arc::clone(&log);
        move |name: &str| -> layerdom::Handler {
            let log = Arc::clone(&log);
            let name = name.to_string();
            Arc::new(move |_doc: &mut Document, event: &Event| {
                log.lock()
                    .unwrap()
                    .push(format!("{name}:{:?}", event.kind));
            })
        }
    };
    (log, make)
}

fn body() -> Element {
    Element::col()
        .id("root")
        .child(Element::row().id("row").child(Element::text("button").id("btn")))
}

// ============================================================================
// Mount points
// ============================================================================

#[test]
fn test_mount_point_lifecycle() {
    let mut doc = Document::new();
    let id = doc.create_mount_point("owner");

    assert_eq!(doc.mount_count(), 1);
    assert!(doc.mount_point(id).is_some());

    doc.render_into(id, Element::text("inside").id("inside")).unwrap();
    assert!(doc.find("inside").is_some());

    doc.remove_mount_point(id).unwrap();
    assert_eq!(doc.mount_count(), 0);
    assert!(doc.find("inside").is_none());
    assert_eq!(doc.remove_mount_point(id), Err(DomError::UnknownMountPoint(id)));
    assert_eq!(
        doc.render_into(id, Element::text("late")),
        Err(DomError::UnknownMountPoint(id))
    );
}

#[test]
fn test_render_into_replaces_previous_content() {
    let mut doc = Document::new();
    let id = doc.create_mount_point("owner");

    doc.render_into(id, Element::text("one").id("one")).unwrap();
    doc.render_into(id, Element::text("two").id("two")).unwrap();

    assert!(doc.find("one").is_none());
    assert!(doc.find("two").is_some());
}

#[test]
fn test_mount_points_render_above_body() {
    let mut doc = Document::new();
    doc.set_body(Element::text("body text").id("body"));
    let id = doc.create_mount_point("owner");
    doc.render_into(
        id,
        Element::text("OVER")
            .id("over")
            .position(Position::Absolute)
            .left(2),
    )
    .unwrap();
    doc.layout(Rect::from_size(20, 2));

    let mut buf = layerdom::Buffer::new(20, 2);
    doc.render(&mut buf);

    assert_eq!(buf.line(0), "boOVERext");
    assert_eq!(doc.hit(3, 0), Some("over".to_string()));
    assert_eq!(doc.hit(0, 0), Some("body".to_string()));
}

// ============================================================================
// Bounding boxes
// ============================================================================

#[test]
fn test_bounding_rect_requires_attached_element() {
    let mut doc = Document::new();
    doc.set_body(body());
    doc.layout(Rect::from_size(20, 5));

    assert_eq!(doc.bounding_rect("btn"), Some(Rect::new(0, 0, 6, 1)));

    // A stale rect for a detached element is not reported.
    doc.layout_mut().insert("detached".into(), Rect::new(1, 1, 1, 1));
    assert_eq!(doc.bounding_rect("detached"), None);
    assert_eq!(doc.bounding_rect("missing"), None);
}

// ============================================================================
// Dispatch
// ============================================================================

#[test]
fn test_dispatch_order_capture_bubble_listener() {
    let mut doc = Document::new();
    doc.set_body(body());
    doc.layout(Rect::from_size(20, 5));

    let (log, make) = recorder();
    doc.add_listener("t", EventKind::Click, false, make("after"));
    doc.add_listener("t", EventKind::Click, true, make("capture"));
    doc.on("t", "root", EventKind::Click, make("root"));
    doc.on("t", "btn", EventKind::Click, make("btn"));

    let target = doc.dispatch(Event::click(1, 0));

    assert_eq!(target, Some("btn".to_string()));
    assert_eq!(
        *log.lock().unwrap(),
        vec!["capture:Click", "btn:Click", "root:Click", "after:Click"]
    );
}

#[test]
fn test_handlers_filter_by_kind() {
    let mut doc = Document::new();
    doc.set_body(body());
    doc.layout(Rect::from_size(20, 5));

    let (log, make) = recorder();
    doc.on("t", "btn", EventKind::Click, make("btn"));
    doc.add_listener("t", EventKind::PointerDown, true, make("down"));

    doc.click_at(0, 0);

    assert_eq!(*log.lock().unwrap(), vec!["down:PointerDown", "btn:Click"]);
}

#[test]
fn test_on_replaces_handler_for_same_element() {
    let mut doc = Document::new();
    doc.set_body(body());
    doc.layout(Rect::from_size(20, 5));

    let (log, make) = recorder();
    doc.on("t", "btn", EventKind::Click, make("old"));
    doc.on("t", "btn", EventKind::Click, make("new"));
    assert_eq!(doc.handler_count(), 1);

    doc.dispatch(Event::click(0, 0));

    assert_eq!(*log.lock().unwrap(), vec!["new:Click"]);
}

#[test]
fn test_miss_still_reaches_listeners() {
    let mut doc = Document::new();
    doc.set_body(body());
    doc.layout(Rect::from_size(20, 5));

    let (log, make) = recorder();
    doc.add_listener("t", EventKind::PointerDown, true, make("down"));
    doc.on("t", "btn", EventKind::PointerDown, make("btn"));

    let target = doc.dispatch(Event::pointer_down(15, 4));

    assert_eq!(target, None);
    assert_eq!(*log.lock().unwrap(), vec!["down:PointerDown"]);
}

#[test]
fn test_handlers_may_mutate_document() {
    let mut doc = Document::new();
    doc.set_body(body());
    doc.layout(Rect::from_size(20, 5));

    doc.on(
        "t",
        "btn",
        EventKind::Click,
        Arc::new(|doc: &mut Document, _event: &Event| {
            doc.create_mount_point("t");
        }),
    );

    doc.dispatch(Event::click(0, 0));
    doc.dispatch(Event::click(0, 0));

    assert_eq!(doc.mount_count(), 2);
}

// ============================================================================
// Ownership
// ============================================================================

#[test]
fn test_remove_listener_and_owner() {
    let mut doc = Document::new();
    let (_log, make) = recorder();

    let kept = doc.add_listener("a", EventKind::Click, true, make("a"));
    let dropped = doc.add_listener("b", EventKind::Click, true, make("b"));
    doc.on("b", "btn", EventKind::Click, make("b"));
    doc.create_mount_point("b");
    assert_eq!(doc.listener_count(), 2);

    doc.remove_listener(dropped).unwrap();
    assert_eq!(doc.remove_listener(dropped), Err(DomError::UnknownListener(dropped)));
    assert_eq!(doc.listener_count(), 1);

    doc.remove_owner("b");
    assert_eq!(doc.handler_count(), 0);
    assert_eq!(doc.mount_count(), 0);
    assert_eq!(doc.listener_count(), 1);

    doc.remove_listener(kept).unwrap();
    assert_eq!(doc.listener_count(), 0);
}
