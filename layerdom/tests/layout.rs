use layerdom::layout::{layout, measure};
use layerdom::{Border, Element, Position, Rect, Size, Style};

// ============================================================================
// Flow
// ============================================================================

#[test]
fn test_column_stacks_children() {
    let root = Element::col()
        .id("root")
        .child(Element::text("first").id("a"))
        .child(Element::text("second").id("b"));

    let result = layout(&root, Rect::from_size(40, 10));

    assert_eq!(result.get("root"), Some(&Rect::new(0, 0, 6, 2)));
    assert_eq!(result.get("a"), Some(&Rect::new(0, 0, 5, 1)));
    assert_eq!(result.get("b"), Some(&Rect::new(0, 1, 6, 1)));
}

#[test]
fn test_row_places_children_with_gap() {
    let root = Element::row()
        .id("root")
        .gap(1)
        .child(Element::text("ab").id("a"))
        .child(Element::text("c").id("b"));

    let result = layout(&root, Rect::new(2, 3, 40, 10));

    assert_eq!(result.get("a"), Some(&Rect::new(2, 3, 2, 1)));
    assert_eq!(result.get("b"), Some(&Rect::new(5, 3, 1, 1)));
    assert_eq!(result.get("root"), Some(&Rect::new(2, 3, 4, 1)));
}

#[test]
fn test_fixed_size_overrides_content() {
    let spacer = Element::box_().id("spacer").width(Size::Fixed(7)).height(Size::Fixed(3));
    assert_eq!(measure(&spacer), (7, 3));
}

#[test]
fn test_border_adds_a_cell_each_side() {
    let root = Element::col()
        .id("root")
        .style(Style::new().border(Border::Single))
        .child(Element::text("abc").id("t"));

    let result = layout(&root, Rect::from_size(20, 20));

    assert_eq!(result.get("root"), Some(&Rect::new(0, 0, 5, 3)));
    assert_eq!(result.get("t"), Some(&Rect::new(1, 1, 3, 1)));
}

#[test]
fn test_wide_characters_measure_by_display_width() {
    assert_eq!(measure(&Element::text("日本")), (4, 1));
}

// ============================================================================
// Hidden and absolute
// ============================================================================

#[test]
fn test_hidden_subtree_gets_no_rect() {
    let root = Element::col()
        .id("root")
        .child(Element::text("shown").id("shown"))
        .child(Element::col().id("gone").hidden(true).child(Element::text("x").id("x")));

    let result = layout(&root, Rect::from_size(20, 20));

    assert!(result.contains_key("shown"));
    assert!(!result.contains_key("gone"));
    assert!(!result.contains_key("x"));
    assert_eq!(result.get("root"), Some(&Rect::new(0, 0, 5, 1)));
}

#[test]
fn test_absolute_child_is_placed_from_viewport() {
    let root = Element::col()
        .id("root")
        .child(Element::text("flow").id("flow"))
        .child(
            Element::text("float")
                .id("float")
                .position(Position::Absolute)
                .left(6)
                .top(4),
        );

    let result = layout(&root, Rect::from_size(20, 20));

    assert_eq!(result.get("float"), Some(&Rect::new(6, 4, 5, 1)));
    // Absolute children do not take part in the parent's size.
    assert_eq!(result.get("root"), Some(&Rect::new(0, 0, 4, 1)));
}

#[test]
fn test_negative_offsets_clamp_to_viewport_edge() {
    let root = Element::text("edge")
        .id("edge")
        .position(Position::Absolute)
        .left(-5)
        .top(-3);

    let result = layout(&root, Rect::from_size(20, 20));

    assert_eq!(result.get("edge"), Some(&Rect::new(0, 0, 4, 1)));
}
