mod rect;

use std::collections::HashMap;

pub use rect::Rect;

use crate::element::{Content, Element};
use crate::text::display_width;
use crate::types::{Direction, Position, Size};

pub type LayoutResult = HashMap<String, Rect>;

/// Lay out `element` inside `viewport`.
///
/// Flow children stack along the container's direction with `gap` between
/// them. Absolute children leave the flow and are placed at their
/// `left`/`top` offsets from the viewport origin; negative offsets clamp to
/// the viewport edge. Hidden subtrees get no rect.
pub fn layout(element: &Element, viewport: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    layout_into(element, viewport, &mut result);
    result
}

/// Like [`layout`], but merges rects into an existing result.
pub fn layout_into(element: &Element, viewport: Rect, result: &mut LayoutResult) {
    place(element, viewport.x, viewport.y, viewport, result);
}

fn place(element: &Element, x: u16, y: u16, viewport: Rect, result: &mut LayoutResult) {
    if element.hidden {
        return;
    }

    let (x, y) = if element.position == Position::Absolute {
        (
            offset(viewport.x, element.left),
            offset(viewport.y, element.top),
        )
    } else {
        (x, y)
    };

    let (width, height) = measure(element);
    let rect = Rect::new(x, y, width, height);
    result.insert(element.id.clone(), rect);

    let inner = rect.shrink(element.style.border.size());
    let mut cursor_x = inner.x;
    let mut cursor_y = inner.y;

    for child in element.content.children() {
        if child.hidden {
            continue;
        }
        if child.position == Position::Absolute {
            place(child, 0, 0, viewport, result);
            continue;
        }

        place(child, cursor_x, cursor_y, viewport, result);
        let (w, h) = measure(child);
        match element.direction {
            Direction::Row => cursor_x = cursor_x.saturating_add(w).saturating_add(element.gap),
            Direction::Column => cursor_y = cursor_y.saturating_add(h).saturating_add(element.gap),
        }
    }
}

fn offset(origin: u16, delta: Option<i16>) -> u16 {
    let value = i32::from(origin) + i32::from(delta.unwrap_or(0));
    value.clamp(0, i32::from(u16::MAX)) as u16
}

/// Outer size of an element: content plus border, overridden by fixed sizes.
pub fn measure(element: &Element) -> (u16, u16) {
    if element.hidden {
        return (0, 0);
    }

    let (content_w, content_h) = match &element.content {
        Content::None => (0, 0),
        Content::Text(text) => (display_width(text).min(u16::MAX as usize) as u16, 1),
        Content::Children(children) => {
            let flow: Vec<(u16, u16)> = children
                .iter()
                .filter(|c| !c.hidden && c.position != Position::Absolute)
                .map(measure)
                .collect();
            let gaps = element.gap.saturating_mul(flow.len().saturating_sub(1) as u16);

            match element.direction {
                Direction::Row => (
                    flow.iter().fold(gaps, |acc, (w, _)| acc.saturating_add(*w)),
                    flow.iter().map(|(_, h)| *h).max().unwrap_or(0),
                ),
                Direction::Column => (
                    flow.iter().map(|(w, _)| *w).max().unwrap_or(0),
                    flow.iter().fold(gaps, |acc, (_, h)| acc.saturating_add(*h)),
                ),
            }
        }
    };

    let border = element.style.border.size() * 2;
    let width = match element.width {
        Size::Fixed(n) => n,
        Size::Auto => content_w.saturating_add(border),
    };
    let height = match element.height {
        Size::Fixed(n) => n,
        Size::Auto => content_h.saturating_add(border),
    };

    (width, height)
}
