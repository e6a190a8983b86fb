use crate::buffer::{Buffer, Cell, DEFAULT_BG, DEFAULT_FG};
use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::text::char_width;
use crate::types::{Border, Color, Rgb, TextStyle};

/// Text attributes and foreground a parent passes to its descendants.
#[derive(Debug, Clone, Copy, Default)]
struct Inherited {
    foreground: Option<Color>,
    text_style: TextStyle,
}

pub fn render_to_buffer(element: &Element, layout: &LayoutResult, buf: &mut Buffer) {
    render_element(element, layout, buf, Inherited::default());
}

fn render_element(
    element: &Element,
    layout: &LayoutResult,
    buf: &mut Buffer,
    inherited: Inherited,
) {
    if element.hidden {
        return;
    }
    let Some(rect) = layout.get(&element.id).copied() else {
        return;
    };

    if let Some(bg) = &element.style.background {
        buf.fill(rect, Cell::blank(bg.to_rgb_or(DEFAULT_BG)));
    }

    let inherited = Inherited {
        foreground: element.style.foreground.or(inherited.foreground),
        text_style: inherited.text_style.merge(element.style.text_style),
    };

    render_border(element, rect, buf, inherited);

    match &element.content {
        Content::None => {}
        Content::Text(text) => render_text(text, element, rect, buf, inherited),
        Content::Children(children) => {
            // Stable sort keeps declaration order among equal z-indexes.
            let mut ordered: Vec<&Element> = children.iter().collect();
            ordered.sort_by_key(|c| c.z_index);
            for child in ordered {
                render_element(child, layout, buf, inherited);
            }
        }
    }
}

fn render_text(
    text: &str,
    element: &Element,
    rect: Rect,
    buf: &mut Buffer,
    inherited: Inherited,
) {
    let fg = inherited
        .foreground
        .map(|c| c.to_rgb_or(DEFAULT_FG))
        .unwrap_or(DEFAULT_FG);
    let explicit_bg = element.style.background.map(|c| c.to_rgb_or(DEFAULT_BG));

    let inner = rect.shrink(element.style.border.size());
    let y = inner.y;
    let mut x = inner.x;

    for ch in text.chars() {
        let width = u16::try_from(char_width(ch)).unwrap_or(1);
        if x.saturating_add(width) > inner.right() || y >= inner.bottom() {
            break;
        }

        // Preserve existing background if no explicit background set
        let bg = explicit_bg
            .unwrap_or_else(|| buf.get(x, y).map(|c| c.bg).unwrap_or(DEFAULT_BG));

        buf.put(x, y, Cell::glyph(ch, fg, bg, inherited.text_style));
        for offset in 1..width {
            if let Some(cell) = buf.get_mut(x + offset, y) {
                cell.wide_continuation = true;
            }
        }
        x += width.max(1);
    }
}

fn render_border(element: &Element, rect: Rect, buf: &mut Buffer, inherited: Inherited) {
    let (tl, tr, bl, br, h, v) = match element.style.border {
        Border::None => return,
        Border::Single => ('┌', '┐', '└', '┘', '─', '│'),
        Border::Rounded => ('╭', '╮', '╰', '╯', '─', '│'),
    };

    if rect.width < 2 || rect.height < 2 {
        return;
    }

    let fg = inherited
        .foreground
        .map(|c| c.to_rgb_or(DEFAULT_FG))
        .unwrap_or(DEFAULT_FG);

    set_char(buf, rect.x, rect.y, tl, fg);
    set_char(buf, rect.right() - 1, rect.y, tr, fg);
    set_char(buf, rect.x, rect.bottom() - 1, bl, fg);
    set_char(buf, rect.right() - 1, rect.bottom() - 1, br, fg);

    for x in (rect.x + 1)..(rect.right() - 1) {
        set_char(buf, x, rect.y, h, fg);
        set_char(buf, x, rect.bottom() - 1, h, fg);
    }

    for y in (rect.y + 1)..(rect.bottom() - 1) {
        set_char(buf, rect.x, y, v, fg);
        set_char(buf, rect.right() - 1, y, v, fg);
    }
}

fn set_char(buf: &mut Buffer, x: u16, y: u16, ch: char, fg: Rgb) {
    if let Some(cell) = buf.get_mut(x, y) {
        cell.char = ch;
        cell.fg = fg;
    }
}
