use crate::types::{Rgb, TextStyle};

/// Foreground used when no element in the ancestry sets one.
pub const DEFAULT_FG: Rgb = Rgb::new(255, 255, 255);
/// Background of an unpainted cell.
pub const DEFAULT_BG: Rgb = Rgb::new(0, 0, 0);

/// One terminal cell of a rendered frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub char: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub style: TextStyle,
    /// Second column of a double-width glyph drawn in the cell before it.
    pub wide_continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank(DEFAULT_BG)
    }
}

impl Cell {
    /// An empty cell painted with `bg`.
    pub fn blank(bg: Rgb) -> Self {
        Self {
            char: ' ',
            fg: DEFAULT_FG,
            bg,
            style: TextStyle::new(),
            wide_continuation: false,
        }
    }

    /// A printed glyph.
    pub fn glyph(char: char, fg: Rgb, bg: Rgb, style: TextStyle) -> Self {
        Self {
            char,
            fg,
            bg,
            style,
            wide_continuation: false,
        }
    }
}
