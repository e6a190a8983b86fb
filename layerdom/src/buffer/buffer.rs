use super::Cell;
use crate::layout::Rect;

/// Row-major grid of cells the renderer paints into.
///
/// Writes outside the grid are dropped, so callers never clip themselves.
#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        let area = usize::from(width) * usize::from(height);
        Self {
            width,
            height,
            cells: vec![Cell::default(); area],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    fn offset(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.offset(x, y).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        match self.offset(x, y) {
            Some(i) => Some(&mut self.cells[i]),
            None => None,
        }
    }

    pub fn put(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(slot) = self.get_mut(x, y) {
            *slot = cell;
        }
    }

    /// Paint every cell of `rect` that falls inside the grid.
    pub fn fill(&mut self, rect: Rect, cell: Cell) {
        for y in rect.y..rect.bottom().min(self.height) {
            for x in rect.x..rect.right().min(self.width) {
                self.put(x, y, cell);
            }
        }
    }

    fn row(&self, y: u16) -> &[Cell] {
        match self.offset(0, y) {
            Some(start) => &self.cells[start..start + usize::from(self.width)],
            None => &[],
        }
    }

    /// Characters of row `y` with trailing blanks removed.
    pub fn line(&self, y: u16) -> String {
        let text: String = self
            .row(y)
            .iter()
            .filter(|cell| !cell.wide_continuation)
            .map(|cell| cell.char)
            .collect();
        text.trim_end().to_string()
    }

    pub fn lines(&self) -> Vec<String> {
        (0..self.height).map(|y| self.line(y)).collect()
    }
}
