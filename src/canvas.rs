//! Cell-grid drawing surface shared by the terminal and by tests.

use anyhow::Result;

/// Color role of a cell. The terminal decides what each role looks like.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tint {
    Plain,
    Berry,
    Snake,
    Frame,
}

impl Default for Tint {
    fn default() -> Self {
        Tint::Plain
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub tint: Tint,
}

impl Default for Cell {
    fn default() -> Self {
        Cell { ch: ' ', tint: Tint::Plain }
    }
}

/// Anything that can hold a grid of tinted characters and show it.
///
/// Writes outside the surface are dropped.
pub trait Canvas {
    fn size(&self) -> (u16, u16);

    fn set_cell(&mut self, x: u16, y: u16, ch: char, tint: Tint);

    /// Blank every cell.
    fn clear(&mut self);

    /// Make everything drawn since the last flush visible.
    fn flush(&mut self) -> Result<()>;

    fn print_text(&mut self, x: u16, y: u16, text: &str, tint: Tint) {
        for (i, ch) in text.chars().enumerate() {
            let cx = match x.checked_add(i as u16) {
                Some(cx) => cx,
                None => break,
            };
            self.set_cell(cx, y, ch, tint);
        }
    }

    /// Outline a `w` by `h` box whose top-left corner is at `(x, y)`.
    fn draw_rect(&mut self, x: u16, y: u16, w: u16, h: u16, tint: Tint) {
        if w < 2 || h < 2 {
            return;
        }
        let (right, bottom) = (x + w - 1, y + h - 1);

        for cx in x + 1..right {
            self.set_cell(cx, y, '─', tint);
            self.set_cell(cx, bottom, '─', tint);
        }
        for cy in y + 1..bottom {
            self.set_cell(x, cy, '│', tint);
            self.set_cell(right, cy, '│', tint);
        }
        self.set_cell(x, y, '┌', tint);
        self.set_cell(right, y, '┐', tint);
        self.set_cell(x, bottom, '└', tint);
        self.set_cell(right, bottom, '┘', tint);
    }

    fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, tint: Tint) {
        for dy in 0..h {
            for dx in 0..w {
                self.set_cell(x.saturating_add(dx), y.saturating_add(dy), ch, tint);
            }
        }
    }
}

/// In-memory canvas. Also backs the terminal's double buffering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = width as usize * height as usize;
        FrameBuffer { width, height, cells: vec![Cell::default(); len] }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize, keeping the allocation when possible. Contents are cleared.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells.resize(width as usize * height as usize, Cell::default());
    }

    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// The characters of one row, trailing blanks included.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width).filter_map(|x| self.get(x, y)).map(|c| c.ch).collect()
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        (0..self.height).any(|y| self.row_text(y).contains(needle))
    }
}

impl Canvas for FrameBuffer {
    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn set_cell(&mut self, x: u16, y: u16, ch: char, tint: Tint) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = Cell { ch, tint };
        }
    }

    fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}
