use crate::buffer_file::BufferFile;
use crate::viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Cursor position in buffer coordinates.
///
/// `cx` may equal the row length (end of row) and `cy` may equal the row
/// count (the line past the last row). `rx` is derived from `cx` each frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub cx: usize,
    pub cy: usize,
    pub rx: usize,
}

impl Cursor {
    pub fn new() -> Cursor {
        Cursor::default()
    }

    /// One step in `direction`. Left/right wrap across row boundaries;
    /// afterwards `cx` is clamped to the length of the row it lands on.
    pub fn move_step(&mut self, direction: Direction, buffer: &BufferFile) {
        let row_count = buffer.row_count();

        match direction {
            Direction::Left => {
                if self.cx != 0 {
                    self.cx -= 1;
                } else if self.cy > 0 {
                    self.cy -= 1;
                    self.cx = buffer.line_length(self.cy);
                }
            }
            Direction::Right => {
                if let Some(row) = buffer.row(self.cy) {
                    if self.cx < row.len() {
                        self.cx += 1;
                    } else if self.cx == row.len() {
                        self.cy += 1;
                        self.cx = 0;
                    }
                }
            }
            Direction::Up => {
                self.cy = self.cy.saturating_sub(1);
            }
            Direction::Down => {
                if self.cy < row_count {
                    self.cy += 1;
                }
            }
        }

        self.cx = self.cx.min(buffer.line_length(self.cy));
    }

    pub fn home(&mut self) {
        self.cx = 0;
    }

    /// End of the current row; a no-op on the past-the-end line.
    pub fn end(&mut self, buffer: &BufferFile) {
        if let Some(row) = buffer.row(self.cy) {
            self.cx = row.len();
        }
    }

    /// Jumps to the top (up) or bottom (down) edge of the visible window,
    /// then moves a full screen further.
    pub fn page(&mut self, direction: Direction, viewport: &Viewport, buffer: &BufferFile) {
        let screenrows = viewport.screenrows();
        match direction {
            Direction::Up => self.cy = viewport.rowoff,
            Direction::Down => {
                self.cy = (viewport.rowoff + screenrows)
                    .saturating_sub(1)
                    .min(buffer.row_count());
            }
            Direction::Left | Direction::Right => return,
        }

        for _ in 0..screenrows {
            self.move_step(direction, buffer);
        }
    }
}
