use crate::buffer_file::BufferFile;
use crate::config::STATUS_ROWS;
use crate::cursor::Cursor;
use crate::terminal::WindowSize;

/// Visible window over the buffer.
///
/// `rowoff` is the first buffer row on screen, `coloff` the first render
/// column. Both move only as far as needed to keep the cursor visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub rowoff: usize,
    pub coloff: usize,
    screenrows: usize,
    screencols: usize,
}

impl Viewport {
    /// A text area of `screenrows` x `screencols`, each at least 1.
    pub fn new(screenrows: usize, screencols: usize) -> Viewport {
        Viewport {
            rowoff: 0,
            coloff: 0,
            screenrows: screenrows.max(1),
            screencols: screencols.max(1),
        }
    }

    /// Text area of a terminal, leaving room for the status and message bars.
    pub fn for_window(size: WindowSize) -> Viewport {
        Viewport::new(
            usize::from(size.rows.saturating_sub(STATUS_ROWS)),
            usize::from(size.cols),
        )
    }

    pub fn screenrows(&self) -> usize {
        self.screenrows
    }

    pub fn screencols(&self) -> usize {
        self.screencols
    }

    pub fn reset(&mut self) {
        self.rowoff = 0;
        self.coloff = 0;
    }

    /// Recomputes `cursor.rx` and scrolls just enough to bring the cursor
    /// into view.
    pub fn scroll(&mut self, cursor: &mut Cursor, buffer: &BufferFile) {
        cursor.rx = buffer.row(cursor.cy).map_or(0, |row| row.cx_to_rx(cursor.cx));

        let (rowoff, coloff) = (self.rowoff, self.coloff);

        if cursor.cy < self.rowoff {
            self.rowoff = cursor.cy;
        }
        if cursor.cy >= self.rowoff + self.screenrows {
            self.rowoff = cursor.cy - self.screenrows + 1;
        }
        if cursor.rx < self.coloff {
            self.coloff = cursor.rx;
        }
        if cursor.rx >= self.coloff + self.screencols {
            self.coloff = cursor.rx - self.screencols + 1;
        }

        if (rowoff, coloff) != (self.rowoff, self.coloff) {
            tracing::debug!(
                rowoff = self.rowoff,
                coloff = self.coloff,
                "viewport scrolled"
            );
        }
    }

    /// Cursor position relative to the top-left of the text area. A cursor
    /// above or left of the viewport is pinned to its edge.
    pub fn screen_position(&self, cursor: &Cursor) -> (usize, usize) {
        (
            cursor.cy.saturating_sub(self.rowoff),
            cursor.rx.saturating_sub(self.coloff),
        )
    }
}
