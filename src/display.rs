use crate::buffer_file::BufferFile;
use crate::config::FILENAME_DISPLAY_LIMIT;
use crate::cursor::Cursor;
use crate::frame::{
    Frame, CLEAR_LINE, CURSOR_HOME, HIDE_CURSOR, NEWLINE, RESET_ATTRIBUTES, REVERSE_VIDEO,
    SHOW_CURSOR,
};
use crate::status_line::StatusMessage;
use crate::viewport::Viewport;
use crate::welcome::WelcomeScreen;
use std::time::Instant;

/// Composes a frame from the editor state. The viewport must already be
/// scrolled for `cursor`.
pub struct Display<'a> {
    buffer: &'a BufferFile,
    cursor: &'a Cursor,
    viewport: &'a Viewport,
    status_message: Option<&'a StatusMessage>,
}

impl<'a> Display<'a> {
    pub fn new(
        buffer: &'a BufferFile,
        cursor: &'a Cursor,
        viewport: &'a Viewport,
        status_message: Option<&'a StatusMessage>,
    ) -> Display<'a> {
        Display {
            buffer,
            cursor,
            viewport,
            status_message,
        }
    }

    pub fn show_display(&self, now: Instant) -> Frame {
        let mut frame = Frame::new();
        frame.append(HIDE_CURSOR);
        frame.append(CURSOR_HOME);

        self.render_rows(&mut frame);
        self.render_status_bar(&mut frame);
        self.render_message_bar(&mut frame, now);

        let (row, col) = self.viewport.screen_position(self.cursor);
        frame.move_cursor(row, col);
        frame.append(SHOW_CURSOR);
        frame
    }

    fn render_rows(&self, frame: &mut Frame) {
        let screenrows = self.viewport.screenrows();
        let screencols = self.viewport.screencols();

        for y in 0..screenrows {
            let file_row = y + self.viewport.rowoff;

            match self.buffer.row(file_row) {
                Some(row) => {
                    let render = row.render();
                    let start = self.viewport.coloff.min(render.len());
                    let end = (self.viewport.coloff + screencols).min(render.len());
                    frame.append(&render[start..end]);
                }
                None if self.buffer.is_empty() && y == screenrows / 3 => {
                    frame.append(&WelcomeScreen::render(screencols));
                }
                None => frame.append(b"~"),
            }

            frame.append(CLEAR_LINE);
            frame.append(NEWLINE);
        }
    }

    fn render_status_bar(&self, frame: &mut Frame) {
        let width = self.viewport.screencols();
        let row_count = self.buffer.row_count();

        let filename = self.buffer.filename().unwrap_or("[No Name]");
        let left_part = format!(
            "{:.limit$} - {} lines",
            filename,
            row_count,
            limit = FILENAME_DISPLAY_LIMIT
        );
        let right_part = format!("{}/{}", self.cursor.cy + 1, row_count);

        frame.append(REVERSE_VIDEO);

        let mut len = left_part.len().min(width);
        frame.append(&left_part.as_bytes()[..len]);
        while len < width {
            if width - len == right_part.len() {
                frame.append(right_part.as_bytes());
                break;
            }
            frame.append(b" ");
            len += 1;
        }

        frame.append(RESET_ATTRIBUTES);
        frame.append(NEWLINE);
    }

    fn render_message_bar(&self, frame: &mut Frame, now: Instant) {
        frame.append(CLEAR_LINE);

        if let Some(message) = self.status_message.filter(|m| m.is_visible(now)) {
            let text = message.text().as_bytes();
            frame.append(&text[..text.len().min(self.viewport.screencols())]);
        }
    }
}
