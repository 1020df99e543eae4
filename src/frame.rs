//! One screen update, built in memory and written with a single call.

use crate::terminal::Terminal;
use anyhow::Result;

pub const HIDE_CURSOR: &[u8] = b"\x1b[?25l";
pub const SHOW_CURSOR: &[u8] = b"\x1b[?25h";
pub const CURSOR_HOME: &[u8] = b"\x1b[H";
pub const CLEAR_SCREEN: &[u8] = b"\x1b[2J";
pub const CLEAR_LINE: &[u8] = b"\x1b[K";
pub const REVERSE_VIDEO: &[u8] = b"\x1b[7m";
pub const RESET_ATTRIBUTES: &[u8] = b"\x1b[m";
pub const NEWLINE: &[u8] = b"\r\n";

#[derive(Debug, Default)]
pub struct Frame {
    bytes: Vec<u8>,
}

impl Frame {
    pub fn new() -> Frame {
        Frame::default()
    }

    pub fn append(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }

    /// `ESC [ row ; col H` with 1-based coordinates.
    pub fn move_cursor(&mut self, row: usize, col: usize) {
        self.append(format!("\x1b[{};{}H", row + 1, col + 1).as_bytes());
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Writes the whole frame in one call and drops it.
    pub fn flush<T: Terminal + ?Sized>(self, terminal: &mut T) -> Result<()> {
        terminal.write_all(&self.bytes)
    }
}
