//! Seam between the editor core and the real terminal.
//!
//! ```text
//! Production:  Editor ──▶ RawTerminal  ──▶ stdin / stdout (raw mode via crossterm)
//! Testing:     Editor ──▶ MockTerminal ──▶ VecDeque<u8> / Vec<u8>
//! ```

use anyhow::Result;

pub mod mock;
pub mod raw;

pub use mock::MockTerminal;
pub use raw::{install_panic_hook, RawModeGuard, RawTerminal};

/// Terminal geometry in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    pub rows: u16,
    pub cols: u16,
}

/// Blocking single-byte input.
pub trait ByteSource {
    /// Returns the next byte, or `None` when no byte is available
    /// (end of input).
    fn read_byte(&mut self) -> Result<Option<u8>>;
}

/// Everything the editor needs from a terminal.
pub trait Terminal: ByteSource {
    /// Writes `bytes` in full.
    fn write_all(&mut self, bytes: &[u8]) -> Result<()>;

    fn window_size(&self) -> Result<WindowSize>;
}
