//! In-memory terminal for tests: scripted input, captured output.

use super::{ByteSource, Terminal, WindowSize};
use anyhow::Result;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct MockTerminal {
    input: VecDeque<u8>,
    output: Vec<u8>,
    writes: usize,
    size: WindowSize,
}

impl MockTerminal {
    /// An 80x24 terminal.
    pub fn new() -> Self {
        Self::with_size(24, 80)
    }

    pub fn with_size(rows: u16, cols: u16) -> Self {
        Self {
            input: VecDeque::new(),
            output: Vec::new(),
            writes: 0,
            size: WindowSize { rows, cols },
        }
    }

    pub fn with_input(bytes: &[u8]) -> Self {
        let mut terminal = Self::new();
        terminal.push_input(bytes);
        terminal
    }

    pub fn push_input(&mut self, bytes: &[u8]) {
        self.input.extend(bytes.iter().copied());
    }

    /// Everything written so far.
    pub fn output(&self) -> &[u8] {
        &self.output
    }

    pub fn take_output(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.output)
    }

    /// Number of `write_all` calls made.
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl Default for MockTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteSource for MockTerminal {
    fn read_byte(&mut self) -> Result<Option<u8>> {
        Ok(self.input.pop_front())
    }
}

impl Terminal for MockTerminal {
    fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        self.output.extend_from_slice(bytes);
        self.writes += 1;
        Ok(())
    }

    fn window_size(&self) -> Result<WindowSize> {
        Ok(self.size)
    }
}
