//! Production terminal backed by stdin/stdout.
//!
//! Raw mode and geometry come from crossterm; bytes are read and written
//! directly so the editor sees exactly what the terminal sends.

use super::{ByteSource, Terminal, WindowSize};
use anyhow::{bail, Context, Result};
use crossterm::terminal;
use std::fs::File;
use std::io::{self, Read, Write};
use std::os::fd::AsFd;
use std::sync::Once;

/// Holds the terminal in raw mode for as long as it lives.
#[derive(Debug)]
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    pub fn enable() -> Result<Self> {
        terminal::enable_raw_mode().context("failed to enter raw mode")?;
        tracing::debug!("raw mode enabled");
        Ok(Self { _private: () })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        match terminal::disable_raw_mode() {
            Ok(()) => tracing::debug!("raw mode restored"),
            Err(err) => tracing::error!("failed to restore terminal mode: {err}"),
        }
    }
}

/// Restores the terminal before the default panic output is printed.
pub fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = terminal::disable_raw_mode();
            tracing::error!(?info, "panic");
            default_panic(info);
        }));
    });
}

/// Reads one byte, retrying reads interrupted by a signal. `None` at EOF.
fn read_one<R: Read + ?Sized>(reader: &mut R) -> io::Result<Option<u8>> {
    let mut byte = [0u8; 1];
    loop {
        match reader.read(&mut byte) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(byte[0])),
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        }
    }
}

/// Hands `bytes` to `writer` in one `write_all`. `writer` must not line
/// buffer, or a frame would leave in pieces.
fn write_frame<W: Write + ?Sized>(writer: &mut W, bytes: &[u8]) -> io::Result<()> {
    writer.write_all(bytes)?;
    writer.flush()
}

pub struct RawTerminal {
    stdin: io::Stdin,
    // unbuffered handle on fd 1; `io::Stdout` is line buffered
    stdout: File,
    _guard: RawModeGuard,
}

impl RawTerminal {
    /// Switches the controlling terminal to raw mode.
    pub fn new() -> Result<Self> {
        let stdout = io::stdout()
            .as_fd()
            .try_clone_to_owned()
            .context("failed to duplicate stdout")?;
        Ok(Self {
            stdin: io::stdin(),
            stdout: File::from(stdout),
            _guard: RawModeGuard::enable()?,
        })
    }
}

impl ByteSource for RawTerminal {
    fn read_byte(&mut self) -> Result<Option<u8>> {
        read_one(&mut self.stdin.lock()).context("failed to read from stdin")
    }
}

impl Terminal for RawTerminal {
    fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        write_frame(&mut self.stdout, bytes).context("failed to write to stdout")
    }

    fn window_size(&self) -> Result<WindowSize> {
        let (cols, rows) = terminal::size().context("failed to query window size")?;
        if cols == 0 {
            bail!("failed to query window size: terminal reports zero columns");
        }
        Ok(WindowSize { rows, cols })
    }
}
