//! Decoding of raw terminal input bytes into key events.
//!
//! Navigation keys arrive as escape sequences (`ESC [ A`, `ESC [ 5 ~`,
//! `ESC O H`, ...). The decoder consumes at most three bytes after the
//! escape and never buffers across calls; anything it cannot recognise,
//! including a sequence cut short by end of input, becomes a literal escape.

use crate::terminal::ByteSource;
use anyhow::{bail, Result};

pub const ESCAPE: u8 = 0x1b;

/// Keys that only exist as escape sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedKey {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A single byte exactly as read, control chords included.
    Literal(u8),
    Named(NamedKey),
}

impl Key {
    pub const ESCAPE: Key = Key::Literal(ESCAPE);
}

#[derive(Debug, Clone, Copy)]
enum DecodeState {
    Start,
    Escape,
    /// `[` or `O` seen after the escape.
    Introducer(u8),
    /// `ESC [` followed by a digit, waiting for `~`.
    Digit(u8),
}

/// Reads exactly one key from `source`.
///
/// Blocks until the first byte arrives. End of input on that first byte is
/// an error; end of input anywhere inside an escape sequence yields
/// [`Key::ESCAPE`].
pub fn read_key<S: ByteSource + ?Sized>(source: &mut S) -> Result<Key> {
    let mut state = DecodeState::Start;

    loop {
        let Some(byte) = source.read_byte()? else {
            if let DecodeState::Start = state {
                bail!("end of input while waiting for a key");
            }
            return Ok(Key::ESCAPE);
        };

        state = match state {
            DecodeState::Start if byte == ESCAPE => DecodeState::Escape,
            DecodeState::Start => return Ok(Key::Literal(byte)),
            DecodeState::Escape => DecodeState::Introducer(byte),
            DecodeState::Introducer(b'[') if byte.is_ascii_digit() => DecodeState::Digit(byte),
            DecodeState::Introducer(introducer) => {
                return Ok(final_byte(introducer, byte).map_or(Key::ESCAPE, Key::Named));
            }
            DecodeState::Digit(digit) => {
                let key = if byte == b'~' { tilde_key(digit) } else { None };
                return Ok(key.map_or(Key::ESCAPE, Key::Named));
            }
        };
    }
}

/// `ESC [ <letter>` and `ESC O <letter>`.
fn final_byte(introducer: u8, byte: u8) -> Option<NamedKey> {
    match (introducer, byte) {
        (b'[', b'A') => Some(NamedKey::ArrowUp),
        (b'[', b'B') => Some(NamedKey::ArrowDown),
        (b'[', b'C') => Some(NamedKey::ArrowRight),
        (b'[', b'D') => Some(NamedKey::ArrowLeft),
        (b'[' | b'O', b'H') => Some(NamedKey::Home),
        (b'[' | b'O', b'F') => Some(NamedKey::End),
        _ => None,
    }
}

/// `ESC [ <digit> ~`.
fn tilde_key(digit: u8) -> Option<NamedKey> {
    match digit {
        b'1' | b'7' => Some(NamedKey::Home),
        b'3' => Some(NamedKey::Delete),
        b'4' | b'8' => Some(NamedKey::End),
        b'5' => Some(NamedKey::PageUp),
        b'6' => Some(NamedKey::PageDown),
        _ => None,
    }
}
