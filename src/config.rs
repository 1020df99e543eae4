use std::time::Duration;

/// Width of a tab stop in render columns.
pub const TAB_STOP: usize = 8;

/// How long a status message stays on the message bar.
pub const STATUS_MESSAGE_TIMEOUT: Duration = Duration::from_secs(5);

/// Longest status message kept, in bytes.
pub const STATUS_MESSAGE_CAPACITY: usize = 79;

/// Rows reserved below the text area: status bar and message bar.
pub const STATUS_ROWS: u16 = 2;

/// Characters of the filename shown on the status bar.
pub const FILENAME_DISPLAY_LIMIT: usize = 20;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const HELP_MESSAGE: &str = "HELP: Ctrl-Q = quit";

pub const QUIT_KEY: u8 = ctrl_key(b'q');

/// Byte sent by the terminal for `Ctrl` plus a letter.
pub const fn ctrl_key(key: u8) -> u8 {
    key & 0x1f
}
