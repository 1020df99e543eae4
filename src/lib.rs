//! # rview
//!
//! A terminal file viewer. The loaded file is kept as rows of raw bytes with
//! a tab-expanded render form; the cursor moves in raw columns while the
//! screen is drawn in render columns.
//!
//! ```text
//! ┌──────────┐  bytes   ┌──────┐  Key   ┌────────┐  Frame  ┌──────────┐
//! │ Terminal │─────────▶│ keys │───────▶│ Editor │────────▶│ Terminal │
//! └──────────┘          └──────┘        └────────┘         └──────────┘
//!                                        │  cursor / viewport
//!                                        ▼
//!                                    buffer_file ─▶ display
//! ```

pub mod buffer_file;
pub mod config;
pub mod cursor;
pub mod display;
pub mod editor;
pub mod frame;
pub mod keys;
pub mod logging;
pub mod status_line;
pub mod terminal;
pub mod viewport;
pub mod welcome;

pub use buffer_file::{BufferFile, Row};
pub use editor::{Editor, EditorState};
pub use keys::{Key, NamedKey};
pub use terminal::{MockTerminal, RawTerminal, Terminal};
