use crate::buffer_file::BufferFile;
use crate::config::QUIT_KEY;
use crate::cursor::{Cursor, Direction};
use crate::display::Display;
use crate::frame::{CLEAR_SCREEN, CURSOR_HOME};
use crate::keys::{read_key, Key, NamedKey};
use crate::status_line::StatusMessage;
use crate::terminal::Terminal;
use crate::viewport::Viewport;
use anyhow::{Context, Result};
use std::path::Path;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    Running,
    Terminating,
}

/// Owns the buffer and all view state for one session.
pub struct Editor<T: Terminal> {
    terminal: T,
    buffer: BufferFile,
    cursor: Cursor,
    viewport: Viewport,
    status_message: Option<StatusMessage>,
    state: EditorState,
}

impl<T: Terminal> Editor<T> {
    /// Sizes the text area from the terminal. Fails if the window size
    /// cannot be determined.
    pub fn new(terminal: T) -> Result<Editor<T>> {
        let size = terminal
            .window_size()
            .context("failed to determine window size")?;
        tracing::info!(rows = size.rows, cols = size.cols, "editor started");

        Ok(Editor {
            terminal,
            buffer: BufferFile::new_empty(),
            cursor: Cursor::new(),
            viewport: Viewport::for_window(size),
            status_message: None,
            state: EditorState::Running,
        })
    }

    /// Loads `path` into the buffer, replacing any previous content.
    pub fn open(&mut self, path: &Path) -> Result<()> {
        self.buffer = BufferFile::open(path)?;
        self.cursor = Cursor::new();
        self.viewport.reset();
        Ok(())
    }

    pub fn set_status_message(&mut self, text: &str) {
        self.status_message = Some(StatusMessage::new(text, Instant::now()));
    }

    /// Alternates between drawing a frame and handling one key until the
    /// quit chord is pressed.
    pub fn run(&mut self) -> Result<()> {
        while self.state == EditorState::Running {
            self.refresh_screen()?;
            self.process_keypress()?;
        }
        tracing::info!("editor terminated");
        Ok(())
    }

    pub fn refresh_screen(&mut self) -> Result<()> {
        self.refresh_screen_at(Instant::now())
    }

    pub fn refresh_screen_at(&mut self, now: Instant) -> Result<()> {
        self.viewport.scroll(&mut self.cursor, &self.buffer);

        let frame = Display::new(
            &self.buffer,
            &self.cursor,
            &self.viewport,
            self.status_message.as_ref(),
        )
        .show_display(now);
        frame.flush(&mut self.terminal)
    }

    /// Reads and handles exactly one key.
    pub fn process_keypress(&mut self) -> Result<EditorState> {
        let key = read_key(&mut self.terminal)?;
        self.handle_key(key)
    }

    pub fn handle_key(&mut self, key: Key) -> Result<EditorState> {
        tracing::debug!(?key, "key");

        match key {
            Key::Literal(QUIT_KEY) => {
                self.terminal.write_all(&[CLEAR_SCREEN, CURSOR_HOME].concat())?;
                self.state = EditorState::Terminating;
            }
            Key::Named(NamedKey::Home) => self.cursor.home(),
            Key::Named(NamedKey::End) => self.cursor.end(&self.buffer),
            Key::Named(NamedKey::PageUp) => {
                self.cursor.page(Direction::Up, &self.viewport, &self.buffer);
            }
            Key::Named(NamedKey::PageDown) => {
                self.cursor.page(Direction::Down, &self.viewport, &self.buffer);
            }
            Key::Named(NamedKey::ArrowUp) => self.cursor.move_step(Direction::Up, &self.buffer),
            Key::Named(NamedKey::ArrowDown) => {
                self.cursor.move_step(Direction::Down, &self.buffer);
            }
            Key::Named(NamedKey::ArrowLeft) => {
                self.cursor.move_step(Direction::Left, &self.buffer);
            }
            Key::Named(NamedKey::ArrowRight) => {
                self.cursor.move_step(Direction::Right, &self.buffer);
            }
            Key::Named(NamedKey::Delete) | Key::Literal(_) => {}
        }

        Ok(self.state)
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn buffer(&self) -> &BufferFile {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut BufferFile {
        &mut self.buffer
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut T {
        &mut self.terminal
    }
}
