use crate::config::TAB_STOP;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// One line of the file: raw bytes plus their tab-expanded render form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    chars: Vec<u8>,
    render: Vec<u8>,
}

impl Row {
    pub fn new(chars: &[u8]) -> Row {
        let mut row = Row {
            chars: chars.to_vec(),
            render: vec![],
        };
        row.update_render();
        row
    }

    pub fn chars(&self) -> &[u8] {
        &self.chars
    }

    pub fn render(&self) -> &[u8] {
        &self.render
    }

    /// Length in raw bytes, the largest legal `cx` on this row.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Rebuilds `render` from `chars`; each tab pads with spaces up to the
    /// next tab stop.
    fn update_render(&mut self) {
        let tabs = self.chars.iter().filter(|&&c| c == b'\t').count();
        let mut render = Vec::with_capacity(self.chars.len() + tabs * (TAB_STOP - 1));

        for &c in &self.chars {
            if c == b'\t' {
                render.push(b' ');
                while render.len() % TAB_STOP != 0 {
                    render.push(b' ');
                }
            } else {
                render.push(c);
            }
        }

        self.render = render;
    }

    /// Render column of raw column `cx`.
    pub fn cx_to_rx(&self, cx: usize) -> usize {
        self.chars
            .iter()
            .take(cx)
            .fold(0, |rx, &c| advance(rx, c))
    }

    /// Raw column whose render span contains `rx`; `len()` past the end.
    pub fn rx_to_cx(&self, rx: usize) -> usize {
        let mut cur_rx = 0;
        for (cx, &c) in self.chars.iter().enumerate() {
            cur_rx = advance(cur_rx, c);
            if cur_rx > rx {
                return cx;
            }
        }
        self.chars.len()
    }
}

fn advance(rx: usize, c: u8) -> usize {
    if c == b'\t' {
        rx + (TAB_STOP - 1) - (rx % TAB_STOP) + 1
    } else {
        rx + 1
    }
}

/// The loaded file, one [`Row`] per line in file order.
#[derive(Debug, Clone, Default)]
pub struct BufferFile {
    filename: Option<String>,
    rows: Vec<Row>,
}

impl BufferFile {
    pub fn new_empty() -> BufferFile {
        BufferFile::default()
    }

    /// Reads `path` line by line. Fails if the file cannot be opened or read.
    pub fn open(path: &Path) -> Result<BufferFile> {
        let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        let mut buffer = BufferFile {
            filename: Some(path.display().to_string()),
            rows: vec![],
        };
        buffer.load_lines(BufReader::new(file))?;
        tracing::info!(file = %path.display(), rows = buffer.row_count(), "file loaded");
        Ok(buffer)
    }

    /// Appends every line of `reader`, minus its trailing `\n`/`\r` bytes.
    pub fn load_lines<R: BufRead>(&mut self, reader: R) -> Result<()> {
        for line in reader.split(b'\n') {
            let mut line = line.context("failed to read line")?;
            while matches!(line.last(), Some(b'\n' | b'\r')) {
                line.pop();
            }
            self.append(&line);
        }
        Ok(())
    }

    pub fn append(&mut self, chars: &[u8]) {
        self.rows.push(Row::new(chars));
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// # Panics
    /// If `index >= row_count()`.
    pub fn row_at(&self, index: usize) -> &Row {
        &self.rows[index]
    }

    /// `None` for the past-the-end sentinel.
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Length of row `index`, 0 for the past-the-end sentinel.
    pub fn line_length(&self, index: usize) -> usize {
        self.row(index).map_or(0, Row::len)
    }

    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    pub fn set_filename(&mut self, filename: impl Into<String>) {
        self.filename = Some(filename.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    #[test]
    fn test_tab_expands_to_next_stop() {
        let row = Row::new(b"a\tb");
        assert_eq!(row.chars(), b"a\tb");
        assert_eq!(row.len(), 3);
        assert_eq!(row.render(), b"a       b");
        assert_eq!(row.render().len(), 9);
    }

    #[test]
    fn test_tab_on_stop_expands_full_width() {
        let row = Row::new(b"\t");
        assert_eq!(row.render(), b"        ");
        let row = Row::new(b"12345678\tx");
        assert_eq!(row.render(), b"12345678        x");
    }

    #[test]
    fn test_render_is_idempotent_and_never_shorter() {
        let lines: [&[u8]; 5] = [b"", b"plain", b"\t\t", b"a\tbc\td", b"       \t"];
        for line in lines {
            let mut row = Row::new(line);
            let first = row.render().to_vec();
            row.update_render();
            assert_eq!(row.render(), first.as_slice());
            assert!(row.render().len() >= row.chars().len());
        }
    }

    #[test]
    fn test_cx_to_rx_matches_render() {
        let row = Row::new(b"a\tb\t\tc");
        assert_eq!(row.cx_to_rx(0), 0);
        assert_eq!(row.cx_to_rx(1), 1);
        assert_eq!(row.cx_to_rx(2), 8);
        assert_eq!(row.cx_to_rx(3), 9);
        assert_eq!(row.cx_to_rx(4), 16);
        assert_eq!(row.cx_to_rx(5), 24);
        assert_eq!(row.cx_to_rx(row.len()), row.render().len());
    }

    #[test]
    fn test_cx_to_rx_is_monotonic() {
        let row = Row::new(b"\tab\t c\t\t");
        let mut previous = 0;
        for cx in 0..=row.len() {
            let rx = row.cx_to_rx(cx);
            assert!(rx >= previous);
            previous = rx;
        }
    }

    #[test]
    fn test_rx_to_cx_inverts_cx_to_rx() {
        let row = Row::new(b"x\ty\t\tz");
        for cx in 0..=row.len() {
            assert_eq!(row.rx_to_cx(row.cx_to_rx(cx)), cx);
        }
        // inside a tab span
        assert_eq!(row.rx_to_cx(4), 1);
        assert_eq!(row.rx_to_cx(100), row.len());
    }

    #[test]
    fn test_load_lines_strips_line_endings() {
        let mut buffer = BufferFile::new_empty();
        buffer
            .load_lines(Cursor::new(b"one\r\ntwo\n\nthree".to_vec()))
            .unwrap();
        assert_eq!(buffer.row_count(), 4);
        assert_eq!(buffer.row_at(0).chars(), b"one");
        assert_eq!(buffer.row_at(1).chars(), b"two");
        assert!(buffer.row_at(2).is_empty());
        assert_eq!(buffer.row_at(3).chars(), b"three");
    }

    #[test]
    fn test_open_reads_file_and_keeps_name() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"a\tb\n").unwrap();

        let buffer = BufferFile::open(file.path()).unwrap();
        assert_eq!(buffer.row_count(), 1);
        assert_eq!(buffer.row_at(0).chars(), b"a\tb");
        assert_eq!(buffer.row_at(0).render(), b"a       b");
        assert_eq!(buffer.filename(), Some(file.path().display().to_string().as_str()));
    }

    #[test]
    fn test_open_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(BufferFile::open(&dir.path().join("missing.txt")).is_err());
    }

    #[test]
    fn test_sentinel_row_has_no_row_and_zero_length() {
        let mut buffer = BufferFile::new_empty();
        buffer.append(b"abc");
        assert!(buffer.row(1).is_none());
        assert_eq!(buffer.line_length(0), 3);
        assert_eq!(buffer.line_length(1), 0);
    }
}
