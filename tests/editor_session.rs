//! Whole-session tests: scripted keystrokes in, captured frames out.

use rview::config::QUIT_KEY;
use rview::{Editor, EditorState, MockTerminal};
use std::io::Write;

const UP: &[u8] = b"\x1b[A";
const DOWN: &[u8] = b"\x1b[B";
const RIGHT: &[u8] = b"\x1b[C";
const LEFT: &[u8] = b"\x1b[D";
const PAGE_DOWN: &[u8] = b"\x1b[6~";
const PAGE_UP: &[u8] = b"\x1b[5~";
const END: &[u8] = b"\x1b[F";

fn file_with(contents: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents).unwrap();
    file
}

fn session(
    rows: u16,
    cols: u16,
    contents: &[u8],
) -> (Editor<MockTerminal>, tempfile::NamedTempFile) {
    let file = file_with(contents);
    let mut editor = Editor::new(MockTerminal::with_size(rows, cols)).unwrap();
    editor.open(file.path()).unwrap();
    (editor, file)
}

fn press(editor: &mut Editor<MockTerminal>, keys: &[&[u8]]) {
    for key in keys {
        editor.terminal_mut().push_input(key);
        editor.process_keypress().unwrap();
        editor.refresh_screen().unwrap();
    }
}

fn assert_cursor_in_bounds(editor: &Editor<MockTerminal>) {
    let cursor = editor.cursor();
    let buffer = editor.buffer();
    assert!(cursor.cy <= buffer.row_count());
    assert!(cursor.cx <= buffer.line_length(cursor.cy));

    let viewport = editor.viewport();
    let (row, col) = viewport.screen_position(cursor);
    assert!(row < viewport.screenrows());
    assert!(col < viewport.screencols());
}

#[test]
fn test_run_draws_frames_until_quit() {
    let (mut editor, _file) = session(10, 40, b"first\nsecond\n");
    editor.set_status_message("HELP: Ctrl-Q = quit");
    editor.terminal_mut().push_input(DOWN);
    editor.terminal_mut().push_input(&[QUIT_KEY]);

    editor.run().unwrap();

    assert_eq!(editor.state(), EditorState::Terminating);
    // two frames plus the clear-screen on quit
    assert_eq!(editor.terminal().write_count(), 3);
    let output = String::from_utf8_lossy(editor.terminal().output()).to_string();
    assert!(output.contains("first\x1b[K\r\nsecond\x1b[K\r\n~\x1b[K"));
    assert!(output.contains("HELP: Ctrl-Q = quit"));
    assert!(output.contains("2/2\x1b[m"));
    assert!(output.ends_with("\x1b[2J\x1b[H"));
}

#[test]
fn test_run_fails_when_input_ends() {
    let (mut editor, _file) = session(10, 40, b"text\n");
    assert!(editor.run().is_err());
}

#[test]
fn test_tab_file_cursor_lands_on_render_column() {
    let (mut editor, _file) = session(10, 40, b"a\tb\n");
    assert_eq!(editor.buffer().row_at(0).render(), b"a       b");

    press(&mut editor, &[RIGHT, RIGHT]);
    assert_eq!(editor.cursor().cx, 2);
    assert_eq!(editor.cursor().rx, 8);
    let output = String::from_utf8_lossy(editor.terminal().output()).to_string();
    assert!(output.ends_with("\x1b[1;9H\x1b[?25h"));
}

#[test]
fn test_long_file_navigation_keeps_cursor_on_screen() {
    let mut contents = Vec::new();
    for i in 0..100 {
        contents.extend_from_slice(format!("{i}:\t{}\n", "x".repeat(i % 70)).as_bytes());
    }
    let (mut editor, _file) = session(26, 30, &contents);

    let script: Vec<&[u8]> = [
        vec![PAGE_DOWN; 3],
        vec![END, RIGHT, RIGHT, LEFT, LEFT],
        vec![UP; 7],
        vec![PAGE_UP],
        vec![DOWN; 130],
        vec![LEFT, END, PAGE_UP, PAGE_UP, PAGE_UP, PAGE_UP, PAGE_UP],
    ]
    .concat();

    for key in script {
        press(&mut editor, &[key]);
        assert_cursor_in_bounds(&editor);
    }
    assert_eq!(editor.cursor().cy, 0);
}

#[test]
fn test_down_past_last_row_reaches_sentinel_only() {
    let (mut editor, _file) = session(10, 40, b"one\ntwo\n");
    press(&mut editor, &[DOWN, DOWN, DOWN, DOWN]);
    assert_eq!(editor.cursor().cy, 2);
    assert_eq!(editor.cursor().cx, 0);
    assert_cursor_in_bounds(&editor);
}

#[test]
fn test_moving_to_row_fifty_in_twenty_four_row_window() {
    let contents: Vec<u8> = (0..100).flat_map(|i| format!("row {i}\n").into_bytes()).collect();
    let (mut editor, _file) = session(26, 80, &contents);
    assert_eq!(editor.viewport().screenrows(), 24);

    press(&mut editor, &vec![DOWN; 50]);
    let rowoff = editor.viewport().rowoff;
    assert!(rowoff <= 50 && 50 < rowoff + 24);
    assert_eq!(rowoff, 27);
}

#[test]
fn test_each_frame_is_complete_on_its_own() {
    let (mut editor, _file) = session(6, 60, b"alpha\nbeta\ngamma\n");
    editor.refresh_screen().unwrap();
    let first = editor.terminal_mut().take_output();

    press(&mut editor, &[DOWN, END]);
    editor.terminal_mut().take_output();
    editor.refresh_screen().unwrap();
    let latest = editor.terminal_mut().take_output();

    for frame in [&first, &latest] {
        let text = String::from_utf8_lossy(frame).to_string();
        assert!(text.starts_with("\x1b[?25l\x1b[H"));
        assert!(text.ends_with("\x1b[?25h"));
        assert_eq!(text.matches("\r\n").count(), 5);
    }
    let first = String::from_utf8_lossy(&first).to_string();
    let latest = String::from_utf8_lossy(&latest).to_string();
    assert!(first.ends_with("\x1b[1;1H\x1b[?25h"));
    assert!(latest.contains("2/3\x1b[m"));
    assert!(latest.ends_with("\x1b[2;5H\x1b[?25h"));
    assert!(editor.terminal().output().is_empty());
}
