//! Line reader tests

use litex_demo_console::console::line_buffer::MAX_LINE_LEN;
use litex_demo_console::console::reader::{Edit, LineReader};
use litex_demo_console::hal::SimBoard;

/// Poll once per queued byte, returning the last completed line
fn poll_all(reader: &mut LineReader, board: &mut SimBoard) -> Option<String> {
    let mut line = None;
    while board.pending_input() > 0 {
        if let Some(l) = reader.poll_input(board) {
            line = Some(l.as_str().to_string());
        }
    }
    line
}

#[test]
fn test_poll_without_input_is_idle() {
    let mut reader = LineReader::new();
    let mut board = SimBoard::full();

    assert!(reader.poll_input(&mut board).is_none());
    assert_eq!(reader.last_edit(), Edit::Idle);
    assert_eq!(board.output(), "");
}

#[test]
fn test_partial_line_is_buffered_and_echoed() {
    let mut reader = LineReader::new();
    let mut board = SimBoard::full();

    board.feed("hel");
    assert_eq!(poll_all(&mut reader, &mut board), None);

    assert_eq!(reader.pending(), b"hel");
    assert_eq!(board.output(), "hel");
}

#[test]
fn test_carriage_return_completes_line() {
    let mut reader = LineReader::new();
    let mut board = SimBoard::full();

    board.feed("set 5\r");
    let line = poll_all(&mut reader, &mut board);

    assert_eq!(line.as_deref(), Some("set 5"));
    assert_eq!(board.output(), "set 5\n");
    assert!(reader.pending().is_empty());
    assert_eq!(reader.last_edit(), Edit::Completed);
}

#[test]
fn test_line_feed_completes_line() {
    let mut reader = LineReader::new();
    let mut board = SimBoard::full();

    board.feed("read\n");
    assert_eq!(poll_all(&mut reader, &mut board).as_deref(), Some("read"));
}

#[test]
fn test_empty_line() {
    let mut reader = LineReader::new();
    let mut board = SimBoard::full();

    board.feed("\r");
    assert_eq!(poll_all(&mut reader, &mut board).as_deref(), Some(""));
}

#[test]
fn test_backspace_on_empty_is_noop() {
    let mut reader = LineReader::new();
    let mut board = SimBoard::full();

    board.feed_bytes(&[0x7F]);
    assert!(reader.poll_input(&mut board).is_none());

    assert_eq!(reader.last_edit(), Edit::Ignored);
    assert!(reader.pending().is_empty());
    assert_eq!(board.output(), "");
}

#[test]
fn test_backspace_and_delete_erase() {
    let mut reader = LineReader::new();
    let mut board = SimBoard::full();

    board.feed_bytes(b"abc\x08\x7F");
    poll_all(&mut reader, &mut board);

    assert_eq!(reader.pending(), b"a");
    assert_eq!(board.output(), "abc\x08 \x08\x08 \x08");
}

#[test]
fn test_bell_is_ignored() {
    let mut reader = LineReader::new();
    let mut board = SimBoard::full();

    board.feed_bytes(b"a\x07b");
    poll_all(&mut reader, &mut board);

    assert_eq!(reader.pending(), b"ab");
    assert_eq!(board.output(), "ab");
}

#[test]
fn test_overflow_character_dropped_without_echo() {
    let mut reader = LineReader::new();
    let mut board = SimBoard::full();

    let full = "a".repeat(MAX_LINE_LEN);
    board.feed(&full);
    poll_all(&mut reader, &mut board);
    assert_eq!(reader.pending().len(), MAX_LINE_LEN);

    board.feed("b");
    assert!(reader.poll_input(&mut board).is_none());
    assert_eq!(reader.last_edit(), Edit::Dropped);
    assert_eq!(reader.pending().len(), MAX_LINE_LEN);
    assert_eq!(board.output(), full);

    board.feed("\r");
    let line = poll_all(&mut reader, &mut board).unwrap();
    assert_eq!(line, full);
}

#[test]
fn test_reset_discards_partial_line() {
    let mut reader = LineReader::new();
    let mut board = SimBoard::full();

    board.feed("gp");
    poll_all(&mut reader, &mut board);
    reader.reset();

    board.feed("io\r");
    assert_eq!(poll_all(&mut reader, &mut board).as_deref(), Some("io"));
}

#[test]
fn test_multibyte_input_echoes_raw_bytes() {
    let mut reader = LineReader::new();
    let mut board = SimBoard::full();
    board.feed("é\r");

    let line = poll_all(&mut reader, &mut board);

    assert_eq!(line.as_deref(), Some("é"));
    assert_eq!(board.output_bytes(), "é\n".as_bytes());
}
