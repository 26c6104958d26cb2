//! Hello world from the Rust runtime.

use crate::hal::Board;

pub fn run(board: &mut dyn Board) {
    let _ = writeln!(board, "Rust: Hello, world!");
}
