//! LED pattern demo: counter, shift, dance.

use crate::hal::Board;

/// Number of LEDs walked in shift mode
pub const SHIFT_LEDS: u32 = 4;

pub fn run(board: &mut dyn Board) {
    let _ = writeln!(board, "Led demo...");

    let _ = writeln!(board, "Counter mode...");
    for i in 0..32 {
        board.leds_write(i);
        board.busy_wait(100);
    }

    let _ = writeln!(board, "Shift mode...");
    for i in 0..SHIFT_LEDS {
        board.leds_write(1 << i);
        board.busy_wait(200);
    }
    for i in 0..SHIFT_LEDS {
        board.leds_write(1 << (SHIFT_LEDS - 1 - i));
        board.busy_wait(200);
    }

    let _ = writeln!(board, "Dance mode...");
    for _ in 0..4 {
        board.leds_write(0x55);
        board.busy_wait(200);
        board.leds_write(0xaa);
        board.busy_wait(200);
    }
}
