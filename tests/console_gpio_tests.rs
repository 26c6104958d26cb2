//! GPIO command mode tests

use litex_demo_console::console::{Console, ConsoleError, Mode, Outcome, Poll};
use litex_demo_console::hal::{GpioRegisters, SimBoard};
use litex_demo_console::ConsoleConfig;

fn run(console: &mut Console, board: &mut SimBoard, input: &str) -> Vec<Outcome> {
    board.feed(input);
    let mut outcomes = Vec::new();
    while board.pending_input() > 0 {
        if let Poll::Dispatched(outcome) = console.service(board) {
            outcomes.push(outcome);
        }
    }
    outcomes
}

/// Console already switched into GPIO mode, with output cleared
fn gpio_console() -> (Console, SimBoard) {
    let mut console = Console::default();
    let mut board = SimBoard::full();
    run(&mut console, &mut board, "gpio\r");
    assert_eq!(console.mode(), Mode::Gpio);
    board.clear_output();
    (console, board)
}

#[test]
fn test_enter_shows_gpio_prompt() {
    let mut console = Console::default();
    let mut board = SimBoard::full();

    let outcomes = run(&mut console, &mut board, "gpio\r");

    assert_eq!(outcomes, [Outcome::Handled]);
    assert_eq!(console.mode(), Mode::Gpio);
    assert!(board.output().ends_with(ConsoleConfig::DEFAULT.gpio_prompt));
}

#[test]
fn test_exit_returns_to_top() {
    let (mut console, mut board) = gpio_console();

    run(&mut console, &mut board, "exit\r");

    assert_eq!(console.mode(), Mode::Top);
    assert!(board.output().ends_with(ConsoleConfig::DEFAULT.prompt));

    // Top-level commands dispatch again
    board.clear_output();
    run(&mut console, &mut board, "hello\r");
    assert!(board.output().contains("Rust: Hello, world!"));
}

#[test]
fn test_top_commands_unknown_in_gpio_mode() {
    let (mut console, mut board) = gpio_console();

    let outcomes = run(&mut console, &mut board, "hello\r");

    assert_eq!(outcomes, [Outcome::Unknown]);
    assert!(board.output().contains("Unknown command: hello"));
    assert!(board.output().contains("Enter GPIO command:"));
    assert_eq!(console.mode(), Mode::Gpio);
}

#[test]
fn test_empty_line_prints_gpio_help() {
    let (mut console, mut board) = gpio_console();

    let outcomes = run(&mut console, &mut board, "\r");

    assert_eq!(outcomes, [Outcome::Unknown]);
    assert!(board.output().contains("blink <bit> <count> <interval>"));
    assert!(board.output().ends_with(ConsoleConfig::DEFAULT.gpio_prompt));
}

#[test]
fn test_write_and_status() {
    let (mut console, mut board) = gpio_console();

    run(&mut console, &mut board, "write 0xFF\r");
    assert_eq!(board.out_read(), 0xFF);
    assert!(board.output().contains("GPIO_OUT set to 0x000000FF"));

    board.set_inputs(0x1234);
    board.clear_output();
    run(&mut console, &mut board, "status\r");
    assert!(board.output().contains("GPIO Status:"));
    assert!(board.output().contains("  Inputs  : 0x00001234"));
    assert!(board.output().contains("  Outputs : 0x000000FF"));
    assert!(board.output().contains("  Direction (OE): 0x00000000"));
}

#[test]
fn test_write_accepts_decimal_and_octal() {
    let (mut console, mut board) = gpio_console();

    run(&mut console, &mut board, "write 42\r");
    assert_eq!(board.out_read(), 42);

    run(&mut console, &mut board, "write 017\r");
    assert_eq!(board.out_read(), 0o17);

    run(&mut console, &mut board, "write zz\r");
    assert_eq!(board.out_read(), 0);
}

#[test]
fn test_write_without_value() {
    let (mut console, mut board) = gpio_console();

    let outcomes = run(&mut console, &mut board, "write\r");

    assert_eq!(outcomes, [Outcome::Failed(ConsoleError::MissingArg("value"))]);
    assert!(board.output().contains("Error E03: missing value"));
    assert!(board.out_history().is_empty());
}

#[test]
fn test_read() {
    let (mut console, mut board) = gpio_console();
    board.set_inputs(0xDEAD_BEEF);

    run(&mut console, &mut board, "read\r");
    assert!(board.output().contains("GPIO_IN value: 0xDEADBEEF"));
}

#[test]
fn test_set_marks_output() {
    let (mut console, mut board) = gpio_console();

    run(&mut console, &mut board, "set 3\r");

    assert_eq!(board.oe_read(), 0x8);
    assert!(board.out_history().is_empty());
    assert!(board.output().contains("Bit 3 set as output. GPIO_OE: 0x00000008"));
}

#[test]
fn test_set_rejects_out_of_range_bit() {
    let (mut console, mut board) = gpio_console();

    let outcomes = run(&mut console, &mut board, "set 32\rset -1\r");

    assert_eq!(
        outcomes,
        [
            Outcome::Failed(ConsoleError::BitOutOfRange),
            Outcome::Failed(ConsoleError::BitOutOfRange)
        ]
    );
    assert!(board.output().contains("Error E04: bit must be between 0 and 31"));
    assert!(board.oe_history().is_empty());
}

#[test]
fn test_set_requires_bit() {
    let (mut console, mut board) = gpio_console();

    let outcomes = run(&mut console, &mut board, "set\r");

    assert_eq!(outcomes, [Outcome::Failed(ConsoleError::MissingArg("bit number"))]);
    assert!(board.output().contains("Error E03: missing bit number"));
}

#[test]
fn test_clear_bit() {
    let (mut console, mut board) = gpio_console();

    run(&mut console, &mut board, "write 0xF\rclear 1\r");

    assert_eq!(board.out_read(), 0xD);
    assert!(board.output().contains("Bit 1 cleared. GPIO_OUT: 0x0000000D"));
}

#[test]
fn test_toggle() {
    let (mut console, mut board) = gpio_console();

    run(&mut console, &mut board, "toggle 4\r");
    assert_eq!(board.out_read(), 0x10);
    run(&mut console, &mut board, "toggle 4\r");
    assert_eq!(board.out_read(), 0);

    // Missing bit reads as bit 0
    run(&mut console, &mut board, "toggle\r");
    assert_eq!(board.out_read(), 1);

    let outcomes = run(&mut console, &mut board, "toggle 40\r");
    assert_eq!(outcomes, [Outcome::Failed(ConsoleError::BitOutOfRange)]);
    assert_eq!(board.out_read(), 1);
    assert_eq!(board.out_history().len(), 3);
}

#[test]
fn test_direction() {
    let (mut console, mut board) = gpio_console();

    run(&mut console, &mut board, "direction 5 out\r");
    assert_eq!(board.oe_read(), 0x20);
    assert!(board.output().contains("Bit 5 set as output."));

    run(&mut console, &mut board, "direction 5 in\r");
    assert_eq!(board.oe_read(), 0);
    assert!(board.output().contains("Bit 5 set as input."));

    board.clear_output();
    let outcomes = run(&mut console, &mut board, "direction 5 sideways\r");
    assert_eq!(outcomes, [Outcome::Handled]);
    assert_eq!(board.oe_history().len(), 2);
    assert!(!board.output().contains("Bit 5"));
}

#[test]
fn test_pulse() {
    let (mut console, mut board) = gpio_console();

    run(&mut console, &mut board, "pulse 2 50\r");

    assert_eq!(board.out_history(), &[0x4, 0x0]);
    assert_eq!(board.waited_ms(), 50);
    assert!(board.output().contains("Bit 2 pulsed for 50 ms."));
}

#[test]
fn test_pulse_negative_duration_does_not_wait() {
    let (mut console, mut board) = gpio_console();

    run(&mut console, &mut board, "pulse 2 -5\r");

    assert_eq!(board.out_history(), &[0x4, 0x0]);
    assert_eq!(board.waited_ms(), 0);
}

#[test]
fn test_blink() {
    let (mut console, mut board) = gpio_console();

    run(&mut console, &mut board, "blink 1 3 10\r");

    assert_eq!(board.out_history(), &[2, 0, 2, 0, 2, 0]);
    assert_eq!(board.waited_ms(), 60);
    assert!(board.output().contains("Bit 1 blinked 3 times with 10 ms interval."));
}

#[test]
fn test_blink_keeps_other_bits() {
    let (mut console, mut board) = gpio_console();

    run(&mut console, &mut board, "write 0x80\rblink 0 1 0\r");

    assert_eq!(board.out_history(), &[0x80, 0x81, 0x80]);
}

#[test]
fn test_blink_negative_count_is_noop() {
    let (mut console, mut board) = gpio_console();

    run(&mut console, &mut board, "blink 1 -2 10\r");

    assert!(board.out_history().is_empty());
    assert_eq!(board.waited_ms(), 0);
}

#[test]
fn test_zero_length_pulse_restores_state() {
    let (mut console, mut board) = gpio_console();

    run(&mut console, &mut board, "pulse 2 0\r");

    assert_eq!(board.out_history(), &[0x4, 0x0]);
    assert_eq!(board.out_read(), 0);
    assert_eq!(board.waited_ms(), 0);
}

#[test]
fn test_clear_rejects_out_of_range_bit() {
    let (mut console, mut board) = gpio_console();

    let outcomes = run(&mut console, &mut board, "clear 99\r");

    assert_eq!(outcomes, [Outcome::Failed(ConsoleError::BitOutOfRange)]);
    assert!(board.out_history().is_empty());
}

#[test]
fn test_timed_and_direction_commands_reject_out_of_range_bit() {
    let (mut console, mut board) = gpio_console();

    let outcomes = run(
        &mut console,
        &mut board,
        "pulse 32 5\rblink 40 2 5\rdirection 32 out\rdirection 32 bogus\r",
    );

    assert_eq!(outcomes, [Outcome::Failed(ConsoleError::BitOutOfRange); 4]);
    assert!(board.out_history().is_empty());
    assert!(board.oe_history().is_empty());
    assert_eq!(board.waited_ms(), 0);
}
