//! GPIO command mode
//!
//! Read-modify-write access to the GPIO_OUT / GPIO_OE / GPIO_IN registers.
//! Every bit-indexed command checks the index against the register width
//! before touching hardware; other numeric arguments parse permissively.

use super::commands::{Action, CommandDescriptor, Context};
use super::mode::Mode;
use super::parse::{parse_signed, parse_unsigned};
use super::tokenizer::Tokens;
use super::ConsoleError;
use crate::config::Capabilities;
use crate::hal::Board;

/// Register width in bits
pub const GPIO_WIDTH: i32 = 32;

/// All GPIO mode commands
pub static GPIO_COMMANDS: &[CommandDescriptor] = &[
    CommandDescriptor {
        name: "write",
        usage: "write <value>",
        brief: "Write value to GPIO_OUT",
        requires: Capabilities::empty(),
        handler: cmd_write,
    },
    CommandDescriptor {
        name: "read",
        usage: "read",
        brief: "Read value from GPIO_IN",
        requires: Capabilities::empty(),
        handler: cmd_read,
    },
    CommandDescriptor {
        name: "set",
        usage: "set <bit>",
        brief: "Set GPIO bit as output",
        requires: Capabilities::empty(),
        handler: cmd_set,
    },
    CommandDescriptor {
        name: "clear",
        usage: "clear <bit>",
        brief: "Clear GPIO bit",
        requires: Capabilities::empty(),
        handler: cmd_clear,
    },
    CommandDescriptor {
        name: "toggle",
        usage: "toggle <bit>",
        brief: "Toggle GPIO bit",
        requires: Capabilities::empty(),
        handler: cmd_toggle,
    },
    CommandDescriptor {
        name: "direction",
        usage: "direction <bit> <in|out>",
        brief: "Set GPIO direction",
        requires: Capabilities::empty(),
        handler: cmd_direction,
    },
    CommandDescriptor {
        name: "status",
        usage: "status",
        brief: "Show GPIO status",
        requires: Capabilities::empty(),
        handler: cmd_status,
    },
    CommandDescriptor {
        name: "pulse",
        usage: "pulse <bit> <duration>",
        brief: "Pulse GPIO bit",
        requires: Capabilities::empty(),
        handler: cmd_pulse,
    },
    CommandDescriptor {
        name: "blink",
        usage: "blink <bit> <count> <interval>",
        brief: "Blink GPIO bit",
        requires: Capabilities::empty(),
        handler: cmd_blink,
    },
    CommandDescriptor {
        name: "exit",
        usage: "exit",
        brief: "Exit GPIO command mode",
        requires: Capabilities::empty(),
        handler: cmd_exit,
    },
];

/// Print the GPIO mode command list
pub fn print_help(board: &mut dyn Board) {
    let _ = writeln!(board, "Enter GPIO command:");
    let _ = writeln!(board, "Available commands:");
    for c in GPIO_COMMANDS {
        let _ = writeln!(board, "  {:<16} - {}", c.usage, c.brief);
    }
}

/// Single-bit mask for a validated index
fn mask(bit: u32) -> u32 {
    1u32 << bit
}

/// Check a parsed bit index against the register width
fn check_bit(bit: i32) -> Result<u32, ConsoleError> {
    if (0..GPIO_WIDTH).contains(&bit) {
        Ok(bit as u32)
    } else {
        Err(ConsoleError::BitOutOfRange)
    }
}

/// Bit argument that must be present
fn required_bit(args: &mut Tokens<'_>) -> Result<u32, ConsoleError> {
    let token = args.next_arg().ok_or(ConsoleError::MissingArg("bit number"))?;
    check_bit(parse_signed(token))
}

/// Bit argument where a missing token reads as bit 0
fn permissive_bit(args: &mut Tokens<'_>) -> Result<u32, ConsoleError> {
    check_bit(parse_signed(args.next_token()))
}

/// Millisecond argument; negative values mean no wait
fn millis(args: &mut Tokens<'_>) -> u32 {
    u32::try_from(parse_signed(args.next_token())).unwrap_or(0)
}

// --- Command Implementations ---

fn cmd_write(ctx: &mut Context<'_>, args: &mut Tokens<'_>) -> Result<Action, ConsoleError> {
    let token = args.next_arg().ok_or(ConsoleError::MissingArg("value"))?;
    let value = parse_unsigned(token);

    ctx.board.out_write(value);
    let _ = writeln!(ctx.board, "GPIO_OUT set to 0x{:08X}", value);
    Ok(Action::Done)
}

fn cmd_read(ctx: &mut Context<'_>, _args: &mut Tokens<'_>) -> Result<Action, ConsoleError> {
    let value = ctx.board.in_read();
    let _ = writeln!(ctx.board, "GPIO_IN value: 0x{:08X}", value);
    Ok(Action::Done)
}

fn cmd_set(ctx: &mut Context<'_>, args: &mut Tokens<'_>) -> Result<Action, ConsoleError> {
    let bit = required_bit(args)?;

    let oe = ctx.board.oe_read() | mask(bit);
    ctx.board.oe_write(oe);
    let oe = ctx.board.oe_read();
    let _ = writeln!(ctx.board, "Bit {} set as output. GPIO_OE: 0x{:08X}", bit, oe);
    Ok(Action::Done)
}

fn cmd_clear(ctx: &mut Context<'_>, args: &mut Tokens<'_>) -> Result<Action, ConsoleError> {
    let bit = required_bit(args)?;

    let out = ctx.board.out_read() & !mask(bit);
    ctx.board.out_write(out);
    let _ = writeln!(ctx.board, "Bit {} cleared. GPIO_OUT: 0x{:08X}", bit, out);
    Ok(Action::Done)
}

fn cmd_toggle(ctx: &mut Context<'_>, args: &mut Tokens<'_>) -> Result<Action, ConsoleError> {
    let bit = permissive_bit(args)?;

    let out = ctx.board.out_read() ^ mask(bit);
    ctx.board.out_write(out);
    let _ = writeln!(ctx.board, "Bit {} toggled. GPIO_OUT: 0x{:08X}", bit, out);
    Ok(Action::Done)
}

fn cmd_direction(ctx: &mut Context<'_>, args: &mut Tokens<'_>) -> Result<Action, ConsoleError> {
    let bit = permissive_bit(args)?;

    // Anything other than in/out is ignored
    match args.next_token() {
        "in" => {
            let oe = ctx.board.oe_read() & !mask(bit);
            ctx.board.oe_write(oe);
            let _ = writeln!(ctx.board, "Bit {} set as input.", bit);
        }
        "out" => {
            let oe = ctx.board.oe_read() | mask(bit);
            ctx.board.oe_write(oe);
            let _ = writeln!(ctx.board, "Bit {} set as output.", bit);
        }
        _ => {}
    }
    Ok(Action::Done)
}

fn cmd_status(ctx: &mut Context<'_>, _args: &mut Tokens<'_>) -> Result<Action, ConsoleError> {
    let (inputs, outputs, oe) = (ctx.board.in_read(), ctx.board.out_read(), ctx.board.oe_read());

    let _ = writeln!(ctx.board, "GPIO Status:");
    let _ = writeln!(ctx.board, "  Inputs  : 0x{:08X}", inputs);
    let _ = writeln!(ctx.board, "  Outputs : 0x{:08X}", outputs);
    let _ = writeln!(ctx.board, "  Direction (OE): 0x{:08X}", oe);
    Ok(Action::Done)
}

fn cmd_pulse(ctx: &mut Context<'_>, args: &mut Tokens<'_>) -> Result<Action, ConsoleError> {
    let bit = permissive_bit(args)?;
    let duration = millis(args);

    pulse(ctx.board, bit, duration);
    let _ = writeln!(ctx.board, "Bit {} pulsed for {} ms.", bit, duration);
    Ok(Action::Done)
}

fn cmd_blink(ctx: &mut Context<'_>, args: &mut Tokens<'_>) -> Result<Action, ConsoleError> {
    let bit = permissive_bit(args)?;
    let count = parse_signed(args.next_token()).max(0);
    let interval = millis(args);

    for _ in 0..count {
        pulse(ctx.board, bit, interval);
        ctx.board.busy_wait(interval);
    }
    let _ = writeln!(
        ctx.board,
        "Bit {} blinked {} times with {} ms interval.",
        bit, count, interval
    );
    Ok(Action::Done)
}

fn cmd_exit(_ctx: &mut Context<'_>, _args: &mut Tokens<'_>) -> Result<Action, ConsoleError> {
    Ok(Action::Enter(Mode::Top))
}

/// Drive `bit` high for `ms`, then low
fn pulse(board: &mut dyn Board, bit: u32, ms: u32) {
    let out = board.out_read() | mask(bit);
    board.out_write(out);
    board.busy_wait(ms);
    let out = board.out_read() & !mask(bit);
    board.out_write(out);
}
