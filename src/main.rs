//! LiteX demo console - Main entry point
//!
//! On the soft CPU: bring up the CSRs, print the banner, then poll the
//! console forever. On any other target the same console runs over
//! stdin/stdout against simulated registers.

#![cfg_attr(target_arch = "riscv32", no_std, no_main)]

#[cfg(target_arch = "riscv32")]
use panic_halt as _;

use litex_demo_console::{Console, ConsoleConfig};

#[cfg(target_arch = "riscv32")]
#[riscv_rt::entry]
fn main() -> ! {
    use litex_demo_console::hal::LitexBoard;
    use litex_demo_console::BoardConfig;

    // SAFETY: DEFAULT mirrors this SoC's generated csr.h, and the console is
    // the only code touching the CSRs.
    let mut board = unsafe { LitexBoard::new(BoardConfig::DEFAULT) };
    board.init();

    let mut console = Console::new(ConsoleConfig::DEFAULT);
    console.start(&mut board);

    loop {
        console.service(&mut board);
    }
}

#[cfg(not(target_arch = "riscv32"))]
fn main() {
    host::run(Console::new(ConsoleConfig::DEFAULT));
}

#[cfg(not(target_arch = "riscv32"))]
mod host {
    use std::io::{Read, Write as _};
    use std::sync::mpsc::{self, Receiver, TryRecvError};
    use std::thread;
    use std::time::{Duration, Instant};

    use litex_demo_console::hal::{Delay, GpioRegisters, LedRegister, Terminal};
    use litex_demo_console::{Board, Capabilities, Console, Poll};

    /// Stdin/stdout terminal with a simulated register file.
    struct HostBoard {
        rx: Receiver<u8>,
        peeked: Option<u8>,
        eof: bool,
        started: Instant,
        gpio_out: u32,
        gpio_oe: u32,
    }

    impl HostBoard {
        fn new() -> Self {
            let (tx, rx) = mpsc::channel();
            thread::spawn(move || {
                for byte in std::io::stdin().lock().bytes() {
                    match byte {
                        Ok(b) if tx.send(b).is_ok() => {}
                        _ => break,
                    }
                }
            });

            Self {
                rx,
                peeked: None,
                eof: false,
                started: Instant::now(),
                gpio_out: 0,
                gpio_oe: 0,
            }
        }
    }

    impl core::fmt::Write for HostBoard {
        fn write_str(&mut self, s: &str) -> core::fmt::Result {
            let mut out = std::io::stdout().lock();
            out.write_all(s.as_bytes()).map_err(|_| core::fmt::Error)?;
            out.flush().map_err(|_| core::fmt::Error)
        }
    }

    impl Terminal for HostBoard {
        fn char_available(&mut self) -> bool {
            if self.peeked.is_none() {
                match self.rx.try_recv() {
                    Ok(b) => self.peeked = Some(b),
                    Err(TryRecvError::Empty) => {}
                    Err(TryRecvError::Disconnected) => self.eof = true,
                }
            }
            self.peeked.is_some()
        }

        fn read_char(&mut self) -> u8 {
            match self.peeked.take() {
                Some(b) => b,
                None => self.rx.recv().unwrap_or(b'\n'),
            }
        }

        fn write_byte(&mut self, byte: u8) {
            let mut out = std::io::stdout().lock();
            let _ = out.write_all(&[byte]).and_then(|_| out.flush());
        }
    }

    impl GpioRegisters for HostBoard {
        fn out_read(&self) -> u32 {
            self.gpio_out
        }

        fn out_write(&mut self, value: u32) {
            self.gpio_out = value;
        }

        fn oe_read(&self) -> u32 {
            self.gpio_oe
        }

        fn oe_write(&mut self, value: u32) {
            self.gpio_oe = value;
        }

        // Driven pins loop back to the inputs
        fn in_read(&self) -> u32 {
            self.gpio_out & self.gpio_oe
        }
    }

    impl LedRegister for HostBoard {
        fn leds_write(&mut self, value: u32) {
            println!("[leds] {:08b}", value & 0xff);
        }
    }

    impl Delay for HostBoard {
        fn busy_wait(&mut self, ms: u32) {
            thread::sleep(Duration::from_millis(u64::from(ms)));
        }
    }

    impl Board for HostBoard {
        fn capabilities(&self) -> Capabilities {
            Capabilities::from_features()
        }

        fn reboot(&mut self) {
            println!("(reboot)");
            std::process::exit(0);
        }

        fn uptime_us(&self) -> i64 {
            self.started.elapsed().as_micros() as i64
        }
    }

    pub fn run(mut console: Console) {
        let mut board = HostBoard::new();
        console.start(&mut board);

        loop {
            if console.service(&mut board) == Poll::Idle {
                if board.eof {
                    println!();
                    return;
                }
                thread::sleep(Duration::from_millis(1));
            }
        }
    }
}
