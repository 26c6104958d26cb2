//! LiteX CSR backend.
//!
//! Register offsets assume a 32-bit CSR data width, where every CSR occupies
//! one aligned word. Base addresses come from [`BoardConfig`].

use core::ptr::{read_volatile, write_volatile};

use super::{Board, Delay, GpioRegisters, LedRegister, Terminal};
use crate::config::{BoardConfig, Capabilities};

// ctrl
const CTRL_RESET: usize = 0x00;

// timer0
const TIMER0_LOAD: usize = 0x00;
const TIMER0_RELOAD: usize = 0x04;
const TIMER0_EN: usize = 0x08;
const TIMER0_UPDATE_VALUE: usize = 0x0c;
const TIMER0_VALUE: usize = 0x10;

// uart
const UART_RXTX: usize = 0x00;
const UART_TXFULL: usize = 0x04;
const UART_RXEMPTY: usize = 0x08;
const UART_EV_PENDING: usize = 0x10;
const UART_EV_ENABLE: usize = 0x14;
const UART_EV_TX: u32 = 1 << 0;
const UART_EV_RX: u32 = 1 << 1;

// gpio (tristate)
const GPIO_OE: usize = 0x00;
const GPIO_IN: usize = 0x04;
const GPIO_OUT: usize = 0x08;

// leds
const LEDS_OUT: usize = 0x00;

/// LiteX SoC reached through its memory-mapped CSRs.
pub struct LitexBoard {
    config: BoardConfig,
}

impl LitexBoard {
    /// # Safety
    ///
    /// `config` must describe the CSR map of the running SoC, and no other
    /// code may drive the same CSRs.
    pub const unsafe fn new(config: BoardConfig) -> Self {
        Self { config }
    }

    /// Bring up the UART and, if wired, CPU interrupts.
    ///
    /// The UART is polled: its events are acknowledged and left disabled.
    pub fn init(&mut self) {
        let uart = self.config.uart_base;
        self.csr_write(uart + UART_EV_ENABLE, 0);
        self.csr_write(uart + UART_EV_PENDING, UART_EV_TX | UART_EV_RX);

        if self.config.capabilities.contains(Capabilities::IRQ) {
            enable_interrupts();
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    #[inline]
    fn csr_read(&self, addr: usize) -> u32 {
        // SAFETY: addr lies in the CSR window described by the config
        unsafe { read_volatile(addr as *const u32) }
    }

    #[inline]
    fn csr_write(&mut self, addr: usize, value: u32) {
        // SAFETY: addr lies in the CSR window described by the config
        unsafe { write_volatile(addr as *mut u32, value) }
    }

    fn uart_write(&mut self, byte: u8) {
        let uart = self.config.uart_base;
        while self.csr_read(uart + UART_TXFULL) != 0 {}
        self.csr_write(uart + UART_RXTX, u32::from(byte));
    }
}

/// Unmask nothing, then set the global interrupt enable.
#[cfg(target_arch = "riscv32")]
fn enable_interrupts() {
    // SAFETY: VexRiscv's LiteX IRQ mask CSR; 0 masks every line, so
    // enabling MIE cannot deliver an interrupt without a handler.
    unsafe {
        core::arch::asm!("csrw 0xBC0, zero");
        riscv::register::mstatus::set_mie();
    }
}

#[cfg(not(target_arch = "riscv32"))]
fn enable_interrupts() {}

impl core::fmt::Write for LitexBoard {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        for b in s.bytes() {
            self.write_byte(b);
        }
        Ok(())
    }
}

impl Terminal for LitexBoard {
    fn char_available(&mut self) -> bool {
        self.csr_read(self.config.uart_base + UART_RXEMPTY) == 0
    }

    fn read_char(&mut self) -> u8 {
        let uart = self.config.uart_base;
        while self.csr_read(uart + UART_RXEMPTY) != 0 {}
        let c = self.csr_read(uart + UART_RXTX) as u8;
        self.csr_write(uart + UART_EV_PENDING, UART_EV_RX);
        c
    }

    /// Serial terminals expect CR before LF.
    fn write_byte(&mut self, byte: u8) {
        if byte == b'\n' {
            self.uart_write(b'\r');
        }
        self.uart_write(byte);
    }
}

impl GpioRegisters for LitexBoard {
    fn out_read(&self) -> u32 {
        self.csr_read(self.config.gpio_base + GPIO_OUT)
    }

    fn out_write(&mut self, value: u32) {
        self.csr_write(self.config.gpio_base + GPIO_OUT, value);
    }

    fn oe_read(&self) -> u32 {
        self.csr_read(self.config.gpio_base + GPIO_OE)
    }

    fn oe_write(&mut self, value: u32) {
        self.csr_write(self.config.gpio_base + GPIO_OE, value);
    }

    fn in_read(&self) -> u32 {
        self.csr_read(self.config.gpio_base + GPIO_IN)
    }
}

impl LedRegister for LitexBoard {
    fn leds_write(&mut self, value: u32) {
        self.csr_write(self.config.leds_base + LEDS_OUT, value);
    }
}

impl Delay for LitexBoard {
    /// One-shot countdown on timer0.
    fn busy_wait(&mut self, ms: u32) {
        let timer = self.config.timer0_base;
        let ticks = (self.config.clock_hz / 1000).saturating_mul(ms);

        self.csr_write(timer + TIMER0_EN, 0);
        self.csr_write(timer + TIMER0_RELOAD, 0);
        self.csr_write(timer + TIMER0_LOAD, ticks);
        self.csr_write(timer + TIMER0_EN, 1);
        self.csr_write(timer + TIMER0_UPDATE_VALUE, 1);
        while self.csr_read(timer + TIMER0_VALUE) != 0 {
            self.csr_write(timer + TIMER0_UPDATE_VALUE, 1);
        }
    }
}

impl Board for LitexBoard {
    fn capabilities(&self) -> Capabilities {
        self.config.capabilities
    }

    fn reboot(&mut self) {
        self.csr_write(self.config.ctrl_base + CTRL_RESET, 1);
        loop {
            core::hint::spin_loop();
        }
    }

    fn foreign_hello(&mut self) {
        #[cfg(feature = "cxx")]
        {
            extern "C" {
                fn hellocpp();
            }
            // SAFETY: provided by the linked C++ demo object; takes no
            // arguments and only prints through the same UART.
            unsafe { hellocpp() }
        }
    }

    #[cfg(target_arch = "riscv32")]
    fn uptime_us(&self) -> i64 {
        let cycles_per_us = u64::from(self.config.clock_hz / 1_000_000).max(1);
        (riscv::register::mcycle::read64() / cycles_per_us) as i64
    }
}
