//! Module: config
//!
//! Purpose: Build-time and startup configuration for the demo console.
//!
//! - `Capabilities`: which optional peripherals the SoC carries. Resolved once
//!   at startup and consulted by the command tables.
//! - `BoardConfig`: CSR base addresses and clock for the LiteX backend.
//!   Values must match the SoC's generated `csr.h`.
//! - `ConsoleConfig`: prompts, banner and initial log filter.

use crate::logging::LevelFilter;

bitflags::bitflags! {
    /// Optional SoC peripherals and runtimes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Capabilities: u8 {
        /// LED bank (`leds` CSR).
        const LEDS = 1 << 0;
        /// Tristate GPIO bank (`gpio` CSR).
        const GPIO = 1 << 1;
        /// Foreign C++ runtime linked in.
        const CXX  = 1 << 2;
        /// CPU has interrupts wired.
        const IRQ  = 1 << 3;
    }
}

impl Capabilities {
    /// Capabilities selected by cargo features.
    pub const fn from_features() -> Self {
        let mut bits = 0;
        if cfg!(feature = "leds") {
            bits |= Self::LEDS.bits();
        }
        if cfg!(feature = "gpio") {
            bits |= Self::GPIO.bits();
        }
        if cfg!(feature = "cxx") {
            bits |= Self::CXX.bits();
        }
        if cfg!(feature = "irq") {
            bits |= Self::IRQ.bits();
        }
        Self::from_bits_truncate(bits)
    }
}

/// CSR layout and clock of the target SoC.
#[derive(Debug, Clone, Copy)]
pub struct BoardConfig {
    /// System clock in Hz (`CONFIG_CLOCK_FREQUENCY`).
    pub clock_hz: u32,
    /// `CSR_CTRL_BASE`
    pub ctrl_base: usize,
    /// `CSR_TIMER0_BASE`
    pub timer0_base: usize,
    /// `CSR_UART_BASE`
    pub uart_base: usize,
    /// `CSR_LEDS_BASE`
    pub leds_base: usize,
    /// `CSR_GPIO_BASE`
    pub gpio_base: usize,
    pub capabilities: Capabilities,
}

impl BoardConfig {
    /// Tang Nano 9K build with the default CSR map.
    pub const DEFAULT: Self = Self {
        clock_hz: 27_000_000,
        ctrl_base: 0xf000_0000,
        timer0_base: 0xf000_2800,
        uart_base: 0xf000_3000,
        leds_base: 0xf000_1800,
        gpio_base: 0xf000_1000,
        capabilities: Capabilities::from_features(),
    };
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Console presentation settings.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleConfig {
    /// Prompt in top-level mode.
    pub prompt: &'static str,
    /// Prompt in GPIO mode.
    pub gpio_prompt: &'static str,
    /// First line of the help banner.
    pub title: &'static str,
    /// Console event log filter at startup.
    pub log_filter: LevelFilter,
}

impl ConsoleConfig {
    pub const DEFAULT: Self = Self {
        prompt: "\x1b[92;1mlitex-demo-app\x1b[0m> ",
        gpio_prompt: "\x1b[92;1mGPIO command mode\x1b[0m> ",
        title: "LiteX minimal demo app",
        log_filter: LevelFilter::Off,
    };
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
