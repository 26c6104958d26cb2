//! # litex-demo-console
//!
//! Serial demo console for LiteX soft-CPU SoCs.
//!
//! ## Architecture
//!
//! One polled loop, no tasks:
//! - [`console::LineReader`] collects a line from the UART with local echo
//! - [`console::Console`] tokenizes it and dispatches against the command
//!   table of the current [`console::Mode`]
//! - handlers reach hardware only through the [`hal::Board`] traits, so the
//!   same console runs on [`hal::LitexBoard`] and [`hal::SimBoard`]

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod console;
pub mod demo;
pub mod hal;
pub mod logging;

pub use config::{BoardConfig, Capabilities, ConsoleConfig};
pub use console::{Console, ConsoleError, Mode, Outcome, Poll};
pub use hal::Board;
