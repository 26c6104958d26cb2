//! Demo routines run by the top-level commands.
//!
//! Each runs synchronously to completion on the board it is handed.

pub mod donut;
pub mod hello;
pub mod led;
