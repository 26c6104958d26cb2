//! GPIO and LED register collaborators.

/// The three 32-bit GPIO registers.
///
/// Read-modify-write sequences built on these are not atomic; the console is
/// the only writer.
pub trait GpioRegisters {
    /// Output register.
    fn out_read(&self) -> u32;
    fn out_write(&mut self, value: u32);

    /// Output-enable register (1 = pin drives output).
    fn oe_read(&self) -> u32;
    fn oe_write(&mut self, value: u32);

    /// Input register.
    fn in_read(&self) -> u32;
}

/// LED bank output register.
pub trait LedRegister {
    fn leds_write(&mut self, value: u32);
}
