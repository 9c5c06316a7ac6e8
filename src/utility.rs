//! Stateless helpers over any analog pin, for wiring checks and
//! calibrating voltage ranges. They bypass the debounce path entirely.

use crate::config::PRESSING_THRESHOLD;
use crate::hal::AnalogRead;
use core::fmt::Write;

/// Returns `true` if a single raw reading of `pin` is non-zero.
pub fn is_pressing_any<A: AnalogRead>(adc: &mut A, pin: u8) -> bool {
    adc.analog_read(pin) != 0
}

/// Read `pin` once and write the value as a line to `out` when it is
/// above the pressing threshold. Returns the raw value either way.
///
/// Typical use is printing over a serial console while pressing each
/// button in turn to find its range.
pub fn print_reading<A: AnalogRead, W: Write>(adc: &mut A, pin: u8, out: &mut W) -> u16 {
    let value = adc.analog_read(pin);
    if value > PRESSING_THRESHOLD {
        // Diagnostic output only; a full sink is not an error for the caller.
        let _ = writeln!(out, "{}", value);
    }
    value
}
