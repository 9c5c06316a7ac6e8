//! Hardware collaborators consumed by the reader.
//!
//! The platform supplies a raw analog read, a monotonic millisecond
//! clock and (for `begin()`) an `embedded_hal::delay::DelayNs`. Keeping
//! these as traits lets the debounce logic run on the host in tests.

/// One-shot raw analog read of a pin.
///
/// The value is bounded by the platform's ADC resolution. Reads are
/// trusted to succeed; a faulty channel simply classifies as "no button".
pub trait AnalogRead {
    fn analog_read(&mut self, pin: u8) -> u16;
}

impl<T: AnalogRead + ?Sized> AnalogRead for &mut T {
    fn analog_read(&mut self, pin: u8) -> u16 {
        (**self).analog_read(pin)
    }
}

/// Monotonic millisecond clock. The counter is allowed to wrap; elapsed
/// time is always computed with `wrapping_sub`.
pub trait Clock {
    fn now_ms(&self) -> u32;
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }
}

/// Milliseconds elapsed from `since` to `now` across a counter wrap.
pub fn elapsed_ms(now: u32, since: u32) -> u32 {
    now.wrapping_sub(since)
}

/// `Clock` backed by the embassy time driver.
#[cfg(feature = "embassy")]
#[derive(Clone, Copy, Default)]
pub struct EmbassyClock;

#[cfg(feature = "embassy")]
impl Clock for EmbassyClock {
    fn now_ms(&self) -> u32 {
        // Truncation is the wrap.
        embassy_time::Instant::now().as_millis() as u32
    }
}
