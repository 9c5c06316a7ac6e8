//! Compile-time configuration for the button array reader.
//!
//! Timing parameters, ADC calibration thresholds and table capacity
//! live here so they can be tuned in one place.

// ADC

/// Maximum value of a 12-bit ADC; readings above the configured maximum
/// are classified as "no button".
pub const DEFAULT_ADC_MAX: u16 = 4095;

/// Number of back-to-back samples averaged into one classified reading.
pub const SAMPLES_PER_READING: u32 = 4;

/// Raw reading above which "something is pressing" (calibration value,
/// independent of the configured voltage ranges).
pub const PRESSING_THRESHOLD: u16 = 100;

// Timing

/// Minimum time between two classify-and-debounce steps (ms).
pub const SAMPLE_INTERVAL_MS: u32 = 50;

/// Settle delay after the throwaway read in `begin()` (ms).
pub const SETTLE_DELAY_MS: u32 = 1;

/// Cadence of the async polling task (ms). Must stay below
/// `SAMPLE_INTERVAL_MS` so no sampling slot is skipped.
pub const TASK_POLL_MS: u64 = 10;

// Range table

/// Capacity of the fixed-size voltage range table.
pub const MAX_BUTTONS: usize = 16;
