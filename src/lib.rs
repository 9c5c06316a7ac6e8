//! Debounced reader for several buttons sharing one analog pin.
//!
//! A resistor ladder gives each button its own voltage window on a
//! single ADC input. [`ButtonArrayReader`] samples that pin at a fixed
//! interval, maps the averaged reading to a button index and requires
//! two consecutive samples to agree before reporting a press (or a
//! release) to the host's [`ButtonHandler`].
//!
//! The crate is `no_std`; the logic runs on the host under `cargo test`.
//!
//! Features:
//! - `defmt`: route internal logging to `defmt`
//! - `embassy`: [`hal::EmbassyClock`] and the async [`task::poll_buttons`] loop

#![cfg_attr(not(test), no_std)]

// Must come first so the logging macros are visible to every module.
#[macro_use]
mod fmt;

pub mod config;
pub mod debounce;
pub mod error;
pub mod hal;
pub mod ranges;
pub mod reader;
#[cfg(feature = "embassy")]
pub mod task;
pub mod utility;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports
// ═══════════════════════════════════════════════════════════════════════════

pub use debounce::{Debouncer, ReadPhase, TriggerEdge};
pub use error::Error;
pub use hal::{AnalogRead, Clock};
pub use ranges::{ButtonRanges, VoltageRange};
pub use reader::{ButtonArrayReader, ButtonEvent, ButtonHandler, ReaderConfig};
pub use utility::{is_pressing_any, print_reading};
