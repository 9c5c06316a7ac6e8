//! Unified error type for the button array reader.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.

use core::fmt;

/// Top-level error type used across the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Construction
    /// A reader needs at least one button range.
    NoButtons,

    /// More ranges were supplied than the table can hold.
    TooManyButtons { count: usize, max: usize },

    // Runtime configuration
    /// Raw trigger-edge code outside {0 = press, 1 = release}.
    InvalidTriggerEdge(u8),

    // Queries
    /// Button index is not in `0..count`.
    ButtonOutOfRange { index: usize, count: usize },

    // Range validation
    /// Two voltage ranges share at least one reading.
    OverlappingRanges { first: usize, second: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NoButtons => write!(f, "no button ranges supplied"),
            Error::TooManyButtons { count, max } => {
                write!(f, "{} button ranges exceed capacity of {}", count, max)
            }
            Error::InvalidTriggerEdge(code) => write!(f, "invalid trigger edge code {}", code),
            Error::ButtonOutOfRange { index, count } => {
                write!(f, "button {} out of range (count {})", index, count)
            }
            Error::OverlappingRanges { first, second } => {
                write!(f, "voltage ranges {} and {} overlap", first, second)
            }
        }
    }
}
