//! Voltage range table and reading classification.
//!
//! Each button on the resistor ladder pulls the analog pin into its own
//! window of ADC values:
//! ```text
//! 0 ──┬── lower ─── button 0 ─── upper ──┬── lower ─── button 1 ─── upper ── adc_max
//!     └ "none" (exclusive bounds)        └ "none"
//! ```
//! Bounds are exclusive on both sides. Ranges are expected not to
//! overlap; when they do, the lowest index wins.

use crate::config::MAX_BUTTONS;
use crate::error::Error;
use heapless::Vec;

/// Exclusive ADC window `(lower, upper)` for one button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VoltageRange {
    pub lower: u16,
    pub upper: u16,
}

impl VoltageRange {
    pub const fn new(lower: u16, upper: u16) -> Self {
        Self { lower, upper }
    }

    /// Returns `true` if `value` lies strictly between the bounds.
    pub fn contains(&self, value: u16) -> bool {
        value > self.lower && value < self.upper
    }

    /// Returns `true` if no reading can ever match this range.
    pub fn is_empty(&self) -> bool {
        self.upper <= self.lower.saturating_add(1)
    }

    /// Returns `true` if at least one reading falls inside both ranges.
    pub fn overlaps(&self, other: &VoltageRange) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        // Smallest and largest matching readings of each range.
        let (a_lo, a_hi) = (self.lower + 1, self.upper - 1);
        let (b_lo, b_hi) = (other.lower + 1, other.upper - 1);
        a_lo <= b_hi && b_lo <= a_hi
    }
}

impl From<(u16, u16)> for VoltageRange {
    fn from((lower, upper): (u16, u16)) -> Self {
        Self { lower, upper }
    }
}

/// Owned, fixed-capacity table of button ranges indexed by button number.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonRanges {
    ranges: Vec<VoltageRange, MAX_BUTTONS>,
}

impl ButtonRanges {
    /// Copy the caller's ranges into an owned table.
    ///
    /// The caller's buffer can be reused or dropped afterwards.
    pub fn new<R>(ranges: &[R]) -> Result<Self, Error>
    where
        R: Copy + Into<VoltageRange>,
    {
        if ranges.is_empty() {
            return Err(Error::NoButtons);
        }
        if ranges.len() > MAX_BUTTONS {
            return Err(Error::TooManyButtons {
                count: ranges.len(),
                max: MAX_BUTTONS,
            });
        }

        let mut table = Vec::new();
        for &r in ranges {
            // Length checked above.
            let _ = table.push(r.into());
        }
        Ok(Self { ranges: table })
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Always `false` for a constructed table; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&VoltageRange> {
        self.ranges.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &VoltageRange> {
        self.ranges.iter()
    }

    /// Map an averaged reading to a button index.
    ///
    /// Readings above `adc_max` or outside every range map to `None`.
    /// First match wins.
    pub fn classify(&self, value: u16, adc_max: u16) -> Option<usize> {
        if value > adc_max {
            return None;
        }
        self.ranges.iter().position(|r| r.contains(value))
    }

    /// Check a single reading against one button's range.
    pub fn contains(&self, index: usize, value: u16) -> Result<bool, Error> {
        self.ranges
            .get(index)
            .map(|r| r.contains(value))
            .ok_or(Error::ButtonOutOfRange {
                index,
                count: self.ranges.len(),
            })
    }

    /// Verify that no two ranges share a reading.
    ///
    /// Reports the first overlapping pair in index order.
    pub fn check_disjoint(&self) -> Result<(), Error> {
        for (first, a) in self.ranges.iter().enumerate() {
            for (offset, b) in self.ranges[first + 1..].iter().enumerate() {
                if a.overlaps(b) {
                    return Err(Error::OverlappingRanges {
                        first,
                        second: first + 1 + offset,
                    });
                }
            }
        }
        Ok(())
    }
}
