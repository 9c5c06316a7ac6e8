//! Two-pass debounce and edge detection.
//!
//! A change in the classified button must be seen on two consecutive
//! sampling ticks before it is accepted:
//! ```text
//!            reading != last_confirmed
//!   FirstPass ─────────────────────────▶ SecondPass (candidate = reading)
//!       ▲                                     │
//!       └──── always, after one reading ──────┘
//!             (confirm if reading == candidate, else discard)
//! ```
//! Only the configured edge produces an event; the opposite edge still
//! updates `last_confirmed` silently.

use crate::error::Error;

/// Which confirmed transition is reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum TriggerEdge {
    /// Report the button that was just pressed.
    #[default]
    Press = 0,
    /// Report the button that was just released.
    Release = 1,
}

impl TryFrom<u8> for TriggerEdge {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Error> {
        match code {
            0 => Ok(TriggerEdge::Press),
            1 => Ok(TriggerEdge::Release),
            other => Err(Error::InvalidTriggerEdge(other)),
        }
    }
}

impl From<TriggerEdge> for u8 {
    fn from(edge: TriggerEdge) -> u8 {
        edge as u8
    }
}

/// Phase of the two-pass debounce.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReadPhase {
    /// Waiting for a reading that differs from the confirmed button.
    #[default]
    FirstPass,
    /// A change was seen; the next reading confirms or discards it.
    SecondPass,
}

/// Debounce state. `None` stands for "no button".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer {
    phase: ReadPhase,
    candidate: Option<usize>,
    last_confirmed: Option<usize>,
}

impl Debouncer {
    pub const fn new() -> Self {
        Self {
            phase: ReadPhase::FirstPass,
            candidate: None,
            last_confirmed: None,
        }
    }

    pub fn phase(&self) -> ReadPhase {
        self.phase
    }

    /// Reading that moved the state machine into `SecondPass`.
    pub fn candidate(&self) -> Option<usize> {
        self.candidate
    }

    /// Last reading confirmed across two passes.
    pub fn last_confirmed(&self) -> Option<usize> {
        self.last_confirmed
    }

    /// Forget any change in progress and any confirmed button.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Feed one classified reading.
    ///
    /// Returns the button to report when a confirmed transition matches
    /// `edge`: the new button for `Press`, the released button for
    /// `Release`.
    pub fn update(&mut self, reading: Option<usize>, edge: TriggerEdge) -> Option<usize> {
        match self.phase {
            ReadPhase::FirstPass => {
                if reading != self.last_confirmed {
                    debug!("Debounce: candidate {}", reading);
                    self.candidate = reading;
                    self.phase = ReadPhase::SecondPass;
                }
                None
            }
            ReadPhase::SecondPass => {
                // Either way the next reading starts from scratch.
                self.phase = ReadPhase::FirstPass;

                if reading != self.candidate {
                    debug!("Debounce: glitch {} != {}", reading, self.candidate);
                    return None;
                }

                let fired = match (edge, reading) {
                    (TriggerEdge::Release, None) => self.last_confirmed,
                    (TriggerEdge::Press, Some(button)) => Some(button),
                    _ => None,
                };
                self.last_confirmed = reading;
                fired
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(
        d: &mut Debouncer,
        edge: TriggerEdge,
        readings: &[Option<usize>],
    ) -> [Option<usize>; 8] {
        let mut out = [None; 8];
        for (slot, &r) in out.iter_mut().zip(readings) {
            *slot = d.update(r, edge);
        }
        out
    }

    #[test]
    fn starts_in_first_pass_with_nothing_confirmed() {
        let d = Debouncer::new();
        assert_eq!(d.phase(), ReadPhase::FirstPass);
        assert_eq!(d.candidate(), None);
        assert_eq!(d.last_confirmed(), None);
        assert_eq!(d, Debouncer::default());
    }

    #[test]
    fn unchanged_reading_stays_in_first_pass() {
        let mut d = Debouncer::new();
        for _ in 0..5 {
            assert_eq!(d.update(None, TriggerEdge::Press), None);
            assert_eq!(d.phase(), ReadPhase::FirstPass);
        }
    }

    #[test]
    fn press_confirmed_on_second_pass() {
        let mut d = Debouncer::new();
        assert_eq!(d.update(Some(0), TriggerEdge::Press), None);
        assert_eq!(d.phase(), ReadPhase::SecondPass);
        assert_eq!(d.candidate(), Some(0));

        assert_eq!(d.update(Some(0), TriggerEdge::Press), Some(0));
        assert_eq!(d.phase(), ReadPhase::FirstPass);
        assert_eq!(d.last_confirmed(), Some(0));
    }

    #[test]
    fn held_button_fires_once() {
        let mut d = Debouncer::new();
        let fired = feed(&mut d, TriggerEdge::Press, &[Some(1); 8]);
        assert_eq!(fired.iter().filter(|f| f.is_some()).count(), 1);
        assert_eq!(fired[1], Some(1));
    }

    #[test]
    fn release_is_silent_in_press_mode() {
        let mut d = Debouncer::new();
        let fired = feed(
            &mut d,
            TriggerEdge::Press,
            &[Some(2), Some(2), None, None],
        );
        assert_eq!(fired[..4], [None, Some(2), None, None]);
        assert_eq!(d.last_confirmed(), None);
    }

    #[test]
    fn release_mode_reports_released_button() {
        let mut d = Debouncer::new();
        let fired = feed(
            &mut d,
            TriggerEdge::Release,
            &[Some(0), Some(0), None, None],
        );
        assert_eq!(fired[..4], [None, None, None, Some(0)]);
        assert_eq!(d.last_confirmed(), None);
    }

    #[test]
    fn glitch_is_discarded() {
        let mut d = Debouncer::new();
        assert_eq!(d.update(Some(0), TriggerEdge::Press), None);
        assert_eq!(d.update(None, TriggerEdge::Press), None);
        assert_eq!(d.phase(), ReadPhase::FirstPass);
        assert_eq!(d.last_confirmed(), None);
    }

    #[test]
    fn glitch_to_other_button_is_discarded() {
        let mut d = Debouncer::new();
        let fired = feed(&mut d, TriggerEdge::Press, &[Some(0), Some(1)]);
        assert!(fired.iter().all(Option::is_none));
        assert_eq!(d.last_confirmed(), None);
        assert_eq!(d.phase(), ReadPhase::FirstPass);
    }

    #[test]
    fn direct_switch_between_buttons() {
        let mut d = Debouncer::new();
        let fired = feed(
            &mut d,
            TriggerEdge::Press,
            &[Some(0), Some(0), Some(1), Some(1)],
        );
        assert_eq!(fired[..4], [None, Some(0), None, Some(1)]);

        // Release mode does not report a button-to-button switch.
        let mut d = Debouncer::new();
        let fired = feed(
            &mut d,
            TriggerEdge::Release,
            &[Some(0), Some(0), Some(1), Some(1), None, None],
        );
        assert_eq!(fired[..6], [None, None, None, None, None, Some(1)]);
    }

    #[test]
    fn mismatch_restarts_from_first_pass() {
        // The mismatching reading is not itself taken as the next candidate.
        let mut d = Debouncer::new();
        let fired = feed(
            &mut d,
            TriggerEdge::Press,
            &[Some(0), Some(1), Some(1), Some(1)],
        );
        assert_eq!(fired[..4], [None, None, None, Some(1)]);
    }

    #[test]
    fn reset_clears_confirmed_button() {
        let mut d = Debouncer::new();
        feed(&mut d, TriggerEdge::Press, &[Some(0), Some(0), Some(1)]);
        assert_eq!(d.phase(), ReadPhase::SecondPass);
        d.reset();
        assert_eq!(d, Debouncer::new());
    }

    #[test]
    fn trigger_edge_codes() {
        assert_eq!(TriggerEdge::try_from(0), Ok(TriggerEdge::Press));
        assert_eq!(TriggerEdge::try_from(1), Ok(TriggerEdge::Release));
        assert_eq!(TriggerEdge::try_from(2), Err(Error::InvalidTriggerEdge(2)));
        assert_eq!(
            TriggerEdge::try_from(255),
            Err(Error::InvalidTriggerEdge(255))
        );
        assert_eq!(u8::from(TriggerEdge::Release), 1);
        assert_eq!(TriggerEdge::default(), TriggerEdge::Press);
    }
}
