//! Debounced reader for a resistor-ladder button array on one analog pin.
//!
//! The host calls [`ButtonArrayReader::tick`] as often as its loop runs;
//! the reader samples at most once per `SAMPLE_INTERVAL_MS`, classifies
//! the averaged reading into a button index and feeds the two-pass
//! debouncer. Confirmed transitions on the configured edge are delivered
//! to the [`ButtonHandler`].


use crate::config::{
    DEFAULT_ADC_MAX, PRESSING_THRESHOLD, SAMPLES_PER_READING, SAMPLE_INTERVAL_MS, SETTLE_DELAY_MS,
};
use crate::debounce::{Debouncer, TriggerEdge};
use crate::error::Error;
use crate::hal::{elapsed_ms, AnalogRead, Clock};
use crate::ranges::{ButtonRanges, VoltageRange};
use embedded_hal::delay::DelayNs;

/// A confirmed button transition, delivered to the handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonEvent {
    /// Analog pin of the reader that produced the event.
    pub pin: u8,
    /// Pressed button for `Press`, released button for `Release`.
    pub button: usize,
    /// Edge the reader was configured for when the event fired.
    pub edge: TriggerEdge,
}

/// Receives confirmed button events.
///
/// Called synchronously from `tick()`; must not block.
pub trait ButtonHandler {
    fn on_button(&mut self, event: ButtonEvent);
}

impl<F: FnMut(ButtonEvent)> ButtonHandler for F {
    fn on_button(&mut self, event: ButtonEvent) {
        self(event)
    }
}

/// Per-instance configuration. Only the trigger edge can change after
/// the reader is built.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReaderConfig {
    pub pin: u8,
    pub ranges: ButtonRanges,
    pub adc_max: u16,
    pub trigger_edge: TriggerEdge,
}

impl ReaderConfig {
    /// Configuration with a 12-bit ADC and press-edge events.
    ///
    /// `ranges[i]` is the exclusive `(lower, upper)` window of button `i`;
    /// the slice is copied.
    pub fn new<R>(pin: u8, ranges: &[R]) -> Result<Self, Error>
    where
        R: Copy + Into<VoltageRange>,
    {
        Ok(Self {
            pin,
            ranges: ButtonRanges::new(ranges)?,
            adc_max: DEFAULT_ADC_MAX,
            trigger_edge: TriggerEdge::Press,
        })
    }

    pub fn with_adc_max(mut self, adc_max: u16) -> Self {
        self.adc_max = adc_max;
        self
    }

    pub fn with_trigger_edge(mut self, edge: TriggerEdge) -> Self {
        self.trigger_edge = edge;
        self
    }
}

/// Reader state: owned configuration, collaborators and debounce state.
pub struct ButtonArrayReader<A, C, H> {
    config: ReaderConfig,
    adc: A,
    clock: C,
    handler: H,
    debounce: Debouncer,
    last_sample_ms: u32,
}

impl<A, C, H> ButtonArrayReader<A, C, H>
where
    A: AnalogRead,
    C: Clock,
    H: ButtonHandler,
{
    /// Build a reader. Overlapping or empty ranges are accepted (lowest
    /// index wins) but logged.
    pub fn new(config: ReaderConfig, adc: A, clock: C, handler: H) -> Self {
        if let Err(Error::OverlappingRanges { first, second }) = config.ranges.check_disjoint() {
            warn!("Buttons: ranges {} and {} overlap", first, second);
        }
        for (index, range) in config.ranges.iter().enumerate() {
            if range.is_empty() {
                warn!(
                    "Buttons: range {} ({}, {}) can never match",
                    index,
                    range.lower,
                    range.upper
                );
            }
        }
        info!(
            "Buttons: pin {} with {} buttons, adc_max {}, edge {}",
            config.pin,
            config.ranges.len(),
            config.adc_max,
            config.trigger_edge
        );

        Self {
            config,
            adc,
            clock,
            handler,
            debounce: Debouncer::new(),
            last_sample_ms: 0,
        }
    }

    /// Throwaway read plus a short settle delay, to stabilise the ADC
    /// input before periodic sampling.
    pub fn begin<D: DelayNs>(&mut self, delay: &mut D) {
        let _ = self.adc.analog_read(self.config.pin);
        delay.delay_ms(SETTLE_DELAY_MS);
        debug!("Buttons: pin {} settled", self.config.pin);
    }

    /// Periodic entry point; call from the host loop.
    ///
    /// No-op until `SAMPLE_INTERVAL_MS` has elapsed since the last sample.
    pub fn tick(&mut self) {
        let now = self.clock.now_ms();
        if elapsed_ms(now, self.last_sample_ms) < SAMPLE_INTERVAL_MS {
            return;
        }
        self.last_sample_ms = now;
        self.sample();
    }

    /// Classify one averaged reading and advance the debouncer.
    fn sample(&mut self) {
        let reading = self.read_button();
        let edge = self.config.trigger_edge;
        if let Some(button) = self.debounce.update(reading, edge) {
            info!("Buttons: {} on button {}", edge, button);
            self.handler.on_button(ButtonEvent {
                pin: self.config.pin,
                button,
                edge,
            });
        }
    }

    /// Average `SAMPLES_PER_READING` back-to-back reads and classify.
    fn read_button(&mut self) -> Option<usize> {
        let sum: u32 = (0..SAMPLES_PER_READING)
            .map(|_| u32::from(self.adc.analog_read(self.config.pin)))
            .sum();
        // Mean of u16 values always fits.
        let value = (sum / SAMPLES_PER_READING) as u16;
        let button = self.config.ranges.classify(value, self.config.adc_max);
        trace!("Buttons: reading {} -> {}", value, button);
        button
    }

    /// A single raw reading above the "something is pressing" threshold.
    pub fn is_pressing(&mut self) -> bool {
        self.adc.analog_read(self.config.pin) > PRESSING_THRESHOLD
    }

    /// A single raw reading inside button `index`'s range.
    pub fn is_pressing_button(&mut self, index: usize) -> Result<bool, Error> {
        let count = self.config.ranges.len();
        if index >= count {
            return Err(Error::ButtonOutOfRange { index, count });
        }
        let value = self.adc.analog_read(self.config.pin);
        self.config.ranges.contains(index, value)
    }

    pub fn trigger_edge(&self) -> TriggerEdge {
        self.config.trigger_edge
    }

    pub fn set_trigger_edge(&mut self, edge: TriggerEdge) {
        if edge != self.config.trigger_edge {
            info!("Buttons: edge {} -> {}", self.config.trigger_edge, edge);
        }
        self.config.trigger_edge = edge;
    }

    /// Set the edge from its raw code (0 = press, 1 = release).
    ///
    /// An unknown code is rejected and the current edge kept.
    pub fn set_trigger_edge_code(&mut self, code: u8) -> Result<(), Error> {
        match TriggerEdge::try_from(code) {
            Ok(edge) => {
                self.set_trigger_edge(edge);
                Ok(())
            }
            Err(e) => {
                warn!("Buttons: rejected edge code {}", code);
                Err(e)
            }
        }
    }
}

impl<A, C, H> ButtonArrayReader<A, C, H> {
    pub fn pin(&self) -> u8 {
        self.config.pin
    }

    pub fn button_count(&self) -> usize {
        self.config.ranges.len()
    }

    pub fn adc_max(&self) -> u16 {
        self.config.adc_max
    }

    pub fn ranges(&self) -> &ButtonRanges {
        &self.config.ranges
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Current debounce state (phase, candidate, last confirmed button).
    pub fn debounce(&self) -> &Debouncer {
        &self.debounce
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// Tear down the reader and hand back its collaborators.
    pub fn release(self) -> (A, C, H) {
        (self.adc, self.clock, self.handler)
    }
}
