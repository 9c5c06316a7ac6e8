//! Async polling loop for embassy-based firmware.
//!
//! Replaces the bare `loop { reader.tick() }` of a superloop: the task
//! wakes every `TASK_POLL_MS` and lets the reader's own interval decide
//! whether to sample.

use crate::config::TASK_POLL_MS;
use crate::hal::{AnalogRead, Clock};
use crate::reader::{ButtonArrayReader, ButtonHandler};
use embassy_time::{Delay, Duration, Ticker};

/// Settle the ADC, then tick the reader forever.
///
/// Spawn from a task wrapper holding the concrete reader type; the
/// handler runs inside this task.
pub async fn poll_buttons<A, C, H>(mut reader: ButtonArrayReader<A, C, H>) -> !
where
    A: AnalogRead,
    C: Clock,
    H: ButtonHandler,
{
    reader.begin(&mut Delay);
    info!("Buttons: polling pin {} every {} ms", reader.pin(), TASK_POLL_MS);

    let mut ticker = Ticker::every(Duration::from_millis(TASK_POLL_MS));
    loop {
        ticker.next().await;
        reader.tick();
    }
}
