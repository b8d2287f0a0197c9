use tracing::{debug, warn};

use crate::core::Sample;
use crate::error::ChartResult;
use crate::extensions::ChartEvent;
use crate::render::Renderer;

use super::observer_dispatch::EventBuffer;
use super::validation::validate_samples;
use super::Chart;

impl<R: Renderer> Chart<R> {
    /// Replaces the series.
    ///
    /// Samples keep their given order. Any non-finite sample rejects the
    /// whole update and leaves the previous series in place. Scales and paths
    /// are re-derived and the last pointer position is tracked again.
    pub fn set_samples(&mut self, samples: Vec<Sample>) -> ChartResult<()> {
        if let Err(err) = validate_samples(&samples) {
            warn!(error = %err, count = samples.len(), "rejecting sample update");
            return Err(err);
        }

        debug!(count = samples.len(), "set samples");
        if samples.len() < 2 {
            debug!(count = samples.len(), "fewer than two samples, pointer tracking disabled");
        }
        self.samples = samples;
        self.relayout();

        let mut events = EventBuffer::new();
        events.push(ChartEvent::SamplesUpdated {
            samples_len: self.samples.len(),
        });
        self.retrack_pointer(&mut events);
        self.emit_events(events);
        Ok(())
    }

    /// Replaces the series with `(index, value)` samples.
    pub fn set_values(&mut self, values: &[f64]) -> ChartResult<()> {
        self.set_samples(Sample::series_from_values(values))
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    #[must_use]
    pub fn sample(&self, index: usize) -> Option<Sample> {
        self.samples.get(index).copied()
    }
}
