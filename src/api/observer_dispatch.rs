use smallvec::SmallVec;

use crate::extensions::{ChartContext, ChartEvent};
use crate::render::Renderer;

use super::Chart;

/// Events collected during one mutation and dispatched once it completes.
pub(super) type EventBuffer = SmallVec<[ChartEvent; 4]>;

impl<R: Renderer> Chart<R> {
    pub(super) fn observer_context(&self) -> ChartContext {
        ChartContext {
            container: self.container,
            plot_area: self.geometry.plot_area,
            samples_len: self.samples.len(),
            pointer: self.interaction.pointer(),
        }
    }

    pub(super) fn emit_event(&mut self, event: ChartEvent) {
        let context = self.observer_context();
        for observer in self.observers.values_mut() {
            observer.on_event(event, context);
        }
    }

    pub(super) fn emit_events(&mut self, events: EventBuffer) {
        for event in events {
            self.emit_event(event);
        }
    }
}
