//! Hooks for code that reacts to chart state changes.

pub mod observers;

pub use observers::{ChartContext, ChartEvent, ChartObserver};
