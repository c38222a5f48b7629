use crate::evaluation::Measurement;
use std::collections::HashMap;

/// Online evaluator of regression accuracy.
///
/// A `PerformanceEvaluator` consumes (actual, predicted) pairs one at a time
/// and exposes aggregated metrics via [`performance`](Self::performance).
pub trait PerformanceEvaluator {
    /// Clears all accumulated state.
    fn reset(&mut self);

    /// Feeds one observed target and the model's prediction for it.
    fn add_result(&mut self, actual: f64, predicted: f64);

    /// Returns a snapshot of current metrics.
    fn performance(&self) -> Vec<Measurement>;
}

pub trait PerformanceEvaluatorExt {
    /// Returns (name, Some(value)|None) for each requested metric, preserving order.
    fn metrics<'a, I>(&self, names: I) -> Vec<(String, Option<f64>)>
    where
        I: IntoIterator<Item = &'a str>;

    fn metric(&self, name: &str) -> Option<f64> {
        self.metrics([name]).into_iter().next().and_then(|(_, v)| v)
    }
}

impl<T: PerformanceEvaluator + ?Sized> PerformanceEvaluatorExt for T {
    fn metrics<'a, I>(&self, names: I) -> Vec<(String, Option<f64>)>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let ms = self.performance();
        let map: HashMap<_, _> = ms.into_iter().map(|m| (m.name, m.value)).collect();
        names
            .into_iter()
            .map(|n| (n.to_string(), map.get(n).copied()))
            .collect()
    }
}
