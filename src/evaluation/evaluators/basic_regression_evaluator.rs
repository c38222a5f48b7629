use crate::core::estimators::StreamingMoments;
use crate::evaluation::{Estimator, Measurement, PerformanceEvaluator};

/// Basic online regression evaluator.
///
/// Tracks:
/// - mean absolute percentage error, `|actual - predicted| / |actual|`,
///   through the estimator `E`;
/// - a least-squares fit of predicted against actual values, which tells how
///   well predictions track reality (slope 1, intercept 0, R² 1 is perfect).
///
/// Pairs whose actual value is 0 carry no percentage error and are ignored.
pub struct BasicRegressionEvaluator<E: Estimator + Default> {
    absolute_percentage_error: E,
    fit: StreamingMoments,
}

impl<E: Estimator + Default> BasicRegressionEvaluator<E> {
    pub fn new() -> Self {
        Self {
            absolute_percentage_error: E::default(),
            fit: StreamingMoments::new(),
        }
    }

    /// Accumulated (actual, predicted) fit.
    pub fn fit(&self) -> &StreamingMoments {
        &self.fit
    }
}

impl<E: Estimator + Default> Default for BasicRegressionEvaluator<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Estimator + Default> PerformanceEvaluator for BasicRegressionEvaluator<E> {
    fn reset(&mut self) {
        *self = Self::new();
    }

    fn add_result(&mut self, actual: f64, predicted: f64) {
        if actual == 0.0 {
            return;
        }
        self.absolute_percentage_error
            .add(((actual - predicted) / actual).abs());
        self.fit.add(actual, predicted);
    }

    fn performance(&self) -> Vec<Measurement> {
        vec![
            Measurement::new("count", self.fit.count()),
            Measurement::new("mape", self.absolute_percentage_error.estimation()),
            Measurement::new("slope", self.fit.slope()),
            Measurement::new("slope_t_stat", self.fit.slope_t_stat()),
            Measurement::new("intercept", self.fit.intercept()),
            Measurement::new("intercept_t_stat", self.fit.intercept_t_stat()),
            Measurement::new("rsq", self.fit.rsq()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::{BasicEstimator, PerformanceEvaluatorExt};
    const EPS: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    #[test]
    fn empty_evaluator_reports_nan_mape_and_zero_fit() {
        let ev = BasicRegressionEvaluator::<BasicEstimator>::new();
        assert_eq!(ev.metric("count"), Some(0.0));
        assert!(ev.metric("mape").unwrap().is_nan());
        assert_eq!(ev.metric("slope"), Some(0.0));
        assert_eq!(ev.metric("rsq"), Some(0.0));
    }

    #[test]
    fn mape_is_mean_relative_error() {
        let mut ev = BasicRegressionEvaluator::<BasicEstimator>::new();
        ev.add_result(10.0, 8.0); // 0.2
        ev.add_result(4.0, 5.0); // 0.25
        ev.add_result(-2.0, -2.0); // 0.0
        assert!(approx_eq(ev.metric("mape").unwrap(), 0.15, EPS));
        assert_eq!(ev.metric("count"), Some(3.0));
    }

    #[test]
    fn zero_actual_ignored() {
        let mut ev = BasicRegressionEvaluator::<BasicEstimator>::new();
        ev.add_result(0.0, 3.0);
        assert_eq!(ev.fit().count(), 0.0);
        assert!(ev.metric("mape").unwrap().is_nan());
    }

    #[test]
    fn perfect_predictions_fit_identity() {
        let mut ev = BasicRegressionEvaluator::<BasicEstimator>::new();
        for y in [1.0, 2.0, 3.0, 5.0, 8.0] {
            ev.add_result(y, y);
        }
        let got = ev.metrics(["slope", "intercept", "rsq", "mape"]);
        assert!(approx_eq(got[0].1.unwrap(), 1.0, EPS));
        assert!(approx_eq(got[1].1.unwrap(), 0.0, EPS));
        assert!(approx_eq(got[2].1.unwrap(), 1.0, EPS));
        assert_eq!(got[3].1, Some(0.0));
    }

    #[test]
    fn unknown_metric_is_none() {
        let ev = BasicRegressionEvaluator::<BasicEstimator>::new();
        assert_eq!(ev.metric("accuracy"), None);
    }

    #[test]
    fn reset_clears_state() {
        let mut ev = BasicRegressionEvaluator::<BasicEstimator>::new();
        ev.add_result(3.0, 2.0);
        ev.reset();
        assert_eq!(ev.metric("count"), Some(0.0));
        assert!(ev.metric("mape").unwrap().is_nan());
    }
}
