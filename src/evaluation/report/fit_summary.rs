use crate::evaluation::{PerformanceEvaluator, PerformanceEvaluatorExt};
use serde::{Deserialize, Serialize};

/// Aggregate actual-vs-predicted statistics of a prediction pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitSummary {
    pub count: f64,
    pub slope: f64,
    pub slope_t_stat: f64,
    pub intercept: f64,
    pub intercept_t_stat: f64,
    pub rsq: f64,
    pub mape: f64,
}

impl FitSummary {
    /// Collects the summary from an evaluator's measurements; metrics the
    /// evaluator does not report are NaN.
    pub fn from_evaluator<E: PerformanceEvaluator + ?Sized>(evaluator: &E) -> Self {
        let m = evaluator.metrics([
            "count",
            "slope",
            "slope_t_stat",
            "intercept",
            "intercept_t_stat",
            "rsq",
            "mape",
        ]);
        let get = |i: usize| m[i].1.unwrap_or(f64::NAN);
        Self {
            count: get(0),
            slope: get(1),
            slope_t_stat: get(2),
            intercept: get(3),
            intercept_t_stat: get(4),
            rsq: get(5),
            mape: get(6),
        }
    }
}
