use crate::core::estimators::StreamingMoments;
use serde::{Deserialize, Serialize};

/// Fit statistics of one predictor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableSummary {
    pub name: String,
    pub count: f64,
    pub rsq: f64,
    pub slope: f64,
    pub slope_t_stat: f64,
    pub intercept: f64,
    pub intercept_t_stat: f64,
}

impl VariableSummary {
    pub fn from_moments<N: Into<String>>(name: N, moments: &StreamingMoments) -> Self {
        Self {
            name: name.into(),
            count: moments.count(),
            rsq: moments.rsq(),
            slope: moments.slope(),
            slope_t_stat: moments.slope_t_stat(),
            intercept: moments.intercept(),
            intercept_t_stat: moments.intercept_t_stat(),
        }
    }
}
