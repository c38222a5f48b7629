mod estimators;
mod evaluators;
mod measurement;
mod report;

pub use estimators::{BasicEstimator, Estimator};
pub use evaluators::{BasicRegressionEvaluator, PerformanceEvaluator, PerformanceEvaluatorExt};
pub use measurement::Measurement;
pub use report::{FitSummary, Report, ReportFormat, VariableSummary};
