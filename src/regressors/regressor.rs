use crate::core::rows::Row;
use crate::evaluation::VariableSummary;

/// Incremental regressor driven row by row.
///
/// Rows handed to a regressor never contain the target field; the caller
/// removes it first and passes it separately.
pub trait Regressor {
    fn train_on_row(&mut self, predictors: &Row, target: f64);

    fn predict_row(&self, predictors: &Row) -> f64;

    /// Per-predictor fit statistics, in a stable order.
    fn variable_summaries(&self) -> Vec<VariableSummary>;
}
