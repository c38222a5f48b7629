use crate::core::estimators::StreamingMoments;
use crate::core::rows::Row;
use crate::evaluation::VariableSummary;
use crate::regressors::Regressor;
use crate::utils::number_format::format_g;
use log::trace;
use std::collections::BTreeMap;

/// Additive per-predictor linear model.
///
/// Each observed target is apportioned across the positive predictors of its
/// row in proportion to their magnitude, and every predictor key is regressed
/// against its own share with a dedicated [`StreamingMoments`]. Prediction sums
/// the per-key linear contributions, dropping keys whose learned slope is not
/// positive and clipping negative intercepts to 0.
///
/// Zero and negative predictor values are ignored by both training and
/// prediction, so "absent" and "present but 0" behave the same.
#[derive(Debug, Default, Clone)]
pub struct AdditiveRegressionModel {
    variables: BTreeMap<String, StreamingMoments>,
}

impl AdditiveRegressionModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apportions `target` across the positive entries of `predictors` and
    /// updates their accumulators.
    ///
    /// A zero target, or predictors summing to zero, leave the model untouched.
    pub fn train(&mut self, predictors: &Row, target: f64) {
        if target == 0.0 {
            return;
        }
        let total = predictors.total();
        if total == 0.0 {
            return;
        }
        let unit_rate = target / total;

        for (name, x) in predictors.iter() {
            if x <= 0.0 {
                continue;
            }
            let contribution = unit_rate * x;
            trace!("{}", train_line(name, x, target, unit_rate, contribution));
            self.variables
                .entry(name.to_string())
                .or_default()
                .add(x, contribution);
        }
    }

    /// Sums `intercept + x * slope` over the trained, positively sloped keys.
    pub fn predict(&self, predictors: &Row) -> f64 {
        let mut result = 0.0;
        for (name, x) in predictors.iter() {
            if x <= 0.0 {
                continue;
            }
            let Some(moments) = self.variables.get(name) else {
                continue;
            };
            let slope = moments.slope();
            if slope.is_nan() || slope <= 0.0 {
                continue;
            }
            let intercept = moments.intercept().max(0.0);
            result += intercept + x * slope;
        }
        result
    }

    pub fn variable(&self, name: &str) -> Option<&StreamingMoments> {
        self.variables.get(name)
    }

    /// Trained keys and their accumulators, ordered by key.
    pub fn variables(&self) -> impl Iterator<Item = (&str, &StreamingMoments)> {
        self.variables.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

impl Regressor for AdditiveRegressionModel {
    fn train_on_row(&mut self, predictors: &Row, target: f64) {
        self.train(predictors, target);
    }

    fn predict_row(&self, predictors: &Row) -> f64 {
        self.predict(predictors)
    }

    fn variable_summaries(&self) -> Vec<VariableSummary> {
        self.variables()
            .map(|(name, moments)| VariableSummary::from_moments(name, moments))
            .collect()
    }
}

fn train_line(name: &str, x: f64, target: f64, unit_rate: f64, contribution: f64) -> String {
    format!(
        "TRAIN {name} {} {} {} {}",
        format_g(x, 5),
        format_g(target, 5),
        format_g(unit_rate, 5),
        format_g(contribution, 5)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPS: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    fn row(pairs: &[(&str, f64)]) -> Row {
        pairs.iter().map(|&(k, v)| (k, v)).collect()
    }

    #[test]
    fn train_line_uses_significant_digits() {
        assert_eq!(
            train_line("proc_a", 1234567.0, 0.5, 1.0 / 3.0, 2.0),
            "TRAIN proc_a 1.2346e+06 0.5 0.33333 2"
        );
    }

    #[test]
    fn zero_target_is_noop() {
        let mut model = AdditiveRegressionModel::new();
        model.train(&row(&[("a", 3.0), ("b", 7.0)]), 0.0);
        assert!(model.is_empty());

        model.train(&row(&[("a", 1.0)]), 5.0);
        let before = *model.variable("a").unwrap();
        model.train(&row(&[("a", 4.0), ("b", 2.0)]), 0.0);
        assert_eq!(*model.variable("a").unwrap(), before);
        assert!(model.variable("b").is_none());
    }

    #[test]
    fn zero_total_is_noop() {
        let mut model = AdditiveRegressionModel::new();
        model.train(&row(&[("a", 3.0), ("b", -3.0)]), 10.0);
        assert!(model.is_empty());
        model.train(&Row::new(), 10.0);
        assert!(model.is_empty());
    }

    #[test]
    fn apportions_in_proportion_to_magnitude() {
        let mut model = AdditiveRegressionModel::new();
        model.train(&row(&[("a", 3.0), ("b", 7.0)]), 10.0);

        let mut a = StreamingMoments::new();
        a.add(3.0, 3.0);
        let mut b = StreamingMoments::new();
        b.add(7.0, 7.0);
        assert_eq!(model.variable("a"), Some(&a));
        assert_eq!(model.variable("b"), Some(&b));
    }

    #[test]
    fn non_positive_predictors_not_trained_but_counted_in_total() {
        let mut model = AdditiveRegressionModel::new();
        // total = 4 + 0 + (-2) = 2, unit rate = 3
        model.train(&row(&[("a", 4.0), ("zero", 0.0), ("neg", -2.0)]), 6.0);

        assert_eq!(model.len(), 1);
        assert!(model.variable("zero").is_none());
        assert!(model.variable("neg").is_none());
        assert!(approx_eq(model.variable("a").unwrap().slope(), 3.0, EPS));
    }

    #[test]
    fn accumulator_reused_across_rows() {
        let mut model = AdditiveRegressionModel::new();
        for _ in 0..5 {
            model.train(&row(&[("a", 2.0), ("b", 2.0)]), 8.0);
        }
        assert_eq!(model.len(), 2);
        assert_eq!(model.variable("a").unwrap().count(), 5.0);
        assert_eq!(model.variable("b").unwrap().count(), 5.0);
    }

    #[test]
    fn empty_and_unknown_predict_zero() {
        let mut model = AdditiveRegressionModel::new();
        assert_eq!(model.predict(&Row::new()), 0.0);
        assert_eq!(model.predict(&row(&[("never_seen", 10.0)])), 0.0);

        model.train(&row(&[("a", 2.0)]), 4.0);
        model.train(&row(&[("a", 3.0)]), 6.0);
        assert_eq!(model.predict(&Row::new()), 0.0);
        assert!(approx_eq(
            model.predict(&row(&[("a", 1.0), ("never_seen", 10.0)])),
            2.0,
            EPS
        ));
    }

    #[test]
    fn converges_on_repeated_single_predictor() {
        let mut model = AdditiveRegressionModel::new();
        for _ in 0..100 {
            model.train(&row(&[("a", 2.0)]), 4.0);
        }
        let a = model.variable("a").unwrap();
        assert_eq!(a.count(), 100.0);
        assert!(approx_eq(a.slope(), 2.0, EPS));
        assert!(approx_eq(a.intercept(), 0.0, EPS));
        assert!(approx_eq(model.predict(&row(&[("a", 2.0)])), 4.0, EPS));
    }

    #[test]
    fn repeated_fractional_predictor_predicts_its_rate() {
        for x in [0.1, 1.7, 3.3] {
            let mut model = AdditiveRegressionModel::new();
            for _ in 0..100 {
                model.train(&row(&[("a", x)]), 3.0 * x);
            }
            let predicted = model.predict(&row(&[("a", x)]));
            assert!(approx_eq(predicted, 3.0 * x, EPS), "x={x} predicted={predicted}");
        }
    }

    #[test]
    fn nan_slope_contributes_nothing() {
        let mut model = AdditiveRegressionModel::new();
        model.train(&row(&[("a", 1.0)]), f64::NAN);
        assert!(model.variable("a").unwrap().slope().is_nan());
        assert_eq!(model.predict(&row(&[("a", 1.0)])), 0.0);
    }

    #[test]
    fn learns_rate_from_varying_rows() {
        let mut model = AdditiveRegressionModel::new();
        for x in [1.0, 2.0, 3.0, 4.0, 5.0] {
            model.train(&row(&[("a", x)]), 2.0 * x);
        }
        let a = model.variable("a").unwrap();
        assert!(approx_eq(a.slope(), 2.0, EPS));
        assert!(approx_eq(a.intercept(), 0.0, EPS));
        assert!(approx_eq(model.predict(&row(&[("a", 2.0)])), 4.0, EPS));
    }

    #[test]
    fn negative_slope_skipped_and_negative_intercept_clipped() {
        let mut model = AdditiveRegressionModel::new();
        // a: y falls with x -> negative slope
        model.train(&row(&[("a", 1.0)]), 5.0);
        model.train(&row(&[("a", 2.0)]), 3.0);
        // b: y = 2x - 1 -> slope 2, intercept -1
        model.train(&row(&[("b", 1.0)]), 1.0);
        model.train(&row(&[("b", 2.0)]), 3.0);

        assert!(model.variable("a").unwrap().slope() < 0.0);
        assert!(approx_eq(model.variable("b").unwrap().intercept(), -1.0, EPS));

        assert_eq!(model.predict(&row(&[("a", 3.0)])), 0.0);
        assert!(approx_eq(model.predict(&row(&[("b", 3.0)])), 6.0, EPS));
        assert!(approx_eq(
            model.predict(&row(&[("a", 3.0), ("b", 3.0)])),
            6.0,
            EPS
        ));
    }

    #[test]
    fn non_positive_inputs_ignored_at_prediction() {
        let mut model = AdditiveRegressionModel::new();
        model.train(&row(&[("a", 1.0)]), 2.0);
        model.train(&row(&[("a", 2.0)]), 4.0);
        assert_eq!(model.predict(&row(&[("a", 0.0)])), 0.0);
        assert_eq!(model.predict(&row(&[("a", -5.0)])), 0.0);
    }

    #[test]
    fn summaries_follow_key_order() {
        let mut model = AdditiveRegressionModel::new();
        model.train(&row(&[("zeta", 1.0), ("alpha", 1.0)]), 2.0);
        let names: Vec<String> = model
            .variable_summaries()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["alpha".to_string(), "zeta".to_string()]);
    }
}
