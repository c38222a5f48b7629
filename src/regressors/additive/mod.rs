mod additive_regression_model;

pub use additive_regression_model::AdditiveRegressionModel;
