pub mod additive;
pub mod regressor;

pub use additive::AdditiveRegressionModel;
pub use regressor::Regressor;
