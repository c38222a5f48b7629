pub mod estimators;
pub mod rows;
