pub mod core;
pub mod evaluation;
pub mod regressors;
pub mod streams;
pub mod tasks;
pub mod ui;
pub mod utils;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
