pub mod failing_row_stream;
pub mod train_spy_regressor;
pub mod vec_row_stream;

pub use failing_row_stream::FailingRowStream;
pub use train_spy_regressor::{TrainSpyHandle, TrainSpyRegressor};
pub use vec_row_stream::VecRowStream;
