mod train_then_predict;

pub use train_then_predict::{DEFAULT_TARGET_FIELD, Pass, TaskError, TrainThenPredict};
