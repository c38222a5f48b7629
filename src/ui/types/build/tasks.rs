use crate::evaluation::{BasicEstimator, BasicRegressionEvaluator};
use crate::regressors::AdditiveRegressionModel;
use crate::tasks::TrainThenPredict;
use crate::ui::types::build::{BuildError, build_stream};
use crate::ui::types::choices::TaskChoice;

/// Builds the runnable task a choice describes.
///
/// Without a separate prediction stream the training stream is built a second
/// time, so the model is scored on the rows it was fitted to.
pub fn build_task(choice: TaskChoice) -> Result<TrainThenPredict, BuildError> {
    match choice {
        TaskChoice::TrainThenPredict(p) => {
            let predict_choice = p.predict.unwrap_or_else(|| p.train.clone());
            let train_stream = build_stream(p.train)?;
            let predict_stream = build_stream(predict_choice)?;

            let task = TrainThenPredict::new(
                Box::new(AdditiveRegressionModel::new()),
                train_stream,
                predict_stream,
                Box::new(BasicRegressionEvaluator::<BasicEstimator>::new()),
                &p.target_field,
            )?;
            Ok(task)
        }
    }
}
