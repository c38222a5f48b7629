use crate::evaluation::{FitSummary, PerformanceEvaluator, Report};
use crate::regressors::Regressor;
use crate::streams::{RowStream, StreamError};
use log::{debug, info, warn};
use std::fmt::{Display, Formatter};
use thiserror::Error;

pub const DEFAULT_TARGET_FIELD: &str = "user_us";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    Train,
    Predict,
}

impl Display for Pass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Pass::Train => write!(f, "training"),
            Pass::Predict => write!(f, "prediction"),
        }
    }
}

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("invalid task parameter: {0}")]
    InvalidParameter(String),

    #[error("{pass} pass failed after {rows} rows: {source}")]
    Stream {
        pass: Pass,
        rows: u64,
        #[source]
        source: StreamError,
    },
}

/// Two-pass task: train a regressor on one stream, then score its
/// predictions on another.
///
/// In the training pass every row has its target field removed and handed to
/// the regressor alongside the remaining predictors. In the prediction pass
/// only rows with a non-zero target are scored; the (actual, predicted) pairs
/// go to the evaluator. A stream error in either pass aborts the run.
pub struct TrainThenPredict {
    regressor: Box<dyn Regressor>,
    train_stream: Box<dyn RowStream>,
    predict_stream: Box<dyn RowStream>,
    evaluator: Box<dyn PerformanceEvaluator>,
    target_field: String,

    trained: u64,
    predicted: u64,
}

impl TrainThenPredict {
    pub fn new(
        regressor: Box<dyn Regressor>,
        train_stream: Box<dyn RowStream>,
        predict_stream: Box<dyn RowStream>,
        evaluator: Box<dyn PerformanceEvaluator>,
        target_field: &str,
    ) -> Result<Self, TaskError> {
        if target_field.trim().is_empty() {
            return Err(TaskError::InvalidParameter(
                "target field must not be empty".into(),
            ));
        }
        for (pass, stream) in [(Pass::Train, &train_stream), (Pass::Predict, &predict_stream)] {
            let fields = stream.fields();
            if !fields.is_empty() && !fields.iter().any(|f| f == target_field) {
                warn!("{pass} stream has no '{target_field}' field; every target reads as 0");
            }
        }

        Ok(Self {
            regressor,
            train_stream,
            predict_stream,
            evaluator,
            target_field: target_field.to_string(),
            trained: 0,
            predicted: 0,
        })
    }

    pub fn run(&mut self) -> Result<Report, TaskError> {
        self.train()?;
        self.predict()?;

        Ok(Report::new(
            self.regressor.variable_summaries(),
            FitSummary::from_evaluator(self.evaluator.as_ref()),
        ))
    }

    /// Rows consumed by the training pass.
    pub fn trained(&self) -> u64 {
        self.trained
    }

    /// Rows scored by the prediction pass.
    pub fn predicted(&self) -> u64 {
        self.predicted
    }

    pub fn regressor(&self) -> &dyn Regressor {
        self.regressor.as_ref()
    }

    fn train(&mut self) -> Result<(), TaskError> {
        info!("training on field '{}'", self.target_field);
        while let Some(mut row) = self.train_stream.next_row().map_err(|source| {
            TaskError::Stream {
                pass: Pass::Train,
                rows: self.trained,
                source,
            }
        })? {
            let target = row.take(&self.target_field);
            self.regressor.train_on_row(&row, target);
            self.trained += 1;
        }
        info!("trained on {} rows", self.trained);
        Ok(())
    }

    fn predict(&mut self) -> Result<(), TaskError> {
        let mut seen = 0;
        while let Some(mut row) = self.predict_stream.next_row().map_err(|source| {
            TaskError::Stream {
                pass: Pass::Predict,
                rows: seen,
                source,
            }
        })? {
            seen += 1;
            let actual = row.take(&self.target_field);
            if actual == 0.0 {
                continue;
            }
            let predicted = self.regressor.predict_row(&row);
            debug!("PREDICT {actual:.5} {predicted:.5}");
            self.evaluator.add_result(actual, predicted);
            self.predicted += 1;
        }
        info!("scored {} of {} rows", self.predicted, seen);
        let measurements: Vec<String> = self
            .evaluator
            .performance()
            .iter()
            .map(ToString::to_string)
            .collect();
        debug!("fit {}", measurements.join(" "));
        Ok(())
    }
}
