use crate::evaluation::ReportFormat;
use crate::tasks::DEFAULT_TARGET_FIELD;
use crate::ui::cli::drivers::PromptDriver;
use crate::ui::cli::wizard::prompt_choice;
use crate::ui::types::choices::{StreamChoice, UIChoice};
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::path::PathBuf;
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

fn default_target_field() -> String {
    DEFAULT_TARGET_FIELD.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TrainThenPredictParams {
    #[schemars(skip)]
    pub train: StreamChoice,

    /// Falls back to a fresh copy of `train` when absent.
    #[serde(default)]
    #[schemars(skip)]
    pub predict: Option<StreamChoice>,

    #[serde(default = "default_target_field")]
    #[schemars(
        title = "Target Field",
        description = "Column holding the value to learn and predict",
        default = "default_target_field"
    )]
    pub target_field: String,

    #[serde(default)]
    #[schemars(
        with = "Option<String>",
        title = "Report Path",
        description = "Also write the report to this file"
    )]
    pub report_path: Option<PathBuf>,

    #[serde(default)]
    #[schemars(
        title = "Report Format",
        description = "Format of the written report: text or json"
    )]
    pub report_format: ReportFormat,
}

impl TrainThenPredictParams {
    pub fn new(train: StreamChoice, predict: Option<StreamChoice>) -> Self {
        Self {
            train,
            predict,
            target_field: default_target_field(),
            report_path: None,
            report_format: ReportFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(TaskKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum TaskChoice {
    #[strum_discriminants(strum(
        message = "Train Then Predict",
        detailed_message = "Fit the additive model on one stream, then score it on another."
    ))]
    TrainThenPredict(TrainThenPredictParams),
}

impl UIChoice for TaskChoice {
    type Kind = TaskKind;

    fn schema() -> Schema {
        schema_for!(TaskChoice)
    }

    fn prompt_label() -> &'static str {
        "Choose a task:"
    }

    fn default_params(kind: Self::Kind) -> Value {
        match kind {
            TaskKind::TrainThenPredict => json!({
                "target_field": DEFAULT_TARGET_FIELD,
                "report_path": null,
                "report_format": "text",
            }),
        }
    }

    fn subprompts<D: PromptDriver>(
        driver: &D,
        kind: Self::Kind,
    ) -> anyhow::Result<Option<Map<String, Value>>> {
        match kind {
            TaskKind::TrainThenPredict => {
                println!("Training stream");
                let train = prompt_choice::<StreamChoice, _>(driver)?;

                let mut m = Map::new();
                m.insert("train".into(), serde_json::to_value(train)?);

                let separate = driver.ask_bool(
                    "Separate prediction stream?",
                    "No re-reads the training stream for prediction",
                    false,
                )?;
                if separate {
                    println!("Prediction stream");
                    let predict = prompt_choice::<StreamChoice, _>(driver)?;
                    m.insert("predict".into(), serde_json::to_value(predict)?);
                }
                Ok(Some(m))
            }
        }
    }

    fn from_parts(kind: Self::Kind, params: Value) -> anyhow::Result<Self> {
        match kind {
            TaskKind::TrainThenPredict => {
                let p: TrainThenPredictParams = serde_json::from_value(params)?;
                Ok(TaskChoice::TrainThenPredict(p))
            }
        }
    }
}
