use crate::tasks::DEFAULT_TARGET_FIELD;
use crate::ui::types::choices::UIChoice;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

const DEFAULT_SEED: u64 = 42;
fn default_seed() -> u64 {
    DEFAULT_SEED
}

fn default_components() -> u64 {
    4
}

fn default_max_rows() -> u64 {
    1_000
}

fn default_target_field() -> String {
    DEFAULT_TARGET_FIELD.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct CsvParameters {
    #[schemars(
        with = "String",
        title = "CSV Path",
        description = "Path to a .csv file with a header row and numeric cells",
        extend(
            "format" = "path",
            "x-file" = true,
            "x-must-exist" = true,
            "x-extensions" = ["csv"]
        )
    )]
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AdditiveGeneratorParameters {
    #[serde(default = "default_components")]
    #[schemars(
        title = "Components",
        description = "Number of predictor fields (proc_0, proc_1, ...)",
        range(min = 1),
        default = "default_components"
    )]
    pub components: u64,

    #[serde(default = "default_target_field")]
    #[schemars(
        title = "Target Field",
        description = "Name of the generated target column",
        default = "default_target_field"
    )]
    pub target_field: String,

    #[serde(default)]
    #[schemars(
        title = "Sparsity",
        description = "Probability that a predictor is 0 in a row (0.0 to <1.0)",
        range(min = 0.0, max = 0.99)
    )]
    pub sparsity: f64,

    #[serde(default)]
    #[schemars(
        title = "Noise",
        description = "Relative noise applied to the target (0.0 to 1.0)",
        range(min = 0.0, max = 1.0)
    )]
    pub noise: f64,

    #[serde(default = "default_max_rows")]
    #[schemars(
        title = "Max Rows",
        description = "Number of rows emitted per pass",
        default = "default_max_rows"
    )]
    pub max_rows: u64,

    #[serde(default = "default_seed")]
    #[schemars(title = "Seed", description = "PRNG seed", default = "default_seed")]
    pub seed: u64,
}

impl Default for AdditiveGeneratorParameters {
    fn default() -> Self {
        Self {
            components: default_components(),
            target_field: default_target_field(),
            sparsity: 0.0,
            noise: 0.0,
            max_rows: default_max_rows(),
            seed: DEFAULT_SEED,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(StreamKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum StreamChoice {
    #[strum_discriminants(strum(
        message = "CSV File Stream",
        detailed_message = "Rows read from a CSV file; the header names the fields."
    ))]
    CsvFile(CsvParameters),

    #[strum_discriminants(strum(
        message = "Additive Generator",
        detailed_message = "Synthetic rows whose target is a noisy rate-weighted sum of predictors."
    ))]
    AdditiveGenerator(AdditiveGeneratorParameters),
}

impl UIChoice for StreamChoice {
    type Kind = StreamKind;

    fn schema() -> Schema {
        schema_for!(StreamChoice)
    }

    fn prompt_label() -> &'static str {
        "Choose a stream:"
    }

    fn default_params(kind: Self::Kind) -> Value {
        let params = match kind {
            StreamKind::CsvFile => serde_json::to_value(CsvParameters::default()),
            StreamKind::AdditiveGenerator => {
                serde_json::to_value(AdditiveGeneratorParameters::default())
            }
        };
        params.unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::types::choices::{FieldKind, specs_for_kind};
    use serde_json::json;
    use strum::{EnumMessage, IntoEnumIterator};

    #[test]
    fn tagged_enum_serialization() {
        let choice = StreamChoice::CsvFile(CsvParameters {
            path: PathBuf::from("runs/train.csv"),
        });
        let v = serde_json::to_value(&choice).unwrap();
        assert_eq!(v, json!({ "type": "csv-file", "params": { "path": "runs/train.csv" } }));

        let back: StreamChoice = serde_json::from_value(v).unwrap();
        assert_eq!(back, choice);
    }

    #[test]
    fn generator_missing_fields_apply_defaults() {
        let choice: StreamChoice =
            serde_json::from_value(json!({ "type": "additive-generator", "params": {} })).unwrap();
        assert_eq!(
            choice,
            StreamChoice::AdditiveGenerator(AdditiveGeneratorParameters::default())
        );
    }

    #[test]
    fn kinds_have_messages() {
        let keys: Vec<&'static str> = StreamKind::iter().map(Into::into).collect();
        assert_eq!(keys, vec!["csv-file", "additive-generator"]);
        for k in StreamKind::iter() {
            assert!(k.get_message().is_some());
            assert!(k.get_detailed_message().is_some());
        }
    }

    #[test]
    fn generator_field_specs_carry_titles_and_ranges() {
        let specs = specs_for_kind(&StreamChoice::schema(), "additive-generator").unwrap();
        let sparsity = specs.iter().find(|s| s.name == "sparsity").unwrap();
        assert_eq!(sparsity.title, "Sparsity");
        assert_eq!(sparsity.kind, FieldKind::Number);
        assert_eq!(sparsity.max, Some(0.99));

        let target = specs.iter().find(|s| s.name == "target_field").unwrap();
        assert_eq!(target.kind, FieldKind::String);
        assert_eq!(target.default, Some(json!("user_us")));
    }

    #[test]
    fn csv_path_spec_is_a_required_string() {
        let specs = specs_for_kind(&StreamChoice::schema(), "csv-file").unwrap();
        assert_eq!(specs.len(), 1);
        assert_eq!(specs[0].name, "path");
        assert_eq!(specs[0].kind, FieldKind::String);
        assert!(specs[0].required);
    }
}
