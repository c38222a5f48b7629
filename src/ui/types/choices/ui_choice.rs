use crate::ui::cli::drivers::PromptDriver;
use anyhow::Result;
use schemars::{JsonSchema, Schema};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};
use strum::{EnumMessage, IntoEnumIterator};

/// A tagged `{"type": ..., "params": ...}` enum the wizard can fill in and a
/// config file can name.
pub trait UIChoice: Sized + Serialize + DeserializeOwned + JsonSchema {
    type Kind: Copy + Into<&'static str> + EnumMessage + IntoEnumIterator;

    fn schema() -> Schema;

    fn prompt_label() -> &'static str {
        "Choose a type:"
    }
    fn prompt_help() -> Option<&'static str> {
        Some("↑/↓ to navigate, ↵ to select")
    }

    /// `params` offered as defaults when `kind` is picked.
    fn default_params(kind: Self::Kind) -> Value;

    /// Params the schema skips, such as nested choices.
    fn subprompts<D: PromptDriver>(
        _driver: &D,
        _kind: Self::Kind,
    ) -> Result<Option<Map<String, Value>>> {
        Ok(None)
    }

    fn from_parts(kind: Self::Kind, params: Value) -> Result<Self> {
        let key: &'static str = kind.into();
        Ok(serde_json::from_value(json!({ "type": key, "params": params }))?)
    }
}
