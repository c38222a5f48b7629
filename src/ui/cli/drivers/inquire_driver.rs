use crate::ui::cli::drivers::PromptDriver;
use anyhow::Result;
use inquire::{Confirm, CustomType, Select, Text, validator::Validation};
use std::fmt::Display;
use std::str::FromStr;

/// Terminal prompts backed by `inquire`.
pub struct InquireDriver;

fn ask_in_range<T>(title: &str, help: &str, default: T, min: Option<T>, max: Option<T>) -> Result<T>
where
    T: Copy + Clone + Display + FromStr + PartialOrd + 'static,
{
    let q = CustomType::<T>::new(title)
        .with_default(default)
        .with_help_message(help)
        .with_validator(move |x: &T| {
            let msg = match (min, max) {
                (Some(lo), Some(hi)) if *x < lo || *x > hi => format!("Must be between {lo} and {hi}"),
                (Some(lo), None) if *x < lo => format!("Must be ≥ {lo}"),
                (None, Some(hi)) if *x > hi => format!("Must be ≤ {hi}"),
                _ => return Ok(Validation::Valid),
            };
            Ok(Validation::Invalid(msg.into()))
        });

    Ok(q.prompt()?)
}

impl PromptDriver for InquireDriver {
    fn ask_select(&self, label: &str, help: Option<&str>, options: &[String]) -> Result<usize> {
        let mut select = Select::new(label, options.to_vec());
        if let Some(help) = help {
            select = select.with_help_message(help);
        }
        Ok(select.raw_prompt()?.index)
    }

    fn ask_bool(&self, title: &str, help: &str, default: bool) -> Result<bool> {
        Ok(Confirm::new(title)
            .with_default(default)
            .with_help_message(help)
            .prompt()?)
    }

    fn ask_string(&self, title: &str, help: &str, default: &str) -> Result<String> {
        Ok(Text::new(title)
            .with_initial_value(default)
            .with_help_message(help)
            .prompt()?)
    }

    fn ask_u64(
        &self,
        title: &str,
        help: &str,
        default: u64,
        min: Option<u64>,
        max: Option<u64>,
    ) -> Result<u64> {
        ask_in_range(title, help, default, min, max)
    }

    fn ask_f64(
        &self,
        title: &str,
        help: &str,
        default: f64,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<f64> {
        ask_in_range(title, help, default, min, max)
    }
}
