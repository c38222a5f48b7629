use crate::evaluation::{FitSummary, VariableSummary};
use crate::utils::number_format::{format_fixed, format_g, format_g_width};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::fs::File;
use std::io::{BufWriter, Error, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Outcome of a train-then-predict run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub variables: Vec<VariableSummary>,
    pub fit: FitSummary,
}

impl Report {
    pub fn new(variables: Vec<VariableSummary>, fit: FitSummary) -> Self {
        Self { variables, fit }
    }

    pub fn variable(&self, name: &str) -> Option<&VariableSummary> {
        self.variables.iter().find(|v| v.name == name)
    }

    pub fn export<P: AsRef<Path>>(&self, path: P, fmt: ReportFormat) -> Result<(), Error> {
        let mut w = BufWriter::new(File::create(path)?);
        match fmt {
            ReportFormat::Text => write!(w, "{self}")?,
            ReportFormat::Json => {
                serde_json::to_writer_pretty(&mut w, self)?;
                writeln!(w)?;
            }
        }
        w.flush()
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f)?;
        writeln!(f, "================== RESULTS: VARIABLES ====================")?;
        writeln!(f)?;
        writeln!(
            f,
            "variable             count  R^2     slope  (t-stat) intercept  (t-stat)"
        )?;
        for v in &self.variables {
            writeln!(
                f,
                "{:<20} {} {} {} {} {} {}",
                v.name,
                format_fixed(v.count, 0, 5),
                format_fixed(v.rsq, 2, 4),
                format_g_width(v.slope, 3, 9),
                format_g_width(v.slope_t_stat, 3, 9),
                format_g_width(v.intercept, 3, 9),
                format_g_width(v.intercept_t_stat, 3, 9),
            )?;
        }

        writeln!(f)?;
        writeln!(f, "================= RESULTS: ACTUAL-VS-PRED ===================")?;
        writeln!(
            f,
            "Slope: {} T-stat: {} Intercept: {} T-stat: {} R^2 {} MAPE: {}",
            format_g(self.fit.slope, 2),
            format_g(self.fit.slope_t_stat, 2),
            format_g(self.fit.intercept, 2),
            format_g(self.fit.intercept_t_stat, 2),
            format_g(self.fit.rsq, 2),
            format_g(self.fit.mape, 2),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::fs;
    use tempfile::NamedTempFile;

    fn sample() -> Report {
        Report::new(
            vec![VariableSummary {
                name: "proc_a".into(),
                count: 12.0,
                rsq: 0.8765,
                slope: 2.0,
                slope_t_stat: 1234.0,
                intercept: 0.5,
                intercept_t_stat: 0.25,
            }],
            FitSummary {
                count: 12.0,
                slope: 0.98,
                slope_t_stat: 41.0,
                intercept: 0.0,
                intercept_t_stat: f64::NAN,
                rsq: 0.91,
                mape: 0.1234,
            },
        )
    }

    #[test]
    fn text_layout() {
        let got = sample().to_string();
        let exp = "
================== RESULTS: VARIABLES ====================

variable             count  R^2     slope  (t-stat) intercept  (t-stat)
proc_a                  12 0.88         2  1.23e+03       0.5      0.25

================= RESULTS: ACTUAL-VS-PRED ===================
Slope: 0.98 T-stat: 41 Intercept: 0 T-stat: NaN R^2 0.91 MAPE: 0.12
";
        assert_eq!(got, exp);
    }

    #[test]
    fn non_finite_columns_use_one_spelling() {
        let mut r = sample();
        r.variables[0].rsq = f64::INFINITY;
        r.variables[0].slope = f64::NEG_INFINITY;
        r.variables[0].intercept_t_stat = f64::NAN;
        let line = r
            .to_string()
            .lines()
            .find(|l| l.starts_with("proc_a"))
            .unwrap()
            .to_string();
        assert_eq!(
            line,
            "proc_a                  12 +Inf      -Inf  1.23e+03       0.5       NaN"
        );
    }

    #[test]
    fn lookup_by_name() {
        let r = sample();
        assert_eq!(r.variable("proc_a").unwrap().count, 12.0);
        assert!(r.variable("proc_b").is_none());
    }

    #[test]
    fn export_text_matches_display() {
        let r = sample();
        let tf = NamedTempFile::new().unwrap();
        r.export(tf.path(), ReportFormat::Text).unwrap();
        assert_eq!(fs::read_to_string(tf.path()).unwrap(), r.to_string());
    }

    #[test]
    fn export_json_shape() {
        let r = sample();
        let tf = NamedTempFile::new().unwrap();
        r.export(tf.path(), ReportFormat::Json).unwrap();

        let v: Value = serde_json::from_str(&fs::read_to_string(tf.path()).unwrap()).unwrap();
        let vars = v.get("variables").and_then(Value::as_array).unwrap();
        assert_eq!(vars.len(), 1);
        assert_eq!(vars[0].get("name").and_then(Value::as_str), Some("proc_a"));
        assert_eq!(vars[0].get("slope").and_then(Value::as_f64), Some(2.0));

        let fit = v.get("fit").and_then(Value::as_object).unwrap();
        assert_eq!(fit.get("rsq").and_then(Value::as_f64), Some(0.91));
        // non-finite numbers have no JSON representation
        assert!(fit.get("intercept_t_stat").unwrap().is_null());
    }
}
