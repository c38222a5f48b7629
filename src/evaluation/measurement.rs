use crate::utils::number_format::format_g;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Named scalar reported by an evaluator, e.g. `mape` or `rsq`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub name: String,
    pub value: f64,
}

impl Measurement {
    #[inline]
    pub fn new<N: Into<String>>(name: N, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl Display for Measurement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.name, format_g(self.value, 4))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_name_and_short_value() {
        assert_eq!(Measurement::new("rsq", 0.987654).to_string(), "rsq=0.9877");
        assert_eq!(Measurement::new("mape", f64::NAN).to_string(), "mape=NaN");
    }
}
