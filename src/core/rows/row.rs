use std::collections::BTreeMap;

/// One tabular record: field name to numeric value.
///
/// Fields are kept ordered by name so that every pass over a row (training,
/// prediction, logging) visits predictors in the same order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Row {
    values: BTreeMap<String, f64>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<N: Into<String>>(&mut self, name: N, value: f64) -> Option<f64> {
        self.values.insert(name.into(), value)
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Removes `name` and returns its value, or 0 if the row has no such field.
    pub fn take(&mut self, name: &str) -> f64 {
        self.values.remove(name).unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Sum of every value in the row, positive or not.
    pub fn total(&self) -> f64 {
        self.values.values().sum()
    }
}

impl<N: Into<String>> FromIterator<(N, f64)> for Row {
    fn from_iter<I: IntoIterator<Item = (N, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
