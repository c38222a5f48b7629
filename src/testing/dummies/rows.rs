use crate::core::rows::Row;

pub fn row(pairs: &[(&str, f64)]) -> Row {
    pairs.iter().map(|&(k, v)| (k, v)).collect()
}

/// Six rows where `user_us = 2a + 3b` and `a + b = 7`.
pub fn two_component_rows() -> Vec<Row> {
    (1..=6)
        .map(|i| {
            let a = i as f64;
            let b = (7 - i) as f64;
            row(&[("a", a), ("b", b), ("user_us", 2.0 * a + 3.0 * b)])
        })
        .collect()
}
