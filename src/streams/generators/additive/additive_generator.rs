use crate::core::rows::Row;
use crate::streams::{RowStream, StreamError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::{Error, ErrorKind};

/// Synthetic additive workload.
///
/// Emits `components` predictor fields named `proc_0`, `proc_1`, … and one
/// target field. Each predictor has a hidden per-unit rate drawn once from
/// `[0.5, 2.0)`; its value per row is drawn from `[0, 10)`, or forced to 0
/// with probability `sparsity`. The target is the rate-weighted sum of the
/// predictors scaled by a uniform noise factor in `[1 - noise, 1 + noise]`.
#[derive(Debug)]
pub struct AdditiveGenerator {
    rng: StdRng,
    fields: Vec<String>,
    target_field: String,
    rates: Vec<f64>,
    sparsity: f64,
    noise: f64,
    max_rows: usize,
    produced: usize,
}

impl AdditiveGenerator {
    pub fn new(
        components: usize,
        target_field: &str,
        sparsity: f64,
        noise: f64,
        max_rows: usize,
        seed: u64,
    ) -> Result<Self, Error> {
        if components == 0 {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "components must be > 0",
            ));
        }
        if !(0.0..1.0).contains(&sparsity) {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "sparsity must be in 0.0..1.0",
            ));
        }
        if !(0.0..=1.0).contains(&noise) {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "noise must be in 0.0..=1.0",
            ));
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let rates = (0..components)
            .map(|_| rng.random_range(0.5..2.0))
            .collect();

        let mut fields: Vec<String> = (0..components).map(|i| format!("proc_{i}")).collect();
        if fields.iter().any(|f| f == target_field) {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                format!("target field '{target_field}' collides with a predictor name"),
            ));
        }
        fields.push(target_field.to_string());

        Ok(Self {
            rng,
            fields,
            target_field: target_field.to_string(),
            rates,
            sparsity,
            noise,
            max_rows,
            produced: 0,
        })
    }

    /// Hidden per-unit rate of each predictor, in field order.
    pub fn rates(&self) -> &[f64] {
        &self.rates
    }

    pub fn has_more_rows(&self) -> bool {
        self.produced < self.max_rows
    }
}

impl RowStream for AdditiveGenerator {
    fn fields(&self) -> &[String] {
        &self.fields
    }

    fn next_row(&mut self) -> Result<Option<Row>, StreamError> {
        if !self.has_more_rows() {
            return Ok(None);
        }

        let mut row = Row::new();
        let mut target = 0.0;
        for (i, rate) in self.rates.iter().enumerate() {
            let x = if self.rng.random_bool(self.sparsity) {
                0.0
            } else {
                self.rng.random_range(0.0..10.0)
            };
            target += rate * x;
            row.insert(self.fields[i].as_str(), x);
        }
        if self.noise > 0.0 {
            target *= 1.0 + self.rng.random_range(-self.noise..=self.noise);
        }
        row.insert(self.target_field.as_str(), target);

        self.produced += 1;
        Ok(Some(row))
    }
}
