use crate::streams::AdditiveGenerator;
use crate::ui::types::build::BuildError;
use crate::ui::types::choices::AdditiveGeneratorParameters;
use std::convert::TryFrom;

fn to_usize(name: &str, v: u64) -> Result<usize, BuildError> {
    usize::try_from(v).map_err(|_| BuildError::InvalidParameter(format!("{name} too large for usize")))
}

impl TryFrom<AdditiveGeneratorParameters> for AdditiveGenerator {
    type Error = BuildError;

    fn try_from(p: AdditiveGeneratorParameters) -> Result<Self, Self::Error> {
        AdditiveGenerator::new(
            to_usize("components", p.components)?,
            &p.target_field,
            p.sparsity,
            p.noise,
            to_usize("max_rows", p.max_rows)?,
            p.seed,
        )
        .map_err(BuildError::from)
    }
}
