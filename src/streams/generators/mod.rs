mod additive;

pub use additive::AdditiveGenerator;
