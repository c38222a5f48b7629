mod additive_generator;

pub use additive_generator::AdditiveGenerator;
