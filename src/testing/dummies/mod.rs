mod rows;

pub use rows::{row, two_component_rows};
