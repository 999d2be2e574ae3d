//! Content module - result content (solutions) and the embedded reference data set.

mod reference;
mod solution;

pub use reference::{ContentLoadError, ReferenceContent};
pub use solution::{ActionItem, Solution};
