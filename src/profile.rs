//! Profile form cache and field validation.

mod model;

pub use model::*;
