//! Utilities that operate on parsed s-expression trees.
mod quotes;
mod search;
mod value;

pub use quotes::remove_quotes;
pub use search::search;
pub use value::{extract_value, ShapeError};
