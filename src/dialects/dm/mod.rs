mod dialect;

pub use dialect::{DmDialect, DmProductMatcher};
