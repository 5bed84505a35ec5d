//! File-scope preamble for generated PHP units.

mod header;
mod namespace;

pub use header::{FileHeader, Use};
pub use namespace::Namespace;
