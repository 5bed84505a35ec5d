//! Core utilities and types for the DQO accessor generator.
//!
//! This crate provides the table model consumed by the renderers and
//! the file plumbing shared by generators.

mod codegen;
mod file;
mod table;
mod utils;

pub use codegen::{GenerateResult, LanguageCodegen, PreviewFile};
// File operations
pub use file::{File, Overwrite, WriteResult};
// Table model
pub use table::{Column, Table};
// String utilities
pub use utils::{
    is_identifier, is_qualified_name, to_camel_case, to_pascal_case, to_screaming_snake_case, to_snake_case,
};
