//! PHP accessor generator.
//!
//! Turns a [`Table`](dqo_core::Table) into two PHP units: a `<Name>Table`
//! descriptor with one constant and one field-path accessor per column,
//! and a `<Name>Row` class with one typed accessor per column.

mod file;
mod generator;
mod renderer;
mod type_map;

pub use dqo_core::{GenerateResult, LanguageCodegen, PreviewFile};
pub use file::{FileHeader, Namespace, Use};
pub use generator::Generator;
pub use renderer::{DESCRIPTOR_BASE, ROW_BASE, Renderer, descriptor_class_name, row_class_name};
pub use type_map::{Accessor, TypeMap, TypeMapping};
