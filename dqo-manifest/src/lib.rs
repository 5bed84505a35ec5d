//! `dqo.toml` parsing and validation.
//!
//! A manifest lists the tables to generate, the target namespace and any
//! extra column types. Parsing reports problems as [`miette`] diagnostics
//! pointing into the source file.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result};
pub use manifest::{
    ColumnDef, DqoToml, GeneratorConfig, Manifest, ParseContext, TableDef, TypeDef,
};
