//! Manifest types and parsing for dqo.toml files.

mod file;
mod parse;
mod validate;

use std::path::Path;

use dqo_core::{Column, Table, to_pascal_case};
use indexmap::IndexMap;
pub use file::DqoToml;
use serde::Deserialize;
pub use validate::ParseContext;

/// Root manifest for dqo.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Output settings
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Extra column types, keyed by declared type name
    #[serde(default)]
    pub types: IndexMap<String, TypeDef>,

    /// Tables to generate, in output order
    #[serde(default)]
    pub tables: Vec<TableDef>,
}

impl Manifest {
    /// Find a table by its manifest name or its class prefix.
    pub fn table(&self, name: &str) -> Option<&TableDef> {
        self.tables
            .iter()
            .find(|t| t.name == name || t.class_prefix() == name)
    }

    /// Build the table models in declaration order.
    pub fn to_tables(&self) -> Vec<Table> {
        self.tables.iter().map(TableDef::to_table).collect()
    }
}

/// `[generator]` section
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// PHP namespace of the generated classes (root namespace when unset)
    pub namespace: Option<String>,

    /// Directory the files are written to, relative to the manifest
    pub output: Option<String>,
}

impl GeneratorConfig {
    pub fn namespace(&self) -> &str {
        self.namespace.as_deref().unwrap_or_default()
    }

    pub fn output_dir(&self) -> &Path {
        Path::new(self.output.as_deref().unwrap_or("."))
    }
}

/// `[types.<name>]` entry registering a column type
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeDef {
    /// Return type annotation of accessors
    pub returns: String,

    /// `TableRow` method reading the value
    pub getter: String,
}

/// `[[tables]]` entry
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableDef {
    /// Table name; PascalCased into the class prefix
    pub name: String,

    /// Columns in declaration order
    #[serde(default)]
    pub columns: Vec<ColumnDef>,
}

impl TableDef {
    /// Prefix of the generated class names, e.g. `UserAccount`.
    pub fn class_prefix(&self) -> String {
        to_pascal_case(&self.name)
    }

    pub fn to_table(&self) -> Table {
        Table::new(self.class_prefix()).with_columns(self.columns.iter().map(ColumnDef::to_column))
    }
}

/// `[[tables.columns]]` entry
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnDef {
    /// Raw column name as stored in the database
    pub name: String,

    /// Declared type: a built-in name, a `[types]` entry or a value object class
    #[serde(rename = "type")]
    pub ty: String,

    #[serde(default)]
    pub optional: bool,

    /// Constant name override
    #[serde(rename = "const")]
    pub name_const: Option<String>,

    /// Accessor name override
    pub method: Option<String>,
}

impl ColumnDef {
    pub fn to_column(&self) -> Column {
        let column = Column::new(&self.name, &self.ty).nullable(self.optional);
        let column = match &self.name_const {
            Some(name_const) => column.with_const(name_const),
            None => column,
        };
        match &self.method {
            Some(method) => column.with_method(method),
            None => column,
        }
    }
}
