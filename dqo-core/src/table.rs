//! Table and column value objects consumed by the renderers.

use crate::utils::{to_camel_case, to_screaming_snake_case};

/// A single column of a table.
///
/// Identifiers are derived from the raw column name by [`Column::new`]:
/// `created_at` becomes the constant `CREATED_AT` and the accessor
/// `createdAt`. Use [`Column::with_const`] and [`Column::with_method`]
/// to override them.
///
/// Identifier validity and uniqueness inside a table are the caller's
/// responsibility; renderers emit whatever they are given.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Column {
    db_name: String,
    name_const: String,
    method_name: String,
    ty: String,
    optional: bool,
}

impl Column {
    /// Create a required column, deriving its identifiers from `db_name`.
    pub fn new(db_name: impl Into<String>, ty: impl Into<String>) -> Self {
        let db_name = db_name.into();
        Self {
            name_const: to_screaming_snake_case(&db_name),
            method_name: to_camel_case(&db_name),
            db_name,
            ty: ty.into(),
            optional: false,
        }
    }

    /// Set whether the column may hold no value.
    pub fn nullable(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    /// Override the derived constant name.
    pub fn with_const(mut self, name_const: impl Into<String>) -> Self {
        self.name_const = name_const.into();
        self
    }

    /// Override the derived accessor name.
    pub fn with_method(mut self, method_name: impl Into<String>) -> Self {
        self.method_name = method_name.into();
        self
    }

    /// Raw field name as stored in the schema.
    pub fn db_name(&self) -> &str {
        &self.db_name
    }

    pub fn name_const(&self) -> &str {
        &self.name_const
    }

    pub fn method_name(&self) -> &str {
        &self.method_name
    }

    /// Declared column type, either a built-in name or a value-object class.
    pub fn ty(&self) -> &str {
        &self.ty
    }

    pub fn optional(&self) -> bool {
        self.optional
    }
}

/// A table: a class name prefix plus its ordered columns.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Table {
    name: String,
    columns: Vec<Column>,
}

impl Table {
    /// Create a table without columns.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
        }
    }

    /// Append a column.
    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Append several columns, keeping their order.
    pub fn with_columns(mut self, columns: impl IntoIterator<Item = Column>) -> Self {
        self.columns.extend(columns);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Columns in declaration order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }
}
