//! Validation of table, column and type definitions.

use std::collections::HashMap;

use dqo_core::{is_identifier, is_qualified_name};
use miette::{NamedSource, SourceSpan};

use super::{ColumnDef, Manifest, TableDef};
use crate::{Error, Result};

/// Validation context that carries source information.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "dqo.toml");
/// ctx.validate_name("STATUS", "constant")?;
///
/// // Inside a table
/// ctx.push("user").validate_name("createdAt", "method")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    src: &'a str,
    filename: &'a str,
    path: Vec<String>,
}

impl<'a> ParseContext<'a> {
    pub fn new(src: &'a str, filename: &'a str) -> Self {
        Self {
            src,
            filename,
            path: Vec::new(),
        }
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &str) -> Self {
        let mut path = self.path.clone();
        path.push(segment.to_string());
        Self {
            src: self.src,
            filename: self.filename,
            path,
        }
    }

    /// Get a context description for error messages, e.g. "constant in table 'user'".
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in table '{}'", kind, self.path.join("."))
        }
    }

    /// Find the span of a name in the source.
    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_value_span(self.src, name, 0)
    }

    /// Validate that a name is a usable PHP identifier.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        match identifier_problem(name) {
            None => Ok(()),
            Some(reason) => Err(Error::invalid_identifier(
                name,
                self.context_for(kind),
                reason,
                self.src,
                self.filename,
                self.find_span(name),
            )),
        }
    }

    pub fn validate_manifest(&self, manifest: &Manifest) -> Result<()> {
        if let Some(namespace) = &manifest.generator.namespace {
            self.validate_namespace(namespace)?;
        }

        for (name, ty) in &manifest.types {
            if name.trim().is_empty() {
                return Err(self.validation_error("type name cannot be empty", None));
            }
            self.validate_class_name(&ty.returns, "return type")?;
            self.validate_name(&ty.getter, "getter")?;
        }

        let mut seen: HashMap<String, &str> = HashMap::new();
        for table in &manifest.tables {
            if table.name.trim().is_empty() {
                return Err(self.validation_error("table name cannot be empty", None));
            }

            let prefix = table.class_prefix();
            self.validate_name(&prefix, "table")?;
            if let Some(first) = seen.insert(prefix.clone(), &table.name) {
                return Err(self.validation_error(
                    format!(
                        "tables '{}' and '{}' both generate {}Table",
                        first, table.name, prefix
                    ),
                    find_value_span(self.src, &table.name, self.end_of(first)),
                ));
            }

            self.push(&table.name).validate_table(table)?;
        }

        Ok(())
    }

    fn validate_table(&self, table: &TableDef) -> Result<()> {
        for column in &table.columns {
            if column.name.is_empty() {
                return Err(self.validation_error(
                    format!("column name cannot be empty in table '{}'", table.name),
                    None,
                ));
            }
            self.validate_type(column)?;
        }

        let columns: Vec<_> = table.columns.iter().map(ColumnDef::to_column).collect();

        self.check_unique(table, "constant", |i| columns[i].name_const().to_string())?;
        self.check_unique(table, "method", |i| columns[i].method_name().to_string())?;

        for column in &columns {
            self.validate_name(column.name_const(), "constant")?;
            if column.name_const().eq_ignore_ascii_case("class") {
                return Err(Error::invalid_identifier(
                    column.name_const(),
                    self.context_for("constant"),
                    "'class' is reserved for the ::class constant",
                    self.src,
                    self.filename,
                    self.find_span(column.name_const()),
                ));
            }
            self.validate_name(column.method_name(), "method")?;
        }

        Ok(())
    }

    fn validate_type(&self, column: &ColumnDef) -> Result<()> {
        if column.ty.trim().is_empty() {
            return Err(self.validation_error(
                format!("column '{}' has an empty type", column.name),
                self.find_span(&column.name),
            ));
        }
        self.validate_class_name(&column.ty, "column type")
    }

    /// Class names may be namespace-qualified (`App\Status`).
    /// The root namespace may be written as `""` or `\`.
    fn validate_namespace(&self, namespace: &str) -> Result<()> {
        let path = namespace.trim_matches('\\');
        if path.is_empty() {
            return Ok(());
        }
        self.validate_class_name(path, "namespace")
    }

    fn validate_class_name(&self, name: &str, kind: &str) -> Result<()> {
        if is_qualified_name(name) {
            Ok(())
        } else {
            Err(Error::invalid_identifier(
                name,
                self.context_for(kind),
                "each namespace segment must be an identifier",
                self.src,
                self.filename,
                self.find_span(name),
            ))
        }
    }

    /// Reject two columns of `table` producing the same identifier.
    fn check_unique(
        &self,
        table: &TableDef,
        kind: &str,
        identifier: impl Fn(usize) -> String,
    ) -> Result<()> {
        let mut seen: HashMap<String, usize> = HashMap::new();

        for (i, column) in table.columns.iter().enumerate() {
            let name = identifier(i);
            if let Some(first) = seen.insert(name.clone(), i) {
                let first = &table.columns[first];
                let first_span = self.find_span(&first.name);
                let from = first_span.map_or(0, |s| s.offset() + s.len());

                return Err(Box::new(Error::Duplicate {
                    src: NamedSource::new(self.filename, self.src.to_string()),
                    first_span,
                    second_span: find_value_span(self.src, &column.name, from),
                    kind: kind.to_string(),
                    name,
                    table: table.name.clone(),
                    first: first.name.clone(),
                    second: column.name.clone(),
                }));
            }
        }

        Ok(())
    }

    fn end_of(&self, value: &str) -> usize {
        self.find_span(value).map_or(0, |s| s.offset() + s.len())
    }

    fn validation_error(&self, message: impl Into<String>, span: Option<SourceSpan>) -> Box<Error> {
        Error::validation(message, self.src, self.filename, span)
    }
}

/// Returns None if `name` is a valid identifier, Some(reason) otherwise.
fn identifier_problem(name: &str) -> Option<&'static str> {
    match name.chars().next() {
        None => Some("name cannot be empty"),
        Some(c) if !(c.is_alphabetic() || c == '_') => {
            Some("name must start with a letter or underscore")
        }
        _ if !is_identifier(name) => Some("name must contain only letters, numbers, and underscores"),
        _ => None,
    }
}

/// Find the span of a quoted string value at or after byte `from`.
///
/// Spans cover the text between the quotes.
fn find_value_span(src: &str, value: &str, from: usize) -> Option<SourceSpan> {
    let haystack = src.get(from..)?;

    for quote in ['"', '\''] {
        let pattern = format!("{quote}{value}{quote}");
        if let Some(pos) = haystack.find(&pattern) {
            return Some(SourceSpan::from((from + pos + 1, value.len())));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn parse(src: &str) -> Result<Manifest> {
        Manifest::from_str(src)
    }

    #[test]
    fn test_identifier_problem() {
        assert!(identifier_problem("createdAt").is_none());
        assert!(identifier_problem("_x1").is_none());
        assert!(identifier_problem("").is_some());
        assert!(identifier_problem("1st").is_some());
        assert!(identifier_problem("created-at").is_some());
    }

    #[test]
    fn test_find_value_span() {
        let src = "name = \"id\"\nname = \"id\"\n";
        let first = find_value_span(src, "id", 0).unwrap();
        assert_eq!(first.offset(), 8);
        assert_eq!(first.len(), 2);

        let second = find_value_span(src, "id", 10).unwrap();
        assert_eq!(second.offset(), 20);
        assert!(find_value_span(src, "missing", 0).is_none());
    }

    #[test]
    fn test_duplicate_constant_is_rejected() {
        let err = parse(
            r#"
            [[tables]]
            name = "user"

            [[tables.columns]]
            name = "created_at"
            type = "datetime"

            [[tables.columns]]
            name = "createdAt"
            type = "datetime"
            "#,
        )
        .unwrap_err();

        match *err {
            Error::Duplicate {
                kind,
                name,
                table,
                first,
                second,
                first_span,
                second_span,
                ..
            } => {
                assert_eq!(kind, "constant");
                assert_eq!(name, "CREATED_AT");
                assert_eq!(table, "user");
                assert_eq!(first, "created_at");
                assert_eq!(second, "createdAt");
                assert!(first_span.is_some());
                assert!(second_span.is_some());
            }
            other => panic!("expected duplicate error, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_method_is_rejected() {
        let err = parse(
            r#"
            [[tables]]
            name = "user"

            [[tables.columns]]
            name = "id"
            type = "integer"

            [[tables.columns]]
            name = "legacy_id"
            type = "integer"
            method = "id"
            "#,
        )
        .unwrap_err();

        assert!(matches!(*err, Error::Duplicate { ref kind, .. } if kind == "method"));
    }

    #[test]
    fn test_const_override_resolves_collision() {
        let manifest = parse(
            r#"
            [[tables]]
            name = "user"

            [[tables.columns]]
            name = "created_at"
            type = "datetime"

            [[tables.columns]]
            name = "createdAt"
            type = "datetime"
            const = "CREATED_AT_LEGACY"
            method = "createdAtLegacy"
            "#,
        );

        assert!(manifest.is_ok());
    }

    #[test]
    fn test_invalid_const_override() {
        let err = parse(
            r#"
            [[tables]]
            name = "user"

            [[tables.columns]]
            name = "id"
            type = "integer"
            const = "1D"
            "#,
        )
        .unwrap_err();

        match *err {
            Error::InvalidIdentifier { name, context, span, .. } => {
                assert_eq!(name, "1D");
                assert_eq!(context, "constant in table 'user'");
                assert!(span.is_some());
            }
            other => panic!("expected invalid identifier, got {other:?}"),
        }
    }

    #[test]
    fn test_class_constant_is_reserved() {
        let err = parse(
            r#"
            [[tables]]
            name = "course"

            [[tables.columns]]
            name = "class"
            type = "string"
            "#,
        )
        .unwrap_err();

        assert!(matches!(*err, Error::InvalidIdentifier { .. }));
    }

    #[test]
    fn test_duplicate_table_is_rejected() {
        let err = parse(
            r#"
            [[tables]]
            name = "user_account"

            [[tables]]
            name = "UserAccount"
            "#,
        )
        .unwrap_err();

        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_invalid_namespace() {
        let err = parse("[generator]\nnamespace = \"App Db\"\n").unwrap_err();

        match *err {
            Error::InvalidIdentifier { name, context, span, .. } => {
                assert_eq!(name, "App Db");
                assert_eq!(context, "namespace");
                assert!(span.is_some());
            }
            other => panic!("expected invalid identifier, got {other:?}"),
        }
    }

    #[test]
    fn test_namespace_forms() {
        assert!(parse("[generator]\nnamespace = 'App\\Db'\n").is_ok());
        assert!(parse("[generator]\nnamespace = '\\App\\Db\\'\n").is_ok());
        assert!(parse("[generator]\nnamespace = '\\'\n").is_ok());
        assert!(parse("[generator]\nnamespace = ''\n").is_ok());
        assert!(parse("[generator]\nnamespace = 'App\\\\Db'\n").is_err());
    }

    #[test]
    fn test_empty_table_name() {
        let err = parse("[[tables]]\nname = \"\"\n").unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_qualified_value_object_type() {
        let manifest = parse(
            r#"
            [[tables]]
            name = "user"

            [[tables.columns]]
            name = "status"
            type = "\\App\\Status"
            "#,
        );

        assert!(manifest.is_ok());
    }

    #[test]
    fn test_invalid_column_type() {
        let err = parse(
            r#"
            [[tables]]
            name = "user"

            [[tables.columns]]
            name = "status"
            type = "App Status"
            "#,
        )
        .unwrap_err();

        assert!(matches!(*err, Error::InvalidIdentifier { .. }));
    }

    #[test]
    fn test_invalid_type_getter() {
        let err = parse(
            r#"
            [types.money]
            returns = "Money"
            getter = "get-money"
            "#,
        )
        .unwrap_err();

        assert!(matches!(*err, Error::InvalidIdentifier { .. }));
    }
}
