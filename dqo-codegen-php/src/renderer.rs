//! Table descriptor and row class rendering.

use dqo_codegen::{Indent, Line, Renderable};
use dqo_core::{Column, Table};
use dqo_manifest::Manifest;

use crate::{
    file::{FileHeader, Namespace, Use},
    type_map::{Accessor, TypeMap},
};

/// Base class of generated table descriptors.
pub const DESCRIPTOR_BASE: &str = "GW\\DQO\\Table";
/// Base class of generated row accessors.
pub const ROW_BASE: &str = "GW\\DQO\\TableRow";

/// Class name of the descriptor generated for `table`.
pub fn descriptor_class_name(table: &Table) -> String {
    format!("{}Table", table.name())
}

/// Class name of the row accessor generated for `table`.
pub fn row_class_name(table: &Table) -> String {
    format!("{}Row", table.name())
}

/// Renders the descriptor and row PHP files of a table.
///
/// A renderer is immutable: [`Renderer::on_namespace`] and
/// [`Renderer::with_types`] return a reconfigured copy.
///
/// # Example
///
/// ```
/// use dqo_codegen_php::Renderer;
/// use dqo_core::{Column, Table};
///
/// let table = Table::new("User").column(Column::new("id", "integer"));
/// let row = Renderer::default().on_namespace("App\\Db").render_row_file(&table);
///
/// assert!(row.contains("public function id(): int {"));
/// assert!(row.contains("return $this->getInt(UserTable::ID);"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    namespace: Namespace,
    types: TypeMap,
    indent: Indent,
}

impl Renderer {
    pub fn new(namespace: impl Into<Namespace>) -> Self {
        Self {
            namespace: namespace.into(),
            ..Self::default()
        }
    }

    /// A renderer configured by the manifest's namespace and `[types]`.
    pub fn from_manifest(manifest: &Manifest) -> Self {
        Self::new(manifest.generator.namespace()).with_types(TypeMap::from(manifest))
    }

    /// A renderer emitting into `namespace`.
    pub fn on_namespace(&self, namespace: impl Into<Namespace>) -> Self {
        Self {
            namespace: namespace.into(),
            ..self.clone()
        }
    }

    /// A renderer resolving column types through `types`.
    pub fn with_types(&self, types: TypeMap) -> Self {
        Self {
            types,
            ..self.clone()
        }
    }

    /// A renderer indenting with `indent`.
    pub fn with_indent(&self, indent: Indent) -> Self {
        Self {
            indent,
            ..self.clone()
        }
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    pub fn types(&self) -> &TypeMap {
        &self.types
    }

    /// Render `<Name>Table`: one constant per column holding its raw name,
    /// then one accessor per column returning the field path.
    pub fn render_descriptor_file(&self, table: &Table) -> String {
        tracing::debug!(
            table = table.name(),
            columns = table.columns().len(),
            namespace = %self.namespace,
            "rendering descriptor"
        );

        let header = FileHeader::new(self.namespace.clone(), [Use::new(DESCRIPTOR_BASE)]);
        self.render_file(&header, &self.descriptor_class(table))
    }

    /// Render `<Name>Row`: one typed accessor per column.
    pub fn render_row_file(&self, table: &Table) -> String {
        tracing::debug!(
            table = table.name(),
            columns = table.columns().len(),
            namespace = %self.namespace,
            "rendering row"
        );

        let header = FileHeader::new(self.namespace.clone(), [Use::new(ROW_BASE)]);
        self.render_file(&header, &self.row_class(table))
    }

    /// The descriptor class declaration as a line tree.
    pub fn descriptor_class(&self, table: &Table) -> Line {
        let constants = table.columns().iter().map(|column| {
            Line::body(format!(
                "public const {} = {};",
                column.name_const(),
                php_string(column.db_name())
            ))
        });

        let accessors = table.columns().iter().map(|column| {
            Line::block(
                format!("public function {}(): string", column.method_name()),
                [Line::body(format!(
                    "return $this->fieldPath(self::{});",
                    column.name_const()
                ))],
            )
        });

        Line::block(
            format!(
                "final class {} extends {}",
                descriptor_class_name(table),
                short_name(DESCRIPTOR_BASE)
            ),
            constants.chain([Line::blank()]).chain(accessors),
        )
    }

    /// The row class declaration as a line tree.
    pub fn row_class(&self, table: &Table) -> Line {
        let accessors = table.columns().iter().map(|column| {
            Line::block(
                format!(
                    "public function {}(): {}",
                    column.method_name(),
                    self.type_def(column)
                ),
                [Line::body(self.value_return(table, column))],
            )
        });

        Line::block(
            format!(
                "final class {} extends {}",
                row_class_name(table),
                short_name(ROW_BASE)
            ),
            accessors,
        )
    }

    /// Return type annotation of the accessor for `column`.
    pub fn type_def(&self, column: &Column) -> String {
        match self.types.accessor(column) {
            Accessor::Mapped(mapping) => mapping.return_type().to_string(),
            Accessor::ValueObject {
                class,
                optional: true,
            } => format!("?{}", class),
            Accessor::ValueObject { class, .. } => class.to_string(),
        }
    }

    /// Body statement of the accessor for `column`.
    pub fn value_return(&self, table: &Table, column: &Column) -> String {
        let constant = format!("{}::{}", descriptor_class_name(table), column.name_const());

        match self.types.accessor(column) {
            Accessor::Mapped(mapping) => {
                format!("return $this->{}({});", mapping.getter(), constant)
            }
            Accessor::ValueObject {
                class,
                optional: true,
            } => format!(
                "return $this->getThrough([{}::class, 'from'], {});",
                class, constant
            ),
            Accessor::ValueObject { class, .. } => {
                format!("return {}::from($this->getString({}));", class, constant)
            }
        }
    }

    fn render_file(&self, header: &FileHeader, class: &Line) -> String {
        let mut out = header.render_with(self.indent);
        out.push_str(&class.render_with(self.indent, 0));
        out
    }
}

fn short_name(class: &str) -> &str {
    class.rsplit('\\').next().unwrap_or(class)
}

/// Single-quoted PHP string literal.
fn php_string(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}
