//! Column type policy: which return type and getter an accessor uses.
//!
//! Built-in types map to a PHP scalar (or `\DateTimeImmutable`) and the
//! matching `TableRow` getter. Every other type name is treated as a value
//! object class exposing a static `from(string)` factory.

use dqo_core::Column;
use dqo_manifest::Manifest;
use indexmap::IndexMap;

/// Return type and `TableRow` getter for a known column type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeMapping {
    return_type: String,
    getter: String,
}

impl TypeMapping {
    pub fn new(return_type: impl Into<String>, getter: impl Into<String>) -> Self {
        Self {
            return_type: return_type.into(),
            getter: getter.into(),
        }
    }

    /// PHP return type annotation, e.g. `int`.
    pub fn return_type(&self) -> &str {
        &self.return_type
    }

    /// `TableRow` method reading the raw value, e.g. `getInt`.
    pub fn getter(&self) -> &str {
        &self.getter
    }
}

/// How an accessor retrieves one column's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accessor<'a> {
    /// A registered type read through a dedicated getter.
    Mapped(&'a TypeMapping),
    /// A value object built with `<class>::from(...)`.
    ValueObject { class: &'a str, optional: bool },
}

/// Lookup table from declared column type to its [`TypeMapping`].
///
/// [`TypeMap::default`] holds the built-in DBAL types. Extend it with
/// [`TypeMap::with`]; later registrations replace earlier ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMap {
    mappings: IndexMap<String, TypeMapping>,
}

impl TypeMap {
    /// A map without any registered type; every column is a value object.
    pub fn empty() -> Self {
        Self {
            mappings: IndexMap::new(),
        }
    }

    /// Register `ty`, returning the extended map.
    pub fn with(mut self, ty: impl Into<String>, mapping: TypeMapping) -> Self {
        self.insert(ty, mapping);
        self
    }

    /// Register `ty` in place.
    pub fn insert(&mut self, ty: impl Into<String>, mapping: TypeMapping) {
        self.mappings.insert(ty.into(), mapping);
    }

    pub fn get(&self, ty: &str) -> Option<&TypeMapping> {
        self.mappings.get(ty)
    }

    pub fn contains(&self, ty: &str) -> bool {
        self.mappings.contains_key(ty)
    }

    /// Registered type names in registration order.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.mappings.keys().map(String::as_str)
    }

    /// Resolve how `column` is read.
    pub fn accessor<'a>(&'a self, column: &'a Column) -> Accessor<'a> {
        match self.get(column.ty()) {
            Some(mapping) => Accessor::Mapped(mapping),
            None => Accessor::ValueObject {
                class: column.ty(),
                optional: column.optional(),
            },
        }
    }
}

impl Default for TypeMap {
    fn default() -> Self {
        let int = TypeMapping::new("int", "getInt");
        let string = TypeMapping::new("string", "getString");
        let datetime = TypeMapping::new("\\DateTimeImmutable", "getDateTimeImmutable");
        let bool = TypeMapping::new("bool", "getBool");

        Self::empty()
            .with("integer", int.clone())
            .with("smallint", int)
            .with("string", string.clone())
            .with("text", string)
            .with("datetime", datetime.clone())
            .with("datetime_immutable", datetime.clone())
            .with("DateTimeImmutable", datetime)
            .with("boolean", bool)
    }
}

/// Built-in types extended with the manifest's `[types]` entries.
impl From<&Manifest> for TypeMap {
    fn from(manifest: &Manifest) -> Self {
        manifest
            .types
            .iter()
            .fold(Self::default(), |types, (name, def)| {
                types.with(name, TypeMapping::new(&def.returns, &def.getter))
            })
    }
}
