use std::fmt;

/// A PHP namespace path such as `App\Db`.
///
/// Leading and trailing separators are dropped, so `\App\Db\` and
/// `App\Db` are the same namespace. An empty path (or a lone `\`) is the
/// root namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Namespace(String);

impl Namespace {
    pub fn new(path: impl AsRef<str>) -> Self {
        Self(path.as_ref().trim_matches('\\').to_string())
    }

    /// The global namespace.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            f.write_str("\\")
        } else {
            f.write_str(&self.0)
        }
    }
}

impl From<&str> for Namespace {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}
