use dqo_codegen::{Line, Renderable};

use super::Namespace;

/// A PHP `use` import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Use(String);

impl Use {
    /// Import a fully qualified class, e.g. `GW\DQO\Table`.
    pub fn new(class: impl Into<String>) -> Self {
        Self(class.into())
    }

    fn format(&self) -> String {
        format!("use {};", self.0.trim_start_matches('\\'))
    }
}

/// The `<?php` opening tag, namespace declaration and imports of a file.
///
/// Renders as the opening tag, a blank line, `namespace <ns>;`, a blank
/// line, one line per import and a closing blank line. In the root
/// namespace the namespace declaration and its blank line are left out.
#[derive(Debug, Clone)]
pub struct FileHeader {
    namespace: Namespace,
    uses: Vec<Use>,
}

impl FileHeader {
    pub fn new(namespace: Namespace, uses: impl IntoIterator<Item = Use>) -> Self {
        Self {
            namespace,
            uses: uses.into_iter().collect(),
        }
    }
}

impl Renderable for FileHeader {
    fn to_lines(&self) -> Vec<Line> {
        let mut lines = vec![Line::body("<?php"), Line::blank()];

        if !self.namespace.is_root() {
            lines.push(Line::body(format!("namespace {};", self.namespace)));
            lines.push(Line::blank());
        }

        if !self.uses.is_empty() {
            lines.extend(self.uses.iter().map(|u| Line::body(u.format())));
            lines.push(Line::blank());
        }

        lines
    }
}
