//! Composite line tree.

use std::fmt;

use super::Indent;

/// One logical unit of generated source.
///
/// A `Body` is a single statement, or a blank separator line when it
/// carries no text. A `Block` renders its header followed by ` {`, each
/// child one level deeper, and a closing `}` at its own depth.
///
/// # Example
///
/// ```
/// use dqo_codegen::Line;
///
/// let method = Line::block(
///     "public function id(): int",
///     [Line::body("return $this->getInt(UserTable::ID);")],
/// );
///
/// assert_eq!(
///     method.render(1),
///     "    public function id(): int {\n        return $this->getInt(UserTable::ID);\n    }\n"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Line {
    /// A statement line, or a blank line for `None`.
    Body(Option<String>),
    /// A header with nested lines.
    Block { header: String, children: Vec<Line> },
}

impl Line {
    /// Create a statement line.
    pub fn body(text: impl Into<String>) -> Self {
        Self::Body(Some(text.into()))
    }

    /// Create a blank separator line.
    pub fn blank() -> Self {
        Self::Body(None)
    }

    /// Create a block from a header and its children.
    pub fn block(header: impl Into<String>, children: impl IntoIterator<Item = Line>) -> Self {
        Self::Block {
            header: header.into(),
            children: children.into_iter().collect(),
        }
    }

    /// Render at `depth` using the default indentation.
    pub fn render(&self, depth: usize) -> String {
        self.render_with(Indent::default(), depth)
    }

    /// Render at `depth` using `indent` for each level.
    pub fn render_with(&self, indent: Indent, depth: usize) -> String {
        let mut out = String::new();
        self.write(&mut out, indent, depth);
        out
    }

    fn write(&self, out: &mut String, indent: Indent, depth: usize) {
        match self {
            Self::Body(None) => out.push('\n'),
            Self::Body(Some(text)) => {
                indent.write(out, depth);
                out.push_str(text);
                out.push('\n');
            }
            Self::Block { header, children } => {
                indent.write(out, depth);
                out.push_str(header);
                out.push_str(" {\n");
                for child in children {
                    child.write(out, indent, depth + 1);
                }
                indent.write(out, depth);
                out.push_str("}\n");
            }
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(0))
    }
}
