//! Renderable trait for decoupled code generation.
//!
//! Anything that can describe itself as a sequence of [`Line`]s can be
//! rendered and concatenated with other nodes without knowing how lines
//! are serialized.

use super::{Indent, Line};

/// Trait for types that lower to a sequence of lines.
pub trait Renderable {
    /// Convert this node to the lines it renders as.
    fn to_lines(&self) -> Vec<Line>;

    /// Render every line at depth zero with the given indentation.
    fn render_with(&self, indent: Indent) -> String {
        self.to_lines()
            .iter()
            .map(|line| line.render_with(indent, 0))
            .collect()
    }
}

impl Renderable for Line {
    fn to_lines(&self) -> Vec<Line> {
        vec![self.clone()]
    }
}

/// Blanket implementation for references.
impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_lines(&self) -> Vec<Line> {
        (*self).to_lines()
    }
}

/// Blanket implementation for slices, rendered back to back.
impl<T: Renderable> Renderable for [T] {
    fn to_lines(&self) -> Vec<Line> {
        self.iter().flat_map(Renderable::to_lines).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Preamble;

    impl Renderable for Preamble {
        fn to_lines(&self) -> Vec<Line> {
            vec![Line::body("<?php"), Line::blank()]
        }
    }

    #[test]
    fn test_render_custom_node() {
        assert_eq!(Preamble.render_with(Indent::PHP), "<?php\n\n");
    }

    #[test]
    fn test_line_is_renderable() {
        let line = Line::block("a", [Line::body("b;")]);
        assert_eq!(line.to_lines(), vec![line.clone()]);
        assert_eq!(Renderable::render_with(&line, Indent::PHP), "a {\n    b;\n}\n");
    }

    #[test]
    fn test_slice_renders_in_order() {
        let lines = [Line::body("first;"), Line::blank(), Line::body("second;")];
        assert_eq!(lines[..].render_with(Indent::PHP), "first;\n\nsecond;\n");
    }
}
