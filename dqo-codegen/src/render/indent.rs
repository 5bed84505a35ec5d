//! Indentation configuration for rendered lines.

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width per level.
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation (PSR-12).
    pub const PHP: Self = Self::Spaces(4);

    /// Push one indent level onto `out`.
    pub fn push_level(&self, out: &mut String) {
        match *self {
            Self::Spaces(width) => out.extend(std::iter::repeat_n(' ', usize::from(width))),
            Self::Tab => out.push('\t'),
        }
    }

    /// Push `depth` indent levels onto `out`.
    pub fn write(&self, out: &mut String, depth: usize) {
        for _ in 0..depth {
            self.push_level(out);
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::PHP
    }
}
