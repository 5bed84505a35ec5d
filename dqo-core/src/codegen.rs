//! Language-agnostic code generation traits.

use std::path::{Path, PathBuf};

use eyre::Result;

use crate::Overwrite;

/// Trait for language-specific accessor generators.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "php")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "php")
    fn file_extension(&self) -> &'static str;

    /// Preview generated files without writing to disk
    fn preview(&self) -> Vec<PreviewFile>;

    /// Generate all files into the specified output directory
    fn generate(&self, output_dir: &Path, overwrite: Overwrite) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files that were written
    pub written: Vec<PathBuf>,
    /// Files left untouched because they already existed
    pub skipped: Vec<PathBuf>,
}

/// A generated file for preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}
