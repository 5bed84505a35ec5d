use std::path::Path;

use dqo_core::{File, GenerateResult, LanguageCodegen, Overwrite, PreviewFile, Table, WriteResult};
use eyre::Result;

use crate::{Renderer, descriptor_class_name, row_class_name};

/// PHP generator producing a descriptor and a row class per table.
///
/// Files are named after their classes, `<Name>Table.php` and
/// `<Name>Row.php`, directly under the output directory.
pub struct Generator<'a> {
    renderer: &'a Renderer,
    tables: &'a [Table],
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "php"
    }

    fn file_extension(&self) -> &'static str {
        "php"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        self.tables
            .iter()
            .flat_map(|table| self.table_files(table))
            .collect()
    }

    fn generate(&self, output_dir: &Path, overwrite: Overwrite) -> Result<GenerateResult> {
        let mut result = GenerateResult::default();

        for preview in self.preview() {
            let file =
                File::new(output_dir.join(&preview.path), preview.content).overwrite(overwrite);
            let path = file.path().to_path_buf();
            match file.write()? {
                WriteResult::Written => result.written.push(path),
                WriteResult::Skipped => result.skipped.push(path),
            }
        }

        tracing::debug!(
            written = result.written.len(),
            skipped = result.skipped.len(),
            "generation finished"
        );
        Ok(result)
    }
}

impl<'a> Generator<'a> {
    pub fn new(renderer: &'a Renderer, tables: &'a [Table]) -> Self {
        Self { renderer, tables }
    }

    fn table_files(&self, table: &Table) -> [PreviewFile; 2] {
        [
            PreviewFile {
                path: format!("{}.{}", descriptor_class_name(table), self.file_extension()),
                content: self.renderer.render_descriptor_file(table),
            },
            PreviewFile {
                path: format!("{}.{}", row_class_name(table), self.file_extension()),
                content: self.renderer.render_row_file(table),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use dqo_core::Column;
    use tempfile::TempDir;

    use super::*;

    fn tables() -> Vec<Table> {
        vec![
            Table::new("User").column(Column::new("id", "integer")),
            Table::new("Order").column(Column::new("total", "Money")),
        ]
    }

    #[test]
    fn test_preview_paths() {
        let renderer = Renderer::new("App\\Db");
        let tables = tables();
        let generator = Generator::new(&renderer, &tables);

        let paths: Vec<_> = generator.preview().into_iter().map(|f| f.path).collect();
        assert_eq!(
            paths,
            ["UserTable.php", "UserRow.php", "OrderTable.php", "OrderRow.php"]
        );
    }

    #[test]
    fn test_preview_matches_renderer() {
        let renderer = Renderer::new("App\\Db");
        let tables = tables();
        let files = Generator::new(&renderer, &tables).preview();

        assert_eq!(files[0].content, renderer.render_descriptor_file(&tables[0]));
        assert_eq!(files[3].content, renderer.render_row_file(&tables[1]));
    }

    #[test]
    fn test_generate_writes_files() {
        let temp = TempDir::new().unwrap();
        let renderer = Renderer::default();
        let tables = tables();
        let generator = Generator::new(&renderer, &tables);

        let result = generator.generate(temp.path(), Overwrite::Always).unwrap();

        assert_eq!(result.written.len(), 4);
        assert!(result.skipped.is_empty());
        let row = fs::read_to_string(temp.path().join("OrderRow.php")).unwrap();
        assert!(row.contains("return Money::from($this->getString(OrderTable::TOTAL));"));
    }

    #[test]
    fn test_generate_keeps_existing_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("UserRow.php"), "custom").unwrap();

        let renderer = Renderer::default();
        let tables = tables();
        let result = Generator::new(&renderer, &tables)
            .generate(temp.path(), Overwrite::IfMissing)
            .unwrap();

        assert_eq!(result.written.len(), 3);
        assert_eq!(result.skipped, [temp.path().join("UserRow.php")]);
        assert_eq!(
            fs::read_to_string(temp.path().join("UserRow.php")).unwrap(),
            "custom"
        );
    }
}
