use std::path::{Path, PathBuf};

use clap::Args;
use dqo_codegen_php::{Generator, LanguageCodegen, Renderer};
use dqo_core::{Overwrite, Table, is_qualified_name};
use dqo_manifest::DqoToml;
use eyre::{Context, Result, bail};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to dqo.toml (defaults to ./dqo.toml)
    #[arg(short, long, default_value = "dqo.toml")]
    pub config: PathBuf,

    /// Output directory (defaults to [generator].output)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Namespace of the generated classes (overrides [generator].namespace)
    #[arg(short, long)]
    pub namespace: Option<String>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Leave files that already exist untouched
    #[arg(long)]
    pub keep_existing: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let dqo_toml = DqoToml::open(&self.config).unwrap_or_exit();
        let manifest = dqo_toml.manifest();

        let renderer = Renderer::from_manifest(manifest);
        let renderer = match &self.namespace {
            Some(namespace) => renderer.on_namespace(check_namespace(namespace)?),
            None => renderer,
        };

        let tables = manifest.to_tables();
        if tables.is_empty() {
            eprintln!("warning: {} defines no tables", self.config.display());
        }

        let generator = Generator::new(&renderer, &tables);
        if self.dry_run {
            self.run_preview(&generator)
        } else {
            let output = self.output.clone().unwrap_or_else(|| dqo_toml.output_dir());
            self.run_generation(&generator, &tables, &output)
        }
    }

    fn run_generation(&self, generator: &Generator, tables: &[Table], output: &Path) -> Result<()> {
        let overwrite = if self.keep_existing {
            Overwrite::IfMissing
        } else {
            Overwrite::Always
        };

        tracing::info!(output = %output.display(), tables = tables.len(), "generating");
        let result = generator
            .generate(output, overwrite)
            .wrap_err("Failed to generate code")?;

        println!("Tables ({}):", tables.len());
        for table in tables {
            println!("  {} ({} columns)", table.name(), table.columns().len());
        }
        println!();

        println!("Generated: {}", output.display());
        for path in &result.written {
            println!("  + {}", path.display());
        }

        if !result.skipped.is_empty() {
            println!();
            println!("Kept existing:");
            for path in &result.skipped {
                println!("  = {}", path.display());
            }
        }

        Ok(())
    }

    fn run_preview(&self, generator: &Generator) -> Result<()> {
        let files = generator.preview();

        for file in &files {
            println!("── {} ──", file.path);
            println!("{}", file.content);
        }

        println!("── Summary ──");
        println!("{} files would be generated", files.len());

        Ok(())
    }
}

/// Accept a `--namespace` value that is a qualified name or the root `\`.
fn check_namespace(namespace: &str) -> Result<&str> {
    let path = namespace.trim_matches('\\');
    if !path.is_empty() && !is_qualified_name(path) {
        bail!("invalid namespace '{namespace}': each segment must be an identifier");
    }
    Ok(namespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_namespace() {
        assert_eq!(check_namespace("App\\Db").unwrap(), "App\\Db");
        assert_eq!(check_namespace("\\").unwrap(), "\\");
        assert!(check_namespace("App Db").is_err());
        assert!(check_namespace("App\\\\Db").is_err());
    }
}
