use std::path::PathBuf;

use clap::{Args, ValueEnum};
use dqo_codegen_php::Renderer;
use dqo_manifest::DqoToml;
use eyre::{Result, bail};

use super::UnwrapOrExit;

/// Which generated unit to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    /// The <Name>Table descriptor
    Descriptor,
    /// The <Name>Row accessor class
    Row,
}

#[derive(Args)]
pub struct RenderCommand {
    /// Table name or class prefix
    pub table: String,

    /// Path to dqo.toml (defaults to ./dqo.toml)
    #[arg(short, long, default_value = "dqo.toml")]
    pub config: PathBuf,

    /// Print only one unit (both by default)
    #[arg(short, long, value_enum)]
    pub kind: Option<Kind>,
}

impl RenderCommand {
    pub fn run(&self) -> Result<()> {
        let dqo_toml = DqoToml::open(&self.config).unwrap_or_exit();
        let manifest = dqo_toml.manifest();

        let Some(def) = manifest.table(&self.table) else {
            bail!(
                "table '{}' is not defined in {}",
                self.table,
                self.config.display()
            );
        };

        let renderer = Renderer::from_manifest(manifest);
        let table = def.to_table();

        if self.kind != Some(Kind::Row) {
            print!("{}", renderer.render_descriptor_file(&table));
        }
        if self.kind.is_none() {
            println!();
        }
        if self.kind != Some(Kind::Descriptor) {
            print!("{}", renderer.render_row_file(&table));
        }

        Ok(())
    }
}
