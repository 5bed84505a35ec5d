use std::path::PathBuf;

use clap::Args;
use dqo_codegen_php::{Renderer, descriptor_class_name, row_class_name};
use dqo_manifest::DqoToml;
use eyre::Result;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to dqo.toml (defaults to ./dqo.toml)
    #[arg(short, long, default_value = "dqo.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let dqo_toml = DqoToml::open(&self.config).unwrap_or_exit();
        let manifest = dqo_toml.manifest();
        let renderer = Renderer::from_manifest(manifest);

        println!("✓ {} is valid\n", self.config.display());
        println!("  namespace: {}", renderer.namespace());
        println!("  output:    {}", dqo_toml.output_dir().display());

        let types: Vec<_> = renderer.types().types().collect();
        println!("  types:     {}", types.join(", "));
        println!();

        let tables = manifest.to_tables();
        println!(
            "  {} table{}:",
            tables.len(),
            if tables.len() == 1 { "" } else { "s" }
        );
        for table in &tables {
            println!(
                "    {} -> {}, {}",
                table.name(),
                descriptor_class_name(table),
                row_class_name(table)
            );
            for column in table.columns() {
                println!(
                    "      {}: {}{} ({}, {}())",
                    column.db_name(),
                    if column.optional() { "?" } else { "" },
                    column.ty(),
                    column.name_const(),
                    column.method_name()
                );
            }
        }

        Ok(())
    }
}
