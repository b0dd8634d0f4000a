use std::path::PathBuf;

use apiforge_schema::Schema;
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the schema file (defaults to ./schema.json)
    #[arg(short = 'c', long, default_value = "schema.json")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let schema = Schema::from_file(&self.config).unwrap_or_exit();

        let fields: usize = schema.tables.iter().map(|t| t.field_count()).sum();
        println!(
            "{} is valid: {} tables, {} fields, {} relations",
            self.config.display(),
            schema.tables.len(),
            fields,
            schema.relations.len()
        );

        Ok(())
    }
}
