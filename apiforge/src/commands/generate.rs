use std::path::PathBuf;

use apiforge_codegen_go::Generator;
use apiforge_ir::lower;
use apiforge_schema::Schema;
use clap::Args;
use eyre::{Context, Result};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the schema file (defaults to ./schema.json)
    #[arg(short = 'c', long, default_value = "schema.json")]
    pub config: PathBuf,

    /// Output directory for the generated project
    #[arg(short, long, default_value = "output")]
    pub output: PathBuf,

    /// Go module name of the generated project
    #[arg(short, long, default_value = "generated-api")]
    pub module: String,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let schema = Schema::from_file(&self.config).unwrap_or_exit();
        let project = lower(&schema);
        let generator = Generator::new(&project, &self.module);

        if self.dry_run {
            return Self::run_preview(&generator);
        }

        generator
            .generate(&self.output)
            .wrap_err("failed to generate project")?;

        // Summary
        println!(
            "Parsed {} (schema version {})",
            self.config.display(),
            schema.version
        );
        println!();
        println!("Tables ({}):", project.entities.len());
        for entity in &project.entities {
            if entity.description.is_empty() {
                println!(
                    "  {} ({} fields)",
                    entity.table_name,
                    entity.business_fields().count()
                );
            } else {
                println!(
                    "  {} ({}): {} fields",
                    entity.table_name,
                    entity.description,
                    entity.business_fields().count()
                );
            }
        }
        if !project.relations.is_empty() {
            println!("Relations: {}", project.relations.len());
        }
        println!();
        println!(
            "Generated {} files into {}/",
            generator.file_count(),
            self.output.display()
        );
        println!();
        println!("Next steps:");
        println!("  cd {}", self.output.display());
        println!("  go mod tidy");
        println!("  go run main.go");

        Ok(())
    }

    fn run_preview(generator: &Generator) -> Result<()> {
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
