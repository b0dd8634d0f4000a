use std::path::Path;

use apiforge_core::{GeneratedFile, PreviewFile};
use apiforge_ir::{Entity, Project};
use eyre::{Context, Result};

use crate::files::{
    CorsGo, DatabaseGo, GoMod, HandlerGo, LoggerGo, MainGo, ModelGo, RepositoryGo, ResponseGo,
    RouterGo, UtilsGo,
};

/// The layer directories scaffolded before any file is written.
const LAYER_DIRS: &[&str] = &[
    "models",
    "database",
    "handlers",
    "router",
    "middleware",
    "utils",
];

/// Emits the full Go project for a lowered schema.
///
/// Stages run in a fixed order (manifest, models, persistence, handlers,
/// middleware and routes, entrypoint); the first failing write aborts the
/// run. Files already written by earlier stages are not rolled back; the
/// tool is always re-run from scratch.
pub struct Generator<'a> {
    project: &'a Project,
    module: &'a str,
}

impl<'a> Generator<'a> {
    pub fn new(project: &'a Project, module: &'a str) -> Self {
        Self { project, module }
    }

    /// Every artifact in emission order.
    fn artifacts(&self) -> Vec<Box<dyn GeneratedFile + 'a>> {
        let entities: &'a [Entity] = &self.project.entities;
        let module = self.module;

        let mut files: Vec<Box<dyn GeneratedFile + 'a>> = Vec::new();

        // Project manifest
        files.push(Box::new(GoMod::new(module)));

        // Model layer
        for entity in entities {
            files.push(Box::new(ModelGo::new(entity)));
        }

        // Persistence layer
        files.push(Box::new(DatabaseGo::new(entities, module)));
        for entity in entities {
            files.push(Box::new(RepositoryGo::new(entity, module)));
        }

        // Handler layer
        files.push(Box::new(ResponseGo));
        for entity in entities {
            files.push(Box::new(HandlerGo::new(entity, module)));
        }

        // Middleware, routes, entrypoint
        files.push(Box::new(CorsGo));
        files.push(Box::new(LoggerGo));
        files.push(Box::new(RouterGo::new(entities, module)));
        files.push(Box::new(MainGo::new(entities, module)));
        files.push(Box::new(UtilsGo));

        files
    }

    /// Render every artifact without touching disk.
    pub fn preview(&self) -> Vec<PreviewFile> {
        self.artifacts()
            .iter()
            .map(|artifact| PreviewFile {
                path: artifact.path(Path::new("")).display().to_string(),
                content: artifact.render(),
            })
            .collect()
    }

    /// Generate the project into `output_dir`.
    pub fn generate(&self, output_dir: &Path) -> Result<()> {
        for dir in LAYER_DIRS {
            std::fs::create_dir_all(output_dir.join(dir))
                .wrap_err_with(|| format!("failed to create directory '{dir}'"))?;
        }

        for artifact in self.artifacts() {
            let rel = artifact.path(Path::new(""));
            artifact
                .write(output_dir)
                .wrap_err_with(|| format!("failed to write '{}'", rel.display()))?;
        }

        Ok(())
    }

    /// Number of files the generator emits for this project.
    pub fn file_count(&self) -> usize {
        self.artifacts().len()
    }
}
