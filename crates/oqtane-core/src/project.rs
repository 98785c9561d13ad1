//! Module scaffolding plans and template listings.
//!
//! Ties the solution locator, template resolver, manifest loader and token
//! engine together for the two CLI commands. Nothing here writes to disk:
//! [`plan_module`] produces a [`ModulePlan`] describing every file a
//! [`Materializer`](crate::materialize::Materializer) would create.
//!
//! ## Layout
//!
//! ```text
//! <solution>/
//! ├── Oqtane.slnx
//! └── Oqtane.Server/wwwroot/Modules/Templates/
//!     ├── Internal/
//!     │   ├── template.json
//!     │   └── [Owner].[Module].Client/...
//!     └── External/
//!         └── template.json
//! ```
//!
//! Generated files land under the solution root at the token-substituted
//! template path.

use std::path::{Path, PathBuf};

use crate::config::{DEFAULT_FRAMEWORK, DEFAULT_TEMPLATE};
use crate::error::{OqtaneError, Result};
use crate::naming::{validate_name, NameField};
use crate::solution::find_solution_directory;
use crate::templates::manifest::{self, DiscoveredTemplate, TemplateManifest};
use crate::templates::tokens::{self, TokenTable};
use crate::templates::template_path;

/// Everything `module create` needs from the command line.
#[derive(Debug, Clone)]
pub struct ModuleRequest {
    pub owner: String,
    pub module: String,
    pub template: String,
    pub description: String,
    pub solution: PathBuf,
    pub framework: String,
    pub force: bool,
}

impl ModuleRequest {
    /// A request with the CLI defaults for everything but owner and name.
    pub fn new(owner: impl Into<String>, module: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            module: module.into(),
            template: DEFAULT_TEMPLATE.into(),
            description: String::new(),
            solution: PathBuf::from("."),
            framework: DEFAULT_FRAMEWORK.into(),
            force: false,
        }
    }
}

/// One file of a [`ModulePlan`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    /// Path as written in the manifest, tokens included.
    pub template_path: String,
    /// Manifest path after token substitution.
    pub relative_path: String,
    /// Template file to read content from.
    pub source: PathBuf,
    /// Where the generated file goes.
    pub destination: PathBuf,
}

/// The resolved outcome of `module create`, ready for a materializer.
#[derive(Debug, Clone)]
pub struct ModulePlan {
    pub solution_root: PathBuf,
    pub template_dir: PathBuf,
    pub manifest: TemplateManifest,
    pub tokens: TokenTable,
    pub files: Vec<PlannedFile>,
    /// Replace existing destination files instead of skipping them.
    pub overwrite: bool,
}

impl ModulePlan {
    /// Read `file`'s template source and substitute tokens in it.
    pub fn render(&self, file: &PlannedFile) -> Result<String> {
        let raw = std::fs::read_to_string(&file.source)?;
        Ok(tokens::replace_tokens(&raw, &self.tokens))
    }
}

/// Templates available in a solution.
#[derive(Debug, Clone)]
pub struct TemplateListing {
    pub solution_root: PathBuf,
    pub templates: Vec<DiscoveredTemplate>,
}

/// Like [`find_solution_directory`], but a missing solution is an error.
pub fn locate_solution(start: &Path) -> Result<PathBuf> {
    find_solution_directory(start)?.ok_or_else(|| OqtaneError::SolutionNotFound {
        start: start.to_path_buf(),
    })
}

/// Validate `request` and resolve every file the module would produce.
pub fn plan_module(request: &ModuleRequest) -> Result<ModulePlan> {
    validate_name(NameField::Owner, &request.owner)?;
    validate_name(NameField::Module, &request.module)?;

    let solution_root = locate_solution(&request.solution)?;
    tracing::info!("using solution at {}", solution_root.display());

    let template_dir = template_path(&solution_root, &request.template)?;
    if !template_dir.is_dir() {
        return Err(OqtaneError::TemplateDirNotFound(template_dir));
    }

    let manifest = manifest::load(&template_dir)?;
    tracing::info!(
        "loaded template '{}' v{} ({} files)",
        manifest.name,
        manifest.version,
        manifest.files.len()
    );

    let tokens = tokens::generate_tokens(
        &request.owner,
        &request.module,
        &request.description,
        &request.framework,
    );

    let files = manifest
        .files
        .iter()
        .map(|file| {
            let relative_path = tokens::replace_tokens_in_path(&file.path, &tokens);
            PlannedFile {
                template_path: file.path.clone(),
                source: template_dir.join(&file.path),
                destination: solution_root.join(&relative_path),
                relative_path,
            }
        })
        .collect();

    Ok(ModulePlan {
        solution_root,
        template_dir,
        manifest,
        tokens,
        files,
        overwrite: request.force,
    })
}

/// Find the solution above `start` and enumerate its templates.
pub fn list_templates(start: &Path) -> Result<TemplateListing> {
    let solution_root = locate_solution(start)?;
    let templates = manifest::enumerate(&solution_root)?;
    tracing::info!(
        "found {} template(s) in {}",
        templates.len(),
        solution_root.display()
    );
    Ok(TemplateListing {
        solution_root,
        templates,
    })
}
