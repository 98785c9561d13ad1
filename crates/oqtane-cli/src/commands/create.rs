use std::io::Write;

use anyhow::Result;

use oqtane_core::project::{self, ModulePlan, ModuleRequest};

use crate::output;

/// Resolve a new module from a solution template and show what it contains.
///
/// Validates the owner and module names, finds the solution, loads the
/// template manifest and prints every file path after token substitution.
/// Files are not written yet.
pub fn run(request: &ModuleRequest) -> Result<()> {
    let plan = project::plan_module(request)?;
    tracing::debug!(
        "planned {} file(s) from {}",
        plan.files.len(),
        plan.template_dir.display()
    );

    write_plan(&mut std::io::stdout().lock(), request, &plan)
}

fn write_plan(out: &mut impl Write, request: &ModuleRequest, plan: &ModulePlan) -> Result<()> {
    output::write_field(
        out,
        "Template",
        &format!("{} (v{})", plan.manifest.name, plan.manifest.version),
    )?;
    output::write_field(out, "Owner", &request.owner)?;
    output::write_field(out, "Module", &request.module)?;
    output::write_field(out, "Framework", &request.framework)?;
    if !request.description.trim().is_empty() {
        output::write_field(out, "Description", &request.description)?;
    }

    writeln!(out)?;
    output::write_header(out, "Files to be created:")?;
    for file in &plan.files {
        output::write_item(out, &file.relative_path)?;
    }

    if plan.overwrite {
        writeln!(out)?;
        output::write_note(out, "Existing files will be overwritten (--force).")?;
    }

    Ok(())
}
