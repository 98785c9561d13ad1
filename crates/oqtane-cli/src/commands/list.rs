use std::io::Write;
use std::path::Path;

use anyhow::Result;

use oqtane_core::project::{self, TemplateListing};

use crate::output;

/// List the module templates available in the solution above `solution`.
///
/// Templates whose manifest is missing or unreadable are left out rather
/// than failing the whole listing.
pub fn run(solution: &Path) -> Result<()> {
    let listing = project::list_templates(solution)?;
    write_listing(&mut std::io::stdout().lock(), &listing)
}

fn write_listing(out: &mut impl Write, listing: &TemplateListing) -> Result<()> {
    if listing.templates.is_empty() {
        output::write_note(out, "No module templates found.")?;
        return Ok(());
    }

    output::write_header(out, "Available Module Templates:")?;
    for template in &listing.templates {
        output::write_item(
            out,
            &format!("{:<12} {}", template.template_type, template.manifest.name),
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::{mock_solution, write_template};
    use oqtane_core::config::{templates_root, MANIFEST_FILE_NAME};

    fn render(solution: &Path) -> String {
        let listing = project::list_templates(solution).unwrap();
        let mut out = Vec::new();
        write_listing(&mut out, &listing).unwrap();
        console::strip_ansi_codes(&String::from_utf8(out).unwrap()).into_owned()
    }

    #[test]
    fn test_list_valid_solution() {
        let sln = mock_solution();
        assert!(run(sln.path()).is_ok());
        assert_eq!(
            render(sln.path()),
            "Available Module Templates:\n\
             \x20 external     External Module Template\n\
             \x20 internal     Internal Module Template\n"
        );
    }

    #[test]
    fn test_list_from_subdirectory() {
        let sln = mock_solution();
        let nested = sln.path().join("Oqtane.Server");
        assert!(render(&nested).starts_with("Available Module Templates:\n"));
    }

    #[test]
    fn test_list_no_templates() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Oqtane.sln"), "").unwrap();
        assert_eq!(render(dir.path()), "No module templates found.\n");
    }

    #[test]
    fn test_list_skips_invalid_manifest() {
        let sln = mock_solution();
        let internal = templates_root(sln.path()).join("Internal");
        std::fs::write(internal.join(MANIFEST_FILE_NAME), "{ broken").unwrap();

        let text = render(sln.path());
        assert!(text.contains("  external     External Module Template\n"));
        assert!(!text.contains("internal"));
    }

    #[test]
    fn test_list_custom_template_dir() {
        let sln = mock_solution();
        write_template(sln.path(), "Custom", "Custom Module Template");
        assert!(render(sln.path()).contains("  custom       Custom Module Template\n"));
    }

    #[test]
    fn test_list_without_solution() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(dir.path()).unwrap_err();
        assert!(format!("{err:#}").contains("Cannot find Oqtane solution"));
    }
}
