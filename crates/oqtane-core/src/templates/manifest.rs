//! `template.json` parsing and template discovery.
//!
//! There are two entry points with deliberately different failure policies:
//! [`load`] is strict and reports every problem with the one template it was
//! asked for, while [`enumerate`] is used for browsing and skips any template
//! it cannot read so one broken directory never hides the others.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};

use crate::config::{self, MANIFEST_FILE_NAME};
use crate::error::{OqtaneError, Result};

/// Metadata and file list declared by a template's `template.json`.
///
/// Every field is optional in the file and falls back to an empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateManifest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub version: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub owner: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub module: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub files: Vec<TemplateFile>,
}

/// One file the template produces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateFile {
    /// Path relative to the template directory; may contain tokens.
    #[serde(default, deserialize_with = "null_as_default")]
    pub path: String,
    /// Tokens the file is expected to use. Informational only.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tokens: Vec<String>,
}

/// A template found by [`enumerate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredTemplate {
    /// Lower-cased directory name, e.g. `internal`.
    pub template_type: String,
    pub directory: PathBuf,
    pub manifest: TemplateManifest,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Load `template.json` from `template_dir`.
///
/// Fails with [`OqtaneError::ManifestNotFound`] if the file is missing and
/// [`OqtaneError::ManifestParse`] if it is not a JSON object of the expected
/// shape. A manifest with every field missing is still valid.
pub fn load(template_dir: &Path) -> Result<TemplateManifest> {
    let path = template_dir.join(MANIFEST_FILE_NAME);
    if !path.is_file() {
        return Err(OqtaneError::ManifestNotFound { path });
    }

    let contents = std::fs::read_to_string(&path)?;
    serde_json::from_str(&contents).map_err(|source| OqtaneError::ManifestParse { path, source })
}

/// List every loadable template under the solution's templates root.
///
/// A missing templates root yields an empty list. Subdirectories without a
/// manifest, or whose manifest fails to load, are left out. Entries are
/// sorted by type.
pub fn enumerate(solution_root: &Path) -> Result<Vec<DiscoveredTemplate>> {
    let root = config::templates_root(solution_root);
    if !root.is_dir() {
        tracing::debug!("no templates root at {}", root.display());
        return Ok(Vec::new());
    }

    let mut found = Vec::new();
    for entry in std::fs::read_dir(&root)? {
        let directory = entry?.path();
        if !directory.is_dir() || !directory.join(MANIFEST_FILE_NAME).is_file() {
            continue;
        }

        match load(&directory) {
            Ok(manifest) => {
                let template_type = directory
                    .file_name()
                    .map(|name| name.to_string_lossy().to_lowercase())
                    .unwrap_or_default();
                found.push(DiscoveredTemplate {
                    template_type,
                    directory,
                    manifest,
                });
            }
            Err(e) => {
                tracing::debug!("skipping template at {}: {e}", directory.display());
            }
        }
    }

    found.sort_by(|a, b| a.template_type.cmp(&b.template_type));
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const VALID: &str = r#"{
        "name": "Internal Module Template",
        "version": "1.0.0",
        "owner": "Default",
        "module": "Template",
        "description": "Internal module template",
        "files": [
            { "path": "[Owner].[Module].Client/Module.cs", "tokens": ["[Owner]", "[Module]"] },
            { "path": "[Owner].[Module].Server/Controllers/[Module]Controller.cs", "tokens": ["[Guid]"] }
        ]
    }"#;

    fn write_template(solution: &Path, dir_name: &str, manifest: Option<&str>) -> PathBuf {
        let dir = config::templates_root(solution).join(dir_name);
        std::fs::create_dir_all(&dir).unwrap();
        if let Some(contents) = manifest {
            std::fs::write(dir.join(MANIFEST_FILE_NAME), contents).unwrap();
        }
        dir
    }

    #[test]
    fn test_load_valid_manifest() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MANIFEST_FILE_NAME), VALID).unwrap();

        let manifest = load(dir.path()).unwrap();
        assert_eq!(manifest.name, "Internal Module Template");
        assert_eq!(manifest.version, "1.0.0");
        assert_eq!(manifest.owner, "Default");
        assert_eq!(manifest.module, "Template");
        assert_eq!(manifest.files.len(), 2);
        assert_eq!(manifest.files[0].path, "[Owner].[Module].Client/Module.cs");
        assert_eq!(manifest.files[1].tokens, vec!["[Guid]".to_string()]);
    }

    #[test]
    fn test_load_missing_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(dir.path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.to_string().contains(MANIFEST_FILE_NAME));
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MANIFEST_FILE_NAME), "{ invalid json }").unwrap();

        let err = load(dir.path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Malformed);
        assert!(err.to_string().starts_with("Invalid template manifest"));
    }

    #[test]
    fn test_load_wrong_shape() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MANIFEST_FILE_NAME), r#"{ "files": "nope" }"#).unwrap();
        assert_eq!(load(dir.path()).unwrap_err().kind(), ErrorKind::Malformed);

        std::fs::write(dir.path().join(MANIFEST_FILE_NAME), "null").unwrap();
        assert_eq!(load(dir.path()).unwrap_err().kind(), ErrorKind::Malformed);
    }

    #[test]
    fn test_load_empty_object_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MANIFEST_FILE_NAME), "{}").unwrap();

        let manifest = load(dir.path()).unwrap();
        assert_eq!(manifest, TemplateManifest::default());
    }

    #[test]
    fn test_load_nulls_and_unknown_fields() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(MANIFEST_FILE_NAME),
            r#"{ "name": null, "files": [ { "path": "a.cs", "tokens": null } ], "extra": 1 }"#,
        )
        .unwrap();

        let manifest = load(dir.path()).unwrap();
        assert_eq!(manifest.name, "");
        assert_eq!(manifest.files[0].path, "a.cs");
        assert!(manifest.files[0].tokens.is_empty());
    }

    #[test]
    fn test_enumerate_lists_valid_templates() {
        let dir = tempfile::tempdir().unwrap();
        write_template(dir.path(), "Internal", Some(VALID));
        write_template(dir.path(), "External", Some(r#"{ "name": "External Module Template" }"#));

        let found = enumerate(dir.path()).unwrap();
        let types: Vec<_> = found.iter().map(|t| t.template_type.as_str()).collect();
        assert_eq!(types, vec!["external", "internal"]);
        assert_eq!(found[0].manifest.name, "External Module Template");
    }

    #[test]
    fn test_enumerate_skips_invalid_and_missing() {
        let dir = tempfile::tempdir().unwrap();
        write_template(dir.path(), "Internal", Some("{ broken"));
        write_template(dir.path(), "External", Some(VALID));
        write_template(dir.path(), "Empty", None);
        std::fs::write(
            config::templates_root(dir.path()).join(MANIFEST_FILE_NAME),
            VALID,
        )
        .unwrap();

        let found = enumerate(dir.path()).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].template_type, "external");
    }

    #[test]
    fn test_enumerate_without_templates_root() {
        let dir = tempfile::tempdir().unwrap();
        assert!(enumerate(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_enumerate_tags_lowercase_names() {
        let dir = tempfile::tempdir().unwrap();
        write_template(dir.path(), "MyCustom", Some("{}"));

        let found = enumerate(dir.path()).unwrap();
        assert_eq!(found[0].template_type, "mycustom");
        assert!(found[0].directory.ends_with("MyCustom"));
    }
}
