//! Template system for Oqtane module scaffolding.
//!
//! Templates live inside the solution itself, under
//! `Oqtane.Server/wwwroot/Modules/Templates/{Internal|External}/`. Each template
//! directory carries a `template.json` [`manifest`] listing the files it
//! produces, and file paths and contents are filled in by the [`tokens`]
//! engine.
//!
//! ## Tokens
//!
//! Tokens are bracket-delimited literals, matched case-sensitively:
//! - `[Owner]`, `[Module]`, `[Description]`, `[Framework]` — caller input
//! - `[Year]`, `[Date]` — derived from the local clock
//! - `[Guid]` — a fresh identifier per occurrence, in file contents only

pub mod manifest;
pub mod tokens;

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::config;
use crate::error::{OqtaneError, Result};

/// The two template flavours an Oqtane solution ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Internal,
    External,
}

impl TemplateKind {
    /// Directory name under the templates root.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::Internal => "Internal",
            Self::External => "External",
        }
    }

    /// Lower-case identifier accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Internal => "internal",
            Self::External => "external",
        }
    }
}

impl FromStr for TemplateKind {
    type Err = OqtaneError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "internal" => Ok(Self::Internal),
            "external" => Ok(Self::External),
            _ => Err(OqtaneError::UnknownTemplate(s.to_string())),
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve the directory for `template_type` inside `solution_root`.
///
/// Only composes the path; whether it exists is up to the caller.
pub fn template_path(solution_root: &Path, template_type: &str) -> Result<PathBuf> {
    let kind: TemplateKind = template_type.parse()?;
    Ok(config::templates_root(solution_root).join(kind.dir_name()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_internal_path() {
        let path = template_path(Path::new("/sln"), "internal").unwrap();
        assert_eq!(
            path,
            PathBuf::from("/sln/Oqtane.Server/wwwroot/Modules/Templates/Internal")
        );
    }

    #[test]
    fn test_external_path() {
        let path = template_path(Path::new("/sln"), "external").unwrap();
        assert_eq!(
            path,
            PathBuf::from("/sln/Oqtane.Server/wwwroot/Modules/Templates/External")
        );
    }

    #[test]
    fn test_case_insensitive() {
        let root = Path::new("/sln");
        let lower = template_path(root, "internal").unwrap();
        assert_eq!(template_path(root, "INTERNAL").unwrap(), lower);
        assert_eq!(template_path(root, "InTeRnAl").unwrap(), lower);
        assert_eq!(
            template_path(root, "External").unwrap(),
            template_path(root, "EXTERNAL").unwrap()
        );
    }

    #[test]
    fn test_unknown_template() {
        let err = template_path(Path::new("/sln"), "invalid").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(err.to_string().contains("not found"));
        assert!(err.to_string().contains("'invalid'"));
    }

    #[test]
    fn test_empty_template_type_rejected() {
        assert!(template_path(Path::new("/sln"), "").is_err());
    }

    #[test]
    fn test_path_is_not_checked_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = template_path(dir.path(), "external").unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(TemplateKind::Internal.to_string(), "internal");
        assert_eq!("EXTERNAL".parse::<TemplateKind>().unwrap(), TemplateKind::External);
    }
}
