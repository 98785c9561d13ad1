//! Unified error types for the oqtane toolkit.

use std::path::PathBuf;
use thiserror::Error;

/// Broad failure category, used by the command layer and by tolerant discovery
/// to decide what to surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A solution root, template directory, or manifest file is absent.
    NotFound,
    /// A manifest exists but could not be parsed.
    Malformed,
    /// The caller supplied an unusable value (template type, owner, module name).
    InvalidArgument,
    /// Any other filesystem failure.
    Io,
}

/// All errors that can occur during oqtane operations.
#[derive(Error, Debug)]
pub enum OqtaneError {
    // --- Discovery ---

    /// No directory between the start path and the filesystem root holds a `.sln`/`.slnx` file.
    #[error("Cannot find Oqtane solution. Run from an Oqtane app directory or use --solution.")]
    SolutionNotFound { start: PathBuf },

    // --- Templates ---

    /// The template type is not one of `internal` or `external`.
    #[error("Template '{0}' not found. Use 'oqtane module list' to see available templates.")]
    UnknownTemplate(String),

    /// The template type is valid but its directory is missing from the solution.
    #[error("Template directory not found at '{}'. Use 'oqtane module list' to see available templates.", .0.display())]
    TemplateDirNotFound(PathBuf),

    /// The template directory has no `template.json`.
    #[error("Template manifest not found at '{}'. Ensure you are in an Oqtane solution directory with valid templates.", path.display())]
    ManifestNotFound { path: PathBuf },

    /// `template.json` exists but is not a valid manifest.
    #[error("Invalid template manifest at '{}'", path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // --- Arguments ---

    /// An owner or module name contains characters other than letters and digits.
    #[error("{field} name must be alphanumeric (A-Z, a-z, 0-9).")]
    InvalidName { field: &'static str, value: String },

    // --- General ---

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl OqtaneError {
    /// The failure category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::SolutionNotFound { .. }
            | Self::TemplateDirNotFound(_)
            | Self::ManifestNotFound { .. } => ErrorKind::NotFound,
            Self::ManifestParse { .. } => ErrorKind::Malformed,
            Self::UnknownTemplate(_) | Self::InvalidName { .. } => ErrorKind::InvalidArgument,
            Self::Io(_) => ErrorKind::Io,
        }
    }
}

/// Alias for `Result<T, OqtaneError>`.
pub type Result<T> = std::result::Result<T, OqtaneError>;
