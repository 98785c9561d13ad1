//! Fixed conventions of an Oqtane solution and the CLI defaults.
//!
//! None of these are user-configurable: templates always live at
//! [`TEMPLATES_RELATIVE_PATH`] below the solution root, and each template
//! directory is described by a [`MANIFEST_FILE_NAME`] file.

use std::path::{Path, PathBuf};

/// Name of the manifest file inside every template directory.
pub const MANIFEST_FILE_NAME: &str = "template.json";

/// Path segments from the solution root to the templates root.
pub const TEMPLATES_RELATIVE_PATH: [&str; 4] = ["Oqtane.Server", "wwwroot", "Modules", "Templates"];

/// File extensions that mark a directory as a solution root.
pub const SOLUTION_EXTENSIONS: [&str; 2] = ["slnx", "sln"];

/// Template type used when `--template` is omitted.
pub const DEFAULT_TEMPLATE: &str = "internal";

/// Target framework used when `--framework` is omitted.
pub const DEFAULT_FRAMEWORK: &str = "net10.0";

/// `{solution_root}/Oqtane.Server/wwwroot/Modules/Templates`.
pub fn templates_root(solution_root: &Path) -> PathBuf {
    TEMPLATES_RELATIVE_PATH
        .iter()
        .fold(solution_root.to_path_buf(), |path, segment| path.join(segment))
}
