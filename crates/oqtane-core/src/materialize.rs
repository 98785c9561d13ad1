//! Contract for turning a [`ModulePlan`] into files on disk.
//!
//! No implementation ships with this crate. An implementation must, for each
//! [`PlannedFile`](crate::project::PlannedFile) in order:
//!
//! 1. Obtain the content with [`ModulePlan::render`].
//! 2. If the destination exists and [`ModulePlan::overwrite`] is false, leave
//!    it alone and report [`FileOutcome::Skipped`].
//! 3. Otherwise write it, reporting [`FileOutcome::Created`] or
//!    [`FileOutcome::Overwritten`].
//!
//! The first failed write aborts the rest of the batch. Files already written
//! are not rolled back.

use std::path::PathBuf;

use crate::error::Result;
use crate::project::ModulePlan;

/// What happened to one destination file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Created,
    Overwritten,
    Skipped,
}

/// Per-file results of a materialization, in plan order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterializeReport {
    pub files: Vec<(PathBuf, FileOutcome)>,
}

impl MaterializeReport {
    pub fn count(&self, outcome: FileOutcome) -> usize {
        self.files.iter().filter(|(_, o)| *o == outcome).count()
    }
}

/// Writes the files described by a [`ModulePlan`].
pub trait Materializer {
    fn materialize(&self, plan: &ModulePlan) -> Result<MaterializeReport>;
}
