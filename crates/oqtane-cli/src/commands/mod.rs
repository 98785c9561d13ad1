//! CLI command implementations for oqtane.
//!
//! Each module corresponds to a subcommand (`oqtane module <command>`).

pub mod create;
pub mod list;
