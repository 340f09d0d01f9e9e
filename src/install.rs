use crate::{
    repo::Repository,
    types::{Constraint, PkgVersion},
};

use anyhow::Result;

/// Records which packages of a `Repository` are installed.
///
/// This crate does not decide how an install picks a package or whether it
/// pulls in dependencies; implementors own that policy. Callers that have no
/// opinion on the constraint conventionally pass `Constraint::Ge`.
pub trait InstallTracker {
    fn install(
        &mut self,
        repo: &Repository,
        name: &str,
        version: &PkgVersion,
        constraint: Constraint,
    ) -> Result<()>;
}
