//! In-memory package repository.
//!
//! A [`Repository`] stores immutable [`PackageRecord`]s and only accepts a
//! package once every dependency it declares is satisfied by a package that
//! is already stored. Queries match packages against a version and one of the
//! [`Constraint`]s `==`, `>` and `>=`.

mod config;
mod install;
mod repo;
mod types;

pub use config::Manifest;
pub use install::InstallTracker;
pub use repo::{RepoError, Repository};
pub use types::{
    is_valid_name, parse_dependency, parse_version, Constraint, Dependency, PackageRecord, PkgVersion,
};
