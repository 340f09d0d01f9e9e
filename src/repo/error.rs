use crate::types::{Dependency, PackageRecord};
use thiserror::Error;

#[derive(Error, Clone, Debug)]
pub enum RepoError {
    #[error("Malformed package: {0}")]
    InvalidInput(String),
    #[error("Cannot add package: {package}. Required dependency: {dependency} is not found")]
    UnsatisfiedDependency {
        package: PackageRecord,
        dependency: Dependency,
    },
    #[error("Package {0} already exists")]
    DuplicatePackage(PackageRecord),
}
