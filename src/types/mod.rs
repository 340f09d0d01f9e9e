mod dependency;
mod version;

pub use dependency::{parse_dependency, Constraint, Dependency};
pub use version::{parse_version, PkgVersion};

use anyhow::{bail, Context, Result};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

/// Check a package name against the Debian rules: lowercase letters, digits
/// and `+ - .`, starting with a letter or digit.
pub fn is_valid_name(name: &str) -> bool {
    lazy_static! {
        static ref PKG_NAME: Regex = Regex::new("^[a-z0-9][a-z0-9+.-]*$").unwrap();
    }
    PKG_NAME.is_match(name)
}

/// An immutable package: name, version and the dependencies it declares.
///
/// Identity is the `(name, version)` pair only. Two records that differ only
/// in their dependency lists are the same package, so a repository that
/// already holds one of them rejects the other and its dependency list is
/// dropped rather than merged.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PackageRecord {
    name: String,
    version: PkgVersion,
    #[serde(rename = "depends", default)]
    dependencies: Vec<Dependency>,
}

impl PackageRecord {
    pub fn new(name: impl Into<String>, version: PkgVersion, dependencies: Vec<Dependency>) -> Self {
        PackageRecord {
            name: name.into(),
            version,
            dependencies,
        }
    }

    /// Build a record from its textual parts, e.g.
    /// `PackageRecord::parse("app", "1.0", &["lib >= 1.0"])`.
    pub fn parse(name: &str, version: &str, dependencies: &[&str]) -> Result<Self> {
        if !is_valid_name(name) {
            bail!("Invalid package name {:?}", name);
        }
        let version = PkgVersion::try_from(version)
            .with_context(|| format!("Invalid version for package {}", name))?;
        let dependencies = dependencies
            .iter()
            .map(|d| Dependency::try_from(*d))
            .collect::<Result<Vec<_>>>()
            .with_context(|| format!("Invalid dependency for package {}", name))?;
        Ok(PackageRecord::new(name, version, dependencies))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &PkgVersion {
        &self.version
    }

    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    /// The key used for equality and set membership.
    pub fn identity(&self) -> (&str, &PkgVersion) {
        (&self.name, &self.version)
    }
}

impl PartialEq for PackageRecord {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for PackageRecord {}

impl Ord for PackageRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.identity().cmp(&other.identity())
    }
}

impl PartialOrd for PackageRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for PackageRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.name, self.version)
    }
}
