use crate::{
    repo::{RepoError, Repository},
    types::PackageRecord,
};

use anyhow::{Context, Result};
use log::warn;
use serde::Deserialize;
use std::{fs, path::Path, str::FromStr};

/// A list of packages to seed a repository with, read from TOML:
///
/// ```toml
/// [[package]]
/// name = "lib"
/// version = "1.0"
///
/// [[package]]
/// name = "app"
/// version = "1.0"
/// depends = ["lib >= 1.0"]
/// ```
///
/// Packages are added in the order they appear, so dependencies must come
/// before the packages that need them.
#[derive(Deserialize, Debug, Default)]
pub struct Manifest {
    #[serde(rename = "package", default)]
    packages: Vec<PackageRecord>,
}

impl Manifest {
    pub fn from_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest {}", path.display()))?;
        data.parse::<Manifest>()
            .with_context(|| format!("Failed to parse manifest {}", path.display()))
    }

    pub fn packages(&self) -> &[PackageRecord] {
        &self.packages
    }

    pub fn into_records(self) -> Vec<PackageRecord> {
        self.packages
    }
}

impl FromStr for Manifest {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let manifest: Manifest = toml::from_str(s).context("Malformed manifest")?;
        Ok(manifest)
    }
}

impl Repository {
    /// Build a repository holding every package of `manifest`.
    pub fn from_manifest(manifest: &Manifest) -> Result<Self, RepoError> {
        let mut repo = Repository::new();
        if let Err(e) = repo.add_all(manifest.packages().iter().cloned()) {
            warn!("Failed to load manifest: {}", e);
            return Err(e);
        }
        Ok(repo)
    }
}
