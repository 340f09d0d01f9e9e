mod error;
pub use error::RepoError;

use crate::types::{is_valid_name, Constraint, Dependency, PackageRecord, PkgVersion};

use log::{debug, warn};
use std::collections::{BTreeSet, HashMap};

/// In-memory package repository.
///
/// Every stored package had all of its dependencies satisfied by the
/// repository's contents when it was added. Nothing is ever removed, so that
/// stays true for the lifetime of the repository.
#[derive(Debug, Default)]
pub struct Repository {
    // Packages of each name, sorted by version
    packages: HashMap<String, BTreeSet<PackageRecord>>,
}

impl Repository {
    pub fn new() -> Self {
        Repository {
            packages: HashMap::new(),
        }
    }

    /// Find packages named `name` whose version satisfies `constraint` against `version`.
    ///
    /// Returns `None` if no package with this name was ever added, and an
    /// empty list if the name is known but no version matches.
    pub fn find(
        &self,
        name: &str,
        version: &PkgVersion,
        constraint: Constraint,
    ) -> Option<Vec<&PackageRecord>> {
        let pkgs = self.packages.get(name)?;
        let dep = Dependency::new(name, version.clone(), constraint);
        Some(pkgs.iter().filter(|p| dep.validate(p)).collect())
    }

    /// Same as `find` with the exact-version constraint.
    pub fn find_exact(&self, name: &str, version: &PkgVersion) -> Option<Vec<&PackageRecord>> {
        self.find(name, version, Constraint::default())
    }

    /// Highest version of `name` that satisfies the constraint, if any.
    pub fn newest(
        &self,
        name: &str,
        version: &PkgVersion,
        constraint: Constraint,
    ) -> Option<&PackageRecord> {
        self.find(name, version, constraint)?.into_iter().last()
    }

    /// List packages named `name`, or every package if `name` is `None`.
    ///
    /// An unknown name gives an empty list. Packages of one name come out in
    /// ascending version order; the order across names is unspecified.
    pub fn list(&self, name: Option<&str>) -> Vec<&PackageRecord> {
        match name {
            Some(name) => self
                .packages
                .get(name)
                .map(|pkgs| pkgs.iter().collect())
                .unwrap_or_default(),
            None => self.packages.values().flatten().collect(),
        }
    }

    pub fn contains(&self, name: &str, version: &PkgVersion) -> bool {
        self.packages
            .get(name)
            .map(|pkgs| pkgs.iter().any(|p| p.version() == version))
            .unwrap_or(false)
    }

    /// Names with at least one package.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.packages.keys().map(String::as_str)
    }

    /// Number of packages across all names.
    pub fn len(&self) -> usize {
        self.packages.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Add a package to the repository.
    ///
    /// Every dependency of `package` must already be satisfied by some stored
    /// package, and no package with the same name and version may exist.
    /// On error the repository is left untouched.
    pub fn add(&mut self, package: PackageRecord) -> Result<(), RepoError> {
        check_sanity(&package)?;

        let unmet = package
            .dependencies()
            .iter()
            .find(|dep| !self.is_satisfied(dep))
            .cloned();
        if let Some(dependency) = unmet {
            warn!("Rejecting {}: dependency {} is not satisfied", package, dependency);
            return Err(RepoError::UnsatisfiedDependency {
                package,
                dependency,
            });
        }

        if self
            .packages
            .get(package.name())
            .map(|pkgs| pkgs.contains(&package))
            .unwrap_or(false)
        {
            warn!("Rejecting {}: already in repository", package);
            return Err(RepoError::DuplicatePackage(package));
        }

        debug!("Adding {}", package);
        self.packages
            .entry(package.name().to_owned())
            .or_default()
            .insert(package);
        Ok(())
    }

    /// Add packages in order, stopping at the first one that is rejected.
    ///
    /// Packages added before the failing one stay in the repository.
    pub fn add_all<I>(&mut self, packages: I) -> Result<(), RepoError>
    where
        I: IntoIterator<Item = PackageRecord>,
    {
        for package in packages {
            self.add(package)?;
        }
        Ok(())
    }

    fn is_satisfied(&self, dep: &Dependency) -> bool {
        match self.find(dep.name(), dep.version(), dep.constraint()) {
            Some(matches) => !matches.is_empty(),
            None => {
                debug!("No package named {} in repository", dep.name());
                false
            }
        }
    }
}

fn check_sanity(package: &PackageRecord) -> Result<(), RepoError> {
    if !is_valid_name(package.name()) {
        return Err(RepoError::InvalidInput(format!(
            "invalid package name {:?}",
            package.name()
        )));
    }
    for dep in package.dependencies() {
        if !is_valid_name(dep.name()) {
            return Err(RepoError::InvalidInput(format!(
                "invalid dependency name {:?} in {}",
                dep.name(),
                package
            )));
        }
    }
    Ok(())
}
