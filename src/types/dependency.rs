use super::{is_valid_name, parse_version, PackageRecord, PkgVersion};

use anyhow::{bail, Result};
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::space0,
    combinator::{all_consuming, value, verify},
    error::context,
    IResult,
};
use serde::{Deserialize, Serialize, Serializer};
use std::{cmp::Ordering, fmt, str::FromStr};

/// How a candidate version is compared against the version a dependency names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Constraint {
    /// Exactly this version
    #[default]
    Eq,
    /// Strictly newer
    Gt,
    /// Same or newer
    Ge,
}

impl Constraint {
    pub fn symbol(&self) -> &'static str {
        match self {
            Constraint::Eq => "==",
            Constraint::Gt => ">",
            Constraint::Ge => ">=",
        }
    }

    /// Check the result of `candidate.cmp(target)` against this constraint.
    pub fn matches(&self, ord: Ordering) -> bool {
        match self {
            Constraint::Eq => ord == Ordering::Equal,
            Constraint::Gt => ord == Ordering::Greater,
            Constraint::Ge => ord != Ordering::Less,
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Constraint {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match all_consuming(constraint)(s) {
            Ok((_, c)) => Ok(c),
            Err(_) => bail!("Unknown version constraint {:?}", s),
        }
    }
}

/// A named version constraint another package must satisfy.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Dependency {
    name: String,
    version: PkgVersion,
    constraint: Constraint,
}

impl Dependency {
    pub fn new(name: impl Into<String>, version: PkgVersion, constraint: Constraint) -> Self {
        Dependency {
            name: name.into(),
            version,
            constraint,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &PkgVersion {
        &self.version
    }

    pub fn constraint(&self) -> Constraint {
        self.constraint
    }

    /// Check if `candidate` satisfies this dependency.
    ///
    /// A candidate with a different name never does.
    pub fn validate(&self, candidate: &PackageRecord) -> bool {
        if candidate.name() != self.name {
            return false;
        }
        self.constraint
            .matches(candidate.version().cmp(&self.version))
    }
}

fn package_name(i: &str) -> IResult<&str, &str> {
    verify(
        take_while1(|c: char| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')),
        |name: &str| is_valid_name(name),
    )(i)
}

fn constraint(i: &str) -> IResult<&str, Constraint> {
    alt((
        value(Constraint::Eq, tag("==")),
        value(Constraint::Ge, tag(">=")),
        value(Constraint::Gt, tag(">")),
        value(Constraint::Eq, tag("=")),
    ))(i)
}

/// Use `nom` to parse a dependency string such as `libfoo >= 1.0`
pub fn parse_dependency(i: &str) -> IResult<&str, Dependency> {
    let (i, _) = space0(i)?;
    let (i, name) = context("parsing package name", package_name)(i)?;
    let (i, _) = space0(i)?;
    let (i, constraint) = context("parsing compare literal", constraint)(i)?;
    let (i, _) = space0(i)?;
    let (i, version) = context("parsing version in dependency", parse_version)(i)?;
    let (i, _) = space0(i)?;

    Ok((i, Dependency::new(name, version, constraint)))
}

impl TryFrom<&str> for Dependency {
    type Error = anyhow::Error;

    fn try_from(s: &str) -> Result<Self> {
        match all_consuming(parse_dependency)(s) {
            Ok((_, dep)) => Ok(dep),
            Err(e) => bail!("Malformed dependency {:?}: {}", s, e),
        }
    }
}

impl TryFrom<String> for Dependency {
    type Error = anyhow::Error;

    fn try_from(s: String) -> Result<Self> {
        Dependency::try_from(s.as_str())
    }
}

impl FromStr for Dependency {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Dependency::try_from(s)
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {}", self.name, self.constraint, self.version)
    }
}

impl Serialize for Dependency {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
