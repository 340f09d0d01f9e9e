mod ord;
mod parse;
#[cfg(test)]
mod test;

pub use parse::parse_version;

use anyhow::{bail, Result};
use nom::combinator::all_consuming;
use serde::{Deserialize, Serialize, Serializer};
use std::{fmt, str::FromStr};

/// dpkg style package version: `[epoch:]upstream[-revision]`.
///
/// Upstream and revision are kept as lists of (non-digit run, digit run)
/// pairs, which is the unit the comparison algorithm works on. An empty
/// revision means none was given. Equality follows the ordering, so `1.0`,
/// `1.00` and `0:1.0-0` are all the same version.
#[derive(Clone, Debug, Deserialize)]
#[serde(try_from = "String")]
pub struct PkgVersion {
    pub epoch: usize,
    pub upstream: Vec<(String, Option<u128>)>,
    pub revision: Vec<(String, Option<u128>)>,
}

impl TryFrom<&str> for PkgVersion {
    type Error = anyhow::Error;

    fn try_from(s: &str) -> Result<Self> {
        match all_consuming(parse_version)(s) {
            Ok((_, ver)) => Ok(ver),
            Err(e) => bail!("Malformed version {:?}: {}", s, e),
        }
    }
}

impl TryFrom<String> for PkgVersion {
    type Error = anyhow::Error;

    fn try_from(s: String) -> Result<Self> {
        PkgVersion::try_from(s.as_str())
    }
}

impl FromStr for PkgVersion {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        PkgVersion::try_from(s)
    }
}

impl fmt::Display for PkgVersion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.epoch != 0 {
            write!(f, "{}:", self.epoch)?;
        }
        write_segments(f, &self.upstream)?;
        if !self.revision.is_empty() {
            f.write_str("-")?;
            write_segments(f, &self.revision)?;
        }
        Ok(())
    }
}

fn write_segments(f: &mut fmt::Formatter, segments: &[(String, Option<u128>)]) -> fmt::Result {
    for (prefix, number) in segments {
        f.write_str(prefix)?;
        if let Some(num) = number {
            write!(f, "{}", num)?;
        }
    }
    Ok(())
}

impl Serialize for PkgVersion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
