use super::PkgVersion;

use anyhow::{Context, Result};
use nom::{
    bytes::complete::{take_while, take_while1},
    character::complete::{char, digit1, satisfy},
    combinator::{all_consuming, map_res, opt, recognize},
    error::context,
    sequence::{pair, terminated},
    IResult,
};

/// Parse a version from the head of `i`.
///
/// The version token ends at the first character that cannot appear in a
/// version (whitespace, comma, ...). The token is read as
/// `[epoch:]upstream[-revision]`, where the revision is whatever follows the
/// last hyphen, so upstream may itself contain hyphens.
pub fn parse_version(i: &str) -> IResult<&str, PkgVersion> {
    let (rest, token) = context("reading version token", take_while1(is_version_char))(i)?;
    let (_, ver) = context("parsing version", all_consuming(version))(token)?;
    Ok((rest, ver))
}

fn is_version_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '+' | '~' | '-' | ':')
}

fn is_revision_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '+' | '~')
}

fn epoch(i: &str) -> IResult<&str, usize> {
    let (i, epoch) = opt(terminated(
        map_res(digit1, |s: &str| s.parse::<usize>()),
        char(':'),
    ))(i)?;
    Ok((i, epoch.unwrap_or(0)))
}

fn upstream(i: &str) -> IResult<&str, Vec<(String, Option<u128>)>> {
    map_res(
        recognize(pair(
            satisfy(|c: char| c.is_ascii_digit()),
            take_while(|c: char| is_revision_char(c) || c == '-'),
        )),
        split_segments,
    )(i)
}

fn revision(i: &str) -> IResult<&str, Vec<(String, Option<u128>)>> {
    map_res(take_while1(is_revision_char), split_segments)(i)
}

fn version(i: &str) -> IResult<&str, PkgVersion> {
    let (i, epoch) = epoch(i)?;
    let (upstream_str, revision_str) = match i.rfind('-') {
        Some(pos) => (&i[..pos], Some(&i[pos + 1..])),
        None => (i, None),
    };
    let (_, upstream) = context("parsing upstream version", all_consuming(upstream))(upstream_str)?;
    let revision = match revision_str {
        Some(r) => context("parsing revision", all_consuming(revision))(r)?.1,
        None => Vec::new(),
    };

    Ok((
        &i[i.len()..],
        PkgVersion {
            epoch,
            upstream,
            revision,
        },
    ))
}

/// Split upstream or revision into (non-digit run, digit run) pairs.
fn split_segments(s: &str) -> Result<Vec<(String, Option<u128>)>> {
    let mut res = Vec::new();
    let mut rest = s;
    while !rest.is_empty() {
        let digit_start = rest.find(|c: char| c.is_ascii_digit()).unwrap_or(rest.len());
        let (prefix, tail) = rest.split_at(digit_start);
        let digit_end = tail.find(|c: char| !c.is_ascii_digit()).unwrap_or(tail.len());
        let (digits, tail) = tail.split_at(digit_end);
        let number = if digits.is_empty() {
            None
        } else {
            Some(
                digits
                    .parse::<u128>()
                    .with_context(|| format!("Version segment {} is too large", digits))?,
            )
        };
        res.push((prefix.to_owned(), number));
        rest = tail;
    }
    Ok(res)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn pkg_ver_from_str() {
        let source = vec!["1.1.1.", "999:0+git20210608-1", "2.0-rc1", "1:2.3-4-1ubuntu2"];
        let result = vec![
            PkgVersion {
                epoch: 0,
                upstream: vec![
                    ("".to_string(), Some(1)),
                    (".".to_string(), Some(1)),
                    (".".to_string(), Some(1)),
                    (".".to_string(), None),
                ],
                revision: vec![],
            },
            PkgVersion {
                epoch: 999,
                upstream: vec![
                    ("".to_string(), Some(0)),
                    ("+git".to_string(), Some(20210608)),
                ],
                revision: vec![("".to_string(), Some(1))],
            },
            PkgVersion {
                epoch: 0,
                upstream: vec![
                    ("".to_string(), Some(2)),
                    (".".to_string(), Some(0)),
                ],
                revision: vec![("rc".to_string(), Some(1))],
            },
            PkgVersion {
                epoch: 1,
                upstream: vec![
                    ("".to_string(), Some(2)),
                    (".".to_string(), Some(3)),
                    ("-".to_string(), Some(4)),
                ],
                revision: vec![("".to_string(), Some(1)), ("ubuntu".to_string(), Some(2))],
            },
        ];

        for (pos, e) in source.iter().enumerate() {
            let ver = PkgVersion::try_from(*e).unwrap();
            assert_eq!(ver.epoch, result[pos].epoch);
            assert_eq!(ver.upstream, result[pos].upstream);
            assert_eq!(ver.revision, result[pos].revision);
        }
    }

    #[test]
    fn stops_at_token_end() {
        let (rest, ver) = parse_version("1.2-3, foo").unwrap();
        assert_eq!(rest, ", foo");
        assert_eq!(ver.to_string(), "1.2-3");
    }

    #[test]
    fn reject_malformed() {
        for s in ["", "abc", "v1.0", "1:", "1.0 beta", "1.0_1", "1.0-", "-1", "1:2:3"] {
            assert!(PkgVersion::try_from(s).is_err(), "{} should not parse", s);
        }
    }

    #[test]
    fn display_is_canonical() {
        let tests = vec![
            ("1.0", "1.0"),
            ("0:1.0-0", "1.0-0"),
            ("1.0-1ubuntu1", "1.0-1ubuntu1"),
            ("1.0-2-1.1", "1.0-2-1.1"),
            ("2:1.0~rc1-3", "2:1.0~rc1-3"),
            ("1.01", "1.1"),
        ];
        for (input, expected) in tests {
            assert_eq!(PkgVersion::try_from(input).unwrap().to_string(), expected);
        }
    }
}
