use super::PkgVersion;
use std::cmp::{max, Ordering};

/// The dpkg version comparison algorithm.
/// Check deb-version(7) for the details.
impl Ord for PkgVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.epoch
            .cmp(&other.epoch)
            .then_with(|| cmp_segments(&self.upstream, &other.upstream))
            .then_with(|| cmp_segments(&self.revision, &other.revision))
    }
}

impl PartialOrd for PkgVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for PkgVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PkgVersion {}

fn cmp_segments(this: &[(String, Option<u128>)], that: &[(String, Option<u128>)]) -> Ordering {
    let max_len = max(this.len(), that.len());
    for i in 0..max_len {
        // A missing segment behaves like an empty non-digit run followed by 0
        let (this_str, this_num) = this
            .get(i)
            .map(|(s, n)| (s.as_str(), n.unwrap_or(0)))
            .unwrap_or(("", 0));
        let (that_str, that_num) = that
            .get(i)
            .map(|(s, n)| (s.as_str(), n.unwrap_or(0)))
            .unwrap_or(("", 0));

        match cmp_non_digit(this_str, that_str).then(this_num.cmp(&that_num)) {
            Ordering::Equal => (),
            ord => return ord,
        }
    }

    Ordering::Equal
}

fn cmp_non_digit(this: &str, that: &str) -> Ordering {
    let mut this = this.chars();
    let mut that = that.chars();
    loop {
        let x = this.next();
        let y = that.next();
        if x.is_none() && y.is_none() {
            return Ordering::Equal;
        }
        match rank(x).cmp(&rank(y)) {
            Ordering::Equal => (),
            ord => return ord,
        }
    }
}

// '~' sorts before the end of the run, letters before everything else
fn rank(c: Option<char>) -> i64 {
    match c {
        None => 0,
        Some('~') => -1,
        Some(c) if c.is_ascii_alphabetic() => c as i64,
        Some(c) => c as i64 + 256,
    }
}
