use super::PkgVersion;
use std::cmp::Ordering::*;

#[test]
fn pkg_ver_ord() {
    let source = vec![
        ("1.1.1", Less, "1.1.2"),
        ("1b", Greater, "1a"),
        ("1", Less, "1.1"),
        ("1.0", Less, "1.1"),
        ("0.9", Less, "1.0"),
        ("1.2", Less, "1.11"),
        ("1.0-1", Less, "1.1"),
        ("1.0-1", Less, "1.0-12"),
        ("1:1.0-0", Equal, "1:1.0"),
        ("1.0", Equal, "1.0"),
        ("1.0", Equal, "1.00"),
        ("1.0-1", Equal, "1.0-1"),
        ("1:1.0-1", Equal, "1:1.0-1"),
        ("1.0-1", Less, "1.0-2"),
        ("1.0", Less, "1.0.0"),
        ("1.0", Less, "1.0a"),
        ("1.0final-5", Greater, "1.0a7-2"),
        ("0.9.2-5", Less, "0.9.2+cvs.1.0.dev.2004.07.28-1"),
        ("1:500", Less, "1:5000"),
        ("100:500", Greater, "11:5000"),
        ("1:0.1", Greater, "9.9"),
        ("1.0.4-2", Greater, "1.0pre7-2"),
        ("1.5~rc1", Less, "1.5"),
        ("1.5rc1", Greater, "1.5"),
        ("1.5~rc1", Less, "1.5+1"),
        ("1.5~rc1", Less, "1.5~rc2"),
        ("1.5~rc1", Greater, "1.5~dev0"),
        ("1.0~~", Less, "1.0~"),
        ("1.0-2", Greater, "1.0-1ubuntu1"),
        ("1.0-2", Greater, "1.0-1.1"),
        ("1.0-1ubuntu1", Greater, "1.0-1"),
        ("1.0-1~bpo1", Less, "1.0-1"),
        ("1.0-1ubuntu1", Less, "1.0-1ubuntu2"),
        ("1.0-1ubuntu1", Less, "1.0-1.1"),
        ("2.0-rc1", Greater, "2.0"),
        ("1.0-2-1", Greater, "1.0-1-9"),
        ("1.0-2-1", Less, "1.0.1-1"),
    ];

    for e in source {
        let this = PkgVersion::try_from(e.0).unwrap();
        let that = PkgVersion::try_from(e.2).unwrap();
        assert_eq!(this.cmp(&that), e.1, "comparing {} vs {}", e.0, e.2);
        assert_eq!(that.cmp(&this), e.1.reverse(), "comparing {} vs {}", e.2, e.0);
    }
}

#[test]
fn pkg_ver_eq() {
    let source = vec![
        ("1.1+git2021", "1.1+git2021"),
        ("0:2.0", "2.0-0"),
        ("1.", "1.0"),
    ];
    for e in &source {
        assert_eq!(
            PkgVersion::try_from(e.0).unwrap(),
            PkgVersion::try_from(e.1).unwrap()
        );
    }
}

#[test]
fn pkg_ver_sort() {
    let mut versions: Vec<PkgVersion> = ["1.1", "1.0~beta", "1:0.1", "1.0", "0.9"]
        .iter()
        .map(|s| PkgVersion::try_from(*s).unwrap())
        .collect();
    versions.sort();
    let sorted: Vec<String> = versions.iter().map(|v| v.to_string()).collect();
    assert_eq!(sorted, vec!["0.9", "1.0~beta", "1.0", "1.1", "1:0.1"]);
}
