// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use yare::parameterized;

use super::{parse_library_filename, scan_library, scan_two_level};

#[parameterized(
    simple = { "my-app-v1.0.0", Some(("my-app", "v1.0.0")) },
    underscore = { "my_app_v2.1", Some(("my_app", "v2.1")) },
    no_dash = { "myappv3", Some(("myapp", "v3")) },
    suffix = { "my-app-v1.0.0-rc1", Some(("my-app", "v1.0.0-rc1")) },
    no_version = { "not-versioned", None },
)]
fn parses_name_and_version(raw: &str, expected: Option<(&str, &str)>) {
    let result = parse_library_filename(raw);
    assert_eq!(result, expected.map(|(n, v)| (n.to_string(), v.to_string())));
}

#[test]
fn scan_library_skips_non_zip_and_unmatched_names() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("my-app-v1.0.0.zip"), b"").unwrap();
    std::fs::write(dir.path().join("readme.txt"), b"").unwrap();
    std::fs::write(dir.path().join("noversion.zip"), b"").unwrap();

    let apps = scan_library(dir.path()).unwrap();
    assert_eq!(apps.len(), 1);
    assert_eq!(apps[0].name, "my-app");
    assert_eq!(apps[0].version, "v1.0.0");
}

#[test]
fn scan_library_on_missing_dir_is_empty() {
    let apps = scan_library(std::path::Path::new("/no/such/dir")).unwrap();
    assert!(apps.is_empty());
}

#[test]
fn scan_two_level_discovers_nested_versions() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("my-app").join("v1.0.0")).unwrap();
    std::fs::create_dir_all(dir.path().join("other-app").join("v2.0.0")).unwrap();

    let mut apps = scan_two_level(dir.path()).unwrap();
    apps.sort_by(|a, b| a.name.cmp(&b.name));
    assert_eq!(apps.len(), 2);
    assert_eq!(apps[0].name, "my-app");
    assert_eq!(apps[1].name, "other-app");
}
