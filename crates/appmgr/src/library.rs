// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Archive filename parsing and directory-tree discovery for the three
//! AppManager directories (library/installed/backups).
//!
//! Grounded on `modules/bios/appmanager/base.go`'s `getAppsFromDir`,
//! generalized from its loose version-regex-then-strip approach to the
//! an explicit capture-group formula so `(name, version)`
//! recovery is exact rather than best-effort string surgery.

use std::path::Path;

use flexbios_core::AppDescriptor;
use regex::Regex;

/// `^(.+?)[-_]?v(\d+(\.\d+)*)(.*)$` applied to an archive basename with
/// `.zip` stripped. Files that don't match are skipped, not errors.
fn filename_regex() -> Regex {
    #[allow(clippy::expect_used)]
    Regex::new(r"^(.+?)[-_]?v(\d+(?:\.\d+)*)(.*)$").expect("filename regex is a fixed literal")
}

/// Recovers `(name, version)` from a library archive's basename (without
/// `.zip`). `version` retains the leading `v` and any trailing qualifier
/// captured by the final group (e.g. `-rc1`).
pub fn parse_library_filename(basename: &str) -> Option<(String, String)> {
    let re = filename_regex();
    let caps = re.captures(basename)?;
    let name = caps.get(1)?.as_str().trim_matches(|c| c == '-' || c == '_').to_string();
    let digits = caps.get(2)?.as_str();
    let suffix = caps.get(3).map(|m| m.as_str()).unwrap_or("");
    if name.is_empty() {
        return None;
    }
    Some((name, format!("v{digits}{suffix}")))
}

/// Scans `dir` for `*.zip` archives and parses each basename via
/// [`parse_library_filename`].
pub fn scan_library(dir: &Path) -> std::io::Result<Vec<AppDescriptor>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    let mut apps = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("zip") {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else { continue };
        if let Some((name, version)) = parse_library_filename(stem) {
            apps.push(AppDescriptor::new(name, version).with_path(path));
        }
    }
    Ok(apps)
}

/// Walks `{dir}/{name}/{version}/` two levels deep, matching the layout
/// `installed/` and `backups/` both use.
pub fn scan_two_level(dir: &Path) -> std::io::Result<Vec<AppDescriptor>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    let mut apps = Vec::new();
    for name_entry in std::fs::read_dir(dir)? {
        let name_entry = name_entry?;
        if !name_entry.file_type()?.is_dir() {
            continue;
        }
        let name = name_entry.file_name().to_string_lossy().into_owned();
        for version_entry in std::fs::read_dir(name_entry.path())? {
            let version_entry = version_entry?;
            if !version_entry.file_type()?.is_dir() {
                continue;
            }
            let version = version_entry.file_name().to_string_lossy().into_owned();
            apps.push(AppDescriptor::new(name.clone(), version).with_path(version_entry.path()));
        }
    }
    Ok(apps)
}

#[cfg(test)]
#[path = "library_tests.rs"]
mod tests;
