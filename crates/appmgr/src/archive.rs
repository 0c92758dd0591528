// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Zip extraction into an install directory, flattening the archive's
//! single top-level directory (if one exists) while preserving any nested
//! subdirectories beneath it.
//!
//! Grounded on `modules/bios/appmanager/base.go`'s `unzipApp`, which
//! flattens unconditionally and extracts every file straight into the
//! destination root. This implementation additionally preserves nested
//! subdirectory structure once the one shared top-level prefix is
//! stripped, since real archives can be more complex
//! than a single binary plus `config.yaml`.

use std::path::Path;

use flexbios_core::AppConfig;

use crate::error::AppMgrError;

/// Extracts `zip_path` into `dest`, creating `dest` if missing. Files with
/// no extension, or whose name equals `app_name`, are marked executable
/// (mode `0755`).
pub fn extract_zip(zip_path: &Path, dest: &Path, app_name: &str) -> Result<(), AppMgrError> {
    let file = std::fs::File::open(zip_path)?;
    let mut archive = zip::ZipArchive::new(file)?;

    let names: Vec<String> = (0..archive.len())
        .map(|i| archive.by_index(i).map(|f| f.name().to_string()))
        .collect::<Result<_, _>>()?;
    let root_prefix = common_root_prefix(&names);

    std::fs::create_dir_all(dest)?;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        let raw_name = entry.name().to_string();
        if raw_name.is_empty() {
            continue;
        }
        let relative = match &root_prefix {
            Some(prefix) => raw_name.strip_prefix(prefix.as_str()).unwrap_or(&raw_name),
            None => raw_name.as_str(),
        };
        let relative = relative.trim_start_matches('/');
        if relative.is_empty() {
            continue;
        }
        let out_path = dest.join(relative);
        if entry.is_dir() {
            std::fs::create_dir_all(&out_path)?;
            continue;
        }
        if let Some(parent) = out_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut out_file = std::fs::File::create(&out_path)?;
        std::io::copy(&mut entry, &mut out_file)?;

        if should_be_executable(&out_path, app_name) {
            set_executable(&out_path)?;
        }
    }
    Ok(())
}

/// If every entry shares one top-level directory, returns that directory
/// name with a trailing `/` so it can be stripped as a prefix.
fn common_root_prefix(names: &[String]) -> Option<String> {
    let mut root: Option<&str> = None;
    for name in names {
        if name.is_empty() {
            continue;
        }
        let first = name.split('/').next().unwrap_or("");
        if first.is_empty() {
            continue;
        }
        match root {
            None => root = Some(first),
            Some(r) if r == first => {}
            Some(_) => return None,
        }
    }
    root.map(|r| format!("{r}/"))
}

fn should_be_executable(path: &Path, app_name: &str) -> bool {
    let no_extension = path.extension().is_none();
    let is_app_binary = path.file_name().and_then(|n| n.to_str()) == Some(app_name);
    no_extension || is_app_binary
}

#[cfg(unix)]
fn set_executable(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = std::fs::metadata(path)?.permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(path, perms)
}

#[cfg(not(unix))]
fn set_executable(_path: &Path) -> std::io::Result<()> {
    Ok(())
}

/// Reads an optional `config.yaml` at the (already flattened) install
/// directory's root.
pub fn read_app_config(install_dir: &Path) -> Result<Option<AppConfig>, AppMgrError> {
    let config_path = install_dir.join("config.yaml");
    if !config_path.exists() {
        return Ok(None);
    }
    let raw = std::fs::read_to_string(config_path)?;
    Ok(Some(serde_yaml::from_str(&raw)?))
}

#[cfg(test)]
#[path = "archive_tests.rs"]
mod tests;
