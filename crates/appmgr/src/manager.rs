// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `AppManager`: the library/install/backup directory invariants and the
//! install/uninstall/restore state machine, grounded on
//! `modules/bios/appmanager/base.go`.

use std::path::PathBuf;
use std::sync::Arc;

use flexbios_adapters::{SystemctlAction, SystemctlAdapter};
use flexbios_core::{AppDescriptor, ServiceUnitSpec};

use crate::archive;
use crate::error::AppMgrError;
use crate::library;

/// Directory layout and install-time knobs for one `AppManager`.
#[derive(Debug, Clone)]
pub struct AppManagerConfig {
    pub root_path: PathBuf,
    pub system_path: PathBuf,
    /// When set, the synthesized unit file is named
    /// `{name}-{version}.service` instead of `{name}.service`.
    pub file_name_with_version: bool,
}

impl Default for AppManagerConfig {
    fn default() -> Self {
        Self {
            root_path: PathBuf::from("/ros/apps"),
            system_path: PathBuf::from("/etc/systemd/system"),
            file_name_with_version: false,
        }
    }
}

impl AppManagerConfig {
    pub fn library_dir(&self) -> PathBuf {
        self.root_path.join("library")
    }

    pub fn installed_dir(&self) -> PathBuf {
        self.root_path.join("installed")
    }

    pub fn backups_dir(&self) -> PathBuf {
        self.root_path.join("backups")
    }

    pub fn tmp_dir(&self) -> PathBuf {
        self.root_path.join("tmp")
    }
}

fn install_failed(step: &'static str, source: impl std::error::Error + Send + Sync + 'static) -> AppMgrError {
    AppMgrError::InstallFailed { step, source: Box::new(source) }
}

/// Recursively copies `src` onto `dest`, creating directories as needed.
/// Used by uninstall (installed → backup) and restore (backup → installed).
fn copy_dir_recursive(src: &std::path::Path, dest: &std::path::Path) -> std::io::Result<()> {
    std::fs::create_dir_all(dest)?;
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let dest_path = dest.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir_recursive(&entry.path(), &dest_path)?;
        } else {
            std::fs::copy(entry.path(), &dest_path)?;
        }
    }
    Ok(())
}

/// Library/install/backup FSM for one host's apps, plus the systemd unit
/// each installed app gets.
pub struct AppManager {
    config: AppManagerConfig,
    systemctl: Arc<dyn SystemctlAdapter>,
}

impl AppManager {
    /// Creates the library/installed/backups/tmp directories (and
    /// `system_path`) if missing, matching `NewAppManager`'s eager
    /// directory creation.
    pub fn new(config: AppManagerConfig, systemctl: Arc<dyn SystemctlAdapter>) -> Result<Self, AppMgrError> {
        for dir in
            [config.library_dir(), config.installed_dir(), config.backups_dir(), config.tmp_dir()]
        {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::create_dir_all(&config.system_path)?;
        Ok(Self { config, systemctl })
    }

    pub fn config(&self) -> &AppManagerConfig {
        &self.config
    }

    pub fn list_library_apps(&self) -> Result<Vec<AppDescriptor>, AppMgrError> {
        Ok(library::scan_library(&self.config.library_dir())?)
    }

    pub fn list_installed_apps(&self) -> Result<Vec<AppDescriptor>, AppMgrError> {
        Ok(library::scan_two_level(&self.config.installed_dir())?)
    }

    pub fn list_backups(&self) -> Result<Vec<AppDescriptor>, AppMgrError> {
        Ok(library::scan_two_level(&self.config.backups_dir())?)
    }

    fn unit_file_name(&self, name: &str, version: &str) -> String {
        if self.config.file_name_with_version {
            format!("{name}-{version}.service")
        } else {
            format!("{name}.service")
        }
    }

    /// Resolves the archive, synthesizes a unit, and starts the service. On failure at any step after
    /// archive resolution, the returned [`AppMgrError::InstallFailed`]
    /// names the last step attempted.
    pub async fn install(&self, descriptor: &AppDescriptor) -> Result<(), AppMgrError> {
        let archive_path = self
            .list_library_apps()?
            .into_iter()
            .find(|a| a.name == descriptor.name && a.version == descriptor.version)
            .and_then(|a| a.path)
            .ok_or_else(|| AppMgrError::NotInLibrary {
                name: descriptor.name.clone(),
                version: descriptor.version.clone(),
            })?;

        let unit = descriptor.unit_name();
        // Best effort: a fresh install of an app with no prior unit fails
        // these harmlessly, matching `stopAndRemoveOldApp`'s own
        // error-swallowing for a service that was never installed.
        if let Err(err) = self.systemctl.do_action(&unit, SystemctlAction::Stop).await {
            tracing::debug!(%unit, %err, "no running service to stop before install");
        }
        if let Err(err) = self.systemctl.do_action(&unit, SystemctlAction::Disable).await {
            tracing::debug!(%unit, %err, "no enabled service to disable before install");
        }

        let install_dir = self.config.installed_dir().join(&descriptor.name).join(&descriptor.version);
        archive::extract_zip(&archive_path, &install_dir, &descriptor.name)
            .map_err(|e| install_failed("extract archive", e))?;

        let app_config = archive::read_app_config(&install_dir).map_err(|e| install_failed("parse config.yaml", e))?;

        let working_dir = install_dir.to_string_lossy().into_owned();
        let mut spec = ServiceUnitSpec::new(descriptor.name.clone(), working_dir);
        if let Some(cfg) = &app_config {
            spec = spec.with_environment(Some(cfg.service_file.env.clone()));
        }
        let root_dir = self.config.installed_dir().to_string_lossy().into_owned();
        spec = spec.template_exec_start(&root_dir);

        let unit_path = self.config.system_path.join(self.unit_file_name(&descriptor.name, &descriptor.version));
        std::fs::write(&unit_path, spec.render()).map_err(|e| install_failed("write service unit", e))?;

        self.systemctl
            .do_action(&unit, SystemctlAction::Enable)
            .await
            .map_err(|e| install_failed("enable service", e))?;
        self.systemctl
            .do_action(&unit, SystemctlAction::Start)
            .await
            .map_err(|e| install_failed("start service", e))?;

        Ok(())
    }

    /// `assert installed → stop → disable → remove unit file (tolerate
    /// not-present) → copy installed tree to backups → delete installed
    /// tree`.
    pub async fn uninstall(&self, name: &str, version: &str) -> Result<(), AppMgrError> {
        let install_dir = self.config.installed_dir().join(name).join(version);
        if !install_dir.exists() {
            return Err(AppMgrError::NotInstalled { name: name.to_string(), version: version.to_string() });
        }

        let unit = format!("{name}.service");
        self.systemctl.do_action(&unit, SystemctlAction::Stop).await?;
        self.systemctl.do_action(&unit, SystemctlAction::Disable).await?;

        let unit_path = self.config.system_path.join(self.unit_file_name(name, version));
        if unit_path.exists() {
            std::fs::remove_file(&unit_path)?;
        }

        let backup_dir = self.config.backups_dir().join(name).join(version);
        copy_dir_recursive(&install_dir, &backup_dir)?;
        std::fs::remove_dir_all(&install_dir)?;
        Ok(())
    }

    /// Copies a backup back to `installed/` and restarts the service.
    pub async fn restore_backup(&self, name: &str, version: &str) -> Result<(), AppMgrError> {
        let backup_dir = self.config.backups_dir().join(name).join(version);
        if !backup_dir.exists() {
            return Err(AppMgrError::NoBackup { name: name.to_string(), version: version.to_string() });
        }
        let install_dir = self.config.installed_dir().join(name).join(version);
        copy_dir_recursive(&backup_dir, &install_dir)?;

        let unit = format!("{name}.service");
        self.systemctl.do_action(&unit, SystemctlAction::Start).await?;
        Ok(())
    }

    /// Resolves an installed app by the `id` field of its `config.yaml`,
    /// not by directory name.
    pub fn get_app_by_id(&self, app_id: &str, version: &str) -> Result<AppDescriptor, AppMgrError> {
        for descriptor in self.list_installed_apps()? {
            if descriptor.version != version {
                continue;
            }
            let install_dir = self.config.installed_dir().join(&descriptor.name).join(&descriptor.version);
            if let Ok(Some(cfg)) = archive::read_app_config(&install_dir) {
                if cfg.id == app_id {
                    return Ok(descriptor);
                }
            }
        }
        Err(AppMgrError::NotFound(app_id.to_string()))
    }
}

#[cfg(test)]
#[path = "manager_tests.rs"]
mod tests;
