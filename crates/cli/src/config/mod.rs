//! Properties file discovery and starter generation

use anyhow::{Context, Result};
use pycharm_workspace_core::{Properties, keys};
use std::path::{Path, PathBuf};

/// File names looked up in the working directory, in order
pub const DEFAULT_PROPERTIES_FILES: [&str; 2] = ["pycharm-workspace.json", "pycharm-workspace.toml"];

/// First default properties file present in `dir`
pub fn find_properties_file(dir: &Path) -> Option<PathBuf> {
    DEFAULT_PROPERTIES_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Load properties from `config` (or the default file in `cwd`) and apply overrides
pub fn load_properties(config: Option<&Path>, defines: &[String], cwd: &Path) -> Result<Properties> {
    let path = match config {
        Some(path) => Some(path.to_path_buf()),
        None => find_properties_file(cwd),
    };

    let mut properties = match path {
        Some(path) => Properties::load_from_file(&path)
            .with_context(|| format!("Failed to load properties from {}", path.display()))?,
        None => {
            tracing::debug!("No properties file found in {}", cwd.display());
            Properties::new()
        }
    };

    for define in defines {
        properties
            .apply_override(define)
            .with_context(|| format!("Invalid property override '{define}'"))?;
    }

    // Relative project paths are taken from the working directory
    if let Ok(project_path) = properties.project_path() {
        if project_path.is_relative() {
            let resolved = cwd.join(project_path);
            tracing::debug!("Resolved project path to {}", resolved.display());
            properties.set(keys::PROJECT_PATH, resolved.display().to_string());
        }
    }

    Ok(properties)
}

/// Starter properties for the project rooted at `project_root`
pub fn create_default_properties(project_root: &Path) -> Properties {
    let mut properties = Properties::new();
    properties.set(keys::PROJECT_PATH, project_root.display().to_string());
    properties.set(keys::MAIN_VERSION, pycharm_workspace_core::config::DEFAULT_MAIN_VERSION);
    properties.set(keys::UNITTEST_DIR, "src/unittest/python");
    properties.set(keys::INTEGRATIONTEST_DIR, "src/integrationtest/python");
    properties.set(
        keys::TARGET_DIR,
        pycharm_workspace_core::config::DEFAULT_TARGET_DIR,
    );
    properties
}
