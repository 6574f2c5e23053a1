use anyhow::{Context, Result};
use pycharm_workspace_core::{Properties, WorkspaceGenerator, keys};
use std::path::Path;

pub fn locate_command(pycharm_version: &str, home: Option<&Path>) -> Result<()> {
    let generator = match home {
        Some(home) => WorkspaceGenerator::with_home(home),
        None => WorkspaceGenerator::new(),
    };

    let mut properties = Properties::new();
    properties.set(keys::MAIN_VERSION, pycharm_version);

    let options_dir = generator
        .config_options_dir(&properties)
        .context("Failed to locate PyCharm configuration")?;
    println!("{}", options_dir.display());
    Ok(())
}
