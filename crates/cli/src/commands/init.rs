use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::{DEFAULT_PROPERTIES_FILES, create_default_properties};

pub fn init_command(cwd: Option<&Path>, force: bool) -> Result<()> {
    // Determine the project root
    let project_root = match cwd {
        Some(cwd) => PathBuf::from(cwd),
        None => env::current_dir().context("Failed to get current directory")?,
    };

    let project_root = project_root
        .canonicalize()
        .with_context(|| format!("Failed to canonicalize {}", project_root.display()))?;

    let config_path = project_root.join(DEFAULT_PROPERTIES_FILES[0]);
    if config_path.exists() && !force {
        println!("❌ Properties already exist at: {}", config_path.display());
        println!("   Use --force to overwrite");
        return Ok(());
    }

    let properties = create_default_properties(&project_root);
    properties
        .save_to_file(&config_path)
        .with_context(|| format!("Failed to write properties to {}", config_path.display()))?;
    info!("Created properties file: {}", config_path.display());

    println!("✅ Created properties: {}", config_path.display());
    println!("\n📌 Generate the workspace with:");
    println!("   pycharm-workspace generate");

    Ok(())
}
