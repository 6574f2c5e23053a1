use anyhow::{Context, Result};
use pycharm_workspace_core::WorkspaceGenerator;
use std::env;
use std::path::Path;

use crate::config::load_properties;

pub fn generate_command(config: Option<&Path>, defines: &[String], home: Option<&Path>) -> Result<()> {
    let cwd = env::current_dir().context("Failed to get current directory")?;
    let mut properties = load_properties(config, defines, &cwd)?;

    let generator = match home {
        Some(home) => WorkspaceGenerator::with_home(home),
        None => WorkspaceGenerator::new(),
    };
    let report = generator
        .generate(&mut properties)
        .context("Failed to generate PyCharm workspace")?;

    println!(
        "🐍 Interpreter '{}' registered in {}",
        report.registration.interpreter_name,
        report.registration.table_path.display()
    );
    if report.registration.replaced > 0 {
        println!("   • Replaced the previous entry with the same name");
    }

    println!("📁 Workspace files in {}:", report.files.idea_dir.display());
    for file in report.files.files() {
        if let Some(name) = file.file_name() {
            println!("   • {}", name.to_string_lossy());
        }
    }

    println!("\n✅ PyCharm workspace created");
    Ok(())
}
