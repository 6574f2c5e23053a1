//! pycharm-workspace - generate PyCharm workspace files for a Python project
//!
//! This crate provides functionality to:
//! - Locate the newest PyCharm configuration directory under the user's home
//! - Register the project's virtualenv interpreter in `jdk.table.xml`
//! - Write the project's `.idea` directory (module, modules, misc and
//!   workspace files)
pub mod config;
pub mod error;
pub mod generator;
pub mod inflect;
pub mod locator;
pub mod registrar;
pub mod template;
pub mod workspace;

// Re-export commonly used types
pub use config::{Properties, keys};
pub use error::{Error, Result};
pub use generator::{GenerateReport, WorkspaceGenerator, generate, generate_with_home};
pub use inflect::underscore;
pub use locator::locate_config_options_dir;
pub use registrar::{InterpreterRegistrar, Registration};
pub use workspace::{WorkspaceFileSet, WorkspaceFileWriter, WorkspaceSettings};
