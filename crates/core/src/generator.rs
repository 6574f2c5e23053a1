use crate::config::{Properties, keys};
use crate::error::{Error, Result};
use crate::locator::locate_config_options_dir;
use crate::registrar::{InterpreterRegistrar, Registration};
use crate::workspace::{WorkspaceFileSet, WorkspaceFileWriter, WorkspaceSettings};
use std::path::{Path, PathBuf};

/// What a `generate` run changed on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub config_options_dir: PathBuf,
    pub registration: Registration,
    pub files: WorkspaceFileSet,
}

/// Registers the project interpreter and writes the `.idea` directory
pub struct WorkspaceGenerator {
    home: Option<PathBuf>,
}

impl Default for WorkspaceGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkspaceGenerator {
    /// Generator that searches the current user's home directory
    pub fn new() -> Self {
        Self { home: None }
    }

    /// Generator that searches `home` instead of the user's home directory
    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Self {
            home: Some(home.into()),
        }
    }

    pub fn home(&self) -> Result<PathBuf> {
        match &self.home {
            Some(home) => Ok(home.clone()),
            None => dirs::home_dir().ok_or(Error::NoHomeDirectory),
        }
    }

    /// Locate the config-options directory for the configured PyCharm version
    pub fn config_options_dir(&self, properties: &Properties) -> Result<PathBuf> {
        let home = self.home()?;
        locate_config_options_dir(&home, properties.main_version())
    }

    pub fn generate(&self, properties: &mut Properties) -> Result<GenerateReport> {
        tracing::info!("Generating PyCharm project files");

        let project_path = properties.project_path()?;
        if !project_path.is_absolute() {
            return Err(Error::InvalidProperty {
                name: keys::PROJECT_PATH.to_string(),
                reason: format!("'{}' is not an absolute path", project_path.display()),
            });
        }
        properties.set_if_unset(keys::MAIN_VERSION, crate::config::DEFAULT_MAIN_VERSION);

        let config_options_dir = self.config_options_dir(properties)?;
        let registration =
            InterpreterRegistrar::new(&config_options_dir).register_project(properties)?;

        let settings = WorkspaceSettings::from_properties(properties)?;
        let files = WorkspaceFileWriter::new(settings).write()?;

        tracing::info!("PyCharm workspace created");
        Ok(GenerateReport {
            config_options_dir,
            registration,
            files,
        })
    }
}

/// Run the whole task against the user's home directory
pub fn generate(properties: &mut Properties) -> Result<GenerateReport> {
    WorkspaceGenerator::new().generate(properties)
}

/// Run the whole task searching `home` for the PyCharm configuration
pub fn generate_with_home(properties: &mut Properties, home: &Path) -> Result<GenerateReport> {
    WorkspaceGenerator::with_home(home).generate(properties)
}
