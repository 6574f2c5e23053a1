//! Generation of the project-local `.idea` directory

use crate::config::{Properties, keys};
use crate::error::{Error, Result};
use crate::inflect::underscore;
use crate::template::{Template, escape_attr, fill_and_write};
use std::fs;
use std::path::{Path, PathBuf};

pub const IDEA_DIR: &str = ".idea";
pub const MODULE_REGISTRY_FILE: &str = "modules.xml";
pub const PROJECT_SDK_FILE: &str = "misc.xml";
pub const RUN_CONFIGURATIONS_FILE: &str = "workspace.xml";

/// Everything the `.idea` files are rendered from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceSettings {
    pub project_path: PathBuf,
    pub project_name: String,
    pub target_dir: String,
    pub unittest_dir: Option<String>,
    pub integrationtest_dir: Option<String>,
    pub interpreter_name: String,
}

impl WorkspaceSettings {
    /// Read the settings from the property store.
    ///
    /// The interpreter name must already have been published by the registrar.
    pub fn from_properties(properties: &Properties) -> Result<Self> {
        let interpreter_name = properties
            .interpreter_name()
            .ok_or_else(|| Error::MissingProperty(keys::INTERPRETER_NAME.to_string()))?;

        Ok(Self {
            project_path: properties.project_path()?,
            project_name: properties.project_name()?,
            target_dir: properties.target_dir().to_string(),
            unittest_dir: properties.unittest_dir().map(str::to_string),
            integrationtest_dir: properties.integrationtest_dir().map(str::to_string),
            interpreter_name: interpreter_name.to_string(),
        })
    }

    pub fn module_file_name(&self) -> String {
        format!("{}.iml", self.project_name)
    }

    /// Main source root, relative to the project, always with `/` separators
    pub fn source_dir(&self) -> String {
        format!("src/{}", underscore(&self.project_name))
    }
}

/// Paths of the generated files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceFileSet {
    pub idea_dir: PathBuf,
    pub module_descriptor: PathBuf,
    pub module_registry: PathBuf,
    pub project_sdk: PathBuf,
    pub run_configurations: PathBuf,
}

impl WorkspaceFileSet {
    pub fn files(&self) -> [&Path; 4] {
        [
            &self.module_descriptor,
            &self.module_registry,
            &self.project_sdk,
            &self.run_configurations,
        ]
    }
}

pub struct WorkspaceFileWriter {
    settings: WorkspaceSettings,
}

impl WorkspaceFileWriter {
    pub fn new(settings: WorkspaceSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &WorkspaceSettings {
        &self.settings
    }

    /// Write the four workspace files.
    ///
    /// Files are written one after another; a failure leaves the ones
    /// already written in place.
    pub fn write(&self) -> Result<WorkspaceFileSet> {
        tracing::info!("Creating new .idea directory");
        let idea_dir = self.settings.project_path.join(IDEA_DIR);
        fs::create_dir_all(&idea_dir)?;

        let files = WorkspaceFileSet {
            module_descriptor: idea_dir.join(self.settings.module_file_name()),
            module_registry: idea_dir.join(MODULE_REGISTRY_FILE),
            project_sdk: idea_dir.join(PROJECT_SDK_FILE),
            run_configurations: idea_dir.join(RUN_CONFIGURATIONS_FILE),
            idea_dir,
        };

        self.write_module_descriptor(&files.module_descriptor)?;
        self.write_module_registry(&files.module_registry)?;
        self.write_project_sdk(&files.project_sdk)?;
        self.write_run_configurations(&files.run_configurations)?;

        Ok(files)
    }

    fn write_module_descriptor(&self, path: &Path) -> Result<()> {
        log_creating(path);
        let unit_tests = self.test_source_folder(self.settings.unittest_dir.as_deref(), path)?;
        let integration_tests =
            self.test_source_folder(self.settings.integrationtest_dir.as_deref(), path)?;
        let source_dir = escape_attr(&self.settings.source_dir());
        let output_directory = escape_attr(&self.settings.target_dir);

        fill_and_write(
            Template::ModuleDescriptor,
            path,
            &[
                ("source_dir", source_dir.as_str()),
                ("unit_tests", unit_tests.as_str()),
                ("integration_tests", integration_tests.as_str()),
                ("output_directory", output_directory.as_str()),
            ],
        )
    }

    /// Test `<sourceFolder>` fragment, empty when the directory is not configured
    fn test_source_folder(&self, directory: Option<&str>, path: &Path) -> Result<String> {
        let Some(directory) = directory else {
            return Ok(String::new());
        };
        let directory = escape_attr(directory);
        Template::TestSourceFolder
            .render(&[("directory", directory.as_str())])
            .map_err(|e| Error::file_write(Template::TestSourceFolder.name(), path, e))
    }

    fn write_module_registry(&self, path: &Path) -> Result<()> {
        log_creating(path);
        let module_file_name = escape_attr(&self.settings.module_file_name());
        fill_and_write(
            Template::ModuleRegistry,
            path,
            &[("module_file_name", module_file_name.as_str())],
        )
    }

    fn write_project_sdk(&self, path: &Path) -> Result<()> {
        log_creating(path);
        let interpreter_name = escape_attr(&self.settings.interpreter_name);
        fill_and_write(
            Template::ProjectSdk,
            path,
            &[("interpreter_name", interpreter_name.as_str())],
        )
    }

    fn write_run_configurations(&self, path: &Path) -> Result<()> {
        log_creating(path);
        let project_name = escape_attr(&self.settings.project_name);
        fill_and_write(
            Template::RunConfigurations,
            path,
            &[("project_name", project_name.as_str())],
        )
    }
}

fn log_creating(path: &Path) {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    tracing::debug!("Creating new {} file in PyCharm .idea directory", file_name);
}
