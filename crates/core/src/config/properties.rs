use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Property names understood by the generator
pub mod keys {
    pub const PROJECT_PATH: &str = "pycharm_workspace_project_path";
    pub const MAIN_VERSION: &str = "pycharm_workspace_main_version";
    pub const INTERPRETER_NAME: &str = "pycharm_workspace_project_interpreter_name";
    pub const PROJECT_NAME: &str = "name";
    pub const UNITTEST_DIR: &str = "dir_source_unittest_python";
    pub const INTEGRATIONTEST_DIR: &str = "dir_source_integrationtest_python";
    pub const TARGET_DIR: &str = "dir_target";
}

pub const DEFAULT_MAIN_VERSION: &str = "2019";
pub const DEFAULT_TARGET_DIR: &str = "target";

/// Flat key-value configuration store.
///
/// Empty values are treated the same as missing ones by every accessor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Properties {
    values: BTreeMap<String, String>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load properties from a `.toml` or JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let parsed = if is_toml {
            Self::from_toml_str(&contents)
        } else {
            Self::from_json_str(&contents)
        };
        let properties =
            parsed.map_err(|e| Error::Config(format!("Failed to load {}: {e}", path.display())))?;

        tracing::debug!(
            "Loaded {} properties from {}",
            properties.values.len(),
            path.display()
        );
        Ok(properties)
    }

    pub fn from_json_str(contents: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(contents)?;
        let serde_json::Value::Object(map) = value else {
            return Err(Error::Config("expected a JSON object at top level".to_string()));
        };

        let mut properties = Self::new();
        for (key, value) in map {
            let value = match value {
                serde_json::Value::Null => continue,
                serde_json::Value::String(s) => s,
                serde_json::Value::Bool(b) => b.to_string(),
                serde_json::Value::Number(n) if !n.is_f64() => n.to_string(),
                serde_json::Value::Number(_) => return Err(fractional_number(&key)),
                _ => {
                    return Err(Error::Config(format!(
                        "property '{key}' must be a scalar value"
                    )));
                }
            };
            properties.values.insert(key, value);
        }
        Ok(properties)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let table: toml::Table = contents.parse()?;

        let mut properties = Self::new();
        for (key, value) in table {
            let value = match value {
                toml::Value::String(s) => s,
                toml::Value::Boolean(b) => b.to_string(),
                toml::Value::Integer(i) => i.to_string(),
                toml::Value::Float(_) => return Err(fractional_number(&key)),
                _ => {
                    return Err(Error::Config(format!(
                        "property '{key}' must be a scalar value"
                    )));
                }
            };
            properties.values.insert(key, value);
        }
        Ok(properties)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents + "\n")?;
        Ok(())
    }

    /// Apply a `key=value` override
    pub fn apply_override(&mut self, assignment: &str) -> Result<()> {
        let (key, value) = assignment
            .split_once('=')
            .ok_or_else(|| Error::Config(format!("expected key=value, got '{assignment}'")))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(Error::Config(format!(
                "missing property name in '{assignment}'"
            )));
        }
        self.set(key, value);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn set_if_unset(&mut self, key: &str, value: impl Into<String>) {
        if self.get(key).is_none() {
            self.set(key, value);
        }
    }

    pub fn require(&self, key: &str) -> Result<&str> {
        self.get(key)
            .ok_or_else(|| Error::MissingProperty(key.to_string()))
    }

    pub fn project_path(&self) -> Result<PathBuf> {
        self.require(keys::PROJECT_PATH).map(PathBuf::from)
    }

    /// Leaf directory name of the project path
    pub fn project_leaf_name(&self) -> Result<String> {
        let path = self.project_path()?;
        path.file_name()
            .and_then(|name| name.to_str())
            .map(str::to_string)
            .ok_or_else(|| Error::InvalidProperty {
                name: keys::PROJECT_PATH.to_string(),
                reason: format!("'{}' has no directory name", path.display()),
            })
    }

    /// Project name, falling back to the leaf of the project path
    pub fn project_name(&self) -> Result<String> {
        match self.get(keys::PROJECT_NAME) {
            Some(name) => Ok(name.to_string()),
            None => self.project_leaf_name(),
        }
    }

    pub fn main_version(&self) -> &str {
        self.get(keys::MAIN_VERSION).unwrap_or(DEFAULT_MAIN_VERSION)
    }

    pub fn target_dir(&self) -> &str {
        self.get(keys::TARGET_DIR).unwrap_or(DEFAULT_TARGET_DIR)
    }

    pub fn unittest_dir(&self) -> Option<&str> {
        self.get(keys::UNITTEST_DIR)
    }

    pub fn integrationtest_dir(&self) -> Option<&str> {
        self.get(keys::INTEGRATIONTEST_DIR)
    }

    pub fn interpreter_name(&self) -> Option<&str> {
        self.get(keys::INTERPRETER_NAME)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Fractional numbers lose trailing zeros (`2019.10` reads back as `2019.1`)
fn fractional_number(key: &str) -> Error {
    Error::Config(format!(
        "property '{key}' is a fractional number; quote it as a string"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let props = Properties::new();
        assert_eq!(props.main_version(), "2019");
        assert_eq!(props.target_dir(), "target");
        assert!(props.unittest_dir().is_none());
        assert!(props.interpreter_name().is_none());
    }

    #[test]
    fn test_missing_project_path() {
        let props = Properties::new();
        match props.project_path() {
            Err(Error::MissingProperty(name)) => assert_eq!(name, keys::PROJECT_PATH),
            other => panic!("expected MissingProperty, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_value_counts_as_unset() {
        let mut props = Properties::new();
        props.set(keys::UNITTEST_DIR, "");
        assert!(props.unittest_dir().is_none());

        props.set_if_unset(keys::UNITTEST_DIR, "src/unittest/python");
        assert_eq!(props.unittest_dir(), Some("src/unittest/python"));
    }

    #[test]
    fn test_project_name_falls_back_to_leaf() {
        let mut props = Properties::new();
        props.set(keys::PROJECT_PATH, "/home/dev/projects/my-app");
        assert_eq!(props.project_name().unwrap(), "my-app");

        props.set(keys::PROJECT_NAME, "MyApp");
        assert_eq!(props.project_name().unwrap(), "MyApp");
        assert_eq!(props.project_leaf_name().unwrap(), "my-app");
    }

    #[test]
    fn test_root_path_has_no_leaf() {
        let mut props = Properties::new();
        props.set(keys::PROJECT_PATH, "/");
        assert!(matches!(
            props.project_leaf_name(),
            Err(Error::InvalidProperty { .. })
        ));
    }

    #[test]
    fn test_json_and_toml_load_identically() {
        let temp_dir = TempDir::new().unwrap();
        let json_path = temp_dir.path().join("props.json");
        let toml_path = temp_dir.path().join("props.toml");

        fs::write(
            &json_path,
            r#"{
                "pycharm_workspace_project_path": "/work/demo",
                "pycharm_workspace_main_version": 2020,
                "dir_target": "target",
                "unused": null
            }"#,
        )
        .unwrap();
        fs::write(
            &toml_path,
            r#"
pycharm_workspace_project_path = "/work/demo"
pycharm_workspace_main_version = 2020
dir_target = "target"
"#,
        )
        .unwrap();

        let from_json = Properties::load_from_file(&json_path).unwrap();
        let from_toml = Properties::load_from_file(&toml_path).unwrap();
        assert_eq!(from_json, from_toml);
        assert_eq!(from_json.main_version(), "2020");
    }

    #[test]
    fn test_nested_values_rejected() {
        let result = Properties::from_json_str(r#"{"dir_target": ["a", "b"]}"#);
        assert!(matches!(result, Err(Error::Config(_))));

        let result = Properties::from_json_str(r#"["not", "an", "object"]"#);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_fractional_versions_must_be_quoted() {
        let result = Properties::from_json_str(r#"{"pycharm_workspace_main_version": 2019.10}"#);
        assert!(matches!(result, Err(Error::Config(msg)) if msg.contains("quote")));

        let result = Properties::from_toml_str("pycharm_workspace_main_version = 2019.10");
        assert!(matches!(result, Err(Error::Config(msg)) if msg.contains("quote")));

        let props =
            Properties::from_toml_str(r#"pycharm_workspace_main_version = "2019.10""#).unwrap();
        assert_eq!(props.main_version(), "2019.10");
    }

    #[test]
    fn test_overrides() {
        let mut props = Properties::new();
        props.set(keys::MAIN_VERSION, "2019");
        props.apply_override("pycharm_workspace_main_version=2020").unwrap();
        props.apply_override("dir_source_unittest_python=src/unit=tests").unwrap();

        assert_eq!(props.main_version(), "2020");
        assert_eq!(props.unittest_dir(), Some("src/unit=tests"));
        assert!(props.apply_override("no-equals-sign").is_err());
        assert!(props.apply_override("=value").is_err());
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("pycharm-workspace.json");

        let mut props = Properties::new();
        props.set(keys::PROJECT_PATH, "/work/demo");
        props.set(keys::MAIN_VERSION, "2019");
        props.save_to_file(&path).unwrap();

        let reloaded = Properties::load_from_file(&path).unwrap();
        assert_eq!(reloaded, props);
    }
}
