//! XML templates and the `{placeholder}` renderer that fills them

mod bodies;

use crate::error::{Error, Result};
use std::fmt;
use std::path::Path;

/// Named value substituted for a `{name}` placeholder
pub type Field<'a> = (&'a str, &'a str);

/// Every template shipped with the generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// `<jdk>` entry registered in `jdk.table.xml`
    Interpreter,
    /// Empty `jdk.table.xml` used when PyCharm has not written one yet
    InterpreterTable,
    /// `<project>.iml`
    ModuleDescriptor,
    /// Test `<sourceFolder>` fragment embedded in the module descriptor
    TestSourceFolder,
    /// `modules.xml`
    ModuleRegistry,
    /// `misc.xml`
    ProjectSdk,
    /// `workspace.xml`
    RunConfigurations,
}

impl Template {
    pub fn name(self) -> &'static str {
        match self {
            Template::Interpreter => "interpreter",
            Template::InterpreterTable => "interpreter table",
            Template::ModuleDescriptor => "module descriptor",
            Template::TestSourceFolder => "test source folder",
            Template::ModuleRegistry => "module registry",
            Template::ProjectSdk => "project sdk",
            Template::RunConfigurations => "run configurations",
        }
    }

    pub fn body(self) -> &'static str {
        match self {
            Template::Interpreter => bodies::INTERPRETER,
            Template::InterpreterTable => bodies::INTERPRETER_TABLE,
            Template::ModuleDescriptor => bodies::MODULE_DESCRIPTOR,
            Template::TestSourceFolder => bodies::TEST_SOURCE_FOLDER,
            Template::ModuleRegistry => bodies::MODULE_REGISTRY,
            Template::ProjectSdk => bodies::PROJECT_SDK,
            Template::RunConfigurations => bodies::RUN_CONFIGURATIONS,
        }
    }

    /// Fragments keep their surrounding whitespace, whole documents do not
    fn is_fragment(self) -> bool {
        matches!(self, Template::TestSourceFolder)
    }

    pub fn render(self, fields: &[Field<'_>]) -> std::result::Result<String, RenderError> {
        let body = if self.is_fragment() {
            self.body()
        } else {
            self.body().trim()
        };
        substitute(body, fields)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("no value for placeholder '{{{0}}}'")]
    UnknownField(String),

    #[error("unterminated placeholder at byte {0}")]
    Unterminated(usize),
}

/// Replace every `{name}` in `text` with its field value.
///
/// Fields the text never references are ignored.
pub fn substitute(text: &str, fields: &[Field<'_>]) -> std::result::Result<String, RenderError> {
    let mut output = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('{') {
        output.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let close = after
            .find('}')
            .ok_or(RenderError::Unterminated(text.len() - rest.len() + open))?;
        let key = &after[..close];
        let value = fields
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| *value)
            .ok_or_else(|| RenderError::UnknownField(key.to_string()))?;
        output.push_str(value);
        rest = &after[close + 1..];
    }

    output.push_str(rest);
    Ok(output)
}

/// Render `template` and write it to `output_path`, replacing any existing file
pub fn fill_and_write(template: Template, output_path: &Path, fields: &[Field<'_>]) -> Result<()> {
    let contents = template
        .render(fields)
        .map_err(|e| Error::file_write(template.name(), output_path, e))?;
    std::fs::write(output_path, contents)
        .map_err(|e| Error::file_write(template.name(), output_path, e))
}

/// Escape a value for use inside a double-quoted XML attribute
pub fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_substitute() {
        let text = substitute("<a name=\"{name}\">{name}/{dir}</a>", &[("name", "x"), ("dir", "y")]);
        assert_eq!(text.unwrap(), "<a name=\"x\">x/y</a>");
    }

    #[test]
    fn test_substitute_ignores_unused_fields() {
        let text = substitute("plain $MODULE_DIR$ text", &[("unused", "value")]);
        assert_eq!(text.unwrap(), "plain $MODULE_DIR$ text");
    }

    #[test]
    fn test_substitute_unknown_field() {
        let err = substitute("<a>{missing}</a>", &[("name", "x")]).unwrap_err();
        assert_eq!(err, RenderError::UnknownField("missing".to_string()));
    }

    #[test]
    fn test_substitute_unterminated() {
        let err = substitute("ab{name", &[("name", "x")]).unwrap_err();
        assert_eq!(err, RenderError::Unterminated(2));
    }

    #[test]
    fn test_documents_are_stripped_fragments_are_not() {
        let misc = Template::ProjectSdk
            .render(&[("interpreter_name", "Python (demo)")])
            .unwrap();
        assert!(misc.starts_with("<?xml"));
        assert!(misc.ends_with("</project>"));
        assert!(misc.contains("project-jdk-name=\"Python (demo)\""));

        let fragment = Template::TestSourceFolder
            .render(&[("directory", "src/unittest/python")])
            .unwrap();
        assert!(fragment.starts_with("\n      <sourceFolder"));
    }

    #[test]
    fn test_every_document_template_renders() {
        let fields = [
            ("interpreter_name", "Python (demo)"),
            ("python_path", "/work/demo/venv/bin/python"),
            ("project_name", "demo"),
            ("source_dir", "src/demo"),
            ("unit_tests", ""),
            ("integration_tests", ""),
            ("output_directory", "target"),
            ("directory", "src/unittest/python"),
            ("module_file_name", "demo.iml"),
        ];
        for template in [
            Template::Interpreter,
            Template::InterpreterTable,
            Template::ModuleDescriptor,
            Template::TestSourceFolder,
            Template::ModuleRegistry,
            Template::ProjectSdk,
            Template::RunConfigurations,
        ] {
            let rendered = template.render(&fields).unwrap();
            assert!(!rendered.contains('{'), "{template} left a placeholder");
            if !template.is_fragment() {
                roxmltree::Document::parse(&rendered)
                    .unwrap_or_else(|e| panic!("{template} is not valid XML: {e}"));
            }
        }
    }

    #[test]
    fn test_fill_and_write_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("misc.xml");
        fs::write(&path, "stale").unwrap();

        fill_and_write(Template::ProjectSdk, &path, &[("interpreter_name", "Python (a)")]).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("Python (a)"));
        assert!(!contents.contains("stale"));
    }

    #[test]
    fn test_fill_and_write_missing_field_is_write_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("misc.xml");

        match fill_and_write(Template::ProjectSdk, &path, &[]) {
            Err(Error::FileWrite { template, path: p, .. }) => {
                assert_eq!(template, "project sdk");
                assert_eq!(p, path);
            }
            other => panic!("expected FileWrite, got {other:?}"),
        }
        assert!(!path.exists());
    }

    #[test]
    fn test_fill_and_write_io_error_is_write_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing-dir").join("misc.xml");

        let result = fill_and_write(Template::ProjectSdk, &path, &[("interpreter_name", "x")]);
        assert!(matches!(result, Err(Error::FileWrite { .. })));
    }

    #[test]
    fn test_escape_attr() {
        assert_eq!(escape_attr("a & \"b\" <c>"), "a &amp; &quot;b&quot; &lt;c&gt;");
        assert_eq!(escape_attr("Python (demo)"), "Python (demo)");
    }
}
