//! Register the project's virtualenv in PyCharm's interpreter table
//!
//! The table lives in `<config-options-dir>/jdk.table.xml` and is shared by
//! every project opened with that PyCharm installation. Entries are keyed by
//! their `<name value="...">`: registering an interpreter removes any entry
//! with the same name and appends the new one as the last child of the
//! `ProjectJdkTable` component. Everything outside the edited entries is
//! written back untouched.

use crate::config::{Properties, keys};
use crate::error::{Error, Result};
use crate::template::{Template, escape_attr};
use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};

pub const INTERPRETER_TABLE_FILE: &str = "jdk.table.xml";
const TABLE_COMPONENT: &str = "ProjectJdkTable";
const INDENT: &str = "  ";

/// Display name PyCharm shows for the project's interpreter
pub fn interpreter_name(project_leaf: &str) -> String {
    format!("Python ({project_leaf})")
}

/// Path of the python executable inside the project's `venv`
pub fn python_executable(project_path: &Path) -> PathBuf {
    // Rebuilding from components collapses doubled separators
    let project: PathBuf = project_path.components().collect();
    if cfg!(windows) {
        project.join("venv").join("Scripts").join("python.exe")
    } else {
        project.join("venv").join("bin").join("python")
    }
}

/// Outcome of a registration pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub interpreter_name: String,
    pub table_path: PathBuf,
    /// Entries with the same name that were dropped
    pub replaced: usize,
}

pub struct InterpreterRegistrar {
    options_dir: PathBuf,
}

impl InterpreterRegistrar {
    pub fn new(options_dir: impl Into<PathBuf>) -> Self {
        Self {
            options_dir: options_dir.into(),
        }
    }

    pub fn table_path(&self) -> PathBuf {
        self.options_dir.join(INTERPRETER_TABLE_FILE)
    }

    /// Register the interpreter for the project described by `properties`
    /// and publish its name back under `pycharm_workspace_project_interpreter_name`.
    pub fn register_project(&self, properties: &mut Properties) -> Result<Registration> {
        let project_path = properties.project_path()?;
        let project_leaf = properties.project_leaf_name()?;

        let registration = self.register(&project_leaf, &project_path)?;
        properties.set(keys::INTERPRETER_NAME, registration.interpreter_name.clone());
        Ok(registration)
    }

    pub fn register(&self, project_leaf: &str, project_path: &Path) -> Result<Registration> {
        tracing::info!("Creating new Python interpreter for project's virtualenv");
        let table_path = self.table_path();

        let name = interpreter_name(project_leaf);
        tracing::debug!("New Python interpreter name: '{}'", name);

        let escaped_name = escape_attr(&name);
        let python_path = escape_attr(&python_executable(project_path).to_string_lossy());
        let project_name = escape_attr(project_leaf);
        let entry = Template::Interpreter
            .render(&[
                ("interpreter_name", escaped_name.as_str()),
                ("python_path", python_path.as_str()),
                ("project_name", project_name.as_str()),
            ])
            .map_err(|e| Error::file_write(Template::Interpreter.name(), &table_path, e))?;

        let document = self.read_table(&table_path)?;
        let (updated, replaced) = upsert_entry(&document, &name, &entry).map_err(|message| {
            Error::XmlParse {
                path: table_path.clone(),
                message,
            }
        })?;
        if replaced > 0 {
            tracing::info!("A Python interpreter found with the same name (replacing it)");
        }

        fs::write(&table_path, updated)
            .map_err(|e| Error::file_write(Template::Interpreter.name(), &table_path, e))?;
        tracing::debug!("'{}' file overwritten", table_path.display());

        Ok(Registration {
            interpreter_name: name,
            table_path,
            replaced,
        })
    }

    fn read_table(&self, table_path: &Path) -> Result<String> {
        if table_path.exists() {
            return fs::read_to_string(table_path).map_err(|e| Error::XmlParse {
                path: table_path.to_path_buf(),
                message: format!("could not read the interpreter table: {e}"),
            });
        }

        tracing::info!(
            "No interpreter table at {}, starting an empty one",
            table_path.display()
        );
        fs::create_dir_all(&self.options_dir).map_err(|e| {
            Error::file_write(Template::InterpreterTable.name(), table_path, e)
        })?;
        let empty = Template::InterpreterTable
            .render(&[])
            .map_err(|e| Error::file_write(Template::InterpreterTable.name(), table_path, e))?;
        Ok(empty + "\n")
    }
}

/// Remove every table entry named `name` and append `entry` as the last one.
///
/// Returns the new document text and the number of removed entries.
pub fn upsert_entry(
    document: &str,
    name: &str,
    entry: &str,
) -> std::result::Result<(String, usize), String> {
    let doc = roxmltree::Document::parse(document).map_err(|e| e.to_string())?;
    let table = doc
        .descendants()
        .find(|node| {
            node.has_tag_name("component") && node.attribute("name") == Some(TABLE_COMPONENT)
        })
        .ok_or_else(|| format!("no <component name=\"{TABLE_COMPONENT}\"> element"))?;

    let stale: Vec<Range<usize>> = table
        .children()
        .filter(|child| child.is_element() && entry_name(*child) == Some(name))
        .map(|child| {
            let range = child.range();
            skip_whitespace_back(document, range.start)..range.end
        })
        .collect();

    let table_range = table.range();
    let table_indent = line_indent(document, table_range.start);
    let child_indent = format!("{table_indent}{INDENT}");
    let entry = indent_lines(entry, &child_indent);

    let mut output = String::with_capacity(document.len() + entry.len() + 1);
    let mut cursor = 0;
    for range in &stale {
        output.push_str(&document[cursor..range.start]);
        cursor = range.end;
    }

    let table_text = &document[table_range.clone()];
    if table_text.ends_with("/>") && !table.has_children() {
        // <component name="ProjectJdkTable" /> has to be opened up first
        let close = skip_whitespace_back(document, table_range.end - 2);
        output.push_str(&document[cursor..close]);
        output.push('>');
        output.push('\n');
        output.push_str(&entry);
        output.push('\n');
        output.push_str(table_indent);
        output.push_str("</component>");
        output.push_str(&document[table_range.end..]);
    } else {
        let close_tag = table_text
            .rfind("</")
            .map(|offset| table_range.start + offset)
            .ok_or_else(|| "interpreter table has no closing tag".to_string())?;
        let insert_at = skip_whitespace_back(document, close_tag).max(cursor);
        output.push_str(&document[cursor..insert_at]);
        output.push('\n');
        output.push_str(&entry);
        output.push_str(&document[insert_at..]);
    }

    Ok((output, stale.len()))
}

fn entry_name<'a>(node: roxmltree::Node<'a, '_>) -> Option<&'a str> {
    node.children()
        .find(|child| child.has_tag_name("name"))
        .and_then(|child| child.attribute("value"))
}

fn skip_whitespace_back(text: &str, mut pos: usize) -> usize {
    let bytes = text.as_bytes();
    while pos > 0 && bytes[pos - 1].is_ascii_whitespace() {
        pos -= 1;
    }
    pos
}

/// Leading whitespace of the line containing `pos`, if only whitespace precedes it
fn line_indent(text: &str, pos: usize) -> &str {
    let line_start = text[..pos].rfind('\n').map_or(0, |i| i + 1);
    let prefix = &text[line_start..pos];
    if prefix.chars().all(|c| c == ' ' || c == '\t') {
        prefix
    } else {
        ""
    }
}

fn indent_lines(text: &str, indent: &str) -> String {
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{indent}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
