use std::io;
use std::path::PathBuf;

/// Errors that can occur while generating a PyCharm workspace
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Plugin property '{0}' not set")]
    MissingProperty(String),

    #[error("Plugin property '{name}' is invalid: {reason}")]
    InvalidProperty { name: String, reason: String },

    #[error(
        "No PyCharm configuration directory found in {}. Please launch PyCharm for the first time",
        home.display()
    )]
    NoConfigDirectory { home: PathBuf },

    #[error("Could not determine the user home directory")]
    NoHomeDirectory,

    #[error("There was an error trying to write '{template}' into {}", path.display())]
    FileWrite {
        template: String,
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Failed to parse {}: {message}", path.display())]
    XmlParse { path: PathBuf, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    pub(crate) fn file_write(
        template: impl Into<String>,
        path: impl Into<PathBuf>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Error::FileWrite {
            template: template.into(),
            path: path.into(),
            source: source.into(),
        }
    }
}

/// Result type alias for pycharm-workspace operations
pub type Result<T> = std::result::Result<T, Error>;
