//! Property store for pycharm-workspace

mod properties;

pub use properties::{DEFAULT_MAIN_VERSION, DEFAULT_TARGET_DIR, Properties, keys};
