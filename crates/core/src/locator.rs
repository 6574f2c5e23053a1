//! Find the PyCharm configuration directory under the user's home

use crate::error::{Error, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Configuration directory name prefixes, most preferred first
pub const CONFIG_DIR_PREFIXES: [&str; 2] = [".PyCharm", ".PyCharmCE"];

/// Pick the newest directory name for the first prefix that has any match.
///
/// A name matches when it starts with `prefix + version`, so `.PyCharm2019*`
/// never picks up `.PyCharmCE2019*`. Newest is the lexicographically greatest.
pub fn select_latest<'a, I>(names: I, version: &str) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
    I::IntoIter: Clone,
{
    let names = names.into_iter();
    CONFIG_DIR_PREFIXES.iter().find_map(|prefix| {
        let pattern = format!("{prefix}{version}");
        names
            .clone()
            .filter(|name| name.starts_with(&pattern))
            .max()
            .map(str::to_string)
    })
}

/// Locate `<home>/.PyCharm<version>*/config/options`
pub fn locate_config_options_dir(home: &Path, version: &str) -> Result<PathBuf> {
    let entries = match fs::read_dir(home) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(Error::NoConfigDirectory {
                home: home.to_path_buf(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry?;
        // Follows symlinks
        if !entry.path().is_dir() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            names.push(name.to_string());
        }
    }

    let latest = select_latest(names.iter().map(String::as_str), version).ok_or_else(|| {
        Error::NoConfigDirectory {
            home: home.to_path_buf(),
        }
    })?;
    tracing::debug!("Latest PyCharm config directory detected: {}", latest);

    let options_dir = home.join(latest).join("config").join("options");
    tracing::debug!("PyCharm config directory detected: '{}'", options_dir.display());
    Ok(options_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_select_latest_prefers_professional() {
        let names = [".PyCharmCE2019.3", ".PyCharm2019.1", ".bashrc"];
        assert_eq!(
            select_latest(names, "2019").as_deref(),
            Some(".PyCharm2019.1")
        );
    }

    #[test]
    fn test_select_latest_picks_greatest_name() {
        let names = [".PyCharmCE2019.2", ".PyCharmCE2019.3", ".PyCharmCE2019.1"];
        assert_eq!(
            select_latest(names, "2019").as_deref(),
            Some(".PyCharmCE2019.3")
        );
    }

    #[test]
    fn test_select_latest_respects_version() {
        let names = [".PyCharm2018.3", ".PyCharmCE2020.1"];
        assert_eq!(select_latest(names, "2019"), None);
        assert_eq!(
            select_latest(names, "2020").as_deref(),
            Some(".PyCharmCE2020.1")
        );
    }

    #[test]
    fn test_locate_config_options_dir() {
        let home = TempDir::new().unwrap();
        fs::create_dir(home.path().join(".PyCharmCE2019.2")).unwrap();
        fs::create_dir(home.path().join(".PyCharmCE2019.3")).unwrap();
        // A plain file never counts as a config directory
        fs::write(home.path().join(".PyCharm2019.9"), "").unwrap();

        let dir = locate_config_options_dir(home.path(), "2019").unwrap();
        assert_eq!(
            dir,
            home.path()
                .join(".PyCharmCE2019.3")
                .join("config")
                .join("options")
        );
    }

    #[test]
    fn test_locate_without_match() {
        let home = TempDir::new().unwrap();
        fs::create_dir(home.path().join(".IntelliJIdea2019.3")).unwrap();

        match locate_config_options_dir(home.path(), "2019") {
            Err(Error::NoConfigDirectory { home: h }) => assert_eq!(h, home.path()),
            other => panic!("expected NoConfigDirectory, got {other:?}"),
        }
    }

    #[test]
    fn test_locate_missing_home() {
        let root = TempDir::new().unwrap();
        let home = root.path().join("nobody");

        match locate_config_options_dir(&home, "2019") {
            Err(Error::NoConfigDirectory { home: h }) => assert_eq!(h, home),
            other => panic!("expected NoConfigDirectory, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_locate_follows_symlinked_directory() {
        let home = TempDir::new().unwrap();
        let real = TempDir::new().unwrap();
        std::os::unix::fs::symlink(real.path(), home.path().join(".PyCharm2019.3")).unwrap();
        // Dangling links are skipped
        std::os::unix::fs::symlink(
            home.path().join("gone"),
            home.path().join(".PyCharm2019.9"),
        )
        .unwrap();

        let dir = locate_config_options_dir(home.path(), "2019").unwrap();
        assert_eq!(
            dir,
            home.path()
                .join(".PyCharm2019.3")
                .join("config")
                .join("options")
        );
    }
}
