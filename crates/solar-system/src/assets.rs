//! Locating the built widget markup on disk.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error(
        "widget HTML for \"{component}\" not found in {dir}; build the widget assets before starting the server"
    )]
    NotFound { component: String, dir: String },

    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, AssetError>;

/// Load `<component>.html` from `dir`, falling back to the last hashed build
/// (`<component>-<hash>.html`) in file-name order.
///
/// # Errors
///
/// Returns [`AssetError::NotFound`] when neither form exists and [`AssetError::Read`]
/// when the directory or file cannot be read.
pub fn load_widget_html(dir: &Path, component: &str) -> Result<String> {
    let exact = dir.join(format!("{component}.html"));
    if exact.is_file() {
        return read(&exact);
    }

    let mut candidates = hashed_builds(dir, component)?;
    candidates.sort();
    match candidates.pop() {
        Some(path) => {
            tracing::debug!(path = %path.display(), "using hashed widget build");
            read(&path)
        }
        None => Err(AssetError::NotFound {
            component: component.to_string(),
            dir: dir.display().to_string(),
        }),
    }
}

fn hashed_builds(dir: &Path, component: &str) -> Result<Vec<PathBuf>> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(AssetError::Read {
                path: dir.display().to_string(),
                source,
            });
        }
    };

    let prefix = format!("{component}-");
    Ok(entries
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with(&prefix) && name.ends_with(".html"))
        })
        .collect())
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| AssetError::Read {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::{AssetError, load_widget_html};
    use std::fs;

    #[test]
    fn exact_file_wins_over_hashed_builds() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("solar-system.html"), "exact").expect("write");
        fs::write(dir.path().join("solar-system-zzzz.html"), "hashed").expect("write");

        let html = load_widget_html(dir.path(), "solar-system").expect("load");
        assert_eq!(html, "exact");
    }

    #[test]
    fn last_hashed_build_is_used_when_exact_file_missing() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("solar-system-1a2b.html"), "old").expect("write");
        fs::write(dir.path().join("solar-system-9f8e.html"), "new").expect("write");
        fs::write(dir.path().join("solar-system-9f8e.css"), "css").expect("write");
        fs::write(dir.path().join("pizzaz-ffff.html"), "other").expect("write");

        let html = load_widget_html(dir.path(), "solar-system").expect("load");
        assert_eq!(html, "new");
    }

    #[test]
    fn missing_markup_is_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("solar-system.js"), "js").expect("write");

        let err = load_widget_html(dir.path(), "solar-system").expect_err("missing");
        assert!(matches!(err, AssetError::NotFound { .. }));
        assert!(err.to_string().contains("solar-system"));
    }

    #[test]
    fn missing_directory_is_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("nope");

        let err = load_widget_html(&missing, "solar-system").expect_err("missing");
        assert!(matches!(err, AssetError::NotFound { .. }));
    }
}
