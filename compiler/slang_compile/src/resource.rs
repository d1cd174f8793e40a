//! Resource identifiers for import resolution.

use std::fmt;
use std::io;
use std::path::{Component, Path, PathBuf};

/// An importable unit of content, named absolutely.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Resource {
    /// An `http://` or `https://` URL, kept as written.
    Remote(String),
    /// An absolute, lexically normalized local path.
    Local(PathBuf),
}

impl Resource {
    /// Resolve an import reference found in the file at `importer`.
    ///
    /// URLs stand on their own; anything else is a path relative to the
    /// importer's directory.
    pub fn resolve(reference: &str, importer: &Path) -> io::Result<Resource> {
        if is_remote(reference) {
            return Ok(Resource::Remote(reference.to_string()));
        }
        let base = importer.parent().unwrap_or_else(|| Path::new(""));
        Resource::local(&base.join(reference))
    }

    /// Identify a local file by its absolute, normalized path.
    pub fn local(path: &Path) -> io::Result<Resource> {
        Ok(Resource::Local(normalize_path(&std::path::absolute(path)?)))
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Remote(url) => f.write_str(url),
            Resource::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

fn is_remote(reference: &str) -> bool {
    reference.starts_with("http://") || reference.starts_with("https://")
}

/// Remove `.` and `..` components without touching the filesystem.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                result.pop();
            }
            other => result.push(other),
        }
    }
    result
}
