//! `slang init`: write a starter configuration.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use crate::Error;

/// The configuration written by `slang init`.
pub const DEFAULT_CONFIG: &str = r#"# slang configuration

# quiet = false
# verbose = false
# debug = false

[server]
port = 9090
# proxy = "http://localhost:8080"
root = "."
strict = false

[routes]
# "/css" = "/styles"
# "/js" = ["/app/js", "/vendor/js"]

[stylesheet]
exclude = ["_*.scss"]

[javascript]
exclude = []

[unmanaged]
copy = false
exclude_from_copy = []
"#;

/// Create `path` with [`DEFAULT_CONFIG`]. An existing file is left alone.
pub fn init(path: &Path) -> Result<(), Error> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|source| match source.kind() {
            io::ErrorKind::AlreadyExists => Error::ConfigExists {
                path: path.to_path_buf(),
            },
            _ => Error::Write {
                path: path.to_path_buf(),
                source,
            },
        })?;
    file.write_all(DEFAULT_CONFIG.as_bytes())
        .map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })?;
    println!("default configuration created at {}", path.display());
    Ok(())
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::config::FileConfig;

    #[test]
    fn writes_a_parseable_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slang.conf");
        init(&path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, DEFAULT_CONFIG);
        let config = FileConfig::parse(&path, &text).unwrap();
        assert_eq!(config.server.port, Some(9090));
        assert_eq!(config.stylesheet.exclude, vec!["_*.scss".to_string()]);
    }

    #[test]
    fn refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slang.conf");
        fs::write(&path, "quiet = true\n").unwrap();

        let err = init(&path).unwrap_err();
        assert!(matches!(err, Error::ConfigExists { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "quiet = true\n");
    }
}
