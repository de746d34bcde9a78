use anyhow::{Context, Result};
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Read a file to a `String`, returning `None` if the file does not exist.
pub(crate) fn read_if_exists(path: impl AsRef<Path>) -> Result<Option<String>> {
    let path = path.as_ref();
    match std::fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).context(format!("Unable to read file {}", path.display())),
    }
}

/// Write a file by writing to a temporary sibling and renaming it into place.
/// A failure partway through leaves any existing file untouched.
pub(crate) fn write_atomic(path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> Result<()> {
    let path = path.as_ref();
    let temp = temp_path(path);
    std::fs::write(&temp, contents).context(format!("Unable to write file {}", temp.display()))?;
    std::fs::rename(&temp, path).context(format!(
        "Unable to rename '{}' to '{}'",
        temp.display(),
        path.display()
    ))
}

/// The temporary sibling path used by `write_atomic`, e.g. `ledger.json.tmp`.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("ledger"));
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_path() {
        assert_eq!(
            temp_path(Path::new("/tmp/data/ledger.json")),
            PathBuf::from("/tmp/data/ledger.json.tmp")
        );
        assert_eq!(temp_path(Path::new("ledger")), PathBuf::from("ledger.tmp"));
    }

    #[test]
    fn test_write_atomic_removes_temp_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("ledger.json");
        write_atomic(&path, "[]").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
        assert!(!temp_path(&path).exists());
    }
}
