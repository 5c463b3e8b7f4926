use std::fs::{OpenOptions, create_dir_all, remove_file};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::errors::Result;

///
/// Append-only text log. The file is opened on demand for every write and
/// closed right after, so nothing is held open between pipeline stages.
///
/// Logs accumulate across runs; call [AppendLog::reset] to start over.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendLog {
    path: PathBuf,
}

impl AppendLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        AppendLog { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `text` verbatim.
    pub fn append(&self, text: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(text.as_bytes())?;

        Ok(())
    }

    /// Append `line` followed by a newline.
    pub fn append_line(&self, line: &str) -> Result<()> {
        self.append(&format!("{}\n", line))
    }

    /// Remove the log file. A log that does not exist yet is fine.
    pub fn reset(&self) -> Result<()> {
        match remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs::read_to_string;

    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tempfile::TempDir;

    #[rstest]
    fn test_append_accumulates() {
        let dir = TempDir::new().unwrap();
        let log = AppendLog::new(dir.path().join("logs/skipped.txt"));

        log.append_line("Fabaceae").unwrap();
        log.append_line("Poaceae").unwrap();

        // a second writer on the same path keeps appending
        AppendLog::new(log.path()).append_line("Rosaceae").unwrap();

        assert_eq!(
            read_to_string(log.path()).unwrap(),
            "Fabaceae\nPoaceae\nRosaceae\n"
        );
    }

    #[rstest]
    fn test_reset() {
        let dir = TempDir::new().unwrap();
        let log = AppendLog::new(dir.path().join("skipped.txt"));

        log.reset().unwrap();
        log.append_line("Fabaceae").unwrap();
        log.reset().unwrap();
        assert!(!log.path().exists());

        log.append_line("Poaceae").unwrap();
        assert_eq!(read_to_string(log.path()).unwrap(), "Poaceae\n");
    }
}
