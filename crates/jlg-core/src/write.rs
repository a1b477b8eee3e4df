use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{error, info};

use crate::GeneratedFile;

/// A file that could not be written.
#[derive(Debug)]
pub struct WriteFailure {
    pub path: PathBuf,
    pub error: io::Error,
}

/// Outcome of writing a batch of generated files.
#[derive(Debug, Default)]
pub struct WriteReport {
    pub written: Vec<PathBuf>,
    /// Targets that already existed and were left untouched.
    pub skipped: Vec<PathBuf>,
    pub failed: Vec<WriteFailure>,
}

impl WriteReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Write generated files under `base`, never overwriting an existing file.
///
/// Each file is finished (or has failed) before the next one starts. A failure
/// is recorded and the remaining files are still attempted.
pub fn write_files(base: &Path, files: &[GeneratedFile]) -> WriteReport {
    let mut report = WriteReport::default();

    for file in files {
        let path = base.join(&file.path);
        if path.exists() {
            info!("skipped {} (already exists)", path.display());
            report.skipped.push(path);
            continue;
        }
        match write_one(&path, &file.content) {
            Ok(()) => {
                info!("wrote {}", path.display());
                report.written.push(path);
            }
            Err(error) => {
                error!("failed to write {}: {error}", path.display());
                report.failed.push(WriteFailure { path, error });
            }
        }
    }

    report
}

fn write_one(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(path: &str, content: &str) -> GeneratedFile {
        GeneratedFile {
            path: path.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_writes_and_creates_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let report = write_files(
            tmp.path(),
            &[file("orders/OrdersController.java", "class A {}")],
        );
        assert!(report.is_success());
        assert_eq!(report.written.len(), 1);
        let content =
            fs::read_to_string(tmp.path().join("orders/OrdersController.java")).unwrap();
        assert_eq!(content, "class A {}");
    }

    #[test]
    fn test_existing_file_is_skipped() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("OrdersDao.java");
        fs::write(&target, "hand edited").unwrap();

        let report = write_files(tmp.path(), &[file("OrdersDao.java", "generated")]);
        assert!(report.is_success());
        assert!(report.written.is_empty());
        assert_eq!(report.skipped, vec![target.clone()]);
        assert_eq!(fs::read_to_string(target).unwrap(), "hand edited");
    }

    #[test]
    fn test_failure_does_not_stop_remaining_files() {
        let tmp = tempfile::tempdir().unwrap();
        // A regular file where a directory is needed.
        fs::write(tmp.path().join("blocked"), "").unwrap();

        let report = write_files(
            tmp.path(),
            &[
                file("blocked/OrdersService.java", "x"),
                file("orders/OrdersService.java", "y"),
            ],
        );
        assert!(!report.is_success());
        assert_eq!(report.failed.len(), 1);
        assert_eq!(
            report.failed[0].path,
            tmp.path().join("blocked/OrdersService.java")
        );
        assert_eq!(report.written, vec![tmp.path().join("orders/OrdersService.java")]);
    }
}
