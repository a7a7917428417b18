//! Timestamped backups of the data files

use super::DataFiles;
use crate::core::error::Result;
use crate::{info, warn};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// Prefix of every backup folder name
pub const BACKUP_PREFIX: &str = "backup_";

/// `chrono` format of the timestamp suffix
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Result of one backup run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupReport {
    /// Folder the files were copied into
    pub dir: PathBuf,
    /// Number of files copied
    pub files_copied: usize,
}

/// Copies data files into `<root>/backup_<yyyy-MM-dd_HH-mm-ss>`
#[derive(Debug, Clone)]
pub struct BackupService {
    root: PathBuf,
}

impl BackupService {
    /// Service writing backups under `root`
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Backup root directory
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Copy every existing data file into a fresh timestamped folder
    ///
    /// Missing files are skipped with a warning.
    ///
    /// # Errors
    /// Returns [`RecordsError::Io`](crate::core::RecordsError::Io) if the folder already
    /// exists or cannot be created, or a file cannot be copied
    pub fn create(&self, files: &DataFiles) -> Result<BackupReport> {
        let stamp = Local::now().format(TIMESTAMP_FORMAT);
        self.copy_into(self.root.join(format!("{BACKUP_PREFIX}{stamp}")), files)
    }

    fn copy_into(&self, dir: PathBuf, files: &DataFiles) -> Result<BackupReport> {
        fs::create_dir_all(&self.root)?;
        fs::create_dir(&dir)?;

        let mut files_copied = 0;
        for source in files.paths() {
            let Some(name) = source.file_name() else {
                continue;
            };
            if !source.is_file() {
                warn!("Skipping missing data file {}", source.display());
                continue;
            }
            fs::copy(source, dir.join(name))?;
            files_copied += 1;
        }

        info!("Backed up {files_copied} files to {}", dir.display());
        Ok(BackupReport { dir, files_copied })
    }

    /// Existing backup folders, oldest first
    ///
    /// # Errors
    /// Returns [`RecordsError::Io`](crate::core::RecordsError::Io) if the root exists but
    /// cannot be listed
    pub fn list(&self) -> Result<Vec<PathBuf>> {
        if !self.root.is_dir() {
            return Ok(Vec::new());
        }
        let mut backups: Vec<PathBuf> = fs::read_dir(&self.root)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_dir()
                    && path
                        .file_name()
                        .and_then(|n| n.to_str())
                        .is_some_and(|n| n.starts_with(BACKUP_PREFIX))
            })
            .collect();
        backups.sort();
        Ok(backups)
    }

    /// Total size in bytes of everything under the backup root
    ///
    /// # Errors
    /// Returns [`RecordsError::Io`](crate::core::RecordsError::Io) if a directory cannot be read
    pub fn total_size(&self) -> Result<u64> {
        if self.root.exists() {
            backup_size(&self.root)
        } else {
            Ok(0)
        }
    }
}

/// Recursive size in bytes of a file or directory tree
///
/// # Errors
/// Returns [`RecordsError::Io`](crate::core::RecordsError::Io) if any entry cannot be read
pub fn backup_size(path: &Path) -> Result<u64> {
    let metadata = fs::metadata(path)?;
    if metadata.is_file() {
        return Ok(metadata.len());
    }

    let mut total = 0;
    for entry in fs::read_dir(path)? {
        total += backup_size(&entry?.path())?;
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_backup_copies_existing_files() {
        let data = TempDir::new().unwrap();
        let files = DataFiles::in_dir(data.path());
        fs::write(&files.students, "regNo,fullName,email,status\n").unwrap();
        fs::write(&files.courses, "code\n").unwrap();

        let backups = TempDir::new().unwrap();
        let service = BackupService::new(backups.path());
        let report = service.create(&files).unwrap();

        assert_eq!(report.files_copied, 2);
        assert!(report.dir.join("students.csv").is_file());
        assert!(!report.dir.join("enrollments.csv").exists());
        let name = report.dir.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with(BACKUP_PREFIX));
        assert_eq!(name.len(), BACKUP_PREFIX.len() + "2024-01-01_00-00-00".len());
        assert_eq!(service.list().unwrap(), vec![report.dir]);
    }

    #[test]
    fn test_backup_never_merges_into_existing_folder() {
        let data = TempDir::new().unwrap();
        let files = DataFiles::in_dir(data.path());
        fs::write(&files.students, "regNo,fullName,email,status\n").unwrap();

        let backups = TempDir::new().unwrap();
        let service = BackupService::new(backups.path().join("nested"));
        let dir = service.root().join("backup_2024-01-01_00-00-00");
        service.copy_into(dir.clone(), &files).unwrap();

        let err = service.copy_into(dir.clone(), &files).unwrap_err();
        match err {
            crate::core::RecordsError::Io(e) => {
                assert_eq!(e.kind(), std::io::ErrorKind::AlreadyExists);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(service.list().unwrap(), vec![dir]);
    }

    #[test]
    fn test_backup_size_is_recursive() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join("a.csv"), "12345").unwrap();
        fs::create_dir(root.path().join("nested")).unwrap();
        fs::write(root.path().join("nested").join("b.csv"), "123").unwrap();

        assert_eq!(backup_size(root.path()).unwrap(), 8);
        assert_eq!(backup_size(&root.path().join("a.csv")).unwrap(), 5);

        let service = BackupService::new(root.path().join("missing"));
        assert_eq!(service.total_size().unwrap(), 0);
        assert!(service.list().unwrap().is_empty());
    }
}
