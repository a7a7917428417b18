//! Persistence collaborators: CSV files, import/export and backups

pub mod backup;
pub mod csv_codec;
pub mod import_export;

pub use backup::{backup_size, BackupReport, BackupService};
pub use import_export::{DataFiles, TransferSummary};
