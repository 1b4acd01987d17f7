// src/file.rs
// Tabular sink: CSV/TSV on disk.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::config::options::ExportFormat;
use crate::model::DetailedResultRow;
use crate::store::{DataSet, TableRow};

#[derive(Debug, Error)]
pub enum TableError {
    #[error("{path}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("{path}: {source}")]
    Csv { path: PathBuf, source: csv::Error },
    #[error("path exists but is not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// Write typed rows with their header line. Creates parent directories,
/// truncates an existing file.
pub fn write_table<T: TableRow>(path: &Path, format: ExportFormat, rows: &[T]) -> Result<(), TableError> {
    write_dataset(path, format, &DataSet::from_rows(rows))
}

pub fn write_dataset(path: &Path, format: ExportFormat, ds: &DataSet) -> Result<(), TableError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let csv_err = |source| TableError::Csv { path: path.to_path_buf(), source };
    let mut out = csv::WriterBuilder::new()
        .delimiter(format.delim())
        .from_path(path)
        .map_err(csv_err)?;

    out.write_record(&ds.headers).map_err(csv_err)?;
    for row in &ds.rows {
        out.write_record(row).map_err(csv_err)?;
    }
    out.flush().map_err(|source| TableError::Io { path: path.to_path_buf(), source })
}

/// Read a detailed-results table by header name. Extra columns (such as a
/// previous `Alliance`) are ignored.
pub fn read_detailed(path: &Path, format: ExportFormat) -> Result<Vec<DetailedResultRow>, TableError> {
    let csv_err = |source| TableError::Csv { path: path.to_path_buf(), source };
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(format.delim())
        .from_path(path)
        .map_err(csv_err)?;

    reader
        .deserialize()
        .collect::<Result<Vec<DetailedResultRow>, _>>()
        .map_err(csv_err)
}

pub fn ensure_directory(dir: &Path) -> Result<(), TableError> {
    if dir.exists() && !dir.is_dir() {
        return Err(TableError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| TableError::Io { path: dir.to_path_buf(), source })?;
    }
    Ok(())
}
