use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use directory_logging::directory_debug;
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("output directory missing or not writable: {0}")]
    OutputDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// A file that has been fully written and renamed into place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub bytes: u64,
}

/// Ensure the site directory exists; create if missing.
pub fn ensure_output_dir(dir: &Path) -> Result<(), PersistError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(PersistError::OutputDir(format!(
                "{} is not a directory",
                dir.display()
            )));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
    }
    Ok(())
}

/// Writes whole files into one directory via temp file + rename, so a reader
/// never sees a half-written page.
pub struct AtomicFileWriter {
    dir: PathBuf,
}

impl AtomicFileWriter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn write(&self, filename: &str, content: &str) -> Result<WrittenFile, PersistError> {
        ensure_output_dir(&self.dir)?;

        let target = self.dir.join(filename);
        let mut tmp = tempfile::Builder::new()
            .prefix(".directory-")
            .tempfile_in(&self.dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        replace(tmp, &target)?;
        directory_debug!("wrote {} bytes to {:?}", content.len(), target);
        Ok(WrittenFile {
            path: target,
            bytes: content.len() as u64,
        })
    }
}

/// `persist` renames over an existing `target`, so the old file stays readable
/// until the swap.
fn replace(tmp: NamedTempFile, target: &Path) -> Result<(), PersistError> {
    tmp.persist(target).map_err(|e| PersistError::Io(e.error))?;
    Ok(())
}
