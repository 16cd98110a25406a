use std::fs;
use std::path::Path;

use crate::error::{Result, TreeError};

use super::entry::DirEntry;

/// Filesystem access used by the renderer.
///
/// The renderer needs exactly two capabilities: listing a directory and
/// reading a file's byte size. Keeping them behind a trait lets tests
/// substitute a synthetic or failing filesystem.
pub trait Filesystem {
    /// List the entries of a directory.
    fn list(&self, path: &Path) -> Result<Vec<DirEntry>>;

    /// Byte size of a file. Queried only for non-directory entries.
    fn file_size(&self, path: &Path) -> Result<u64>;
}

/// `Filesystem` backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFilesystem;

impl Filesystem for OsFilesystem {
    fn list(&self, path: &Path) -> Result<Vec<DirEntry>> {
        let read_dir = fs::read_dir(path).map_err(|e| TreeError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut entries = Vec::new();
        for result in read_dir {
            let entry = result.map_err(|e| TreeError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

            // file_type() does not follow symlinks, so a symlinked directory
            // renders as a plain entry and is never descended into.
            let file_type = entry.file_type().map_err(|e| TreeError::Io {
                path: entry.path(),
                source: e,
            })?;

            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir: file_type.is_dir(),
            });
        }

        Ok(entries)
    }

    fn file_size(&self, path: &Path) -> Result<u64> {
        let metadata = fs::metadata(path).map_err(|e| TreeError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(metadata.len())
    }
}
