use std::io::Write;
use std::path::Path;

use crate::error::{Result, TreeError};

use super::formatter::format_line;
use super::fs::{Filesystem, OsFilesystem};
use super::options::RenderOptions;

/// Render the tree rooted at `root` to `out`.
///
/// Output starts directly with the root's children; the root itself gets no
/// line. The first read or write failure aborts the whole render, leaving
/// whatever was already written in the sink.
pub fn render_tree<W: Write>(out: &mut W, root: &Path, options: &RenderOptions) -> Result<()> {
    render_level(out, &OsFilesystem, root, options, "")
}

/// Render one directory level, recursing depth-first into subdirectories.
pub(crate) fn render_level<W: Write, F: Filesystem>(
    out: &mut W,
    fs: &F,
    path: &Path,
    options: &RenderOptions,
    prefix: &str,
) -> Result<()> {
    let mut entries = fs.list(path)?;

    if !options.include_files {
        entries.retain(|e| e.is_dir);
    }

    // Sorted per level, not globally: last-child status and connector
    // selection are level-local. sort_by is stable.
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    let count = entries.len();
    for (idx, entry) in entries.iter().enumerate() {
        let is_last = idx + 1 == count;
        let child_path = path.join(&entry.name);

        let size = if entry.is_dir {
            None
        } else {
            Some(fs.file_size(&child_path)?)
        };

        let (line, child_prefix) = format_line(&entry.name, size, prefix, is_last);
        out.write_all(line.as_bytes()).map_err(TreeError::Output)?;

        if entry.is_dir {
            render_level(out, fs, &child_path, options, &child_prefix)?;
        }
    }

    Ok(())
}
