mod entry;
mod formatter;
mod fs;
mod options;
mod walker;

pub use entry::DirEntry;
pub use fs::{Filesystem, OsFilesystem};
pub use options::RenderOptions;
pub use walker::render_tree;
