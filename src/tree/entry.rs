/// One item within a directory listing.
///
/// Read-only view produced by the filesystem capability; the renderer never
/// mutates it. File sizes are not carried here - they are looked up lazily,
/// only when a file line is about to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Entry name (last component of path)
    pub name: String,

    /// True if this is a directory
    pub is_dir: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dir_entry_creation() {
        let entry = DirEntry {
            name: "src".to_string(),
            is_dir: true,
        };
        assert!(entry.is_dir);
        assert_eq!(entry.name, "src");
    }

    #[test]
    fn test_dir_entry_equality() {
        let a = DirEntry {
            name: "notes.txt".to_string(),
            is_dir: false,
        };
        let b = a.clone();
        assert_eq!(a, b);
    }
}
