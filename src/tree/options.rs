/// Configuration options for tree rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Include file entries in addition to directories
    pub include_files: bool,
}

impl RenderOptions {
    /// Create a new RenderOptions with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether file entries are rendered
    pub fn with_files(mut self, include: bool) -> Self {
        self.include_files = include;
        self
    }
}
