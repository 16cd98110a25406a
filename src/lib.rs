//! Treeline - renders a filesystem directory as a plain-text tree
//!
//! This crate provides functionality for:
//! - Walking a directory depth-first and writing one line per entry with
//!   box-drawing connectors
//! - Listing directories only, or files as well with their byte sizes
//! - Swapping the filesystem behind a small trait so the renderer can be
//!   exercised against synthetic layouts in tests

pub mod cli;
pub mod config;
pub mod error;
pub mod tree;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, TreeError};
pub use tree::{render_tree, RenderOptions};
