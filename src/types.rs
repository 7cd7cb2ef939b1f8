use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One listed entry of a directory, as seen by the tree renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// The entry's file name.
    pub name: String,
    /// Full path of the entry, used to descend into it.
    pub path: PathBuf,
    /// Whether the entry is a directory (symlinks are followed).
    pub is_dir: bool,
}

/// Summary of a completed bundle run.
#[derive(Debug, Serialize, Deserialize)]
pub struct BundleReport {
    /// Where the bundle was written.
    pub output: PathBuf,
    /// The collected files, in the order their blocks were written.
    pub files: Vec<PathBuf>,
}

impl BundleReport {
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}
