//! # Srcbundle
//!
//! `srcbundle` gathers a project's source files into one annotated text
//! document, headed by a `tree`-style listing of the directory, so the whole
//! project can be reviewed or pasted into a prompt in one piece.
//!
//! Collection and the tree listing use separate filters: files are picked by
//! extension with excluded directories pruned, while the tree shows every
//! entry whose name is not in its own exclusion list.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use srcbundle::{BundleBuilder, bundle};
//!
//! let options = BundleBuilder::new(".")
//!     .extensions([".rs", ".toml"])
//!     .exclude_dirs(["target", ".git"])
//!     .output("snapshot.txt")
//!     .build();
//!
//! let report = bundle(&options).expect("Failed to bundle directory");
//! println!("{} files written to {}", report.file_count(), report.output.display());
//! ```

mod engine;
mod error;
mod options;
pub mod output;
mod tree;
mod types;

pub use engine::{bundle, collect_files, read_file_content};
pub use error::BundleError;
pub use options::{
    BundleBuilder, BundleOptions, DEFAULT_EXCLUDE_DIRS, DEFAULT_EXTENSIONS, DEFAULT_OUTPUT,
    DEFAULT_TREE_EXCLUDE_DIRS, DEFAULT_TREE_EXTENSIONS,
};
pub use tree::{render_tree, write_tree};
pub use types::{BundleReport, DirEntry};
