//! Output document layout.
//!
//! A bundle is a tree block followed by one block per collected file:
//!
//! ```text
//! <ディレクトリ構造>
//! ├── src
//! │   └── main.ts
//! └── package.json
//! </ディレクトリ構造>
//!
//! <ファイルパス>/project/src/main.ts</ファイルパス>
//! <ファイル中身>
//! console.log("hi");
//! </ファイル中身>
//!
//! ```

use crate::engine::read_file_content;
use crate::error::BundleError;
use crate::options::BundleOptions;
use crate::tree::write_tree;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const TREE_OPEN: &str = "<ディレクトリ構造>";
pub const TREE_CLOSE: &str = "</ディレクトリ構造>";
pub const PATH_OPEN: &str = "<ファイルパス>";
pub const PATH_CLOSE: &str = "</ファイルパス>";
pub const CONTENT_OPEN: &str = "<ファイル中身>";
pub const CONTENT_CLOSE: &str = "</ファイル中身>";

/// Writes the whole document: the tree of `root`, then every file in `files`.
///
/// Files are read one at a time, right after their opening tags are written.
/// On the first failure the function returns and whatever was already
/// written stays in `sink`.
pub fn write_bundle<W: Write>(
    root: &Path,
    tree_exclude: &[String],
    files: &[PathBuf],
    sink: &mut W,
) -> Result<(), BundleError> {
    write_tree_block(root, tree_exclude, sink)?;
    for path in files {
        write_file_block(path, sink)?;
    }
    Ok(())
}

pub fn write_tree_block<W: Write>(
    root: &Path,
    tree_exclude: &[String],
    sink: &mut W,
) -> Result<(), BundleError> {
    writeln!(sink, "{}", TREE_OPEN).map_err(BundleError::Write)?;
    write_tree(root, tree_exclude, sink)?;
    write!(sink, "{}\n\n", TREE_CLOSE).map_err(BundleError::Write)
}

pub fn write_file_block<W: Write>(path: &Path, sink: &mut W) -> Result<(), BundleError> {
    writeln!(sink, "{}{}{}", PATH_OPEN, path.display(), PATH_CLOSE)
        .map_err(BundleError::Write)?;
    writeln!(sink, "{}", CONTENT_OPEN).map_err(BundleError::Write)?;
    let content = read_file_content(path)?;
    sink.write_all(content.as_bytes()).map_err(BundleError::Write)?;
    write!(sink, "\n{}\n\n", CONTENT_CLOSE).map_err(BundleError::Write)
}

/// The line printed before collection starts, naming the active filters.
pub fn startup_message(options: &BundleOptions) -> Result<String, BundleError> {
    Ok(format!(
        "{}のファイルを収集します。（{}を除く）",
        serde_json::to_string(&options.extensions)?,
        serde_json::to_string(&options.exclude_dirs)?,
    ))
}

pub fn completion_message(count: usize, output: &Path) -> String {
    format!("{}個のファイルが{}にまとめられました。", count, output.display())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startup_message_lists_filters() {
        let options = crate::BundleBuilder::new(".")
            .extensions([".ts"])
            .exclude_dirs(["node_modules", ".git"])
            .build();
        assert_eq!(
            startup_message(&options).unwrap(),
            "[\".ts\"]のファイルを収集します。（[\"node_modules\",\".git\"]を除く）"
        );
    }

    #[test]
    fn completion_message_reports_count() {
        assert_eq!(
            completion_message(3, Path::new("./out.txt")),
            "3個のファイルが./out.txtにまとめられました。"
        );
    }
}
