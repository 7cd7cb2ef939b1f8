//! Rendering of the directory listing that heads every bundle.
//!
//! The listing mimics the `tree` command: entries sorted by name, one line
//! per entry, with `├── ` / `└── ` branches and `│   ` / four-space guides
//! for nested levels. Only names in the exclusion list are dropped; the
//! listing is not filtered by extension.

use crate::error::BundleError;
use crate::types::DirEntry;
use std::fs;
use std::io::Write;
use std::path::Path;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const GUIDE: &str = "│   ";
const LAST_GUIDE: &str = "    ";

/// Writes the tree of `dir` into `sink`, one line at a time.
///
/// The root itself is not printed, only what lies below it.
///
/// # Errors
///
/// Returns [`BundleError::Io`] if a directory cannot be listed and
/// [`BundleError::Write`] if the sink rejects a line. Lines already written
/// stay in the sink.
pub fn write_tree<W: Write>(
    dir: &Path,
    exclude: &[String],
    sink: &mut W,
) -> Result<(), BundleError> {
    write_level(dir, "", exclude, sink)
}

/// Renders the tree of `dir` into a string.
pub fn render_tree(dir: &Path, exclude: &[String]) -> Result<String, BundleError> {
    let mut buf = Vec::new();
    write_tree(dir, exclude, &mut buf)?;
    String::from_utf8(buf).map_err(|e| BundleError::decode(dir, e))
}

fn write_level<W: Write>(
    dir: &Path,
    prefix: &str,
    exclude: &[String],
    sink: &mut W,
) -> Result<(), BundleError> {
    let entries = list_entries(dir, exclude)?;
    let last = entries.len().saturating_sub(1);
    for (i, entry) in entries.iter().enumerate() {
        let is_last = i == last;
        let branch = if is_last { LAST_BRANCH } else { BRANCH };
        writeln!(sink, "{}{}{}", prefix, branch, entry.name).map_err(BundleError::Write)?;
        if entry.is_dir {
            #[cfg(feature = "logging")]
            tracing::debug!("Descending into {}", entry.path.display());
            let guide = if is_last { LAST_GUIDE } else { GUIDE };
            let child_prefix = format!("{}{}", prefix, guide);
            write_level(&entry.path, &child_prefix, exclude, sink)?;
        }
    }
    Ok(())
}

/// Lists `dir` minus excluded names, sorted by name (byte order, case-sensitive).
pub(crate) fn list_entries(dir: &Path, exclude: &[String]) -> Result<Vec<DirEntry>, BundleError> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| BundleError::io(dir, e))? {
        let entry = entry.map_err(|e| BundleError::io(dir, e))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if exclude.iter().any(|x| *x == name) {
            continue;
        }
        let path = entry.path();
        entries.push(DirEntry {
            name,
            is_dir: path.is_dir(),
            path,
        });
    }
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn list_entries_drops_excluded_files_and_dirs() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("logs")).unwrap();
        fs::write(dir.path().join("old"), "").unwrap();
        fs::write(dir.path().join("keep.txt"), "").unwrap();
        let exclude = vec!["logs".to_string(), "old".to_string()];
        let entries = list_entries(dir.path(), &exclude).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "keep.txt");
        assert!(!entries[0].is_dir);
    }

    #[test]
    fn list_entries_sorts_uppercase_first() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("c.txt"), "").unwrap();
        fs::write(dir.path().join("B.txt"), "").unwrap();
        fs::write(dir.path().join("a.txt"), "").unwrap();
        let names: Vec<_> = list_entries(dir.path(), &[])
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["B.txt", "a.txt", "c.txt"]);
    }
}
