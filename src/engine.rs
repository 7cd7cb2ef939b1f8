use crate::error::BundleError;
use crate::options::BundleOptions;
use crate::output::write_bundle;
use crate::types::BundleReport;
use ignore::WalkBuilder;
use std::cmp::Ordering;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
struct Walker {
    inner: ignore::Walk,
}
impl Walker {
    fn new(options: &BundleOptions) -> Self {
        let mut builder = WalkBuilder::new(&options.root);
        builder
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_path(files_first);
        let filters = options.clone();
        builder.filter_entry(move |entry| {
            let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
            if entry.depth() == 0 || !is_dir {
                return true;
            }
            let pruned = entry
                .file_name()
                .to_str()
                .is_some_and(|name| filters.is_excluded_dir(name));
            #[cfg(feature = "logging")]
            if pruned {
                tracing::debug!("Skipping excluded directory {}", entry.path().display());
            }
            !pruned
        });
        Self {
            inner: builder.build(),
        }
    }
    fn into_iter(self) -> impl Iterator<Item = Result<PathBuf, BundleError>> {
        self.inner.map(|result| match result {
            Ok(entry) => Ok(entry.into_path()),
            Err(e) => Err(BundleError::Walk(e.to_string())),
        })
    }
}
/// Files sort before directories, then by name.
fn files_first(a: &Path, b: &Path) -> Ordering {
    a.is_dir()
        .cmp(&b.is_dir())
        .then_with(|| a.file_name().cmp(&b.file_name()))
}
/// Collects every file under `options.root` whose name ends with one of the
/// configured extensions, skipping excluded directories.
///
/// Paths are joined onto the root and come out depth first, with a
/// directory's files listed before its subdirectories are entered. Symlinks
/// are not descended; a symlink that does not resolve to a directory is
/// collected like a file.
///
/// # Errors
///
/// Any directory that cannot be read aborts the whole collection with
/// [`BundleError::Walk`].
pub fn collect_files(options: &BundleOptions) -> Result<Vec<PathBuf>, BundleError> {
    let mut files = Vec::new();
    for path in Walker::new(options).into_iter() {
        let path = path?;
        // Anything that is not a directory counts, dangling symlinks included;
        // those fail later when read.
        if path.is_dir() {
            continue;
        }
        let matched = path
            .file_name()
            .is_some_and(|name| options.matches_extension(&name.to_string_lossy()));
        if matched {
            #[cfg(feature = "logging")]
            tracing::debug!("Collected {}", path.display());
            files.push(path);
        }
    }
    Ok(files)
}
/// Reads a whole file as UTF-8.
pub fn read_file_content(path: &Path) -> Result<String, BundleError> {
    let bytes = fs::read(path).map_err(|e| BundleError::io(path, e))?;
    String::from_utf8(bytes).map_err(|e| BundleError::decode(path, e))
}
/// Collects the files, then writes the tree and every file block to
/// `options.output`.
///
/// The output is truncated up front. If anything fails midway the error is
/// returned and the output keeps what was written before the failure.
pub fn bundle(options: &BundleOptions) -> Result<BundleReport, BundleError> {
    #[cfg(feature = "logging")]
    tracing::debug!("Starting bundle with root: {}", options.root.display());
    let files = collect_files(options)?;
    let file = File::create(&options.output).map_err(|e| BundleError::io(&options.output, e))?;
    let mut sink = BufWriter::new(file);
    write_bundle(&options.root, &options.tree_exclude_dirs, &files, &mut sink)?;
    sink.flush().map_err(|e| BundleError::io(&options.output, e))?;
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Wrote {} file blocks to {}",
        files.len(),
        options.output.display()
    );
    Ok(BundleReport {
        output: options.output.clone(),
        files,
    })
}
