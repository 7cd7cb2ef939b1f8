use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Extensions whose files are copied into the bundle.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".js", ".tsx", ".html", ".ts"];

/// Directory names the collector never descends into.
pub const DEFAULT_EXCLUDE_DIRS: &[&str] = &[
    ".git",
    "logs",
    "old",
    "venv",
    "__pycache__",
    "venv",
    "migrations",
    "static",
    "assets",
    "node_modules",
];

/// Extensions declared for the tree listing. Not applied when rendering.
pub const DEFAULT_TREE_EXTENSIONS: &[&str] = &[".py", ".html", ".css", ".js"];

/// Entry names left out of the tree listing.
pub const DEFAULT_TREE_EXCLUDE_DIRS: &[&str] = &[
    ".git",
    "logs",
    "old",
    "venv",
    "__pycache__",
    "venv",
    "migrations",
    "static",
    "node_modules",
];

pub const DEFAULT_OUTPUT: &str = "./現在の開発状況.txt";

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleOptions {
    pub root: PathBuf,
    pub output: PathBuf,
    pub extensions: Vec<String>,
    pub exclude_dirs: Vec<String>,
    pub tree_extensions: Vec<String>,
    pub tree_exclude_dirs: Vec<String>,
}
impl Default for BundleOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: PathBuf::from(DEFAULT_OUTPUT),
            extensions: owned(DEFAULT_EXTENSIONS),
            exclude_dirs: owned(DEFAULT_EXCLUDE_DIRS),
            tree_extensions: owned(DEFAULT_TREE_EXTENSIONS),
            tree_exclude_dirs: owned(DEFAULT_TREE_EXCLUDE_DIRS),
        }
    }
}
impl BundleOptions {
    /// True when `name` ends with one of the configured extensions.
    pub fn matches_extension(&self, name: &str) -> bool {
        self.extensions.iter().any(|ext| name.ends_with(ext.as_str()))
    }
    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.exclude_dirs.iter().any(|dir| dir == name)
    }
}
#[derive(Debug, Default)]
pub struct BundleBuilder {
    options: BundleOptions,
}
impl BundleBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: BundleOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.output = path.into();
        self
    }
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }
    pub fn exclude_dirs<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.exclude_dirs = dirs.into_iter().map(Into::into).collect();
        self
    }
    pub fn tree_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.tree_extensions = extensions.into_iter().map(Into::into).collect();
        self
    }
    pub fn tree_exclude_dirs<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.tree_exclude_dirs = dirs.into_iter().map(Into::into).collect();
        self
    }
    pub fn build(self) -> BundleOptions {
        self.options
    }
}
