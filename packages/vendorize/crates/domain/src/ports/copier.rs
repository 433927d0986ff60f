use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CopyError {
    #[error("Failed to create {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to copy {from:?} to {to:?}: {source}")]
    File {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Materialises a package's files in a destination directory.
pub trait TreeCopier {
    /// Create `dest` (and its ancestors) and copy each of `files` from
    /// `source` into it, overwriting whatever is already there.
    fn copy_tree(&self, dest: &Path, source: &Path, files: &[String]) -> Result<(), CopyError>;
}

impl<T: TreeCopier + ?Sized> TreeCopier for &T {
    fn copy_tree(&self, dest: &Path, source: &Path, files: &[String]) -> Result<(), CopyError> {
        (**self).copy_tree(dest, source, files)
    }
}
