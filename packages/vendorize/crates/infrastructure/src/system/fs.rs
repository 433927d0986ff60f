use domain::ports::copier::{CopyError, TreeCopier};
use std::fs;
use std::path::Path;

/// Copies package files on the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsCopier;

impl FsCopier {
    pub fn new() -> Self {
        Self
    }
}

impl TreeCopier for FsCopier {
    fn copy_tree(&self, dest: &Path, source: &Path, files: &[String]) -> Result<(), CopyError> {
        fs::create_dir_all(dest).map_err(|source| CopyError::CreateDir {
            path: dest.to_path_buf(),
            source,
        })?;

        for name in files {
            let from = source.join(name);
            let to = dest.join(name);
            fs::copy(&from, &to).map_err(|source| CopyError::File { from, to, source })?;
        }

        tracing::trace!(?dest, files = files.len(), "copied package");
        Ok(())
    }
}
