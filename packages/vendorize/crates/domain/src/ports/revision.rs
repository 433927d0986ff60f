use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Source-control revision a package directory is checked out at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revision {
    pub id: String,
    /// False when the working tree has uncommitted modifications.
    pub clean: bool,
}

impl Revision {
    pub fn clean(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            clean: true,
        }
    }

    pub fn dirty(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            clean: false,
        }
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)?;
        if !self.clean {
            f.write_str(" (dirty)")?;
        }
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum RevisionError {
    #[error("No source control metadata found above {0:?}")]
    Unrecognized(PathBuf),
    #[error("{tool} not available: {source}")]
    Spawn {
        tool: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("{tool} failed: {message}")]
    Command { tool: &'static str, message: String },
}

pub trait RevisionSource {
    fn revision_of(&self, dir: &Path) -> Result<Revision, RevisionError>;
}

impl<T: RevisionSource + ?Sized> RevisionSource for &T {
    fn revision_of(&self, dir: &Path) -> Result<Revision, RevisionError> {
        (**self).revision_of(dir)
    }
}
