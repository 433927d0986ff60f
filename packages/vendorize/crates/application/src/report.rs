use domain::entities::package::PackageError;
use domain::ports::copier::CopyError;
use domain::ports::registry::RegistryError;
use domain::ports::revision::RevisionError;
use domain::vendor::ManifestError;
use thiserror::Error;

/// A non-fatal problem met during a run. None of these stop the walk.
#[derive(Error, Debug)]
pub enum Issue {
    #[error("encountered package error: {error}")]
    Package {
        import_path: String,
        error: PackageError,
    },

    #[error("error copying package {import_path}: {source}")]
    Copy {
        import_path: String,
        #[source]
        source: CopyError,
    },

    #[error("{import_path}: commit hash: {source}")]
    Revision {
        import_path: String,
        #[source]
        source: RevisionError,
    },

    #[error("error listing dependencies at level {level}: {source}")]
    Resolve {
        level: usize,
        #[source]
        source: RegistryError,
    },

    #[error("error checking vendored packages: {0}")]
    Report(#[source] std::io::Error),

    #[error(transparent)]
    Manifest(#[from] ManifestError),
}

impl Issue {
    /// Import path the issue is about, if it concerns a single package.
    pub fn import_path(&self) -> Option<&str> {
        match self {
            Issue::Package { import_path, .. }
            | Issue::Copy { import_path, .. }
            | Issue::Revision { import_path, .. } => Some(import_path),
            _ => None,
        }
    }
}

/// Outcome of a complete run.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Packages copied, sorted by import path.
    pub copied: Vec<String>,
    /// Packages found inside another party's vendor tree.
    pub skipped: Vec<String>,
    /// Skipped packages with no direct copy under the destination root.
    pub gaps: Vec<String>,
    /// Lines appended to the manifest log.
    pub manifest_lines: Vec<String>,
    pub issues: Vec<Issue>,
}

impl RunReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}
