use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// One resolved package as reported by the metadata resolver.
///
/// Field names follow the resolver's JSON records so a descriptor can be
/// decoded straight off its output stream. Every field is optional on the
/// wire; anything missing decodes to its empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PackageDescriptor {
    /// Import path of the package.
    pub import_path: String,
    /// Directory containing the package sources.
    pub dir: PathBuf,
    /// Whether the package belongs to the standard library.
    pub standard: bool,

    #[serde(flatten)]
    pub files: SourceFiles,

    /// Import paths used directly by this package.
    pub imports: Vec<String>,
    /// All (recursively) imported dependencies. Not walked: expansion
    /// follows `imports` so the walk stays two levels deep.
    pub deps: Vec<String>,

    /// This package or one of its dependencies has an error. Informational;
    /// only `error` decides whether the package is skipped.
    pub incomplete: bool,
    pub error: Option<PackageError>,
    pub deps_errors: Vec<PackageError>,
}

impl PackageDescriptor {
    pub fn new(import_path: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        Self {
            import_path: import_path.into(),
            dir: dir.into(),
            ..Default::default()
        }
    }

    pub fn standard(mut self) -> Self {
        self.standard = true;
        self
    }

    pub fn with_imports<I, S>(mut self, imports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.imports = imports.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_go_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.files.go_files = files.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_error(mut self, error: PackageError) -> Self {
        self.error = Some(error);
        self
    }

    /// Every file that has to travel with the package when it is copied.
    pub fn source_files(&self) -> Vec<String> {
        self.files.flatten()
    }

    /// Edges the walker follows out of this package.
    pub fn dependencies(&self) -> &[String] {
        &self.imports
    }
}

/// Source files of a package, grouped by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SourceFiles {
    pub go_files: Vec<String>,
    pub cgo_files: Vec<String>,
    pub ignored_go_files: Vec<String>,
    pub c_files: Vec<String>,
    #[serde(rename = "CXXFiles")]
    pub cxx_files: Vec<String>,
    pub m_files: Vec<String>,
    pub h_files: Vec<String>,
    pub s_files: Vec<String>,
    pub swig_files: Vec<String>,
    #[serde(rename = "SwigCXXFiles")]
    pub swig_cxx_files: Vec<String>,
    pub syso_files: Vec<String>,
}

impl SourceFiles {
    pub fn flatten(&self) -> Vec<String> {
        [
            &self.go_files,
            &self.cgo_files,
            &self.ignored_go_files,
            &self.c_files,
            &self.cxx_files,
            &self.m_files,
            &self.h_files,
            &self.s_files,
            &self.swig_files,
            &self.swig_cxx_files,
            &self.syso_files,
        ]
        .into_iter()
        .flatten()
        .cloned()
        .collect()
    }
}

/// A package that failed to load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PackageError {
    /// Shortest import chain from a named package to this one.
    pub import_stack: Vec<String>,
    /// Position of the error (file:line:col), if known.
    pub pos: String,
    pub err: String,
}

impl PackageError {
    pub fn new(err: impl Into<String>) -> Self {
        Self {
            err: err.into(),
            ..Default::default()
        }
    }
}

impl fmt::Display for PackageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.import_stack.is_empty() {
            write!(f, "{}: ", self.import_stack.join(" -> "))?;
        }
        if !self.pos.is_empty() {
            write!(f, "{}: ", self.pos)?;
        }
        f.write_str(&self.err)
    }
}

impl std::error::Error for PackageError {}
