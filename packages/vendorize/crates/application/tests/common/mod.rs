#![allow(dead_code)]

use domain::entities::package::{PackageDescriptor, PackageError};
use domain::ports::copier::{CopyError, TreeCopier};
use domain::ports::registry::{PackageRegistry, RegistryError};
use domain::ports::revision::{Revision, RevisionError, RevisionSource};
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// In-memory resolver over a fixed set of descriptors.
#[derive(Default)]
pub struct FakeRegistry {
    packages: HashMap<String, PackageDescriptor>,
    aliases: HashMap<String, String>,
    pub calls: RefCell<Vec<Vec<String>>>,
    fail_from_call: Cell<Option<usize>>,
}

impl FakeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, package: PackageDescriptor) -> Self {
        self.packages.insert(package.import_path.clone(), package);
        self
    }

    /// Resolve `name` (e.g. a relative directory) to the package at `import_path`.
    pub fn alias(mut self, name: &str, import_path: &str) -> Self {
        self.aliases.insert(name.to_string(), import_path.to_string());
        self
    }

    /// Make every call from the `n`th (zero-based) on fail outright.
    pub fn fail_from_call(self, n: usize) -> Self {
        self.fail_from_call.set(Some(n));
        self
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }

    pub fn resolved(&self) -> Vec<String> {
        self.calls.borrow().iter().flatten().cloned().collect()
    }
}

impl PackageRegistry for FakeRegistry {
    fn resolve(&self, names: &[String]) -> Result<Vec<PackageDescriptor>, RegistryError> {
        let call = self.calls.borrow().len();
        self.calls.borrow_mut().push(names.to_vec());
        if matches!(self.fail_from_call.get(), Some(n) if call >= n) {
            return Err(RegistryError::Spawn(io::Error::new(
                io::ErrorKind::NotFound,
                "resolver unreachable",
            )));
        }

        Ok(names
            .iter()
            .map(|name| {
                let path = self.aliases.get(name).unwrap_or(name);
                self.packages.get(path).cloned().unwrap_or_else(|| {
                    PackageDescriptor::new(name.clone(), "").with_error(PackageError {
                        import_stack: vec![name.clone()],
                        pos: String::new(),
                        err: format!("cannot find package \"{}\"", name),
                    })
                })
            })
            .collect())
    }
}

/// Writes every requested file into the destination, naming its source.
#[derive(Default)]
pub struct TouchCopier {
    failing_sources: HashSet<PathBuf>,
    pub copies: RefCell<Vec<PathBuf>>,
}

impl TouchCopier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_for(mut self, source: impl Into<PathBuf>) -> Self {
        self.failing_sources.insert(source.into());
        self
    }
}

impl TreeCopier for TouchCopier {
    fn copy_tree(&self, dest: &Path, source: &Path, files: &[String]) -> Result<(), CopyError> {
        self.copies.borrow_mut().push(dest.to_path_buf());
        fs::create_dir_all(dest).map_err(|source| CopyError::CreateDir {
            path: dest.to_path_buf(),
            source,
        })?;
        for name in files {
            let from = source.join(name);
            let to = dest.join(name);
            if self.failing_sources.contains(source) {
                return Err(CopyError::File {
                    from,
                    to,
                    source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
                });
            }
            fs::write(&to, from.display().to_string())
                .map_err(|source| CopyError::File { from, to, source })?;
        }
        Ok(())
    }
}

/// Revision per package directory; directories not listed have no VCS.
#[derive(Default)]
pub struct FakeRevisions {
    revisions: HashMap<PathBuf, Revision>,
}

impl FakeRevisions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, dir: impl Into<PathBuf>, revision: Revision) -> Self {
        self.revisions.insert(dir.into(), revision);
        self
    }
}

impl RevisionSource for FakeRevisions {
    fn revision_of(&self, dir: &Path) -> Result<Revision, RevisionError> {
        self.revisions
            .get(dir)
            .cloned()
            .ok_or_else(|| RevisionError::Unrecognized(dir.to_path_buf()))
    }
}

/// External package living outside any project, with one source file.
pub fn external(import_path: &str, imports: &[&str]) -> PackageDescriptor {
    let file = format!("{}.go", import_path.rsplit('/').next().unwrap_or("lib"));
    PackageDescriptor::new(import_path, Path::new("/gopath/src").join(import_path))
        .with_go_files([file])
        .with_imports(imports.iter().copied())
}

pub fn std_package(import_path: &str) -> PackageDescriptor {
    PackageDescriptor::new(import_path, Path::new("/usr/lib/go/src").join(import_path)).standard()
}

pub fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}
