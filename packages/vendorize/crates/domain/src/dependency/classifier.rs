use crate::entities::package::PackageDescriptor;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Path segment that marks a tree of packages vendored by some other party.
pub const VENDOR_SEGMENT: &str = "vendor";

/// How the walker treats a resolved package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Part of the standard library. Never copied.
    Standard,
    /// Lives inside the project being vendored. Never copied, still expanded.
    Local,
    /// Already vendored by a third party under one of its `vendor` trees.
    ExternallyVendored,
    /// Eligible for copying into the destination root.
    Vendorable,
}

/// The project directory that decides which packages are local.
///
/// Captured once per run; later changes of the process working directory do
/// not move it. The root is kept as the resolver sees it (the logical path,
/// symlinks intact) together with its canonical form, so package directories
/// reported through either spelling are recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boundary {
    root: PathBuf,
    canonical: Option<PathBuf>,
}

impl Boundary {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let canonical = fs::canonicalize(&root).ok().filter(|c| *c != root);
        Self { root, canonical }
    }

    /// Capture the current working directory of the process.
    ///
    /// `$PWD` is preferred when it names the same directory, since that is the
    /// spelling the resolver builds package directories from.
    pub fn capture() -> io::Result<Self> {
        let cwd = std::env::current_dir()?;
        Ok(Self::logical(cwd, std::env::var_os("PWD").map(PathBuf::from)))
    }

    /// Pick `pwd` over the physical `cwd` when both resolve to one directory.
    pub fn logical(cwd: PathBuf, pwd: Option<PathBuf>) -> Self {
        match pwd {
            Some(pwd) if pwd.is_absolute() && same_dir(&pwd, &cwd) => Self::new(pwd),
            _ => Self::new(cwd),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// True when `dir` is the boundary itself or lies below it.
    ///
    /// Comparison is per path component, so `/foo/barbaz` is not inside `/foo/bar`.
    pub fn contains(&self, dir: &Path) -> bool {
        if dir.starts_with(&self.root) {
            return true;
        }
        let root = self.canonical.as_deref().unwrap_or(&self.root);
        dir.starts_with(root)
            || fs::canonicalize(dir)
                .map(|d| d.starts_with(root))
                .unwrap_or(false)
    }
}

fn same_dir(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// True when some segment of `import_path` is exactly the vendor segment.
pub fn is_externally_vendored(import_path: &str) -> bool {
    import_path.split('/').any(|segment| segment == VENDOR_SEGMENT)
}

/// The import path a package under a third-party vendor tree would have if it
/// were vendored directly: everything after the last vendor segment.
///
/// Paths without a vendor segment are returned unchanged.
pub fn unvendored_path(import_path: &str) -> &str {
    let mut rest = import_path;
    let mut offset = 0;
    for segment in import_path.split('/') {
        offset += segment.len() + 1;
        if segment == VENDOR_SEGMENT {
            rest = import_path.get(offset..).unwrap_or("");
        }
    }
    rest
}

pub fn classify(package: &PackageDescriptor, boundary: &Boundary) -> Category {
    if package.standard {
        Category::Standard
    } else if is_externally_vendored(&package.import_path) {
        Category::ExternallyVendored
    } else if boundary.contains(&package.dir) {
        Category::Local
    } else {
        Category::Vendorable
    }
}
