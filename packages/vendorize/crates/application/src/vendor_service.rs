use std::collections::HashSet;
use std::io::Write;
use std::path::Path;

use domain::dependency::classifier::{classify, Boundary, Category};
use domain::entities::package::PackageDescriptor;
use domain::ports::copier::TreeCopier;
use domain::ports::registry::{PackageRegistry, RegistryError};
use domain::ports::revision::RevisionSource;
use domain::vendor::{Manifest, SkipSet, VendorLayout};
use thiserror::Error;

use crate::report::{Issue, RunReport};

/// Levels of the walk whose packages get their dependencies expanded: the
/// named roots and their direct dependencies. Packages one level further
/// down are visited but not expanded.
pub const EXPANDED_LEVELS: usize = 2;

#[derive(Error, Debug)]
pub enum VendorError {
    #[error("error encountered listing packages: {0}")]
    Resolve(#[from] RegistryError),
}

/// What happened to one resolved package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    Broken,
    Standard,
    Skipped,
    Local,
    Copied,
    CopyFailed,
}

impl Visit {
    fn expands(self) -> bool {
        matches!(self, Visit::Local | Visit::Copied)
    }
}

/// One vendoring run: walks the import graph from a set of roots, copies every
/// vendorable package under the destination root and keeps the bookkeeping
/// needed for the skip report and the manifest log.
pub struct VendorService<R, C, V> {
    registry: R,
    copier: C,
    revisions: V,
    boundary: Boundary,
    layout: VendorLayout,
    manifest: Manifest,
    skipped: SkipSet,
    issues: Vec<Issue>,
}

impl<R, C, V> VendorService<R, C, V>
where
    R: PackageRegistry,
    C: TreeCopier,
    V: RevisionSource,
{
    pub fn new(registry: R, copier: C, revisions: V, boundary: Boundary, layout: VendorLayout) -> Self {
        Self {
            registry,
            copier,
            revisions,
            boundary,
            layout,
            manifest: Manifest::new(),
            skipped: SkipSet::new(),
            issues: Vec::new(),
        }
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    pub fn skipped(&self) -> &SkipSet {
        &self.skipped
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Walk the import graph starting at `names` (package paths or source files).
    ///
    /// Each level is resolved with a single registry call. With `recurse`
    /// unset only the named packages are visited. Only a failure to resolve
    /// the named packages themselves is returned as an error; everything
    /// after that is recorded as an [`Issue`] and the walk goes on.
    pub fn walk(&mut self, names: &[String], recurse: bool) -> Result<(), VendorError> {
        let expand_below = if recurse { EXPANDED_LEVELS } else { 0 };
        let mut seen: HashSet<String> = names.iter().cloned().collect();
        let mut batch = names.to_vec();
        let mut level = 0;

        loop {
            let packages = match self.registry.resolve(&batch) {
                Ok(packages) => packages,
                Err(e) if level == 0 => return Err(VendorError::Resolve(e)),
                Err(source) => {
                    self.issue(Issue::Resolve { level, source });
                    break;
                }
            };
            tracing::debug!(level, requested = batch.len(), resolved = packages.len(), "walk level");

            let mut next = Vec::new();
            for package in &packages {
                let visit = self.visit(package);
                if level < expand_below && visit.expands() {
                    for dep in package.dependencies() {
                        if seen.insert(dep.clone()) {
                            next.push(dep.clone());
                        }
                    }
                }
            }

            if next.is_empty() {
                break;
            }
            batch = next;
            level += 1;
        }
        Ok(())
    }

    fn visit(&mut self, package: &PackageDescriptor) -> Visit {
        if let Some(error) = &package.error {
            self.issue(Issue::Package {
                import_path: package.import_path.clone(),
                error: error.clone(),
            });
            return Visit::Broken;
        }
        for error in &package.deps_errors {
            tracing::debug!(package = %package.import_path, %error, "dependency error");
        }

        match classify(package, &self.boundary) {
            Category::Standard => Visit::Standard,
            Category::ExternallyVendored => {
                // A vendor tree inside the project is the project's own business.
                if !self.boundary.contains(&package.dir) && self.skipped.note(&package.import_path) {
                    tracing::debug!(package = %package.import_path, "externally vendored");
                }
                Visit::Skipped
            }
            Category::Local => Visit::Local,
            Category::Vendorable => {
                let dest = self.layout.package_dir(&package.import_path);
                match self
                    .copier
                    .copy_tree(&dest, &package.dir, &package.source_files())
                {
                    Ok(()) => {
                        tracing::info!(package = %package.import_path, "vendored");
                        self.manifest.record(package);
                        Visit::Copied
                    }
                    Err(source) => {
                        self.issue(Issue::Copy {
                            import_path: package.import_path.clone(),
                            source,
                        });
                        Visit::CopyFailed
                    }
                }
            }
        }
    }

    fn issue(&mut self, issue: Issue) {
        match &issue {
            Issue::Revision { .. } => tracing::warn!("{}", issue),
            _ => tracing::error!("{}", issue),
        }
        self.issues.push(issue);
    }

    /// Walk `roots`, print the skip report to `out` and append this run's
    /// block to the manifest log at `log_path`.
    pub fn run<W: Write>(
        mut self,
        roots: &[String],
        recurse: bool,
        log_path: &Path,
        out: W,
    ) -> Result<RunReport, VendorError> {
        self.walk(roots, recurse)?;

        let gaps = match self.skipped.report(&self.layout, out) {
            Ok(gaps) => gaps,
            Err(e) => {
                self.issue(Issue::Report(e));
                Vec::new()
            }
        };

        let mut manifest_lines = Vec::new();
        match self.manifest.finalize(log_path, &self.revisions) {
            Ok(outcome) => {
                for (import_path, source) in outcome.failures {
                    self.issue(Issue::Revision { import_path, source });
                }
                manifest_lines = outcome.lines;
            }
            Err(e) => self.issue(Issue::Manifest(e)),
        }

        Ok(RunReport {
            copied: self.manifest.import_paths().map(String::from).collect(),
            skipped: self.skipped.iter().map(String::from).collect(),
            gaps,
            manifest_lines,
            issues: self.issues,
        })
    }
}
