use domain::ports::revision::{Revision, RevisionError, RevisionSource};
use std::path::Path;
use std::process::{Command, Output, Stdio};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vcs {
    Git,
    Mercurial,
}

impl Vcs {
    /// Walk up from `dir` to the nearest repository metadata directory.
    pub fn detect(dir: &Path) -> Option<Self> {
        dir.ancestors().find_map(|d| {
            if d.join(".git").exists() {
                Some(Vcs::Git)
            } else if d.join(".hg").exists() {
                Some(Vcs::Mercurial)
            } else {
                None
            }
        })
    }

    fn tool(self) -> &'static str {
        match self {
            Vcs::Git => "git",
            Vcs::Mercurial => "hg",
        }
    }
}

/// Looks up the checked-out revision of a package directory with git or hg.
#[derive(Debug, Default, Clone, Copy)]
pub struct VcsRevision;

impl VcsRevision {
    pub fn new() -> Self {
        Self
    }
}

impl RevisionSource for VcsRevision {
    fn revision_of(&self, dir: &Path) -> Result<Revision, RevisionError> {
        match Vcs::detect(dir) {
            Some(Vcs::Git) => git_revision(dir),
            Some(Vcs::Mercurial) => hg_revision(dir),
            None => Err(RevisionError::Unrecognized(dir.to_path_buf())),
        }
    }
}

fn run(vcs: Vcs, dir: &Path, args: &[&str]) -> Result<Output, RevisionError> {
    let tool = vcs.tool();
    tracing::trace!(tool, ?args, ?dir, "running");
    Command::new(tool)
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::null())
        .output()
        .map_err(|source| RevisionError::Spawn { tool, source })
}

fn stdout_of(vcs: Vcs, dir: &Path, args: &[&str]) -> Result<String, RevisionError> {
    let output = run(vcs, dir, args)?;
    if !output.status.success() {
        return Err(RevisionError::Command {
            tool: vcs.tool(),
            message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

fn git_revision(dir: &Path) -> Result<Revision, RevisionError> {
    let id = stdout_of(Vcs::Git, dir, &["rev-parse", "HEAD"])?;
    // diff-index exits non-zero when the tree differs from HEAD.
    let clean = run(Vcs::Git, dir, &["diff-index", "--quiet", "HEAD"])?
        .status
        .success();
    Ok(Revision { id, clean })
}

fn hg_revision(dir: &Path) -> Result<Revision, RevisionError> {
    let id = stdout_of(Vcs::Mercurial, dir, &["id", "-i"])?;
    Ok(parse_hg_id(&id))
}

/// `hg id -i` appends `+` to the node id of a modified working copy.
fn parse_hg_id(id: &str) -> Revision {
    match id.strip_suffix('+') {
        Some(node) => Revision::dirty(node),
        None => Revision::clean(id),
    }
}
