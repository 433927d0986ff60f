use anyhow::{Context, Result};
use domain::entities::package::PackageDescriptor;
use domain::ports::registry::{PackageRegistry, RegistryError};
use std::io::{self, BufReader, Read};
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Resolves packages by running `go list -e -json` over a batch of names.
pub struct GoListRegistry {
    program: PathBuf,
    flags: Vec<String>,
    dir: Option<PathBuf>,
}

impl GoListRegistry {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            flags: Vec::new(),
            dir: None,
        }
    }

    /// Find `program` on PATH (or accept it as a path).
    pub fn locate(program: &str) -> Result<Self> {
        let path = which::which(program)
            .with_context(|| format!("Could not find `{}`. Is the Go toolchain installed?", program))?;
        Ok(Self::new(path))
    }

    /// Extra build flags passed before the package names, e.g. `-tags=integration`.
    pub fn with_flags(mut self, flags: Vec<String>) -> Self {
        self.flags = flags;
        self
    }

    /// Run the resolver from `dir` instead of the process working directory.
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }
}

impl PackageRegistry for GoListRegistry {
    fn resolve(&self, names: &[String]) -> Result<Vec<PackageDescriptor>, RegistryError> {
        // With no names the resolver would describe the current directory.
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let mut cmd = Command::new(&self.program);
        cmd.args(["list", "-e", "-json"])
            .args(&self.flags)
            .args(names)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit());
        if let Some(dir) = &self.dir {
            cmd.current_dir(dir);
        }

        tracing::debug!(program = ?self.program, count = names.len(), "resolving packages");

        let mut child = cmd.spawn().map_err(RegistryError::Spawn)?;
        let stdout = child.stdout.take().ok_or_else(|| {
            RegistryError::Spawn(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "resolver stdout was not captured",
            ))
        })?;

        // Drain before waiting so a full pipe cannot stall the child.
        let decoded = decode_stream(BufReader::new(stdout));
        let status = child.wait().map_err(RegistryError::Spawn)?;
        let packages = decoded?;

        if !status.success() {
            return Err(RegistryError::Failed(status));
        }

        tracing::debug!(resolved = packages.len(), "resolver finished");
        Ok(packages)
    }
}

/// Decode a stream of concatenated JSON package records.
pub fn decode_stream<R: Read>(reader: R) -> Result<Vec<PackageDescriptor>, RegistryError> {
    serde_json::Deserializer::from_reader(reader)
        .into_iter::<PackageDescriptor>()
        .map(|record| record.map_err(RegistryError::from))
        .collect()
}
