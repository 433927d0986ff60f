use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File looked up in the project directory when no config path is given.
pub const CONFIG_FILE: &str = "vendorize.toml";

/// Settings for one vendoring run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct VendorConfig {
    /// Destination root, relative to the project directory unless absolute.
    pub vendor_dir: PathBuf,

    /// Append-only log of vendored revisions.
    pub log_file: PathBuf,

    /// Expand the dependencies of the named packages.
    pub recurse: bool,

    pub resolver: ResolverConfig,
}

/// How the package metadata resolver is invoked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ResolverConfig {
    /// Resolver binary, looked up on PATH.
    pub program: String,

    /// Extra flags passed ahead of package names (e.g. `-tags=netgo`).
    pub flags: Vec<String>,
}

impl Default for VendorConfig {
    fn default() -> Self {
        Self {
            vendor_dir: PathBuf::from("vendor"),
            log_file: PathBuf::from("vendor-log"),
            recurse: true,
            resolver: ResolverConfig::default(),
        }
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            program: "go".to_string(),
            flags: Vec::new(),
        }
    }
}

impl VendorConfig {
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid vendorize configuration")
    }

    /// Load `path`, falling back to defaults when the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(?path, "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        Self::from_toml(&content).with_context(|| format!("In config file {:?}", path))
    }

    pub fn vendor_root(&self, project: &Path) -> PathBuf {
        project.join(&self.vendor_dir)
    }

    pub fn log_path(&self, project: &Path) -> PathBuf {
        project.join(&self.log_file)
    }
}
