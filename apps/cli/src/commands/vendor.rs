use anyhow::{bail, Result};
use clap::Args;
use std::path::{Path, PathBuf};

use vendorize::application::config::CONFIG_FILE;
use vendorize::application::{RunReport, VendorConfig};
use vendorize::domain::{Boundary, VendorLayout};
use vendorize::infrastructure::GoListRegistry;

use crate::core::error::CliError;

#[derive(Args, Debug, Default)]
pub struct VendorCommand {
    /// Packages or source files to vendor (defaults to the package in the current directory)
    pub packages: Vec<String>,

    /// File name for the list of commit ids
    #[arg(long = "log", value_name = "NAME")]
    pub log: Option<PathBuf>,

    /// Destination directory for copied packages
    #[arg(long, value_name = "DIR")]
    pub vendor_dir: Option<PathBuf>,

    /// Copy only the named packages, not their dependencies
    #[arg(long)]
    pub no_deps: bool,

    /// Go binary used to resolve packages
    #[arg(long, value_name = "PATH")]
    pub go: Option<String>,

    /// Build tags passed to the resolver
    #[arg(long, value_name = "TAGS")]
    pub tags: Option<String>,

    /// Config file (defaults to vendorize.toml in the current directory)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl VendorCommand {
    pub fn execute(self, boundary: Boundary) -> Result<RunReport, CliError> {
        let config = self
            .resolve_config(boundary.root())
            .map_err(CliError::Config)?;

        let registry = GoListRegistry::locate(&config.resolver.program)
            .map_err(CliError::Resolver)?
            .with_flags(config.resolver.flags.clone())
            .in_dir(boundary.root());

        let layout = VendorLayout::new(config.vendor_root(boundary.root()));
        let log_path = config.log_path(boundary.root());
        let roots = self.roots();

        tracing::info!(
            roots = ?roots,
            vendor = ?layout.root(),
            recurse = config.recurse,
            "vendoring"
        );

        let service = vendorize::system_service(registry, boundary, layout);
        let stdout = std::io::stdout().lock();
        Ok(service.run(&roots, config.recurse, &log_path, stdout)?)
    }

    fn roots(&self) -> Vec<String> {
        if self.packages.is_empty() {
            vec![".".to_string()]
        } else {
            self.packages.clone()
        }
    }

    /// Config file values, overridden by whatever was given on the command line.
    fn resolve_config(&self, project: &Path) -> Result<VendorConfig> {
        let mut config = match &self.config {
            Some(path) if !path.exists() => bail!("Config file not found: {:?}", path),
            Some(path) => VendorConfig::load_or_default(path)?,
            None => VendorConfig::load_or_default(&project.join(CONFIG_FILE))?,
        };

        if let Some(log) = &self.log {
            config.log_file = log.clone();
        }
        if let Some(dir) = &self.vendor_dir {
            config.vendor_dir = dir.clone();
        }
        if self.no_deps {
            config.recurse = false;
        }
        if let Some(go) = &self.go {
            config.resolver.program = go.clone();
        }
        if let Some(tags) = &self.tags {
            config.resolver.flags.push(format!("-tags={}", tags));
        }
        Ok(config)
    }
}
