use thiserror::Error;
use vendorize::application::VendorError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0:#}")]
    Config(anyhow::Error),

    #[error("Resolver error: {0:#}")]
    Resolver(anyhow::Error),

    #[error(transparent)]
    Vendor(#[from] VendorError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Returns a themed, actionable suggestion for the error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            CliError::Config(_) => {
                Some("Check vendorize.toml for syntax errors or mistyped values.".to_string())
            }
            CliError::Resolver(_) => {
                Some("Install the Go toolchain or point --go at the binary.".to_string())
            }
            CliError::Vendor(_) => Some(
                "Run from inside the module and check the package names you passed.".to_string(),
            ),
            CliError::Io(_) => None,
        }
    }

    pub fn render(&self) {
        eprintln!("{} {}", console::style("Error:").red().bold(), self);
        if let Some(s) = self.suggestion() {
            eprintln!("{} {}", console::style("  help:").dim(), s);
        }
    }
}
