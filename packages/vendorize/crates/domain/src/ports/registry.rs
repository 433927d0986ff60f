use crate::entities::package::PackageDescriptor;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Resolver not found: {0}")]
    NotFound(String),
    #[error("Failed to run resolver: {0}")]
    Spawn(#[source] std::io::Error),
    #[error("Malformed resolver output: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Resolver exited with {0}")]
    Failed(std::process::ExitStatus),
}

/// Resolves package names into descriptors.
///
/// One call per batch. Packages that fail to resolve come back as descriptors
/// carrying an error; an `Err` means the resolver itself could not be used.
pub trait PackageRegistry {
    fn resolve(&self, names: &[String]) -> Result<Vec<PackageDescriptor>, RegistryError>;
}

impl<T: PackageRegistry + ?Sized> PackageRegistry for &T {
    fn resolve(&self, names: &[String]) -> Result<Vec<PackageDescriptor>, RegistryError> {
        (**self).resolve(names)
    }
}
