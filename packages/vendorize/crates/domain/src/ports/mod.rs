pub mod copier;
pub mod registry;
pub mod revision;

pub use copier::{CopyError, TreeCopier};
pub use registry::{PackageRegistry, RegistryError};
pub use revision::{Revision, RevisionError, RevisionSource};
