pub mod dependency;
pub mod entities;
pub mod ports;
pub mod vendor;

pub use dependency::classifier::{classify, Boundary, Category};
pub use entities::package::{PackageDescriptor, PackageError};
pub use ports::{PackageRegistry, RevisionSource, TreeCopier};
pub use vendor::{Manifest, SkipSet, VendorLayout};
