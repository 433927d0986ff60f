pub mod package;

pub use package::{PackageDescriptor, PackageError, SourceFiles};
