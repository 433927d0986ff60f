pub mod config;
pub mod report;
pub mod vendor_service;

pub use config::{ResolverConfig, VendorConfig};
pub use report::{Issue, RunReport};
pub use vendor_service::{VendorError, VendorService, EXPANDED_LEVELS};
