//! Facade over the vendoring layers.

pub use application;
pub use domain;
pub use infrastructure;

use application::VendorService;
use domain::{Boundary, VendorLayout};
use infrastructure::{FsCopier, GoListRegistry, VcsRevision};

/// Service wired to the real resolver, filesystem and version control.
pub type SystemVendorService = VendorService<GoListRegistry, FsCopier, VcsRevision>;

pub fn system_service(
    registry: GoListRegistry,
    boundary: Boundary,
    layout: VendorLayout,
) -> SystemVendorService {
    VendorService::new(registry, FsCopier::new(), VcsRevision::new(), boundary, layout)
}
