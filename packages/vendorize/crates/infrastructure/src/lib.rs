pub mod adapters;
pub mod system;

pub use adapters::go_list::GoListRegistry;
pub use adapters::vcs::VcsRevision;
pub use system::fs::FsCopier;
