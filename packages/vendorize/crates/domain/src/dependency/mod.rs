pub mod classifier;

pub use classifier::{classify, is_externally_vendored, unvendored_path, Boundary, Category};
