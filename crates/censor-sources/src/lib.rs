pub mod collection;
pub mod file;

pub use collection::expand_patterns;
pub use file::{ensure_dir, read_document, write_document};
