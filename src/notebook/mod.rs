/// Notebook domain: document model, per-cell transform, driver, path expansion.
pub mod document;
pub mod driver;
pub mod errors;
pub mod transform;
pub mod walk;

pub use driver::Driver;
pub use errors::NotebookError;
pub use walk::expand_paths;
