pub mod aggregate;
pub mod copy;
pub mod errors;
pub mod input;
pub mod install;
pub mod logger;
pub mod policy;
pub mod reporting;
pub mod resolver;
pub mod sink;
pub mod trie;
pub mod walker;

pub use aggregate::{Aggregator, OutputDocument, PreviewMode};
pub use copy::copy_paths_to_clipboard;
pub use errors::ClipboardError;
pub use policy::ExclusionPolicy;
pub use resolver::PathResolver;
