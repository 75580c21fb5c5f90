//! Domain logic - pure text rules independent of files and process state

pub mod fallback;
pub mod version;

pub use fallback::{replace_fallback_version, FallbackPatch};
pub use version::VersionString;
