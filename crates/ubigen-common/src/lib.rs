//! ubigen-common — Shared types, errors, and the outbound HTTP client used by the Ubigen crates.

pub mod error;
pub mod genes;
pub mod sandbox;

// Re-export commonly used types
pub use error::{ErrorKind, Result, UbigenError};
pub use genes::{GeneId, GeneSet};
pub use sandbox::SandboxClient;
