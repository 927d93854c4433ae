//! Nest Core - Ordered nested containers with per-level key renumbering
//!
//! This crate provides the in-memory data model and the pure transformations
//! over it, with no I/O dependencies. It includes:
//!
//! - Tagged keys with an explicit integer-like classification
//! - Ordered nested containers of scalars and sub-containers
//! - Recursive deep copy with optional per-level integer key renumbering
//! - Key lookup with a default fallback
//! - Recursive and flat key/value searches
//! - Random fixture generation
//! - Conversion to and from JSON
//! - Error types and limits

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod access;
pub mod copy;
pub mod error;
pub mod generate;
pub mod json;
pub mod key;
pub mod limits;
pub mod search;
pub mod value;

// Re-export commonly used types
pub use access::{get_or, get_or_null};
pub use copy::{copy, copy_container, copy_with, CopyOptions};
pub use error::{NestError, Result};
pub use generate::{generate, GeneratorConfig};
pub use key::Key;
pub use limits::Limits;
pub use search::{search_flat, search_recursive};
pub use value::{Container, Scalar, Value};
