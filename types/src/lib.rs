//! Shared type definitions for quarry
//!
//! - [`Dialect`] - database dialect enum (MySQL, PostgreSQL, SQLite, Oracle)
//!
//! # Features
//!
//! - `serde` - Enable serde serialization/deserialization

mod dialect;

pub use dialect::{Dialect, DialectParseError};

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::Dialect;
}
