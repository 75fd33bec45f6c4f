//! Core of the quarry SELECT builder: the dialect-aware [`Adapter`], the
//! [`Select`] statement and the values and identifiers they quote.

#[macro_use]
mod tracing;

pub mod adapter;
pub mod error;
pub mod expr;
pub mod ident;
pub mod join;
pub mod select;
pub mod value;

pub use adapter::{Adapter, AdapterConfig, UNBOUNDED_LIMIT};
pub use error::{QuarryError, Result};
pub use expr::Expr;
pub use ident::{Identifier, Segment};
pub use join::{JoinType, UnionType};
pub use quarry_types::{Dialect, DialectParseError};
pub use select::{Columns, Conjunction, Direction, Part, Select, SelectParts, TableSpec};
pub use value::{QuoteType, Value};

pub mod prelude {
    pub use crate::adapter::{Adapter, AdapterConfig};
    pub use crate::error::{QuarryError, Result};
    pub use crate::expr::Expr;
    pub use crate::join::{JoinType, UnionType};
    pub use crate::raw;
    pub use crate::select::{Columns, Conjunction, Part, Select, TableSpec};
    pub use crate::value::{QuoteType, Value};
    pub use quarry_types::Dialect;
}
