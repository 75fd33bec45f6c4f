//! # Quarry
//!
//! A dialect-aware SQL SELECT statement builder.
//!
//! ## Quick Start
//!
//! ```rust
//! use quarry::prelude::*;
//!
//! # fn main() -> quarry::Result<()> {
//! let mut select = quarry::select(Dialect::PostgreSQL);
//! select
//!     .from("orders AS o", ["id", "total"])?
//!     .join_inner_using("customers", &["customer_id"], "name")?
//!     .where_bind("o.total > ?", 100)?
//!     .group("customers.name")
//!     .order("total DESC")
//!     .limit_page(2, 25);
//!
//! let sql = select.assemble()?;
//! assert!(sql.starts_with(r#"SELECT "o"."id", "o"."total", "customers"."name" FROM "orders" AS "o""#));
//! assert!(sql.ends_with("LIMIT 25 OFFSET 25"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Dialect Support
//!
//! | Dialect    | Identifiers | String escapes | Row limiting                       |
//! |------------|-------------|----------------|------------------------------------|
//! | MySQL      | `` `x` ``   | `\'`           | `LIMIT n OFFSET m`                 |
//! | PostgreSQL | `"x"`       | `''`           | `LIMIT n OFFSET m`                 |
//! | SQLite     | `"x"`       | `''`           | `LIMIT n OFFSET m`                 |
//! | Oracle     | `"x"`       | `''`           | `OFFSET m ROWS FETCH NEXT n ROWS`  |
//!
//! ## Features
//!
//! - `serde`: deserialize [`AdapterConfig`] and [`Dialect`] from configuration files
//! - `tracing`: debug events for assembled statements and rejected builder calls

// =============================================================================
// Root-level exports
// =============================================================================

/// Result type for quarry operations
pub use quarry_core::error::Result;

/// Database dialect enum
pub use quarry_types::Dialect;

/// Quoting service and its configuration
pub use quarry_core::{Adapter, AdapterConfig};

/// Statement builder
pub use quarry_core::Select;

/// Raw SQL fragment and its shorthand macro
pub use quarry_core::{Expr, raw};

/// Values and numeric quoting hints
pub use quarry_core::{QuoteType, Value};

/// Error types
pub mod error {
    pub use quarry_core::error::QuarryError;
    pub use quarry_types::DialectParseError;
}

/// Clause inputs and the read-only clause model.
pub mod select {
    pub use quarry_core::join::{JoinType, UnionType};
    pub use quarry_core::select::*;
}

/// Identifier types accepted by the adapter's quoting routines.
pub mod ident {
    pub use quarry_core::ident::{Identifier, Segment};
}

/// Starts a statement for `dialect` with default adapter settings.
pub fn select(dialect: Dialect) -> Select {
    Adapter::new(dialect).select()
}

// =============================================================================
// Prelude
// =============================================================================

pub mod prelude {
    pub use quarry_core::prelude::*;
}
