//! Raw SQL expressions.

use core::fmt;

/// A SQL fragment that bypasses identifier and value quoting.
///
/// Use it for function calls, computed columns and literal subqueries:
///
/// ```
/// use quarry_core::Expr;
///
/// let now = Expr::new("NOW()");
/// assert_eq!(now.as_str(), "NOW()");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Expr(String);

impl Expr {
    /// Wraps `sql` verbatim.
    #[inline]
    pub fn new(sql: impl Into<String>) -> Self {
        Self(sql.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Shorthand for [`Expr::new`].
///
/// ```
/// use quarry_core::raw;
///
/// assert_eq!(raw!("COUNT(*)").as_str(), "COUNT(*)");
/// ```
#[macro_export]
macro_rules! raw {
    ($sql:expr) => {
        $crate::Expr::new($sql)
    };
}
