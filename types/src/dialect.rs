//! Unified database dialect enum
//!
//! A dialect decides how identifiers are quoted, how string literals are
//! escaped, how LIMIT/OFFSET is spelled and which dummy table (if any) a
//! table-less SELECT reads from.

/// SQL dialect for database-specific rendering
///
/// # Examples
///
/// ```
/// use quarry_types::Dialect;
///
/// let dialect = Dialect::MySQL;
/// assert_eq!(dialect.identifier_quote(), '`');
///
/// let pg = Dialect::PostgreSQL;
/// assert_eq!(pg.identifier_quote(), '"');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Dialect {
    /// MySQL / MariaDB - backtick identifiers, backslash string escapes
    #[default]
    MySQL,

    /// PostgreSQL - double-quoted identifiers, standard string literals
    PostgreSQL,

    /// SQLite - double-quoted identifiers, standard string literals
    SQLite,

    /// Oracle - double-quoted identifiers, `DUAL` dummy table,
    /// `OFFSET .. ROWS FETCH NEXT .. ROWS ONLY` row limiting
    Oracle,
}

impl Dialect {
    /// Every supported dialect, in declaration order.
    pub const ALL: [Dialect; 4] = [
        Dialect::MySQL,
        Dialect::PostgreSQL,
        Dialect::SQLite,
        Dialect::Oracle,
    ];

    /// The character used to delimit identifiers.
    #[inline]
    #[must_use]
    pub const fn identifier_quote(&self) -> char {
        match self {
            Dialect::MySQL => '`',
            Dialect::PostgreSQL | Dialect::SQLite | Dialect::Oracle => '"',
        }
    }

    /// Returns `true` if string literals escape with backslashes (`\'`)
    /// instead of doubling the quote (`''`).
    #[inline]
    #[must_use]
    pub const fn uses_backslash_escapes(&self) -> bool {
        matches!(self, Dialect::MySQL)
    }

    /// Table a FROM-less SELECT must read from, if the dialect requires one.
    #[inline]
    #[must_use]
    pub const fn dummy_table(&self) -> Option<&'static str> {
        match self {
            Dialect::Oracle => Some("DUAL"),
            Dialect::MySQL | Dialect::PostgreSQL | Dialect::SQLite => None,
        }
    }

    /// Returns `true` if the dialect accepts `SELECT ... FOR UPDATE`.
    #[inline]
    #[must_use]
    pub const fn supports_for_update(&self) -> bool {
        !matches!(self, Dialect::SQLite)
    }

    /// Keyword placed between a table and its alias.
    ///
    /// Oracle rejects `AS` for table aliases, so the alias follows a space.
    #[inline]
    #[must_use]
    pub const fn table_alias_keyword(&self) -> &'static str {
        match self {
            Dialect::Oracle => " ",
            Dialect::MySQL | Dialect::PostgreSQL | Dialect::SQLite => " AS ",
        }
    }

    /// Parse a dialect from a string (case-insensitive)
    ///
    /// Supports common aliases:
    /// - MySQL: `"mysql"`, `"mariadb"`
    /// - PostgreSQL: `"postgresql"`, `"postgres"`, `"pg"`
    /// - SQLite: `"sqlite"`
    /// - Oracle: `"oracle"`, `"oci"`
    ///
    /// # Examples
    ///
    /// ```
    /// use quarry_types::Dialect;
    ///
    /// assert_eq!(Dialect::parse("mysql"), Some(Dialect::MySQL));
    /// assert_eq!(Dialect::parse("pg"), Some(Dialect::PostgreSQL));
    /// assert_eq!(Dialect::parse("unknown"), None);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("mysql") || s.eq_ignore_ascii_case("mariadb") {
            Some(Dialect::MySQL)
        } else if s.eq_ignore_ascii_case("postgresql")
            || s.eq_ignore_ascii_case("postgres")
            || s.eq_ignore_ascii_case("pg")
        {
            Some(Dialect::PostgreSQL)
        } else if s.eq_ignore_ascii_case("sqlite") {
            Some(Dialect::SQLite)
        } else if s.eq_ignore_ascii_case("oracle") || s.eq_ignore_ascii_case("oci") {
            Some(Dialect::Oracle)
        } else {
            None
        }
    }

    /// Get the dialect name as a lowercase string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Dialect::MySQL => "mysql",
            Dialect::PostgreSQL => "postgresql",
            Dialect::SQLite => "sqlite",
            Dialect::Oracle => "oracle",
        }
    }
}

impl core::fmt::Display for Dialect {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Dialect {
    type Err = DialectParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dialect::parse(s).ok_or(DialectParseError)
    }
}

/// Error returned when parsing an unknown dialect string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialectParseError;

impl core::fmt::Display for DialectParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("unknown dialect")
    }
}

impl std::error::Error for DialectParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialect_parse() {
        assert_eq!(Dialect::parse("mysql"), Some(Dialect::MySQL));
        assert_eq!(Dialect::parse("MySQL"), Some(Dialect::MySQL));
        assert_eq!(Dialect::parse("mariadb"), Some(Dialect::MySQL));

        assert_eq!(Dialect::parse("postgresql"), Some(Dialect::PostgreSQL));
        assert_eq!(Dialect::parse("postgres"), Some(Dialect::PostgreSQL));
        assert_eq!(Dialect::parse("PG"), Some(Dialect::PostgreSQL));

        assert_eq!(Dialect::parse("sqlite"), Some(Dialect::SQLite));
        assert_eq!(Dialect::parse("Oracle"), Some(Dialect::Oracle));

        assert_eq!(Dialect::parse("unknown"), None);
        assert_eq!(Dialect::parse(""), None);
    }

    #[test]
    fn test_dialect_from_str() {
        assert_eq!("oci".parse::<Dialect>(), Ok(Dialect::Oracle));
        assert_eq!("db2".parse::<Dialect>(), Err(DialectParseError));
        assert_eq!(DialectParseError.to_string(), "unknown dialect");
    }

    #[test]
    fn test_dialect_quoting_rules() {
        assert_eq!(Dialect::default(), Dialect::MySQL);
        assert_eq!(Dialect::MySQL.identifier_quote(), '`');
        assert_eq!(Dialect::SQLite.identifier_quote(), '"');
        assert!(Dialect::MySQL.uses_backslash_escapes());
        assert!(!Dialect::PostgreSQL.uses_backslash_escapes());
        assert_eq!(Dialect::Oracle.dummy_table(), Some("DUAL"));
        assert_eq!(Dialect::MySQL.dummy_table(), None);
        assert!(!Dialect::SQLite.supports_for_update());
        assert_eq!(Dialect::Oracle.table_alias_keyword(), " ");
        assert_eq!(Dialect::SQLite.table_alias_keyword(), " AS ");
    }

    #[test]
    fn test_dialect_display() {
        for dialect in Dialect::ALL {
            assert_eq!(Dialect::parse(&dialect.to_string()), Some(dialect));
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_dialect_serde_lowercase() {
        let json = serde_json::to_string(&Dialect::PostgreSQL).unwrap();
        assert_eq!(json, "\"postgresql\"");
        let back: Dialect = serde_json::from_str("\"oracle\"").unwrap();
        assert_eq!(back, Dialect::Oracle);
    }
}
