//! Join and union kinds used by the SELECT builder.
//!
//! Both enums parse from the lowercase keyword spelling (`"left join"`,
//! `"union all"`) so string-driven callers get a typed error for unknown
//! keywords instead of malformed SQL.

use crate::error::QuarryError;
use core::fmt;
use core::str::FromStr;

// =============================================================================
// Join Type Enum
// =============================================================================

/// How a table source joins the statement.
///
/// [`JoinType::From`] marks sources added through `from()`; they stay grouped
/// ahead of every real join.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum JoinType {
    #[default]
    From,
    Inner,
    Left,
    Right,
    Full,
    Cross,
    Natural,
}

impl JoinType {
    /// Keyword rendered in front of a joined table.
    ///
    /// A FROM source that is not the first table renders as `INNER JOIN`.
    pub const fn as_sql(&self) -> &'static str {
        match self {
            JoinType::From | JoinType::Inner => "INNER JOIN",
            JoinType::Left => "LEFT JOIN",
            JoinType::Right => "RIGHT JOIN",
            JoinType::Full => "FULL JOIN",
            JoinType::Cross => "CROSS JOIN",
            JoinType::Natural => "NATURAL JOIN",
        }
    }

    /// Lowercase keyword form, as accepted by [`FromStr`].
    pub const fn as_str(&self) -> &'static str {
        match self {
            JoinType::From => "from",
            JoinType::Inner => "inner join",
            JoinType::Left => "left join",
            JoinType::Right => "right join",
            JoinType::Full => "full join",
            JoinType::Cross => "cross join",
            JoinType::Natural => "natural join",
        }
    }

    /// Returns `true` if the join carries an `ON` / `USING` condition.
    pub const fn takes_condition(&self) -> bool {
        !matches!(self, JoinType::Cross | JoinType::Natural)
    }
}

impl fmt::Display for JoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

impl FromStr for JoinType {
    type Err = QuarryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.split_whitespace().collect::<Vec<_>>().join(" ");
        match normalized.to_ascii_lowercase().as_str() {
            "from" => Ok(JoinType::From),
            "join" | "inner join" => Ok(JoinType::Inner),
            "left join" => Ok(JoinType::Left),
            "right join" => Ok(JoinType::Right),
            "full join" => Ok(JoinType::Full),
            "cross join" => Ok(JoinType::Cross),
            "natural join" => Ok(JoinType::Natural),
            _ => Err(QuarryError::InvalidJoinType(s.to_string())),
        }
    }
}

// =============================================================================
// Union Type Enum
// =============================================================================

/// Set operation joining the members of a UNION statement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum UnionType {
    #[default]
    Union,
    UnionAll,
}

impl UnionType {
    pub const fn as_sql(&self) -> &'static str {
        match self {
            UnionType::Union => "UNION",
            UnionType::UnionAll => "UNION ALL",
        }
    }
}

impl fmt::Display for UnionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

impl FromStr for UnionType {
    type Err = QuarryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.split_whitespace().collect::<Vec<_>>().join(" ");
        if normalized.eq_ignore_ascii_case("union") {
            Ok(UnionType::Union)
        } else if normalized.eq_ignore_ascii_case("union all") {
            Ok(UnionType::UnionAll)
        } else {
            Err(QuarryError::InvalidUnionType(s.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_type_parses_keywords() {
        assert_eq!("left join".parse::<JoinType>(), Ok(JoinType::Left));
        assert_eq!("LEFT   JOIN".parse::<JoinType>(), Ok(JoinType::Left));
        assert_eq!("join".parse::<JoinType>(), Ok(JoinType::Inner));
        assert_eq!("natural join".parse::<JoinType>(), Ok(JoinType::Natural));
        assert_eq!(
            "sideways join".parse::<JoinType>(),
            Err(QuarryError::InvalidJoinType("sideways join".into()))
        );
    }

    #[test]
    fn join_type_keywords_round_trip() {
        for join in [
            JoinType::From,
            JoinType::Inner,
            JoinType::Left,
            JoinType::Right,
            JoinType::Full,
            JoinType::Cross,
            JoinType::Natural,
        ] {
            assert_eq!(join.as_str().parse::<JoinType>(), Ok(join));
        }
        assert_eq!(JoinType::From.as_sql(), "INNER JOIN");
        assert!(!JoinType::Cross.takes_condition());
        assert!(JoinType::Left.takes_condition());
    }

    #[test]
    fn union_type_parses_keywords() {
        assert_eq!("UNION".parse::<UnionType>(), Ok(UnionType::Union));
        assert_eq!("union all".parse::<UnionType>(), Ok(UnionType::UnionAll));
        assert_eq!(
            "INTERSECT".parse::<UnionType>(),
            Err(QuarryError::InvalidUnionType("INTERSECT".into()))
        );
        assert_eq!(UnionType::UnionAll.to_string(), "UNION ALL");
    }
}
