//! Clause state of a statement, exposed read-only through [`Select::parts`](super::Select::parts).

use super::condition::ConditionSet;
use super::order::OrderTerm;
use crate::error::QuarryError;
use crate::expr::Expr;
use crate::join::{JoinType, UnionType};
use crate::select::Select;
use core::fmt;
use core::str::FromStr;
use indexmap::IndexMap;

/// Every clause a statement accumulates.
///
/// WHERE and HAVING predicates are stored fully rendered, including their
/// `AND `/`OR ` prefix, so later quoting changes cannot alter them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectParts {
    pub distinct: bool,
    pub pre_columns_options: Vec<String>,
    pub columns: Vec<Column>,
    pub union: Vec<UnionPart>,
    /// Keyed by correlation name, in render order
    pub from: IndexMap<String, FromEntry>,
    pub where_clauses: Vec<String>,
    /// Keyed by set name, in registration order
    pub condition_sets: IndexMap<String, ConditionSet>,
    pub group: Vec<GroupTerm>,
    pub having: Vec<String>,
    pub order: Vec<OrderTerm>,
    pub limit_count: Option<u64>,
    pub limit_offset: Option<u64>,
    pub for_update: bool,
}

impl SelectParts {
    /// Restores one clause to its initial value.
    pub fn reset(&mut self, part: Part) {
        match part {
            Part::Distinct => self.distinct = false,
            Part::PreColumnsOptions => self.pre_columns_options.clear(),
            Part::Columns => self.columns.clear(),
            Part::Union => self.union.clear(),
            Part::From => self.from.clear(),
            Part::Where => self.where_clauses.clear(),
            Part::ConditionSets => self.condition_sets.clear(),
            Part::Group => self.group.clear(),
            Part::Having => self.having.clear(),
            Part::Order => self.order.clear(),
            Part::LimitCount => self.limit_count = None,
            Part::LimitOffset => self.limit_offset = None,
            Part::ForUpdate => self.for_update = false,
        }
    }

    /// Correlation names of the leading FROM-type entries.
    pub(crate) fn leading_from(&self) -> impl Iterator<Item = &String> {
        self.from
            .iter()
            .take_while(|(_, entry)| entry.join_type == JoinType::From)
            .map(|(correlation, _)| correlation)
    }
}

/// Names one clause of a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    Distinct,
    PreColumnsOptions,
    Columns,
    Union,
    From,
    Where,
    ConditionSets,
    Group,
    Having,
    Order,
    LimitCount,
    LimitOffset,
    ForUpdate,
}

impl Part {
    pub const ALL: [Part; 13] = [
        Part::Distinct,
        Part::PreColumnsOptions,
        Part::Columns,
        Part::Union,
        Part::From,
        Part::Where,
        Part::ConditionSets,
        Part::Group,
        Part::Having,
        Part::Order,
        Part::LimitCount,
        Part::LimitOffset,
        Part::ForUpdate,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Part::Distinct => "distinct",
            Part::PreColumnsOptions => "precolumnsoptions",
            Part::Columns => "columns",
            Part::Union => "union",
            Part::From => "from",
            Part::Where => "where",
            Part::ConditionSets => "conditionsets",
            Part::Group => "group",
            Part::Having => "having",
            Part::Order => "order",
            Part::LimitCount => "limitcount",
            Part::LimitOffset => "limitoffset",
            Part::ForUpdate => "forupdate",
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Part {
    type Err = QuarryError;

    /// Case-insensitive; underscores are ignored (`limit_count` == `limitcount`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Part::ALL
            .into_iter()
            .find(|part| part.as_str() == normalized)
            .ok_or_else(|| QuarryError::InvalidPart(s.to_string()))
    }
}

/// One entry of the select list.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Correlation the column is qualified with, if any
    pub correlation: Option<String>,
    pub expr: ColumnExpr,
    pub alias: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ColumnExpr {
    /// Plain column name, quoted on render
    Name(String),
    /// Rendered verbatim
    Raw(Expr),
    /// `*`, never aliased
    Wildcard,
}

/// What a FROM or JOIN entry reads from.
#[derive(Debug, Clone, PartialEq)]
pub enum TableSource {
    Name(String),
    Expr(Expr),
    Select(Box<Select>),
}

impl From<&str> for TableSource {
    fn from(value: &str) -> Self {
        TableSource::Name(value.to_string())
    }
}

impl From<String> for TableSource {
    fn from(value: String) -> Self {
        TableSource::Name(value)
    }
}

impl From<Expr> for TableSource {
    fn from(value: Expr) -> Self {
        TableSource::Expr(value)
    }
}

impl From<Select> for TableSource {
    fn from(value: Select) -> Self {
        TableSource::Select(Box::new(value))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FromEntry {
    pub join_type: JoinType,
    pub schema: Option<String>,
    pub table: TableSource,
    /// ON condition, used for conditional join types only
    pub condition: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GroupTerm {
    Name(String),
    Raw(Expr),
}

/// A member statement of a UNION.
#[derive(Debug, Clone, PartialEq)]
pub enum UnionTarget {
    Select(Box<Select>),
    Sql(String),
}

impl From<Select> for UnionTarget {
    fn from(value: Select) -> Self {
        UnionTarget::Select(Box::new(value))
    }
}

impl From<&str> for UnionTarget {
    fn from(value: &str) -> Self {
        UnionTarget::Sql(value.to_string())
    }
}

impl From<String> for UnionTarget {
    fn from(value: String) -> Self {
        UnionTarget::Sql(value)
    }
}

impl From<Expr> for UnionTarget {
    fn from(value: Expr) -> Self {
        UnionTarget::Sql(value.into_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnionPart {
    pub target: UnionTarget,
    /// Keyword placed between this member and the one before it
    pub kind: UnionType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_names_round_trip() {
        for part in Part::ALL {
            assert_eq!(part.as_str().parse::<Part>(), Ok(part));
        }
        assert_eq!("LIMIT_COUNT".parse::<Part>(), Ok(Part::LimitCount));
        assert_eq!(
            "limit".parse::<Part>(),
            Err(QuarryError::InvalidPart("limit".into()))
        );
    }

    #[test]
    fn reset_restores_defaults() {
        let mut parts = SelectParts {
            distinct: true,
            limit_count: Some(3),
            for_update: true,
            ..SelectParts::default()
        };
        parts.reset(Part::Distinct);
        parts.reset(Part::LimitCount);
        assert!(!parts.distinct);
        assert_eq!(parts.limit_count, None);
        assert!(parts.for_update);
    }
}
