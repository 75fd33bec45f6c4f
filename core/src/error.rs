use crate::join::JoinType;
use quarry_types::Dialect;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuarryError {
    /// Join keyword that is not one of the supported join types
    #[error("Invalid join type '{0}'")]
    InvalidJoinType(String),

    /// Union keyword other than `UNION` / `UNION ALL`
    #[error("Invalid union type '{0}'")]
    InvalidUnionType(String),

    /// Condition-set conjunction other than `AND` / `OR`
    #[error("Invalid condition set conjunction '{0}', expected AND or OR")]
    InvalidConjunction(String),

    /// Unknown clause name passed to [`Part::from_str`](crate::select::Part)
    #[error("Invalid select part '{0}'")]
    InvalidPart(String),

    /// Unknown numeric type hint
    #[error("Invalid quote type '{0}'")]
    InvalidQuoteType(String),

    /// Correlation name registered twice in the FROM clause
    #[error("You cannot define a correlation name '{0}' more than once")]
    DuplicateCorrelation(String),

    /// `columns()` without any FROM table
    #[error("No table has been specified for the FROM clause")]
    NoFromTable,

    /// `columns_for()` naming a correlation that is not in the FROM clause
    #[error("No table with correlation name '{0}' has been specified for the FROM clause")]
    UnknownCorrelation(String),

    /// USING join before any FROM table
    #[error("You can only perform a joinUsing after specifying a FROM table")]
    JoinUsingWithoutFrom,

    /// USING join without a table to join
    #[error("A table must be specified for a USING join")]
    MissingJoinTable,

    /// USING join requested for a join type that cannot carry a USING list
    #[error("Cannot perform a USING join with {0}")]
    UsingNotSupported(JoinType),

    /// FROM or JOIN added to a statement that already has UNION parts
    #[error("Invalid use of table with UNION")]
    TableWithUnion,

    /// WHERE predicate added to a statement that already has UNION parts
    #[error("Invalid use of where clause with UNION")]
    WhereWithUnion,

    /// UNION added to a statement that already selects from tables or columns
    #[error("Invalid use of UNION with a FROM, WHERE or column clause")]
    UnionWithTable,

    /// Predicate added to a condition set that was never registered
    #[error("Condition set '{0}' has not been registered")]
    UnknownConditionSet(String),

    /// LIMIT with a non-positive row count
    #[error("LIMIT argument count={0} is not valid")]
    InvalidLimitCount(u64),

    /// WHERE, GROUP BY or HAVING state on a statement that renders no FROM clause
    #[error("{0} clause requires a FROM table")]
    ClauseWithoutFrom(&'static str),

    /// Float literal that SQL cannot spell: NaN or an infinity
    #[error("Cannot quote non-finite float '{0}'")]
    NonFiniteFloat(String),

    /// Nothing to select: no columns and no UNION parts
    #[error("Statement selects no columns")]
    EmptySelect,

    /// Clause the target dialect cannot express
    #[error("{feature} is not supported by {dialect}")]
    Unsupported {
        dialect: Dialect,
        feature: &'static str,
    },
}

/// Result type for statement construction
pub type Result<T> = std::result::Result<T, QuarryError>;
