//! Caller-facing inputs for tables, columns and GROUP/ORDER terms.
//!
//! These accept the loose shapes a query author writes (`"users AS u"`,
//! `["id", "name"]`, `raw!("COUNT(*)")`) and normalize them into clause parts.

use super::parts::{Column, ColumnExpr, TableSource};
use crate::expr::Expr;
use crate::select::Select;
use regex::Regex;
use std::sync::LazyLock;

/// `<expr> AS <alias>`, case-insensitive.
pub(crate) static AS_ALIAS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(.+)\s+AS\s+(.+)$").expect("static regex"));

/// Anything containing a parenthesized part is taken as an expression.
pub(crate) static PARENTHESIZED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(.*\)").expect("static regex"));

/// A table, derived table or expression plus an optional correlation name.
///
/// - `"users"` reads `users`, correlation derived from the name
/// - `"db.users AS u"` reads `users` in schema `db` as `u`
/// - `("u", "users")` is the same pair given as `(alias, table)`
/// - `""` or `()` names no table; only columns are added
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableSpec {
    pub(crate) source: Option<TableSource>,
    pub(crate) alias: Option<String>,
}

impl TableSpec {
    pub fn aliased(alias: impl Into<String>, source: impl Into<TableSource>) -> Self {
        Self {
            source: Some(source.into()),
            alias: Some(alias.into()),
        }
    }
}

impl From<&str> for TableSpec {
    fn from(value: &str) -> Self {
        if value.trim().is_empty() {
            return Self::default();
        }
        match AS_ALIAS.captures(value) {
            Some(caps) => Self::aliased(caps[2].trim(), caps[1].trim()),
            None => Self {
                source: Some(TableSource::from(value)),
                alias: None,
            },
        }
    }
}

impl From<String> for TableSpec {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<&String> for TableSpec {
    fn from(value: &String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<(&str, &str)> for TableSpec {
    fn from((alias, table): (&str, &str)) -> Self {
        Self::aliased(alias, table)
    }
}

impl From<(&str, Expr)> for TableSpec {
    fn from((alias, expr): (&str, Expr)) -> Self {
        Self::aliased(alias, expr)
    }
}

impl From<(&str, Select)> for TableSpec {
    fn from((alias, select): (&str, Select)) -> Self {
        Self::aliased(alias, select)
    }
}

impl From<Expr> for TableSpec {
    fn from(value: Expr) -> Self {
        Self {
            source: Some(TableSource::Expr(value)),
            alias: None,
        }
    }
}

impl From<Select> for TableSpec {
    fn from(value: Select) -> Self {
        Self {
            source: Some(TableSource::from(value)),
            alias: None,
        }
    }
}

impl From<()> for TableSpec {
    fn from((): ()) -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, PartialEq)]
enum ColumnInput {
    Text(String),
    Expr(Expr),
}

#[derive(Debug, Clone, PartialEq)]
struct ColumnSpec {
    input: ColumnInput,
    alias: Option<String>,
}

/// Select-list entries for `from`, `join*` and `columns`.
///
/// Strings may carry their own alias (`"name AS n"`) and correlation
/// (`"u.name"`); anything parenthesized is treated as an expression.
///
/// ```
/// use quarry_core::{raw, select::Columns};
///
/// let cols = Columns::new()
///     .col("id")
///     .col_as("name", "n")
///     .expr_as(raw!("COUNT(*)"), "total");
/// # let _ = cols;
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Columns(Vec<ColumnSpec>);

impl Columns {
    pub fn new() -> Self {
        Self::default()
    }

    /// No columns at all.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn col(mut self, column: impl Into<String>) -> Self {
        self.0.push(ColumnSpec {
            input: ColumnInput::Text(column.into()),
            alias: None,
        });
        self
    }

    pub fn col_as(mut self, column: impl Into<String>, alias: impl Into<String>) -> Self {
        self.0.push(ColumnSpec {
            input: ColumnInput::Text(column.into()),
            alias: Some(alias.into()),
        });
        self
    }

    pub fn expr(mut self, expr: Expr) -> Self {
        self.0.push(ColumnSpec {
            input: ColumnInput::Expr(expr),
            alias: None,
        });
        self
    }

    pub fn expr_as(mut self, expr: Expr, alias: impl Into<String>) -> Self {
        self.0.push(ColumnSpec {
            input: ColumnInput::Expr(expr),
            alias: Some(alias.into()),
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Normalizes into select-list entries qualified with `correlation`
    /// unless a column names its own.
    pub(crate) fn into_columns(self, correlation: Option<&str>) -> Vec<Column> {
        self.0
            .into_iter()
            .filter_map(|spec| parse_column(spec, correlation))
            .collect()
    }
}

fn parse_column(spec: ColumnSpec, default_correlation: Option<&str>) -> Option<Column> {
    let mut correlation = default_correlation.map(str::to_string);
    let (expr, alias) = match spec.input {
        ColumnInput::Expr(expr) => (ColumnExpr::Raw(expr), spec.alias),
        ColumnInput::Text(text) => {
            if text.trim().is_empty() {
                return None;
            }
            let (text, alias) = match AS_ALIAS.captures(&text) {
                Some(caps) => (caps[1].trim().to_string(), Some(caps[2].trim().to_string())),
                None => (text.clone(), spec.alias),
            };
            let expr = if PARENTHESIZED.is_match(&text) {
                ColumnExpr::Raw(Expr::new(text))
            } else {
                match text.rsplit_once('.') {
                    Some((qualifier, name)) if !qualifier.is_empty() && !name.is_empty() => {
                        correlation = Some(qualifier.to_string());
                        column_name(name)
                    }
                    _ => column_name(&text),
                }
            };
            (expr, alias)
        }
    };
    let alias = match expr {
        ColumnExpr::Wildcard => None,
        _ => alias,
    };
    Some(Column {
        correlation,
        expr,
        alias,
    })
}

fn column_name(name: &str) -> ColumnExpr {
    if name == "*" {
        ColumnExpr::Wildcard
    } else {
        ColumnExpr::Name(name.to_string())
    }
}

impl From<&str> for Columns {
    fn from(value: &str) -> Self {
        Columns::new().col(value)
    }
}

impl From<String> for Columns {
    fn from(value: String) -> Self {
        Columns::new().col(value)
    }
}

impl From<Expr> for Columns {
    fn from(value: Expr) -> Self {
        Columns::new().expr(value)
    }
}

impl From<()> for Columns {
    fn from((): ()) -> Self {
        Columns::none()
    }
}

impl From<Vec<&str>> for Columns {
    fn from(values: Vec<&str>) -> Self {
        values.into_iter().fold(Columns::new(), Columns::col)
    }
}

impl<const N: usize> From<[&str; N]> for Columns {
    fn from(values: [&str; N]) -> Self {
        values.into_iter().fold(Columns::new(), Columns::col)
    }
}

impl From<Vec<Expr>> for Columns {
    fn from(values: Vec<Expr>) -> Self {
        values.into_iter().fold(Columns::new(), Columns::expr)
    }
}

/// `(alias, column)` pairs.
impl<const N: usize> From<[(&str, &str); N]> for Columns {
    fn from(values: [(&str, &str); N]) -> Self {
        values
            .into_iter()
            .fold(Columns::new(), |cols, (alias, column)| cols.col_as(column, alias))
    }
}

/// One GROUP BY or ORDER BY term as written by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    Text(String),
    Expr(Expr),
}

/// GROUP BY / ORDER BY input: one term or several.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Terms(pub(crate) Vec<Term>);

impl Terms {
    pub fn into_vec(self) -> Vec<Term> {
        self.0
    }
}

impl From<&str> for Terms {
    fn from(value: &str) -> Self {
        Terms(vec![Term::Text(value.to_string())])
    }
}

impl From<String> for Terms {
    fn from(value: String) -> Self {
        Terms(vec![Term::Text(value)])
    }
}

impl From<Expr> for Terms {
    fn from(value: Expr) -> Self {
        Terms(vec![Term::Expr(value)])
    }
}

impl From<Vec<&str>> for Terms {
    fn from(values: Vec<&str>) -> Self {
        Terms(values.into_iter().map(|v| Term::Text(v.to_string())).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Terms {
    fn from(values: [&str; N]) -> Self {
        Terms(values.into_iter().map(|v| Term::Text(v.to_string())).collect())
    }
}

impl From<Vec<Expr>> for Terms {
    fn from(values: Vec<Expr>) -> Self {
        Terms(values.into_iter().map(Term::Expr).collect())
    }
}

impl From<Vec<Term>> for Terms {
    fn from(values: Vec<Term>) -> Self {
        Terms(values)
    }
}
