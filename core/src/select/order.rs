//! ORDER BY terms.

use super::source::Term;
use crate::expr::Expr;
use core::fmt;
use regex::Regex;
use std::sync::LazyLock;

static DIRECTION_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)^(.*\W)(ASC|DESC)\s*$").expect("static regex"));

static FUNCTION_CALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w*\(.*\)$").expect("static regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    pub const fn as_sql(&self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum OrderExpr {
    /// Column name, quoted on render
    Name(String),
    /// 1-based select-list position
    Position(u64),
    Raw(Expr),
}

/// One ORDER BY entry.
///
/// Text terms always carry a direction (ASC unless the text ends in
/// `ASC`/`DESC`); expression terms carry none and render verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderTerm {
    pub expr: OrderExpr,
    pub direction: Option<Direction>,
}

impl OrderTerm {
    /// `None` for blank terms, which are skipped.
    pub(crate) fn parse(term: Term) -> Option<Self> {
        let text = match term {
            Term::Expr(expr) if expr.is_empty() => return None,
            Term::Expr(expr) => {
                return Some(Self {
                    expr: OrderExpr::Raw(expr),
                    direction: None,
                });
            }
            Term::Text(text) => text,
        };

        let (value, direction) = match DIRECTION_SUFFIX.captures(&text) {
            Some(caps) => {
                let direction = if caps[2].eq_ignore_ascii_case("DESC") {
                    Direction::Desc
                } else {
                    Direction::Asc
                };
                (caps[1].trim().to_string(), direction)
            }
            None => (text.trim().to_string(), Direction::Asc),
        };
        if value.is_empty() {
            return None;
        }

        let expr = if value.bytes().all(|b| b.is_ascii_digit()) {
            match value.parse::<u64>() {
                Ok(position) => OrderExpr::Position(position),
                Err(_) => OrderExpr::Name(value),
            }
        } else if FUNCTION_CALL.is_match(&value) {
            OrderExpr::Raw(Expr::new(value))
        } else {
            OrderExpr::Name(value)
        };
        Some(Self {
            expr,
            direction: Some(direction),
        })
    }
}
