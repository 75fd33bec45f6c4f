//! Named groups of WHERE predicates.

use crate::error::QuarryError;
use core::fmt;
use core::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Conjunction {
    #[default]
    And,
    Or,
}

impl Conjunction {
    pub const fn as_sql(&self) -> &'static str {
        match self {
            Conjunction::And => "AND",
            Conjunction::Or => "OR",
        }
    }
}

impl fmt::Display for Conjunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

impl FromStr for Conjunction {
    type Err = QuarryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AND" => Ok(Conjunction::And),
            "OR" => Ok(Conjunction::Or),
            _ => Err(QuarryError::InvalidConjunction(s.to_string())),
        }
    }
}

/// Predicates joined by one conjunction and rendered as a single
/// parenthesized group, ANDed with the rest of the WHERE clause.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConditionSet {
    pub conjunction: Conjunction,
    pub conditions: Vec<String>,
}

impl ConditionSet {
    pub fn new(conjunction: Conjunction) -> Self {
        Self {
            conjunction,
            conditions: Vec::new(),
        }
    }

    /// `(a OR b)`, or `None` for an empty set.
    pub fn render(&self) -> Option<String> {
        if self.conditions.is_empty() {
            return None;
        }
        let separator = format!(" {} ", self.conjunction);
        Some(format!("({})", self.conditions.join(&separator)))
    }
}
