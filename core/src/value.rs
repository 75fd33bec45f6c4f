//! Values that can be quoted into SQL text.

use crate::error::QuarryError;
use crate::expr::Expr;
use crate::select::Select;
use core::str::FromStr;

/// A value to be rendered as a SQL literal by [`Adapter::quote`](crate::Adapter::quote).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// Quoted element-wise and comma-joined, for `IN (...)` lists
    List(Vec<Value>),
    /// Rendered verbatim
    Expr(Expr),
    /// Rendered as a parenthesized subquery
    Select(Box<Select>),
}

impl Value {
    /// String form used by the numeric quoting paths.
    pub(crate) fn numeric_source(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(true) => "1".to_string(),
            Value::Bool(false) => String::new(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Text(s) => s.clone(),
            Value::Expr(e) => e.as_str().to_string(),
            Value::List(_) | Value::Select(_) => String::new(),
        }
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<Expr> for Value {
    fn from(value: Expr) -> Self {
        Value::Expr(value)
    }
}

impl From<Select> for Value {
    fn from(value: Select) -> Self {
        Value::Select(Box::new(value))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(values: [T; N]) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}

/// Numeric type hint for [`Adapter::quote`](crate::Adapter::quote).
///
/// A hint forces the value through a numeric path instead of string
/// escaping, so numeric-looking strings cannot smuggle SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuoteType {
    /// 32-bit style integer: the leading integer of the value, else `0`
    Int,
    /// 64-bit integer: a validated decimal, exponent or `0x` hex literal, else `0`
    BigInt,
    /// Float / decimal: fixed-point with six decimals
    Float,
}

impl FromStr for QuoteType {
    type Err = QuarryError;

    /// Maps SQL numeric type names to a hint.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "INT" | "INTEGER" | "MEDIUMINT" | "SMALLINT" | "TINYINT" => Ok(QuoteType::Int),
            "BIGINT" | "SERIAL" => Ok(QuoteType::BigInt),
            "DECIMAL" | "DOUBLE" | "DOUBLE PRECISION" | "FIXED" | "FLOAT" | "NUMERIC"
            | "REAL" => Ok(QuoteType::Float),
            _ => Err(QuarryError::InvalidQuoteType(s.to_string())),
        }
    }
}
