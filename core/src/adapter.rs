//! Dialect-aware quoting of identifiers and values.
//!
//! [`Adapter`] is the only place that knows how a dialect spells things:
//! identifier delimiters, string escapes, numeric coercion and row limiting.
//! [`Select`] delegates every piece of quoting to it.

use crate::error::{QuarryError, Result};
use crate::ident::{Identifier, Segment};
use crate::select::Select;
use crate::value::{QuoteType, Value};
use quarry_types::Dialect;
use regex::Regex;
use std::sync::LazyLock;

/// Row count used when only an offset was requested.
pub const UNBOUNDED_LIMIT: u64 = i64::MAX as u64;

static BIGINT_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-]?(?:0[Xx][0-9a-fA-F]+|[0-9]+(?:[eE][+-]?[0-9]+)?))")
        .expect("static regex")
});

static LEADING_FLOAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?")
        .expect("static regex")
});

/// Connection-level settings an [`Adapter`] is built from.
///
/// With the `serde` feature enabled this deserializes from any serde format,
/// e.g. `{"dialect": "postgresql", "auto_quote_identifiers": false}`.
/// Missing fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AdapterConfig {
    pub dialect: Dialect,
    /// Overrides the dialect's identifier delimiter
    pub quote_symbol: Option<char>,
    /// When `false`, identifiers quoted with `auto = true` are left bare
    pub auto_quote_identifiers: bool,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            dialect: Dialect::default(),
            quote_symbol: None,
            auto_quote_identifiers: true,
        }
    }
}

/// Quoting service for one SQL dialect.
///
/// # Examples
///
/// ```
/// use quarry_core::{Adapter, Dialect};
///
/// let adapter = Adapter::new(Dialect::MySQL);
/// assert_eq!(adapter.quote_identifier("db.users", true).unwrap(), "`db`.`users`");
/// assert_eq!(adapter.quote(&"O'Reilly".into(), None).unwrap(), r"'O\'Reilly'");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adapter {
    dialect: Dialect,
    quote_symbol: char,
    auto_quote_identifiers: bool,
}

impl Default for Adapter {
    fn default() -> Self {
        Self::new(Dialect::default())
    }
}

impl From<Dialect> for Adapter {
    fn from(dialect: Dialect) -> Self {
        Self::new(dialect)
    }
}

impl From<AdapterConfig> for Adapter {
    fn from(config: AdapterConfig) -> Self {
        Self::from_config(&config)
    }
}

impl From<&AdapterConfig> for Adapter {
    fn from(config: &AdapterConfig) -> Self {
        Self::from_config(config)
    }
}

impl Adapter {
    #[must_use]
    pub const fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            quote_symbol: dialect.identifier_quote(),
            auto_quote_identifiers: true,
        }
    }

    #[must_use]
    pub fn from_config(config: &AdapterConfig) -> Self {
        let adapter = Self::new(config.dialect)
            .with_auto_quote_identifiers(config.auto_quote_identifiers);
        match config.quote_symbol {
            Some(symbol) => adapter.with_quote_symbol(symbol),
            None => adapter,
        }
    }

    #[must_use]
    pub const fn with_quote_symbol(mut self, symbol: char) -> Self {
        self.quote_symbol = symbol;
        self
    }

    #[must_use]
    pub const fn with_auto_quote_identifiers(mut self, enabled: bool) -> Self {
        self.auto_quote_identifiers = enabled;
        self
    }

    #[inline]
    pub const fn dialect(&self) -> Dialect {
        self.dialect
    }

    #[inline]
    pub const fn quote_symbol(&self) -> char {
        self.quote_symbol
    }

    #[inline]
    pub const fn auto_quote_identifiers(&self) -> bool {
        self.auto_quote_identifiers
    }

    /// Table a FROM-less statement must read from, if any.
    #[inline]
    pub const fn dummy_table(&self) -> Option<&'static str> {
        self.dialect.dummy_table()
    }

    /// Starts a new statement bound to this adapter.
    pub fn select(&self) -> Select {
        Select::new(*self)
    }

    /// Quotes one name, doubling any embedded quote symbol.
    ///
    /// With `auto` set the name is only quoted if automatic quoting is on.
    pub fn quote_name(&self, name: &str, auto: bool) -> String {
        if auto && !self.auto_quote_identifiers {
            return name.to_string();
        }
        let q = self.quote_symbol;
        let mut quoted = String::with_capacity(name.len() + 2);
        quoted.push(q);
        for c in name.chars() {
            if c == q {
                quoted.push(q);
            }
            quoted.push(c);
        }
        quoted.push(q);
        quoted
    }

    pub fn quote_identifier(&self, ident: impl Into<Identifier>, auto: bool) -> Result<String> {
        self.quote_identifier_as(&ident.into(), None, auto)
    }

    /// Like [`Adapter::quote_identifier_as`], spelling the alias the way the
    /// dialect expects for tables.
    pub fn quote_table_as(
        &self,
        ident: impl Into<Identifier>,
        alias: Option<&str>,
        auto: bool,
    ) -> Result<String> {
        self.quote_as(&ident.into(), alias, auto, self.dialect.table_alias_keyword())
    }

    pub fn quote_column_as(
        &self,
        ident: impl Into<Identifier>,
        alias: Option<&str>,
        auto: bool,
    ) -> Result<String> {
        self.quote_identifier_as(&ident.into(), alias, auto)
    }

    /// Quotes an identifier with an optional `AS alias` suffix.
    ///
    /// The alias is dropped when it repeats the identifier's last segment,
    /// so `users AS users` renders as just `users`. Expressions render
    /// verbatim and statements render as a parenthesized subquery.
    pub fn quote_identifier_as(
        &self,
        ident: &Identifier,
        alias: Option<&str>,
        auto: bool,
    ) -> Result<String> {
        self.quote_as(ident, alias, auto, " AS ")
    }

    fn quote_as(
        &self,
        ident: &Identifier,
        alias: Option<&str>,
        auto: bool,
        keyword: &str,
    ) -> Result<String> {
        let mut alias = alias;
        let mut quoted = match ident {
            Identifier::Expr(expr) => expr.as_str().to_string(),
            Identifier::Select(select) => format!("({})", select.assemble()?),
            Identifier::Segments(segments) => {
                if alias.is_some() && ident.last_name() == alias {
                    alias = None;
                }
                segments
                    .iter()
                    .map(|segment| match segment {
                        Segment::Name(name) => self.quote_name(name, auto),
                        Segment::Raw(expr) => expr.as_str().to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(".")
            }
        };
        if let Some(alias) = alias {
            quoted.push_str(keyword);
            quoted.push_str(&self.quote_name(alias, auto));
        }
        Ok(quoted)
    }

    /// Renders a value as a SQL literal.
    ///
    /// A [`QuoteType`] hint coerces scalars through a numeric path and never
    /// produces a quoted string. Lists quote element-wise, expressions pass
    /// through and statements become parenthesized subqueries.
    pub fn quote(&self, value: &Value, hint: Option<QuoteType>) -> Result<String> {
        match (value, hint) {
            (Value::Select(select), _) => Ok(format!("({})", select.assemble()?)),
            (Value::Expr(expr), _) => Ok(expr.as_str().to_string()),
            (Value::List(values), _) => Ok(values
                .iter()
                .map(|value| self.quote(value, hint))
                .collect::<Result<Vec<_>>>()?
                .join(", ")),
            (scalar, Some(hint)) => quote_numeric(scalar, hint),
            (Value::Null, None) => Ok("NULL".to_string()),
            (Value::Bool(flag), None) => Ok(if *flag { "1" } else { "0" }.to_string()),
            (Value::Int(i), None) => Ok(i.to_string()),
            (Value::Float(f), None) => quote_float(*f),
            (Value::Text(text), None) => Ok(self.quote_string(text)),
        }
    }

    /// Wraps text in single quotes using the dialect's escaping rules.
    pub fn quote_string(&self, text: &str) -> String {
        let mut quoted = String::with_capacity(text.len() + 2);
        quoted.push('\'');
        if self.dialect.uses_backslash_escapes() {
            for c in text.chars() {
                match c {
                    '\0' => quoted.push_str("\\0"),
                    '\n' => quoted.push_str("\\n"),
                    '\r' => quoted.push_str("\\r"),
                    '\\' => quoted.push_str("\\\\"),
                    '\'' => quoted.push_str("\\'"),
                    '"' => quoted.push_str("\\\""),
                    '\x1a' => quoted.push_str("\\Z"),
                    c => quoted.push(c),
                }
            }
        } else {
            for c in text.chars() {
                if c == '\'' {
                    quoted.push('\'');
                }
                quoted.push(c);
            }
        }
        quoted.push('\'');
        quoted
    }

    /// Substitutes the quoted value for `?` placeholders in `text`.
    ///
    /// With `count` set only that many placeholders are replaced, left to
    /// right. Text produced by a substitution is never rescanned.
    pub fn quote_into(
        &self,
        text: &str,
        value: &Value,
        hint: Option<QuoteType>,
        count: Option<usize>,
    ) -> Result<String> {
        let quoted = self.quote(value, hint)?;
        let mut remaining = count.unwrap_or(usize::MAX);
        let mut out = String::with_capacity(text.len() + quoted.len());
        let mut rest = text;
        while remaining > 0 {
            let Some(pos) = rest.find('?') else {
                break;
            };
            out.push_str(&rest[..pos]);
            out.push_str(&quoted);
            rest = &rest[pos + 1..];
            remaining -= 1;
        }
        out.push_str(rest);
        Ok(out)
    }

    /// Appends the dialect's row-limiting clause to `sql`.
    pub fn limit(&self, sql: &str, count: u64, offset: u64) -> Result<String> {
        if count == 0 {
            return Err(QuarryError::InvalidLimitCount(count));
        }
        let clause = match self.dialect {
            Dialect::MySQL | Dialect::PostgreSQL | Dialect::SQLite => {
                if offset > 0 {
                    format!("LIMIT {count} OFFSET {offset}")
                } else {
                    format!("LIMIT {count}")
                }
            }
            Dialect::Oracle => {
                if offset > 0 {
                    format!("OFFSET {offset} ROWS FETCH NEXT {count} ROWS ONLY")
                } else {
                    format!("FETCH FIRST {count} ROWS ONLY")
                }
            }
        };
        let sql = sql.trim();
        if sql.is_empty() {
            Ok(clause)
        } else {
            Ok(format!("{sql} {clause}"))
        }
    }
}

fn quote_numeric(value: &Value, hint: QuoteType) -> Result<String> {
    match hint {
        QuoteType::Int => Ok(match value {
            Value::Int(i) => i.to_string(),
            Value::Float(f) => (*f as i64).to_string(),
            other => leading_int(&other.numeric_source()).to_string(),
        }),
        QuoteType::BigInt => {
            let source = value.numeric_source();
            Ok(BIGINT_LITERAL
                .captures(&source)
                .and_then(|caps| caps.get(1))
                .map_or_else(|| "0".to_string(), |m| m.as_str().to_string()))
        }
        QuoteType::Float => quote_float(match value {
            Value::Float(f) => *f,
            Value::Int(i) => *i as f64,
            other => leading_float(&other.numeric_source()),
        }),
    }
}

/// Six-digit decimal literal; NaN and the infinities have no SQL spelling.
fn quote_float(f: f64) -> Result<String> {
    if !f.is_finite() {
        return Err(QuarryError::NonFiniteFloat(f.to_string()));
    }
    Ok(format!("{f:.6}"))
}

/// Integer prefix of `text`, saturating on overflow; `0` when there is none.
fn leading_int(text: &str) -> i64 {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |n, b| {
            let digit = i64::from(b - b'0');
            if negative {
                n.saturating_mul(10).saturating_sub(digit)
            } else {
                n.saturating_mul(10).saturating_add(digit)
            }
        })
}

fn leading_float(text: &str) -> f64 {
    LEADING_FLOAT
        .find(text)
        .and_then(|m| m.as_str().trim().parse::<f64>().ok())
        .unwrap_or(0.0)
}
