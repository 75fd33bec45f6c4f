//! The SELECT statement builder.
//!
//! A [`Select`] accumulates clauses through `&mut self` calls in any order
//! and renders them in SQL clause order on [`Select::assemble`]:
//!
//! ```
//! use quarry_core::{Adapter, Dialect};
//!
//! let mut select = Adapter::new(Dialect::MySQL).select();
//! select
//!     .from("users AS u", ["id", "name"])?
//!     .join_left("posts AS p", "p.user_id = u.id", "title")?
//!     .where_bind("u.active = ?", true)?
//!     .order("name DESC")
//!     .limit(10, 0);
//!
//! assert_eq!(
//!     select.assemble()?,
//!     "SELECT `u`.`id`, `u`.`name`, `p`.`title` FROM `users` AS `u`\n \
//!      LEFT JOIN `posts` AS `p` ON p.user_id = u.id WHERE (u.active = 1) \
//!      ORDER BY `name` DESC LIMIT 10"
//! );
//! # Ok::<(), quarry_core::QuarryError>(())
//! ```
//!
//! WHERE, HAVING and ON conditions are inserted as written; only `?`
//! placeholders are replaced with quoted values. Quote identifiers inside
//! conditions yourself when they need it.

mod condition;
mod order;
mod parts;
mod render;
mod source;

pub use condition::{ConditionSet, Conjunction};
pub use order::{Direction, OrderExpr, OrderTerm};
pub use parts::{
    Column, ColumnExpr, FromEntry, GroupTerm, Part, SelectParts, TableSource, UnionPart,
    UnionTarget,
};
pub use source::{Columns, TableSpec, Term, Terms};

use crate::adapter::Adapter;
use crate::error::{QuarryError, Result};
use crate::expr::Expr;
use crate::join::{JoinType, UnionType};
use crate::value::{QuoteType, Value};
use source::PARENTHESIZED;

/// A SELECT statement under construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    adapter: Adapter,
    parts: SelectParts,
}

impl Default for Select {
    fn default() -> Self {
        Self::new(Adapter::default())
    }
}

fn reject<T>(operation: &'static str, error: QuarryError) -> Result<T> {
    crate::quarry_trace_reject!(operation, &error);
    #[cfg(not(feature = "tracing"))]
    let _ = operation;
    Err(error)
}

impl Select {
    pub fn new(adapter: impl Into<Adapter>) -> Self {
        Self {
            adapter: adapter.into(),
            parts: SelectParts::default(),
        }
    }

    #[inline]
    pub fn adapter(&self) -> &Adapter {
        &self.adapter
    }

    /// Read-only view of the accumulated clauses.
    #[inline]
    pub fn parts(&self) -> &SelectParts {
        &self.parts
    }

    pub fn distinct(&mut self, flag: bool) -> &mut Self {
        self.parts.distinct = flag;
        self
    }

    /// Adds a keyword rendered between `SELECT` (and `DISTINCT`) and the
    /// column list, e.g. `SQL_CALC_FOUND_ROWS`.
    pub fn pre_columns_option(&mut self, option: impl Into<String>) -> &mut Self {
        self.parts.pre_columns_options.push(option.into());
        self
    }

    pub fn for_update(&mut self, flag: bool) -> &mut Self {
        self.parts.for_update = flag;
        self
    }

    // =========================================================================
    // FROM and JOIN
    // =========================================================================

    /// Adds a FROM table and the columns to select from it.
    ///
    /// Additional `from` calls stay ahead of every join and render as
    /// `INNER JOIN` without a condition. An empty table spec adds columns
    /// that belong to no table.
    pub fn from(
        &mut self,
        table: impl Into<TableSpec>,
        columns: impl Into<Columns>,
    ) -> Result<&mut Self> {
        self.join_with(JoinType::From, table, None, columns, None)
    }

    pub fn from_schema(
        &mut self,
        table: impl Into<TableSpec>,
        columns: impl Into<Columns>,
        schema: &str,
    ) -> Result<&mut Self> {
        self.join_with(JoinType::From, table, None, columns, Some(schema))
    }

    /// Adds columns to the first FROM table.
    pub fn columns(&mut self, columns: impl Into<Columns>) -> Result<&mut Self> {
        let Some(correlation) = self.parts.from.keys().next().cloned() else {
            return reject("columns", QuarryError::NoFromTable);
        };
        self.append_columns(columns.into(), &correlation);
        Ok(self)
    }

    /// Adds columns qualified with an existing correlation name.
    pub fn columns_for(
        &mut self,
        columns: impl Into<Columns>,
        correlation: &str,
    ) -> Result<&mut Self> {
        if !self.parts.from.contains_key(correlation) {
            return reject(
                "columns",
                QuarryError::UnknownCorrelation(correlation.to_string()),
            );
        }
        self.append_columns(columns.into(), correlation);
        Ok(self)
    }

    fn append_columns(&mut self, columns: Columns, correlation: &str) {
        let columns = columns.into_columns(Some(correlation));
        self.parts.columns.extend(columns);
    }

    /// Alias for [`Select::join_inner`].
    pub fn join(
        &mut self,
        table: impl Into<TableSpec>,
        condition: &str,
        columns: impl Into<Columns>,
    ) -> Result<&mut Self> {
        self.join_inner(table, condition, columns)
    }

    pub fn join_inner(
        &mut self,
        table: impl Into<TableSpec>,
        condition: &str,
        columns: impl Into<Columns>,
    ) -> Result<&mut Self> {
        self.join_with(JoinType::Inner, table, Some(condition), columns, None)
    }

    pub fn join_left(
        &mut self,
        table: impl Into<TableSpec>,
        condition: &str,
        columns: impl Into<Columns>,
    ) -> Result<&mut Self> {
        self.join_with(JoinType::Left, table, Some(condition), columns, None)
    }

    pub fn join_right(
        &mut self,
        table: impl Into<TableSpec>,
        condition: &str,
        columns: impl Into<Columns>,
    ) -> Result<&mut Self> {
        self.join_with(JoinType::Right, table, Some(condition), columns, None)
    }

    pub fn join_full(
        &mut self,
        table: impl Into<TableSpec>,
        condition: &str,
        columns: impl Into<Columns>,
    ) -> Result<&mut Self> {
        self.join_with(JoinType::Full, table, Some(condition), columns, None)
    }

    pub fn join_cross(
        &mut self,
        table: impl Into<TableSpec>,
        columns: impl Into<Columns>,
    ) -> Result<&mut Self> {
        self.join_with(JoinType::Cross, table, None, columns, None)
    }

    pub fn join_natural(
        &mut self,
        table: impl Into<TableSpec>,
        columns: impl Into<Columns>,
    ) -> Result<&mut Self> {
        self.join_with(JoinType::Natural, table, None, columns, None)
    }

    /// Adds a table source of any join type.
    ///
    /// The correlation name is the explicit alias, else the table name's last
    /// dotted segment (`t` for expressions and subqueries), suffixed `_2`,
    /// `_3`, ... until unique. A `schema.table` name always takes its schema
    /// from the name. The condition is ignored for CROSS and NATURAL joins.
    pub fn join_with(
        &mut self,
        join_type: JoinType,
        table: impl Into<TableSpec>,
        condition: Option<&str>,
        columns: impl Into<Columns>,
        schema: Option<&str>,
    ) -> Result<&mut Self> {
        if !self.parts.union.is_empty() {
            return reject("from", QuarryError::TableWithUnion);
        }

        let TableSpec { source, alias } = table.into();
        let columns = columns.into();
        let Some(source) = source else {
            // no table: the columns stand on their own
            let columns = columns.into_columns(None);
            self.insert_columns(columns, join_type);
            return Ok(self);
        };

        let correlation = match alias {
            Some(alias) => alias,
            None => self.unique_correlation(&source),
        };
        if self.parts.from.contains_key(&correlation) {
            return reject("from", QuarryError::DuplicateCorrelation(correlation));
        }

        let mut schema = schema.map(str::to_string);
        let table = match source {
            TableSource::Name(name) => match name.split_once('.') {
                Some((qualifier, table)) => {
                    schema = Some(qualifier.to_string());
                    TableSource::Name(table.to_string())
                }
                None => TableSource::Name(name),
            },
            other => other,
        };
        let condition = condition
            .filter(|condition| join_type.takes_condition() && !condition.trim().is_empty())
            .map(str::to_string);

        let columns = columns.into_columns(Some(&correlation));
        // column position depends on the FROM entries before this one
        self.insert_columns(columns, join_type);

        let entry = FromEntry {
            join_type,
            schema,
            table,
            condition,
        };
        if join_type == JoinType::From {
            let at = self.parts.leading_from().count();
            self.parts.from.shift_insert(at, correlation, entry);
        } else {
            self.parts.from.insert(correlation, entry);
        }
        Ok(self)
    }

    /// FROM-type columns go right after the columns of the existing FROM
    /// tables (first when there are none); join columns go last.
    fn insert_columns(&mut self, columns: Vec<Column>, join_type: JoinType) {
        if join_type != JoinType::From {
            self.parts.columns.extend(columns);
            return;
        }
        let leading: Vec<&String> = self.parts.leading_from().collect();
        let at = self
            .parts
            .columns
            .iter()
            .rposition(|column| {
                column
                    .correlation
                    .as_ref()
                    .is_some_and(|correlation| leading.contains(&correlation))
            })
            .map_or(0, |last| last + 1);
        self.parts.columns.splice(at..at, columns);
    }

    fn unique_correlation(&self, source: &TableSource) -> String {
        let base = match source {
            TableSource::Name(name) => name.rsplit_once('.').map_or(name.as_str(), |(_, t)| t),
            TableSource::Expr(_) | TableSource::Select(_) => "t",
        };
        let mut candidate = base.to_string();
        let mut suffix = 2;
        while self.parts.from.contains_key(&candidate) {
            candidate = format!("{base}_{suffix}");
            suffix += 1;
        }
        candidate
    }

    /// INNER JOIN matching `using` columns between the joined table and the
    /// first FROM table.
    pub fn join_using(
        &mut self,
        table: impl Into<TableSpec>,
        using: &[&str],
        columns: impl Into<Columns>,
    ) -> Result<&mut Self> {
        self.join_using_with(JoinType::Inner, table, using, columns, None)
    }

    pub fn join_inner_using(
        &mut self,
        table: impl Into<TableSpec>,
        using: &[&str],
        columns: impl Into<Columns>,
    ) -> Result<&mut Self> {
        self.join_using_with(JoinType::Inner, table, using, columns, None)
    }

    pub fn join_left_using(
        &mut self,
        table: impl Into<TableSpec>,
        using: &[&str],
        columns: impl Into<Columns>,
    ) -> Result<&mut Self> {
        self.join_using_with(JoinType::Left, table, using, columns, None)
    }

    pub fn join_right_using(
        &mut self,
        table: impl Into<TableSpec>,
        using: &[&str],
        columns: impl Into<Columns>,
    ) -> Result<&mut Self> {
        self.join_using_with(JoinType::Right, table, using, columns, None)
    }

    pub fn join_full_using(
        &mut self,
        table: impl Into<TableSpec>,
        using: &[&str],
        columns: impl Into<Columns>,
    ) -> Result<&mut Self> {
        self.join_using_with(JoinType::Full, table, using, columns, None)
    }

    /// Joins on equality of each `using` column, qualified with the joined
    /// table's correlation and the first FROM table's correlation.
    pub fn join_using_with(
        &mut self,
        join_type: JoinType,
        table: impl Into<TableSpec>,
        using: &[&str],
        columns: impl Into<Columns>,
        schema: Option<&str>,
    ) -> Result<&mut Self> {
        if join_type == JoinType::From || !join_type.takes_condition() {
            return reject("join_using", QuarryError::UsingNotSupported(join_type));
        }
        let Some(first) = self.parts.from.keys().next().cloned() else {
            return reject("join_using", QuarryError::JoinUsingWithoutFrom);
        };
        let table = table.into();
        let correlation = match (&table.alias, &table.source) {
            (Some(alias), _) => alias.clone(),
            (None, Some(source)) => self.unique_correlation(source),
            (None, None) => return reject("join_using", QuarryError::MissingJoinTable),
        };

        let joined = self.adapter.quote_name(&correlation, true);
        let from = self.adapter.quote_name(&first, true);
        let condition = using
            .iter()
            .map(|column| {
                let column = self.adapter.quote_name(column, true);
                format!("{joined}.{column} = {from}.{column}")
            })
            .collect::<Vec<_>>()
            .join(" AND ");
        self.join_with(join_type, table, Some(&condition), columns, schema)
    }

    /// Combines complete statements with UNION or UNION ALL.
    ///
    /// A UNION statement has no FROM, WHERE or column list of its own.
    pub fn union<I, T>(&mut self, selects: I, kind: UnionType) -> Result<&mut Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<UnionTarget>,
    {
        if !self.parts.from.is_empty()
            || !self.parts.where_clauses.is_empty()
            || !self.parts.columns.is_empty()
        {
            return reject("union", QuarryError::UnionWithTable);
        }
        self.parts
            .union
            .extend(selects.into_iter().map(|target| UnionPart {
                target: target.into(),
                kind,
            }));
        Ok(self)
    }

    // =========================================================================
    // WHERE
    // =========================================================================

    /// ANDs a predicate into the WHERE clause, verbatim.
    pub fn r#where(&mut self, condition: &str) -> Result<&mut Self> {
        self.add_where(condition, None, Conjunction::And)
    }

    /// ANDs a predicate with its `?` placeholders replaced by `value`.
    pub fn where_bind(&mut self, condition: &str, value: impl Into<Value>) -> Result<&mut Self> {
        self.add_where(condition, Some((value.into(), None)), Conjunction::And)
    }

    pub fn where_typed(
        &mut self,
        condition: &str,
        value: impl Into<Value>,
        hint: QuoteType,
    ) -> Result<&mut Self> {
        self.add_where(condition, Some((value.into(), Some(hint))), Conjunction::And)
    }

    pub fn or_where(&mut self, condition: &str) -> Result<&mut Self> {
        self.add_where(condition, None, Conjunction::Or)
    }

    pub fn or_where_bind(
        &mut self,
        condition: &str,
        value: impl Into<Value>,
    ) -> Result<&mut Self> {
        self.add_where(condition, Some((value.into(), None)), Conjunction::Or)
    }

    pub fn or_where_typed(
        &mut self,
        condition: &str,
        value: impl Into<Value>,
        hint: QuoteType,
    ) -> Result<&mut Self> {
        self.add_where(condition, Some((value.into(), Some(hint))), Conjunction::Or)
    }

    fn add_where(
        &mut self,
        condition: &str,
        bind: Option<(Value, Option<QuoteType>)>,
        conjunction: Conjunction,
    ) -> Result<&mut Self> {
        if !self.parts.union.is_empty() {
            return reject("where", QuarryError::WhereWithUnion);
        }
        let condition = self.bind(condition, bind, None)?;
        let clause = predicate(&self.parts.where_clauses, &condition, conjunction);
        self.parts.where_clauses.push(clause);
        Ok(self)
    }

    fn bind(
        &self,
        condition: &str,
        bind: Option<(Value, Option<QuoteType>)>,
        count: Option<usize>,
    ) -> Result<String> {
        match bind {
            Some((value, hint)) => self.adapter.quote_into(condition, &value, hint, count),
            None => Ok(condition.to_string()),
        }
    }

    /// Declares a named group of predicates joined by `conjunction`.
    ///
    /// Registering an existing name changes its conjunction and keeps its
    /// predicates.
    pub fn register_condition_set(
        &mut self,
        name: impl Into<String>,
        conjunction: Conjunction,
    ) -> &mut Self {
        self.parts
            .condition_sets
            .entry(name.into())
            .and_modify(|set| set.conjunction = conjunction)
            .or_insert_with(|| ConditionSet::new(conjunction));
        self
    }

    pub fn where_condition_set(&mut self, name: &str, condition: &str) -> Result<&mut Self> {
        self.add_to_condition_set(name, condition, None, None)
    }

    /// Adds a predicate to a set, replacing `count` placeholders (all when
    /// `None`) with `value`.
    pub fn where_condition_set_bind(
        &mut self,
        name: &str,
        condition: &str,
        value: impl Into<Value>,
        hint: Option<QuoteType>,
        count: Option<usize>,
    ) -> Result<&mut Self> {
        self.add_to_condition_set(name, condition, Some((value.into(), hint)), count)
    }

    fn add_to_condition_set(
        &mut self,
        name: &str,
        condition: &str,
        bind: Option<(Value, Option<QuoteType>)>,
        count: Option<usize>,
    ) -> Result<&mut Self> {
        if !self.parts.union.is_empty() {
            return reject("where", QuarryError::WhereWithUnion);
        }
        if !self.parts.condition_sets.contains_key(name) {
            return reject(
                "where",
                QuarryError::UnknownConditionSet(name.to_string()),
            );
        }
        let condition = self.bind(condition, bind, count)?;
        if let Some(set) = self.parts.condition_sets.get_mut(name) {
            set.conditions.push(condition);
        }
        Ok(self)
    }

    // =========================================================================
    // GROUP BY / HAVING / ORDER BY
    // =========================================================================

    /// Adds GROUP BY terms. Parenthesized terms and expressions are kept
    /// verbatim; names are quoted.
    pub fn group(&mut self, terms: impl Into<Terms>) -> &mut Self {
        let terms = terms.into().0.into_iter().filter_map(|term| match term {
            Term::Expr(expr) if expr.is_empty() => None,
            Term::Expr(expr) => Some(GroupTerm::Raw(expr)),
            Term::Text(text) if text.trim().is_empty() => None,
            Term::Text(text) if PARENTHESIZED.is_match(&text) => {
                Some(GroupTerm::Raw(Expr::new(text)))
            }
            Term::Text(text) => Some(GroupTerm::Name(text)),
        });
        self.parts.group.extend(terms);
        self
    }

    pub fn having(&mut self, condition: &str) -> Result<&mut Self> {
        self.add_having(condition, None, Conjunction::And)
    }

    pub fn having_bind(&mut self, condition: &str, value: impl Into<Value>) -> Result<&mut Self> {
        self.add_having(condition, Some((value.into(), None)), Conjunction::And)
    }

    pub fn having_typed(
        &mut self,
        condition: &str,
        value: impl Into<Value>,
        hint: QuoteType,
    ) -> Result<&mut Self> {
        self.add_having(condition, Some((value.into(), Some(hint))), Conjunction::And)
    }

    pub fn or_having(&mut self, condition: &str) -> Result<&mut Self> {
        self.add_having(condition, None, Conjunction::Or)
    }

    pub fn or_having_bind(
        &mut self,
        condition: &str,
        value: impl Into<Value>,
    ) -> Result<&mut Self> {
        self.add_having(condition, Some((value.into(), None)), Conjunction::Or)
    }

    pub fn or_having_typed(
        &mut self,
        condition: &str,
        value: impl Into<Value>,
        hint: QuoteType,
    ) -> Result<&mut Self> {
        self.add_having(condition, Some((value.into(), Some(hint))), Conjunction::Or)
    }

    fn add_having(
        &mut self,
        condition: &str,
        bind: Option<(Value, Option<QuoteType>)>,
        conjunction: Conjunction,
    ) -> Result<&mut Self> {
        let condition = self.bind(condition, bind, None)?;
        let clause = predicate(&self.parts.having, &condition, conjunction);
        self.parts.having.push(clause);
        Ok(self)
    }

    /// Adds ORDER BY terms such as `"name"`, `"created DESC"` or `"2 DESC"`.
    /// Blank terms are ignored.
    pub fn order(&mut self, terms: impl Into<Terms>) -> &mut Self {
        let terms = terms.into().0.into_iter().filter_map(OrderTerm::parse);
        self.parts.order.extend(terms);
        self
    }

    // =========================================================================
    // LIMIT / OFFSET
    // =========================================================================

    /// Limits the result to `count` rows after skipping `offset`.
    ///
    /// A zero count is rejected when the statement is assembled.
    pub fn limit(&mut self, count: u64, offset: u64) -> &mut Self {
        self.parts.limit_count = Some(count);
        self.parts.limit_offset = Some(offset);
        self
    }

    /// Skips `offset` rows without bounding the row count.
    pub fn offset(&mut self, offset: u64) -> &mut Self {
        self.parts.limit_offset = Some(offset);
        self
    }

    /// Limits to page `page` (1-based) of `row_size` rows. Both are
    /// clamped to at least 1.
    pub fn limit_page(&mut self, page: u64, row_size: u64) -> &mut Self {
        let page = page.max(1);
        let row_size = row_size.max(1);
        self.limit(row_size, row_size.saturating_mul(page - 1))
    }

    // =========================================================================
    // Reset
    // =========================================================================

    pub fn reset(&mut self, part: Part) -> &mut Self {
        self.parts.reset(part);
        self
    }

    pub fn reset_all(&mut self) -> &mut Self {
        self.parts = SelectParts::default();
        self
    }
}

/// `(condition)`, prefixed with the conjunction unless it is the first.
fn predicate(existing: &[String], condition: &str, conjunction: Conjunction) -> String {
    if existing.is_empty() {
        format!("({condition})")
    } else {
        format!("{conjunction} ({condition})")
    }
}
