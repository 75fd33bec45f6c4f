use super::{
    Column, ColumnExpr, GroupTerm, OrderExpr, OrderTerm, Select, TableSource, UnionTarget,
    reject,
};
use crate::adapter::UNBOUNDED_LIMIT;
use crate::error::{QuarryError, Result};
use crate::expr::Expr;
use crate::ident::{Identifier, Segment};

impl Select {
    /// Renders the statement.
    ///
    /// Clauses render in SQL order regardless of the order they were added,
    /// and assembling never changes the statement, so repeated calls return
    /// identical text.
    pub fn assemble(&self) -> Result<String> {
        let mut sql = self.render_columns()?;
        self.render_union(&mut sql)?;
        let has_from = self.render_from(&mut sql)?;
        self.render_where(&mut sql, has_from)?;
        self.render_group(&mut sql, has_from)?;
        self.render_having(&mut sql, has_from)?;
        self.render_order(&mut sql)?;
        let mut sql = self.render_limit(sql)?;
        self.render_for_update(&mut sql)?;

        crate::quarry_trace_assemble!(&sql, self.adapter.dialect());
        Ok(sql)
    }

    fn render_columns(&self) -> Result<String> {
        let parts = &self.parts;
        if parts.columns.is_empty() {
            if parts.union.is_empty() {
                return reject("assemble", QuarryError::EmptySelect);
            }
            return Ok(String::new());
        }

        let mut sql = String::from("SELECT");
        if parts.distinct {
            sql.push_str(" DISTINCT");
        }
        for option in &parts.pre_columns_options {
            sql.push(' ');
            sql.push_str(option);
        }
        let columns = parts
            .columns
            .iter()
            .map(|column| self.render_column(column))
            .collect::<Result<Vec<_>>>()?;
        sql.push(' ');
        sql.push_str(&columns.join(", "));
        Ok(sql)
    }

    fn render_column(&self, column: &Column) -> Result<String> {
        let alias = column.alias.as_deref();
        let ident = match (&column.expr, &column.correlation) {
            (ColumnExpr::Raw(expr), _) => Identifier::Expr(expr.clone()),
            (ColumnExpr::Wildcard, None) => return Ok("*".to_string()),
            (ColumnExpr::Wildcard, Some(correlation)) => {
                qualified(correlation, Segment::Raw(Expr::new("*")))
            }
            (ColumnExpr::Name(name), None) => {
                Identifier::from_segments([Segment::Name(name.clone())])
            }
            (ColumnExpr::Name(name), Some(correlation)) => {
                qualified(correlation, Segment::Name(name.clone()))
            }
        };
        self.adapter.quote_identifier_as(&ident, alias, true)
    }

    fn render_union(&self, sql: &mut String) -> Result<()> {
        for (i, part) in self.parts.union.iter().enumerate() {
            if i > 0 {
                sql.push(' ');
                sql.push_str(part.kind.as_sql());
                sql.push(' ');
            }
            match &part.target {
                UnionTarget::Select(select) => sql.push_str(&select.assemble()?),
                UnionTarget::Sql(text) => sql.push_str(text),
            }
        }
        Ok(())
    }

    /// Writes the FROM clause and reports whether one was written.
    fn render_from(&self, sql: &mut String) -> Result<bool> {
        let from = &self.parts.from;
        if from.is_empty() {
            if self.parts.union.is_empty()
                && let Some(dummy) = self.adapter.dummy_table()
            {
                sql.push_str(" FROM ");
                sql.push_str(dummy);
                return Ok(true);
            }
            return Ok(false);
        }

        let mut tables = Vec::with_capacity(from.len());
        for (i, (correlation, entry)) in from.iter().enumerate() {
            let mut table = String::new();
            if i > 0 {
                table.push(' ');
                table.push_str(entry.join_type.as_sql());
                table.push(' ');
            }
            if let Some(schema) = &entry.schema {
                table.push_str(&self.adapter.quote_identifier(schema.as_str(), true)?);
                table.push('.');
            }
            table.push_str(&self.render_table(&entry.table, correlation)?);
            if i > 0
                && let Some(condition) = &entry.condition
            {
                table.push_str(" ON ");
                table.push_str(condition);
            }
            tables.push(table);
        }
        sql.push_str(" FROM ");
        sql.push_str(&tables.join("\n"));
        Ok(true)
    }

    fn render_table(&self, source: &TableSource, correlation: &str) -> Result<String> {
        let table = match source {
            TableSource::Name(name) => {
                return self
                    .adapter
                    .quote_table_as(name.as_str(), Some(correlation), true);
            }
            TableSource::Expr(expr) => expr.as_str().to_string(),
            TableSource::Select(select) => format!("({})", select.assemble()?),
        };
        Ok(format!(
            "{table}{}{}",
            self.adapter.dialect().table_alias_keyword(),
            self.adapter.quote_name(correlation, true)
        ))
    }

    fn render_where(&self, sql: &mut String, has_from: bool) -> Result<()> {
        let parts = &self.parts;
        let mut predicate = parts.where_clauses.join(" ");
        for group in parts.condition_sets.values().filter_map(|set| set.render()) {
            if !predicate.is_empty() {
                predicate.push_str(" AND ");
            }
            predicate.push_str(&group);
        }
        if predicate.is_empty() {
            return Ok(());
        }
        if !has_from {
            return reject("assemble", QuarryError::ClauseWithoutFrom("WHERE"));
        }
        sql.push_str(" WHERE ");
        sql.push_str(&predicate);
        Ok(())
    }

    fn render_group(&self, sql: &mut String, has_from: bool) -> Result<()> {
        let parts = &self.parts;
        if parts.group.is_empty() {
            return Ok(());
        }
        if !has_from {
            return reject("assemble", QuarryError::ClauseWithoutFrom("GROUP BY"));
        }
        let terms = parts
            .group
            .iter()
            .map(|term| match term {
                GroupTerm::Name(name) => self.adapter.quote_identifier(name.as_str(), true),
                GroupTerm::Raw(expr) => Ok(expr.as_str().to_string()),
            })
            .collect::<Result<Vec<_>>>()?;
        sql.push_str(" GROUP BY ");
        sql.push_str(&terms.join(",\n\t"));
        Ok(())
    }

    fn render_having(&self, sql: &mut String, has_from: bool) -> Result<()> {
        let parts = &self.parts;
        if parts.having.is_empty() {
            return Ok(());
        }
        if !has_from {
            return reject("assemble", QuarryError::ClauseWithoutFrom("HAVING"));
        }
        sql.push_str(" HAVING ");
        sql.push_str(&parts.having.join(" "));
        Ok(())
    }

    fn render_order(&self, sql: &mut String) -> Result<()> {
        if self.parts.order.is_empty() {
            return Ok(());
        }
        let terms = self
            .parts
            .order
            .iter()
            .map(|term| self.render_order_term(term))
            .collect::<Result<Vec<_>>>()?;
        sql.push_str(" ORDER BY ");
        sql.push_str(&terms.join(", "));
        Ok(())
    }

    fn render_order_term(&self, term: &OrderTerm) -> Result<String> {
        let expr = match &term.expr {
            OrderExpr::Name(name) => self.adapter.quote_identifier(name.as_str(), true)?,
            OrderExpr::Position(position) => position.to_string(),
            OrderExpr::Raw(expr) => expr.as_str().to_string(),
        };
        Ok(match term.direction {
            Some(direction) => format!("{expr} {direction}"),
            None => expr,
        })
    }

    fn render_limit(&self, sql: String) -> Result<String> {
        let (count, offset) = match (self.parts.limit_count, self.parts.limit_offset) {
            (Some(count), offset) => (count, offset.unwrap_or(0)),
            (None, Some(offset)) if offset > 0 => (UNBOUNDED_LIMIT, offset),
            _ => return Ok(sql),
        };
        match self.adapter.limit(&sql, count, offset) {
            Ok(sql) => Ok(sql),
            Err(error) => reject("assemble", error),
        }
    }

    fn render_for_update(&self, sql: &mut String) -> Result<()> {
        if !self.parts.for_update {
            return Ok(());
        }
        let dialect = self.adapter.dialect();
        if !dialect.supports_for_update() {
            return reject(
                "assemble",
                QuarryError::Unsupported {
                    dialect,
                    feature: "FOR UPDATE",
                },
            );
        }
        sql.push_str(" FOR UPDATE");
        Ok(())
    }
}

/// `correlation.last`, with a dotted correlation split into its parts.
fn qualified(correlation: &str, last: Segment) -> Identifier {
    let segments = correlation
        .split('.')
        .map(|part| Segment::Name(part.to_string()))
        .chain(std::iter::once(last));
    Identifier::from_segments(segments)
}
