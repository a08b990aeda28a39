//! Prepared statements bound to a mapper.

use tracing::debug;

use crate::context::Context;
use crate::error::Result;
use crate::mapper::RowMapper;
use crate::rows::{collect_rows, collect_single_row};
use crate::traits::{Queryable, Statement};
use crate::types::SqlValue;

/// A prepared statement whose rows are mapped with the mapper supplied at
/// preparation time.
///
/// All operations take `&self`, so one statement can serve concurrent callers
/// when the driver's statement allows it. The statement stays usable until
/// [`close`](PreparedStatement::close); afterwards executions fail with
/// whatever the driver reports.
pub struct PreparedStatement<M> {
    stmt: Box<dyn Statement>,
    mapper: M,
}

impl<M: RowMapper> PreparedStatement<M> {
    /// Binds an already prepared driver statement to `mapper`.
    pub fn new(stmt: Box<dyn Statement>, mapper: M) -> Self {
        Self { stmt, mapper }
    }

    pub fn mapper(&self) -> &M {
        &self.mapper
    }

    pub fn sql(&self) -> &str {
        self.stmt.sql()
    }

    /// Executes the statement and maps every row. Zero rows returns an empty `Vec`.
    pub async fn query_with_context(
        &self,
        ctx: &Context,
        params: &[SqlValue],
    ) -> Result<Vec<M::Entity>> {
        debug!(
            entity_type = self.mapper.entity_type(),
            sql = self.stmt.sql(),
            "statement query"
        );
        let opened = self.stmt.query(ctx, params).await;
        collect_rows(&self.mapper, opened).await
    }

    /// [`query_with_context`](Self::query_with_context) with a background context.
    pub async fn query(&self, params: &[SqlValue]) -> Result<Vec<M::Entity>> {
        self.query_with_context(&Context::background(), params)
            .await
    }

    /// Executes the statement and maps the first row.
    /// Zero rows fails with [`Error::NoRows`](crate::Error::NoRows).
    pub async fn query_row_with_context(
        &self,
        ctx: &Context,
        params: &[SqlValue],
    ) -> Result<M::Entity> {
        debug!(
            entity_type = self.mapper.entity_type(),
            sql = self.stmt.sql(),
            "statement query row"
        );
        let opened = self.stmt.query(ctx, params).await;
        collect_single_row(&self.mapper, opened).await
    }

    /// [`query_row_with_context`](Self::query_row_with_context) with a background context.
    pub async fn query_row(&self, params: &[SqlValue]) -> Result<M::Entity> {
        self.query_row_with_context(&Context::background(), params)
            .await
    }

    /// Releases the underlying statement.
    pub async fn close(&self) -> Result<()> {
        self.stmt.close().await
    }
}

/// Prepares `sql` on `db` for repeated execution with `mapper`.
///
/// The context applies to preparation only. Preparation failures are returned
/// as reported by the driver, without entity annotation.
pub async fn prepare_with_context<Q, M>(
    ctx: &Context,
    db: &Q,
    mapper: M,
    sql: &str,
) -> Result<PreparedStatement<M>>
where
    Q: Queryable + ?Sized,
    M: RowMapper,
{
    debug!(entity_type = mapper.entity_type(), sql, "prepare");
    let stmt = db.prepare(ctx, sql).await?;
    Ok(PreparedStatement::new(stmt, mapper))
}

/// [`prepare_with_context`] with a background context.
pub async fn prepare<Q, M>(db: &Q, mapper: M, sql: &str) -> Result<PreparedStatement<M>>
where
    Q: Queryable + ?Sized,
    M: RowMapper,
{
    prepare_with_context(&Context::background(), db, mapper, sql).await
}
