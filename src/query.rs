//! Ad hoc query entry points.

use tracing::debug;

use crate::context::Context;
use crate::error::Result;
use crate::mapper::RowMapper;
use crate::rows::{collect_rows, collect_single_row};
use crate::traits::Queryable;
use crate::types::SqlValue;

/// Executes a query, typically a SELECT, and maps every row with `mapper`.
///
/// The parameters fill the query's positional placeholders. Zero matching rows
/// returns an empty `Vec`. Failures are annotated with the mapper's entity type.
///
/// # Example
/// ```ignore
/// let users = rowmap::query_with_context(
///     &ctx,
///     &client,
///     &user_mapper,
///     "SELECT id, name FROM users WHERE id IN ($1, $2) ORDER BY id DESC",
///     &[1i64.into(), 2i64.into()],
/// )
/// .await?;
/// ```
pub async fn query_with_context<Q, M>(
    ctx: &Context,
    db: &Q,
    mapper: &M,
    sql: &str,
    params: &[SqlValue],
) -> Result<Vec<M::Entity>>
where
    Q: Queryable + ?Sized,
    M: RowMapper + ?Sized,
{
    debug!(entity_type = mapper.entity_type(), sql, "query");
    let opened = db.query(ctx, sql, params).await;
    collect_rows(mapper, opened).await
}

/// [`query_with_context`] with a background context.
pub async fn query<Q, M>(
    db: &Q,
    mapper: &M,
    sql: &str,
    params: &[SqlValue],
) -> Result<Vec<M::Entity>>
where
    Q: Queryable + ?Sized,
    M: RowMapper + ?Sized,
{
    query_with_context(&Context::background(), db, mapper, sql, params).await
}

/// Executes a query expected to return at most one row and maps it.
///
/// No matching rows fails with [`Error::NoRows`](crate::Error::NoRows)
/// (check with [`Error::is_no_rows`](crate::Error::is_no_rows)). When several
/// rows match, the first one is returned.
pub async fn query_row_with_context<Q, M>(
    ctx: &Context,
    db: &Q,
    mapper: &M,
    sql: &str,
    params: &[SqlValue],
) -> Result<M::Entity>
where
    Q: Queryable + ?Sized,
    M: RowMapper + ?Sized,
{
    debug!(entity_type = mapper.entity_type(), sql, "query row");
    let opened = db.query(ctx, sql, params).await;
    collect_single_row(mapper, opened).await
}

/// [`query_row_with_context`] with a background context.
pub async fn query_row<Q, M>(
    db: &Q,
    mapper: &M,
    sql: &str,
    params: &[SqlValue],
) -> Result<M::Entity>
where
    Q: Queryable + ?Sized,
    M: RowMapper + ?Sized,
{
    query_row_with_context(&Context::background(), db, mapper, sql, params).await
}
