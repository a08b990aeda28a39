use std::sync::Arc;

use async_trait::async_trait;

use crate::context::Context;
use crate::error::Result;
use crate::traits::{RowCursor, Statement};
use crate::types::SqlValue;

/// A database resource that can run queries and prepare statements.
///
/// Implemented by drivers, by [`RowMapClient`](crate::RowMapClient), and by
/// references and smart pointers to any implementation, so the same entry
/// points accept a direct connection or a shared handle.
#[async_trait]
pub trait Queryable: Send + Sync {
    /// Execute a SQL query with positional parameters and return a cursor
    /// over its rows. The context must be honored while acquiring the cursor.
    async fn query(
        &self,
        ctx: &Context,
        sql: &str,
        params: &[SqlValue],
    ) -> Result<Box<dyn RowCursor>>;

    /// Precompile a SQL statement for repeated execution.
    async fn prepare(&self, ctx: &Context, sql: &str) -> Result<Box<dyn Statement>>;
}

#[async_trait]
impl<T: Queryable + ?Sized> Queryable for &T {
    async fn query(
        &self,
        ctx: &Context,
        sql: &str,
        params: &[SqlValue],
    ) -> Result<Box<dyn RowCursor>> {
        (**self).query(ctx, sql, params).await
    }

    async fn prepare(&self, ctx: &Context, sql: &str) -> Result<Box<dyn Statement>> {
        (**self).prepare(ctx, sql).await
    }
}

#[async_trait]
impl<T: Queryable + ?Sized> Queryable for Box<T> {
    async fn query(
        &self,
        ctx: &Context,
        sql: &str,
        params: &[SqlValue],
    ) -> Result<Box<dyn RowCursor>> {
        (**self).query(ctx, sql, params).await
    }

    async fn prepare(&self, ctx: &Context, sql: &str) -> Result<Box<dyn Statement>> {
        (**self).prepare(ctx, sql).await
    }
}

#[async_trait]
impl<T: Queryable + ?Sized> Queryable for Arc<T> {
    async fn query(
        &self,
        ctx: &Context,
        sql: &str,
        params: &[SqlValue],
    ) -> Result<Box<dyn RowCursor>> {
        (**self).query(ctx, sql, params).await
    }

    async fn prepare(&self, ctx: &Context, sql: &str) -> Result<Box<dyn Statement>> {
        (**self).prepare(ctx, sql).await
    }
}
