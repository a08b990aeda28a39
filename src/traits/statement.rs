use async_trait::async_trait;

use crate::context::Context;
use crate::error::Result;
use crate::traits::RowCursor;
use crate::types::SqlValue;

/// A precompiled statement owned by a database resource.
///
/// Statements may be executed concurrently through `&self` when the
/// underlying driver allows it. Behavior after [`close`](Statement::close)
/// is up to the driver; the bundled drivers report
/// [`Error::StatementClosed`](crate::Error::StatementClosed).
#[async_trait]
pub trait Statement: Send + Sync {
    /// The SQL text this statement was prepared from.
    fn sql(&self) -> &str;

    /// Execute the statement with positional parameters.
    async fn query(&self, ctx: &Context, params: &[SqlValue]) -> Result<Box<dyn RowCursor>>;

    /// Release the statement.
    async fn close(&self) -> Result<()>;
}
