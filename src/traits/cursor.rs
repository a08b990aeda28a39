use async_trait::async_trait;

use crate::error::Result;
use crate::types::Row;

/// A live cursor over the rows of one query execution.
///
/// A cursor starts before the first row. Each successful [`advance`]
/// returning `true` positions it on the next row, readable through
/// [`current`]. Implementations must release their resources in [`close`]
/// and also when dropped without being closed.
///
/// [`advance`]: RowCursor::advance
/// [`current`]: RowCursor::current
/// [`close`]: RowCursor::close
#[async_trait]
pub trait RowCursor: Send {
    /// Column names of the result set.
    fn columns(&self) -> &[String];

    /// Moves to the next row. Returns `false` once the rows are exhausted.
    async fn advance(&mut self) -> Result<bool>;

    /// The row the cursor is positioned on.
    fn current(&self) -> Result<&Row>;

    /// Releases the cursor. Closing twice is not an error.
    async fn close(&mut self) -> Result<()>;
}
