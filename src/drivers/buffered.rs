use std::sync::Arc;
use std::vec;

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::traits::RowCursor;
use crate::types::{RawQueryResult, Row};

type ReleaseHook = Box<dyn FnOnce() + Send>;

/// A cursor over rows already fetched into memory.
///
/// An optional release hook runs exactly once, on [`close`](RowCursor::close)
/// or on drop, whichever comes first.
pub struct BufferedCursor {
    columns: Arc<[String]>,
    rows: vec::IntoIter<Row>,
    current: Option<Row>,
    closed: bool,
    on_release: Option<ReleaseHook>,
}

impl BufferedCursor {
    pub fn new(result: RawQueryResult) -> Self {
        let (columns, rows) = result.into_rows();
        Self {
            columns,
            rows: rows.into_iter(),
            current: None,
            closed: false,
            on_release: None,
        }
    }

    /// Registers a hook run when the cursor is released.
    pub fn on_release(mut self, hook: impl FnOnce() + Send + 'static) -> Self {
        self.on_release = Some(Box::new(hook));
        self
    }

    fn release(&mut self) {
        self.closed = true;
        self.current = None;
        if let Some(hook) = self.on_release.take() {
            hook();
        }
    }
}

#[async_trait]
impl RowCursor for BufferedCursor {
    fn columns(&self) -> &[String] {
        &self.columns
    }

    async fn advance(&mut self) -> Result<bool> {
        if self.closed {
            return Err(Error::CursorClosed);
        }
        self.current = self.rows.next();
        Ok(self.current.is_some())
    }

    fn current(&self) -> Result<&Row> {
        if self.closed {
            return Err(Error::CursorClosed);
        }
        self.current.as_ref().ok_or(Error::NoCurrentRow)
    }

    async fn close(&mut self) -> Result<()> {
        self.release();
        Ok(())
    }
}

impl Drop for BufferedCursor {
    fn drop(&mut self) {
        self.release();
    }
}
