//! Draining cursors through a mapper.

use tracing::{trace, warn};

use crate::annotate::{annotate, annotate_result};
use crate::error::{Error, Result};
use crate::mapper::RowMapper;
use crate::traits::RowCursor;

/// Maps every row of the cursor produced by `opened`.
///
/// A failed `opened` is annotated and returned without touching any cursor.
/// Otherwise the cursor is always closed before returning. The first failure
/// while advancing or mapping stops iteration and discards collected entities.
/// Zero rows yields an empty `Vec`.
pub async fn collect_rows<M>(
    mapper: &M,
    opened: Result<Box<dyn RowCursor>>,
) -> Result<Vec<M::Entity>>
where
    M: RowMapper + ?Sized,
{
    let mut cursor = annotate_result(opened, mapper)?;

    let result = drain(mapper, cursor.as_mut()).await;

    if let Err(err) = cursor.close().await {
        warn!(
            entity_type = mapper.entity_type(),
            error = %err,
            "failed to close cursor"
        );
    }

    let entities = annotate_result(result, mapper)?;
    trace!(
        entity_type = mapper.entity_type(),
        rows = entities.len(),
        "mapped result set"
    );
    Ok(entities)
}

/// Like [`collect_rows`], but yields only the first entity.
///
/// Zero rows is reported as an annotated [`Error::NoRows`]. Rows after the
/// first are mapped and discarded.
pub async fn collect_single_row<M>(
    mapper: &M,
    opened: Result<Box<dyn RowCursor>>,
) -> Result<M::Entity>
where
    M: RowMapper + ?Sized,
{
    let entities = collect_rows(mapper, opened).await?;
    entities
        .into_iter()
        .next()
        .ok_or_else(|| annotate(Error::NoRows, mapper))
}

async fn drain<M>(mapper: &M, cursor: &mut dyn RowCursor) -> Result<Vec<M::Entity>>
where
    M: RowMapper + ?Sized,
{
    let mut entities = Vec::new();
    while cursor.advance().await? {
        entities.push(mapper.map_row(cursor.current()?)?);
    }
    Ok(entities)
}
