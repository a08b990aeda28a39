//! Tagging failures with the entity type they were produced for.
//!
//! Every failure leaving the query and statement entry points is wrapped once
//! in [`Error::Annotated`]. The underlying error stays reachable through
//! [`std::error::Error::source`] and [`Error::root`].

use std::error::Error as StdError;

use crate::error::{Error, Result};
use crate::mapper::RowMapper;

/// Wraps `err` with the entity type name of `mapper`.
pub fn annotate<M: RowMapper + ?Sized>(err: Error, mapper: &M) -> Error {
    Error::Annotated {
        entity_type: mapper.entity_type().to_string(),
        source: Box::new(err),
    }
}

/// Annotates the error of a failed result; successful results pass through.
pub fn annotate_result<T, M: RowMapper + ?Sized>(result: Result<T>, mapper: &M) -> Result<T> {
    result.map_err(|err| annotate(err, mapper))
}

/// Finds the entity type attached to `err` or to any error in its source
/// chain.
///
/// ```
/// use rowmap::{annotate, entity_type_of, Error, Named, Row};
///
/// let mapper = Named::new("User", |row: &Row| row.get::<i64, _>("id"));
/// let err = annotate(Error::NoRows, &mapper);
/// assert_eq!(entity_type_of(&err), Some("User"));
/// assert_eq!(entity_type_of(&Error::NoRows), None);
/// ```
pub fn entity_type_of<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a str> {
    let mut current = Some(err);
    while let Some(err) = current {
        if let Some(Error::Annotated { entity_type, .. }) = err.downcast_ref::<Error>() {
            return Some(entity_type);
        }
        current = err.source();
    }
    None
}
