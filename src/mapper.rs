use std::any::type_name;

use crate::error::Result;
use crate::types::Row;

/// Converts one result row into an entity.
///
/// Any `Fn(&Row) -> Result<E>` is a mapper, so plain functions and closures
/// can be passed directly:
///
/// ```
/// use rowmap::{Row, RowMapper};
///
/// struct User {
///     id: i64,
///     name: String,
/// }
///
/// fn user(row: &Row) -> rowmap::Result<User> {
///     Ok(User {
///         id: row.get("id")?,
///         name: row.get("name")?,
///     })
/// }
///
/// assert!(user.entity_type().ends_with("User"));
/// ```
pub trait RowMapper: Send + Sync {
    /// The value produced for each row.
    type Entity: Send;

    /// Map the row the cursor is positioned on.
    fn map_row(&self, row: &Row) -> Result<Self::Entity>;

    /// Name attached to errors raised while producing this mapper's entities.
    fn entity_type(&self) -> &str {
        type_name::<Self::Entity>()
    }
}

impl<F, E> RowMapper for F
where
    F: Fn(&Row) -> Result<E> + Send + Sync,
    E: Send,
{
    type Entity = E;

    fn map_row(&self, row: &Row) -> Result<E> {
        self(row)
    }
}

/// A mapper carrying an explicit entity type label.
///
/// Useful when the compiler-generated type name is unstable or too noisy
/// for diagnostics.
#[derive(Debug, Clone)]
pub struct Named<M> {
    name: String,
    inner: M,
}

impl<M: RowMapper> Named<M> {
    pub fn new(name: impl Into<String>, inner: M) -> Self {
        Self {
            name: name.into(),
            inner,
        }
    }

    pub fn into_inner(self) -> M {
        self.inner
    }
}

impl<M: RowMapper> RowMapper for Named<M> {
    type Entity = M::Entity;

    fn map_row(&self, row: &Row) -> Result<Self::Entity> {
        self.inner.map_row(row)
    }

    fn entity_type(&self) -> &str {
        &self.name
    }
}
