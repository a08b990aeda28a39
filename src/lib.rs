//! rowmap - Map database rows to typed entities
//!
//! Supply a function that turns one [`Row`] into a value; rowmap runs the
//! query, walks the cursor, closes it, and tags any failure with the entity
//! type it was producing.
//!
//! # Example
//! ```ignore
//! use rowmap::{Row, RowMapClient};
//!
//! struct User {
//!     id: i64,
//!     name: String,
//! }
//!
//! fn user(row: &Row) -> rowmap::Result<User> {
//!     Ok(User {
//!         id: row.get("id")?,
//!         name: row.get("name")?,
//!     })
//! }
//!
//! let client = RowMapClient::connect("postgres://localhost/mydb").await?;
//!
//! // Every matching row
//! let users = rowmap::query(
//!     &client,
//!     &user,
//!     "SELECT id, name FROM users WHERE id IN ($1, $2) ORDER BY id DESC",
//!     &[1i64.into(), 2i64.into()],
//! )
//! .await?;
//!
//! // Exactly the first row, or an error for which `is_no_rows()` holds
//! let john = rowmap::query_row(&client, &user, "SELECT id, name FROM users WHERE name = $1", &["John".into()]).await?;
//!
//! // Prepared once, executed many times
//! let by_id = rowmap::prepare(&client, user, "SELECT id, name FROM users WHERE id = $1").await?;
//! let first = by_id.query_row(&[1i64.into()]).await?;
//! by_id.close().await?;
//! ```

pub mod annotate;
pub mod context;
pub mod drivers;
pub mod error;
pub mod mapper;
pub mod query;
pub mod rows;
pub mod statement;
pub mod traits;
pub mod types;

mod client;

// Re-export main types for convenient access
pub use annotate::{annotate, annotate_result, entity_type_of};
pub use client::RowMapClient;
pub use context::Context;
pub use error::{Error, Result};
pub use mapper::{Named, RowMapper};
pub use query::{query, query_row, query_row_with_context, query_with_context};
pub use statement::{prepare, prepare_with_context, PreparedStatement};
pub use traits::{Queryable, RowCursor, Statement};
pub use types::{ColumnIndex, FromSqlValue, RawQueryResult, Row, SqlValue};
