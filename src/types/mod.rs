mod row;
mod sql_value;

pub use row::{ColumnIndex, RawQueryResult, Row};
pub use sql_value::{FromSqlValue, SqlValue};
