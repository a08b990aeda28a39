use std::sync::Arc;

use crate::error::{Error, Result};
use crate::types::{FromSqlValue, SqlValue};

/// Driver-agnostic raw result from a database query.
#[derive(Debug, Clone)]
pub struct RawQueryResult {
    /// Column names in order
    pub columns: Vec<String>,
    /// Rows, where each row is a vector of values in column order
    pub rows: Vec<Vec<SqlValue>>,
}

impl RawQueryResult {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<SqlValue>>) -> Self {
        Self { columns, rows }
    }

    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Splits the result into rows sharing one column list.
    pub fn into_rows(self) -> (Arc<[String]>, Vec<Row>) {
        let columns: Arc<[String]> = self.columns.into();
        let rows = self
            .rows
            .into_iter()
            .map(|values| Row::new(Arc::clone(&columns), values))
            .collect();
        (columns, rows)
    }
}

/// Something that can select a column of a [`Row`]: a position or a name.
pub trait ColumnIndex {
    /// Resolves to a position within `columns`.
    fn index(&self, columns: &[String]) -> Result<usize>;
}

impl ColumnIndex for usize {
    fn index(&self, columns: &[String]) -> Result<usize> {
        if *self < columns.len() {
            Ok(*self)
        } else {
            Err(Error::ColumnIndexOutOfRange {
                index: *self,
                len: columns.len(),
            })
        }
    }
}

impl ColumnIndex for &str {
    fn index(&self, columns: &[String]) -> Result<usize> {
        columns
            .iter()
            .position(|c| c.eq_ignore_ascii_case(self))
            .ok_or_else(|| Error::ColumnNotFound(self.to_string()))
    }
}

/// A single row of a result set.
#[derive(Debug, Clone)]
pub struct Row {
    columns: Arc<[String]>,
    values: Vec<SqlValue>,
}

impl Row {
    /// Creates a new Row from column names and values.
    pub fn new(columns: Arc<[String]>, values: Vec<SqlValue>) -> Self {
        Self { columns, values }
    }

    /// Gets a typed value by column position or name.
    ///
    /// # Example
    /// ```
    /// use std::sync::Arc;
    /// use rowmap::{Row, SqlValue};
    ///
    /// let row = Row::new(
    ///     Arc::from(vec!["id".to_string(), "name".to_string()]),
    ///     vec![SqlValue::Int64(1), SqlValue::from("Alice")],
    /// );
    /// let id: i64 = row.get(0usize).unwrap();
    /// let name: String = row.get("name").unwrap();
    /// assert_eq!((id, name.as_str()), (1, "Alice"));
    /// ```
    pub fn get<T: FromSqlValue, I: ColumnIndex>(&self, index: I) -> Result<T> {
        let i = index.index(&self.columns)?;
        let value = self.values.get(i).unwrap_or(&SqlValue::Null);
        T::convert(&self.columns[i], value)
    }

    /// Gets the raw value by column position or name.
    pub fn value<I: ColumnIndex>(&self, index: I) -> Result<&SqlValue> {
        let i = index.index(&self.columns)?;
        self.values
            .get(i)
            .ok_or(Error::ColumnIndexOutOfRange {
                index: i,
                len: self.values.len(),
            })
    }

    /// Returns all column names in this row.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns the values of this row in column order.
    pub fn values(&self) -> &[SqlValue] {
        &self.values
    }

    /// Returns the number of columns in this row.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if this row has no columns.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
