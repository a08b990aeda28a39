use crate::error::{Error, Result};

/// Represents a SQL value in a driver-agnostic way.
/// Used both for bound parameters and for the values of result rows.
/// Drivers are responsible for converting these to and from their native types.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Text(String),
    Int32(i32),
    Int64(i64),
    Float64(f64),
    Bool(bool),
    Bytes(Vec<u8>),
    /// A non-NULL value whose database type has no representation here.
    Unsupported { type_name: String },
}

impl SqlValue {
    /// Short name of the variant, used in conversion errors.
    pub fn type_name(&self) -> &str {
        match self {
            SqlValue::Null => "NULL",
            SqlValue::Text(_) => "text",
            SqlValue::Int32(_) => "int32",
            SqlValue::Int64(_) => "int64",
            SqlValue::Float64(_) => "float64",
            SqlValue::Bool(_) => "bool",
            SqlValue::Bytes(_) => "bytes",
            SqlValue::Unsupported { type_name } => type_name,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl From<i16> for SqlValue {
    fn from(value: i16) -> Self {
        SqlValue::Int32(value.into())
    }
}

impl From<i32> for SqlValue {
    fn from(value: i32) -> Self {
        SqlValue::Int32(value)
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Int64(value)
    }
}

impl From<f64> for SqlValue {
    fn from(value: f64) -> Self {
        SqlValue::Float64(value)
    }
}

impl From<bool> for SqlValue {
    fn from(value: bool) -> Self {
        SqlValue::Bool(value)
    }
}

impl From<Vec<u8>> for SqlValue {
    fn from(value: Vec<u8>) -> Self {
        SqlValue::Bytes(value)
    }
}

impl From<&[u8]> for SqlValue {
    fn from(value: &[u8]) -> Self {
        SqlValue::Bytes(value.to_vec())
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => SqlValue::Null,
        }
    }
}

/// Conversion from a row value into a Rust type.
///
/// Numeric and boolean targets also accept text values that parse cleanly,
/// so a text column holding `"42"` can be read as an `i64`.
pub trait FromSqlValue: Sized {
    /// Rust-side name reported when the conversion fails.
    const EXPECTED: &'static str;

    /// Returns `None` when the value cannot be represented as `Self`.
    fn from_sql_value(value: &SqlValue) -> Option<Self>;

    /// Converts `value`, reporting `column` on failure.
    fn convert(column: &str, value: &SqlValue) -> Result<Self> {
        Self::from_sql_value(value).ok_or_else(|| Error::InvalidConversion {
            column: column.to_string(),
            expected: Self::EXPECTED,
            found: value.type_name().to_string(),
        })
    }
}

impl FromSqlValue for i64 {
    const EXPECTED: &'static str = "i64";

    fn from_sql_value(value: &SqlValue) -> Option<Self> {
        match value {
            SqlValue::Int32(i) => Some((*i).into()),
            SqlValue::Int64(i) => Some(*i),
            SqlValue::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl FromSqlValue for i32 {
    const EXPECTED: &'static str = "i32";

    fn from_sql_value(value: &SqlValue) -> Option<Self> {
        match value {
            SqlValue::Int32(i) => Some(*i),
            SqlValue::Int64(i) => i32::try_from(*i).ok(),
            SqlValue::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl FromSqlValue for i16 {
    const EXPECTED: &'static str = "i16";

    fn from_sql_value(value: &SqlValue) -> Option<Self> {
        match value {
            SqlValue::Int32(i) => i16::try_from(*i).ok(),
            SqlValue::Int64(i) => i16::try_from(*i).ok(),
            SqlValue::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl FromSqlValue for f64 {
    const EXPECTED: &'static str = "f64";

    fn from_sql_value(value: &SqlValue) -> Option<Self> {
        match value {
            SqlValue::Float64(f) => Some(*f),
            SqlValue::Int32(i) => Some((*i).into()),
            SqlValue::Int64(i) => {
                // exact values only
                let f = *i as f64;
                (f as i128 == i128::from(*i)).then_some(f)
            }
            SqlValue::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl FromSqlValue for bool {
    const EXPECTED: &'static str = "bool";

    fn from_sql_value(value: &SqlValue) -> Option<Self> {
        match value {
            SqlValue::Bool(b) => Some(*b),
            SqlValue::Int32(i) => Some(*i != 0),
            SqlValue::Int64(i) => Some(*i != 0),
            SqlValue::Text(s) => match s.trim() {
                "t" | "true" | "TRUE" | "1" => Some(true),
                "f" | "false" | "FALSE" | "0" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }
}

impl FromSqlValue for String {
    const EXPECTED: &'static str = "String";

    fn from_sql_value(value: &SqlValue) -> Option<Self> {
        match value {
            SqlValue::Text(s) => Some(s.clone()),
            SqlValue::Int32(i) => Some(i.to_string()),
            SqlValue::Int64(i) => Some(i.to_string()),
            SqlValue::Float64(f) => Some(f.to_string()),
            SqlValue::Bool(b) => Some(b.to_string()),
            SqlValue::Bytes(b) => String::from_utf8(b.clone()).ok(),
            SqlValue::Null | SqlValue::Unsupported { .. } => None,
        }
    }
}

impl FromSqlValue for Vec<u8> {
    const EXPECTED: &'static str = "Vec<u8>";

    fn from_sql_value(value: &SqlValue) -> Option<Self> {
        match value {
            SqlValue::Bytes(b) => Some(b.clone()),
            SqlValue::Text(s) => Some(s.as_bytes().to_vec()),
            _ => None,
        }
    }
}

impl FromSqlValue for SqlValue {
    const EXPECTED: &'static str = "SqlValue";

    fn from_sql_value(value: &SqlValue) -> Option<Self> {
        Some(value.clone())
    }
}

impl<T: FromSqlValue> FromSqlValue for Option<T> {
    const EXPECTED: &'static str = T::EXPECTED;

    fn from_sql_value(value: &SqlValue) -> Option<Self> {
        match value {
            SqlValue::Null => Some(None),
            other => T::from_sql_value(other).map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(SqlValue::Int32(7), Some(7))]
    #[case(SqlValue::Int64(7), Some(7))]
    #[case(SqlValue::Text(" 7 ".into()), Some(7))]
    #[case(SqlValue::Text("seven".into()), None)]
    #[case(SqlValue::Null, None)]
    fn test_i64_conversion(#[case] value: SqlValue, #[case] expected: Option<i64>) {
        assert_eq!(i64::from_sql_value(&value), expected);
    }

    #[rstest]
    #[case(SqlValue::Int64(1 << 53), Some(9_007_199_254_740_992.0))]
    #[case(SqlValue::Int64(-(1 << 53)), Some(-9_007_199_254_740_992.0))]
    #[case(SqlValue::Int64((1 << 53) + 1), None)]
    #[case(SqlValue::Int64(i64::MAX), None)]
    #[case(SqlValue::Int32(i32::MIN), Some(-2_147_483_648.0))]
    fn test_f64_from_integer_is_exact(#[case] value: SqlValue, #[case] expected: Option<f64>) {
        assert_eq!(f64::from_sql_value(&value), expected);
    }

    #[test]
    fn test_unsupported_value_is_never_converted() {
        let value = SqlValue::Unsupported {
            type_name: "numeric".to_string(),
        };
        assert_eq!(String::from_sql_value(&value), None);
        assert_eq!(Option::<String>::from_sql_value(&value), None);

        match Option::<i64>::convert("price", &value).unwrap_err() {
            Error::InvalidConversion { column, found, .. } => {
                assert_eq!(column, "price");
                assert_eq!(found, "numeric");
            }
            _ => panic!("Expected InvalidConversion error"),
        }
    }

    #[test]
    fn test_narrowing_rejects_overflow() {
        assert_eq!(i32::from_sql_value(&SqlValue::Int64(i64::MAX)), None);
        assert_eq!(i16::from_sql_value(&SqlValue::Int32(70_000)), None);
    }

    #[test]
    fn test_option_maps_null_to_none() {
        assert_eq!(
            Option::<String>::from_sql_value(&SqlValue::Null),
            Some(None)
        );
        assert_eq!(
            Option::<String>::from_sql_value(&SqlValue::from("a")),
            Some(Some("a".to_string()))
        );
    }

    #[test]
    fn test_convert_reports_column_and_types() {
        let err = bool::convert("active", &SqlValue::Bytes(vec![1])).unwrap_err();
        match err {
            Error::InvalidConversion {
                column,
                expected,
                found,
            } => {
                assert_eq!(column, "active");
                assert_eq!(expected, "bool");
                assert_eq!(found, "bytes");
            }
            _ => panic!("Expected InvalidConversion error"),
        }
    }

    #[test]
    fn test_from_option() {
        assert_eq!(SqlValue::from(None::<i32>), SqlValue::Null);
        assert_eq!(SqlValue::from(Some(3i64)), SqlValue::Int64(3));
    }
}
