use thiserror::Error;

/// Error type for rowmap operations
#[derive(Debug, Error)]
pub enum Error {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Prepare failed: {0}")]
    PrepareFailed(String),

    #[error("Context cancelled")]
    Cancelled,

    #[error("Context deadline exceeded")]
    DeadlineExceeded,

    #[error("Statement is closed")]
    StatementClosed,

    #[error("Cursor is closed")]
    CursorClosed,

    #[error("Cursor is not positioned on a row")]
    NoCurrentRow,

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Column index {index} out of range for row of {len} column(s)")]
    ColumnIndexOutOfRange { index: usize, len: usize },

    #[error("Cannot convert column {column} from {found} to {expected}")]
    InvalidConversion {
        column: String,
        expected: &'static str,
        found: String,
    },

    #[error("Mapping failed: {0}")]
    Mapping(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("No rows in result set")]
    NoRows,

    #[error("<rowmap> {entity_type}: {source}")]
    Annotated {
        entity_type: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Wraps a caller-defined failure raised inside a mapper.
    pub fn mapping(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Error::Mapping(Box::new(err))
    }

    /// Returns the underlying failure, looking through any annotation.
    pub fn root(&self) -> &Error {
        match self {
            Error::Annotated { source, .. } => source.root(),
            other => other,
        }
    }

    /// Consumes the error and returns the underlying failure.
    pub fn into_root(self) -> Error {
        match self {
            Error::Annotated { source, .. } => source.into_root(),
            other => other,
        }
    }

    /// Returns the entity type name attached by annotation, if any.
    pub fn entity_type(&self) -> Option<&str> {
        match self {
            Error::Annotated { entity_type, .. } => Some(entity_type),
            _ => None,
        }
    }

    /// True when a single-row query matched no rows.
    pub fn is_no_rows(&self) -> bool {
        matches!(self.root(), Error::NoRows)
    }

    /// True when a mapper failed to convert a row.
    pub fn is_mapping(&self) -> bool {
        matches!(
            self.root(),
            Error::ColumnNotFound(_)
                | Error::ColumnIndexOutOfRange { .. }
                | Error::InvalidConversion { .. }
                | Error::Mapping(_)
        )
    }

    /// True when the underlying resource failed to produce or drive a cursor.
    pub fn is_resource(&self) -> bool {
        matches!(
            self.root(),
            Error::ConnectionFailed(_)
                | Error::QueryFailed(_)
                | Error::PrepareFailed(_)
                | Error::Cancelled
                | Error::DeadlineExceeded
                | Error::StatementClosed
                | Error::CursorClosed
                | Error::NoCurrentRow
        )
    }
}

/// Result type alias for rowmap operations
pub type Result<T> = std::result::Result<T, Error>;
