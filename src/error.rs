//! Error types for the exporter.
//!
//! Errors use `thiserror` and follow a simple propagation policy: only a
//! failure to reach the database aborts a run. Metadata and data failures
//! are scoped to one table; the export loop converts them into `-- ` comment
//! lines and moves on, so the output always carries one entry per requested
//! table.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Connection failed: {message}")]
    Connection { message: String, suggestion: String },

    #[error("Database error: {message}")]
    Database {
        message: String,
        /// e.g., "42P01" for undefined table
        sql_state: Option<String>,
    },

    #[error("Could not read metadata for {table}: {message}")]
    Metadata { table: String, message: String },

    #[error("Could not read data from {table}: {message}")]
    Data { table: String, message: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl ExportError {
    /// Create a connection error with a helpful suggestion.
    pub fn connection(message: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
            suggestion: suggestion.into(),
        }
    }

    /// Create a per-table metadata error.
    pub fn metadata(table: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Metadata {
            table: table.into(),
            message: message.into(),
        }
    }

    /// Create a per-table data error.
    pub fn data(table: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Data {
            table: table.into(),
            message: message.into(),
        }
    }

    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the suggestion for this error, if available.
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            Self::Connection { suggestion, .. } => Some(suggestion),
            _ => None,
        }
    }

    /// True when the whole export must stop (nothing per-table about it).
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Connection { .. } | Self::InvalidInput { .. })
    }
}

/// Convert sqlx errors into the export taxonomy.
impl From<sqlx::Error> for ExportError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Configuration(msg) => ExportError::connection(
                msg.to_string(),
                "Check the connection string format and credentials",
            ),
            sqlx::Error::Database(db_err) => {
                let code = db_err.code().map(|c| c.to_string());
                ExportError::Database {
                    message: db_err.message().to_string(),
                    sql_state: code,
                }
            }
            sqlx::Error::PoolTimedOut => ExportError::connection(
                "Timed out acquiring a connection from the pool",
                "Check that the server is reachable and not overloaded",
            ),
            sqlx::Error::PoolClosed => {
                ExportError::connection("Connection pool is closed", "Reconnect to the database")
            }
            sqlx::Error::Io(io_err) => ExportError::connection(
                format!("I/O error: {}", io_err),
                "Check network connectivity and database server status",
            ),
            sqlx::Error::Tls(tls_err) => ExportError::connection(
                format!("TLS error: {}", tls_err),
                "Verify TLS configuration and certificates",
            ),
            sqlx::Error::Protocol(msg) => ExportError::connection(
                format!("Protocol error: {}", msg),
                "Check database server compatibility",
            ),
            sqlx::Error::RowNotFound => ExportError::internal("No rows returned"),
            sqlx::Error::ColumnIndexOutOfBounds { index, len } => ExportError::internal(format!(
                "Column index {} out of bounds (len: {})",
                index, len
            )),
            sqlx::Error::ColumnDecode { index, source } => {
                ExportError::internal(format!("Failed to decode column {}: {}", index, source))
            }
            sqlx::Error::Decode(source) => {
                ExportError::internal(format!("Decode error: {}", source))
            }
            sqlx::Error::WorkerCrashed => ExportError::internal("Database worker crashed"),
            _ => ExportError::internal(format!("Unknown database error: {}", err)),
        }
    }
}

/// Result type alias for export operations.
pub type ExportResult<T> = Result<T, ExportError>;
