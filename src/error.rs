//! Error types for the model generator.
//!
//! Every failure is one of three kinds: a configuration problem, a database
//! problem or a filesystem problem. Each kind maps to its own process exit code.

use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Result type alias for generator operations.
pub type GeneratorResult<T> = Result<T, GeneratorError>;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    #[error("Filesystem error: {0}")]
    FileSystem(#[from] FileSystemError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required dump option is empty.
    #[error("Required option '{option}' is missing")]
    MissingOption { option: &'static str },

    /// The configuration file could not be read or parsed.
    #[error("Invalid configuration file {path}: {message}")]
    File { path: PathBuf, message: String },
}

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Failed to connect to database '{database}': {source}")]
    Connect {
        database: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("Failed to list tables: {source}")]
    ListTables {
        #[source]
        source: sqlx::Error,
    },

    #[error("Failed to describe columns of table '{table}': {source}")]
    DescribeColumns {
        table: String,
        #[source]
        source: sqlx::Error,
    },
}

#[derive(Debug, Error)]
pub enum FileSystemError {
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GeneratorError {
    /// Process exit status for this error: 2 config, 3 database, 4 filesystem.
    pub fn exit_code(&self) -> u8 {
        match self {
            GeneratorError::Config(_) => 2,
            GeneratorError::Database(_) => 3,
            GeneratorError::FileSystem(_) => 4,
        }
    }
}

impl From<&GeneratorError> for ExitCode {
    fn from(error: &GeneratorError) -> Self {
        ExitCode::from(error.exit_code())
    }
}

impl ConfigError {
    pub fn missing(option: &'static str) -> Self {
        Self::MissingOption { option }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct_per_kind() {
        let config: GeneratorError = ConfigError::missing("path").into();
        let database: GeneratorError = DatabaseError::ListTables {
            source: sqlx::Error::PoolClosed,
        }
        .into();
        let file_system: GeneratorError = FileSystemError::Write {
            path: PathBuf::from("model/User.js"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        }
        .into();

        assert_eq!(config.exit_code(), 2);
        assert_eq!(database.exit_code(), 3);
        assert_eq!(file_system.exit_code(), 4);
    }

    #[test]
    fn test_messages_carry_context() {
        let error: GeneratorError = DatabaseError::DescribeColumns {
            table: "order_item".into(),
            source: sqlx::Error::PoolClosed,
        }
        .into();
        assert!(error.to_string().contains("order_item"));

        let error: GeneratorError = ConfigError::missing("namespace").into();
        assert_eq!(
            error.to_string(),
            "Configuration error: Required option 'namespace' is missing"
        );
    }
}
