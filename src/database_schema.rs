use async_trait::async_trait;
use futures::TryStreamExt;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions, MySqlRow};
use sqlx::{ColumnIndex, Row};

use crate::config::ConnectionConfig;
use crate::error::DatabaseError;
use crate::types::DatabaseMeta;

/// One row of `SHOW COLUMNS`, kept as the raw strings the server returned.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColumnRow {
    pub field: String,
    pub column_type: String,
    pub null: String, // "YES" / "NO"
    pub key: String,  // "", "PRI", "UNI", "MUL"
}

/// Where table and column metadata come from.
#[async_trait]
pub trait SchemaSource: Send + Sync {
    /// Table names in the order the server lists them.
    async fn list_tables(&self) -> Result<Vec<String>, DatabaseError>;

    /// Columns of `table` in declaration order.
    async fn describe_columns(&self, table: &str) -> Result<Vec<ColumnRow>, DatabaseError>;

    /// Releases whatever connections the source holds.
    async fn close(&self);
}

pub struct MySqlSchemaSource {
    pool: MySqlPool,
}

impl MySqlSchemaSource {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn connect(config: &ConnectionConfig) -> Result<Self, DatabaseError> {
        let options = MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.database);

        // One connection keeps at most one query in flight.
        let pool = MySqlPoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(|source| DatabaseError::Connect {
                database: config.database.clone(),
                source,
            })?;

        Ok(Self::new(pool))
    }
}

#[async_trait]
impl SchemaSource for MySqlSchemaSource {
    async fn list_tables(&self) -> Result<Vec<String>, DatabaseError> {
        let mut rows = sqlx::query("SHOW TABLES").fetch(&self.pool);
        let mut tables = Vec::new();

        while let Some(row) = rows
            .try_next()
            .await
            .map_err(|source| DatabaseError::ListTables { source })?
        {
            let name = text_column(&row, 0usize)
                .map_err(|source| DatabaseError::ListTables { source })?;
            tables.push(name);
        }

        Ok(tables)
    }

    async fn describe_columns(&self, table: &str) -> Result<Vec<ColumnRow>, DatabaseError> {
        let into_error = |source| DatabaseError::DescribeColumns {
            table: table.to_string(),
            source,
        };

        let sql = format!("SHOW COLUMNS FROM {}", quote_identifier(table));
        let mut rows = sqlx::query(&sql).fetch(&self.pool);
        let mut columns = Vec::new();

        while let Some(row) = rows.try_next().await.map_err(into_error)? {
            columns.push(column_row(&row).map_err(into_error)?);
        }

        Ok(columns)
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}

fn column_row(row: &MySqlRow) -> Result<ColumnRow, sqlx::Error> {
    Ok(ColumnRow {
        field: text_column(row, "Field")?,
        column_type: text_column(row, "Type")?,
        null: text_column(row, "Null")?,
        key: text_column(row, "Key")?,
    })
}

// MySQL 8 reports some SHOW columns as binary strings, which sqlx refuses to
// decode as `String`.
fn text_column<I>(row: &MySqlRow, index: I) -> Result<String, sqlx::Error>
where
    I: ColumnIndex<MySqlRow> + Copy,
{
    match row.try_get::<Option<String>, _>(index) {
        Ok(value) => Ok(value.unwrap_or_default()),
        Err(sqlx::Error::ColumnDecode { .. }) => {
            let bytes: Option<Vec<u8>> = row.try_get(index)?;
            Ok(bytes
                .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
                .unwrap_or_default())
        }
        Err(e) => Err(e),
    }
}

pub fn quote_identifier(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

/// Loads every table, then closes the source whether loading succeeded or not.
pub async fn load_and_close<S>(name: &str, source: &S) -> Result<DatabaseMeta, DatabaseError>
where
    S: SchemaSource + ?Sized,
{
    let schema = DatabaseMeta::load(name, source).await;

    source.close().await;
    tracing::debug!("Connection pool closed");

    schema
}

pub async fn get_database_schema(
    name: &str,
    connection: &ConnectionConfig,
) -> Result<DatabaseMeta, DatabaseError> {
    let source = MySqlSchemaSource::connect(connection).await?;
    load_and_close(name, &source).await
}
