use super::table_meta::TableMeta;
use crate::config::DumpOptions;
use crate::database_schema::SchemaSource;
use crate::error::{ConfigError, DatabaseError, FileSystemError, GeneratorResult};

/// Liquibase bookkeeping tables, never turned into models.
pub const IGNORED_TABLES: [&str; 2] = ["DATABASECHANGELOG", "DATABASECHANGELOGLOCK"];

pub fn is_ignored(table_name: &str) -> bool {
    IGNORED_TABLES.contains(&table_name)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatabaseMeta {
    pub name: String,
    pub tables: Vec<TableMeta>, // order of SHOW TABLES
}

impl DatabaseMeta {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        tracing::info!("Preparing database parser: {}", name);

        Self {
            name,
            tables: Vec::new(),
        }
    }

    /// Lists the tables, then loads their columns one table at a time.
    pub async fn load<S>(name: &str, source: &S) -> Result<Self, DatabaseError>
    where
        S: SchemaSource + ?Sized,
    {
        let mut database = Self::new(name);
        tracing::info!("Loading database: {}", database.name);

        for table_name in source.list_tables().await? {
            if is_ignored(&table_name) {
                tracing::info!("Ignoring {}", table_name);
                continue;
            }

            tracing::info!("Found new table: {}", table_name);
            database.tables.push(TableMeta::new(table_name));
        }

        tracing::info!("Parsing tables...");
        for table in database.tables.iter_mut() {
            table.load(source).await?;
        }
        tracing::info!("All tables parsed.");

        Ok(database)
    }

    pub async fn dump(&self, options: &DumpOptions) -> GeneratorResult<()> {
        tracing::info!("Preparing to dump.");

        if options.path.as_os_str().is_empty() {
            return Err(ConfigError::missing("path").into());
        }

        let base_dir = options.path.join("base");
        tracing::info!(
            "Creating folders {} and {}",
            options.path.display(),
            base_dir.display()
        );
        for dir in [&options.path, &base_dir] {
            if let Err(source) = tokio::fs::create_dir_all(dir).await {
                let error = FileSystemError::CreateDir {
                    path: dir.clone(),
                    source,
                };
                tracing::warn!("{}. Ignoring.", error);
            }
        }

        tracing::info!("Start dump.");
        for table in &self.tables {
            table.dump(options).await?;
        }

        Ok(())
    }
}
