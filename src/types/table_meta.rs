use super::column_meta::ColumnMeta;
use crate::config::DumpOptions;
use crate::database_schema::SchemaSource;
use crate::error::{ConfigError, DatabaseError, GeneratorResult};
use crate::model_generator::{
    base_model_path, generate_base_model, generate_model, model_path, write_model,
};
use crate::naming::upper_camel;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableMeta {
    pub table_name: String,       // snake_case
    pub columns: Vec<ColumnMeta>, // declaration order
}

impl TableMeta {
    pub fn new(table_name: impl Into<String>) -> Self {
        let table_name = table_name.into();
        tracing::debug!("Preparing table data: {}", table_name);

        Self {
            table_name,
            columns: Vec::new(),
        }
    }

    /// CamelCase name used for classes and files: `order_item` -> `OrderItem`.
    pub fn entity_name(&self) -> String {
        upper_camel(&self.table_name)
    }

    pub async fn load<S>(&mut self, source: &S) -> Result<(), DatabaseError>
    where
        S: SchemaSource + ?Sized,
    {
        tracing::info!("Parsing table: {}", self.table_name);

        let rows = source.describe_columns(&self.table_name).await?;
        self.columns.extend(rows.iter().map(ColumnMeta::parse));

        Ok(())
    }

    /// Writes the base and the extendable model, each only when enabled.
    pub async fn dump(&self, options: &DumpOptions) -> GeneratorResult<()> {
        tracing::info!("Dumping table: {}", self.table_name);

        if options.namespace.is_empty() {
            return Err(ConfigError::missing("namespace").into());
        }
        if options.base_model.is_empty() {
            return Err(ConfigError::missing("baseModel").into());
        }

        tokio::try_join!(self.dump_base_model(options), self.dump_model(options))?;

        Ok(())
    }

    async fn dump_base_model(&self, options: &DumpOptions) -> GeneratorResult<()> {
        if !options.dump_base_model {
            tracing::warn!("Base model dump ignored. Use \"--ibm true\" parameter.");
            return Ok(());
        }

        let path = base_model_path(options, &self.entity_name());
        write_model(&path, &generate_base_model(self, options)).await?;

        Ok(())
    }

    async fn dump_model(&self, options: &DumpOptions) -> GeneratorResult<()> {
        if !options.dump_model {
            tracing::warn!("Model dump ignored. Use \"--im true\" parameter.");
            return Ok(());
        }

        let path = model_path(options, &self.entity_name());
        write_model(&path, &generate_model(self, options)).await?;

        Ok(())
    }
}
