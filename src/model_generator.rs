use std::path::{Path, PathBuf};

use crate::config::DumpOptions;
use crate::error::FileSystemError;
use crate::types::TableMeta;

pub fn base_class_name(namespace: &str, entity_name: &str) -> String {
    format!("{}.base.Base{}", namespace, entity_name)
}

pub fn base_model_path(options: &DumpOptions, entity_name: &str) -> PathBuf {
    options
        .path
        .join("base")
        .join(format!("Base{}.{}", entity_name, options.extension))
}

pub fn model_path(options: &DumpOptions, entity_name: &str) -> PathBuf {
    options
        .path
        .join(format!("{}.{}", entity_name, options.extension))
}

pub fn generate_base_model(table: &TableMeta, options: &DumpOptions) -> String {
    let entity_name = table.entity_name();

    let fields: Vec<String> = table
        .columns
        .iter()
        .map(|column| format!("    {}", column.to_model_field()))
        .collect();

    [
        format!(
            "Ext.define('{}', {{",
            base_class_name(&options.namespace, &entity_name)
        ),
        format!("  extend: '{}',", options.base_model),
        "  fields: [".to_string(),
        fields.join(",\n"),
        "  ]".to_string(),
        "});".to_string(),
    ]
    .join("\n")
}

pub fn generate_model(table: &TableMeta, options: &DumpOptions) -> String {
    let entity_name = table.entity_name();

    [
        format!("Ext.define('{}.{}', {{", options.namespace, entity_name),
        format!(
            "  extend: '{}',",
            base_class_name(&options.namespace, &entity_name)
        ),
        format!("  entityName: '{}'", entity_name),
        "});".to_string(),
    ]
    .join("\n")
}

/// Writes `content` to `path`, replacing whatever was there.
pub async fn write_model(path: &Path, content: &str) -> Result<(), FileSystemError> {
    tokio::fs::write(path, content)
        .await
        .map_err(|source| FileSystemError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!("Written {} bytes to {}", content.len(), path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database_schema::ColumnRow;
    use crate::types::ColumnMeta;

    fn column(field: &str, column_type: &str, null: &str, key: &str) -> ColumnMeta {
        ColumnMeta::parse(&ColumnRow {
            field: field.into(),
            column_type: column_type.into(),
            null: null.into(),
            key: key.into(),
        })
    }

    fn order_item() -> TableMeta {
        let mut table = TableMeta::new("order_item");
        table.columns = vec![
            column("id", "int(11)", "NO", "PRI"),
            column("order_id", "int(11)", "YES", "MUL"),
            column("quantity", "int(11)", "NO", ""),
        ];
        table
    }

    #[test]
    fn test_generate_base_model() {
        let content = generate_base_model(&order_item(), &DumpOptions::default());

        assert_eq!(
            content,
            "Ext.define('App.model.base.BaseOrderItem', {\n\
             \x20 extend: 'Ext.data.Model',\n\
             \x20 fields: [\n\
             \x20   { name: 'id', type: 'int'},\n\
             \x20   { name: 'orderId', reference: 'Order'},\n\
             \x20   { name: 'quantity', type: 'int'}\n\
             \x20 ]\n\
             });"
        );
    }

    #[test]
    fn test_generate_base_model_without_columns() {
        let table = TableMeta::new("empty");
        let content = generate_base_model(&table, &DumpOptions::default());

        assert!(content.contains("  fields: [\n\n  ]"));
    }

    #[test]
    fn test_generate_model() {
        let options = DumpOptions {
            namespace: "Shop.model".into(),
            ..DumpOptions::default()
        };
        let content = generate_model(&order_item(), &options);

        assert_eq!(
            content,
            "Ext.define('Shop.model.OrderItem', {\n\
             \x20 extend: 'Shop.model.base.BaseOrderItem',\n\
             \x20 entityName: 'OrderItem'\n\
             });"
        );
    }

    #[test]
    fn test_paths() {
        let options = DumpOptions {
            path: PathBuf::from("out"),
            extension: "ts".into(),
            ..DumpOptions::default()
        };

        assert_eq!(
            base_model_path(&options, "OrderItem"),
            PathBuf::from("out/base/BaseOrderItem.ts")
        );
        assert_eq!(
            model_path(&options, "OrderItem"),
            PathBuf::from("out/OrderItem.ts")
        );
    }
}
