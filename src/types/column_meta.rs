use std::fmt;

use crate::column_mapping::{column_mapping, FieldType};
use crate::database_schema::ColumnRow;
use crate::naming::{lower_camel, upper_camel};

/// Index kind reported in the `Key` column of `SHOW COLUMNS`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyMarker {
    None,
    Primary,
    Unique,
    /// Non-unique index, the usual shape of a foreign key column.
    MultiValueIndex,
    Other(String),
}

impl KeyMarker {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "" => KeyMarker::None,
            "PRI" => KeyMarker::Primary,
            "UNI" => KeyMarker::Unique,
            "MUL" => KeyMarker::MultiValueIndex,
            other => KeyMarker::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            KeyMarker::None => "",
            KeyMarker::Primary => "PRI",
            KeyMarker::Unique => "UNI",
            KeyMarker::MultiValueIndex => "MUL",
            KeyMarker::Other(raw) => raw.as_str(),
        }
    }
}

impl fmt::Display for KeyMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnMeta {
    pub column_name: String, // snake_case, as stored
    pub column_type: String, // native type, e.g. varchar(255)
    pub key: KeyMarker,
    pub not_null: bool,
}

impl ColumnMeta {
    pub fn parse(row: &ColumnRow) -> Self {
        let column = Self {
            column_name: row.field.clone(),
            column_type: row.column_type.clone(),
            key: KeyMarker::parse(&row.key),
            not_null: row.null == "NO",
        };

        tracing::debug!(
            " --> Field: {} {} {} {}",
            column.column_name,
            column.column_type,
            if column.not_null { "NN" } else { "NULL" },
            column.key
        );

        column
    }

    pub fn is_reference(&self) -> bool {
        self.key == KeyMarker::MultiValueIndex
    }

    /// Entity referenced by this column: `customer_id` -> `Customer`.
    pub fn reference_name(&self) -> Option<String> {
        if !self.is_reference() {
            return None;
        }

        let stem = match self.column_name.rsplit_once('_') {
            Some((stem, _)) => stem,
            None => "",
        };

        Some(upper_camel(stem))
    }

    pub fn field_name(&self) -> String {
        lower_camel(&self.column_name)
    }

    pub fn field_type(&self) -> FieldType {
        column_mapping(&self.column_type)
    }

    /// Ext JS field config, e.g. `{ name: 'quantity', type: 'int'}`.
    pub fn to_model_field(&self) -> String {
        match self.reference_name() {
            Some(reference) => format!(
                "{{ name: '{}', reference: '{}'}}",
                self.field_name(),
                reference
            ),
            None => format!(
                "{{ name: '{}', type: '{}'}}",
                self.field_name(),
                self.field_type()
            ),
        }
    }
}
