use std::fmt;

/// Field types understood by the generated Ext JS models.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldType {
    String,
    Int,
    Date,
    Boolean,
    Auto,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Int => "int",
            FieldType::Date => "date",
            FieldType::Boolean => "boolean",
            FieldType::Auto => "auto",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// First matching prefix wins. `bigint` never reaches `int` since the test is a
// literal prefix, and `tinyint(1)` is checked last.
const TYPE_RULES: [(&str, FieldType); 6] = [
    ("varchar", FieldType::String),
    ("int", FieldType::Int),
    ("bigint", FieldType::Int),
    ("text", FieldType::String),
    ("date", FieldType::Date),
    ("tinyint(1)", FieldType::Boolean),
];

pub fn column_mapping(column_type: &str) -> FieldType {
    TYPE_RULES
        .iter()
        .find(|(prefix, _)| column_type.starts_with(*prefix))
        .map(|(_, field_type)| *field_type)
        .unwrap_or(FieldType::Auto)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_types() {
        assert_eq!(column_mapping("varchar(255)"), FieldType::String);
        assert_eq!(column_mapping("int(11)"), FieldType::Int);
        assert_eq!(column_mapping("int"), FieldType::Int);
        assert_eq!(column_mapping("bigint(20)"), FieldType::Int);
        assert_eq!(column_mapping("bigint(20) unsigned"), FieldType::Int);
        assert_eq!(column_mapping("text"), FieldType::String);
        assert_eq!(column_mapping("tinyint(1)"), FieldType::Boolean);
        assert_eq!(column_mapping("datetime"), FieldType::Date);
        assert_eq!(column_mapping("date"), FieldType::Date);
    }

    #[test]
    fn test_unmapped_types_fall_back_to_auto() {
        assert_eq!(column_mapping("json"), FieldType::Auto);
        assert_eq!(column_mapping("decimal(10,2)"), FieldType::Auto);
        assert_eq!(column_mapping("tinyint(4)"), FieldType::Auto);
        assert_eq!(column_mapping("mediumtext"), FieldType::Auto);
        assert_eq!(column_mapping("timestamp"), FieldType::Auto);
        assert_eq!(column_mapping(""), FieldType::Auto);
    }

    #[test]
    fn test_prefix_match_is_literal() {
        assert_eq!(column_mapping("integer"), FieldType::Int);
        assert_eq!(column_mapping("VARCHAR(10)"), FieldType::Auto);
        assert_eq!(column_mapping(" int"), FieldType::Auto);
    }

    #[test]
    fn test_display() {
        assert_eq!(FieldType::Boolean.to_string(), "boolean");
        assert_eq!(FieldType::Auto.to_string(), "auto");
    }
}
