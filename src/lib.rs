pub mod column_mapping;
pub mod config;
pub mod database_schema;
pub mod error;
pub mod model_generator;
pub mod naming;
pub mod types;
