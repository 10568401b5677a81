pub mod column_meta;
pub mod database_meta;
pub mod table_meta;

pub use column_meta::{ColumnMeta, KeyMarker};
pub use database_meta::DatabaseMeta;
pub use table_meta::TableMeta;
