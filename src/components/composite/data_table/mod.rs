//! DataTable - Table Component with Column Definitions

pub mod column;
pub mod data_table;

pub use column::Column;
pub use data_table::DataTable;
