pub mod config;
pub mod error;
pub mod table;

pub use config::{FieldSelection, MatchConfig, split_list};
pub use error::{LinkError, Result};
pub use table::{CellValue, Table};
