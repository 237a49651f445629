pub mod cell;
pub mod log_record;
pub mod table;

pub use cell::CellValue;
pub use log_record::{LogAction, LogRecord};
pub use table::{Row, Table};
