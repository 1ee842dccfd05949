pub mod error;
pub mod options;
pub mod table;

pub use error::{EdaError, Result};
pub use options::{CleaningOptions, InspectOptions, MissingPolicy};
pub use table::{Column, DataType, Table, format_numeric};
