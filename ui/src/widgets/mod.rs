mod error_banner;
pub mod token_table;

pub use error_banner::error_banner;
pub use token_table::{TokenTableProps, token_table};
