//! Token table business logic.
//!
//! Everything here is pure and framework-free: records go in, a
//! [`TokenTableModel`] of header and body cells comes out. Painting lives in
//! `tokens-ui`.

mod columns;
mod config;
mod delete_action;
mod error;
mod table;
mod time_format;
mod token;

pub use columns::{
    Accessor, Cell, CellRenderer, CellValue, ColumnDescriptor, ColumnId, SCOPE_SEPARATOR,
    TOKEN_CLASS, TOKEN_NAME_CLASS, join_scopes, token_columns,
};
pub use config::{ENV_PREFIX, TableConfig};
pub use delete_action::{
    DELETE_BUTTON_CLASS, DELETE_BUTTON_HINT, DELETE_BUTTON_LABEL, DeleteButton, DeleteCallback,
    render_delete_action,
};
pub use error::Error;
pub use table::{
    HeaderCell, TOKEN_ROW_CLASS, TableInputs, TableRowModel, TokenTableMemo, TokenTableModel,
    build_table,
};
pub use time_format::{
    Direction, Distance, NEVER, TimeDisplay, format_distance, format_timestamp, iso_utc,
    timestamp_to_datetime,
};
pub use token::{TokenRecord, parse_token_records};
