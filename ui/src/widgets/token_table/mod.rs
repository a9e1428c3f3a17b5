//! Token table widget.
//!
//! The table is split into smaller components:
//! - `columns`: column widths per column id
//! - `header`: header row rendering
//! - `row`: body row rendering
//! - `cells`: painting of each cell kind
//! - `panel`: the widget entry point, props and memo wiring

mod cells;
pub mod columns;
pub mod header;
mod panel;
pub mod row;

pub use panel::{TokenTableProps, token_table};
