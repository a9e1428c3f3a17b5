//! Body rows of the token table.

use egui_extras::TableRow;
use tokens_business::TableRowModel;

use super::cells::render_cell;

/// Paints one record's cells, left to right in column order.
#[inline]
pub fn render_token_row(row: &mut TableRow<'_, '_>, data: &TableRowModel) {
    for cell in &data.cells {
        row.col(|ui| {
            render_cell(ui, cell);
        });
    }
}
