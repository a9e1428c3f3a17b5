//! Header row of the token table.

use egui::Ui;
use egui_extras::TableRow;
use tokens_business::HeaderCell;

/// One bold label per column; the delete column's label is empty.
#[inline]
pub fn render_table_header(header: &mut TableRow<'_, '_>, cells: &[HeaderCell]) {
    for cell in cells {
        header.col(|ui| {
            render_header_cell(ui, cell.label);
        });
    }
}

#[inline]
fn render_header_cell(ui: &mut Ui, label: &str) {
    ui.strong(label);
}
