//! Painting of token table cells.

use egui::{RichText, Ui};
use tokens_business::{
    Cell, DELETE_BUTTON_CLASS, DELETE_BUTTON_HINT, DELETE_BUTTON_LABEL, DeleteButton, NEVER,
    TimeDisplay,
};

#[inline]
pub fn render_cell(ui: &mut Ui, cell: &Cell) {
    match cell {
        Cell::Code(token) => render_code_cell(ui, token),
        Cell::Name(name) => render_name_cell(ui, name),
        Cell::Text(text) => {
            ui.label(text.as_str());
        }
        Cell::Time(time) => render_time_cell(ui, time),
        Cell::Delete(button) => render_delete_cell(ui, button),
    }
}

#[inline]
fn render_code_cell(ui: &mut Ui, token: &str) {
    ui.label(RichText::new(token).code());
}

#[inline]
fn render_name_cell(ui: &mut Ui, name: &str) {
    ui.label(RichText::new(name).strong());
}

/// Relative time with the exact instant on hover, or an italic "never".
#[inline]
fn render_time_cell(ui: &mut Ui, time: &TimeDisplay) {
    match time {
        TimeDisplay::Never => {
            ui.label(RichText::new(NEVER).italics());
        }
        TimeDisplay::At { relative, absolute } => {
            ui.label(relative.as_str()).on_hover_text(absolute.as_str());
        }
    }
}

/// The delete button. A click activates the bound callback right away.
#[inline]
fn render_delete_cell(ui: &mut Ui, button: &DeleteButton) {
    ui.push_id((DELETE_BUTTON_CLASS, button.token()), |ui| {
        if ui
            .button(DELETE_BUTTON_LABEL)
            .on_hover_text(DELETE_BUTTON_HINT)
            .clicked()
        {
            button.activate();
        }
    });
}
