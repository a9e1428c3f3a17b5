use egui::{Color32, Response, Ui};

/// Paints an error message in red.
pub fn error_banner(ui: &mut Ui, error: &str) -> Response {
    ui.colored_label(Color32::RED, format!("Error: {error}"))
}
