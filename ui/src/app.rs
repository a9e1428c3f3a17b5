use std::time::Duration;

use crate::{state::State, widgets};

pub struct TokensApp {
    state: State,
}

impl TokensApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }
}

impl eframe::App for TokensApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.time.tick();
        // Clicks from the previous frame land here, before the table is painted.
        self.state.apply_deletions();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.heading("Tokens");
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(error) = self.state.errors.error() {
                widgets::error_banner(ui, error);
                ui.separator();
            }

            let props = self.state.table_props();
            let now = self.state.time.now();
            widgets::token_table(ui, &mut self.state.memo, &props, now);
        });

        // Relative times change at most once per second.
        ctx.request_repaint_after(Duration::from_secs(1));
    }
}
