/// Top action bar -- path entry, analysis controls, export, theme toggle.
use crate::state::{AppPhase, AppState};
use egui::Ui;

/// Draw the toolbar.
pub fn toolbar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new("📄 CvSleuth")
                .size(18.0)
                .strong()
                .color(ui.visuals().hyperlink_color),
        );

        ui.separator();

        // Path entry: a file or a folder of CVs. Enter submits.
        let input = ui.add(
            egui::TextEdit::singleline(&mut state.path_input)
                .hint_text("Path to a CV or a folder of CVs (or drop files here)")
                .desired_width(360.0),
        );
        let submitted = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        let can_analyse = !state.path_input.trim().is_empty();
        let analyse_btn = ui.add_enabled(
            can_analyse,
            egui::Button::new("▶ Analyse").min_size(egui::vec2(80.0, 28.0)),
        );
        if (submitted && can_analyse) || analyse_btn.clicked() {
            state.submit_path_input();
        }

        let can_stop = state.phase == AppPhase::Analysing;
        if ui
            .add_enabled(
                can_stop,
                egui::Button::new("⏹ Stop").min_size(egui::vec2(70.0, 28.0)),
            )
            .clicked()
        {
            state.cancel_analysis();
        }

        ui.separator();

        let can_export = state.selected_document().is_some();
        if ui
            .add_enabled(can_export, egui::Button::new("📤 Export"))
            .on_hover_text(if can_export {
                "Export the selected document to CSV and JSON"
            } else {
                "Analyse a document first to enable export"
            })
            .clicked()
        {
            if let Err(e) = state.export_selected() {
                tracing::warn!("Export failed: {e:#}");
            }
        }

        let can_export_all = !state.documents.is_empty();
        if ui
            .add_enabled(can_export_all, egui::Button::new("📤 Export all"))
            .on_hover_text(format!(
                "Export every analysed document to {}",
                state.export_dir.display()
            ))
            .clicked()
        {
            if let Err(e) = state.export_all() {
                tracing::warn!("Export failed: {e:#}");
            }
        }

        // Right-aligned controls.
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("ℹ").on_hover_text("About CvSleuth").clicked() {
                state.show_about = true;
            }

            // ── Theme toggle (☀ light / 🌙 dark) ──────────────────
            let theme_label = if state.dark_mode { "☀" } else { "🌙" };
            let theme_tip = if state.dark_mode {
                "Switch to light mode"
            } else {
                "Switch to dark mode"
            };
            if ui.button(theme_label).on_hover_text(theme_tip).clicked() {
                state.dark_mode = !state.dark_mode;
            }

            if !state.failures.is_empty() {
                ui.separator();
                let label = egui::RichText::new(format!("⚠ {}", state.failures.len()))
                    .color(egui::Color32::from_rgb(0xfa, 0xb3, 0x87));
                if ui
                    .button(label)
                    .on_hover_text("Show documents that could not be analysed")
                    .clicked()
                {
                    state.show_errors = true;
                }
            }
        });
    });
}
