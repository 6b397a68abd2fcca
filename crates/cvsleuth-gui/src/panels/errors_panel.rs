/// Failed documents, grouped by the stage that rejected them.
use crate::state::{AppState, MAX_FAILURES};
use crate::theme::CvSleuthTheme;
use cvsleuth_core::format::pluralise;
use egui::Ui;

pub fn errors_panel(ui: &mut Ui, state: &AppState, theme: &CvSleuthTheme) {
    if state.failures.is_empty() {
        ui.label(
            egui::RichText::new("No documents failed")
                .color(theme.text_muted)
                .italics(),
        );
        return;
    }

    let shown = state.failures.len();
    let mut heading = pluralise(shown as u64, "failed document", "failed documents");
    if shown >= MAX_FAILURES {
        heading.push_str(" (list truncated)");
    }
    ui.label(egui::RichText::new(heading).color(theme.warning).strong());
    ui.add_space(4.0);

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            egui::Grid::new("failures_grid")
                .num_columns(3)
                .striped(true)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    ui.strong("Stage");
                    ui.strong("Document");
                    ui.strong("Reason");
                    ui.end_row();

                    for failure in &state.failures {
                        ui.label(
                            egui::RichText::new(failure.stage.label()).color(theme.error),
                        );
                        let name = failure
                            .path
                            .file_name()
                            .map(|n| n.to_string_lossy().into_owned())
                            .unwrap_or_else(|| failure.path.display().to_string());
                        ui.label(name)
                            .on_hover_text(failure.path.display().to_string());
                        ui.label(
                            egui::RichText::new(&failure.message).color(theme.text_secondary),
                        );
                        ui.end_row();
                    }
                });
        });
}
