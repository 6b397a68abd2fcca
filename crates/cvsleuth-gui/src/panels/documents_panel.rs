/// Documents panel: the list of analysed CVs in the left sidebar.
use crate::state::{AppPhase, AppState};
use crate::theme::CvSleuthTheme;
use cvsleuth_core::format::format_count;
use egui::Ui;
use std::path::PathBuf;

/// Draw the document list.
pub fn documents_panel(ui: &mut Ui, state: &mut AppState, theme: &CvSleuthTheme) {
    ui.horizontal(|ui| {
        ui.heading("Documents");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let can_clear = !state.documents.is_empty() && state.phase != AppPhase::Analysing;
            if ui
                .add_enabled(can_clear, egui::Button::new("🗑").small())
                .on_hover_text("Clear all results")
                .clicked()
            {
                state.clear_results();
            }
        });
    });
    ui.add_space(4.0);

    if state.documents.is_empty() {
        let hint = if state.phase == AppPhase::Analysing {
            "Waiting for the first result..."
        } else {
            "Type a path above or drop CVs onto the window."
        };
        ui.label(egui::RichText::new(hint).color(theme.text_muted).italics());
        return;
    }

    let mut select: Option<PathBuf> = None;
    let mut remove: Option<PathBuf> = None;

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for doc in &state.documents {
                let is_selected = state.selected.as_deref() == Some(doc.path.as_path());
                let report = &doc.report;

                let response = ui
                    .selectable_label(
                        is_selected,
                        egui::RichText::new(format!("{}  {}", report.format.label(), report.source))
                            .color(if is_selected {
                                theme.accent
                            } else {
                                theme.text_primary
                            }),
                    )
                    .on_hover_text(doc.path.display().to_string());
                if response.clicked() {
                    select = Some(doc.path.clone());
                }
                response.context_menu(|ui| {
                    if ui.button("Remove from list").clicked() {
                        remove = Some(doc.path.clone());
                        ui.close_menu();
                    }
                    if ui.button("Copy path").clicked() {
                        ui.ctx().copy_text(doc.path.display().to_string());
                        ui.close_menu();
                    }
                });

                ui.label(
                    egui::RichText::new(format!(
                        "{} words · {} keyword hits",
                        format_count(report.summary.total_words),
                        format_count(report.keyword_hits())
                    ))
                    .size(11.0)
                    .color(theme.text_muted),
                );
                ui.add_space(4.0);
            }
        });

    if let Some(path) = select {
        state.select(&path);
    }
    if let Some(path) = remove {
        state.remove_document(&path);
    }
}
