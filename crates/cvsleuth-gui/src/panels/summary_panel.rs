/// Summary panel: headline numbers for the selected document.
use crate::state::AppState;
use crate::theme::CvSleuthTheme;
use cvsleuth_core::format::{format_count, format_size, pluralise};
use egui::Ui;

/// Draw the summary for the currently selected document.
pub fn summary_panel(ui: &mut Ui, state: &AppState, theme: &CvSleuthTheme) {
    ui.heading("Summary");
    ui.add_space(4.0);

    let Some(doc) = state.selected_document() else {
        ui.label(
            egui::RichText::new("Select a document to see its summary")
                .color(theme.text_muted)
                .italics(),
        );
        return;
    };
    let report = &doc.report;
    let summary = &report.summary;

    ui.label(
        egui::RichText::new(&report.source)
            .size(14.0)
            .strong()
            .color(theme.text_primary),
    );
    ui.label(
        egui::RichText::new(doc.path.display().to_string())
            .size(11.0)
            .color(theme.text_muted),
    );
    ui.add_space(8.0);

    // File size is read lazily; the file may have moved since analysis.
    let file_size = std::fs::metadata(&doc.path)
        .map(|m| format_size(m.len()))
        .unwrap_or_else(|_| "—".to_string());
    let span = match report.year_span() {
        Some((first, last)) if first == last => first.to_string(),
        Some((first, last)) => format!("{first}–{last}"),
        None => "none".to_string(),
    };
    let analysed_at = report
        .analysed_at
        .with_timezone(&chrono::Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string();

    egui::Grid::new("summary_grid")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            let mut row = |label: &str, value: String| {
                ui.label(egui::RichText::new(label).color(theme.text_secondary));
                ui.label(egui::RichText::new(value).color(theme.text_primary));
                ui.end_row();
            };
            row("Format", report.format.label().to_string());
            row("File size", file_size);
            row("Characters", format_count(summary.raw_text_length));
            row("Words", format_count(summary.total_words));
            row("Unique words", format_count(summary.unique_words));
            row("Keyword hits", format_count(report.keyword_hits()));
            row(
                "Years",
                format!(
                    "{} ({})",
                    span,
                    pluralise(summary.years_mentioned, "mention", "mentions")
                ),
            );
            row("Analysed", analysed_at);
        });

    ui.add_space(12.0);
    ui.separator();
    ui.label(egui::RichText::new("Categories").strong());
    ui.add_space(4.0);

    for hits in &report.categories {
        let total = hits.total();
        let matched = hits.keywords.iter().filter(|k| k.count > 0).count();
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(&hits.category).color(if total > 0 {
                theme.text_primary
            } else {
                theme.text_muted
            }));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(format!(
                        "{} · {}/{}",
                        format_count(total),
                        matched,
                        hits.keywords.len()
                    ))
                    .size(11.0)
                    .color(theme.text_secondary),
                );
            });
        });
    }
}
