/// Results panel: the chart views for the selected document.
///
/// A row of tabs picks the view. Top words shows bars above a ranked
/// table; the other tabs show the word cloud, keyword hits, or the year
/// timeline.
use crate::state::{AppPhase, AppState, ResultView};
use crate::theme::CvSleuthTheme;
use crate::widgets::bar_chart::{bar_chart, BarRow};
use crate::widgets::line_chart::line_chart;
use crate::widgets::word_cloud::word_cloud;
use cvsleuth_core::analysis::WordCount;
use cvsleuth_core::format::format_count;
use cvsleuth_core::report::AnalysisReport;
use egui::Ui;
use egui_extras::{Column, TableBuilder};

/// Draw the tab strip and the active view.
pub fn results_panel(ui: &mut Ui, state: &mut AppState, theme: &CvSleuthTheme) {
    ui.horizontal(|ui| {
        for view in ResultView::ALL {
            ui.selectable_value(&mut state.view, view, view.label());
        }
    });
    ui.separator();

    let view = state.view;
    let Some(doc) = state.selected_document() else {
        empty_hint(ui, state.phase, theme);
        return;
    };
    let report = &doc.report;

    match view {
        ResultView::TopWords => top_words_view(ui, &report.top_words, theme),
        ResultView::WordCloud => {
            let cloud_id = egui::Id::new(("word_cloud", &doc.path, report.analysed_at));
            if let Some(tip) = word_cloud(ui, cloud_id, &report.cloud_words, theme) {
                egui::show_tooltip_at_pointer(
                    ui.ctx(),
                    ui.layer_id(),
                    egui::Id::new("cloud_tip"),
                    |ui| {
                        ui.label(tip);
                    },
                );
            }
        }
        ResultView::Keywords => keywords_view(ui, report, theme),
        ResultView::Timeline => timeline_view(ui, report, theme),
    }
}

fn empty_hint(ui: &mut Ui, phase: AppPhase, theme: &CvSleuthTheme) {
    ui.centered_and_justified(|ui| {
        let text = match phase {
            AppPhase::Analysing => "Analysing...",
            _ => "Drop a PDF, DOCX or TXT CV here, or type a path in the toolbar.",
        };
        ui.label(egui::RichText::new(text).size(15.0).color(theme.text_muted));
    });
}

// ── Top words ───────────────────────────────────────────────────

fn top_words_view(ui: &mut Ui, words: &[WordCount], theme: &CvSleuthTheme) {
    if words.is_empty() {
        ui.label(egui::RichText::new("No words found").color(theme.text_muted));
        return;
    }
    let total: u64 = words.iter().map(|w| w.count).sum();

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let rows: Vec<BarRow<'_>> = words
                .iter()
                .map(|w| BarRow {
                    label: w.word.as_str(),
                    value: w.count,
                })
                .collect();
            bar_chart(ui, &rows, theme.word_bar, theme);

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(4.0);

            TableBuilder::new(ui)
                .id_salt("top_words_table")
                .striped(true)
                .vscroll(false)
                .column(Column::exact(40.0))
                .column(Column::remainder().at_least(120.0))
                .column(Column::exact(72.0))
                .column(Column::exact(72.0))
                .header(20.0, |mut header| {
                    header.col(|ui| {
                        ui.strong("#");
                    });
                    header.col(|ui| {
                        ui.strong("Word");
                    });
                    header.col(|ui| {
                        ui.strong("Count");
                    });
                    header.col(|ui| {
                        ui.strong("Share");
                    });
                })
                .body(|body| {
                    body.rows(18.0, words.len(), |mut row| {
                        let i = row.index();
                        let w = &words[i];
                        row.col(|ui| {
                            ui.label(
                                egui::RichText::new((i + 1).to_string()).color(theme.text_muted),
                            );
                        });
                        row.col(|ui| {
                            ui.label(w.word.as_str());
                        });
                        row.col(|ui| {
                            ui.label(format_count(w.count));
                        });
                        row.col(|ui| {
                            let share = w.count as f64 * 100.0 / total.max(1) as f64;
                            ui.label(
                                egui::RichText::new(format!("{share:.1}%"))
                                    .color(theme.text_secondary),
                            );
                        });
                    });
                });
        });
}

// ── Keywords ────────────────────────────────────────────────────

/// Matched keywords as `"Category: keyword"` rows, most hits first.
fn keyword_rows(report: &AnalysisReport) -> Vec<(String, u64)> {
    let mut rows: Vec<(String, u64)> = report
        .categories
        .iter()
        .flat_map(|hits| {
            hits.keywords
                .iter()
                .filter(|k| k.count > 0)
                .map(move |k| (format!("{}: {}", hits.category, k.keyword), k.count))
        })
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    rows
}

fn keywords_view(ui: &mut Ui, report: &AnalysisReport, theme: &CvSleuthTheme) {
    let rows = keyword_rows(report);
    if rows.is_empty() {
        ui.label(egui::RichText::new("No dictionary keywords matched").color(theme.text_muted));
        return;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.label(egui::RichText::new("Per category").strong());
            let totals: Vec<BarRow<'_>> = report
                .categories
                .iter()
                .map(|h| BarRow {
                    label: h.category.as_str(),
                    value: h.total(),
                })
                .collect();
            bar_chart(ui, &totals, theme.accent, theme);

            ui.add_space(12.0);
            ui.label(egui::RichText::new("Matched keywords").strong());
            let bars: Vec<BarRow<'_>> = rows
                .iter()
                .map(|(label, value)| BarRow {
                    label: label.as_str(),
                    value: *value,
                })
                .collect();
            if let Some(i) = bar_chart(ui, &bars, theme.keyword_bar, theme) {
                let (label, value) = &rows[i];
                ui.label(
                    egui::RichText::new(format!("{label}: {value}"))
                        .color(theme.text_secondary),
                );
            }
        });
}

// ── Timeline ────────────────────────────────────────────────────

fn timeline_view(ui: &mut Ui, report: &AnalysisReport, theme: &CvSleuthTheme) {
    if report.years.is_empty() {
        ui.label(egui::RichText::new("No years mentioned").color(theme.text_muted));
        return;
    }
    ui.label(
        egui::RichText::new(format!(
            "{} mentions across {} distinct years",
            format_count(report.summary.years_mentioned),
            report.years.len()
        ))
        .color(theme.text_secondary),
    );
    ui.add_space(8.0);
    let height = (ui.available_height() - 8.0).clamp(180.0, 420.0);
    line_chart(ui, &report.years, height, theme);
}
