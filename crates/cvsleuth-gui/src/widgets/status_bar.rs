/// Bottom status bar: batch progress, totals, and the last export result.
use crate::state::{AppPhase, AppState};
use crate::theme::CvSleuthTheme;
use cvsleuth_core::format::{format_count, pluralise};
use egui::Ui;

/// Draw the status bar at the bottom of the window.
pub fn status_bar(ui: &mut Ui, state: &mut AppState, theme: &CvSleuthTheme) {
    ui.horizontal(|ui| {
        match state.phase {
            AppPhase::Idle => {
                ui.label(
                    egui::RichText::new("Ready — open or drop a PDF, DOCX or TXT CV")
                        .size(12.0)
                        .color(theme.text_muted),
                );
            }
            AppPhase::Analysing => {
                ui.spinner();
                ui.label(
                    egui::RichText::new(format!(
                        "Analysing {} of {}...",
                        format_count(state.batch_done as u64),
                        format_count(state.batch_total as u64)
                    ))
                    .size(12.0)
                    .color(theme.text_primary),
                );
                let fraction = if state.batch_total > 0 {
                    state.batch_done as f32 / state.batch_total as f32
                } else {
                    0.0
                };
                ui.add(egui::ProgressBar::new(fraction).desired_width(160.0));
                if !state.pending.is_empty() {
                    ui.separator();
                    ui.label(
                        egui::RichText::new(format!("{} queued", state.pending.len()))
                            .size(12.0)
                            .color(theme.text_muted),
                    );
                }
            }
            AppPhase::Results => {
                let (text, color) = if state.batch_was_cancelled {
                    ("⏹ Analysis stopped (partial results)", theme.warning)
                } else {
                    ("✓ Analysis complete", theme.success)
                };
                ui.label(egui::RichText::new(text).size(12.0).color(color));

                ui.separator();
                ui.label(
                    egui::RichText::new(pluralise(
                        state.documents.len() as u64,
                        "document",
                        "documents",
                    ))
                    .size(12.0)
                    .color(theme.text_primary),
                );

                if let Some(duration) = state.batch_duration {
                    ui.separator();
                    ui.label(
                        egui::RichText::new(format!("{:.2}s", duration.as_secs_f64()))
                            .size(12.0)
                            .color(theme.text_muted),
                    );
                }
            }
        }

        if state.batch_failed > 0 {
            ui.separator();
            ui.label(
                egui::RichText::new(format!("{} failed", format_count(state.batch_failed as u64)))
                    .size(12.0)
                    .color(theme.warning),
            );
        }

        // Last export outcome, right-aligned and dismissable.
        let mut dismiss = false;
        if let Some(message) = &state.export_message {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button("✕").clicked() {
                    dismiss = true;
                }
                let (text, color) = match message {
                    Ok(text) => (text.as_str(), theme.success),
                    Err(text) => (text.as_str(), theme.error),
                };
                ui.label(egui::RichText::new(truncate(text, 80)).size(12.0).color(color));
            });
        }
        if dismiss {
            state.export_message = None;
        }
    });
}

/// Shorten `text` to at most `max_chars` characters, ending in "...".
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{kept}...")
}

#[cfg(test)]
mod tests {
    use super::truncate;

    #[test]
    fn short_text_is_unchanged() {
        assert_eq!(truncate("Exported", 80), "Exported");
    }

    #[test]
    fn long_text_is_cut_on_char_boundaries() {
        let text = "é".repeat(100);
        let out = truncate(&text, 10);
        assert_eq!(out.chars().count(), 10);
        assert!(out.ends_with("..."));
    }
}
