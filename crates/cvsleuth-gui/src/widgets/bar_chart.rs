/// Horizontal bar chart -- one labelled bar per row, longest first.
use crate::theme::CvSleuthTheme;
use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Ui, Vec2};

const ROW_HEIGHT: f32 = 22.0;
const BAR_HEIGHT: f32 = 14.0;
const LABEL_WIDTH: f32 = 180.0;
const VALUE_WIDTH: f32 = 48.0;

/// One bar.
pub struct BarRow<'a> {
    pub label: &'a str,
    pub value: u64,
}

/// Draw `rows` as horizontal bars scaled to the largest value.
///
/// Returns the index of the hovered row, if any.
pub fn bar_chart(
    ui: &mut Ui,
    rows: &[BarRow<'_>],
    color: Color32,
    theme: &CvSleuthTheme,
) -> Option<usize> {
    if rows.is_empty() {
        return None;
    }

    let width = ui.available_width().max(LABEL_WIDTH + VALUE_WIDTH + 40.0);
    let height = rows.len() as f32 * ROW_HEIGHT;
    let (rect, response) = ui.allocate_exact_size(Vec2::new(width, height), Sense::hover());
    let painter = ui.painter_at(rect);

    let max = rows.iter().map(|r| r.value).max().unwrap_or(0).max(1) as f32;
    let track_width = width - LABEL_WIDTH - VALUE_WIDTH;
    let hovered = response
        .hover_pos()
        .map(|pos| ((pos.y - rect.top()) / ROW_HEIGHT) as usize)
        .filter(|&i| i < rows.len());

    for (i, row) in rows.iter().enumerate() {
        let top = rect.top() + i as f32 * ROW_HEIGHT;
        let mid = top + ROW_HEIGHT / 2.0;

        if hovered == Some(i) {
            let row_rect =
                Rect::from_min_size(Pos2::new(rect.left(), top), Vec2::new(width, ROW_HEIGHT));
            painter.rect_filled(row_rect, 2.0, theme.surface_hover);
        }

        painter.text(
            Pos2::new(rect.left() + LABEL_WIDTH - 8.0, mid),
            Align2::RIGHT_CENTER,
            elide(row.label, 26),
            FontId::proportional(12.0),
            theme.text_primary,
        );

        let track = Rect::from_min_size(
            Pos2::new(rect.left() + LABEL_WIDTH, mid - BAR_HEIGHT / 2.0),
            Vec2::new(track_width, BAR_HEIGHT),
        );
        painter.rect_stroke(track, 2.0, Stroke::new(1.0, theme.grid), egui::StrokeKind::Inside);

        let fill_w = track_width * (row.value as f32 / max);
        if fill_w > 0.5 {
            let fill = Rect::from_min_size(track.min, Vec2::new(fill_w, BAR_HEIGHT));
            painter.rect_filled(fill, 2.0, color);
        }

        painter.text(
            Pos2::new(track.right() + 6.0, mid),
            Align2::LEFT_CENTER,
            row.value.to_string(),
            FontId::proportional(12.0),
            theme.text_secondary,
        );
    }

    hovered
}

/// Cut `text` to `max_chars`, marking the cut with an ellipsis.
fn elide(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_chars - 1).collect();
        format!("{kept}…")
    }
}
