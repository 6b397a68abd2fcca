/// Word cloud -- paints a layout from `cvsleuth_core::cloud`.
use crate::theme::CvSleuthTheme;
use cvsleuth_core::analysis::WordCount;
use cvsleuth_core::cloud::{layout_cloud, PlacedWord};
use egui::{Align2, Color32, FontId, Id, Pos2, Sense, Ui, Vec2};
use std::sync::Arc;

/// Draw `words` as a cloud filling the available space.
///
/// The layout is cached under `id` until the canvas size changes, so `id`
/// must change whenever `words` does. Returns the word under the pointer.
pub fn word_cloud(
    ui: &mut Ui,
    id: Id,
    words: &[WordCount],
    theme: &CvSleuthTheme,
) -> Option<String> {
    let size = ui.available_size().max(Vec2::new(200.0, 160.0));
    let (rect, response) = ui.allocate_exact_size(size, Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 4.0, theme.surface);

    let placed = cached_layout(ui, id, words, rect.size());
    let hover = response.hover_pos();
    let mut hovered_word = None;

    for (rank, word) in placed.iter().enumerate() {
        let centre = Pos2::new(rect.left() + word.x, rect.top() + word.y);
        let half = Vec2::new(word.width / 2.0, word.height / 2.0);
        let is_hovered =
            hover.is_some_and(|h| egui::Rect::from_center_size(centre, half * 2.0).contains(h));

        let color = if hovered_word.is_none() && is_hovered {
            hovered_word = Some(format!("{}: {}", word.word, word.count));
            theme.accent
        } else {
            word_color(theme, rank, placed.len())
        };

        painter.text(
            centre,
            Align2::CENTER_CENTER,
            &word.word,
            FontId::proportional(word.font_size),
            color,
        );
    }

    if placed.is_empty() {
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            "No words to show",
            FontId::proportional(14.0),
            theme.text_muted,
        );
    }

    hovered_word
}

/// Faintest a tail word gets, as a fade fraction toward the background.
const TAIL_FADE: f32 = 0.55;

/// Palette colour for `rank`, faded toward the background down the ranking.
fn word_color(theme: &CvSleuthTheme, rank: usize, total: usize) -> Color32 {
    let t = if total > 1 {
        rank as f32 / (total - 1) as f32 * TAIL_FADE
    } else {
        0.0
    };
    theme.fade(theme.cloud_color(rank), t)
}

type CachedLayout = (Vec2, Arc<Vec<PlacedWord>>);

fn cached_layout(ui: &Ui, id: Id, words: &[WordCount], size: Vec2) -> Arc<Vec<PlacedWord>> {
    let size = size.round();
    if let Some((cached_size, placed)) = ui.data(|d| d.get_temp::<CachedLayout>(id)) {
        if cached_size == size {
            return placed;
        }
    }
    let placed = Arc::new(layout_cloud(words, size.x, size.y));
    ui.data_mut(|d| d.insert_temp(id, (size, Arc::clone(&placed))));
    placed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tail_words_fade_but_stay_visible() {
        let theme = CvSleuthTheme::dark();
        assert_eq!(word_color(&theme, 0, 300), theme.cloud_color(0));
        assert_eq!(word_color(&theme, 0, 1), theme.cloud_color(0));

        let last = word_color(&theme, 299, 300);
        assert_ne!(last, theme.cloud_color(299));
        assert_ne!(last, theme.background);
    }
}
