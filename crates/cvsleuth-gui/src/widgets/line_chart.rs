/// Year-mention line chart.
///
/// X is the calendar year (positioned proportionally, so gaps between
/// mentioned years are visible); Y is the mention count. Each point is
/// labelled with its count.
use crate::theme::CvSleuthTheme;
use cvsleuth_core::analysis::YearCount;
use egui::{Align2, FontId, Pos2, Rect, Sense, Shape, Stroke, Ui, Vec2};

const MARGIN_LEFT: f32 = 36.0;
const MARGIN_BOTTOM: f32 = 28.0;
const MARGIN_TOP: f32 = 20.0;
const MARGIN_RIGHT: f32 = 20.0;

/// Draw `years` into the available width at `height` points tall.
pub fn line_chart(ui: &mut Ui, years: &YearCount, height: f32, theme: &CvSleuthTheme) {
    let width = ui.available_width().max(200.0);
    let (rect, response) = ui.allocate_exact_size(Vec2::new(width, height), Sense::hover());
    let painter = ui.painter_at(rect);

    let plot = Rect::from_min_max(
        Pos2::new(rect.left() + MARGIN_LEFT, rect.top() + MARGIN_TOP),
        Pos2::new(rect.right() - MARGIN_RIGHT, rect.bottom() - MARGIN_BOTTOM),
    );

    // Axes.
    let axis = Stroke::new(1.0, theme.grid);
    painter.line_segment([plot.left_bottom(), plot.right_bottom()], axis);
    painter.line_segment([plot.left_top(), plot.left_bottom()], axis);

    let (Some((&first, _)), Some((&last, _))) = (years.iter().next(), years.iter().next_back())
    else {
        return;
    };
    let max_count = years.values().copied().max().unwrap_or(1).max(1);

    // One year either side keeps end points off the axes.
    let x_min = f32::from(first) - 1.0;
    let x_max = f32::from(last) + 1.0;
    let to_screen = |year: u16, count: u64| {
        let tx = (f32::from(year) - x_min) / (x_max - x_min);
        let ty = count as f32 / max_count as f32;
        Pos2::new(plot.left() + tx * plot.width(), plot.bottom() - ty * plot.height())
    };

    // Horizontal grid at the max and half-max counts.
    for fraction in [0.5f32, 1.0] {
        let y = plot.bottom() - fraction * plot.height();
        painter.line_segment(
            [Pos2::new(plot.left(), y), Pos2::new(plot.right(), y)],
            Stroke::new(0.5, theme.grid),
        );
        painter.text(
            Pos2::new(plot.left() - 6.0, y),
            Align2::RIGHT_CENTER,
            format!("{:.0}", fraction * max_count as f32),
            FontId::proportional(11.0),
            theme.text_muted,
        );
    }

    let points: Vec<Pos2> = years.iter().map(|(&y, &c)| to_screen(y, c)).collect();
    if points.len() > 1 {
        painter.add(Shape::line(points.clone(), Stroke::new(2.0, theme.timeline)));
    }

    // Label every year when they fit, otherwise roughly every 48 px.
    let label_every = ((years.len() as f32 * 48.0) / plot.width()).ceil().max(1.0) as usize;
    let hover = response.hover_pos();

    for (i, ((&year, &count), &point)) in years.iter().zip(&points).enumerate() {
        let hovered = hover.is_some_and(|h| h.distance(point) < 10.0);
        painter.circle_filled(point, if hovered { 6.0 } else { 4.0 }, theme.timeline);
        painter.text(
            point - Vec2::new(0.0, 8.0),
            Align2::CENTER_BOTTOM,
            count.to_string(),
            FontId::proportional(11.0),
            theme.text_primary,
        );
        if i % label_every == 0 || hovered {
            painter.text(
                Pos2::new(point.x, plot.bottom() + 6.0),
                Align2::CENTER_TOP,
                year.to_string(),
                FontId::proportional(11.0),
                theme.text_secondary,
            );
        }
    }
}
