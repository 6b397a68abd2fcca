/// Word-cloud layout.
///
/// Words are placed largest first along an Archimedean spiral that starts
/// at the centre of the canvas. A candidate position is accepted when the
/// word's box lies inside the canvas and overlaps no box placed before it.
/// Words that find no position within the step budget are left out.
///
/// Text extents are estimated from the character count, so the layout
/// needs no font backend and is fully deterministic: the same words and
/// canvas always produce the same placement.
use crate::analysis::WordCount;

/// Font size bounds in points.
pub const MIN_FONT_SIZE: f32 = 12.0;
pub const MAX_FONT_SIZE: f32 = 64.0;

/// Average glyph advance as a fraction of the font size.
const GLYPH_WIDTH: f32 = 0.6;
const LINE_HEIGHT: f32 = 1.1;

/// Spiral parameters: radius grows by `SPIRAL_GROWTH` per radian.
const SPIRAL_GROWTH: f32 = 2.0;
const SPIRAL_STEP: f32 = 0.15;
const MAX_SPIRAL_STEPS: usize = 4_000;

/// One word's position on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWord {
    pub word: String,
    pub count: u64,
    pub font_size: f32,
    /// Box centre, canvas coordinates (origin top-left).
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PlacedWord {
    fn overlaps(&self, other: &PlacedWord) -> bool {
        (self.x - other.x).abs() * 2.0 < self.width + other.width
            && (self.y - other.y).abs() * 2.0 < self.height + other.height
    }

    fn inside(&self, width: f32, height: f32) -> bool {
        self.x - self.width / 2.0 >= 0.0
            && self.y - self.height / 2.0 >= 0.0
            && self.x + self.width / 2.0 <= width
            && self.y + self.height / 2.0 <= height
    }
}

/// Lay out `words` on a `width` × `height` canvas.
pub fn layout_cloud(words: &[WordCount], width: f32, height: f32) -> Vec<PlacedWord> {
    if words.is_empty() || width <= 0.0 || height <= 0.0 {
        return Vec::new();
    }

    let mut ordered: Vec<&WordCount> = words.iter().filter(|w| w.count > 0).collect();
    ordered.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));

    let max_count = ordered.first().map_or(0, |w| w.count);
    let min_count = ordered.last().map_or(0, |w| w.count);
    // Never let one word be taller than a quarter of the canvas.
    let max_font = MAX_FONT_SIZE.min(height / 4.0).max(MIN_FONT_SIZE);

    let mut placed: Vec<PlacedWord> = Vec::with_capacity(ordered.len());
    for word in ordered {
        let font_size = font_size_for(word.count, min_count, max_count, max_font);
        let chars = word.word.chars().count().max(1) as f32;
        let mut candidate = PlacedWord {
            word: word.word.to_string(),
            count: word.count,
            font_size,
            x: width / 2.0,
            y: height / 2.0,
            width: chars * font_size * GLYPH_WIDTH,
            height: font_size * LINE_HEIGHT,
        };

        for step in 0..MAX_SPIRAL_STEPS {
            let theta = step as f32 * SPIRAL_STEP;
            let radius = SPIRAL_GROWTH * theta;
            candidate.x = width / 2.0 + radius * theta.cos();
            candidate.y = height / 2.0 + radius * theta.sin();

            if candidate.inside(width, height) && !placed.iter().any(|p| p.overlaps(&candidate)) {
                placed.push(candidate.clone());
                break;
            }
        }
    }
    placed
}

/// Linear interpolation between the font bounds by count.
fn font_size_for(count: u64, min_count: u64, max_count: u64, max_font: f32) -> f32 {
    if max_count == min_count {
        return max_font;
    }
    let t = (count - min_count) as f32 / (max_count - min_count) as f32;
    MIN_FONT_SIZE + t * (max_font - MIN_FONT_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words() -> Vec<WordCount> {
        vec![
            WordCount::new("python", 12),
            WordCount::new("kubernetes", 7),
            WordCount::new("sql", 5),
            WordCount::new("docker", 3),
            WordCount::new("aws", 1),
        ]
    }

    #[test]
    fn placed_words_do_not_overlap_and_stay_inside() {
        let placed = layout_cloud(&words(), 600.0, 400.0);
        assert_eq!(placed.len(), 5);
        for (i, a) in placed.iter().enumerate() {
            assert!(a.inside(600.0, 400.0), "{} is outside", a.word);
            for b in &placed[i + 1..] {
                assert!(!a.overlaps(b), "{} overlaps {}", a.word, b.word);
            }
        }
    }

    #[test]
    fn most_frequent_word_is_largest_and_central() {
        let placed = layout_cloud(&words(), 600.0, 400.0);
        assert_eq!(placed[0].word, "python");
        assert_eq!(placed[0].x, 300.0);
        assert_eq!(placed[0].y, 200.0);
        assert!(placed.iter().all(|p| p.font_size <= placed[0].font_size));
        let aws = placed.iter().find(|p| p.word == "aws").unwrap();
        assert_eq!(aws.font_size, MIN_FONT_SIZE);
    }

    #[test]
    fn layout_is_deterministic() {
        let a = layout_cloud(&words(), 500.0, 300.0);
        let b = layout_cloud(&words(), 500.0, 300.0);
        assert_eq!(a, b);
    }

    #[test]
    fn tiny_canvas_drops_words_that_do_not_fit() {
        let placed = layout_cloud(&words(), 60.0, 30.0);
        assert!(placed.len() < 5);
        assert!(placed.iter().all(|p| p.inside(60.0, 30.0)));
    }

    #[test]
    fn empty_input_or_canvas() {
        assert!(layout_cloud(&[], 100.0, 100.0).is_empty());
        assert!(layout_cloud(&words(), 0.0, 100.0).is_empty());
    }
}
