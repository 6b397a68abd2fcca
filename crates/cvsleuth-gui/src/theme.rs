/// Colour scheme and visual theme for CvSleuth.
///
/// All colour constants are defined here so the rest of the UI code
/// references semantically-named values rather than raw hex codes.
use egui::{Color32, Stroke, Visuals};

/// Semantic colour palette.
#[derive(Debug, Clone)]
pub struct CvSleuthTheme {
    pub background: Color32,
    pub surface: Color32,
    pub surface_hover: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub error: Color32,
    pub warning: Color32,
    pub success: Color32,
    pub separator: Color32,
    pub selection: Color32,
    /// Bar fill for the top-words chart.
    pub word_bar: Color32,
    /// Bar fill for the keyword chart.
    pub keyword_bar: Color32,
    /// Line and marker colour for the year timeline.
    pub timeline: Color32,
    /// Grid lines and axes in charts.
    pub grid: Color32,
    /// Word-cloud colours, cycled by rank.
    pub cloud: [Color32; 6],
}

impl CvSleuthTheme {
    /// Dark theme, the default.
    pub fn dark() -> Self {
        Self {
            background: Color32::from_rgb(0x1e, 0x1e, 0x2e),
            surface: Color32::from_rgb(0x2a, 0x2a, 0x3c),
            surface_hover: Color32::from_rgb(0x35, 0x35, 0x4a),
            text_primary: Color32::from_rgb(0xe4, 0xe4, 0xe8),
            text_secondary: Color32::from_rgb(0xb8, 0xb8, 0xc4),
            text_muted: Color32::from_rgb(0x6c, 0x70, 0x86),
            accent: Color32::from_rgb(0x89, 0xb4, 0xfa),
            error: Color32::from_rgb(0xf3, 0x8b, 0xa8),
            warning: Color32::from_rgb(0xfa, 0xb3, 0x87),
            success: Color32::from_rgb(0xa6, 0xe3, 0xa1),
            separator: Color32::from_rgb(0x3a, 0x3a, 0x50),
            selection: Color32::from_rgb(0x28, 0x3a, 0x5c),
            word_bar: Color32::from_rgb(0x89, 0xdc, 0xeb),
            keyword_bar: Color32::from_rgb(0xf3, 0x8b, 0xa8),
            timeline: Color32::from_rgb(0xfa, 0xb3, 0x87),
            grid: Color32::from_rgb(0x3a, 0x3a, 0x50),
            cloud: [
                Color32::from_rgb(0x89, 0xb4, 0xfa),
                Color32::from_rgb(0xa6, 0xe3, 0xa1),
                Color32::from_rgb(0xf9, 0xe2, 0xaf),
                Color32::from_rgb(0xf3, 0x8b, 0xa8),
                Color32::from_rgb(0xcb, 0xa6, 0xf7),
                Color32::from_rgb(0x94, 0xe2, 0xd5),
            ],
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color32::from_rgb(0xf5, 0xf5, 0xf5),
            surface: Color32::from_rgb(0xff, 0xff, 0xff),
            surface_hover: Color32::from_rgb(0xe8, 0xe8, 0xef),
            text_primary: Color32::from_rgb(0x1e, 0x1e, 0x2e),
            text_secondary: Color32::from_rgb(0x4a, 0x4a, 0x5a),
            text_muted: Color32::from_rgb(0x8a, 0x8a, 0x9a),
            accent: Color32::from_rgb(0x3a, 0x6f, 0xd8),
            error: Color32::from_rgb(0xd0, 0x40, 0x50),
            warning: Color32::from_rgb(0xd0, 0x80, 0x20),
            success: Color32::from_rgb(0x30, 0x98, 0x30),
            separator: Color32::from_rgb(0xd0, 0xd0, 0xd8),
            selection: Color32::from_rgba_premultiplied(0x3a, 0x6f, 0xd8, 0x30),
            word_bar: Color32::from_rgb(0x20, 0x90, 0xb0),
            keyword_bar: Color32::from_rgb(0xd0, 0x50, 0x60),
            timeline: Color32::from_rgb(0xe0, 0x80, 0x20),
            grid: Color32::from_rgb(0xd8, 0xd8, 0xe0),
            cloud: [
                Color32::from_rgb(0x3a, 0x6f, 0xd8),
                Color32::from_rgb(0x30, 0x98, 0x30),
                Color32::from_rgb(0xc0, 0x98, 0x20),
                Color32::from_rgb(0xd0, 0x40, 0x50),
                Color32::from_rgb(0x88, 0x50, 0xc8),
                Color32::from_rgb(0x20, 0x90, 0x90),
            ],
        }
    }

    pub fn for_dark_mode(dark: bool) -> Self {
        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }

    pub fn is_dark(&self) -> bool {
        self.background.r() < 128
    }

    /// Apply this theme to an egui context.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();

        let mut visuals = if self.is_dark() {
            Visuals::dark()
        } else {
            Visuals::light()
        };

        visuals.panel_fill = self.background;
        visuals.window_fill = self.surface;
        visuals.extreme_bg_color = self.background;
        visuals.faint_bg_color = self.surface;
        visuals.hyperlink_color = self.accent;
        visuals.selection.bg_fill = self.selection;
        visuals.selection.stroke = Stroke::new(1.0, self.accent);

        visuals.widgets.noninteractive.bg_fill = self.surface;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_primary);
        visuals.widgets.inactive.bg_fill = self.surface;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.text_secondary);
        visuals.widgets.hovered.bg_fill = self.surface_hover;
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, self.accent);
        visuals.widgets.active.bg_fill = self.accent;
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, self.background);

        visuals.window_stroke = Stroke::new(1.0, self.separator);

        style.visuals = visuals;
        style.spacing.item_spacing = egui::vec2(8.0, 4.0);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);

        ctx.set_style(style);
    }

    /// Word-cloud colour for the word at `rank` (0 = most frequent).
    pub fn cloud_color(&self, rank: usize) -> Color32 {
        self.cloud[rank % self.cloud.len()]
    }

    /// Fade `color` toward the background by `t` (0.0 – 1.0).
    pub fn fade(&self, color: Color32, t: f32) -> Color32 {
        lerp_color(color, self.background, t)
    }
}

/// Linear interpolation between two colours.
fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    Color32::from_rgb(
        (a.r() as f32 * (1.0 - t) + b.r() as f32 * t) as u8,
        (a.g() as f32 * (1.0 - t) + b.g() as f32 * t) as u8,
        (a.b() as f32 * (1.0 - t) + b.b() as f32 * t) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_and_light_are_distinguished() {
        assert!(CvSleuthTheme::dark().is_dark());
        assert!(!CvSleuthTheme::light().is_dark());
        assert!(CvSleuthTheme::for_dark_mode(true).is_dark());
    }

    #[test]
    fn cloud_colors_cycle() {
        let theme = CvSleuthTheme::dark();
        assert_eq!(theme.cloud_color(0), theme.cloud_color(6));
        assert_ne!(theme.cloud_color(0), theme.cloud_color(1));
    }

    #[test]
    fn fade_ends_at_background() {
        let theme = CvSleuthTheme::dark();
        assert_eq!(theme.fade(theme.accent, 1.0), theme.background);
        assert_eq!(theme.fade(theme.accent, 0.0), theme.accent);
    }
}
