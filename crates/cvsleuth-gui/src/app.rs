/// Main `eframe::App` implementation for CvSleuth.
///
/// This is the top-level UI layout that composes all panels and widgets.
use crate::panels;
use crate::state::{AppPhase, AppState};
use crate::theme::CvSleuthTheme;
use crate::widgets;
use cvsleuth_core::Analyzer;
use std::path::PathBuf;
use std::sync::Arc;

/// Pre-built application state.
///
/// Construct this **before** calling `eframe::run_native` so that the
/// documents given on the command line are already being analysed when the
/// window opens.
pub struct CvSleuthState {
    pub(crate) inner: AppState,
}

impl CvSleuthState {
    /// Create the state and queue `initial` documents for analysis.
    pub fn build(analyzer: Arc<Analyzer>, initial: Vec<PathBuf>) -> Self {
        let mut state = AppState::new(analyzer);
        state.start_analysis(initial);
        Self { inner: state }
    }
}

/// The CvSleuth application.
pub struct CvSleuthApp {
    state: AppState,
}

impl CvSleuthApp {
    /// Create a new application instance from pre-built state.
    pub fn with_state(cc: &eframe::CreationContext<'_>, state: CvSleuthState) -> Self {
        CvSleuthTheme::dark().apply(&cc.egui_ctx);
        Self { state: state.inner }
    }
}

impl eframe::App for CvSleuthApp {
    /// Override the GPU clear colour to match the active theme background,
    /// preventing a colour mismatch flash between frames.
    fn clear_color(&self, visuals: &egui::Visuals) -> [f32; 4] {
        let [r, g, b, a] = visuals.panel_fill.to_array();
        [
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        ]
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ── Apply theme ───────────────────────────────────────────────────
        let theme = CvSleuthTheme::for_dark_mode(self.state.dark_mode);
        theme.apply(ctx);

        // ── Dropped files ─────────────────────────────────────────────────
        let dropped: Vec<PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|f| f.path.clone())
                .collect()
        });
        self.state.handle_dropped_files(dropped);

        // ── Process background messages ───────────────────────────────────
        let _data_changed = self.state.process_batch_messages();
        if self.state.phase == AppPhase::Analysing {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        // ── Top toolbar ───────────────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .min_height(36.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                widgets::toolbar::toolbar(ui, &mut self.state);
                ui.add_space(4.0);
            });

        // ── About dialog ──────────────────────────────────────────────────
        let mut show_about = self.state.show_about;
        egui::Window::new("About CvSleuth")
            .open(&mut show_about)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .fixed_size([340.0, 0.0])
            .show(ctx, |ui| about_contents(ui));
        self.state.show_about = show_about;

        // ── Failures window ───────────────────────────────────────────────
        let mut show_errors = self.state.show_errors;
        egui::Window::new("Failed Documents")
            .open(&mut show_errors)
            .default_size([520.0, 260.0])
            .show(ctx, |ui| panels::errors_panel::errors_panel(ui, &self.state, &theme));
        self.state.show_errors = show_errors;

        // ── Bottom status bar ─────────────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .min_height(24.0)
            .show(ctx, |ui| {
                ui.add_space(2.0);
                widgets::status_bar::status_bar(ui, &mut self.state, &theme);
                ui.add_space(2.0);
            });

        // ── Left sidebar: documents ───────────────────────────────────────
        egui::SidePanel::left("documents_panel")
            .default_width(280.0)
            .min_width(200.0)
            .max_width(480.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::documents_panel::documents_panel(ui, &mut self.state, &theme);
            });

        // ── Right sidebar: summary ────────────────────────────────────────
        egui::SidePanel::right("summary_panel")
            .default_width(240.0)
            .min_width(200.0)
            .max_width(360.0)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    panels::summary_panel::summary_panel(ui, &self.state, &theme);
                });
            });

        // ── Central panel: charts ─────────────────────────────────────────
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::results_panel::results_panel(ui, &mut self.state, &theme);
        });
    }
}

fn about_contents(ui: &mut egui::Ui) {
    let accent = ui.visuals().hyperlink_color;
    let muted = ui.visuals().weak_text_color();
    let normal = ui.visuals().text_color();

    ui.vertical_centered(|ui| {
        ui.add_space(8.0);
        ui.label(
            egui::RichText::new("📄 CvSleuth")
                .size(24.0)
                .strong()
                .color(accent),
        );
        ui.add_space(4.0);
        ui.label(
            egui::RichText::new(format!("v{}", env!("CARGO_PKG_VERSION")))
                .size(13.0)
                .color(muted),
        );
        ui.add_space(12.0);
        ui.label(
            egui::RichText::new(
                "Word frequencies, keyword categories and a\n\
                 timeline of year mentions for PDF, DOCX and TXT CVs.",
            )
            .size(12.0)
            .color(normal),
        );
        ui.add_space(12.0);
        ui.separator();
        ui.add_space(8.0);
        ui.label(
            egui::RichText::new("MIT License · Built with Rust & egui")
                .size(11.0)
                .color(muted),
        );
        ui.add_space(8.0);
    });
}
