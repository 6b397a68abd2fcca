/// Application state management.
///
/// Centralises all mutable state that the UI reads and writes.
/// The batch thread communicates via a channel; state updates happen
/// in `process_batch_messages()` which runs once per frame.
///
/// While a batch runs, finished reports are merged in from the shared
/// `LiveResults` so documents appear in the list as soon as they are done.
use anyhow::Context;
use cvsleuth_core::error::DocumentFailure;
use cvsleuth_core::export::{export_report, ExportBatch, ExportedFiles};
use cvsleuth_core::worker::{self, AnalysedDocument, BatchHandle, BatchProgress};
use cvsleuth_core::Analyzer;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// The current phase of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppPhase {
    /// Nothing analysed yet.
    Idle,
    /// A batch is running; the document list grows as reports arrive.
    Analysing,
    /// The last batch finished (or was stopped); results are available.
    Results,
}

/// Which chart the central panel shows for the selected document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultView {
    TopWords,
    WordCloud,
    Keywords,
    Timeline,
}

impl ResultView {
    pub const ALL: [ResultView; 4] = [
        Self::TopWords,
        Self::WordCloud,
        Self::Keywords,
        Self::Timeline,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::TopWords => "Top Words",
            Self::WordCloud => "Word Cloud",
            Self::Keywords => "Keywords",
            Self::Timeline => "Timeline",
        }
    }
}

/// Maximum number of batch-progress messages drained from the channel per frame.
///
/// Prevents a backlog (e.g. after the window was hidden) from blocking the
/// render thread when it is eventually shown again.
const MAX_MESSAGES_PER_FRAME: usize = 300;

/// Maximum failures kept for the errors window.
pub const MAX_FAILURES: usize = 1_000;

/// All application state.
pub struct AppState {
    pub analyzer: Arc<Analyzer>,

    // ── Input ──────────────────────────────────────────
    /// Contents of the path text box.
    pub path_input: String,
    /// Paths submitted while a batch was running; started when it ends.
    pub pending: Vec<PathBuf>,

    // ── Batch ──────────────────────────────────────────
    pub phase: AppPhase,
    pub batch_handle: Option<BatchHandle>,
    pub batch_total: usize,
    pub batch_done: usize,
    pub batch_failed: usize,
    pub batch_duration: Option<Duration>,
    /// True if the most recent batch was cancelled (partial results).
    pub batch_was_cancelled: bool,
    /// Number of live results already merged into `documents`.
    live_merged: usize,

    // ── Results ────────────────────────────────────────
    /// Every analysed document, sorted by path.
    pub documents: Vec<AnalysedDocument>,
    pub selected: Option<PathBuf>,
    pub failures: Vec<DocumentFailure>,

    // ── Export ─────────────────────────────────────────
    pub export_dir: PathBuf,
    /// Last export outcome, shown in the status bar.
    pub export_message: Option<Result<String, String>>,

    // ── UI state ───────────────────────────────────────
    pub view: ResultView,
    pub show_errors: bool,
    pub show_about: bool,
    /// `true` = dark mode (default), `false` = light mode.
    pub dark_mode: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(Analyzer::with_defaults()))
    }
}

impl AppState {
    /// Create initial application state around a configured analyser.
    pub fn new(analyzer: Arc<Analyzer>) -> Self {
        Self {
            analyzer,
            path_input: String::new(),
            pending: Vec::new(),
            phase: AppPhase::Idle,
            batch_handle: None,
            batch_total: 0,
            batch_done: 0,
            batch_failed: 0,
            batch_duration: None,
            batch_was_cancelled: false,
            live_merged: 0,
            documents: Vec::new(),
            selected: None,
            failures: Vec::new(),
            export_dir: PathBuf::from("cvsleuth-export"),
            export_message: None,
            view: ResultView::TopWords,
            show_errors: false,
            show_about: false,
            dark_mode: true,
        }
    }

    /// Analyse files and/or folders. Folders are expanded to the supported
    /// documents they contain. If a batch is already running the paths are
    /// queued and started when it finishes.
    pub fn start_analysis(&mut self, inputs: Vec<PathBuf>) {
        if inputs.is_empty() {
            return;
        }
        if self.phase == AppPhase::Analysing {
            self.pending.extend(inputs);
            return;
        }

        let paths = worker::expand_inputs(&inputs);
        if paths.is_empty() {
            tracing::warn!("No supported documents found in {} inputs", inputs.len());
            self.export_message = Some(Err("No PDF, DOCX or TXT documents found".into()));
            return;
        }

        self.batch_total = paths.len();
        self.batch_done = 0;
        self.batch_failed = 0;
        self.batch_duration = None;
        self.batch_was_cancelled = false;
        self.live_merged = 0;

        match worker::start_batch(paths, Arc::clone(&self.analyzer)) {
            Ok(handle) => {
                self.phase = AppPhase::Analysing;
                self.batch_handle = Some(handle);
            }
            Err(e) => {
                tracing::error!("Could not start batch thread: {e}");
                self.export_message = Some(Err(format!("Could not start analysis: {e}")));
            }
        }
    }

    /// Analyse the path typed into the path box.
    pub fn submit_path_input(&mut self) {
        let trimmed = self.path_input.trim().trim_matches('"');
        if trimmed.is_empty() {
            return;
        }
        let path = PathBuf::from(trimmed);
        self.path_input.clear();
        self.start_analysis(vec![path]);
    }

    /// Analyse files dropped onto the window.
    pub fn handle_dropped_files(&mut self, dropped: Vec<PathBuf>) {
        if !dropped.is_empty() {
            tracing::info!("{} files dropped", dropped.len());
            self.start_analysis(dropped);
        }
    }

    /// Cancel any running batch. Queued paths are discarded.
    pub fn cancel_analysis(&mut self) {
        self.pending.clear();
        if let Some(ref handle) = self.batch_handle {
            handle.cancel();
        }
    }

    /// Process pending batch progress messages. Called once per frame.
    ///
    /// Returns `true` if the UI should repaint (new data arrived).
    pub fn process_batch_messages(&mut self) -> bool {
        let mut repaint = self.merge_live_results();

        let handle = match &self.batch_handle {
            Some(h) => h,
            None => return repaint,
        };

        let mut finished = false;
        let mut messages_this_frame = 0usize;
        while messages_this_frame < MAX_MESSAGES_PER_FRAME {
            let msg = match handle.progress_rx.try_recv() {
                Ok(m) => m,
                Err(_) => break,
            };
            messages_this_frame += 1;
            repaint = true;
            match msg {
                BatchProgress::Started { total } => {
                    self.batch_total = total;
                }
                BatchProgress::Analysed { .. } => {
                    self.batch_done += 1;
                }
                BatchProgress::Failed(failure) => {
                    self.batch_done += 1;
                    self.batch_failed += 1;
                    if self.failures.len() < MAX_FAILURES {
                        self.failures.push(failure);
                    }
                }
                BatchProgress::Complete { duration, .. } => {
                    self.batch_duration = Some(duration);
                    finished = true;
                    break;
                }
                BatchProgress::Cancelled => {
                    self.batch_was_cancelled = true;
                    finished = true;
                    break;
                }
            }
        }

        if finished {
            // The worker sorts its results on completion, so re-read them all.
            self.live_merged = 0;
            self.merge_live_results();
            self.batch_handle = None;
            self.phase = AppPhase::Results;

            let queued = std::mem::take(&mut self.pending);
            if !queued.is_empty() {
                self.start_analysis(queued);
            }
        }
        repaint
    }

    /// Copy newly finished reports from the live results into `documents`.
    fn merge_live_results(&mut self) -> bool {
        let Some(handle) = &self.batch_handle else {
            return false;
        };
        let fresh: Vec<AnalysedDocument> = {
            let live = handle.results.read();
            if live.len() <= self.live_merged {
                return false;
            }
            live[self.live_merged..].to_vec()
        };
        self.live_merged += fresh.len();

        for doc in fresh {
            match self.documents.iter_mut().find(|d| d.path == doc.path) {
                Some(existing) => *existing = doc,
                None => self.documents.push(doc),
            }
        }
        self.documents.sort_by(|a, b| a.path.cmp(&b.path));

        if self.selected.is_none() {
            self.selected = self.documents.first().map(|d| d.path.clone());
        }
        true
    }

    /// The document currently shown in the result panels.
    pub fn selected_document(&self) -> Option<&AnalysedDocument> {
        let selected = self.selected.as_ref()?;
        self.documents.iter().find(|d| &d.path == selected)
    }

    pub fn select(&mut self, path: &Path) {
        self.selected = Some(path.to_path_buf());
    }

    /// Remove one document from the list.
    pub fn remove_document(&mut self, path: &Path) {
        self.documents.retain(|d| d.path != path);
        if self.selected.as_deref() == Some(path) {
            self.selected = self.documents.first().map(|d| d.path.clone());
        }
    }

    /// Forget all results and failures.
    pub fn clear_results(&mut self) {
        self.documents.clear();
        self.failures.clear();
        self.selected = None;
        self.export_message = None;
        if self.phase == AppPhase::Results {
            self.phase = AppPhase::Idle;
        }
    }

    /// Export the selected document's CSV tables and JSON report.
    pub fn export_selected(&mut self) -> anyhow::Result<ExportedFiles> {
        let result = self.try_export_selected();
        self.export_message = Some(match &result {
            Ok(files) => Ok(format!("Exported to {}", parent_display(&files.words))),
            Err(e) => Err(format!("{e:#}")),
        });
        result
    }

    fn try_export_selected(&self) -> anyhow::Result<ExportedFiles> {
        let doc = self
            .selected_document()
            .context("no document is selected")?;
        export_report(&doc.report, &self.export_dir)
            .with_context(|| format!("exporting {}", doc.path.display()))
    }

    /// Export every analysed document. Returns the number exported.
    pub fn export_all(&mut self) -> anyhow::Result<usize> {
        let mut batch = ExportBatch::new(&self.export_dir);
        let result = self
            .documents
            .iter()
            .try_for_each(|doc| {
                batch
                    .export(&doc.report)
                    .map(|_| ())
                    .with_context(|| format!("exporting {}", doc.path.display()))
            })
            .map(|()| self.documents.len());
        self.export_message = Some(match &result {
            Ok(n) => Ok(format!(
                "Exported {n} documents to {}",
                self.export_dir.display()
            )),
            Err(e) => Err(format!("{e:#}")),
        });
        result
    }
}

fn parent_display(path: &Path) -> String {
    path.parent()
        .map(|p| p.display().to_string())
        .unwrap_or_default()
}
