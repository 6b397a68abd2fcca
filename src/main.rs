//! CvSleuth: CV text analyser.
//!
//! Thin binary entry point. All logic lives in the `cvsleuth-core`
//! and `cvsleuth-gui` crates.
//!
//! With `--export` the documents are analysed headless and written out as
//! CSV and JSON; otherwise the desktop viewer opens with them queued.

use anyhow::{bail, Context};
use clap::Parser;
use cvsleuth_core::config::AnalysisConfig;
use cvsleuth_core::dictionary::CategoryDictionary;
use cvsleuth_core::export::ExportBatch;
use cvsleuth_core::worker;
use cvsleuth_core::Analyzer;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(
    name = "CvSleuth",
    version,
    about = "Word frequencies, keyword categories and year timelines for CVs."
)]
struct Cli {
    /// CV files (PDF, DOCX, TXT) or folders containing them.
    paths: Vec<PathBuf>,

    /// Analyse without opening a window and write exports into DIR.
    #[arg(long, value_name = "DIR")]
    export: Option<PathBuf>,

    /// JSON analysis configuration.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Keyword category dictionary as JSON (overrides the config file).
    #[arg(long, value_name = "FILE")]
    dictionary: Option<PathBuf>,

    /// Number of top words to keep (overrides the config file).
    #[arg(long, value_name = "N")]
    top: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let cli = Cli::parse();
    tracing::info!("CvSleuth starting");

    let analyzer = Arc::new(build_analyzer(
        cli.config.as_deref(),
        cli.dictionary.as_deref(),
        cli.top,
    )?);

    match cli.export {
        Some(dir) => run_headless(&cli.paths, &dir, &analyzer),
        None => run_gui(cli.paths, analyzer),
    }
}

fn build_analyzer(
    config_path: Option<&Path>,
    dictionary_path: Option<&Path>,
    top: Option<usize>,
) -> anyhow::Result<Analyzer> {
    let mut config = match config_path {
        Some(path) => AnalysisConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => AnalysisConfig::default(),
    };
    if let Some(n) = top {
        config.top_n = n;
    }
    let analyzer = match dictionary_path {
        Some(path) => {
            let dictionary = CategoryDictionary::load(path)
                .with_context(|| format!("loading dictionary {}", path.display()))?;
            tracing::info!(
                "Using {} categories ({} keywords) from {}",
                dictionary.len(),
                dictionary.keyword_count(),
                path.display()
            );
            Analyzer::new(config, Arc::new(dictionary))
        }
        None => Analyzer::from_config(config),
    };
    analyzer.context("invalid analysis configuration")
}

fn run_headless(inputs: &[PathBuf], dir: &Path, analyzer: &Analyzer) -> anyhow::Result<()> {
    if inputs.is_empty() {
        bail!("--export needs at least one document or folder");
    }
    let paths = worker::expand_inputs(inputs);
    if paths.is_empty() {
        bail!("no PDF, DOCX or TXT documents found");
    }

    let (documents, failures) = worker::analyze_all(&paths, analyzer);
    let mut batch = ExportBatch::new(dir);
    for doc in &documents {
        let files = batch
            .export(&doc.report)
            .with_context(|| format!("exporting {}", doc.path.display()))?;
        tracing::info!(
            "{} → {} ({} words)",
            doc.path.display(),
            files.report.display(),
            doc.report.summary.total_words
        );
    }
    for failure in &failures {
        tracing::error!(
            "{} failed at {}: {}",
            failure.path.display(),
            failure.stage.label(),
            failure.message
        );
    }

    tracing::info!(
        "Exported {} of {} documents to {}",
        documents.len(),
        paths.len(),
        dir.display()
    );
    if !failures.is_empty() {
        bail!("{} of {} documents failed", failures.len(), paths.len());
    }
    Ok(())
}

fn run_gui(initial: Vec<PathBuf>, analyzer: Arc<Analyzer>) -> anyhow::Result<()> {
    let icon = cvsleuth_gui::icon::generate_icon(64);

    // Build state before opening the window so the first frame already
    // shows the queued batch.
    let state = cvsleuth_gui::CvSleuthState::build(analyzer, initial);

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("CvSleuth -- CV Analyser")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 500.0])
            .with_icon(icon)
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "CvSleuth",
        options,
        Box::new(|cc| Ok(Box::new(cvsleuth_gui::CvSleuthApp::with_state(cc, state)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}
