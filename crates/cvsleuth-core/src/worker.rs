/// Background batch analysis.
///
/// A batch runs on its own thread and fans documents out over rayon's
/// global pool. Each document is an independent pipeline run; the only
/// state shared between runs is the read-only [`Analyzer`].
///
/// Finished reports are appended to a **shared `LiveResults`**
/// (`Arc<RwLock<Vec<AnalysedDocument>>>`) so the viewer can list documents
/// as they complete. Progress messages carry only lightweight status.
use crate::error::DocumentFailure;
use crate::loader::DocumentFormat;
use crate::pipeline::Analyzer;
use crate::report::AnalysisReport;
use crossbeam_channel::{Receiver, Sender};
use parking_lot::RwLock;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// A report together with the file it came from.
#[derive(Debug, Clone)]
pub struct AnalysedDocument {
    pub path: PathBuf,
    pub report: AnalysisReport,
}

/// Reports shared between the batch thread and the viewer.
///
/// The batch holds the write lock only to push one finished report.
pub type LiveResults = Arc<RwLock<Vec<AnalysedDocument>>>;

/// Progress updates sent from the batch thread to the UI.
#[derive(Debug)]
pub enum BatchProgress {
    /// The batch has started; `total` documents are queued.
    Started { total: usize },
    /// One document was analysed and its report pushed to `LiveResults`.
    Analysed { path: PathBuf, elapsed: Duration },
    /// One document failed. The rest of the batch continues.
    Failed(DocumentFailure),
    /// Every document was processed.
    Complete {
        duration: Duration,
        analysed: usize,
        failed: usize,
    },
    /// The batch was cancelled; results so far remain in `LiveResults`.
    Cancelled,
}

/// Maximum number of progress messages that may queue up in the channel.
///
/// A full channel blocks the rayon workers until the UI drains it.
pub const PROGRESS_CHANNEL_CAPACITY: usize = 1_024;

/// Handle to a running or completed batch.
pub struct BatchHandle {
    pub progress_rx: Receiver<BatchProgress>,
    pub results: LiveResults,
    cancel_flag: Arc<AtomicBool>,
    _thread: Option<thread::JoinHandle<()>>,
}

impl BatchHandle {
    /// Stop before the next document starts. Documents already being
    /// analysed run to completion.
    pub fn cancel(&self) {
        self.cancel_flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_flag.load(Ordering::Relaxed)
    }
}

/// Analyse `paths` on a background thread.
pub fn start_batch(paths: Vec<PathBuf>, analyzer: Arc<Analyzer>) -> std::io::Result<BatchHandle> {
    let (progress_tx, progress_rx) =
        crossbeam_channel::bounded::<BatchProgress>(PROGRESS_CHANNEL_CAPACITY);
    let cancel_flag = Arc::new(AtomicBool::new(false));
    let cancel_clone = cancel_flag.clone();

    let results: LiveResults = Arc::new(RwLock::new(Vec::with_capacity(paths.len())));
    let results_clone = results.clone();

    let thread = thread::Builder::new()
        .name("cvsleuth-batch".into())
        .spawn(move || {
            run_batch(paths, &analyzer, &progress_tx, &cancel_clone, &results_clone);
        })?;

    Ok(BatchHandle {
        progress_rx,
        results,
        cancel_flag,
        _thread: Some(thread),
    })
}

fn run_batch(
    paths: Vec<PathBuf>,
    analyzer: &Analyzer,
    progress_tx: &Sender<BatchProgress>,
    cancel_flag: &AtomicBool,
    results: &LiveResults,
) {
    let start = Instant::now();
    info!("Starting batch of {} documents", paths.len());
    let _ = progress_tx.send(BatchProgress::Started { total: paths.len() });

    let failed: usize = paths
        .par_iter()
        .map_with(progress_tx.clone(), |tx, path| {
            if cancel_flag.load(Ordering::Relaxed) {
                return 0;
            }
            let doc_start = Instant::now();
            match analyzer.analyze_path(path) {
                Ok(report) => {
                    results.write().push(AnalysedDocument {
                        path: path.clone(),
                        report,
                    });
                    let _ = tx.send(BatchProgress::Analysed {
                        path: path.clone(),
                        elapsed: doc_start.elapsed(),
                    });
                    0
                }
                Err(err) => {
                    let failure = DocumentFailure::new(path, &err);
                    warn!("{failure}");
                    let _ = tx.send(BatchProgress::Failed(failure));
                    1
                }
            }
        })
        .sum();

    if cancel_flag.load(Ordering::Relaxed) {
        info!("Batch cancelled after {:.1?}", start.elapsed());
        let _ = progress_tx.send(BatchProgress::Cancelled);
        return;
    }

    let analysed = {
        let mut guard = results.write();
        guard.sort_by(|a, b| a.path.cmp(&b.path));
        guard.len()
    };
    let duration = start.elapsed();
    info!("Batch complete in {duration:.1?}: {analysed} analysed, {failed} failed");
    let _ = progress_tx.send(BatchProgress::Complete {
        duration,
        analysed,
        failed,
    });
}

/// Analyse `paths` in parallel on the calling thread and wait for all of them.
///
/// Successes are sorted by path; failures keep input order.
pub fn analyze_all(
    paths: &[PathBuf],
    analyzer: &Analyzer,
) -> (Vec<AnalysedDocument>, Vec<DocumentFailure>) {
    let outcomes: Vec<_> = paths
        .par_iter()
        .map(|path| {
            analyzer
                .analyze_path(path)
                .map(|report| AnalysedDocument {
                    path: path.clone(),
                    report,
                })
                .map_err(|err| DocumentFailure::new(path, &err))
        })
        .collect();

    let mut analysed = Vec::new();
    let mut failures = Vec::new();
    for outcome in outcomes {
        match outcome {
            Ok(doc) => analysed.push(doc),
            Err(failure) => failures.push(failure),
        }
    }
    analysed.sort_by(|a, b| a.path.cmp(&b.path));
    (analysed, failures)
}

/// Every supported document under `root`, sorted by path.
pub fn collect_documents(root: &Path) -> Vec<PathBuf> {
    let walker = jwalk::WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(false)
        .parallelism(jwalk::Parallelism::RayonNewPool(num_cpus::get()));

    let mut found: Vec<PathBuf> = walker
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!("Skipping unreadable entry: {err}");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path())
        .filter(|path| DocumentFormat::is_supported_path(path))
        .collect();
    found.sort();
    found
}

/// Expand a mix of files and folders into the documents to analyse.
///
/// Files are kept as given (unsupported ones fail later with a clear
/// error); folders contribute their supported documents.
pub fn expand_inputs(inputs: &[PathBuf]) -> Vec<PathBuf> {
    let mut out = Vec::new();
    for input in inputs {
        if input.is_dir() {
            out.extend(collect_documents(input));
        } else {
            out.push(input.clone());
        }
    }
    out
}
