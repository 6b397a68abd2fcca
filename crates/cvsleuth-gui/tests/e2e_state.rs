/// End-to-end tests for `AppState`, the GUI application state machine.
///
/// These drive the real batch worker against temp files without opening a
/// window, so every transition the toolbar and panels rely on is covered:
///   - batch lifecycle (start, live merge, completion, cancellation)
///   - failures and the failures list
///   - queuing while a batch runs
///   - selection, removal, clearing
///   - export of one or all documents
use cvsleuth_core::error::Stage;
use cvsleuth_gui::state::{AppPhase, AppState};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;

// ── Helpers ───────────────────────────────────────────────────────────────────

const CV_A: &str = "Alice Smith\nRust and Python developer since 2015.\nKubernetes, Docker, AWS.\n";
const CV_B: &str = "Bob Jones\nJava developer 2010-2020. SQL and Git.\nLed a team of five.\n";

fn write_cv(dir: &Path, name: &str, text: &str) {
    fs::write(dir.join(name), text).unwrap();
}

/// Two readable CVs in a temp directory.
fn make_cv_dir() -> TempDir {
    let tmp = TempDir::new().unwrap();
    write_cv(tmp.path(), "alice.txt", CV_A);
    write_cv(tmp.path(), "bob.txt", CV_B);
    tmp
}

/// Pump `process_batch_messages()` until the phase leaves `Analysing` or
/// the deadline expires.
fn pump_until_done(state: &mut AppState) {
    let deadline = std::time::Instant::now() + Duration::from_secs(30);
    while state.phase == AppPhase::Analysing {
        assert!(
            std::time::Instant::now() < deadline,
            "batch did not complete within 30 seconds"
        );
        state.process_batch_messages();
        std::thread::sleep(Duration::from_millis(10));
    }
}

fn file_names(state: &AppState) -> Vec<String> {
    state
        .documents
        .iter()
        .map(|d| d.path.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

// ── Batch lifecycle ───────────────────────────────────────────────────────────

#[test]
fn start_analysis_sets_analysing_phase() {
    let tmp = make_cv_dir();
    let mut state = AppState::default();
    state.start_analysis(vec![tmp.path().to_path_buf()]);
    assert_eq!(state.phase, AppPhase::Analysing);
    assert_eq!(state.batch_total, 2);
}

#[test]
fn batch_completes_with_sorted_documents_and_a_selection() {
    let tmp = make_cv_dir();
    let mut state = AppState::default();
    state.start_analysis(vec![tmp.path().to_path_buf()]);
    pump_until_done(&mut state);

    assert_eq!(state.phase, AppPhase::Results);
    assert!(state.batch_handle.is_none());
    assert_eq!(state.batch_done, 2);
    assert_eq!(state.batch_failed, 0);
    assert!(state.batch_duration.is_some());
    assert_eq!(file_names(&state), vec!["alice.txt", "bob.txt"]);

    let selected = state.selected_document().expect("first document is selected");
    assert_eq!(selected.report.source, "alice.txt");
    assert!(selected.report.summary.total_words > 0);
    assert_eq!(selected.report.years.get(&2015), Some(&1));
}

#[test]
fn unreadable_document_is_listed_as_a_failure() {
    let tmp = make_cv_dir();
    fs::write(tmp.path().join("broken.txt"), [0xff, 0xfe, 0x00, 0xc3]).unwrap();

    let mut state = AppState::default();
    state.start_analysis(vec![tmp.path().to_path_buf()]);
    pump_until_done(&mut state);

    assert_eq!(state.documents.len(), 2);
    assert_eq!(state.batch_failed, 1);
    assert_eq!(state.failures.len(), 1);
    assert_eq!(state.failures[0].stage, Stage::Extract);
    assert!(state.failures[0].path.ends_with("broken.txt"));
}

#[test]
fn cancel_leaves_analysing_phase() {
    let tmp = make_cv_dir();
    let mut state = AppState::default();
    state.start_analysis(vec![tmp.path().to_path_buf()]);
    state.cancel_analysis();
    pump_until_done(&mut state);

    // The batch may finish before the flag is seen; either way it must end.
    assert_eq!(state.phase, AppPhase::Results);
    assert!(state.pending.is_empty());
}

#[test]
fn paths_submitted_while_analysing_are_queued_then_run() {
    let first = make_cv_dir();
    let second = TempDir::new().unwrap();
    write_cv(second.path(), "carol.txt", "Carol\nGo and Terraform since 2021.\n");

    let mut state = AppState::default();
    state.start_analysis(vec![first.path().to_path_buf()]);
    state.start_analysis(vec![second.path().to_path_buf()]);
    assert_eq!(state.pending.len(), 1);

    pump_until_done(&mut state);

    assert!(state.pending.is_empty());
    assert_eq!(state.documents.len(), 3);
    assert!(file_names(&state).contains(&"carol.txt".to_string()));
}

#[test]
fn reanalysing_a_document_replaces_it() {
    let tmp = make_cv_dir();
    let mut state = AppState::default();
    state.start_analysis(vec![tmp.path().to_path_buf()]);
    pump_until_done(&mut state);

    write_cv(tmp.path(), "alice.txt", "Alice Smith\nNow a Haskell developer.\n");
    state.start_analysis(vec![tmp.path().join("alice.txt")]);
    pump_until_done(&mut state);

    assert_eq!(state.documents.len(), 2);
    let alice = &state.documents[0].report;
    assert!(alice.top_words.iter().any(|w| w.word == "haskell"));
    assert!(alice.years.is_empty());
}

#[test]
fn folder_without_documents_reports_an_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("photo.png"), [0u8; 16]).unwrap();

    let mut state = AppState::default();
    state.start_analysis(vec![tmp.path().to_path_buf()]);

    assert_eq!(state.phase, AppPhase::Idle);
    assert!(matches!(state.export_message, Some(Err(_))));
}

// ── Input paths ───────────────────────────────────────────────────────────────

#[test]
fn path_input_is_trimmed_and_cleared() {
    let tmp = make_cv_dir();
    let mut state = AppState::default();
    state.path_input = format!("  \"{}\"  ", tmp.path().display());
    state.submit_path_input();

    assert!(state.path_input.is_empty());
    assert_eq!(state.phase, AppPhase::Analysing);
    pump_until_done(&mut state);
    assert_eq!(state.documents.len(), 2);
}

#[test]
fn dropped_files_start_a_batch() {
    let tmp = make_cv_dir();
    let mut state = AppState::default();

    state.handle_dropped_files(Vec::new());
    assert_eq!(state.phase, AppPhase::Idle);

    state.handle_dropped_files(vec![tmp.path().join("bob.txt")]);
    assert_eq!(state.phase, AppPhase::Analysing);
    pump_until_done(&mut state);
    assert_eq!(file_names(&state), vec!["bob.txt"]);
}

// ── Selection ─────────────────────────────────────────────────────────────────

#[test]
fn removing_the_selection_selects_the_next_document() {
    let tmp = make_cv_dir();
    let mut state = AppState::default();
    state.start_analysis(vec![tmp.path().to_path_buf()]);
    pump_until_done(&mut state);

    let alice = tmp.path().join("alice.txt");
    let bob = tmp.path().join("bob.txt");
    state.select(&alice);
    state.remove_document(&alice);

    assert_eq!(state.documents.len(), 1);
    assert_eq!(state.selected.as_deref(), Some(bob.as_path()));

    state.clear_results();
    assert_eq!(state.phase, AppPhase::Idle);
    assert!(state.selected_document().is_none());
}

// ── Export ────────────────────────────────────────────────────────────────────

#[test]
fn export_selected_writes_all_files() {
    let tmp = make_cv_dir();
    let out = TempDir::new().unwrap();
    let mut state = AppState::default();
    state.export_dir = out.path().join("exports");
    state.start_analysis(vec![tmp.path().to_path_buf()]);
    pump_until_done(&mut state);

    let files = state.export_selected().expect("export succeeds");
    for path in files.all() {
        assert!(path.is_file(), "{} was not written", path.display());
    }
    assert!(files.words.ends_with("alice_words.csv"));
    assert!(matches!(state.export_message, Some(Ok(_))));
}

#[test]
fn export_without_selection_fails_with_message() {
    let mut state = AppState::default();
    assert!(state.export_selected().is_err());
    assert!(matches!(state.export_message, Some(Err(_))));
}

#[test]
fn export_all_writes_one_report_per_document() {
    let tmp = make_cv_dir();
    let out = TempDir::new().unwrap();
    let mut state = AppState::default();
    state.export_dir = out.path().to_path_buf();
    state.start_analysis(vec![tmp.path().to_path_buf()]);
    pump_until_done(&mut state);

    assert_eq!(state.export_all().unwrap(), 2);
    assert!(out.path().join("alice_report.json").is_file());
    assert!(out.path().join("bob_report.json").is_file());
}

#[test]
fn export_all_keeps_documents_with_the_same_stem_apart() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    write_cv(first.path(), "jane.txt", "Jane\nPython python and Rust.\n");
    write_cv(second.path(), "jane.txt", "Jane\nJava only.\n");
    let out = TempDir::new().unwrap();

    let mut state = AppState::default();
    state.export_dir = out.path().to_path_buf();
    state.start_analysis(vec![first.path().to_path_buf(), second.path().to_path_buf()]);
    pump_until_done(&mut state);
    assert_eq!(state.documents.len(), 2);

    assert_eq!(state.export_all().unwrap(), 2);
    let plain = fs::read_to_string(out.path().join("jane_words.csv")).unwrap();
    let suffixed = fs::read_to_string(out.path().join("jane_2_words.csv")).unwrap();
    assert_ne!(plain, suffixed);
    assert!(out.path().join("jane_2_report.json").is_file());
}
