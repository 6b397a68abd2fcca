/// CvSleuth GUI: egui-based desktop frontend.
///
/// This crate contains all UI code. Analysis lives in `cvsleuth-core`.
pub mod app;
pub mod icon;
pub mod panels;
pub mod state;
pub mod theme;
pub mod widgets;

pub use app::{CvSleuthApp, CvSleuthState};
