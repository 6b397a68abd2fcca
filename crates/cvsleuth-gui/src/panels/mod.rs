/// UI panels for CvSleuth.

pub mod documents_panel;
pub mod errors_panel;
pub mod results_panel;
pub mod summary_panel;
