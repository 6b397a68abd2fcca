/// UI widgets for CvSleuth.

pub mod bar_chart;
pub mod line_chart;
pub mod status_bar;
pub mod toolbar;
pub mod word_cloud;
