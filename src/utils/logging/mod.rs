//! Logging utilities for output and progress tracking

pub mod log;
pub mod progress;

pub use log::{log_annotation_summary, log_read, log_written};
pub use progress::{create_main_progress_bar, finish_progress_bar};
