//! Utility modules for Parquet IO and logging

pub mod io;
pub mod logging;

pub use io::{read_parquet, write_parquet};
