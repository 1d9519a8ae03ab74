//! IO utilities for file operations

pub mod parquet;

pub use parquet::{read_parquet, write_parquet};
