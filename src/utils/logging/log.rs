//! Run logging: file reads and writes, and what the classifier did with the rows

use std::path::Path;
use std::time::Duration;

use crate::annotate::AnnotationSummary;
use crate::classify::name_of;

/// Log a finished Parquet read
pub fn log_read(path: &Path, batches: usize, rows: usize, elapsed: Duration) {
    if rows == 0 {
        log::warn!("{} contains no rows", path.display());
    }
    log::info!(
        "Read {rows} firm rows in {batches} batches from {} in {elapsed:?}",
        path.display()
    );
}

/// Log a finished Parquet write
pub fn log_written(path: &Path, rows: usize, elapsed: Duration) {
    log::info!(
        "Wrote {rows} annotated rows to {} in {elapsed:?}",
        path.display()
    );
}

/// Log how rows were spread over the scheme's industries.
///
/// Rows with a missing or non-numeric SIC are reported as a warning; the
/// per-industry breakdown goes to `debug`.
pub fn log_annotation_summary(summary: &AnnotationSummary, elapsed: Duration) {
    let scheme = summary.scheme;
    log::info!(
        "Classified {} of {} rows into {scheme} industries in {elapsed:?} ({} in catch-all)",
        summary.classified(),
        summary.rows,
        summary.catch_all()
    );
    if summary.missing > 0 {
        log::warn!(
            "{} of {} rows have no usable SIC code and were left unclassified",
            summary.missing,
            summary.rows
        );
    }
    for (code, count) in (1u8..).zip(&summary.counts) {
        let label = name_of(code, scheme).unwrap_or("?");
        log::debug!("{scheme} {code:>2} {label:<6} {count}");
    }
}
