//! Parquet file operations
//!
//! Reading input files into Arrow record batches and writing annotated
//! batches back out.

use std::fs::File;
use std::path::Path;

use arrow::datatypes::SchemaRef;
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;

use crate::config::ReaderConfig;
use crate::error::Result;
use crate::utils::logging::{log_read, log_written};

/// Read a parquet file into Arrow record batches
///
/// # Arguments
/// * `path` - Path to the Parquet file
/// * `config` - Reader settings (batch size)
///
/// # Returns
/// The file schema and its record batches
pub fn read_parquet(path: &Path, config: &ReaderConfig) -> Result<(SchemaRef, Vec<RecordBatch>)> {
    let start = std::time::Instant::now();
    log::debug!("Reading {} with batch size {}", path.display(), config.batch_size);

    let file = File::open(path)?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    let schema = builder.schema().clone();
    let reader = builder.with_batch_size(config.batch_size).build()?;

    let batches = reader.collect::<std::result::Result<Vec<_>, _>>()?;
    let rows = batches.iter().map(RecordBatch::num_rows).sum();
    log_read(path, batches.len(), rows, start.elapsed());
    Ok((schema, batches))
}

/// Write record batches to a parquet file (Snappy compressed)
///
/// `schema` is used when `batches` is empty so an empty file still carries
/// the expected columns.
///
/// # Returns
/// Number of rows written
pub fn write_parquet(path: &Path, schema: SchemaRef, batches: &[RecordBatch]) -> Result<usize> {
    let start = std::time::Instant::now();

    let schema = batches.first().map_or(schema, RecordBatch::schema);
    let props = WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build();
    let file = File::create(path)?;
    let mut writer = ArrowWriter::try_new(file, schema, Some(props))?;

    let mut rows = 0;
    for batch in batches {
        writer.write(batch)?;
        rows += batch.num_rows();
    }
    writer.close()?;

    log_written(path, rows, start.elapsed());
    Ok(rows)
}
