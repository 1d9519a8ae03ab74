use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use ff_industry::utils::logging::{
    create_main_progress_bar, finish_progress_bar, log_annotation_summary,
};
use ff_industry::utils::{read_parquet, write_parquet};
use ff_industry::{FileConfig, IndustryAnnotator, RecordBatch, Scheme};
use log::info;

#[global_allocator]
static ALLOC: snmalloc_rs::SnMalloc = snmalloc_rs::SnMalloc;

#[derive(Parser)]
#[command(name = "ff-industry")]
#[command(about = "Assign Fama-French industry codes to SIC codes in a Parquet file")]
struct Cli {
    /// Input Parquet file
    #[arg(long, required_unless_present = "list_columns")]
    input: Option<PathBuf>,

    /// Output Parquet file
    #[arg(long, required_unless_present = "list_columns")]
    output: Option<PathBuf>,

    /// Industry scheme: 5, 12 or 38 (also accepts ff12 etc.)
    #[arg(long)]
    scheme: Option<Scheme>,

    /// JSON config file; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Column holding the SIC code
    #[arg(long)]
    sic_column: Option<String>,

    /// Column receiving the industry code
    #[arg(long)]
    code_column: Option<String>,

    /// Prefix for indicator columns
    #[arg(long)]
    prefix: Option<String>,

    /// Rows per record batch when reading
    #[arg(long)]
    batch_size: Option<usize>,

    /// Worker threads (defaults to the number of CPUs)
    #[arg(long)]
    threads: Option<usize>,

    /// Print the indicator column names for the scheme and exit
    #[arg(long)]
    list_columns: bool,
}

fn main() -> Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut file_config = match &cli.config {
        Some(path) => FileConfig::from_path(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => FileConfig::default(),
    };
    let scheme = cli.scheme.or(file_config.scheme).unwrap_or(Scheme::Ff12);
    if let Some(sic_column) = cli.sic_column {
        file_config.annotator.sic_column = sic_column;
    }
    if let Some(code_column) = cli.code_column {
        file_config.annotator.code_column = code_column;
    }
    if let Some(prefix) = cli.prefix {
        file_config.annotator.indicator_prefix = prefix;
    }
    if let Some(batch_size) = cli.batch_size.filter(|&n| n > 0) {
        file_config.reader.batch_size = batch_size;
    }

    let annotator = IndustryAnnotator::for_scheme(scheme, file_config.annotator)
        .with_context(|| format!("Failed to initialise {scheme} classifier"))?;

    if cli.list_columns {
        println!("{}", annotator.indicator_columns().join(" "));
        return Ok(());
    }

    let (Some(input), Some(output)) = (cli.input, cli.output) else {
        anyhow::bail!("--input and --output are required");
    };

    let threads = cli.threads.unwrap_or_else(num_cpus::get);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .context("Failed to configure thread pool")?;

    let start = Instant::now();
    let (schema, batches) = read_parquet(&input, &file_config.reader)
        .with_context(|| format!("Failed to read {}", input.display()))?;

    let mode = if annotator.config().parallel {
        format!("on {threads} threads")
    } else {
        "sequentially".to_string()
    };
    info!(
        "Classifying {} rows into {scheme} industries {mode}",
        batches.iter().map(RecordBatch::num_rows).sum::<usize>()
    );
    let annotate_start = Instant::now();
    let pb = create_main_progress_bar(batches.len() as u64, Some("Annotating batches"));
    let annotated = annotator
        .annotate_batches_with_progress(&batches, &pb)
        .context("Failed to annotate batches")?;
    finish_progress_bar(&pb, Some("done"));
    log_annotation_summary(&annotator.summarize(&annotated)?, annotate_start.elapsed());

    // Empty input still gets the output columns in its schema
    let empty = RecordBatch::new_empty(schema);
    let out_schema = annotator.annotate_batch(&empty)?.schema();
    write_parquet(&output, out_schema, &annotated)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    info!("Finished in {:?}", start.elapsed());
    Ok(())
}
