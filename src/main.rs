use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, warn, Level};
use tracing_subscriber::EnvFilter;

use engagement::config::DEFAULT_INSTRUCTOR_FILE;
use engagement::{
    default_report_path, execute_catalog, execute_report, Aggregator, CatalogConfig,
    DateResolver, DocumentReader, DocxReader, InstructorConfig, PlainTextReader, ReportConfig,
};

#[derive(Parser)]
#[command(name = "engagement")]
#[command(author, version, about = "Per-date speaker intervention counts from meeting transcripts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Word documents
    Docx,
    /// Plain text, one paragraph per line
    Txt,
}

#[derive(Subcommand)]
enum Commands {
    /// Count interventions per date and speaker and write the summary table
    Count {
        /// Folder containing the transcripts
        folder: PathBuf,

        /// Only files whose name starts with this prefix
        #[arg(long, default_value = "Week ")]
        prefix: String,

        /// Transcript document format
        #[arg(long, value_enum, default_value = "docx")]
        format: Format,

        /// File holding the instructor's display name
        #[arg(long, default_value = DEFAULT_INSTRUCTOR_FILE)]
        instructor_file: PathBuf,

        /// CSV output path (defaults to engagement_summary.csv in the folder)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also write a JSON summary with run metadata
        #[arg(long)]
        json: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show the date resolved for each transcript without counting
    Dates {
        /// Folder containing the transcripts
        folder: PathBuf,

        /// Only files whose name starts with this prefix
        #[arg(long, default_value = "Week ")]
        prefix: String,

        /// Transcript document format
        #[arg(long, value_enum, default_value = "docx")]
        format: Format,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Count {
            folder,
            prefix,
            format,
            instructor_file,
            output,
            json,
            verbose,
        } => {
            setup_logging(verbose);
            count_interventions(folder, prefix, format, instructor_file, output, json)
        }
        Commands::Dates {
            folder,
            prefix,
            format,
            verbose,
        } => {
            setup_logging(verbose);
            show_dates(folder, prefix, format)
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn reader_for(format: Format) -> Box<dyn DocumentReader> {
    match format {
        Format::Docx => Box::new(DocxReader),
        Format::Txt => Box::new(PlainTextReader),
    }
}

fn count_interventions(
    folder: PathBuf,
    prefix: String,
    format: Format,
    instructor_file: PathBuf,
    output: Option<PathBuf>,
    json: Option<PathBuf>,
) -> Result<()> {
    info!("Starting engagement count in {:?}", folder);

    let instructor = InstructorConfig::load(&instructor_file);
    if let Some(name) = &instructor.name {
        info!("Excluding instructor {}", name);
    }

    let reader = reader_for(format);
    let catalog = build_catalog(&folder, prefix, reader.as_ref())?;
    info!("Cataloged {} files", catalog.len());

    let aggregator = Aggregator::new(instructor);
    let table = aggregator.aggregate(&catalog, reader.as_ref());
    if table.files_skipped > 0 {
        warn!("{} files skipped during counting", table.files_skipped);
    }

    let report_config = ReportConfig {
        csv_path: output.unwrap_or_else(|| default_report_path(&folder)),
        json_path: json,
    };
    execute_report(&table, &catalog, aggregator.instructor(), &report_config)
        .context("Failed to write engagement summary")?;

    info!(
        "Complete: {} rows, {} interventions across {} dates",
        table.rows.len(),
        table.total_interventions(),
        table.dates().len()
    );

    Ok(())
}

fn show_dates(folder: PathBuf, prefix: String, format: Format) -> Result<()> {
    let reader = reader_for(format);
    let catalog = build_catalog(&folder, prefix, reader.as_ref())?;

    let mut entries: Vec<_> = catalog.entries.iter().collect();
    entries.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.file_name.cmp(&b.file_name)));

    println!("Transcript Dates");
    println!("================");
    for entry in entries {
        println!("{}  {}", entry.date, entry.file_name);
    }
    println!();
    println!("Total files: {}", catalog.len());

    Ok(())
}

fn build_catalog(
    folder: &Path,
    prefix: String,
    reader: &dyn DocumentReader,
) -> Result<engagement::Catalog> {
    let config = CatalogConfig { prefix };
    execute_catalog(folder, &config, reader, &DateResolver::default())
        .with_context(|| format!("Failed to catalog transcripts in {:?}", folder))
}
