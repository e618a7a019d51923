//! newsqa CLI: inspect, count, hash, and export the NewsQA corpus.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use newsqa_core::config::LoaderConfig;
use newsqa_core::info::{DatasetInfo, MANUAL_DOWNLOAD_INSTRUCTIONS};
use newsqa_core::variant::{Partition, Variant};
use newsqa_io::writers::JsonlWriter;
use newsqa_io::NewsQa;

#[derive(Parser)]
#[command(name = "newsqa")]
#[command(about = "Read the manually downloaded NewsQA corpus through one typed interface", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command that reads data.
#[derive(clap::Args)]
struct Source {
    /// Directory holding the downloaded corpus (overrides NEWSQA_DATA_DIR)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Config name: combined-csv, combined-json, or split (overrides NEWSQA_CONFIG)
    #[arg(short, long)]
    config: Option<String>,

    /// Read buffer size in bytes (overrides NEWSQA_READ_BUFFER_BYTES)
    #[arg(long)]
    read_buffer: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print dataset metadata and the declared schema
    Info {
        /// Config name (defaults to split)
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Print the manual download instructions
    Instructions,

    /// Count records per partition
    Count {
        #[command(flatten)]
        source: Source,
    },

    /// Stream records as NDJSON
    Export {
        #[command(flatten)]
        source: Source,

        /// Only this partition (train, test, dev/validation, combined)
        #[arg(short, long)]
        partition: Option<String>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Hash every partition file with blake3
    Manifest {
        #[command(flatten)]
        source: Source,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Info { config } => print_info(config.as_deref()),
        Commands::Instructions => {
            println!("{MANUAL_DOWNLOAD_INSTRUCTIONS}");
            Ok(())
        }
        Commands::Count { source } => count_records(source),
        Commands::Export {
            source,
            partition,
            out,
        } => export_records(source, partition.as_deref(), out),
        Commands::Manifest { source } => print_manifest(source),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn load_config(source: Source) -> Result<LoaderConfig, Box<dyn std::error::Error>> {
    let mut cfg = LoaderConfig::from_env()?;
    if let Some(dir) = source.data_dir {
        cfg.data_dir = Some(dir.to_string_lossy().into_owned());
    }
    if let Some(name) = source.config {
        cfg.variant = Variant::parse(&name)?;
    }
    if let Some(bytes) = source.read_buffer {
        cfg.read_buffer_bytes = bytes;
    }
    Ok(cfg)
}

fn print_info(config: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let variant = match config {
        Some(name) => Variant::parse(name)?,
        None => Variant::default(),
    };
    let info = DatasetInfo::for_variant(variant);
    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}

fn count_records(source: Source) -> Result<(), Box<dyn std::error::Error>> {
    let dataset = NewsQa::new(load_config(source)?)?;
    let mut total = 0u64;
    for part in dataset.partitions() {
        let mut n = 0u64;
        for item in dataset.records(part.partition)? {
            item?;
            n += 1;
        }
        tracing::info!(partition = %part.partition, records = n, "counted partition");
        println!("{:<10} {:>8}", part.partition, n);
        total += n;
    }
    println!("{:<10} {:>8}", "total", total);
    Ok(())
}

fn export_records(
    source: Source,
    partition: Option<&str>,
    out: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let dataset = NewsQa::new(load_config(source)?)?;
    let partitions: Vec<Partition> = match partition {
        Some(name) => vec![Partition::parse(name)?],
        None => dataset.partitions().iter().map(|p| p.partition).collect(),
    };

    let sink: Box<dyn Write> = match out {
        Some(path) => Box::new(std::fs::File::create(path)?),
        None => Box::new(std::io::stdout().lock()),
    };
    let mut writer = JsonlWriter::to_writer(sink);
    for p in partitions {
        let n = writer.write_all(dataset.records(p)?)?;
        tracing::info!(partition = %p, records = n, "exported partition");
    }
    writer.flush()?;
    Ok(())
}

fn print_manifest(source: Source) -> Result<(), Box<dyn std::error::Error>> {
    let dataset = NewsQa::new(load_config(source)?)?;
    let manifest = dataset.manifest()?;
    println!("{}", serde_json::to_string_pretty(&manifest)?);
    println!("combined digest: {}", manifest.combined_digest()?);
    Ok(())
}
