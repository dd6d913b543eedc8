use clap::{Parser, Subcommand};
use folio::{FolioError, Manifest, WriterConfig, sample::sample_document};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

/// Write PDF files from object manifests.
#[derive(Parser, Debug)]
#[command(name = "folio", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a JSON object manifest to a PDF file.
    Render {
        manifest: PathBuf,
        output: PathBuf,
        /// Pin the trailer timestamps (milliseconds) for reproducible output.
        #[arg(long)]
        fixed_timestamp: Option<i64>,
    },
    /// Write a two-page demonstration document.
    Sample { output: PathBuf },
}

fn main() -> Result<(), FolioError> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Render {
            manifest,
            output,
            fixed_timestamp,
        } => {
            log::info!("Loading manifest from {}", manifest.display());
            let mut manifest = Manifest::from_file(&manifest)?;
            if fixed_timestamp.is_some() {
                manifest.config.timestamp = fixed_timestamp;
            }
            let writer = manifest.build()?;
            let count = writer.object_count();
            writer.finalize(BufWriter::new(File::create(&output)?))?;
            println!("Wrote {} objects to {}", count, output.display());
        }
        Command::Sample { output } => {
            let document = sample_document(WriterConfig::default())?;
            let pages = document.page_count();
            document.create(BufWriter::new(File::create(&output)?))?;
            println!("Wrote {} pages to {}", pages, output.display());
        }
    }
    Ok(())
}
