//! docsplit CLI - document cleaning and chunking tool

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use docsplit::{clean_and_split_with_options, BatchOptions, Document, Metadata};

#[derive(Parser)]
#[command(name = "docsplit")]
#[command(version)]
#[command(about = "Clean text documents and split them into retrieval-ready chunks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clean input files and split them into chunks
    Chunk {
        /// Input text files
        #[arg(value_name = "FILES", required = true)]
        inputs: Vec<PathBuf>,

        /// Target chunk size in characters
        #[arg(long, env = "DOCSPLIT_CHUNK_SIZE", default_value_t = 2000)]
        chunk_size: usize,

        /// Characters carried between adjacent chunks (default: chunk_size / 3)
        #[arg(long)]
        overlap: Option<usize>,

        /// Output format
        #[arg(long, value_enum, default_value = "jsonl")]
        format: Format,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Process documents one at a time
        #[arg(long)]
        sequential: bool,
    },

    /// Run only the cleaner pipeline over a file
    Clean {
        /// Input text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One JSON document per line
    Jsonl,
    /// Chunk text separated by `---` rules
    Text,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Chunk {
            inputs,
            chunk_size,
            overlap,
            format,
            output,
            sequential,
        } => cmd_chunk(
            &inputs,
            chunk_size,
            overlap,
            format,
            output.as_deref(),
            sequential,
        ),
        Commands::Clean { input, output } => cmd_clean(&input, output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_chunk(
    inputs: &[PathBuf],
    chunk_size: usize,
    overlap: Option<usize>,
    format: Format,
    output: Option<&Path>,
    sequential: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut options = BatchOptions::new(chunk_size)?;
    if let Some(overlap) = overlap {
        options = options.with_overlap(overlap)?;
    }
    if sequential {
        options = options.sequential();
    }

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    let mut docs = Vec::with_capacity(inputs.len());
    for path in inputs {
        pb.set_message(path.display().to_string());
        let content = fs::read_to_string(path)?;
        let mut metadata = Metadata::new();
        metadata.insert("source".to_string(), path.display().to_string());
        docs.push(Document::new(content, metadata));
        pb.inc(1);
    }
    pb.finish_and_clear();

    let chunks = clean_and_split_with_options(&docs, &options)?;
    log::info!("{} documents produced {} chunks", docs.len(), chunks.len());

    let rendered = match format {
        Format::Jsonl => {
            let mut lines = String::new();
            for chunk in &chunks {
                lines.push_str(&serde_json::to_string(chunk)?);
                lines.push('\n');
            }
            lines
        }
        Format::Text => chunks
            .iter()
            .map(|c| c.page_content.as_str())
            .collect::<Vec<_>>()
            .join("\n\n---\n\n"),
    };

    write_output(output, &rendered)?;

    eprintln!(
        "{} {} documents into {} chunks",
        "Processed".green().bold(),
        docs.len(),
        chunks.len()
    );

    Ok(())
}

fn cmd_clean(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let content = fs::read_to_string(input)?;
    let mut doc = Document::from_content(content);
    doc.clean();
    write_output(output, &doc.page_content)?;
    Ok(())
}

fn write_output(output: Option<&Path>, content: &str) -> io::Result<()> {
    match output {
        Some(path) => fs::write(path, content),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.write_all(b"\n")
        }
    }
}
