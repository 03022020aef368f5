//! Adaptive Chunking Report
//!
//! Chunk a document, print complexity and size statistics, and optionally
//! dump every chunk with its metadata.
//!
//! ```bash
//! cargo run --example adaptive_report -- docs/handbook.md chunk_output.txt
//! RUST_LOG=adaptive_slabs=debug cargo run --example adaptive_report -- docs/handbook.md
//! ```

use std::fs::File;
use std::io::BufWriter;
use std::process::ExitCode;

use adaptive_slabs::{write_chunks, AdaptiveChunker, AdaptiveConfig, ChunkReport, Chunker};
use tracing::{error, info};

fn preview(text: &str) -> String {
    let head: String = text.chars().take(200).collect();
    format!("{head}...")
}

fn run(input: &str, output: Option<&str>) -> adaptive_slabs::Result<()> {
    let document = std::fs::read_to_string(input)?;

    let chunker = AdaptiveChunker::new(AdaptiveConfig::default())?;
    let chunks = chunker.chunk(&document);
    info!(chunks = chunks.len(), input, "document split into adaptive chunks");

    let Some(report) = ChunkReport::from_chunks(&chunks) else {
        println!("No chunks produced.");
        return Ok(());
    };

    println!("\n----- CHUNKING RESULTS -----");
    println!("{report}");

    for (title, index) in [
        ("HIGHEST COMPLEXITY CHUNK", report.most_complex),
        ("LOWEST COMPLEXITY CHUNK", report.least_complex),
    ] {
        let chunk = &chunks[index];
        println!("\n----- {title} -----");
        println!("Complexity: {}", chunk.metadata.text_complexity);
        println!("Size: {} characters", chunk.metadata.chunk_size);
        println!("{}", "-".repeat(40));
        println!("{}", preview(&chunk.text));
    }

    if let Some(path) = output {
        write_chunks(BufWriter::new(File::create(path)?), &chunks)?;
        info!(path, "chunks saved");
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(input) = args.first() else {
        eprintln!("usage: adaptive_report <document> [output]");
        return ExitCode::FAILURE;
    };

    match run(input, args.get(1).map(String::as_str)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "adaptive chunking failed");
            ExitCode::FAILURE
        }
    }
}
