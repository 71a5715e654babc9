use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use seat_allocator::{allocate, parser, render, AllocatorConfig, ParseError};

#[derive(Parser)]
#[command(name = "seat-allocator")]
#[command(about = "Seat passenger groups on a plane, maximizing seating satisfaction")]
struct Cli {
    /// Flight description: plane dimensions followed by one passenger group per line
    input: Option<PathBuf>,

    /// Print the arrangement as JSON
    #[arg(long)]
    json: bool,
}

/// Initialize tracing on stderr so stdout carries only the layout
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "seat_allocator=warn".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let path = cli.input.ok_or(ParseError::MissingInput)?;
    let manifest = parser::read_manifest(&path)
        .with_context(|| format!("reading {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        passengers = manifest.passenger_count,
        oversubscribed = manifest.is_oversubscribed(),
        "allocating seats"
    );

    let arrangement = allocate(manifest, AllocatorConfig::from_env());

    if cli.json {
        println!("{}", render::render_json(&arrangement)?);
    } else {
        print!("{}", render::render_layout(&arrangement));
    }

    Ok(())
}
