use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blendtab::output;
use blendtab::table::BlendTable;
use palette_reduce::MaxCoverage;

#[derive(Parser)]
#[command(name = "blendtab")]
#[command(about = "Generate the blend-palette index table for 15-bit indexed displays")]
struct Cli {
    /// Destination path for the generated 464-byte binary table
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "blendtab=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let cli = Cli::parse();

    let table = BlendTable::build(&MaxCoverage)?;
    output::write_file(&table, &cli.output)?;
    tracing::info!(
        path = %cli.output.display(),
        bytes = output::FILE_LEN,
        "wrote palette table"
    );
    Ok(())
}
