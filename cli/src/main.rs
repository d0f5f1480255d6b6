use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use annotate_table::DEFAULT_ANNOTATION_COLUMN;

/// Step through the rows of a CSV file in the terminal and annotate the
/// text of a chosen column.
///
/// Opens an interactive session: pick a row from the list, read its text
/// in the left pane, type an annotation in the right pane. On quit the
/// table is written back out with the annotations in a third column.
#[derive(Debug, Parser)]
#[command(name = "annotate", version)]
struct Cli {
    /// Input CSV file.
    #[arg(long, short = 'i')]
    input: PathBuf,

    /// Output CSV file.
    #[arg(long, short = 'o')]
    output: PathBuf,

    /// Name of the column to annotate.
    #[arg(long, short = 't')]
    text: String,

    /// Name of the column holding existing annotations.
    #[arg(long, short = 'a')]
    annotation: Option<String>,
}

fn main() -> anyhow::Result<()> {
    // Quiet unless RUST_LOG asks for output, keeping the alternate
    // screen clean.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let records = annotate_table::load(&cli.input, &cli.text, cli.annotation.as_deref())?;
    let records = annotate_tui::run(records).context("interactive session failed")?;

    let annotation_column = cli
        .annotation
        .as_deref()
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_ANNOTATION_COLUMN);
    annotate_table::save(&cli.output, &records, annotation_column)?;

    println!("Annotations saved to {}", cli.output.display());
    Ok(())
}
