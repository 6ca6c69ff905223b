use anyhow::{Context, Result};
use clap::Parser;
use pdf_handout::{FileOutcome, HandoutLayout};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "homaker",
    about = "Turn worksheet PDFs into two-up handouts",
    version
)]
struct Cli {
    /// Directory searched recursively for *-Worksheet*.pdf files
    #[arg(default_value = ".")]
    root: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Every page needs the font, so a missing font ends the run before any file is touched
    let font = pdf_handout::load_display_font().context("Failed to load the display font")?;
    log::info!("Using font {}", font.path().display());

    let year = pdf_handout::current_year();
    let layout = HandoutLayout::default();

    let report = pdf_handout::convert_all(&cli.root, Arc::new(font), year, &layout, |outcome| {
        match outcome {
            FileOutcome::Converted(converted) => println!(
                "Processed {} -> {}",
                converted.input.display(),
                converted.output.display()
            ),
            FileOutcome::Failed(failure) => {
                eprintln!("Failed {}: {}", failure.input.display(), failure.error)
            }
        }
    })
    .await
    .with_context(|| format!("Failed to search {}", cli.root.display()))?;

    log::info!(
        "{} of {} worksheets converted",
        report.converted.len(),
        report.total()
    );

    Ok(())
}
