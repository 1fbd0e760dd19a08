//! msum-pl - command-line runner for the meeting summarization pipeline

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use msum_common::config::{load_config, resolve_config_path};
use msum_pl::{run_pipeline, RunOptions, WhisperCommand};
use tracing::info;

/// Speech-aware meeting summarizer pipeline runner
#[derive(Parser, Debug)]
#[command(name = "msum-pl", version)]
struct Args {
    /// Path to the input audio file
    #[arg(long, default_value = "data/raw/example.wav")]
    input: PathBuf,

    /// Directory to write outputs
    #[arg(long, default_value = "outputs/run1")]
    output: PathBuf,

    /// Run speech-to-text transcription before analysis
    #[arg(long)]
    run_asr: bool,

    /// Enable the engagement/emotion stage
    #[arg(long)]
    enable_engagement: bool,

    /// Path to the msum config file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    let config_path = resolve_config_path(args.config.as_deref(), "MSUM_CONFIG");
    let config = load_config(config_path.as_deref())?;

    let engine = WhisperCommand::new(&config.asr.command, &config.asr.model_size);
    let options = RunOptions {
        input_path: args.input,
        output_dir: args.output,
        run_asr: args.run_asr,
        enable_engagement: args.enable_engagement,
    };

    let run = run_pipeline(&engine, &options)?;

    info!("Outputs written to {}", run.output_dir.display());
    println!("{}", run.summary_text);

    Ok(())
}
