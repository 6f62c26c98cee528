// SPDX-License-Identifier: AGPL-3.0-only
// Thin front end; all extraction and analysis lives in the tally crate.
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::ffi::OsString;
use std::io::Read;
use std::path::PathBuf;
use tally::{ProcessedData, TallyConfig, TallyPipeline};
use tracing::{debug, info, warn};

const CONFIG_ENV: &str = "TALLY_CONFIG";

mod report;

#[derive(Parser, Debug, Clone)]
#[command(name = "tally", about = "Turn percentage descriptions into chart data")]
struct Cli {
    /// Configuration file (falls back to $TALLY_CONFIG, then config/tally.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of a report.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Extract, balance and analyse the text.
    Process { text: Option<String> },
    /// Process the text, then label the resulting dataset.
    Label { text: Option<String> },
    /// Classify the text and append chart hints.
    Enhance { text: Option<String> },
    /// List configured colour palettes.
    Themes,
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    let cli = Cli::parse();
    let pipeline = build_pipeline(cli.config.clone())?;

    match cli.cmd {
        Command::Process { text } => {
            let input = read_text(text)?;
            let processed = run_process(&pipeline, &input)?;
            info!(points = processed.data.len(), "processed input");
            emit(cli.json, &processed, report::processed)
        }
        Command::Label { text } => {
            let input = read_text(text)?;
            let processed = run_process(&pipeline, &input)?;
            let labeled = pipeline.label_dataset(&processed.data);
            emit(cli.json, &labeled, report::labeled)
        }
        Command::Enhance { text } => {
            let input = read_text(text)?;
            emit(cli.json, &pipeline.enhance(&input), report::enhanced)
        }
        Command::Themes => emit(cli.json, &pipeline.config().theme.palettes, |palettes| {
            report::themes(palettes, &pipeline.config().theme.default_theme)
        }),
    }
}

/// `--config` wins over `$TALLY_CONFIG`; neither means the default lookup.
fn config_path(flag: Option<PathBuf>, env: Option<OsString>) -> Option<PathBuf> {
    flag.or_else(|| env.map(PathBuf::from))
}

fn build_pipeline(flag: Option<PathBuf>) -> Result<TallyPipeline> {
    match config_path(flag, std::env::var_os(CONFIG_ENV)) {
        Some(path) => {
            debug!(path = %path.display(), "loading configuration");
            TallyPipeline::from_config_file(&path)
                .with_context(|| format!("loading configuration from {}", path.display()))
        }
        None => Ok(TallyPipeline::with_config(TallyConfig::load_or_default())),
    }
}

fn run_process(pipeline: &TallyPipeline, input: &str) -> Result<ProcessedData> {
    pipeline.process(input).map_err(|err| {
        warn!(category = err.category(), "processing failed");
        for hint in err.suggestions() {
            eprintln!("hint: {hint}");
        }
        anyhow::Error::from(err)
    })
}

fn read_text(text: Option<String>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("reading input text from stdin")?;
    Ok(buf)
}

fn emit<T: Serialize>(json: bool, value: &T, render: impl Fn(&T) -> String) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        print!("{}", render(value));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn flag_takes_precedence_over_env() {
        let path = config_path(
            Some(PathBuf::from("flag.toml")),
            Some(OsString::from("env.toml")),
        );
        assert_eq!(path, Some(PathBuf::from("flag.toml")));
    }

    #[test]
    fn env_used_without_flag() {
        let path = config_path(None, Some(OsString::from("env.toml")));
        assert_eq!(path, Some(PathBuf::from("env.toml")));
        assert_eq!(config_path(None, None), None);
    }

    #[test]
    fn flagged_file_configures_pipeline() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "[theme]\ndefault_theme = \"Ocean Depths\"\n\n[balancing]\nremainder_label = \"Rest\"\n"
        )
        .unwrap();
        let pipeline = build_pipeline(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(pipeline.config().theme.default_theme, "Ocean Depths");
        let out = run_process(&pipeline, "40% for Tea").unwrap();
        assert_eq!(out.data[1].name, "Rest");
    }

    #[test]
    fn missing_flagged_file_is_an_error() {
        match build_pipeline(Some(PathBuf::from("/nonexistent/tally.toml"))) {
            Err(err) => assert!(err.to_string().contains("loading configuration")),
            Ok(_) => panic!("expected a missing config file to fail"),
        }
    }

    #[test]
    fn failed_process_keeps_the_library_error() {
        let err = run_process(&TallyPipeline::new(), "no numbers").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<tally::TallyError>(),
            Some(tally::TallyError::Parse(tally::ParseError::NoDataFound))
        ));
    }
}
