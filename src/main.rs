use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use rayon::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use codeloom::{Extractor, Language, LoomError, flatten};

#[derive(Parser)]
#[command(name = "codeloom")]
#[command(
    version,
    about = "Structural source-code extraction for documentation pipelines"
)]
struct Cli {
    /// Source files to extract
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Force a language instead of detecting it from the file extension
    #[arg(long, short, value_parser = parse_language)]
    language: Option<Language>,

    /// Emit flattened index rows instead of full parse results
    #[arg(long)]
    flat: bool,

    /// Worker threads for batch extraction (0 = one per core)
    #[arg(long, short, default_value_t = 0, env = "CODELOOM_JOBS")]
    jobs: usize,

    #[arg(long)]
    verbose: bool,

    #[arg(long, short)]
    quiet: bool,
}

/// Parse a language id from the command line
fn parse_language(s: &str) -> Result<Language, String> {
    s.parse().map_err(|_| {
        format!(
            "unknown language '{}'. Valid values: python, java, cpp, c, javascript",
            s
        )
    })
}

fn main() -> ExitCode {
    match run_cli() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> codeloom::Result<ExitCode> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    // Logs go to stderr; stdout carries the JSON output.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if cli.jobs > 0
        && rayon::ThreadPoolBuilder::new()
            .num_threads(cli.jobs)
            .build_global()
            .is_err()
    {
        tracing::warn!("thread pool already initialized, ignoring --jobs");
    }

    let extractor = Extractor::new();

    // Files are independent source units: extract in parallel, report in
    // input order. One file's failure never stops the rest of the batch.
    let outcomes: Vec<codeloom::Result<serde_json::Value>> = cli
        .files
        .par_iter()
        .map(|path| extract_file(&extractor, path, cli.language, cli.flat))
        .collect();

    let mut failures = 0usize;
    for (path, outcome) in cli.files.iter().zip(outcomes) {
        match outcome {
            Ok(value) => println!("{}", serde_json::to_string_pretty(&value)?),
            Err(e) => {
                failures += 1;
                tracing::error!(path = %path.display(), "{}", e);
            }
        }
    }

    if failures > 0 {
        tracing::warn!(
            "{} of {} files failed extraction",
            failures,
            cli.files.len()
        );
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn extract_file(
    extractor: &Extractor,
    path: &Path,
    forced_language: Option<Language>,
    flat: bool,
) -> codeloom::Result<serde_json::Value> {
    let language = match forced_language {
        Some(language) => language,
        None => Language::from_path(path).ok_or_else(|| {
            LoomError::UnsupportedLanguage(
                path.extension()
                    .and_then(|e| e.to_str())
                    .unwrap_or("unknown")
                    .to_string(),
            )
        })?,
    };

    let source = fs::read_to_string(path)?;
    let result = extractor.parse(&source, language)?;
    let path_str = path.display().to_string();

    if flat {
        Ok(serde_json::to_value(flatten(&path_str, &result))?)
    } else {
        Ok(serde_json::json!({
            "file": path_str,
            "result": result,
        }))
    }
}
