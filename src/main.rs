use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tokio::io::{AsyncReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use textkit::{demo_report, run_session, AnalysisReport, SessionConfig, SAMPLE_TEXT};

#[derive(Parser, Debug)]
#[command(name = "textkit")]
#[command(about = "Text statistics, palindrome checks and email/URL extraction")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Log output format (logs go to stderr)
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty, global = true)]
    log_format: LogFormat,

    /// Enable debug logging unless RUST_LOG is set
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Walk through every operation on the built-in sample, then start the interactive loop
    Demo {
        /// Print the walkthrough only
        #[arg(long)]
        no_interactive: bool,
    },
    /// Analyze a file, or stdin when no path is given
    Analyze {
        path: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Analyze stdin line by line until the exit word
    Interactive {
        #[arg(long, default_value = "exit")]
        exit_word: String,

        #[arg(long, default_value = "> ")]
        prompt: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum LogFormat {
    Pretty,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_format, args.verbose);

    info!(?args, "Parsed CLI arguments");

    let command = args.command.unwrap_or(Command::Demo { no_interactive: false });
    match command {
        Command::Demo { no_interactive } => {
            println!("{}", demo_report(SAMPLE_TEXT));
            if !no_interactive {
                interactive(SessionConfig::default()).await?;
            }
        }
        Command::Analyze { path, format } => {
            let text = read_input(path.as_deref()).await?;
            let report = AnalysisReport::from_text(&text);
            match format {
                OutputFormat::Text => print!("{}", report.render_text()),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            }
        }
        Command::Interactive { exit_word, prompt } => {
            interactive(SessionConfig { prompt, exit_word }).await?;
        }
    }

    Ok(())
}

// WHY: logs on stderr keep stdout limited to program output
fn init_logging(format: LogFormat, verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

async fn interactive(config: SessionConfig) -> Result<()> {
    let reader = BufReader::new(tokio::io::stdin());
    let mut writer = tokio::io::stdout();
    let summary = run_session(reader, &mut writer, &config).await?;
    info!(?summary, "Session summary");
    Ok(())
}

async fn read_input(path: Option<&Path>) -> Result<String> {
    let Some(path) = path else {
        let mut text = String::new();
        tokio::io::stdin()
            .read_to_string(&mut text)
            .await
            .context("Failed to read text from stdin")?;
        return Ok(text);
    };

    // WHY: validate up front for a clearer message than the raw read error
    if path.is_dir() {
        anyhow::bail!("Input path is a directory: {}", path.display());
    }

    info!("Reading input file: {}", path.display());
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read input file {}", path.display()))
}
