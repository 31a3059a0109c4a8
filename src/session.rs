// WHY: interactive loop is generic over async reader/writer so tests can drive it in memory
// The binary wires it to stdin/stdout

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

use crate::palindrome::is_palindrome;
use crate::stats::analyze_text;

/// Configuration for the interactive session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Written before every input line
    pub prompt: String,
    /// Input line that ends the session
    pub exit_word: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            exit_word: "exit".to_string(),
        }
    }
}

/// Counters reported when a session ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub lines_analyzed: u64,
    pub palindromes_found: u64,
}

/// Read lines until the exit word or EOF, echoing statistics for each one
///
/// Blank lines and lines that are not valid UTF-8 are skipped.
pub async fn run_session<R, W>(mut reader: R, writer: &mut W, config: &SessionConfig) -> Result<SessionSummary>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    info!(exit_word = %config.exit_word, "Starting interactive session");

    let mut summary = SessionSummary::default();
    let mut line_buf = Vec::new();

    write_out(writer, &format!("Enter text to analyze (or '{}' to quit):\n", config.exit_word)).await?;

    loop {
        write_out(writer, &config.prompt).await?;

        line_buf.clear();
        let bytes_read = reader
            .read_until(b'\n', &mut line_buf)
            .await
            .context("Failed to read input line")?;
        if bytes_read == 0 {
            debug!("Input closed, ending session");
            break;
        }

        let Ok(line) = std::str::from_utf8(&line_buf) else {
            warn!("Skipping input line that is not valid UTF-8");
            continue;
        };

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == config.exit_word {
            debug!("Exit word received");
            break;
        }

        let stats = analyze_text(input);
        write_out(
            writer,
            &format!(
                "   Words: {}, Characters: {}, Sentences: {}\n",
                stats.words, stats.characters, stats.sentences
            ),
        )
        .await?;
        summary.lines_analyzed += 1;

        if is_palindrome(input) {
            write_out(writer, &format!("   '{input}' is a palindrome!\n")).await?;
            summary.palindromes_found += 1;
        }
    }

    write_out(writer, "\nThanks for using textkit!\n").await?;

    info!(
        lines_analyzed = summary.lines_analyzed,
        palindromes_found = summary.palindromes_found,
        "Interactive session finished"
    );
    Ok(summary)
}

async fn write_out<W: AsyncWrite + Unpin>(writer: &mut W, text: &str) -> Result<()> {
    writer.write_all(text.as_bytes()).await.context("Failed to write session output")?;
    writer.flush().await.context("Failed to flush session output")?;
    Ok(())
}
