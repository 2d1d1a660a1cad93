//! tmfuzzy - fuzzy segment matching from the command line
//!
//! Usage:
//!     tmfuzzy "The cat sat on the mat" "A cat sat on a mat"
//!     tmfuzzy --explain color colour
//!     printf 'color\tcolour\n' | tmfuzzy --batch
//!
//! Environment variables:
//! - `TMFUZZY_CONFIG`: matcher config JSON file (same as `--config`)
//! - `RUST_LOG`: logging filter (overrides `--log-level`)

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use tmfuzzy_core::{FuzzyMatcher, MatcherConfig, Segmenter};
use tracing::{debug, info, warn};

mod logging;

#[derive(Parser, Debug)]
#[command(name = "tmfuzzy")]
#[command(about = "Fuzzy similarity (0-100) between two English or Japanese segments")]
#[command(version)]
struct Args {
    /// First segment; its script selects the language rules
    #[arg(required_unless_present = "batch")]
    s1: Option<String>,

    /// Second segment
    #[arg(required_unless_present = "batch")]
    s2: Option<String>,

    /// Print the full match report as JSON
    #[arg(long)]
    explain: bool,

    /// Read tab-separated pairs from stdin and print one score per line
    #[arg(long, conflicts_with_all = ["s1", "s2", "explain"])]
    batch: bool,

    /// Matcher config JSON file
    #[arg(long, env = "TMFUZZY_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    logging::init(&args.log_level);

    let config = load_config(args.config.as_deref())?;
    let matcher = FuzzyMatcher::with_config(config);

    if args.batch {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let scored = run_batch(&matcher, stdin.lock(), stdout.lock())?;
        info!(pairs = scored, "batch finished");
        return Ok(());
    }

    let s1 = args.s1.unwrap_or_default();
    let s2 = args.s2.unwrap_or_default();

    if args.explain {
        let report = matcher.explain(&s1, &s2);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", matcher.score(&s1, &s2));
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<MatcherConfig, Box<dyn Error>> {
    let Some(path) = path else {
        return Ok(MatcherConfig::default());
    };
    let text = std::fs::read_to_string(path)?;
    let config = MatcherConfig::from_json(&text)?;
    info!(path = %path.display(), "loaded matcher config");
    debug!(?config, "matcher config");
    Ok(config)
}

/// Score every `s1<TAB>s2` line of `reader`, writing one score per line.
///
/// Blank lines are ignored; lines without a tab are skipped with a warning.
/// Returns the number of pairs scored.
fn run_batch<S, R, W>(matcher: &FuzzyMatcher<S>, reader: R, mut writer: W) -> io::Result<usize>
where
    S: Segmenter,
    R: BufRead,
    W: Write,
{
    let mut scored = 0;
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match line.split_once('\t') {
            Some((s1, s2)) => {
                writeln!(writer, "{}", matcher.score(s1, s2))?;
                scored += 1;
            }
            None => warn!(line = index + 1, "expected two tab-separated segments, skipping"),
        }
    }
    writer.flush()?;
    Ok(scored)
}
