//! Translate command implementation.
//!
//! Translates a batch of source paths in parallel. A failing path is
//! reported and skipped; the rest of the batch is still translated.

use std::io::{self, BufRead, Write};

use anyhow::{Result, bail};
use owo_colors::OwoColorize;
use rayon::prelude::*;
use serde::Serialize;

use crate::cli::args::TranslateArgs;
use crate::config::{SiteConfig, TargetConfig};
use crate::target::TargetKind;
use crate::utils::plural_count;
use crate::{debug, log};

/// Result for a single translated path
#[derive(Debug, Serialize)]
pub struct Translation {
    pub kind: TargetKind,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Translation {
    /// Translate one path, capturing failure instead of propagating it.
    pub fn new(kind: TargetKind, source: &str, config: &TargetConfig) -> Self {
        let (output, error) = match kind.translate(source, config) {
            Ok(path) => (Some(path.to_string_lossy().into_owned()), None),
            Err(e) => (None, Some(e.to_string())),
        };
        Self {
            kind,
            source: source.to_string(),
            output,
            error,
        }
    }

    pub const fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Execute a translate subcommand
pub fn run_translate(kind: TargetKind, args: &TranslateArgs, config: &SiteConfig) -> Result<()> {
    let sources = collect_sources(&args.paths)?;
    debug!(kind.as_str(); "translating {}", plural_count(sources.len(), "path"));

    let results = translate_all(kind, &sources, &config.target);

    output_results(&results, args)?;

    let failed = results.iter().filter(|r| !r.is_ok()).count();
    if failed > 0 {
        bail!(
            "{} of {} failed to translate",
            failed,
            plural_count(results.len(), "path")
        );
    }
    Ok(())
}

/// Translate every source in parallel, preserving input order.
pub fn translate_all(kind: TargetKind, sources: &[String], config: &TargetConfig) -> Vec<Translation> {
    sources
        .par_iter()
        .map(|source| Translation::new(kind, source, config))
        .collect()
}

/// Resolve CLI paths, reading from stdin when `-` is the only path.
fn collect_sources(paths: &[String]) -> Result<Vec<String>> {
    if paths.len() == 1 && paths[0] == "-" {
        return Ok(read_paths(io::stdin().lock())?);
    }
    Ok(paths.to_vec())
}

/// Read paths one per line, skipping blank lines.
///
/// Only the line ending is stripped: a trailing `/` or inner spaces are
/// significant for translation.
pub fn read_paths(reader: impl BufRead) -> io::Result<Vec<String>> {
    let mut paths = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if !line.trim().is_empty() {
            paths.push(line.to_string());
        }
    }
    Ok(paths)
}

// ============================================================================
// Output Formatting
// ============================================================================

fn output_results(results: &[Translation], args: &TranslateArgs) -> Result<()> {
    let mut stdout = io::stdout().lock();

    if args.json {
        let formatted = if args.pretty {
            serde_json::to_string_pretty(results)?
        } else {
            serde_json::to_string(results)?
        };
        writeln!(stdout, "{}", formatted)?;
        return Ok(());
    }

    for result in results {
        match (&result.output, &result.error) {
            (Some(output), _) => writeln!(stdout, "{} {} {}", result.source, "→".dimmed(), output)?,
            (None, Some(error)) => log!("error"; "{}", error),
            (None, None) => {}
        }
    }
    Ok(())
}
