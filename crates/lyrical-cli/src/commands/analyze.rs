use std::path::Path;

use anyhow::{bail, Context, Result};
use lyrical_core::{estimate, StyleMonitor, StyleReport, SAMPLE_TEXT};

use crate::reader::{read_text_files, LyricalConfig, TextFile};

pub fn run_analyze(
    input_path: &Path,
    sample: bool,
    format: &str,
    config: &LyricalConfig,
) -> Result<String> {
    let files = if sample {
        vec![TextFile {
            path: "<sample>".into(),
            content: SAMPLE_TEXT.into(),
        }]
    } else {
        read_text_files(input_path)?
    };

    if files.is_empty() {
        bail!("No text files (.txt, .md) found at: {}", input_path.display());
    }

    let words = config.function_words();
    let mut monitor = StyleMonitor::new(&words);
    monitor.subscribe(|report| {
        tracing::debug!(
            words = report.total_words,
            avg = report.average_syllables_per_word,
            "style report"
        );
    });

    let results: Vec<(&str, Option<StyleReport>)> = files
        .iter()
        .map(|f| (f.path.as_str(), monitor.update(&f.content).cloned()))
        .collect();

    match format {
        "json" => render_json(&results),
        _ => Ok(render_human(&results)),
    }
}

fn render_json(results: &[(&str, Option<StyleReport>)]) -> Result<String> {
    let analyzed = results.iter().filter(|(_, r)| r.is_some()).count();
    let files: Vec<serde_json::Value> = results
        .iter()
        .map(|(path, report)| serde_json::json!({ "file": path, "report": report }))
        .collect();

    serde_json::to_string_pretty(&serde_json::json!({
        "files": files,
        "summary": {
            "analyzed": analyzed,
            "skipped": results.len() - analyzed,
        }
    }))
    .context("JSON serialization error")
}

fn render_human(results: &[(&str, Option<StyleReport>)]) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut skipped = 0;

    for (path, report) in results {
        match report {
            Some(r) => lines.push(format!(
                "{path}: {} words, average syllable length {:.2}, functional word score {:.2}",
                r.total_words, r.average_syllables_per_word, r.functional_word_ratio
            )),
            None => {
                skipped += 1;
                lines.push(format!("{path}: skipped (no words)"));
            }
        }
    }

    let analyzed = results.len() - skipped;
    let file_word = if analyzed == 1 { "file" } else { "files" };
    lines.push(format!("{analyzed} {file_word} analyzed, {skipped} skipped."));

    lines.join("\n")
}

pub fn run_syllables(words: &[String]) -> String {
    words
        .iter()
        .map(|w| format!("{w}: {}", estimate(w)))
        .collect::<Vec<_>>()
        .join("\n")
}
