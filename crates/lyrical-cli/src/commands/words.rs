use anyhow::{anyhow, Context, Result};
use lyrical_core::{CatalogKind, WordListField, WordListManager, WordListRequest};

pub fn run_words(
    manager: &WordListManager,
    kind: &str,
    tag: Option<String>,
    field: Option<&str>,
    format: &str,
) -> Result<String> {
    let kind: CatalogKind = kind.parse().map_err(|e: String| anyhow!(e))?;
    let field: Option<WordListField> = field
        .map(str::parse)
        .transpose()
        .map_err(|e: String| anyhow!(e))?;
    let request = WordListRequest { kind, tag };

    match field {
        Some(field) => {
            let words = manager.words(&request, field)?;
            match format {
                "json" => serde_json::to_string_pretty(&words).context("JSON serialization error"),
                _ => Ok(words.join("\n")),
            }
        }
        None => {
            let entries = manager.entries(&request)?;
            match format {
                "json" => {
                    serde_json::to_string_pretty(&entries).context("JSON serialization error")
                }
                _ => {
                    let mut lines = vec![kind.title().to_string()];
                    lines.extend(entries.iter().map(|e| {
                        if e.description.is_empty() {
                            e.descriptor.clone()
                        } else {
                            format!("{} — {}", e.descriptor, e.description)
                        }
                    }));
                    let entry_word = if entries.len() == 1 { "entry" } else { "entries" };
                    lines.push(format!("{} {entry_word}.", entries.len()));
                    Ok(lines.join("\n"))
                }
            }
        }
    }
}
