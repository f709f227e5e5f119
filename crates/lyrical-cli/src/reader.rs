use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use lyrical_core::{FunctionWordSet, DEFAULT_RESOURCES_DIR, FUNCTION_WORDS};
use lyrical_lint::LintConfig;
use serde::Deserialize;

pub const CONFIG_FILE: &str = "lyrical.config.yaml";

const TEXT_PATTERNS: [&str; 2] = ["**/*.txt", "**/*.md"];

/// A file with its path and content.
pub struct TextFile {
    pub path: String,
    pub content: String,
}

/// Project configuration from lyrical.config.yaml.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LyricalConfig {
    pub resources: Option<PathBuf>,
    #[serde(default)]
    pub function_words: FunctionWordsConfig,
    #[serde(default)]
    pub lint: LintConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FunctionWordsConfig {
    /// Articles, prepositions and pronouns only.
    #[serde(default)]
    pub minimal: bool,
    #[serde(default)]
    pub extra: Vec<String>,
}

impl LyricalConfig {
    pub fn resources_dir(&self) -> PathBuf {
        self.resources
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_RESOURCES_DIR))
    }

    /// Build the function-word set once; callers share it by reference.
    pub fn function_words(&self) -> FunctionWordSet {
        let base = if self.function_words.minimal {
            FunctionWordSet::minimal()
        } else {
            FUNCTION_WORDS.clone()
        };
        base.extended(&self.function_words.extra)
    }
}

/// Read the project config. An explicit path must exist; otherwise
/// lyrical.config.yaml in the current directory is used if present.
pub fn read_config(explicit: Option<&Path>) -> Result<LyricalConfig> {
    let path = match explicit {
        Some(p) => {
            if !p.exists() {
                bail!("Config file does not exist: {}", p.display());
            }
            p.to_path_buf()
        }
        None => {
            let default = PathBuf::from(CONFIG_FILE);
            if !default.exists() {
                tracing::debug!("no config file, using defaults");
                return Ok(LyricalConfig::default());
            }
            default
        }
    };

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: LyricalConfig = serde_yaml::from_str(&content)
        .with_context(|| format!("Invalid YAML config {}", path.display()))?;
    tracing::debug!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Read text files from a path (file or directory).
pub fn read_text_files(input_path: &Path) -> Result<Vec<TextFile>> {
    if !input_path.exists() {
        bail!("Path does not exist: {}", input_path.display());
    }

    if input_path.is_file() {
        let content = fs::read_to_string(input_path)
            .with_context(|| format!("Failed to read {}", input_path.display()))?;
        return Ok(vec![TextFile {
            path: input_path.to_string_lossy().to_string(),
            content,
        }]);
    }

    if input_path.is_dir() {
        return scan_directory(input_path);
    }

    bail!(
        "Path is neither a file nor a directory: {}",
        input_path.display()
    )
}

fn scan_directory(dir_path: &Path) -> Result<Vec<TextFile>> {
    let mut paths: Vec<PathBuf> = Vec::new();

    for pattern in TEXT_PATTERNS {
        let pattern_str = dir_path.join(pattern).to_string_lossy().replace('\\', "/");
        let entries = glob::glob(&pattern_str).context("Invalid glob pattern")?;

        for entry in entries {
            let path = entry.context("Glob error")?;
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
    }

    paths.sort();

    let mut files = Vec::new();
    for path in paths {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        files.push(TextFile {
            path: path.to_string_lossy().to_string(),
            content,
        });
    }

    Ok(files)
}
