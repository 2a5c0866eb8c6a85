use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct SimcheckConfig {
    pub filter: Option<FilterConfig>,
    pub thresholds: Option<ThresholdConfig>,
    pub output: Option<OutputConfig>,
    pub limits: Option<LimitsConfig>,
}

impl SimcheckConfig {
    pub fn thresholds(&self) -> ThresholdConfig {
        self.thresholds.clone().unwrap_or_default()
    }

    pub fn max_file_bytes(&self) -> u64 {
        self.limits
            .as_ref()
            .and_then(|l| l.max_file_bytes)
            .unwrap_or(DEFAULT_MAX_FILE_BYTES)
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output.as_ref().and_then(|o| o.format).unwrap_or_default()
    }

    pub fn include_common(&self) -> bool {
        self.output.as_ref().and_then(|o| o.include_common).unwrap_or(false)
    }

    pub fn max_table_cells(&self) -> usize {
        self.limits
            .as_ref()
            .and_then(|l| l.max_table_cells)
            .unwrap_or(DEFAULT_MAX_TABLE_CELLS)
    }
}

pub const DEFAULT_MAX_FILE_BYTES: u64 = 16 * 1024 * 1024;
/// 64M `u32` cells, 256 MiB for the shared-text table.
pub const DEFAULT_MAX_TABLE_CELLS: usize = 64 * 1024 * 1024;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct FilterConfig {
    pub preset: Option<FilterPreset>,
    pub ranges: Option<Vec<CodePointRange>>,
    pub pattern: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum FilterPreset {
    #[default]
    Cjk,
    Alphanumeric,
    NonWhitespace,
}

/// Inclusive code point range, written as `"U+4E00"`, `"0x4E00"`, `"4E00"` or a literal character.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CodePointRange {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThresholdConfig {
    pub suspicious: f64,
    pub plagiarized: f64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            suspicious: 40.0,
            plagiarized: 70.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
    pub include_common: Option<bool>,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Bare two-decimal score, e.g. `66.67`
    #[default]
    Score,
    Json,
    Markdown,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Score => "score",
            Self::Json => "json",
            Self::Markdown => "markdown",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct LimitsConfig {
    pub max_file_bytes: Option<u64>,
    pub max_table_cells: Option<usize>,
}
