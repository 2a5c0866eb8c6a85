use std::path::{Path, PathBuf};
use tracing::info;
use crate::cli::commands::{CompareArgs, ReportArgs};
use crate::config::{self, OutputFormat, SimcheckConfig};
use crate::documents::{read_document, write_output};
use crate::engine::{compare_texts, SymbolFilter};
use crate::errors::SimcheckError;
use crate::models::ComparisonReport;
use crate::reporting::render_comparison;

const EXPECTED_PATHS: usize = 3;

/// Settings resolved from CLI flags layered over the config file.
pub struct ReportSettings {
    pub config: SimcheckConfig,
    pub filter: SymbolFilter,
    pub format: OutputFormat,
    pub include_common: bool,
}

impl ReportSettings {
    pub async fn resolve(args: &ReportArgs) -> Result<Self, SimcheckError> {
        let config = config::load_config(args.config.as_deref()).await?;
        let filter = match &config.filter {
            Some(f) => config::build_filter(f)?,
            None => SymbolFilter::default(),
        };
        let format = args.format.unwrap_or_else(|| config.output_format());
        let include_common = args.common || config.include_common();

        Ok(Self { config, filter, format, include_common })
    }

    /// Cell cap for recovering shared text, or `None` when it is not wanted.
    pub fn common_limit(&self) -> Option<usize> {
        self.include_common.then(|| self.config.max_table_cells())
    }
}

/// Split positional paths into (original, candidate, output), rejecting any other count.
pub fn split_paths(paths: &[PathBuf]) -> Result<(&Path, &Path, &Path), SimcheckError> {
    match paths {
        [original, candidate, output] => Ok((original.as_path(), candidate.as_path(), output.as_path())),
        _ => Err(SimcheckError::Usage(format!(
            "expected {} file paths (original, candidate, output), got {}",
            EXPECTED_PATHS,
            paths.len()
        ))),
    }
}

pub async fn handle_compare(args: CompareArgs) -> Result<(), SimcheckError> {
    // Argument count is checked before any file is touched
    let (original_path, candidate_path, output_path) = split_paths(&args.paths)?;

    let settings = ReportSettings::resolve(&args.report).await?;
    info!(
        original = %original_path.display(),
        candidate = %candidate_path.display(),
        filter = %settings.filter.describe(),
        "Comparing documents"
    );

    let report = compare_files(original_path, candidate_path, &settings).await?;

    info!(
        similarity = %report.similarity,
        lcs = report.lcs_length,
        verdict = report.verdict.as_str(),
        "Comparison complete"
    );

    let rendered = render_comparison(&report, settings.format)?;
    write_output(output_path, &rendered).await?;
    Ok(())
}

pub async fn compare_files(
    original: &Path,
    candidate: &Path,
    settings: &ReportSettings,
) -> Result<ComparisonReport, SimcheckError> {
    let max_bytes = settings.config.max_file_bytes();
    let original_text = read_document(original, max_bytes).await?;
    let candidate_text = read_document(candidate, max_bytes).await?;

    let comparison = compare_texts(&original_text, &candidate_text, &settings.filter)?;

    Ok(ComparisonReport::from_comparison(
        original.display().to_string(),
        candidate.display().to_string(),
        &comparison,
        &settings.config.thresholds(),
        settings.common_limit(),
    ))
}
