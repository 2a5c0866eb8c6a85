use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{error, info, warn};
use crate::cli::commands::BatchArgs;
use crate::cli::compare::ReportSettings;
use crate::documents::{read_document, write_output, STDOUT_PATH};
use crate::engine::{compare_normalized, normalize_with};
use crate::errors::SimcheckError;
use crate::models::{BatchReport, ComparisonReport};
use crate::reporting::render_batch;

pub async fn handle_batch(args: BatchArgs) -> Result<(), SimcheckError> {
    let settings = Arc::new(ReportSettings::resolve(&args.report).await?);

    let candidates = find_candidates(args.candidates.clone(), args.original.clone()).await?;
    if candidates.is_empty() {
        return Err(SimcheckError::Usage(format!(
            "No candidate files match {}",
            args.candidates
        )));
    }

    let jobs = args.jobs.unwrap_or_else(default_jobs).max(1);
    info!(
        original = %args.original.display(),
        candidates = candidates.len(),
        jobs,
        "Starting batch comparison"
    );

    let report = run_batch(&args.original, candidates, settings.clone(), jobs).await?;
    info!(
        compared = report.results.len(),
        flagged = report.flagged(),
        "Batch comparison complete"
    );

    let rendered = render_batch(&report, settings.format)?;
    let output = args.output.unwrap_or_else(|| PathBuf::from(STDOUT_PATH));
    write_output(&output, &rendered).await
}

fn default_jobs() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}

/// [`expand_candidates`] on the blocking pool, off the async workers.
pub async fn find_candidates(pattern: String, original: PathBuf) -> Result<Vec<PathBuf>, SimcheckError> {
    tokio::task::spawn_blocking(move || expand_candidates(&pattern, &original))
        .await
        .map_err(|e| SimcheckError::Internal(format!("Candidate search failed: {}", e)))?
}

/// Expand the candidate glob into regular files, excluding the original itself.
///
/// Walks the filesystem synchronously; async callers go through [`find_candidates`].
pub fn expand_candidates(pattern: &str, original: &Path) -> Result<Vec<PathBuf>, SimcheckError> {
    let original_canonical = std::fs::canonicalize(original).ok();
    let mut paths = Vec::new();

    for entry in glob::glob(pattern)
        .map_err(|e| SimcheckError::Usage(format!("Invalid glob pattern: {}", e)))?
    {
        let path = entry.map_err(|e| SimcheckError::Input(format!("Glob error: {}", e)))?;
        if !path.is_file() {
            continue;
        }
        if original_canonical.is_some() && std::fs::canonicalize(&path).ok() == original_canonical {
            continue;
        }
        paths.push(path);
    }

    paths.sort();
    Ok(paths)
}

/// Compare every candidate against the original with at most `jobs` comparisons in flight.
///
/// Candidates that cannot be read are logged and left out of the report.
pub async fn run_batch(
    original: &Path,
    candidates: Vec<PathBuf>,
    settings: Arc<ReportSettings>,
    jobs: usize,
) -> Result<BatchReport, SimcheckError> {
    let max_bytes = settings.config.max_file_bytes();
    let original_text = read_document(original, max_bytes).await?;
    let original_seq = Arc::new(normalize_with(&original_text, &settings.filter));
    let original_label = original.display().to_string();
    let semaphore = Arc::new(Semaphore::new(jobs));

    let handles: Vec<_> = candidates
        .iter()
        .cloned()
        .map(|path| {
            let settings = settings.clone();
            let original_seq = original_seq.clone();
            let original_label = original_label.clone();
            let semaphore = semaphore.clone();

            tokio::spawn(async move {
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .map_err(|e| SimcheckError::Internal(format!("Semaphore closed: {}", e)))?;

                let text = read_document(&path, settings.config.max_file_bytes()).await?;
                let label = path.display().to_string();

                tokio::task::spawn_blocking(move || -> Result<ComparisonReport, SimcheckError> {
                    let candidate_seq = normalize_with(&text, &settings.filter);
                    let comparison = compare_normalized((*original_seq).clone(), candidate_seq)?;
                    Ok(ComparisonReport::from_comparison(
                        original_label,
                        label,
                        &comparison,
                        &settings.config.thresholds(),
                        settings.common_limit(),
                    ))
                })
                .await
                .map_err(|e| SimcheckError::Internal(format!("Comparison task failed: {}", e)))?
            })
        })
        .collect();

    let results = futures::future::join_all(handles).await;
    let mut reports = Vec::with_capacity(results.len());
    for (i, result) in results.into_iter().enumerate() {
        match result {
            Ok(Ok(report)) => reports.push(report),
            Ok(Err(e)) => {
                warn!(candidate = %candidates[i].display(), error = %e, "Skipping candidate");
            }
            Err(e) => {
                error!(candidate = %candidates[i].display(), error = %e, "Comparison task panicked");
            }
        }
    }

    Ok(BatchReport::new(original_label, reports))
}
