use crate::config::OutputFormat;
use crate::errors::SimcheckError;
use crate::models::{BatchReport, ComparisonReport};

pub fn render_comparison(report: &ComparisonReport, format: OutputFormat) -> Result<String, SimcheckError> {
    Ok(match format {
        // Bare score, no trailing newline
        OutputFormat::Score => report.similarity.to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(report)?,
        OutputFormat::Markdown => format_comparison_markdown(report),
    })
}

pub fn render_batch(batch: &BatchReport, format: OutputFormat) -> Result<String, SimcheckError> {
    Ok(match format {
        OutputFormat::Score => batch
            .results
            .iter()
            .map(|r| format!("{}\t{}\n", r.similarity, r.candidate))
            .collect(),
        OutputFormat::Json => serde_json::to_string_pretty(batch)?,
        OutputFormat::Markdown => format_batch_markdown(batch),
    })
}

pub fn format_comparison_markdown(report: &ComparisonReport) -> String {
    let mut out = format!(
        "### {} vs {}\n\n**Similarity:** {}%\n**Verdict:** {}\n\n| | Symbols |\n|---|---|\n| Original | {} |\n| Candidate | {} |\n| Shared (LCS) | {} |\n",
        report.original,
        report.candidate,
        report.similarity,
        report.verdict.as_str(),
        report.original_symbols,
        report.candidate_symbols,
        report.lcs_length,
    );
    if let Some(common) = &report.common {
        out.push_str(&format!("\n**Shared text:**\n```\n{}\n```\n", common));
    }
    out
}

pub fn format_batch_markdown(batch: &BatchReport) -> String {
    let mut out = format!(
        "## Similarity to {}\n\n| Candidate | Similarity | LCS | Verdict |\n|---|---|---|---|\n",
        batch.original
    );
    for r in &batch.results {
        out.push_str(&format!(
            "| {} | {}% | {} | {} |\n",
            r.candidate,
            r.similarity,
            r.lcs_length,
            r.verdict.as_str()
        ));
    }
    out.push_str(&format!(
        "\n**Flagged:** {} of {}\n",
        batch.flagged(),
        batch.results.len()
    ));
    out
}
