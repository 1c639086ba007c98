use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use tracing::info;

use crate::models::report::{AnalysisView, ReportDetails, ReportSummary, SuggestionReport};

/// Writes `report` as pretty JSON into `dir` and returns the file path.
///
/// Without an explicit `filename` the name is `analysis_results_<YYYYmmdd_HHMMSS>.json`
/// in local time, so two reports persisted within the same second share a name
/// and the later one wins.
pub fn save_report(
    report: &SuggestionReport,
    dir: &Path,
    filename: Option<&str>,
) -> Result<PathBuf> {
    let filename = match filename {
        Some(name) => name.to_string(),
        None => format!(
            "analysis_results_{}.json",
            Local::now().format("%Y%m%d_%H%M%S")
        ),
    };

    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create results directory '{}'", dir.display()))?;
    let path = dir.join(filename);
    let json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
    std::fs::write(&path, json)
        .with_context(|| format!("Failed to write report to '{}'", path.display()))?;

    info!("Persisted analysis report to {}", path.display());
    Ok(path)
}

/// Reshapes a report into counts plus the raw finding lists.
pub fn format_report(report: SuggestionReport) -> AnalysisView {
    AnalysisView {
        score: report.score,
        summary: ReportSummary {
            strengths: report.strengths.len(),
            improvements_needed: report.improvements.len(),
            missing_elements: report.missing_elements.len(),
        },
        details: ReportDetails {
            strengths: report.strengths,
            improvements: report.improvements,
            missing_elements: report.missing_elements,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SuggestionReport {
        SuggestionReport {
            score: 85,
            strengths: vec!["Complete contact information provided".into()],
            improvements: vec![
                "Add graduation years".into(),
                "Add quantifiable achievements and metrics".into(),
            ],
            missing_elements: vec!["No education history provided".into()],
        }
    }

    #[test]
    fn test_format_counts_match_lists() {
        let view = format_report(sample());
        assert_eq!(view.score, 85);
        assert_eq!(view.summary.strengths, 1);
        assert_eq!(view.summary.improvements_needed, 2);
        assert_eq!(view.summary.missing_elements, 1);
        assert_eq!(view.details.improvements[1], "Add quantifiable achievements and metrics");
    }

    #[test]
    fn test_view_json_shape() {
        let json = serde_json::to_value(format_report(sample())).unwrap();
        assert_eq!(json["summary"]["improvements_needed"], 2);
        assert_eq!(json["details"]["missing_elements"][0], "No education history provided");
    }

    #[test]
    fn test_save_report_timestamped_name() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("analysis_results");
        let path = save_report(&sample(), &dir, None).unwrap();

        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("analysis_results_"), "Name was {name}");
        assert!(name.ends_with(".json"));
        // analysis_results_ + YYYYmmdd_HHMMSS + .json
        assert_eq!(name.len(), "analysis_results_".len() + 15 + ".json".len());

        let saved: SuggestionReport =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved, sample());
    }

    #[test]
    fn test_save_report_explicit_name() {
        let tmp = tempfile::tempdir().unwrap();
        let path = save_report(&sample(), tmp.path(), Some("mine.json")).unwrap();
        assert_eq!(path, tmp.path().join("mine.json"));
    }
}
