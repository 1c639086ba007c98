use std::io::Write;
use std::path::Path;

use anyhow::Context;
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::Html,
    Json,
};
use bytes::Bytes;
use tracing::info;

use crate::analysis::normalize::{normalize, normalize_submission, validate, ResumeSubmission};
use crate::analysis::report::{format_report, save_report};
use crate::analysis::scorer::analyze_resume;
use crate::config::Config;
use crate::errors::AppError;
use crate::extraction::{self, extension_of, SUPPORTED_EXTENSIONS};
use crate::models::report::AnalysisView;
use crate::state::AppState;

/// Multipart field carrying the uploaded document.
const UPLOAD_FIELD: &str = "resume";

const INDEX_HTML: &str = r#"<!doctype html>
<html>
  <head><meta charset="utf-8"><title>Resume Optimizer</title></head>
  <body>
    <h1>Resume Optimizer</h1>
    <form action="/api/v1/analyze" method="post" enctype="multipart/form-data">
      <input type="file" name="resume" accept=".pdf,.doc,.docx">
      <button type="submit">Analyze</button>
    </form>
  </body>
</html>
"#;

struct Upload {
    filename: String,
    data: Bytes,
}

/// GET /
pub async fn handle_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// POST /api/v1/analyze
/// Accepts one document in the `resume` field and returns the formatted report.
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisView>, AppError> {
    let upload = read_upload(&mut multipart, state.config.max_upload_bytes).await?;

    let ext = extension_of(Path::new(&upload.filename));
    if !SUPPORTED_EXTENSIONS.contains(&ext.as_str()) {
        return Err(AppError::BadRequest("Invalid file type".to_string()));
    }
    info!(
        "Received upload '{}' ({} bytes)",
        upload.filename,
        upload.data.len()
    );

    // Document decoding and regex scans are CPU-bound.
    let config = state.config.clone();
    let view = tokio::task::spawn_blocking(move || analyze_upload(&config, &ext, &upload.data))
        .await
        .map_err(|e| AppError::Internal(e.into()))??;
    Ok(Json(view))
}

/// POST /api/v1/analyze/record
/// Scores an already-structured résumé.
pub async fn handle_analyze_record(
    State(state): State<AppState>,
    Json(submission): Json<ResumeSubmission>,
) -> Result<Json<AnalysisView>, AppError> {
    let results_dir = state.config.results_dir.clone();
    let view = tokio::task::spawn_blocking(move || {
        score_submission(normalize_submission(submission), &results_dir)
    })
    .await
    .map_err(|e| AppError::Internal(e.into()))??;
    Ok(Json(view))
}

async fn read_upload(multipart: &mut Multipart, limit: usize) -> Result<Upload, AppError> {
    let to_app_error = |e: axum::extract::multipart::MultipartError| {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(limit)
        } else {
            AppError::BadRequest(e.body_text())
        }
    };

    while let Some(field) = multipart.next_field().await.map_err(to_app_error)? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        if filename.is_empty() {
            return Err(AppError::BadRequest("No selected file".to_string()));
        }
        let data = field.bytes().await.map_err(to_app_error)?;
        return Ok(Upload { filename, data });
    }
    Err(AppError::BadRequest("No file part".to_string()))
}

/// Stages the upload in a temp file (removed on drop) and runs the full pipeline.
fn analyze_upload(config: &Config, ext: &str, data: &[u8]) -> Result<AnalysisView, AppError> {
    let mut file = tempfile::Builder::new()
        .prefix("resume_")
        .suffix(&format!(".{ext}"))
        .tempfile_in(&config.upload_dir)
        .with_context(|| {
            format!(
                "Failed to create upload file in '{}'",
                config.upload_dir.display()
            )
        })?;
    file.write_all(data).context("Failed to write upload file")?;

    let record = normalize(extraction::parse_resume(file.path())?);
    score_submission(record.into(), &config.results_dir)
}

fn score_submission(
    submission: ResumeSubmission,
    results_dir: &Path,
) -> Result<AnalysisView, AppError> {
    let record = validate(submission)?;
    let report = analyze_resume(&record)?;
    info!(
        "Scored resume: score={} strengths={} improvements={} missing={}",
        report.score,
        report.strengths.len(),
        report.improvements.len(),
        report.missing_elements.len()
    );

    save_report(&report, results_dir, None)?;
    Ok(format_report(report))
}
