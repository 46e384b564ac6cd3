//! Axum route handlers for resume analysis.

use askama::Template;
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::Html,
    Json,
};

use crate::analysis::pipeline::{handle_submission, AnalysisOutcome, Submission, UploadedDocument};
use crate::errors::AppError;
use crate::render::IndexPage;
use crate::state::AppState;

const JOB_DESCRIPTION_FIELD: &str = "job_description";
const RESUME_FIELD: &str = "resume";

/// GET /
pub async fn handle_index() -> Result<Html<String>, AppError> {
    Ok(Html(IndexPage::empty().render()?))
}

/// POST /analyze
///
/// Form submission from the landing page; re-renders it with the outcome.
pub async fn handle_analyze_form(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Html<String>, AppError> {
    let submission = read_submission(multipart).await?;
    let job_description = submission.job_description.clone().unwrap_or_default();

    let outcome = handle_submission(&state.model, submission).await;

    Ok(Html(IndexPage::with_outcome(job_description, outcome).render()?))
}

/// POST /api/v1/analyze
///
/// Same pipeline as the form, JSON out. Rejected and unreadable uploads are 422.
pub async fn handle_analyze_api(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<AnalysisOutcome>), AppError> {
    let submission = read_submission(multipart).await?;
    let outcome = handle_submission(&state.model, submission).await;

    let status = match outcome {
        AnalysisOutcome::Complete { .. } => StatusCode::OK,
        AnalysisOutcome::Rejected { .. } | AnalysisOutcome::ParseFailed { .. } => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
    };
    Ok((status, Json(outcome)))
}

/// Collects the two form inputs. A file part with no name and no bytes is
/// what browsers send when nothing was chosen, so it counts as absent.
async fn read_submission(mut multipart: Multipart) -> Result<Submission, AppError> {
    let mut submission = Submission::default();

    while let Some(field) = multipart.next_field().await? {
        match field.name().unwrap_or("") {
            JOB_DESCRIPTION_FIELD => {
                let text = field.text().await?;
                submission.job_description = Some(text);
            }
            RESUME_FIELD => {
                let file_name = field.file_name().unwrap_or("").to_string();
                let bytes = field.bytes().await?;
                if file_name.is_empty() && bytes.is_empty() {
                    continue;
                }
                submission.document = Some(UploadedDocument {
                    file_name: if file_name.is_empty() {
                        "resume".to_string()
                    } else {
                        file_name
                    },
                    bytes,
                });
            }
            _ => {
                field.bytes().await?;
            }
        }
    }

    Ok(submission)
}
