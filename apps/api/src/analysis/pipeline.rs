//! Resume Analysis pipeline: the request orchestrator.
//!
//! Flow: validate inputs → extract resume text → build prompt → model call.
//!
//! Framework-independent: takes a `Submission`, returns an `AnalysisOutcome`.
//! Every failure is resolved to user-visible text here; nothing propagates.

use bytes::Bytes;
use serde::Serialize;
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::extraction::extract_text;
use crate::llm_client::prompts::build_prompt;
use crate::llm_client::ModelClient;

pub const MISSING_INPUT_WARNING: &str =
    "⚠️ Please upload a resume and paste the job description.";

/// Raw PDF upload. Dropped as soon as its text has been extracted.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub file_name: String,
    pub bytes: Bytes,
}

/// One user submission. Either input may be missing.
#[derive(Debug, Clone, Default)]
pub struct Submission {
    pub document: Option<UploadedDocument>,
    pub job_description: Option<String>,
}

/// Terminal state of a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnalysisOutcome {
    /// The resume or the job description was missing. Nothing was processed.
    Rejected { message: String },
    /// The upload could not be read as a PDF. The model was not called.
    ParseFailed { message: String },
    /// Text from the model client, exactly as returned (may be an error string).
    Complete { result: String },
}

impl Submission {
    /// Returns both inputs when the submission is processable.
    /// A whitespace-only job description counts as missing.
    fn validated(self) -> Option<(UploadedDocument, String)> {
        let document = self.document?;
        let job_description = self.job_description.filter(|jd| !jd.trim().is_empty())?;
        Some((document, job_description))
    }
}

/// Runs one submission through extract → build → generate.
///
/// Makes exactly one model call for a valid submission and none otherwise.
pub async fn handle_submission(model: &ModelClient, submission: Submission) -> AnalysisOutcome {
    let span = info_span!("submission", id = %Uuid::new_v4());
    run(model, submission).instrument(span).await
}

async fn run(model: &ModelClient, submission: Submission) -> AnalysisOutcome {
    let Some((document, job_description)) = submission.validated() else {
        warn!("Submission rejected: resume or job description missing");
        return AnalysisOutcome::Rejected {
            message: MISSING_INPUT_WARNING.to_string(),
        };
    };

    info!(
        "Processing submission: file={:?}, size={} bytes, jd_chars={}",
        document.file_name,
        document.bytes.len(),
        job_description.chars().count()
    );

    let UploadedDocument { file_name, bytes } = document;
    let resume_text = match extract_text(bytes).await {
        Ok(text) => text,
        Err(e) => {
            warn!("Resume {file_name:?} could not be parsed: {e}");
            return AnalysisOutcome::ParseFailed {
                message: format!(
                    "❌ Could not read \"{file_name}\": {e}. Please upload a valid, unencrypted PDF resume."
                ),
            };
        }
    };

    if resume_text.is_empty() {
        warn!("No extractable text in {file_name:?}; sending empty resume text");
    }

    let prompt = build_prompt(&resume_text, &job_description);
    let result = model.generate(&prompt).await;

    info!("Submission complete: {} chars of analysis", result.chars().count());
    AnalysisOutcome::Complete { result }
}
