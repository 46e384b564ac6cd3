//! Server-rendered landing page. Thin adapter over `AnalysisOutcome`.

use askama::Template;

use crate::analysis::pipeline::AnalysisOutcome;

pub const OFFERINGS: &[&str] = &[
    "ATS-Optimized Resume Analysis",
    "Resume Optimization",
    "Skill Enhancement",
    "Career Progression Guidance",
    "Tailored Profile Summaries",
    "Streamlined Application Process",
    "Personalized Recommendations",
    "Efficient Career Navigation",
];

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "Q1: How does CareerCraft analyze resumes and job descriptions?",
        answer: "CareerCraft uses advanced Gemini AI to compare your resume with job descriptions, identifying keyword matches and compatibility.",
    },
    FaqEntry {
        question: "Q2: Can CareerCraft suggest improvements for my resume?",
        answer: "Yes! It provides personalized suggestions for improvement, including missing keywords and alignment strategies.",
    },
    FaqEntry {
        question: "Q3: Is CareerCraft suitable for both entry-level and experienced professionals?",
        answer: "Absolutely. It offers tailored insights whether you're just starting out or looking for a senior role.",
    },
];

/// CSS class and text of the notice box shown above the result.
pub struct Notice {
    pub class: &'static str,
    pub message: String,
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub offerings: &'static [&'static str],
    pub faq: &'static [FaqEntry],
    /// Echoed back into the textarea after a submission.
    pub job_description: String,
    pub notice: Option<Notice>,
    pub result: Option<String>,
}

impl IndexPage {
    pub fn empty() -> Self {
        Self {
            offerings: OFFERINGS,
            faq: FAQ,
            job_description: String::new(),
            notice: None,
            result: None,
        }
    }

    pub fn with_outcome(job_description: String, outcome: AnalysisOutcome) -> Self {
        let (notice, result) = match outcome {
            AnalysisOutcome::Rejected { message } => (
                Notice {
                    class: "warning",
                    message,
                },
                None,
            ),
            AnalysisOutcome::ParseFailed { message } => (
                Notice {
                    class: "error",
                    message,
                },
                None,
            ),
            AnalysisOutcome::Complete { result } => (
                Notice {
                    class: "success",
                    message: "✅ Analysis Complete!".to_string(),
                },
                Some(result),
            ),
        };

        Self {
            job_description,
            notice: Some(notice),
            result,
            ..Self::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_page_has_form_and_content() {
        let html = IndexPage::empty().render().unwrap();
        assert!(html.contains("CareerCraft"));
        assert!(html.contains(r#"name="job_description""#));
        assert!(html.contains(r#"name="resume""#));
        assert!(html.contains(r#"enctype="multipart/form-data""#));
        for offering in OFFERINGS {
            assert!(html.contains(offering));
        }
        assert!(html.contains("Q3: Is CareerCraft suitable"));
        assert!(!html.contains("Analysis Complete"));
    }

    #[test]
    fn test_complete_outcome_renders_result_escaped() {
        let page = IndexPage::with_outcome(
            "Rust <dev>".to_string(),
            AnalysisOutcome::Complete {
                result: "### ✅ Match Percentage:\n80% <script>".to_string(),
            },
        );
        let html = page.render().unwrap();

        assert!(html.contains("✅ Analysis Complete!"));
        assert!(html.contains("### ✅ Match Percentage:\n80% &lt;script&gt;"));
        assert!(!html.contains("80% <script>"));
        assert!(html.contains("Rust &lt;dev&gt;</textarea>"));
    }

    #[test]
    fn test_rejected_and_parse_failed_use_distinct_styles() {
        let rejected = IndexPage::with_outcome(
            String::new(),
            AnalysisOutcome::Rejected {
                message: "missing".to_string(),
            },
        )
        .render()
        .unwrap();
        let failed = IndexPage::with_outcome(
            String::new(),
            AnalysisOutcome::ParseFailed {
                message: "unreadable".to_string(),
            },
        )
        .render()
        .unwrap();

        assert!(rejected.contains(r#"class="notice warning""#));
        assert!(failed.contains(r#"class="notice error""#));
        assert!(!failed.contains(r#"class="result""#));
    }
}
