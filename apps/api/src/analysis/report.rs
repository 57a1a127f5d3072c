//! Report shaping — turns scores and commentary into what a client renders.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::extraction::{ExtractionStatus, ResumeDocument};
use crate::llm_client::Insight;
use crate::scoring::ScoreResult;

/// Maximum number of keywords listed for display. Counts always cover the full list.
pub const DISPLAY_CAP: usize = 60;

const NO_MATCHED_MESSAGE: &str = "No strong keyword matches detected.";
const NO_MISSING_MESSAGE: &str = "No major missing skills detected.";

/// Display view of one keyword list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordListing {
    pub count: usize,
    /// First `DISPLAY_CAP` keywords, in sorted order.
    pub shown: Vec<String>,
    pub truncated: bool,
    /// Comma-joined `shown`, or a placeholder sentence when the list is empty.
    pub message: String,
}

impl KeywordListing {
    pub fn matched(keywords: &[String]) -> Self {
        Self::build(keywords, NO_MATCHED_MESSAGE)
    }

    pub fn missing(keywords: &[String]) -> Self {
        Self::build(keywords, NO_MISSING_MESSAGE)
    }

    fn build(keywords: &[String], empty_message: &str) -> Self {
        let shown: Vec<String> = keywords.iter().take(DISPLAY_CAP).cloned().collect();
        let message = if shown.is_empty() {
            empty_message.to_string()
        } else {
            shown.join(", ")
        };
        Self {
            count: keywords.len(),
            truncated: keywords.len() > shown.len(),
            shown,
            message,
        }
    }
}

/// Formats a score for display with 2 decimal places, e.g. `66.67%`.
pub fn format_score(score: f64) -> String {
    format!("{score:.2}%")
}

/// What the scorer saw of the résumé.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeSummary {
    pub extraction: ExtractionStatus,
    pub character_count: usize,
    pub keyword_count: usize,
}

impl ResumeSummary {
    /// `keyword_count` is the size of the résumé keyword set the scorer used.
    pub fn of(resume: &ResumeDocument, keyword_count: usize) -> Self {
        Self {
            extraction: resume.status,
            character_count: resume.text.chars().count(),
            keyword_count,
        }
    }
}

/// Keyword-only view, returned when no commentary is requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreView {
    pub score: f64,
    pub score_label: String,
    pub matched: KeywordListing,
    pub missing: KeywordListing,
}

impl ScoreView {
    pub fn of(result: &ScoreResult) -> Self {
        Self {
            score: result.score,
            score_label: format_score(result.score),
            matched: KeywordListing::matched(&result.matched_keywords),
            missing: KeywordListing::missing(&result.missing_keywords),
        }
    }
}

/// Full analysis result: keyword score plus recruiter commentary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub analysis_id: Uuid,
    #[serde(flatten)]
    pub ats: ScoreView,
    pub resume: ResumeSummary,
    pub insight: Insight,
    pub completed_at: DateTime<Utc>,
}
