//! Insight generation — the recruiter commentary step of an analysis.
//!
//! `AppState` holds an `Arc<dyn InsightGenerator>`. Production uses
//! `GeminiClient`; tests swap in a canned generator.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::llm_client::GeminiClient;

/// Outcome of the insight call. A failure is data, not an error: the analysis
/// still completes and renders the diagnostic in place of the commentary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Insight {
    Generated { text: String },
    Failed { diagnostic: String },
}

impl Insight {
    pub fn is_generated(&self) -> bool {
        matches!(self, Insight::Generated { .. })
    }

    /// The text to show the user, whichever variant this is.
    pub fn display_text(&self) -> &str {
        match self {
            Insight::Generated { text } => text,
            Insight::Failed { diagnostic } => diagnostic,
        }
    }
}

/// Turns a fully assembled prompt into recruiter commentary.
#[async_trait]
pub trait InsightGenerator: Send + Sync {
    async fn get_insight(&self, prompt: &str) -> Insight;
}

#[async_trait]
impl InsightGenerator for GeminiClient {
    async fn get_insight(&self, prompt: &str) -> Insight {
        match self.call_text(prompt).await {
            Ok(text) => Insight::Generated { text },
            Err(e) => {
                warn!("Insight generation failed: {e}");
                Insight::Failed {
                    diagnostic: format!("AI recruiter evaluation unavailable: {e}"),
                }
            }
        }
    }
}
