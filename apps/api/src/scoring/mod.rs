// ATS keyword scoring.
// Pure, deterministic and explainable: no LLM calls, no I/O.

pub mod ats;
pub mod keywords;

pub use ats::{score, score_keywords, ScoreResult};
pub use keywords::KeywordSet;
