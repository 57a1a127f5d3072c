//! ATS Score — keyword overlap between a job description and a résumé.
//!
//! Scoring is always keyed on the job-description vocabulary, so swapping the
//! two inputs generally changes the result.

use serde::{Deserialize, Serialize};

use crate::scoring::keywords::KeywordSet;

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

/// Result of one keyword scoring pass.
///
/// `matched_keywords` and `missing_keywords` partition the job-description
/// vocabulary: disjoint, and together equal to it. Both are sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Percentage in [0, 100], rounded to 2 decimal places.
    pub score: f64,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
}

impl ScoreResult {
    fn empty() -> Self {
        Self {
            score: 0.0,
            matched_keywords: vec![],
            missing_keywords: vec![],
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core keyword overlap algorithm
// ────────────────────────────────────────────────────────────────────────────

/// Scores `resume_text` against `job_description`.
///
/// Algorithm:
/// 1. Build the `KeywordSet` of each text (lowercase, whitespace split, unique)
/// 2. Empty job-description set → score 0, no keywords
/// 3. matched = jd ∩ resume, missing = jd − resume
/// 4. score = |matched| / |jd| × 100, rounded to 2 decimals
pub fn score(job_description: &str, resume_text: &str) -> ScoreResult {
    score_keywords(
        &KeywordSet::from_text(job_description),
        &KeywordSet::from_text(resume_text),
    )
}

/// Same as [`score`], for callers that already hold both keyword sets.
pub fn score_keywords(jd_keywords: &KeywordSet, resume_keywords: &KeywordSet) -> ScoreResult {
    if jd_keywords.is_empty() {
        return ScoreResult::empty();
    }

    // `iter` is sorted, so both partitions come out sorted.
    let (matched_keywords, missing_keywords): (Vec<String>, Vec<String>) = jd_keywords
        .iter()
        .map(String::from)
        .partition(|keyword| resume_keywords.contains(keyword));

    let ratio = matched_keywords.len() as f64 / jd_keywords.len() as f64;

    ScoreResult {
        score: round_to_hundredths(ratio * 100.0),
        matched_keywords,
        missing_keywords,
    }
}

/// Exact halves go to the even neighbour: 3.125 → 3.12, 21.875 → 21.88.
fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const JD_SAMPLES: &[&str] = &[
        "python sql communication",
        "Senior Rust Engineer. Rust, Tokio, gRPC and Kubernetes required.",
        "",
        "a a a b",
        "  Lead   DATA engineer \n spark spark airflow ",
    ];

    const RESUME_SAMPLES: &[&str] = &[
        "I have strong python and sql skills",
        "rust tokio kubernetes engineer",
        "",
        "B c d",
        "Spark and Airflow pipelines as a data engineer",
    ];

    fn as_strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_partial_overlap_scenario() {
        let result = score(
            "python sql communication",
            "I have strong python and sql skills",
        );
        assert_eq!(result.score, 66.67);
        assert_eq!(result.matched_keywords, as_strings(&["python", "sql"]));
        assert_eq!(result.missing_keywords, as_strings(&["communication"]));
    }

    #[test]
    fn test_empty_job_description_scores_zero() {
        let result = score("", "rust python go");
        assert_eq!(result.score, 0.0);
        assert!(result.matched_keywords.is_empty());
        assert!(result.missing_keywords.is_empty());
    }

    #[test]
    fn test_whitespace_only_job_description_scores_zero() {
        let result = score(" \n\t ", "rust");
        assert_eq!(result, ScoreResult::empty());
    }

    #[test]
    fn test_disjoint_vocabularies() {
        let result = score("rust tokio axum", "java spring hibernate");
        assert_eq!(result.score, 0.0);
        assert!(result.matched_keywords.is_empty());
        assert_eq!(result.missing_keywords, as_strings(&["axum", "rust", "tokio"]));
    }

    #[test]
    fn test_case_insensitive_full_match() {
        let result = score("Python", "python");
        assert_eq!(result.score, 100.0);
        assert_eq!(result.matched_keywords, as_strings(&["python"]));
        assert!(result.missing_keywords.is_empty());
    }

    #[test]
    fn test_empty_resume_misses_everything() {
        let result = score("rust go", "");
        assert_eq!(result.score, 0.0);
        assert_eq!(result.missing_keywords, as_strings(&["go", "rust"]));
    }

    #[test]
    fn test_repeated_jd_keyword_counts_once() {
        let result = score("rust rust rust rust rust go", "rust");
        assert_eq!(result.score, 50.0);
        assert_eq!(result.matched_keywords, as_strings(&["rust"]));
        assert_eq!(result.missing_keywords, as_strings(&["go"]));
    }

    #[test]
    fn test_punctuation_attached_tokens_do_not_match() {
        let result = score("results, delivery", "results delivery");
        assert_eq!(result.matched_keywords, as_strings(&["delivery"]));
        assert_eq!(result.missing_keywords, as_strings(&["results,"]));
        assert_eq!(result.score, 50.0);
    }

    #[test]
    fn test_scoring_is_asymmetric() {
        let jd = "rust";
        let resume = "rust python go sql";
        assert_eq!(score(jd, resume).score, 100.0);
        assert_eq!(score(resume, jd).score, 25.0);
    }

    #[test]
    fn test_scoring_is_idempotent() {
        for jd in JD_SAMPLES {
            for resume in RESUME_SAMPLES {
                assert_eq!(score(jd, resume), score(jd, resume));
            }
        }
    }

    #[test]
    fn test_matched_and_missing_partition_jd_vocabulary() {
        for jd in JD_SAMPLES {
            let vocabulary: Vec<String> =
                KeywordSet::from_text(jd).iter().map(String::from).collect();
            for resume in RESUME_SAMPLES {
                let result = score(jd, resume);

                let overlap = result
                    .matched_keywords
                    .iter()
                    .filter(|k| result.missing_keywords.contains(k))
                    .count();
                assert_eq!(overlap, 0, "matched and missing overlap for {jd:?} / {resume:?}");

                let mut union = result.matched_keywords.clone();
                union.extend(result.missing_keywords.iter().cloned());
                union.sort();
                assert_eq!(union, vocabulary, "union differs for {jd:?} / {resume:?}");
            }
        }
    }

    #[test]
    fn test_score_bounded_0_to_100() {
        for jd in JD_SAMPLES {
            for resume in RESUME_SAMPLES {
                let result = score(jd, resume);
                assert!(
                    (0.0..=100.0).contains(&result.score),
                    "Score was {} for {jd:?} / {resume:?}",
                    result.score
                );
            }
        }
    }

    #[test]
    fn test_keyword_lists_are_sorted() {
        let result = score("zeta alpha mu beta", "mu zeta");
        assert_eq!(result.matched_keywords, as_strings(&["mu", "zeta"]));
        assert_eq!(result.missing_keywords, as_strings(&["alpha", "beta"]));
    }

    #[test]
    fn test_round_to_hundredths() {
        assert_eq!(round_to_hundredths(100.0 / 3.0), 33.33);
        assert_eq!(round_to_hundredths(200.0 / 3.0), 66.67);
        assert_eq!(round_to_hundredths(100.0 / 7.0), 14.29);
    }

    #[test]
    fn test_round_to_hundredths_ties_to_even() {
        assert_eq!(round_to_hundredths(100.0 / 32.0), 3.12);
        assert_eq!(round_to_hundredths(500.0 / 32.0), 15.62);
        assert_eq!(round_to_hundredths(700.0 / 32.0), 21.88);
        assert_eq!(round_to_hundredths(50.0), 50.0);
    }

    #[test]
    fn test_score_on_half_hundredth_ratios() {
        let jd: Vec<String> = (0..32).map(|i| format!("skill{i:02}")).collect();
        let jd = jd.join(" ");

        let resume_with = |k: usize| -> String {
            (0..k).map(|i| format!("skill{i:02}")).collect::<Vec<_>>().join(" ")
        };

        assert_eq!(score(&jd, &resume_with(1)).score, 3.12);
        assert_eq!(score(&jd, &resume_with(5)).score, 15.62);
        assert_eq!(score(&jd, &resume_with(7)).score, 21.88);
    }

    #[test]
    fn test_score_keywords_matches_text_scoring() {
        let jd = "Senior Rust Engineer. Rust, Tokio, gRPC and Kubernetes required.";
        let resume = "rust tokio kubernetes engineer";
        assert_eq!(
            score_keywords(&KeywordSet::from_text(jd), &KeywordSet::from_text(resume)),
            score(jd, resume)
        );
    }
}
