// LLM prompt constants for the Analysis module.

/// Recruiter evaluation prompt template.
/// Replace: {job_description}, {resume_text}
pub const RECRUITER_PROMPT_TEMPLATE: &str = r#"You are a senior technical recruiter reviewing a candidate profile.

Job Description:
{job_description}

Resume:
{resume_text}

Provide:
- Suitability summary
- Strengths and weaknesses
- Skill gaps impacting ATS score
- Clear improvement recommendations"#;

/// Builds the recruiter prompt. Both texts are interpolated verbatim: no
/// truncation or escaping, they are trusted user input.
pub fn build_recruiter_prompt(job_description: &str, resume_text: &str) -> String {
    // Single pass so placeholder-like text inside the job description is left alone.
    let (head, tail) = RECRUITER_PROMPT_TEMPLATE
        .split_once("{job_description}")
        .unwrap_or((RECRUITER_PROMPT_TEMPLATE, ""));
    let (middle, end) = tail.split_once("{resume_text}").unwrap_or((tail, ""));
    format!("{head}{job_description}{middle}{resume_text}{end}")
}
