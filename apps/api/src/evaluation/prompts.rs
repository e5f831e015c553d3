// Evaluation prompt: persona, labeled inputs, output schema, JSON-only instruction.
// Inputs are embedded verbatim; nothing in them is escaped or filtered.

use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;

/// Persona and task framing that opens every evaluation prompt.
pub const EVALUATION_PERSONA: &str = "As an expert HR Manager and Technical Recruiter with 20 years of experience, \
analyze the provided Resume against the Job Description.";

/// The exact JSON shape `normalizer::normalize` accepts.
pub const EVALUATION_SCHEMA: &str = r#"{
    "match_score": (0-100),
    "summary": "Professional summary of the candidate's fit",
    "strengths": ["list of key strengths"],
    "weaknesses": ["list of areas for improvement or missing requirements"],
    "skills_match": {
        "matched_skills": ["extracted from resume and jd"],
        "missing_skills": ["present in jd but missing in resume"]
    },
    "experience_score": (1-10),
    "education_relevance": "Highly Relevant/Relevant/Partially Relevant",
    "verdict": "Shortlist/Consider/Reject"
}"#;

/// Builds the evaluation prompt. Pure and deterministic.
pub fn build_prompt(resume_text: &str, job_description: &str) -> String {
    format!(
        "{EVALUATION_PERSONA}\n\n\
         Resume Text:\n{resume_text}\n\n\
         Job Description:\n{job_description}\n\n\
         Provide a detailed evaluation in JSON format with the following structure:\n\
         {EVALUATION_SCHEMA}\n\n\
         {JSON_ONLY_INSTRUCTION}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_inputs_in_labeled_blocks() {
        let prompt = build_prompt("Jane Doe\nRust, Tokio\n", "Senior Rust Engineer");
        let resume_at = prompt.find("Resume Text:\nJane Doe\nRust, Tokio\n").unwrap();
        let jd_at = prompt.find("Job Description:\nSenior Rust Engineer").unwrap();
        assert!(resume_at < jd_at);
        assert!(prompt.starts_with(EVALUATION_PERSONA));
        assert!(prompt.ends_with("Respond ONLY with the JSON object."));
    }

    #[test]
    fn test_prompt_lists_every_schema_field_and_option() {
        let prompt = build_prompt("r", "j");
        for needle in [
            "\"match_score\": (0-100)",
            "\"summary\"",
            "\"strengths\"",
            "\"weaknesses\"",
            "\"matched_skills\"",
            "\"missing_skills\"",
            "\"experience_score\": (1-10)",
            "Highly Relevant/Relevant/Partially Relevant",
            "Shortlist/Consider/Reject",
        ] {
            assert!(prompt.contains(needle), "prompt is missing {needle}");
        }
    }

    #[test]
    fn test_inputs_are_not_reinterpreted() {
        // Placeholder-looking text in the resume must survive untouched.
        let resume = "Skills: {job_description} {} ```json";
        let prompt = build_prompt(resume, "Backend role");
        assert!(prompt.contains(resume));
        assert_eq!(prompt.matches("Backend role").count(), 1);
    }

    #[test]
    fn test_prompt_is_deterministic() {
        assert_eq!(build_prompt("a", "b"), build_prompt("a", "b"));
    }
}
