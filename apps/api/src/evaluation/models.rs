use serde::{Deserialize, Serialize};

/// Final hiring recommendation produced by the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Shortlist,
    Consider,
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EducationRelevance {
    #[serde(rename = "Highly Relevant")]
    HighlyRelevant,
    Relevant,
    #[serde(rename = "Partially Relevant")]
    PartiallyRelevant,
}

impl EducationRelevance {
    pub fn label(&self) -> &'static str {
        match self {
            EducationRelevance::HighlyRelevant => "Highly Relevant",
            EducationRelevance::Relevant => "Relevant",
            EducationRelevance::PartiallyRelevant => "Partially Relevant",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillsMatch {
    /// Skills found in both the resume and the job description.
    pub matched_skills: Vec<String>,
    /// Skills the job description asks for that the resume does not show.
    pub missing_skills: Vec<String>,
}

/// Structured evaluation of one resume against one job description.
///
/// Field names are the wire names the evaluation prompt asks the model for.
/// Every field is required: a response missing any of them is rejected as a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub match_score: u8, // 0 – 100
    pub summary: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub skills_match: SkillsMatch,
    pub experience_score: u8, // 1 – 10
    pub education_relevance: EducationRelevance,
    pub verdict: Verdict,
}

pub const MATCH_SCORE_MAX: u8 = 100;
pub const EXPERIENCE_SCORE_MIN: u8 = 1;
pub const EXPERIENCE_SCORE_MAX: u8 = 10;

impl EvaluationResult {
    /// Checks the numeric ranges serde cannot express. Enum fields are already
    /// constrained by deserialization.
    pub fn validate(&self) -> Result<(), String> {
        if self.match_score > MATCH_SCORE_MAX {
            return Err(format!(
                "match_score {} is outside 0-{MATCH_SCORE_MAX}",
                self.match_score
            ));
        }
        if !(EXPERIENCE_SCORE_MIN..=EXPERIENCE_SCORE_MAX).contains(&self.experience_score) {
            return Err(format!(
                "experience_score {} is outside {EXPERIENCE_SCORE_MIN}-{EXPERIENCE_SCORE_MAX}",
                self.experience_score
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn sample_result() -> EvaluationResult {
    EvaluationResult {
        match_score: 82,
        summary: "Strong backend engineer with production Rust experience.".to_string(),
        strengths: vec![
            "Five years of Rust".to_string(),
            "Led a storage migration".to_string(),
        ],
        weaknesses: vec!["No Kubernetes exposure".to_string()],
        skills_match: SkillsMatch {
            matched_skills: vec!["Rust".to_string(), "Tokio".to_string(), "PostgreSQL".to_string()],
            missing_skills: vec!["Kubernetes".to_string()],
        },
        experience_score: 8,
        education_relevance: EducationRelevance::Relevant,
        verdict: Verdict::Shortlist,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_serde_names() {
        for (json, verdict) in [
            (r#""Shortlist""#, Verdict::Shortlist),
            (r#""Consider""#, Verdict::Consider),
            (r#""Reject""#, Verdict::Reject),
        ] {
            assert_eq!(serde_json::from_str::<Verdict>(json).unwrap(), verdict);
        }
        assert!(serde_json::from_str::<Verdict>(r#""Maybe""#).is_err());
    }

    #[test]
    fn test_education_relevance_uses_spaced_names() {
        let relevance: EducationRelevance =
            serde_json::from_str(r#""Highly Relevant""#).unwrap();
        assert_eq!(relevance, EducationRelevance::HighlyRelevant);
        assert_eq!(
            serde_json::to_string(&EducationRelevance::PartiallyRelevant).unwrap(),
            r#""Partially Relevant""#
        );
        assert_eq!(relevance.label(), "Highly Relevant");
    }

    #[test]
    fn test_validate_accepts_boundaries() {
        let mut result = sample_result();
        result.match_score = 0;
        result.experience_score = 1;
        assert!(result.validate().is_ok());
        result.match_score = 100;
        result.experience_score = 10;
        assert!(result.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_scores() {
        let mut result = sample_result();
        result.match_score = 101;
        assert!(result.validate().unwrap_err().contains("match_score 101"));

        let mut result = sample_result();
        result.experience_score = 0;
        assert!(result.validate().unwrap_err().contains("experience_score 0"));

        result.experience_score = 11;
        assert!(result.validate().is_err());
    }
}
