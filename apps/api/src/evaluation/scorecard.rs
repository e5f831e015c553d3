//! Scorecard: presentation-ready view of an `EvaluationResult`.
//!
//! Carries semantic bands and chart series only. Colours, fonts and layout
//! belong to the dashboard front end.

use serde::{Deserialize, Serialize};

use crate::evaluation::models::{EvaluationResult, Verdict, MATCH_SCORE_MAX};

/// Lower bound (inclusive) of the `Moderate` band.
const MODERATE_FROM: u8 = 50;
/// Lower bound (inclusive) of the `Strong` band.
const STRONG_FROM: u8 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchBand {
    Low,
    Moderate,
    Strong,
}

impl MatchBand {
    pub fn for_score(score: u8) -> Self {
        if score >= STRONG_FROM {
            MatchBand::Strong
        } else if score >= MODERATE_FROM {
            MatchBand::Moderate
        } else {
            MatchBand::Low
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictTone {
    Positive,
    Caution,
    Negative,
}

impl From<Verdict> for VerdictTone {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Shortlist => VerdictTone::Positive,
            Verdict::Consider => VerdictTone::Caution,
            Verdict::Reject => VerdictTone::Negative,
        }
    }
}

/// One coloured range on the match gauge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeStep {
    pub from: u8,
    pub to: u8,
    pub band: MatchBand,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeChart {
    pub value: u8,
    pub max: u8,
    pub steps: Vec<GaugeStep>,
}

/// A bar in the skills breakdown chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCount {
    pub category: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Charts {
    pub gauge: GaugeChart,
    pub skills_breakdown: Vec<SkillCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scorecard {
    pub match_label: String,      // "82%"
    pub match_band: MatchBand,
    pub verdict_tone: VerdictTone,
    pub experience_label: String, // "8/10"
    pub education_label: String,
    /// matched / (matched + missing); `None` when the model listed no skills at all.
    pub skill_coverage: Option<f32>,
    /// Omitted when the caller turned visual analytics off.
    pub charts: Option<Charts>,
}

pub fn build_scorecard(result: &EvaluationResult, show_charts: bool) -> Scorecard {
    let matched = result.skills_match.matched_skills.len();
    let missing = result.skills_match.missing_skills.len();
    let skill_coverage = match matched + missing {
        0 => None,
        total => Some(matched as f32 / total as f32),
    };

    let charts = show_charts.then(|| Charts {
        gauge: GaugeChart {
            value: result.match_score,
            max: MATCH_SCORE_MAX,
            steps: vec![
                GaugeStep {
                    from: 0,
                    to: MODERATE_FROM,
                    band: MatchBand::Low,
                },
                GaugeStep {
                    from: MODERATE_FROM,
                    to: STRONG_FROM,
                    band: MatchBand::Moderate,
                },
                GaugeStep {
                    from: STRONG_FROM,
                    to: MATCH_SCORE_MAX,
                    band: MatchBand::Strong,
                },
            ],
        },
        skills_breakdown: vec![
            SkillCount {
                category: "Matched".to_string(),
                count: matched,
            },
            SkillCount {
                category: "Missing".to_string(),
                count: missing,
            },
        ],
    });

    Scorecard {
        match_label: format!("{}%", result.match_score),
        match_band: MatchBand::for_score(result.match_score),
        verdict_tone: result.verdict.into(),
        experience_label: format!("{}/10", result.experience_score),
        education_label: result.education_relevance.label().to_string(),
        skill_coverage,
        charts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::models::sample_result;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(MatchBand::for_score(0), MatchBand::Low);
        assert_eq!(MatchBand::for_score(49), MatchBand::Low);
        assert_eq!(MatchBand::for_score(50), MatchBand::Moderate);
        assert_eq!(MatchBand::for_score(79), MatchBand::Moderate);
        assert_eq!(MatchBand::for_score(80), MatchBand::Strong);
        assert_eq!(MatchBand::for_score(100), MatchBand::Strong);
    }

    #[test]
    fn test_verdict_tones() {
        assert_eq!(VerdictTone::from(Verdict::Shortlist), VerdictTone::Positive);
        assert_eq!(VerdictTone::from(Verdict::Consider), VerdictTone::Caution);
        assert_eq!(VerdictTone::from(Verdict::Reject), VerdictTone::Negative);
    }

    #[test]
    fn test_scorecard_from_sample() {
        let card = build_scorecard(&sample_result(), true);
        assert_eq!(card.match_label, "82%");
        assert_eq!(card.match_band, MatchBand::Strong);
        assert_eq!(card.verdict_tone, VerdictTone::Positive);
        assert_eq!(card.experience_label, "8/10");
        assert_eq!(card.education_label, "Relevant");
        assert!((card.skill_coverage.unwrap() - 0.75).abs() < f32::EPSILON);

        let charts = card.charts.unwrap();
        assert_eq!(charts.gauge.value, 82);
        assert_eq!(charts.gauge.steps.len(), 3);
        assert_eq!(charts.skills_breakdown[0].count, 3);
        assert_eq!(charts.skills_breakdown[1].category, "Missing");
        assert_eq!(charts.skills_breakdown[1].count, 1);
    }

    #[test]
    fn test_charts_omitted_when_disabled() {
        let card = build_scorecard(&sample_result(), false);
        assert!(card.charts.is_none());
        assert_eq!(card.match_band, MatchBand::Strong);
    }

    #[test]
    fn test_no_skills_means_no_coverage() {
        let mut result = sample_result();
        result.skills_match.matched_skills.clear();
        result.skills_match.missing_skills.clear();
        assert_eq!(build_scorecard(&result, true).skill_coverage, None);
    }
}
