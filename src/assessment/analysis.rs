//! Qualitative classification of a scored submission.

use serde::{Deserialize, Serialize};

use super::domain::CategoryScores;

/// Scores at or above this mark a trait as a strength.
pub const STRENGTH_THRESHOLD: f64 = 4.0;
/// Scores below this mark a trait as an area for improvement.
pub const IMPROVEMENT_THRESHOLD: f64 = 3.0;

const NO_SCORES_ASSESSMENT: &str = "No scores available for assessment.";

/// Derived view of a score set; recomputing from the same scores is idempotent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub strengths: Vec<String>,
    pub areas_for_improvement: Vec<String>,
    pub overall_assessment: String,
}

/// Classify categories into strengths and weaknesses and tier the overall score.
pub fn analyze(scores: &CategoryScores) -> Analysis {
    if scores.is_empty() {
        return Analysis {
            strengths: Vec::new(),
            areas_for_improvement: Vec::new(),
            overall_assessment: NO_SCORES_ASSESSMENT.to_string(),
        };
    }

    let strengths = scores
        .categories()
        .filter(|(_, score)| *score >= STRENGTH_THRESHOLD)
        .map(|(category, _)| category.to_string())
        .collect();

    let areas_for_improvement = scores
        .categories()
        .filter(|(_, score)| *score < IMPROVEMENT_THRESHOLD)
        .map(|(category, _)| category.to_string())
        .collect();

    Analysis {
        strengths,
        areas_for_improvement,
        overall_assessment: overall_assessment(scores.overall().unwrap_or(0.0)).to_string(),
    }
}

/// Fixed tier lookup for the overall score; descending check order, first match wins.
fn overall_assessment(overall: f64) -> &'static str {
    if overall >= 4.5 {
        "Exceptional sales potential across multiple dimensions."
    } else if overall >= 4.0 {
        "Strong sales aptitude with well-developed core skills."
    } else if overall >= 3.5 {
        "Good sales potential with some notable strengths."
    } else if overall >= 3.0 {
        "Moderate sales aptitude with potential for growth."
    } else if overall >= 2.5 {
        "Some sales capabilities but significant development needed."
    } else {
        "Limited natural sales aptitude; consider roles that align with other strengths."
    }
}

/// Ordered recommendation list: the tier-based sentence first, then the
/// strengths-leverage and improvement-focus sentences when those sets are
/// non-empty. Pure function of the overall tier and the two sets.
pub fn generate_recommendations(scores: &CategoryScores, analysis: &Analysis) -> Vec<String> {
    let mut recommendations = Vec::new();

    let overall = scores.overall().unwrap_or(0.0);
    if overall >= 4.0 {
        recommendations.push(
            "Your profile indicates strong potential for sales roles that require relationship building."
                .to_string(),
        );
    } else if overall >= 3.0 {
        recommendations.push(
            "Consider roles that leverage your strengths while providing support in areas for development."
                .to_string(),
        );
    } else {
        recommendations.push(
            "Focus on developing core sales skills through training and mentorship.".to_string(),
        );
    }

    if !analysis.strengths.is_empty() {
        recommendations.push(format!(
            "Leverage your strengths in {} to maximize your sales effectiveness.",
            analysis.strengths.join(", ")
        ));
    }

    if !analysis.areas_for_improvement.is_empty() {
        recommendations.push(format!(
            "Focus on developing your skills in {} to become a more well-rounded sales professional.",
            analysis.areas_for_improvement.join(", ")
        ));
    }

    recommendations
}
