//! Response-pattern checks and user-facing feedback text.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::analysis::{Analysis, IMPROVEMENT_THRESHOLD, STRENGTH_THRESHOLD};
use super::domain::{round2, AnswerSet, CategoryScores, LIKERT_OPTIONS};

/// Response-variety signal over the Likert portion of a submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternAnalysis {
    pub consistency_score: f64,
    pub patterns_detected: Vec<String>,
}

/// Check the Likert answers for response-variety anomalies.
///
/// A submission with no Likert answers carries no variety signal and is
/// treated as neutral rather than penalized.
pub fn analyze_response_patterns(answers: &AnswerSet) -> PatternAnalysis {
    let distinct_labels: BTreeSet<&str> = answers
        .values()
        .map(String::as_str)
        .filter(|value| LIKERT_OPTIONS.contains(value))
        .collect();

    let variety = if distinct_labels.is_empty() {
        1.0
    } else {
        // Three distinct labels are enough for a full variety score.
        (distinct_labels.len() as f64 / 3.0).min(1.0)
    };

    let patterns_detected = if variety < 0.7 {
        vec!["Limited response variety".to_string()]
    } else {
        Vec::new()
    };

    PatternAnalysis {
        consistency_score: round2(variety * 5.0),
        patterns_detected,
    }
}

/// Per-category feedback text plus recommendations, composed per request and
/// never persisted on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub strengths: Vec<String>,
    pub areas_for_improvement: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Compose category-specific feedback from a score set.
///
/// The recommendation tiering here is deliberately a second, simpler copy of
/// the overall-score rule used for user-facing text; it may diverge from the
/// analysis engine's assessment wording and the two are kept separate.
pub fn generate_personalized_feedback(scores: &CategoryScores, _analysis: &Analysis) -> Feedback {
    let mut strengths = Vec::new();
    let mut areas_for_improvement = Vec::new();

    for (category, score) in scores.categories() {
        if score >= STRENGTH_THRESHOLD {
            strengths.push(strength_feedback(category));
        } else if score < IMPROVEMENT_THRESHOLD {
            areas_for_improvement.push(improvement_feedback(category));
        }
    }

    let overall = scores.overall().unwrap_or(0.0);
    let recommendation = if overall >= 4.0 {
        "Your profile indicates strong potential for consultative sales roles that require relationship building and problem-solving."
    } else if overall >= 3.0 {
        "Consider roles that leverage your strengths while providing training in your development areas."
    } else {
        "Focus on developing your core sales skills through structured training programs and mentorship."
    };

    Feedback {
        strengths,
        areas_for_improvement,
        recommendations: vec![recommendation.to_string()],
    }
}

fn strength_feedback(category: &str) -> String {
    match category {
        "relationship_building" => {
            "You excel at building relationships, which is fundamental to sales success."
        }
        "resilience" => {
            "Your resilience will help you handle rejection and persist through sales challenges."
        }
        "persuasion" => {
            "You demonstrate strong persuasion skills, helping you influence customer decisions."
        }
        "listening" => {
            "Your active listening skills allow you to understand customer needs effectively."
        }
        "problem_solving" => {
            "You're skilled at problem-solving, which helps in creating value for customers."
        }
        "goal_orientation" => "Your goal orientation will drive consistent sales performance.",
        "adaptability" => {
            "Your adaptability allows you to adjust your approach based on customer needs."
        }
        "product_knowledge" => {
            "You prioritize product knowledge, which builds credibility with customers."
        }
        "negotiation" => {
            "Your negotiation skills help you close deals while maintaining relationships."
        }
        "time_management" => "Your time management skills enable you to maximize productivity.",
        other => return format!("You show strength in {other}."),
    }
    .to_string()
}

fn improvement_feedback(category: &str) -> String {
    match category {
        "relationship_building" => {
            "Work on developing your relationship-building skills by practicing active networking."
        }
        "resilience" => {
            "Develop resilience by reframing rejection as a learning opportunity rather than a personal failure."
        }
        "persuasion" => {
            "Enhance your persuasion skills by studying successful sales conversations and practicing your pitch."
        }
        "listening" => {
            "Improve active listening by focusing completely on the customer before formulating your response."
        }
        "problem_solving" => {
            "Strengthen your problem-solving by analyzing customer challenges more deeply before offering solutions."
        }
        "goal_orientation" => {
            "Develop your goal orientation by setting specific, measurable sales targets and tracking progress."
        }
        "adaptability" => {
            "Work on adaptability by preparing multiple approaches for different customer scenarios."
        }
        "product_knowledge" => {
            "Deepen your product knowledge through regular study and hands-on experience with your offerings."
        }
        "negotiation" => {
            "Improve negotiation skills by preparing thoroughly and focusing on value rather than price."
        }
        "time_management" => {
            "Enhance time management by prioritizing high-value activities and reducing distractions."
        }
        other => return format!("Focus on developing your skills in {other}."),
    }
    .to_string()
}
