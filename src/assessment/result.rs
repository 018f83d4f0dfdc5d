use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::analysis::{analyze, generate_recommendations, Analysis};
use super::domain::{AnswerSet, CategoryScores, Question};
use super::scoring::calculate_scores;

/// A completed submission together with everything derived from it.
///
/// The record is a plain value object; storing it (and deciding whether to
/// cache feedback alongside it) is the caller's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub user_id: String,
    pub answers: AnswerSet,
    pub timestamp: DateTime<Utc>,
    pub scores: CategoryScores,
    pub analysis: Option<Analysis>,
    pub recommendations: Vec<String>,
}

impl AssessmentResult {
    pub fn new(user_id: impl Into<String>, answers: AnswerSet) -> Self {
        Self {
            user_id: user_id.into(),
            answers,
            timestamp: Utc::now(),
            scores: CategoryScores::new(),
            analysis: None,
            recommendations: Vec::new(),
        }
    }

    /// Run the rubric over this submission's answers.
    pub fn calculate_scores(&mut self, questions: &[Question]) -> &CategoryScores {
        self.scores = calculate_scores(&self.answers, questions);
        &self.scores
    }

    /// Derive the analysis and recommendations from the current scores.
    /// Idempotent over the same score set.
    pub fn generate_analysis(&mut self) -> &Analysis {
        let analysis = analyze(&self.scores);
        self.recommendations = if self.scores.is_empty() {
            Vec::new()
        } else {
            generate_recommendations(&self.scores, &analysis)
        };
        self.analysis.insert(analysis)
    }

    /// Serializable shape handed back to the web layer.
    pub fn to_json(&self) -> Value {
        json!({
            "user_id": self.user_id,
            "timestamp": self.timestamp.to_rfc3339(),
            "scores": self.scores,
            "analysis": self.analysis,
            "recommendations": self.recommendations,
        })
    }
}
