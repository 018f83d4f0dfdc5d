use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The fixed 5-point agreement scale shared by every Likert question.
pub const LIKERT_OPTIONS: [&str; 5] = [
    "Strongly Disagree",
    "Disagree",
    "Neutral",
    "Agree",
    "Strongly Agree",
];

/// Synthetic score key holding the cross-category mean.
pub const OVERALL_KEY: &str = "overall";

/// The ten behavioral traits the assessment measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    RelationshipBuilding,
    Resilience,
    Persuasion,
    Listening,
    ProblemSolving,
    GoalOrientation,
    Adaptability,
    ProductKnowledge,
    Negotiation,
    TimeManagement,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::RelationshipBuilding,
        Category::Resilience,
        Category::Persuasion,
        Category::Listening,
        Category::ProblemSolving,
        Category::GoalOrientation,
        Category::Adaptability,
        Category::ProductKnowledge,
        Category::Negotiation,
        Category::TimeManagement,
    ];

    /// Stable key used in score maps and serialized payloads.
    pub const fn key(self) -> &'static str {
        match self {
            Category::RelationshipBuilding => "relationship_building",
            Category::Resilience => "resilience",
            Category::Persuasion => "persuasion",
            Category::Listening => "listening",
            Category::ProblemSolving => "problem_solving",
            Category::GoalOrientation => "goal_orientation",
            Category::Adaptability => "adaptability",
            Category::ProductKnowledge => "product_knowledge",
            Category::Negotiation => "negotiation",
            Category::TimeManagement => "time_management",
        }
    }

    /// Human-readable label for UI surfaces.
    pub const fn label(self) -> &'static str {
        match self {
            Category::RelationshipBuilding => "Relationship Building",
            Category::Resilience => "Resilience",
            Category::Persuasion => "Persuasion",
            Category::Listening => "Active Listening",
            Category::ProblemSolving => "Problem Solving",
            Category::GoalOrientation => "Goal Orientation",
            Category::Adaptability => "Adaptability",
            Category::ProductKnowledge => "Product Knowledge",
            Category::Negotiation => "Negotiation Skills",
            Category::TimeManagement => "Time Management",
        }
    }

    pub fn from_key(key: &str) -> Result<Self, UnknownCategory> {
        Category::ALL
            .into_iter()
            .find(|category| category.key() == key)
            .ok_or_else(|| UnknownCategory(key.to_string()))
    }
}

/// Raised when a caller-supplied key is not one of the ten trait keys.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown assessment category '{0}'")]
pub struct UnknownCategory(pub String);

/// A single catalog entry presented to the test taker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub category: Category,
    #[serde(default = "default_weight")]
    pub weight: f64,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

fn default_weight() -> f64 {
    1.0
}

/// Closed set of question variants; scoring dispatches exhaustively on this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionKind {
    Likert,
    Scenario {
        options: Vec<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        correct_index: Option<usize>,
    },
    OpenEnded {
        /// Word bounds are UI validation hints; scoring never consults them.
        #[serde(skip_serializing_if = "Option::is_none")]
        min_words: Option<usize>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max_words: Option<usize>,
    },
}

impl Question {
    /// Response options to render, when the variant has a fixed set.
    pub fn options(&self) -> Option<Vec<&str>> {
        match &self.kind {
            QuestionKind::Likert => Some(LIKERT_OPTIONS.to_vec()),
            QuestionKind::Scenario { options, .. } => {
                Some(options.iter().map(String::as_str).collect())
            }
            QuestionKind::OpenEnded { .. } => None,
        }
    }
}

/// Submitted answers keyed by question id as it arrives from the form layer.
pub type AnswerSet = BTreeMap<String, String>;

/// Per-category scores in [1.0, 5.0] plus the synthetic `overall` mean.
///
/// Built fresh per submission. An empty set is the "no assessment available"
/// terminal state and is distinct from any numeric score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryScores(BTreeMap<String, f64>);

impl CategoryScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, score: f64) {
        self.0.insert(key.into(), score);
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.get(key).copied()
    }

    pub fn overall(&self) -> Option<f64> {
        self.get(OVERALL_KEY)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(key, score)| (key.as_str(), *score))
    }

    /// Iterate category entries, skipping the synthetic `overall` key.
    pub fn categories(&self) -> impl Iterator<Item = (&str, f64)> {
        self.iter().filter(|(key, _)| *key != OVERALL_KEY)
    }
}

impl FromIterator<(String, f64)> for CategoryScores {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
