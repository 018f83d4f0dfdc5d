//! The sales aptitude assessment pipeline.
//!
//! The question catalog feeds the scoring engine; its score set feeds the
//! analysis engine and the feedback composer. The similarity scorer is an
//! independent signal over free-text answers. Every operation is a total,
//! side-effect-free function: malformed answers are silently excluded rather
//! than rejected so partial submissions still score.

pub mod analysis;
pub mod catalog;
pub mod domain;
pub mod feedback;
pub mod result;
pub mod scoring;
pub mod similarity;

#[cfg(test)]
mod tests;

pub use analysis::{analyze, generate_recommendations, Analysis};
pub use domain::{
    AnswerSet, Category, CategoryScores, Question, QuestionKind, UnknownCategory, LIKERT_OPTIONS,
    OVERALL_KEY,
};
pub use feedback::{
    analyze_response_patterns, generate_personalized_feedback, Feedback, PatternAnalysis,
};
pub use result::AssessmentResult;
pub use scoring::calculate_scores;
pub use similarity::SimilarityScorer;
