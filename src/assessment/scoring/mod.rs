//! Deterministic rubric converting heterogeneous answers into category scores.

mod rules;

use std::collections::BTreeMap;

use tracing::debug;

use super::domain::{round2, AnswerSet, Category, CategoryScores, Question, OVERALL_KEY};

/// Compute per-category averages and the overall mean for a submission.
///
/// Malformed entries are dropped, never rejected: an unparseable question id,
/// an id with no matching question, or an answer the variant rules cannot
/// score all contribute nothing, so partial submissions still score.
/// A category is present in the output only if at least one answer scored
/// into it; an all-invalid submission yields an empty set with no `overall`
/// key, which callers must treat as "no assessment available".
pub fn calculate_scores(answers: &AnswerSet, questions: &[Question]) -> CategoryScores {
    let mut accumulators: BTreeMap<Category, (f64, f64)> = BTreeMap::new();

    for (raw_id, answer) in answers {
        let question_id: u32 = match raw_id.parse() {
            Ok(id) => id,
            Err(_) => {
                debug!(%raw_id, "skipping answer with non-numeric question id");
                continue;
            }
        };

        let Some(question) = questions.iter().find(|q| q.id == question_id) else {
            debug!(question_id, "skipping answer with no matching question");
            continue;
        };

        let Some(value) = rules::answer_value(question, answer) else {
            debug!(question_id, "skipping answer the rubric cannot score");
            continue;
        };

        let entry = accumulators.entry(question.category).or_insert((0.0, 0.0));
        entry.0 += value * question.weight;
        entry.1 += question.weight;
    }

    let mut scores = CategoryScores::new();
    for (category, (sum, weight)) in &accumulators {
        if *weight > 0.0 {
            scores.insert(category.key(), round2(sum / weight));
        }
    }

    // Overall is the unweighted mean of the rounded per-category scores, so
    // each category counts once no matter how many questions fed it.
    if !scores.is_empty() {
        let total: f64 = scores.iter().map(|(_, score)| score).sum();
        let overall = round2(total / scores.len() as f64);
        scores.insert(OVERALL_KEY, overall);
    }

    scores
}
