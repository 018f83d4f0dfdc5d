use crate::assessment::domain::{AnswerSet, Category, CategoryScores, Question, QuestionKind};

pub(super) fn likert_question(id: u32, category: Category) -> Question {
    weighted_likert_question(id, category, 1.0)
}

pub(super) fn weighted_likert_question(id: u32, category: Category, weight: f64) -> Question {
    Question {
        id,
        text: format!("Likert question {id}"),
        category,
        weight,
        kind: QuestionKind::Likert,
    }
}

/// Scenario question with numbered options `Option 1` through `Option {count}`.
pub(super) fn scenario_question(
    id: u32,
    category: Category,
    option_count: usize,
    correct_index: Option<usize>,
) -> Question {
    Question {
        id,
        text: format!("Scenario question {id}"),
        category,
        weight: 1.0,
        kind: QuestionKind::Scenario {
            options: (1..=option_count).map(|n| format!("Option {n}")).collect(),
            correct_index,
        },
    }
}

pub(super) fn open_ended_question(id: u32, category: Category) -> Question {
    Question {
        id,
        text: format!("Open-ended question {id}"),
        category,
        weight: 1.0,
        kind: QuestionKind::OpenEnded {
            min_words: Some(50),
            max_words: None,
        },
    }
}

pub(super) fn answers(pairs: &[(&str, &str)]) -> AnswerSet {
    pairs
        .iter()
        .map(|(id, value)| (id.to_string(), value.to_string()))
        .collect()
}

pub(super) fn scores_with(entries: &[(&str, f64)]) -> CategoryScores {
    entries
        .iter()
        .map(|(key, score)| (key.to_string(), *score))
        .collect()
}
