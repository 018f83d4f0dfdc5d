use super::super::domain::{Question, QuestionKind, LIKERT_OPTIONS};

/// Ordinal value of a Likert label, 1 (Strongly Disagree) through 5 (Strongly Agree).
pub(crate) fn likert_ordinal(label: &str) -> Option<f64> {
    LIKERT_OPTIONS
        .iter()
        .position(|option| *option == label)
        .map(|index| (index + 1) as f64)
}

/// Unweighted 1-5 value of an answer under the variant's rubric.
///
/// `None` means the answer contributes nothing: an unrecognized Likert label,
/// a scenario option not present in the question, or a scenario with no
/// designated best answer.
pub(crate) fn answer_value(question: &Question, answer: &str) -> Option<f64> {
    match &question.kind {
        QuestionKind::Likert => likert_ordinal(answer),
        QuestionKind::Scenario {
            options,
            correct_index,
        } => {
            let correct = (*correct_index)?;
            let selected = options.iter().position(|option| option.as_str() == answer)?;
            if selected == correct {
                Some(5.0)
            } else {
                // Linear partial credit by ordinal distance, floored at 1.
                let distance = (selected as f64 - correct as f64).abs();
                Some((5.0 - distance).max(1.0))
            }
        }
        // The rubric keeps open-ended answers neutral; similarity scoring is
        // a separate signal the caller layers on independently.
        QuestionKind::OpenEnded { .. } => Some(3.0),
    }
}
