//! The fixed question bank backing the sales aptitude test.

use super::domain::{Category, Question, QuestionKind};

fn likert(id: u32, text: &str, category: Category) -> Question {
    Question {
        id,
        text: text.to_string(),
        category,
        weight: 1.0,
        kind: QuestionKind::Likert,
    }
}

fn scenario(
    id: u32,
    text: &str,
    category: Category,
    options: &[&str],
    correct_index: usize,
) -> Question {
    Question {
        id,
        text: text.to_string(),
        category,
        weight: 1.0,
        kind: QuestionKind::Scenario {
            options: options.iter().map(|option| option.to_string()).collect(),
            correct_index: Some(correct_index),
        },
    }
}

fn open_ended(id: u32, text: &str, category: Category, min_words: usize) -> Question {
    Question {
        id,
        text: text.to_string(),
        category,
        weight: 1.0,
        kind: QuestionKind::OpenEnded {
            min_words: Some(min_words),
            max_words: None,
        },
    }
}

/// Return the full question bank for the sales aptitude test.
pub fn questions() -> Vec<Question> {
    vec![
        likert(
            1,
            "I enjoy meeting new people and building relationships.",
            Category::RelationshipBuilding,
        ),
        likert(
            2,
            "I am comfortable with rejection and see it as part of the process.",
            Category::Resilience,
        ),
        likert(
            3,
            "I find it easy to persuade others to see my point of view.",
            Category::Persuasion,
        ),
        likert(
            4,
            "I listen carefully to understand others' needs before offering solutions.",
            Category::Listening,
        ),
        likert(
            5,
            "I enjoy solving complex problems for customers.",
            Category::ProblemSolving,
        ),
        likert(
            6,
            "I set ambitious goals for myself and consistently work to achieve them.",
            Category::GoalOrientation,
        ),
        likert(
            7,
            "I can quickly adapt my approach based on a customer's response.",
            Category::Adaptability,
        ),
        likert(
            8,
            "I enjoy learning detailed information about products and services.",
            Category::ProductKnowledge,
        ),
        likert(
            9,
            "I am comfortable discussing pricing and negotiating terms.",
            Category::Negotiation,
        ),
        likert(
            10,
            "I manage my time effectively to maximize productivity.",
            Category::TimeManagement,
        ),
        scenario(
            11,
            "A potential client is hesitant about your product's price. How would you respond?",
            Category::Negotiation,
            &[
                "Immediately offer a discount to close the deal",
                "Emphasize the value and ROI of your product",
                "Ask more questions to understand their budget constraints",
                "Suggest a smaller package or alternative solution",
            ],
            2,
        ),
        scenario(
            12,
            "You've been trying to reach a prospect for weeks with no response. What would you do?",
            Category::Resilience,
            &[
                "Give up and focus on other prospects",
                "Continue with the same approach, hoping for a response",
                "Try a new communication channel or approach",
                "Escalate to the prospect's manager",
            ],
            2,
        ),
        scenario(
            13,
            "A customer has a complex problem that your product can only partially solve. How do you proceed?",
            Category::ProblemSolving,
            &[
                "Focus only on the aspects your product can solve",
                "Oversell your product's capabilities",
                "Acknowledge limitations and suggest complementary solutions",
                "Refer them to a competitor with a more suitable product",
            ],
            2,
        ),
        scenario(
            14,
            "You have multiple high-priority tasks due today. How do you manage this situation?",
            Category::TimeManagement,
            &[
                "Work on the easiest tasks first to build momentum",
                "Prioritize based on deadline and importance",
                "Ask for deadline extensions on all tasks",
                "Focus on one task and let the others slip",
            ],
            1,
        ),
        scenario(
            15,
            "During a sales presentation, you realize the client is not engaged. What do you do?",
            Category::Adaptability,
            &[
                "Continue with your planned presentation",
                "End the meeting early to respect their time",
                "Pause and ask questions to understand their needs better",
                "Switch to a more entertaining, high-energy presentation style",
            ],
            2,
        ),
        open_ended(
            16,
            "Describe a situation where you successfully persuaded someone to change their mind.",
            Category::Persuasion,
            50,
        ),
        open_ended(
            17,
            "How do you typically build rapport with new people you meet?",
            Category::RelationshipBuilding,
            50,
        ),
        open_ended(
            18,
            "Describe your approach to learning about a new product you need to sell.",
            Category::ProductKnowledge,
            50,
        ),
    ]
}

/// Look up a single question by id.
pub fn question_by_id(question_id: u32) -> Option<Question> {
    questions()
        .into_iter()
        .find(|question| question.id == question_id)
}

/// All questions measuring a given trait.
pub fn questions_by_category(category: Category) -> Vec<Question> {
    questions()
        .into_iter()
        .filter(|question| question.category == category)
        .collect()
}

/// Assemble a test, optionally filtered by trait and capped in length.
/// A limit of zero means no cap.
pub fn questions_for_test(limit: Option<usize>, categories: Option<&[Category]>) -> Vec<Question> {
    let mut selected = questions();

    if let Some(categories) = categories {
        selected.retain(|question| categories.contains(&question.category));
    }

    if let Some(limit) = limit {
        if limit > 0 {
            selected.truncate(limit);
        }
    }

    selected
}
