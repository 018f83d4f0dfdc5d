//! End-to-end specifications for the assessment pipeline.
//!
//! Scenarios run the shipped question catalog through the public scoring,
//! analysis, and feedback surfaces the way the hosting web layer would,
//! without reaching into private modules.

use aptitude_ai::assessment::{
    analyze, analyze_response_patterns, calculate_scores, catalog, generate_personalized_feedback,
    AnswerSet, AssessmentResult, Category, SimilarityScorer,
};

fn submission(pairs: &[(&str, &str)]) -> AnswerSet {
    pairs
        .iter()
        .map(|(id, value)| (id.to_string(), value.to_string()))
        .collect()
}

#[test]
fn catalog_ships_the_full_bank_with_unique_ids() {
    let questions = catalog::questions();

    assert_eq!(questions.len(), 18);
    let mut ids: Vec<u32> = questions.iter().map(|q| q.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 18, "question ids must be unique");

    let eleven = catalog::question_by_id(11).expect("question 11 exists");
    assert_eq!(eleven.category, Category::Negotiation);
    assert!(catalog::question_by_id(99).is_none());
}

#[test]
fn catalog_filters_by_category_and_caps_length() {
    let resilience = catalog::questions_by_category(Category::Resilience);
    assert_eq!(resilience.len(), 2);

    let capped = catalog::questions_for_test(Some(5), None);
    assert_eq!(capped.len(), 5);

    let filtered = catalog::questions_for_test(None, Some(&[Category::Persuasion]));
    assert!(filtered
        .iter()
        .all(|question| question.category == Category::Persuasion));

    // A zero limit caps nothing and hands back the whole bank.
    let uncapped = catalog::questions_for_test(Some(0), None);
    assert_eq!(uncapped.len(), 18);
}

#[test]
fn a_single_agree_answer_scores_strong_relationship_building() {
    let questions = catalog::questions();

    let scores = calculate_scores(&submission(&[("1", "Agree")]), &questions);

    assert_eq!(scores.get("relationship_building"), Some(4.0));
    assert_eq!(scores.overall(), Some(4.0));
    assert_eq!(scores.len(), 2);

    let analysis = analyze(&scores);
    assert_eq!(analysis.strengths, vec!["relationship_building"]);
    assert_eq!(
        analysis.overall_assessment,
        "Strong sales aptitude with well-developed core skills."
    );
}

#[test]
fn picking_the_designated_scenario_answer_scores_five() {
    let questions = catalog::questions();
    let answers = submission(&[(
        "11",
        "Ask more questions to understand their budget constraints",
    )]);

    let scores = calculate_scores(&answers, &questions);

    assert_eq!(scores.get("negotiation"), Some(5.0));
}

#[test]
fn an_empty_submission_is_no_assessment_not_a_zero_score() {
    let questions = catalog::questions();

    let scores = calculate_scores(&submission(&[]), &questions);
    assert!(scores.is_empty());
    assert_eq!(scores.overall(), None);

    let analysis = analyze(&scores);
    assert!(analysis.strengths.is_empty());
    assert!(analysis.areas_for_improvement.is_empty());
    assert_eq!(
        analysis.overall_assessment,
        "No scores available for assessment."
    );
}

#[test]
fn the_result_aggregate_carries_scores_analysis_and_recommendations() {
    let questions = catalog::questions();
    let answers = submission(&[
        ("1", "Strongly Agree"),
        ("2", "Disagree"),
        ("11", "Emphasize the value and ROI of your product"),
        ("16", "I walked them through the trade-offs until we agreed."),
    ]);

    let mut result = AssessmentResult::new("candidate-42", answers);
    result.calculate_scores(&questions);
    let analysis = result.generate_analysis().clone();

    assert_eq!(result.scores.get("relationship_building"), Some(5.0));
    assert_eq!(result.scores.get("resilience"), Some(2.0));
    assert_eq!(result.scores.get("negotiation"), Some(4.0));
    assert_eq!(result.scores.get("persuasion"), Some(3.0));
    assert_eq!(result.scores.overall(), Some(3.5));

    assert_eq!(analysis.strengths, vec!["negotiation", "relationship_building"]);
    assert_eq!(analysis.areas_for_improvement, vec!["resilience"]);
    assert_eq!(result.recommendations.len(), 3);

    let payload = result.to_json();
    assert_eq!(payload["user_id"], "candidate-42");
    assert_eq!(payload["scores"]["overall"], 3.5);
    assert_eq!(
        payload["analysis"]["overall_assessment"],
        "Good sales potential with some notable strengths."
    );
}

#[test]
fn pattern_and_feedback_composers_run_off_the_same_submission() {
    let questions = catalog::questions();
    let answers = submission(&[
        ("1", "Agree"),
        ("2", "Agree"),
        ("3", "Agree"),
        ("4", "Agree"),
    ]);

    let patterns = analyze_response_patterns(&answers);
    assert_eq!(patterns.patterns_detected, vec!["Limited response variety"]);

    let scores = calculate_scores(&answers, &questions);
    let analysis = analyze(&scores);
    let feedback = generate_personalized_feedback(&scores, &analysis);

    assert_eq!(feedback.strengths.len(), 4);
    assert!(feedback.areas_for_improvement.is_empty());
    assert_eq!(
        feedback.recommendations,
        vec![
            "Your profile indicates strong potential for consultative sales roles that require relationship building and problem-solving."
        ]
    );
}

#[test]
fn similarity_scoring_stays_an_independent_signal() {
    let questions = catalog::questions();
    let scorer = SimilarityScorer::new();
    let free_text = "I study all product documentation thoroughly and practice explaining features.";

    // The rubric keeps the open-ended answer neutral regardless of quality.
    let scores = calculate_scores(&submission(&[("18", free_text)]), &questions);
    assert_eq!(scores.get("product_knowledge"), Some(3.0));

    // The caller can layer the similarity signal on top.
    assert_eq!(scorer.score(free_text, "product_knowledge"), 5.0);
    assert_eq!(scorer.score("", "product_knowledge"), 3.0);
}
