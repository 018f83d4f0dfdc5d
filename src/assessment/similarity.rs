//! Reference-based quality scoring for free-text answers.
//!
//! Each known trait carries a small fixed corpus of ideal-answer sentences. A
//! response is projected into that trait's TF-IDF space and scored by its best
//! cosine match against the references. The spaces are built once at startup
//! and are read-only afterwards, so a single scorer can serve any number of
//! concurrent submissions.

use std::collections::BTreeMap;

use tracing::debug;

use super::domain::round2;

const NEUTRAL_SCORE: f64 = 3.0;

const STOP_WORDS: [&str; 97] = [
    "a", "about", "above", "after", "again", "all", "am", "an", "and", "any", "are", "as", "at",
    "be", "because", "been", "before", "being", "both", "but", "by", "can", "do", "does", "down",
    "during", "each", "few", "for", "from", "had", "has", "have", "he", "her", "here", "hers",
    "him", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just", "me",
    "more", "most", "my", "myself", "no", "nor", "not", "of", "off", "on", "once", "only", "or",
    "other", "our", "out", "over", "own", "same", "she", "so", "some", "such", "than", "that",
    "the", "their", "them", "then", "there", "these", "they", "this", "those", "through", "to",
    "too", "under", "until", "up", "very", "was", "we", "were", "what", "when", "where",
];

/// Hand-authored ideal answers anchoring each trait's similarity space.
///
/// Traits without exemplars degrade to the neutral default at query time.
fn reference_exemplars() -> BTreeMap<String, Vec<String>> {
    let mut references = BTreeMap::new();
    references.insert(
        "relationship_building".to_string(),
        vec![
            "I focus on finding common interests and asking thoughtful questions.".to_string(),
            "I make sure to remember personal details and follow up on previous conversations."
                .to_string(),
            "I try to be authentic and show genuine interest in the other person.".to_string(),
        ],
    );
    references.insert(
        "persuasion".to_string(),
        vec![
            "I present clear benefits and address objections directly.".to_string(),
            "I use stories and examples to illustrate my points.".to_string(),
            "I focus on understanding their needs first, then align my proposal with those needs."
                .to_string(),
        ],
    );
    references.insert(
        "product_knowledge".to_string(),
        vec![
            "I study all product documentation thoroughly and practice explaining features."
                .to_string(),
            "I use the product myself to understand its strengths and limitations.".to_string(),
            "I talk to existing customers about their experience with the product.".to_string(),
        ],
    );
    references
}

struct TermEntry {
    index: usize,
    idf: f64,
}

/// One trait's fitted vector space: vocabulary with IDF weights plus the
/// L2-normalised reference vectors.
struct CategorySpace {
    terms: BTreeMap<String, TermEntry>,
    references: Vec<Vec<f64>>,
}

impl CategorySpace {
    fn fit(exemplars: &[String]) -> Option<Self> {
        let tokenized: Vec<Vec<String>> = exemplars.iter().map(|text| tokenize(text)).collect();

        let mut document_frequency: BTreeMap<String, usize> = BTreeMap::new();
        for tokens in &tokenized {
            let mut seen: Vec<&str> = Vec::new();
            for token in tokens {
                if !seen.contains(&token.as_str()) {
                    seen.push(token);
                    *document_frequency.entry(token.clone()).or_insert(0) += 1;
                }
            }
        }

        if document_frequency.is_empty() {
            return None;
        }

        let document_count = tokenized.len() as f64;
        let terms: BTreeMap<String, TermEntry> = document_frequency
            .into_iter()
            .enumerate()
            .map(|(index, (term, df))| {
                // Smoothed IDF so terms present in every exemplar still carry weight.
                let idf = ((1.0 + document_count) / (1.0 + df as f64)).ln() + 1.0;
                (term, TermEntry { index, idf })
            })
            .collect();

        let references = tokenized
            .iter()
            .map(|tokens| weighted_vector(tokens, &terms))
            .collect();

        Some(Self { terms, references })
    }

    /// Project a response into this space; out-of-vocabulary terms contribute
    /// zero weight and never expand the vocabulary.
    fn max_similarity(&self, response: &str) -> f64 {
        let vector = weighted_vector(&tokenize(response), &self.terms);
        self.references
            .iter()
            .map(|reference| dot(&vector, reference))
            .fold(0.0, f64::max)
    }
}

fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.len() >= 2 && !STOP_WORDS.contains(token))
        .map(str::to_string)
        .collect()
}

fn weighted_vector(tokens: &[String], terms: &BTreeMap<String, TermEntry>) -> Vec<f64> {
    let mut vector = vec![0.0; terms.len()];
    for token in tokens {
        if let Some(entry) = terms.get(token) {
            vector[entry.index] += entry.idf;
        }
    }

    let norm = vector.iter().map(|value| value * value).sum::<f64>().sqrt();
    if norm > 0.0 {
        for value in &mut vector {
            *value /= norm;
        }
    }
    vector
}

fn dot(left: &[f64], right: &[f64]) -> f64 {
    left.iter().zip(right).map(|(a, b)| a * b).sum()
}

/// Deterministic nearest-reference-match scorer for open-ended responses.
pub struct SimilarityScorer {
    spaces: BTreeMap<String, CategorySpace>,
}

impl SimilarityScorer {
    /// Build the scorer from the bundled reference exemplars.
    pub fn new() -> Self {
        Self::with_references(reference_exemplars())
    }

    /// Build per-category spaces from caller-supplied exemplars. Categories
    /// with no usable vocabulary are left out and answer with the neutral
    /// default.
    pub fn with_references(references: BTreeMap<String, Vec<String>>) -> Self {
        let mut spaces = BTreeMap::new();
        for (category, exemplars) in references {
            if let Some(space) = CategorySpace::fit(&exemplars) {
                debug!(
                    %category,
                    references = space.references.len(),
                    vocabulary = space.terms.len(),
                    "built similarity space"
                );
                spaces.insert(category, space);
            }
        }
        Self { spaces }
    }

    /// Score a free-text response against a trait's references, in [1.0, 5.0].
    ///
    /// Only literal absence of input or category returns the 3.0 default with
    /// no vectorization attempted. Any non-empty text, whitespace included,
    /// is vectorized; sharing no vocabulary with any exemplar scores 1.0,
    /// not the neutral default.
    pub fn score(&self, response: &str, category: &str) -> f64 {
        if response.is_empty() {
            return NEUTRAL_SCORE;
        }

        let Some(space) = self.spaces.get(category) else {
            return NEUTRAL_SCORE;
        };

        let similarity = space.max_similarity(response);
        round2(1.0 + similarity * 4.0)
    }
}

impl Default for SimilarityScorer {
    fn default() -> Self {
        Self::new()
    }
}
