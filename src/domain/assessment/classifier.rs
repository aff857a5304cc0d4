//! Keyword classifier - maps free-text answers to a recommendation.
//!
//! A single deterministic pass: build a lowercase haystack from the scored
//! answers, accumulate category scores from [`KEYWORD_SETS`] and the bonus
//! rules, pick the top category, then derive a confidence from how much the
//! scores add up to and how far the winner is ahead.
//!
//! The classifier is total and pure. It performs no I/O and keeps no state
//! between calls.

use super::keywords::{
    BonusScope, Category, BONUS_RULES, CALM_BLOCKERS, CALM_TERMS, CALM_WEIGHT,
    ISOLATION_ESCALATORS, ISOLATION_FRIEND_WEIGHT, ISOLATION_TERMS, ISOLATION_THERAPY_WEIGHT,
    KEYWORD_SETS,
};
use super::{AnswerField, AnswerRecord, Confidence, RecommendationResult, Solution};

/// Starting point for every confidence calculation.
pub const BASE_CONFIDENCE: u32 = 70;

/// Per-category score accumulators for one classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreTriple {
    pub therapy: u32,
    pub friend: u32,
    pub meditation: u32,
}

impl ScoreTriple {
    pub fn new(therapy: u32, friend: u32, meditation: u32) -> Self {
        Self {
            therapy,
            friend,
            meditation,
        }
    }

    /// Adds weight to a category.
    pub fn add(&mut self, category: Category, weight: u32) {
        match category {
            Category::Therapy => self.therapy += weight,
            Category::Friend => self.friend += weight,
            Category::Meditation => self.meditation += weight,
        }
    }

    /// Score accumulated by a category.
    pub fn get(&self, category: Category) -> u32 {
        match category {
            Category::Therapy => self.therapy,
            Category::Friend => self.friend,
            Category::Meditation => self.meditation,
        }
    }

    pub fn total(&self) -> u32 {
        self.therapy + self.friend + self.meditation
    }

    pub fn max(&self) -> u32 {
        self.therapy.max(self.friend).max(self.meditation)
    }

    /// Second-highest of the three scores. Equals `max()` on a tie for first.
    pub fn second_highest(&self) -> u32 {
        let mut sorted = [self.therapy, self.friend, self.meditation];
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        sorted[1]
    }

    /// Lead of the winner over the runner-up.
    pub fn gap(&self) -> u32 {
        self.max() - self.second_highest()
    }

    /// Winning category, or `None` when nothing scored.
    ///
    /// Ties go to the earliest category in [`Category::PRIORITY`].
    pub fn winner(&self) -> Option<Category> {
        let max = self.max();
        if max == 0 {
            return None;
        }
        Category::PRIORITY
            .into_iter()
            .find(|category| self.get(*category) == max)
    }

    /// Recommended solution. Meditation when nothing scored.
    pub fn solution(&self) -> Solution {
        self.winner()
            .map(|category| category.solution())
            .unwrap_or(Solution::Meditation)
    }

    /// Confidence derived from total score and winning margin.
    pub fn confidence(&self) -> Confidence {
        let total_bonus = match self.total() {
            t if t > 15 => 15,
            t if t > 10 => 10,
            t if t > 5 => 5,
            _ => 0,
        };
        let gap_bonus = match self.gap() {
            g if g > 5 => 10,
            g if g > 3 => 5,
            _ => 0,
        };
        Confidence::new(BASE_CONFIDENCE + total_bonus + gap_bonus)
    }

    /// Final result for these scores.
    pub fn to_result(&self) -> RecommendationResult {
        RecommendationResult::new(self.solution(), self.confidence())
    }
}

/// Rule-based recommendation classifier.
pub struct KeywordClassifier;

impl KeywordClassifier {
    /// Classifies a set of answers.
    pub fn classify(answers: &AnswerRecord) -> RecommendationResult {
        Self::score(answers).to_result()
    }

    /// Runs the scoring pass without deciding.
    pub fn score(answers: &AnswerRecord) -> ScoreTriple {
        let haystack = Self::haystack(answers);
        let mut scores = ScoreTriple::default();

        for set in &KEYWORD_SETS {
            for (keyword, weight) in set.weighted() {
                if haystack.contains(keyword) {
                    scores.add(set.category, weight);
                }
            }
        }

        for rule in &BONUS_RULES {
            let matched = match rule.scope {
                BonusScope::Field(field) => {
                    contains_any(&answers.get(field).to_lowercase(), rule.triggers)
                }
                BonusScope::Haystack => contains_any(&haystack, rule.triggers),
            };
            if matched {
                scores.add(rule.category, rule.weight);
            }
        }

        if contains_any(&haystack, ISOLATION_TERMS) {
            if contains_any(&haystack, ISOLATION_ESCALATORS) {
                scores.add(Category::Therapy, ISOLATION_THERAPY_WEIGHT);
            } else {
                scores.add(Category::Friend, ISOLATION_FRIEND_WEIGHT);
            }
        }

        if contains_any(&haystack, CALM_TERMS) && !contains_any(&haystack, CALM_BLOCKERS) {
            scores.add(Category::Meditation, CALM_WEIGHT);
        }

        scores
    }

    /// Lowercase, space-separated concatenation of every scored answer.
    pub fn haystack(answers: &AnswerRecord) -> String {
        AnswerField::ALL
            .iter()
            .filter(|field| field.is_scored())
            .map(|field| answers.get(*field))
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }
}

/// Classifies a set of answers with the keyword classifier.
pub fn classify(answers: &AnswerRecord) -> RecommendationResult {
    KeywordClassifier::classify(answers)
}

fn contains_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| text.contains(needle))
}
