//! Keyword tables driving the local classifier.
//!
//! Everything here is static configuration. The classifier walks these
//! tables; it holds no keyword knowledge of its own apart from the two
//! conditional rules at the bottom of this file.

use super::{AnswerField, Solution};

/// Outcome category accumulated by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Therapy,
    Friend,
    Meditation,
}

impl Category {
    /// Tie-break order: the first category reaching the top score wins.
    pub const PRIORITY: [Category; 3] = [Category::Therapy, Category::Friend, Category::Meditation];

    /// Outcome recommended when this category wins.
    pub fn solution(&self) -> Solution {
        match self {
            Category::Therapy => Solution::ConsultATherapist,
            Category::Friend => Solution::TalkToAFriend,
            Category::Meditation => Solution::Meditation,
        }
    }
}

/// Ordered keywords scoring a fixed weight for one category.
#[derive(Debug, Clone, Copy)]
pub struct KeywordSet {
    pub category: Category,
    pub weight: u32,
    pub keywords: &'static [&'static str],
}

impl KeywordSet {
    /// `(keyword, weight)` pairs in table order.
    pub fn weighted(&self) -> impl Iterator<Item = (&'static str, u32)> + '_ {
        self.keywords.iter().map(move |k| (*k, self.weight))
    }
}

/// Keyword sets matched against the whole haystack.
///
/// Each entry scores once when it is a substring of the haystack. The
/// therapy list names "medication" twice and both entries score.
pub const KEYWORD_SETS: [KeywordSet; 3] = [
    KeywordSet {
        category: Category::Therapy,
        weight: 3,
        keywords: &[
            "depression",
            "anxiety",
            "panic",
            "trauma",
            "ptsd",
            "suicide",
            "self-harm",
            "abuse",
            "addiction",
            "eating disorder",
            "severe",
            "crisis",
            "therapy",
            "professional help",
            "medication",
            "mental health",
            "bipolar",
            "schizophrenia",
            "months",
            "years",
            "long time",
            "chronic",
            "persistent",
            "overwhelming",
            "can't cope",
            "unbearable",
            "desperate",
            "hopeless",
            "therapy before",
            "counselor",
            "psychiatrist",
            "psychologist",
            "medication",
            "antidepressant",
        ],
    },
    KeywordSet {
        category: Category::Friend,
        weight: 2,
        keywords: &[
            "relationship",
            "family",
            "friends",
            "social",
            "work",
            "colleague",
            "partner",
            "breakup",
            "argument",
            "conflict",
            "misunderstanding",
            "loneliness",
            "isolation",
            "support",
            "talk",
            "advice",
            "communication",
            "trust",
            "betrayal",
            "friendship",
            "romantic",
            "dating",
            "marriage",
            "parents",
            "siblings",
            "workplace",
            "boss",
            "coworker",
            "neighbor",
        ],
    },
    KeywordSet {
        category: Category::Meditation,
        weight: 2,
        keywords: &[
            "stress",
            "overwhelmed",
            "pressure",
            "tired",
            "exhausted",
            "busy",
            "meditation",
            "calm",
            "peace",
            "mindfulness",
            "relaxation",
            "breathing",
            "sleep",
            "insomnia",
            "concentration",
            "focus",
            "inner peace",
            "balance",
            "work stress",
            "deadlines",
            "exams",
            "performance",
            "perfectionism",
            "racing thoughts",
            "worry",
            "tension",
            "restless",
            "agitated",
        ],
    },
];

/// Where a bonus rule looks for its triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BonusScope {
    /// A single answer, lowercased on its own.
    Field(AnswerField),
    /// The concatenated haystack.
    Haystack,
}

/// Flat bonus awarded once when any trigger appears in its scope.
#[derive(Debug, Clone, Copy)]
pub struct BonusRule {
    pub scope: BonusScope,
    pub triggers: &'static [&'static str],
    pub category: Category,
    pub weight: u32,
}

/// Unconditional bonus rules. Order is irrelevant, every rule is additive.
pub const BONUS_RULES: [BonusRule; 6] = [
    BonusRule {
        scope: BonusScope::Field(AnswerField::Severity),
        triggers: &["severe", "extreme", "unbearable", "10", "crisis", "emergency"],
        category: Category::Therapy,
        weight: 5,
    },
    BonusRule {
        scope: BonusScope::Field(AnswerField::Duration),
        triggers: &["months", "years", "long time", "chronic"],
        category: Category::Therapy,
        weight: 4,
    },
    BonusRule {
        scope: BonusScope::Field(AnswerField::Impact),
        triggers: &[
            "can't work",
            "can't sleep",
            "can't eat",
            "everything",
            "completely",
            "unable",
        ],
        category: Category::Therapy,
        weight: 4,
    },
    BonusRule {
        scope: BonusScope::Field(AnswerField::PreviousHelp),
        triggers: &["therapy", "counselor", "psychiatrist", "medication"],
        category: Category::Therapy,
        weight: 3,
    },
    BonusRule {
        scope: BonusScope::Haystack,
        triggers: &["relationship", "family", "partner", "friends"],
        category: Category::Friend,
        weight: 3,
    },
    BonusRule {
        scope: BonusScope::Haystack,
        triggers: &["work", "job", "career", "deadline"],
        category: Category::Meditation,
        weight: 2,
    },
];

/// Isolation terms. Escalate to therapy when paired with an escalator,
/// otherwise favour talking to a friend.
pub const ISOLATION_TERMS: &[&str] = &["alone", "isolated", "no friends", "lonely"];
pub const ISOLATION_ESCALATORS: &[&str] = &["severe", "depression"];
pub const ISOLATION_THERAPY_WEIGHT: u32 = 3;
pub const ISOLATION_FRIEND_WEIGHT: u32 = 4;

/// Stress or anxiety favours meditation unless a blocker is present.
pub const CALM_TERMS: &[&str] = &["stress", "anxiety"];
pub const CALM_BLOCKERS: &[&str] = &["severe", "panic"];
pub const CALM_WEIGHT: u32 = 3;

/// Keyword set for a category.
pub fn keyword_set(category: Category) -> &'static KeywordSet {
    match category {
        Category::Therapy => &KEYWORD_SETS[0],
        Category::Friend => &KEYWORD_SETS[1],
        Category::Meditation => &KEYWORD_SETS[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_keyword_set_per_category() {
        for category in Category::PRIORITY {
            let count = KEYWORD_SETS.iter().filter(|s| s.category == category).count();
            assert_eq!(count, 1, "{:?}", category);
            assert_eq!(keyword_set(category).category, category);
        }
    }

    #[test]
    fn keyword_weights_per_category() {
        assert_eq!(keyword_set(Category::Therapy).weight, 3);
        assert_eq!(keyword_set(Category::Friend).weight, 2);
        assert_eq!(keyword_set(Category::Meditation).weight, 2);
    }

    #[test]
    fn all_triggers_are_lowercase() {
        let keywords = KEYWORD_SETS.iter().flat_map(|s| s.keywords.iter());
        let triggers = BONUS_RULES.iter().flat_map(|r| r.triggers.iter());
        let conditional = ISOLATION_TERMS
            .iter()
            .chain(ISOLATION_ESCALATORS)
            .chain(CALM_TERMS)
            .chain(CALM_BLOCKERS);

        for word in keywords.chain(triggers).chain(conditional) {
            assert_eq!(*word, word.to_lowercase());
        }
    }

    #[test]
    fn weighted_pairs_follow_table_order() {
        let pairs: Vec<_> = keyword_set(Category::Friend).weighted().take(2).collect();
        assert_eq!(pairs, vec![("relationship", 2), ("family", 2)]);
    }

    #[test]
    fn field_bonuses_never_target_the_name() {
        for rule in BONUS_RULES {
            if let BonusScope::Field(field) = rule.scope {
                assert!(field.is_scored());
            }
        }
    }

    #[test]
    fn categories_map_to_distinct_solutions() {
        assert_eq!(Category::Therapy.solution(), Solution::ConsultATherapist);
        assert_eq!(Category::Friend.solution(), Solution::TalkToAFriend);
        assert_eq!(Category::Meditation.solution(), Solution::Meditation);
    }
}
