//! Solution - the three canned guidance outcomes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Guidance outcome recommended to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Solution {
    #[serde(rename = "Meditation")]
    Meditation,
    #[serde(rename = "Talk to a Friend")]
    TalkToAFriend,
    #[serde(rename = "Consult a Therapist")]
    ConsultATherapist,
}

impl Solution {
    /// All outcomes.
    pub const ALL: [Solution; 3] = [
        Solution::Meditation,
        Solution::TalkToAFriend,
        Solution::ConsultATherapist,
    ];

    /// Display label, identical to the wire representation.
    pub fn label(&self) -> &'static str {
        match self {
            Solution::Meditation => "Meditation",
            Solution::TalkToAFriend => "Talk to a Friend",
            Solution::ConsultATherapist => "Consult a Therapist",
        }
    }

    /// Description and practical tips shown alongside the recommendation.
    pub fn guidance(&self) -> SolutionGuidance {
        match self {
            Solution::Meditation => SolutionGuidance {
                description: "Based on your responses, meditation and mindfulness practices \
                    could help you find inner peace and manage stress more effectively.",
                tips: &[
                    "Start with 5-10 minutes of daily meditation",
                    "Try guided meditation apps or videos",
                    "Practice deep breathing exercises",
                    "Create a quiet, comfortable space for meditation",
                    "Focus on mindfulness throughout your day",
                ],
            },
            Solution::TalkToAFriend => SolutionGuidance {
                description: "Sharing your feelings with a trusted friend can provide emotional \
                    support and help you gain new perspectives on your situation.",
                tips: &[
                    "Choose someone you trust and feel comfortable with",
                    "Be honest about your feelings and situation",
                    "Listen to their perspective and advice",
                    "Talk to multiple friends for different viewpoints",
                    "Friends can offer emotional support and understanding",
                ],
            },
            Solution::ConsultATherapist => SolutionGuidance {
                description: "Professional therapy can provide you with specialized tools and \
                    techniques to address your concerns effectively.",
                tips: &[
                    "Research therapists who specialize in your specific concerns",
                    "Consider different types of therapy (CBT, DBT, etc.)",
                    "Try different therapists until you find the right fit",
                    "Be open and honest during your sessions",
                    "Explore both in-person and online therapy options",
                ],
            },
        }
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Solution {
    type Err = ValidationError;

    /// Parses a label, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Solution::ALL
            .into_iter()
            .find(|solution| solution.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                ValidationError::invalid_format("solution", format!("unknown label '{}'", wanted))
            })
    }
}

/// Text accompanying a solution on the results screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SolutionGuidance {
    pub description: &'static str,
    pub tips: &'static [&'static str],
}
