//! Answer record - the ten free-text answers collected by the questionnaire.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// One of the ten questionnaire fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnswerField {
    Name,
    Problem,
    Cause,
    Involved,
    Emotion,
    Severity,
    Duration,
    Impact,
    PreviousHelp,
    Goals,
}

impl AnswerField {
    /// All fields in questionnaire order.
    pub const ALL: [AnswerField; 10] = [
        AnswerField::Name,
        AnswerField::Problem,
        AnswerField::Cause,
        AnswerField::Involved,
        AnswerField::Emotion,
        AnswerField::Severity,
        AnswerField::Duration,
        AnswerField::Impact,
        AnswerField::PreviousHelp,
        AnswerField::Goals,
    ];

    /// Wire key used in JSON payloads.
    pub fn key(&self) -> &'static str {
        match self {
            AnswerField::Name => "name",
            AnswerField::Problem => "problem",
            AnswerField::Cause => "cause",
            AnswerField::Involved => "involved",
            AnswerField::Emotion => "emotion",
            AnswerField::Severity => "severity",
            AnswerField::Duration => "duration",
            AnswerField::Impact => "impact",
            AnswerField::PreviousHelp => "previousHelp",
            AnswerField::Goals => "goals",
        }
    }

    /// Question shown to the user for this field.
    pub fn question(&self) -> &'static str {
        match self {
            AnswerField::Name => "What is your name?",
            AnswerField::Problem => {
                "What is the main problem or challenge you are currently facing?"
            }
            AnswerField::Cause => "What do you think is causing this problem?",
            AnswerField::Involved => "Who else is involved in this situation?",
            AnswerField::Emotion => "What emotions are you experiencing right now?",
            AnswerField::Severity => {
                "How would you rate the intensity of what you're going through?"
            }
            AnswerField::Duration => "How long have you been dealing with this issue?",
            AnswerField::Impact => "How is this affecting your daily life?",
            AnswerField::PreviousHelp => "Have you tried anything to address this before?",
            AnswerField::Goals => "What would you like to achieve or how would you like to feel?",
        }
    }

    /// Short explanation of why the question is asked.
    pub fn description(&self) -> &'static str {
        match self {
            AnswerField::Name => "We'd like to personalize your experience",
            AnswerField::Problem => "Take your time to explain what's troubling you most",
            AnswerField::Cause => "Understanding the cause helps us provide better guidance",
            AnswerField::Involved => {
                "This helps us understand your support system and relationships"
            }
            AnswerField::Emotion => "Your emotional state is important for our recommendation",
            AnswerField::Severity => "This helps us understand the urgency of your needs",
            AnswerField::Duration => "Duration helps us understand if this is acute or chronic",
            AnswerField::Impact => {
                "Understanding the impact helps us gauge the scope of support needed"
            }
            AnswerField::PreviousHelp => {
                "This helps us avoid suggesting things you've already tried"
            }
            AnswerField::Goals => {
                "Your goals help us tailor our recommendations to what matters most to you"
            }
        }
    }

    /// Label used when the answers are summarised for a language model.
    pub fn summary_label(&self) -> &'static str {
        match self {
            AnswerField::Name => "Name",
            AnswerField::Problem => "Main Problem",
            AnswerField::Cause => "Perceived Cause",
            AnswerField::Involved => "People Involved",
            AnswerField::Emotion => "Current Emotions",
            AnswerField::Severity => "Severity Level",
            AnswerField::Duration => "Duration",
            AnswerField::Impact => "Daily Life Impact",
            AnswerField::PreviousHelp => "Previous Help Attempts",
            AnswerField::Goals => "Goals",
        }
    }

    /// Whether the field takes part in keyword scoring. The name never does.
    pub fn is_scored(&self) -> bool {
        !matches!(self, AnswerField::Name)
    }
}

/// The ten answers describing a user's situation.
///
/// Missing JSON keys deserialize as empty strings so that the caller can
/// report which answer is absent instead of failing the whole payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnswerRecord {
    pub name: String,
    pub problem: String,
    pub cause: String,
    pub involved: String,
    pub emotion: String,
    pub severity: String,
    pub duration: String,
    pub impact: String,
    pub previous_help: String,
    pub goals: String,
}

impl AnswerRecord {
    /// Returns the answer for a field.
    pub fn get(&self, field: AnswerField) -> &str {
        match field {
            AnswerField::Name => &self.name,
            AnswerField::Problem => &self.problem,
            AnswerField::Cause => &self.cause,
            AnswerField::Involved => &self.involved,
            AnswerField::Emotion => &self.emotion,
            AnswerField::Severity => &self.severity,
            AnswerField::Duration => &self.duration,
            AnswerField::Impact => &self.impact,
            AnswerField::PreviousHelp => &self.previous_help,
            AnswerField::Goals => &self.goals,
        }
    }

    /// Sets the answer for a field.
    pub fn with(mut self, field: AnswerField, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            AnswerField::Name => self.name = value,
            AnswerField::Problem => self.problem = value,
            AnswerField::Cause => self.cause = value,
            AnswerField::Involved => self.involved = value,
            AnswerField::Emotion => self.emotion = value,
            AnswerField::Severity => self.severity = value,
            AnswerField::Duration => self.duration = value,
            AnswerField::Impact => self.impact = value,
            AnswerField::PreviousHelp => self.previous_help = value,
            AnswerField::Goals => self.goals = value,
        }
        self
    }

    /// Iterates over `(field, answer)` pairs in questionnaire order.
    pub fn iter(&self) -> impl Iterator<Item = (AnswerField, &str)> + '_ {
        AnswerField::ALL.iter().map(move |f| (*f, self.get(*f)))
    }

    /// Checks that every answer holds more than whitespace.
    ///
    /// Reports the first empty field in questionnaire order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.iter().find(|(_, answer)| answer.trim().is_empty()) {
            Some((field, _)) => Err(ValidationError::empty_field(field.key())),
            None => Ok(()),
        }
    }
}
