//! GetQuestionnaireHandler - Query handler listing the questions.

use serde::Serialize;

use crate::domain::assessment::AnswerField;

/// One question as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionView {
    /// Key of the answer in the submitted record.
    pub key: &'static str,
    pub question: &'static str,
    pub description: &'static str,
}

impl From<AnswerField> for QuestionView {
    fn from(field: AnswerField) -> Self {
        Self {
            key: field.key(),
            question: field.question(),
            description: field.description(),
        }
    }
}

/// Handler returning the questionnaire in order.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetQuestionnaireHandler;

impl GetQuestionnaireHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self) -> Vec<QuestionView> {
        AnswerField::ALL.into_iter().map(QuestionView::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_ten_questions_in_order() {
        let questions = GetQuestionnaireHandler::new().handle();

        assert_eq!(questions.len(), 10);
        assert_eq!(questions[0].key, "name");
        assert_eq!(questions[8].key, "previousHelp");
        assert_eq!(questions[9].key, "goals");
    }

    #[test]
    fn every_question_has_text() {
        for question in GetQuestionnaireHandler::new().handle() {
            assert!(!question.question.is_empty());
            assert!(!question.description.is_empty());
        }
    }
}
