//! LLM Recommendation Engine - Asks a language model to pick a solution.
//!
//! The model is given every answer and a short guideline for each solution,
//! and must reply with a bare JSON object. Replies that do not parse are
//! surfaced as malformed so the caller can fall back.

use async_trait::async_trait;
use serde_json::Value;

use super::payload;
use crate::domain::assessment::{
    AnswerField, AnswerRecord, RecommendationResult, RecommendationSource,
};
use crate::ports::{
    AIProvider, CompletionRequest, EngineInfo, MessageRole, RecommendationEngine,
    RecommendationError,
};

const SYSTEM_PROMPT: &str = "You are a helpful mental health assistant that provides \
thoughtful recommendations based on user responses.";

const GUIDELINES: &str = "\
Guidelines:
- \"Consult a Therapist\": For severe issues, trauma, persistent problems lasting months or years, \
suicidal thoughts, or when previous self-help has failed.
- \"Talk to a Friend\": For relationship issues, social conflicts, needing emotional support, \
or interpersonal problems.
- \"Meditation\": For stress, mild to moderate anxiety, work pressure, sleep issues, \
or seeking inner peace.";

const RESPONSE_FORMAT: &str = "\
Respond with ONLY a JSON object in this exact format:
{
  \"solution\": \"Consult a Therapist\" | \"Talk to a Friend\" | \"Meditation\",
  \"confidence\": <number between 70 and 95>,
  \"reasoning\": \"<one or two sentences>\"
}";

const MAX_TOKENS: u32 = 200;
const TEMPERATURE: f32 = 0.7;

/// Builds the user prompt listing every answer.
pub fn build_prompt(answers: &AnswerRecord) -> String {
    let mut prompt = String::from(
        "Based on the following responses to a mental health questionnaire, \
recommend ONE of these solutions: \"Consult a Therapist\", \"Talk to a Friend\", or \"Meditation\".\n\n\
User Responses:\n",
    );

    for field in AnswerField::ALL {
        prompt.push_str("- ");
        prompt.push_str(field.summary_label());
        prompt.push_str(": ");
        prompt.push_str(answers.get(field));
        prompt.push('\n');
    }

    prompt.push('\n');
    prompt.push_str(GUIDELINES);
    prompt.push_str("\n\n");
    prompt.push_str(RESPONSE_FORMAT);
    prompt
}

/// Engine backed by any [`AIProvider`].
pub struct LlmRecommendationEngine<P: AIProvider> {
    provider: P,
}

impl<P: AIProvider> LlmRecommendationEngine<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    fn build_request(&self, answers: &AnswerRecord) -> CompletionRequest {
        CompletionRequest::new()
            .with_system_prompt(SYSTEM_PROMPT)
            .with_message(MessageRole::User, build_prompt(answers))
            .with_max_tokens(MAX_TOKENS)
            .with_temperature(TEMPERATURE)
    }
}

#[async_trait]
impl<P: AIProvider> RecommendationEngine for LlmRecommendationEngine<P> {
    async fn recommend(
        &self,
        answers: &AnswerRecord,
    ) -> Result<RecommendationResult, RecommendationError> {
        let response = self.provider.complete(self.build_request(answers)).await?;
        let result = payload::from_model_output(&response.content)?;

        let reasoning = serde_json::from_str::<Value>(payload::strip_code_fence(&response.content))
            .ok()
            .and_then(|v| v.get("reasoning").and_then(Value::as_str).map(str::to_owned));
        tracing::debug!(
            model = %response.model,
            prompt_tokens = response.usage.prompt_tokens,
            completion_tokens = response.usage.completion_tokens,
            solution = %result.solution,
            reasoning = reasoning.as_deref().unwrap_or(""),
            "Model recommendation received"
        );

        Ok(result)
    }

    fn engine_info(&self) -> EngineInfo {
        let info = self.provider.provider_info();
        EngineInfo::new(format!("llm:{}", info.model), RecommendationSource::Llm)
    }
}
