//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;

use axum::Router;
use serde_json::{json, Value};

use sepnoty::domain::assessment::{AnswerField, AnswerRecord};

/// Serves `router` on an ephemeral loopback port.
pub async fn spawn_server(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// A filled-in questionnaire describing long-running depression.
pub fn therapy_answers() -> AnswerRecord {
    AnswerRecord::default()
        .with(AnswerField::Name, "Jordan")
        .with(AnswerField::Problem, "I have had suicidal thoughts and depression")
        .with(AnswerField::Cause, "I don't really know")
        .with(AnswerField::Involved, "just me")
        .with(AnswerField::Emotion, "hopeless")
        .with(AnswerField::Severity, "9")
        .with(AnswerField::Duration, "for years")
        .with(AnswerField::Impact, "I can't do anything, suicidal most days")
        .with(AnswerField::PreviousHelp, "tried therapy once")
        .with(AnswerField::Goals, "feel okay again")
}

/// The same questionnaire as camelCase JSON.
pub fn therapy_answers_json() -> Value {
    json!({
        "name": "Jordan",
        "problem": "I have had suicidal thoughts and depression",
        "cause": "I don't really know",
        "involved": "just me",
        "emotion": "hopeless",
        "severity": "9",
        "duration": "for years",
        "impact": "I can't do anything, suicidal most days",
        "previousHelp": "tried therapy once",
        "goals": "feel okay again"
    })
}
