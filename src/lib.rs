//! Sepnoty - Wellness Assessment Service
//!
//! This crate turns ten free-text questionnaire answers into one of three
//! guidance outcomes (meditation, talking to a friend, consulting a
//! therapist) with a bounded confidence score. A remote engine is preferred
//! when configured; the local keyword classifier answers whenever it fails.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
