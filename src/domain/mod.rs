//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `assessment` - Questionnaire answers, outcomes and the keyword classifier

pub mod assessment;
pub mod foundation;
