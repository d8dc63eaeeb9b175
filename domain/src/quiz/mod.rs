//! Quiz subdomain
//!
//! - [`question`]: immutable questions and the quiz set a fetch produces
//! - [`answer`]: write-once per-question answer state
//! - [`assessment`]: answering, scoring and the results view
//! - [`session`]: the session aggregate with its fetch lifecycle
//! - [`payload`]: the generation service's wire contract

pub mod answer;
pub mod assessment;
pub mod payload;
pub mod question;
pub mod session;
