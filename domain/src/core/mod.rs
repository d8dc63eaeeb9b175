//! Core domain concepts shared across all subdomains.
//!
//! - [`topic::Topic`]: a validated topic prompt for quiz generation
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod string;
pub mod topic;
