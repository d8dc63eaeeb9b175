//! Adapters for the remote quiz generation service.

mod http_generator;

pub use http_generator::HttpQuizGenerator;
