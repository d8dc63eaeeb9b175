//! Configuration value objects shared across layers

pub mod output_format;

pub use output_format::OutputFormat;
