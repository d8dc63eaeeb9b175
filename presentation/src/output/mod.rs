//! Rendering of sessions and results for the terminal

pub mod console;
