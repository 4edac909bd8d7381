//! Wordchain — first-order word-transition modeling and text generation.
//!
//! Builds a transition table from ingested text, lazily compiles per-word
//! frequencies into cumulative-weight distributions, and generates new
//! words or delimiter-terminated sentences by weighted random walks over
//! the table.

pub mod core;
