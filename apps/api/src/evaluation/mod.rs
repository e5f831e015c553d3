// Resume evaluation
// Implements: prompt building, model response normalization, scorecard shaping,
// and the analysis pipeline that ties them to extraction.
// All model calls go through llm_client; no direct provider calls here.

pub mod analyzer;
pub mod handlers;
pub mod models;
pub mod normalizer;
pub mod prompts;
pub mod scorecard;
