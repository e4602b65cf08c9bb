//! Resume NER service: groups entity spans from a hosted token-classification
//! model into a resume-shaped mapping, plus the PDF and audio converters used
//! by the upload pipeline.

pub mod config;
pub mod convert;
pub mod errors;
pub mod ner_client;
pub mod resume;
pub mod routes;
pub mod state;

pub use ner_client::{EntityTagger, HfInferenceTagger, TaggedSpan, TaggerError};
pub use resume::normalizer::{normalize_spans, FieldValue, ParsedResult, SINGLETON_LABELS};
