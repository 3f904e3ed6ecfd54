//! Keyword optimization — rule-based suggestions against a pasted job
//! description. Deterministic and offline; output quality is bounded by the
//! fixed vocabulary.

pub mod handlers;
pub mod keywords;
pub mod suggest;

pub use keywords::extract_keywords;
pub use suggest::{KeywordOptimizer, OptimizationPatch, Optimizer};
