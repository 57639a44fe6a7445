//! Big Five personality assessment engine.
//!
//! Answers on a 7-point Likert scale are reduced to facet scores, dimension
//! scores and percentiles, then resolved to a dominant dimension, an archetype
//! and a shadow trait. Persistence goes through an injected key-value store.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
