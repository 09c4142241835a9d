//! Transcript client: the full resolve → list → select → fetch → parse pipeline.
//!
//! Keep the public surface small and predictable. Implementation details are split
//! into submodules under `src/client/`.

pub mod builder;
pub mod core;
mod error_classification;
pub mod generation;
pub mod types;

pub use builder::TranscriptClientBuilder;
pub use core::TranscriptClient;
pub use error_classification::guidance_for;
pub use generation::{GenerationTicket, RequestGeneration};
pub use types::{TranscriptOutcome, TranscriptStage};
