// src/engine/mod.rs
#[allow(clippy::module_inception)]
mod engine;
mod types;

pub use engine::extract;
pub use types::{Extraction, Payload};
