// File: src/core/mod.rs

pub mod engine;
pub mod pool;
pub mod scoring;
pub mod text;
pub mod types;
pub mod vocab;
