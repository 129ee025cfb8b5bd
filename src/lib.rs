// File: src/lib.rs

pub mod clipboard;
pub mod config;
pub mod core;
pub mod error;
pub mod export;
pub mod persistence;
pub mod session;
pub mod views;
pub mod display;

pub use crate::core::engine::{KeywordEngine, PaddingPolicy};
pub use crate::core::types::{Classification, GenerationRequest, ScoredKeyword};
pub use crate::error::{AppError, Result};
pub use crate::session::Session;
