//! OpenAI integration for askpdf
//!
//! This crate provides the OpenAI implementation of the Embedder and
//! ChatModel traits.

mod client;
mod config;


pub use client::{OpenAiClient, REQUEST_TIMEOUT};
pub use config::{OpenAiConfig, DEFAULT_BASE_URL};

// Re-export core types for convenience
pub use askpdf_core::{ChatModel, Embedder, Error, Result};
