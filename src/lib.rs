//! Address Translator - postal address format conversion library
//!
//! Converts an address written in one locale's conventions into another's by
//! asking the GLM chat-completion API, and returns the model's trimmed answer.

#![forbid(unsafe_code)]

pub mod cli;
pub mod core;
pub mod server;

// Re-export key types for convenience
pub use crate::core::{
    client::AddressTranslator,
    config::TranslatorConfig,
    errors::{ErrorKind, Result, TranslationError},
    models::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ChatRole, TranslationRequest},
    transport::{ChatTransport, HttpTransport},
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
