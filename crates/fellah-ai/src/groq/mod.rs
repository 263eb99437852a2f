//! Groq chat-completions client.
//!
//! Implements the `AiClient` trait against Groq's OpenAI-compatible
//! endpoint (`{base_url}/chat/completions`) with bearer-token auth.

mod api;
mod client;
mod config;

pub use client::GroqClient;
pub use config::GroqConfig;
