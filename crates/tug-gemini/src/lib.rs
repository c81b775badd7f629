//! Gemini-backed guidance for The Universe Guidance.
//!
//! [`GeminiClient`] talks to the `generateContent` REST endpoint and
//! implements [`tug_core::GuidanceProvider`], so the GUI can hold it as an
//! `Arc<dyn GuidanceProvider>` and call it from `Task::perform()`.
//!
//! # Overview
//!
//! - One request per guidance kind, built from a fixed prompt template
//! - Structured kinds ask for JSON matching a response schema
//! - Every structured answer is validated before it reaches a view
//! - Speech is transcribed and synthesized for the voice assistant
//! - The API key comes from `GEMINI_API_KEY` (or `API_KEY`)
//!
//! Requests are never retried automatically; [`GeminiError::is_retryable`]
//! only tells the caller whether a retry is worth offering.

#![warn(clippy::all)]

pub mod client;
pub mod config;
pub mod error;
pub mod prompt;
mod provider;
pub mod schema;
pub mod speech;
pub mod types;

pub use client::GeminiClient;
pub use config::{GeminiSettings, api_key_from_env};
pub use error::{GeminiError, Result};
pub use speech::SpeechAudio;
