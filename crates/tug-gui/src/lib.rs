//! The Universe Guidance - GUI Library
//!
//! Desktop shell around `tug-core`: the iced application, its message
//! handlers, views, settings and the platform adapters (audio, share,
//! image export, offline cache).
//!
//! Built with Iced 0.14.0 using the Elm architecture.

pub mod app;
pub mod component;
pub mod handler;
pub mod message;
pub mod service;
pub mod settings;
pub mod state;
pub mod theme;
pub mod view;
