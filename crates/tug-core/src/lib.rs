//! Headless core of The Universe Guidance.
//!
//! This crate holds every piece of application state that does not need a
//! window, a network or a speaker, so it can be driven and tested directly.
//!
//! # Architecture
//!
//! - `navigation` - Current page, back-stack and page-scoped selections
//! - `request` - Single-flight request/result state with stale-result guard
//! - `feature/` - Page-local view state (dream, emotion, mantra, voice, ...)
//! - `calendar` - Month grid and date formatting
//! - `catalog` - Static content tables
//! - `provider` - Guidance and voice provider traits with their result types
//! - `audio` - Audio output boundary for mantra playback
//! - `share` - Share payloads and export file names
//! - `error.rs` - Error types with user-friendly messages
//!
//! The GUI maps operations here onto its message loop: an operation that
//! needs a provider returns a ticket, the GUI runs the provider future and
//! feeds the result back through the matching `settle` call.
//!
//! # Example
//!
//! ```
//! use tug_core::{Navigation, Navigator, Page};
//!
//! let mut nav = Navigator::new();
//! assert_eq!(nav.navigate_to(Page::Calendar), Navigation::Moved(Page::Calendar));
//! assert_eq!(nav.navigate_to(Page::Calendar), Navigation::Stayed);
//! assert_eq!(nav.go_back(), Some(Page::Home));
//! ```

pub mod audio;
pub mod calendar;
pub mod catalog;
mod error;
pub mod feature;
mod navigation;
mod page;
pub mod provider;
pub mod request;
pub mod share;

pub use calendar::{CalendarCell, CalendarView};
pub use error::{GuidanceError, Result};
pub use navigation::{MoreAction, Navigation, Navigator};
pub use page::{HoroscopeTab, MoreLink, Page};
pub use provider::{GuidanceProvider, VoiceProvider};
pub use request::{Request, RequestState, StatusRotation, Ticket, STATUS_ROTATION_PERIOD};
