//! Platform services for background tasks.
//!
//! These services provide async functions for use with Iced's
//! `Task::perform` pattern, plus the desktop implementations of the
//! boundaries the core leaves open (audio, share, export, offline cache).

pub mod audio;
pub mod export;
pub mod offline;
pub mod share;

pub use audio::DesktopAudio;
pub use export::save_screenshot_png;
pub use offline::{build_offline_cache, prepare_offline_cache};
pub use share::{ShareOutcome, share};
