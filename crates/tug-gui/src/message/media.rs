//! Messages of the mantra soundscape and sacred teachings pages.

use std::path::PathBuf;

use tug_core::Ticket;
use tug_core::catalog::{Mantra, MantraCategory, Video, VideoCategory};

/// Mantra soundscape messages.
#[derive(Debug, Clone)]
pub enum MantraMessage {
    SelectCategory(&'static MantraCategory),
    SelectMantra(&'static Mantra),
    TogglePlayback,

    /// Drain the events of the mantra player
    PlayerTick,

    /// A source was resolved to a local file (or not)
    SourceReady(String, Result<PathBuf, String>),

    RequestInsight,
    InsightLoaded(Ticket, tug_core::Result<String>),
}

/// Sacred teachings messages.
#[derive(Debug, Clone)]
pub enum TeachingsMessage {
    SelectCategory(&'static VideoCategory),
    SelectVideo(&'static Video),

    /// Open the selected video in the browser
    WatchVideo,

    RequestTakeaways,
    TakeawaysLoaded(Ticket, tug_core::Result<Vec<String>>),
}
