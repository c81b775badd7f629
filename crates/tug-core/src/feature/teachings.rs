//! Sacred teachings: video categories, video list and player.

use crate::catalog::{Video, VideoCategory};
use crate::error::Result;
use crate::feature::Back;
use crate::request::{Request, Ticket};

pub const TAKEAWAYS_FAILURE_MESSAGE: &str =
    "The cosmos is silent on this topic for now. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeachingsLevel {
    CategoryList,
    VideoList,
    VideoPlayer,
}

#[derive(Debug, Clone, Default)]
pub struct SacredTeachings {
    category: Option<&'static VideoCategory>,
    video: Option<&'static Video>,
    takeaways: Request<Vec<String>>,
}

impl SacredTeachings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(&self) -> TeachingsLevel {
        match (self.category, self.video) {
            (_, Some(_)) => TeachingsLevel::VideoPlayer,
            (Some(_), None) => TeachingsLevel::VideoList,
            (None, None) => TeachingsLevel::CategoryList,
        }
    }

    pub fn category(&self) -> Option<&'static VideoCategory> {
        self.category
    }

    pub fn video(&self) -> Option<&'static Video> {
        self.video
    }

    pub fn takeaways(&self) -> &Request<Vec<String>> {
        &self.takeaways
    }

    /// Player URL of the selected video.
    pub fn video_url(&self) -> Option<String> {
        self.video.map(Video::embed_url)
    }

    pub fn select_category(&mut self, category: Option<&'static VideoCategory>) {
        self.category = category;
    }

    /// Change the selected video. Takeaways always start over.
    pub fn select_video(&mut self, video: Option<&'static Video>) {
        self.video = video;
        self.takeaways.reset();
    }

    pub fn request_takeaways(&mut self) -> Option<(Ticket, &'static Video)> {
        let video = self.video?;
        let ticket = self.takeaways.begin()?;
        Some((ticket, video))
    }

    pub fn settle_takeaways(&mut self, ticket: Ticket, result: Result<Vec<String>>) {
        self.takeaways
            .settle(ticket, result, TAKEAWAYS_FAILURE_MESSAGE);
    }

    pub fn go_back(&mut self) -> Back {
        match self.level() {
            TeachingsLevel::VideoPlayer => {
                self.select_video(None);
                Back::Handled
            }
            TeachingsLevel::VideoList => {
                self.select_category(None);
                Back::Handled
            }
            TeachingsLevel::CategoryList => Back::Delegate,
        }
    }

    pub fn leave(&mut self) {
        *self = Self::default();
    }
}
