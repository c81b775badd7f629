//! Navigation core.
//!
//! [`Navigator`] owns the current page, the back-stack and the page-scoped
//! selections. It is the only writer of that state; views read it and send
//! intents that end up in one of the named operations below.

use tracing::{debug, info};

use crate::catalog::{EmotionCard, SwitchWordCategory};
use crate::page::{MoreLink, Page};

// =============================================================================
// OUTCOMES
// =============================================================================

/// Result of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Navigation {
    /// The current page changed. The presentation layer resets the scroll
    /// position exactly once for this outcome.
    Moved(Page),

    /// The target was already the current page. Nothing changed.
    Stayed,
}

impl Navigation {
    /// Check if the current page changed.
    pub fn is_moved(&self) -> bool {
        matches!(self, Self::Moved(_))
    }
}

/// Action requested by a "More" page entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoreAction {
    /// An in-app page was opened.
    Navigated(Navigation),

    /// Share the application through the platform share adapter.
    Share,

    /// Open the store listing.
    OpenRating,

    /// Open the privacy policy.
    OpenPrivacyPolicy,
}

// =============================================================================
// NAVIGATOR
// =============================================================================

/// Current page, history stack and page-scoped selections.
///
/// The history is never empty and its last element is always the current
/// page. Only [`Navigator::navigate_to`] and [`Navigator::go_back`] change
/// the history.
#[derive(Debug, Clone)]
pub struct Navigator {
    history: Vec<Page>,
    selected_switch_word_category: Option<&'static SwitchWordCategory>,
    selected_emotion: Option<EmotionCard>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Create a navigator positioned on [`Page::Home`].
    pub fn new() -> Self {
        Self {
            history: vec![Page::Home],
            selected_switch_word_category: None,
            selected_emotion: None,
        }
    }

    /// The page currently shown.
    pub fn current(&self) -> Page {
        // The stack always holds at least the root page.
        self.history.last().copied().unwrap_or_default()
    }

    /// Visited pages, oldest first.
    pub fn history(&self) -> &[Page] {
        &self.history
    }

    /// Check if [`Navigator::go_back`] would change anything.
    pub fn can_go_back(&self) -> bool {
        self.history.len() > 1
    }

    pub fn selected_switch_word_category(&self) -> Option<&'static SwitchWordCategory> {
        self.selected_switch_word_category
    }

    pub fn selected_emotion(&self) -> Option<EmotionCard> {
        self.selected_emotion
    }

    /// Open `target`, pushing it onto the history.
    ///
    /// Navigating to the current page is a no-op.
    pub fn navigate_to(&mut self, target: Page) -> Navigation {
        if target == self.current() {
            debug!(page = ?target, "Already on page");
            return Navigation::Stayed;
        }
        self.history.push(target);
        info!(page = ?target, depth = self.history.len(), "Navigated");
        Navigation::Moved(target)
    }

    /// Return to the previous page.
    ///
    /// Leaves the state untouched when only the root page remains. Returns
    /// the page that became current, if any.
    pub fn go_back(&mut self) -> Option<Page> {
        if !self.can_go_back() {
            debug!("Back requested at root");
            return None;
        }
        let left = self.history.pop().unwrap_or_default();
        let current = self.current();
        if left == Page::SwitchWords || current == Page::SwitchWords {
            self.selected_switch_word_category = None;
        }
        info!(from = ?left, to = ?current, "Went back");
        Some(current)
    }

    /// Select an emotion and open its guidance page in one step.
    pub fn show_emotion_guidance(&mut self, emotion: EmotionCard) -> Navigation {
        self.selected_emotion = Some(emotion);
        self.navigate_to(Page::EmotionGuidance)
    }

    /// Select a switch-word category and open the switch-words page.
    pub fn navigate_to_switch_words_from_guidance(
        &mut self,
        category: &'static SwitchWordCategory,
    ) -> Navigation {
        self.selected_switch_word_category = Some(category);
        self.navigate_to(Page::SwitchWords)
    }

    /// Select a switch-word category while staying on the current page.
    pub fn select_switch_word_category(&mut self, category: &'static SwitchWordCategory) {
        self.selected_switch_word_category = Some(category);
    }

    /// Clear the switch-word category without navigating.
    pub fn reset_switch_word_category(&mut self) {
        self.selected_switch_word_category = None;
    }

    /// Follow an entry of the "More" page.
    pub fn open_more_link(&mut self, link: MoreLink) -> MoreAction {
        match link {
            MoreLink::Mantras => MoreAction::Navigated(self.navigate_to(Page::MantraSoundscape)),
            MoreLink::YoutubeVideos => {
                MoreAction::Navigated(self.navigate_to(Page::SacredTeachings))
            }
            MoreLink::ShareWithFriends => MoreAction::Share,
            MoreLink::RateApp => MoreAction::OpenRating,
            MoreLink::PrivacyPolicy => MoreAction::OpenPrivacyPolicy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{EMOTION_CARDS, SWITCH_WORD_CATEGORIES};

    #[test]
    fn test_starts_at_home() {
        let nav = Navigator::new();
        assert_eq!(nav.current(), Page::Home);
        assert_eq!(nav.history(), &[Page::Home]);
        assert!(!nav.can_go_back());
    }

    #[test]
    fn test_navigate_to_current_is_noop() {
        let mut nav = Navigator::new();
        assert_eq!(nav.navigate_to(Page::Home), Navigation::Stayed);
        assert_eq!(nav.history(), &[Page::Home]);
    }

    #[test]
    fn test_back_at_root_is_noop() {
        let mut nav = Navigator::new();
        nav.select_switch_word_category(&SWITCH_WORD_CATEGORIES[0]);
        assert_eq!(nav.go_back(), None);
        assert_eq!(nav.history(), &[Page::Home]);
        assert!(nav.selected_switch_word_category().is_some());
    }

    #[test]
    fn test_show_emotion_guidance_sets_both() {
        let mut nav = Navigator::new();
        let anxious = EMOTION_CARDS[0];
        assert_eq!(
            nav.show_emotion_guidance(anxious),
            Navigation::Moved(Page::EmotionGuidance)
        );
        assert_eq!(nav.selected_emotion(), Some(anxious));
        assert_eq!(nav.current(), Page::EmotionGuidance);
    }

    #[test]
    fn test_leaving_switch_words_clears_category() {
        let mut nav = Navigator::new();
        let _ = nav.navigate_to_switch_words_from_guidance(&SWITCH_WORD_CATEGORIES[1]);
        assert_eq!(nav.go_back(), Some(Page::Home));
        assert!(nav.selected_switch_word_category().is_none());
    }

    #[test]
    fn test_more_links() {
        let mut nav = Navigator::new();
        assert_eq!(
            nav.open_more_link(MoreLink::Mantras),
            MoreAction::Navigated(Navigation::Moved(Page::MantraSoundscape))
        );
        assert_eq!(nav.open_more_link(MoreLink::RateApp), MoreAction::OpenRating);
        assert_eq!(
            nav.open_more_link(MoreLink::ShareWithFriends),
            MoreAction::Share
        );
        assert_eq!(nav.current(), Page::MantraSoundscape);
    }
}
