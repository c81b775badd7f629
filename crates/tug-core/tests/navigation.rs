//! Tests for the navigation core.
//!
//! Covers history handling, selection cleanup and the atomic
//! select-then-navigate operations.

use proptest::prelude::*;
use tug_core::catalog::{EMOTION_CARDS, SWITCH_WORD_CATEGORIES};
use tug_core::{Navigation, Navigator, Page};

// =========================================================================
// Scenarios
// =========================================================================

#[test]
fn test_back_after_two_moves() {
    let mut nav = Navigator::new();
    assert!(nav.navigate_to(Page::Calendar).is_moved());
    assert!(nav.navigate_to(Page::SwitchWords).is_moved());

    assert_eq!(nav.go_back(), Some(Page::Calendar));
    assert_eq!(nav.current(), Page::Calendar);
    assert_eq!(nav.history(), &[Page::Home, Page::Calendar]);
}

#[test]
fn test_navigate_to_current_has_no_scroll_reset() {
    let mut nav = Navigator::new();
    let _ = nav.navigate_to(Page::Emotions);
    let before = nav.history().to_vec();

    assert_eq!(nav.navigate_to(Page::Emotions), Navigation::Stayed);
    assert_eq!(nav.history(), before.as_slice());
}

#[test]
fn test_back_at_root_keeps_state() {
    let mut nav = Navigator::new();
    nav.select_switch_word_category(&SWITCH_WORD_CATEGORIES[3]);
    let _ = nav.show_emotion_guidance(EMOTION_CARDS[5]);
    let _ = nav.go_back();

    assert_eq!(nav.go_back(), None);
    assert_eq!(nav.history(), &[Page::Home]);
    assert_eq!(nav.selected_emotion(), Some(EMOTION_CARDS[5]));
}

#[test]
fn test_show_emotion_guidance_is_atomic() {
    let mut nav = Navigator::new();
    let _ = nav.navigate_to(Page::Emotions);
    let anxious = EMOTION_CARDS[0];
    assert_eq!(anxious.title, "Anxious");

    let outcome = nav.show_emotion_guidance(anxious);

    assert_eq!(outcome, Navigation::Moved(Page::EmotionGuidance));
    assert_eq!(nav.current(), Page::EmotionGuidance);
    assert_eq!(nav.selected_emotion(), Some(anxious));
}

#[test]
fn test_category_cleared_when_returning_to_switch_words() {
    let mut nav = Navigator::new();
    let _ = nav.navigate_to(Page::SwitchWords);
    nav.select_switch_word_category(&SWITCH_WORD_CATEGORIES[0]);
    let _ = nav.navigate_to(Page::Calendar);
    let _ = nav.go_back();
    assert_eq!(nav.current(), Page::SwitchWords);
    assert!(nav.selected_switch_word_category().is_none());
}

#[test]
fn test_category_cleared_after_leaving_and_reentering() {
    let mut nav = Navigator::new();
    let _ = nav.navigate_to(Page::Calendar);
    let _ = nav.navigate_to(Page::SwitchWords);
    nav.select_switch_word_category(&SWITCH_WORD_CATEGORIES[2]);

    assert_eq!(nav.go_back(), Some(Page::Calendar));
    let _ = nav.navigate_to(Page::SwitchWords);

    assert!(nav.selected_switch_word_category().is_none());
}

#[test]
fn test_guidance_to_switch_words_then_back() {
    let mut nav = Navigator::new();
    let _ = nav.show_emotion_guidance(EMOTION_CARDS[3]);
    let category = &SWITCH_WORD_CATEGORIES[4];

    let outcome = nav.navigate_to_switch_words_from_guidance(category);
    assert_eq!(outcome, Navigation::Moved(Page::SwitchWords));
    assert_eq!(
        nav.selected_switch_word_category().map(|c| c.name),
        Some("Peace & Protection")
    );

    assert_eq!(nav.go_back(), Some(Page::EmotionGuidance));
    assert!(nav.selected_switch_word_category().is_none());
    assert_eq!(nav.selected_emotion(), Some(EMOTION_CARDS[3]));
}

#[test]
fn test_reset_category_is_idempotent() {
    let mut nav = Navigator::new();
    let _ = nav.navigate_to(Page::SwitchWords);
    nav.select_switch_word_category(&SWITCH_WORD_CATEGORIES[1]);

    nav.reset_switch_word_category();
    nav.reset_switch_word_category();

    assert!(nav.selected_switch_word_category().is_none());
    assert_eq!(nav.current(), Page::SwitchWords);
    assert_eq!(nav.history(), &[Page::Home, Page::SwitchWords]);
}

// =========================================================================
// Invariants
// =========================================================================

#[derive(Debug, Clone)]
enum Op {
    NavigateTo(usize),
    GoBack,
    ShowEmotion(usize),
    GuidanceToSwitchWords(usize),
    SelectCategory(usize),
    ResetCategory,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..Page::all().len()).prop_map(Op::NavigateTo),
        Just(Op::GoBack),
        (0..EMOTION_CARDS.len()).prop_map(Op::ShowEmotion),
        (0..SWITCH_WORD_CATEGORIES.len()).prop_map(Op::GuidanceToSwitchWords),
        (0..SWITCH_WORD_CATEGORIES.len()).prop_map(Op::SelectCategory),
        Just(Op::ResetCategory),
    ]
}

fn apply(nav: &mut Navigator, op: &Op) -> Option<Navigation> {
    match op {
        Op::NavigateTo(i) => Some(nav.navigate_to(Page::all()[*i])),
        Op::GoBack => {
            let _ = nav.go_back();
            None
        }
        Op::ShowEmotion(i) => Some(nav.show_emotion_guidance(EMOTION_CARDS[*i])),
        Op::GuidanceToSwitchWords(i) => {
            Some(nav.navigate_to_switch_words_from_guidance(&SWITCH_WORD_CATEGORIES[*i]))
        }
        Op::SelectCategory(i) => {
            nav.select_switch_word_category(&SWITCH_WORD_CATEGORIES[*i]);
            None
        }
        Op::ResetCategory => {
            nav.reset_switch_word_category();
            None
        }
    }
}

proptest! {
    /// The history is never empty and always ends with the current page.
    #[test]
    fn history_tracks_current(ops in prop::collection::vec(arb_op(), 0..64)) {
        let mut nav = Navigator::new();
        for op in &ops {
            let before = nav.history().len();
            let outcome = apply(&mut nav, op);
            prop_assert!(!nav.history().is_empty());
            prop_assert_eq!(nav.history().last().copied(), Some(nav.current()));
            prop_assert_eq!(nav.history()[0], Page::Home);
            match outcome {
                Some(Navigation::Moved(page)) => {
                    prop_assert_eq!(page, nav.current());
                    prop_assert_eq!(nav.history().len(), before + 1);
                }
                Some(Navigation::Stayed) => prop_assert_eq!(nav.history().len(), before),
                None => {}
            }
        }
    }

    /// Consecutive history entries never repeat a page.
    #[test]
    fn history_has_no_adjacent_duplicates(ops in prop::collection::vec(arb_op(), 0..64)) {
        let mut nav = Navigator::new();
        for op in &ops {
            let _ = apply(&mut nav, op);
        }
        for pair in nav.history().windows(2) {
            prop_assert_ne!(pair[0], pair[1]);
        }
    }
}
