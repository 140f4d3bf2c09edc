//! Property-based tests for the portfolio controllers
//!
//! Uses proptest to verify filter, navigation, reveal and swipe invariants.

use folio_core::{
    Card, FilterState, FilterToken, ModalController, RevealMode, RevealState, SiteConfig,
    SwipeOutcome, SwipeTracker, Viewport,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

const TAGS: &[&str] = &["web", "mobile", "design", "print", "3d"];

/// A single category tag from a small pool so filters actually match
fn tag_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(TAGS).prop_map(str::to_string)
}

/// A card with zero or more tags, or no category attribute at all
fn card_strategy() -> impl Strategy<Value = Card> {
    (
        "[a-z]{1,8}",
        prop::option::of(prop::collection::vec(tag_strategy(), 0..4)),
    )
        .prop_map(|(id, tags)| Card {
            id,
            title: "Project".to_string(),
            description: String::new(),
            image: String::new(),
            category: tags.map(|t| t.join(" ")),
            fragment: None,
        })
}

fn token_strategy() -> impl Strategy<Value = FilterToken> {
    prop_oneof![
        1 => Just(FilterToken::All),
        4 => tag_strategy().prop_map(FilterToken::Tag),
    ]
}

struct StubViewport {
    y: f64,
    pinned: bool,
}

impl Viewport for StubViewport {
    fn scroll_y(&self) -> f64 {
        if self.pinned {
            0.0
        } else {
            self.y
        }
    }

    fn scroll_to(&mut self, y: f64) {
        self.y = y;
    }

    fn lock_body(&mut self, _offset: f64) {
        self.pinned = true;
        self.y = 0.0;
    }

    fn unlock_body(&mut self) {
        self.pinned = false;
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// A card is visible iff the token is the sentinel or one of its categories
    #[test]
    fn filter_visibility_matches_membership(
        cards in prop::collection::vec(card_strategy(), 0..20),
        token in token_strategy(),
    ) {
        let mut state = FilterState::new(&SiteConfig::default(), cards.len());
        let applied = state.apply(token.clone(), &cards);

        for (i, card) in cards.iter().enumerate() {
            let expected = match &token {
                FilterToken::All => true,
                FilterToken::Tag(tag) => card.categories().contains(tag),
            };
            prop_assert_eq!(state.visibility(i).is_shown(), expected);
            prop_assert_eq!(applied.visible.contains(&i), expected);
        }
    }

    /// The subset is recomputed from scratch: applying the same token twice
    /// gives the same subset regardless of what was applied in between
    #[test]
    fn filter_subset_has_no_history(
        cards in prop::collection::vec(card_strategy(), 0..20),
        first in token_strategy(),
        second in token_strategy(),
    ) {
        let mut fresh = FilterState::new(&SiteConfig::default(), cards.len());
        let expected = fresh.apply(second.clone(), &cards).visible;

        let mut state = FilterState::new(&SiteConfig::default(), cards.len());
        state.apply(first, &cards);
        prop_assert_eq!(state.apply(second, &cards).visible, expected);
    }

    /// Navigation always lands inside the visible subset
    #[test]
    fn navigation_stays_in_bounds(
        visible in 1usize..50,
        start in 0usize..50,
        moves in prop::collection::vec(any::<bool>(), 0..40),
    ) {
        prop_assume!(start < visible);
        let mut vp = StubViewport { y: 0.0, pinned: false };
        let mut modal = ModalController::new();
        modal.open(start, visible, &mut vp);

        let mut expected = start;
        for forward in moves {
            let index = if forward {
                expected = (expected + 1) % visible;
                modal.next(visible)
            } else {
                expected = (expected + visible - 1) % visible;
                modal.previous(visible)
            };
            prop_assert_eq!(index, Some(expected));
        }
    }

    /// Opening out of range never changes anything
    #[test]
    fn open_out_of_range_is_noop(visible in 0usize..20, extra in 0usize..20) {
        let mut vp = StubViewport { y: 77.0, pinned: false };
        let mut modal = ModalController::new();
        prop_assert_eq!(modal.open(visible + extra, visible, &mut vp), None);
        prop_assert!(!modal.phase().is_displayed());
        prop_assert!(!vp.pinned);
    }

    /// Open, navigate, close: the scroll offset comes back exactly
    #[test]
    fn close_restores_scroll(
        y in 0.0f64..100_000.0,
        visible in 1usize..10,
        hops in 0usize..10,
    ) {
        let mut vp = StubViewport { y, pinned: false };
        let mut modal = ModalController::new();
        let generation = modal.open(0, visible, &mut vp).unwrap();
        modal.shown(generation);
        for _ in 0..hops {
            modal.next(visible);
            modal.open(modal.index().unwrap(), visible, &mut vp);
        }
        let ticket = modal.begin_close().unwrap();
        prop_assert!(modal.finish_close(ticket, &mut vp));
        prop_assert_eq!(vp.y, y);
        prop_assert!(!vp.pinned);
    }

    /// Once revealed an element stays revealed whatever happens next
    #[test]
    fn reveal_is_one_way(
        tops in prop::collection::vec(-2000.0f64..4000.0, 1..30),
        viewport in 200.0f64..2000.0,
    ) {
        let mut state = RevealState::new(RevealMode::Threshold, &SiteConfig::default());
        let mut seen = false;
        for top in tops {
            state.observe(top, top + 100.0, viewport);
            seen |= top < viewport * 0.85;
            prop_assert_eq!(state.is_revealed(), seen);
        }
    }

    /// Swipes close only when the downward delta exceeds the threshold
    #[test]
    fn swipe_threshold(start in 0.0f64..2000.0, delta in -500.0f64..500.0) {
        let mut swipe = SwipeTracker::new(50.0);
        swipe.touch_start(start);
        let outcome = swipe.touch_end(start + delta);
        let end = start + delta;
        if end - start > 50.0 {
            prop_assert_eq!(outcome, SwipeOutcome::Close);
        } else {
            prop_assert_eq!(outcome, SwipeOutcome::Ignore);
        }
    }
}
