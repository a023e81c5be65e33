//! Property-based tests for the enhancer timeline
//!
//! Uses proptest to verify scheduling and gating invariants across
//! arbitrary page sizes, advance patterns, and status texts.

use std::time::Duration;

use chrono::{DateTime, Local, TimeZone};
use pageglow_core::dom::style;
use pageglow_core::reveal::{self, CARD_CLASS};
use pageglow_core::status::{STATUS_CLASS, STATUS_PLACEHOLDER};
use pageglow_core::{ElementHandle, ManualClock, MemoryPage, PageDom, PageEnhancer, Selector};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

fn activation_time() -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2024, 5, 9, 14, 30, 0)
        .single()
        .expect("Fixture datetime should be unambiguous")
}

/// A page with `cards` cards and one placeholder status element
fn landing_page(cards: usize) -> MemoryPage {
    let page = MemoryPage::new();
    for _ in 0..cards {
        page.append("div").with_class(CARD_CLASS);
    }
    page.append("span")
        .with_class(STATUS_CLASS)
        .with_text(STATUS_PLACEHOLDER);
    page
}

/// Generate status texts that are not the placeholder
fn non_placeholder_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ -~]{0,40}")
        .expect("valid regex")
        .prop_filter("not the placeholder", |s| s != STATUS_PLACEHOLDER)
}

/// Generate a total advance and a split point inside it
fn split_advance_strategy() -> impl Strategy<Value = (u64, u64)> {
    (0..120_000u64).prop_flat_map(|total| (Just(total), 0..=total))
}

/// Opacity of every card, in document order
fn opacities(page: &MemoryPage) -> Vec<Option<String>> {
    page.select_all(&Selector::class(CARD_CLASS))
        .iter()
        .map(|card| card.style(style::OPACITY))
        .collect()
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// The pending one-shot delays after activation form the exact
    /// ladder 0, 100ms, 200ms... one rung per card
    #[test]
    fn reveal_delays_form_the_stagger_ladder(cards in 0..40usize) {
        let page = landing_page(cards);
        let clock = ManualClock::starting_at(activation_time());
        PageEnhancer::new().activate(&page, &clock);

        let delays: Vec<Duration> = clock
            .pending_timers()
            .iter()
            .filter(|timer| !timer.repeating)
            .map(|timer| timer.due_in)
            .collect();

        let expected: Vec<Duration> = (0..cards)
            .map(|i| reveal::STAGGER_STEP * i as u32)
            .collect();
        prop_assert_eq!(delays, expected);
    }

    /// At any point in the timeline the revealed cards are exactly the
    /// prefix whose delays have passed
    #[test]
    fn revealed_cards_form_a_prefix(cards in 1..30usize, advance_ms in 0..3500u64) {
        let page = landing_page(cards);
        let clock = ManualClock::starting_at(activation_time());
        PageEnhancer::new().activate(&page, &clock);

        clock.advance(Duration::from_millis(advance_ms));

        let step_ms = reveal::STAGGER_STEP.as_millis() as u64;
        for (index, opacity) in opacities(&page).iter().enumerate() {
            let due = index as u64 * step_ms <= advance_ms;
            let expected = if due {
                reveal::OPACITY_VISIBLE
            } else {
                reveal::OPACITY_HIDDEN
            };
            prop_assert_eq!(
                opacity.as_deref(),
                Some(expected),
                "card {} after {}ms",
                index,
                advance_ms
            );
        }
    }

    /// Advancing in two steps ends in the same page state as one step
    #[test]
    fn split_advance_matches_single_advance((total, split) in split_advance_strategy()) {
        let single_page = landing_page(8);
        let single_clock = ManualClock::starting_at(activation_time());
        PageEnhancer::new().activate(&single_page, &single_clock);
        single_clock.advance(Duration::from_millis(total));

        let split_page = landing_page(8);
        let split_clock = ManualClock::starting_at(activation_time());
        PageEnhancer::new().activate(&split_page, &split_clock);
        split_clock.advance(Duration::from_millis(split));
        split_clock.advance(Duration::from_millis(total - split));

        prop_assert_eq!(opacities(&single_page), opacities(&split_page));

        let single_status = single_page
            .select_first(&Selector::class(STATUS_CLASS))
            .expect("Status should exist");
        let split_status = split_page
            .select_first(&Selector::class(STATUS_CLASS))
            .expect("Status should exist");
        prop_assert_eq!(single_status.text(), split_status.text());
    }

    /// No amount of ticking ever rewrites a non-placeholder status
    #[test]
    fn non_placeholder_status_is_never_overwritten(
        text in non_placeholder_strategy(),
        minutes in 0..10u64,
    ) {
        let page = MemoryPage::new();
        page.append("span").with_class(STATUS_CLASS).with_text(&text);

        let clock = ManualClock::starting_at(activation_time());
        let summary = PageEnhancer::new().activate(&page, &clock);
        prop_assert!(!summary.status_stamped);

        clock.advance(Duration::from_secs(minutes * 60));

        let status = page
            .select_first(&Selector::class(STATUS_CLASS))
            .expect("Status should exist");
        prop_assert_eq!(status.text(), text);
    }

    /// A placeholder status always carries the activation stamp, no
    /// matter how far the clock later advances
    #[test]
    fn placeholder_stamp_is_stable(minutes in 0..20u64) {
        let page = landing_page(3);
        let clock = ManualClock::starting_at(activation_time());
        PageEnhancer::new().activate(&page, &clock);

        clock.advance(Duration::from_secs(minutes * 60));

        let status = page
            .select_first(&Selector::class(STATUS_CLASS))
            .expect("Status should exist");
        prop_assert_eq!(status.text(), "09.05.2024, 14:30:00");
    }
}
