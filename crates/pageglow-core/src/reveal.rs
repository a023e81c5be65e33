//! Staggered reveal of navigation cards
//!
//! Every matching card is hidden the moment the animator runs, then
//! each card fades and slides into place on its own delay, one step
//! later than the card before it in document order.

use crate::clock::Clock;
use crate::dom::{style, ElementHandle, PageDom};
use crate::selector::Selector;
use std::time::Duration;
use tracing::debug;

/// Class carried by the navigation cards the reveal targets
pub const CARD_CLASS: &str = "nav-card";

/// Opacity while hidden
pub const OPACITY_HIDDEN: &str = "0";

/// Opacity once settled
pub const OPACITY_VISIBLE: &str = "1";

/// Transform while hidden; cards wait 20px below their resting place
pub const OFFSET_START: &str = "translateY(20px)";

/// Transform once settled
pub const OFFSET_SETTLED: &str = "translateY(0)";

/// Transition covering the fade and the slide
pub const REVEAL_TRANSITION: &str = "all 0.5s ease";

/// Delay step between consecutive cards
pub const STAGGER_STEP: Duration = Duration::from_millis(100);

/// Schedules the staggered card reveal
#[derive(Clone, Debug)]
pub struct CardRevealAnimator {
    selector: Selector,
}

impl CardRevealAnimator {
    /// Animator targeting the standard `.nav-card` elements
    pub fn new() -> Self {
        Self::targeting(Selector::class(CARD_CLASS))
    }

    /// Animator targeting a custom selector
    pub fn targeting(selector: Selector) -> Self {
        CardRevealAnimator { selector }
    }

    /// The selector this animator reveals
    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    /// Hide every matching card and schedule its reveal
    ///
    /// Hiding is a separate first pass: every card is hidden before the
    /// first reveal timer is scheduled, so a clock firing on another
    /// thread can never reveal a card while later cards are still
    /// unhidden. The reveal for card `i` fires `i` stagger steps after
    /// this call; the first card's timer is due immediately but still
    /// goes through the clock, never inline. Returns the number of
    /// cards scheduled.
    pub fn run<P: PageDom>(&self, page: &P, clock: &dyn Clock) -> usize {
        let cards = page.select_all(&self.selector);

        // Hide pass completes before any reveal timer exists
        for card in &cards {
            card.set_style(style::OPACITY, OPACITY_HIDDEN);
            card.set_style(style::TRANSFORM, OFFSET_START);
        }

        for (index, card) in cards.iter().enumerate() {
            let card = card.clone();
            clock.after(
                STAGGER_STEP * index as u32,
                Box::new(move |_now| {
                    card.set_style(style::TRANSITION, REVEAL_TRANSITION);
                    card.set_style(style::OPACITY, OPACITY_VISIBLE);
                    card.set_style(style::TRANSFORM, OFFSET_SETTLED);
                }),
            );
        }

        if !cards.is_empty() {
            debug!(cards = cards.len(), selector = %self.selector, "Scheduled card reveal");
        }

        cards.len()
    }
}

impl Default for CardRevealAnimator {
    fn default() -> Self {
        Self::new()
    }
}
