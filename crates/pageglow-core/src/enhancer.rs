//! Page enhancer entry point
//!
//! Ties the card reveal and the status clock together behind one
//! explicit activation call. The host decides when the page is ready
//! and which clock drives the schedule; nothing here runs before
//! [`PageEnhancer::activate`].

use crate::clock::Clock;
use crate::dom::PageDom;
use crate::reveal::CardRevealAnimator;
use crate::status::ClockUpdater;
use tracing::info;

/// Activation report, one field per enhancement
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActivationSummary {
    /// Cards whose reveal was scheduled
    pub cards_scheduled: usize,
    /// Whether the status element was stamped during activation
    pub status_stamped: bool,
}

/// Runs every page enhancement against one page and one clock
#[derive(Clone, Debug, Default)]
pub struct PageEnhancer {
    reveal: CardRevealAnimator,
    status: ClockUpdater,
}

impl PageEnhancer {
    /// Enhancer with the standard card and status targets
    pub fn new() -> Self {
        Self::default()
    }

    /// Enhancer with custom reveal and status components
    pub fn with_components(reveal: CardRevealAnimator, status: ClockUpdater) -> Self {
        PageEnhancer { reveal, status }
    }

    /// Enhance `page`, scheduling all deferred work on `clock`
    ///
    /// Cards are hidden and their staggered reveals scheduled, the
    /// status element is stamped if it still shows its placeholder, and
    /// a minute-interval re-check is registered. Elements missing from
    /// the page are skipped; activation itself cannot fail. Activating
    /// the same page twice schedules a second round of timers, so hosts
    /// call this once per page load.
    pub fn activate<P>(&self, page: &P, clock: &dyn Clock) -> ActivationSummary
    where
        P: PageDom + Clone + Send + 'static,
    {
        let cards_scheduled = self.reveal.run(page, clock);
        let status_stamped = self.status.schedule(page, clock);

        info!(cards_scheduled, status_stamped, "Page enhancer activated");

        ActivationSummary {
            cards_scheduled,
            status_stamped,
        }
    }
}
