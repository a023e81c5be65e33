//! Status timestamp stamping
//!
//! The first element matching `.status-value` starts out showing a
//! placeholder dash. The updater replaces the dash with the current
//! wall time in the Russian locale's combined date and time form, and
//! keeps checking once a minute. Any other text, including a previous
//! stamp, is left alone, so the write happens at most once per page.

use crate::clock::Clock;
use crate::dom::{ElementHandle, PageDom};
use crate::selector::Selector;
use chrono::{DateTime, Local};
use std::time::Duration;
use tracing::debug;

/// Class carried by the status element the updater stamps
pub const STATUS_CLASS: &str = "status-value";

/// Text the status element shows before it has ever been stamped
pub const STATUS_PLACEHOLDER: &str = "-";

/// How often the updater re-checks the status element
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(60);

/// Combined date and time in the `ru-RU` locale: `09.05.2024, 14:30:00`
pub const RU_DATETIME_FORMAT: &str = "%d.%m.%Y, %H:%M:%S";

/// Render a timestamp in the Russian locale's combined form
pub fn format_ru_timestamp(at: DateTime<Local>) -> String {
    at.format(RU_DATETIME_FORMAT).to_string()
}

/// Stamps the status element once and keeps watch thereafter
#[derive(Clone, Debug)]
pub struct ClockUpdater {
    selector: Selector,
}

impl ClockUpdater {
    /// Updater targeting the standard `.status-value` element
    pub fn new() -> Self {
        Self::targeting(Selector::class(STATUS_CLASS))
    }

    /// Updater targeting a custom selector
    pub fn targeting(selector: Selector) -> Self {
        ClockUpdater { selector }
    }

    /// The selector this updater stamps
    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    /// Stamp the status element with `now` if it still shows the
    /// placeholder
    ///
    /// Only the first matching element in document order is considered.
    /// Returns whether a write happened; a missing element or any text
    /// other than the placeholder leaves the page untouched.
    pub fn refresh_if_placeholder<P: PageDom>(&self, page: &P, now: DateTime<Local>) -> bool {
        let Some(element) = page.select_first(&self.selector) else {
            debug!(selector = %self.selector, "No status element to stamp");
            return false;
        };

        if element.text() != STATUS_PLACEHOLDER {
            return false;
        }

        let stamp = format_ru_timestamp(now);
        element.set_text(&stamp);
        debug!(%stamp, selector = %self.selector, "Stamped status timestamp");
        true
    }

    /// Stamp immediately, then re-check every [`REFRESH_INTERVAL`]
    ///
    /// The immediate attempt runs inline with the clock's current time.
    /// The repeating timer keeps firing for the life of the clock; once
    /// the element is stamped every later firing is a no-op. Returns
    /// whether the immediate attempt wrote.
    pub fn schedule<P>(&self, page: &P, clock: &dyn Clock) -> bool
    where
        P: PageDom + Clone + Send + 'static,
    {
        let stamped = self.refresh_if_placeholder(page, clock.now_local());

        let updater = self.clone();
        let page = page.clone();
        clock.every(
            REFRESH_INTERVAL,
            Box::new(move |now| {
                updater.refresh_if_placeholder(&page, now);
            }),
        );

        stamped
    }
}

impl Default for ClockUpdater {
    fn default() -> Self {
        Self::new()
    }
}
