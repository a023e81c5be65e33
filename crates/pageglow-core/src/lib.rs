//! Pageglow Core Library
//!
//! Staggered card reveal and status clock for host pages.
//!
//! ## Overview
//!
//! Pageglow enhances an already-built page: navigation cards fade and
//! slide into place one after another, and the status element gets
//! stamped with the current time in the Russian locale's date and time
//! form. The host hands in the page and a clock; the enhancer owns no
//! document and reads no ambient time.
//!
//! ## Core Principles
//!
//! - **Explicit activation**: Nothing runs until the host calls
//!   [`PageEnhancer::activate`]
//! - **Injected capabilities**: Pages implement [`PageDom`] and
//!   [`ElementHandle`]; time comes from a [`Clock`]
//! - **Deterministic tests**: [`ManualClock`] and [`MemoryPage`] replay
//!   the whole timeline without sleeping
//!
//! ## Quick Start
//!
//! ```ignore
//! use pageglow_core::{MemoryPage, PageEnhancer, TokioClock};
//!
//! #[tokio::main]
//! async fn main() {
//!     let page = MemoryPage::new();
//!     page.append("div").with_class("nav-card").with_text("Matches");
//!     page.append("div").with_class("nav-card").with_text("Teams");
//!     page.append("span").with_class("status-value").with_text("-");
//!
//!     let summary = PageEnhancer::new().activate(&page, &TokioClock::new());
//!     println!("revealing {} cards", summary.cards_scheduled);
//! }
//! ```

pub mod clock;
pub mod dom;
pub mod enhancer;
pub mod error;
pub mod page;
pub mod reveal;
pub mod selector;
pub mod status;

// Re-exports
pub use clock::{Clock, DeferredCallback, ManualClock, PendingTimer, RepeatingCallback, TokioClock};
pub use dom::{ElementHandle, PageDom};
pub use enhancer::{ActivationSummary, PageEnhancer};
pub use error::{EnhanceError, EnhanceResult};
pub use page::{MemoryElement, MemoryPage};
pub use reveal::CardRevealAnimator;
pub use selector::{Selector, SelectorKind};
pub use status::{format_ru_timestamp, ClockUpdater};
