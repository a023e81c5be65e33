//! Capability seams between the enhancer and the host page
//!
//! The enhancer never owns a document. It works through two small traits
//! the host implements: [`ElementHandle`] for one element's inline style
//! and text, and [`PageDom`] for ordered selector queries. The bundled
//! [`MemoryPage`](crate::MemoryPage) implements both for tests and for
//! hosts without a real document.

use crate::selector::Selector;

/// Inline style property names the enhancer writes
pub mod style {
    /// `opacity`
    pub const OPACITY: &str = "opacity";
    /// `transform`
    pub const TRANSFORM: &str = "transform";
    /// `transition`
    pub const TRANSITION: &str = "transition";
}

/// Handle to one element of the host page
///
/// Handles are cheap clones sharing the underlying element, so mutation
/// goes through `&self`. Scheduled work moves clones into callbacks,
/// which is why handles are `Send`.
pub trait ElementHandle: Send {
    /// Inline style value for `property`, or `None` if never set
    fn style(&self, property: &str) -> Option<String>;

    /// Set the inline style value for `property`
    fn set_style(&self, property: &str, value: &str);

    /// The element's text content
    fn text(&self) -> String;

    /// Replace the element's text content
    fn set_text(&self, text: &str);
}

/// Ordered selector queries over the host page
///
/// Where the page type is `Clone`, clones must view the same live
/// document, not a snapshot: scheduled work holds a page clone and
/// re-queries it on every tick, and must see elements the host added
/// after scheduling.
pub trait PageDom {
    /// The host's element handle type
    type Element: ElementHandle + Clone + 'static;

    /// Every element matching `selector`, in document order
    fn select_all(&self, selector: &Selector) -> Vec<Self::Element>;

    /// The first element matching `selector`, in document order
    fn select_first(&self, selector: &Selector) -> Option<Self::Element> {
        self.select_all(selector).into_iter().next()
    }
}
