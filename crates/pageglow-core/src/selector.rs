//! Simple-selector subset used to locate page elements
//!
//! Supports the three simple forms: class (`.nav-card`), id (`#status`),
//! and tag (`section`). Compound selectors, combinators, selector lists,
//! attribute selectors and pseudo-classes are outside the supported
//! subset and are rejected at parse time.

use crate::error::{EnhanceError, EnhanceResult};
use std::fmt;
use std::str::FromStr;

/// Which simple form a [`Selector`] carries
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SelectorKind {
    /// `.name` - matches every element carrying the class
    Class(String),
    /// `#name` - matches elements with the exact id
    Id(String),
    /// `name` - matches elements with the exact tag name
    Tag(String),
}

/// A parsed simple selector
///
/// Constructors take the bare name (no sigil) and cannot fail, so
/// selectors known at compile time never force error handling on the
/// caller. Host-supplied strings go through [`Selector::parse`] instead.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Selector {
    kind: SelectorKind,
}

impl Selector {
    /// Selector matching every element carrying `class`
    pub fn class(class: impl Into<String>) -> Self {
        Selector {
            kind: SelectorKind::Class(class.into()),
        }
    }

    /// Selector matching elements whose id equals `id`
    pub fn id(id: impl Into<String>) -> Self {
        Selector {
            kind: SelectorKind::Id(id.into()),
        }
    }

    /// Selector matching elements whose tag name equals `tag`
    pub fn tag(tag: impl Into<String>) -> Self {
        Selector {
            kind: SelectorKind::Tag(tag.into()),
        }
    }

    /// The simple form this selector carries
    pub fn kind(&self) -> &SelectorKind {
        &self.kind
    }

    /// Validate that a selector string stays inside the supported subset
    fn validate_format(input: &str) -> EnhanceResult<()> {
        if input.is_empty() {
            return Err(EnhanceError::SelectorParse(
                "selector cannot be empty".to_string(),
            ));
        }

        if input.chars().any(char::is_whitespace) || input.contains(['>', '+', '~', ',']) {
            return Err(EnhanceError::UnsupportedSelector(input.to_string()));
        }

        if input.contains(['[', ']']) {
            return Err(EnhanceError::UnsupportedSelector(input.to_string()));
        }

        if input.contains(':') {
            return Err(EnhanceError::UnsupportedSelector(input.to_string()));
        }

        if input == "*" {
            return Err(EnhanceError::UnsupportedSelector(input.to_string()));
        }

        Ok(())
    }

    /// Validate the name part following an optional sigil
    fn validate_name(input: &str, name: &str) -> EnhanceResult<()> {
        if name.is_empty() {
            return Err(EnhanceError::SelectorParse(format!(
                "selector '{}' has no name",
                input
            )));
        }

        // A further sigil inside the name means a compound selector
        if name.contains(['.', '#']) {
            return Err(EnhanceError::UnsupportedSelector(input.to_string()));
        }

        Ok(())
    }

    /// Parse a selector string from the host
    ///
    /// Accepts exactly one simple selector: `.class`, `#id`, or `tag`.
    ///
    /// # Errors
    ///
    /// Returns [`EnhanceError::SelectorParse`] for empty input or a bare
    /// sigil, and [`EnhanceError::UnsupportedSelector`] for syntax outside
    /// the supported subset (combinators, lists, attributes,
    /// pseudo-classes, compound selectors).
    pub fn parse(input: &str) -> EnhanceResult<Self> {
        Self::validate_format(input)?;

        let kind = if let Some(name) = input.strip_prefix('.') {
            Self::validate_name(input, name)?;
            SelectorKind::Class(name.to_string())
        } else if let Some(name) = input.strip_prefix('#') {
            Self::validate_name(input, name)?;
            SelectorKind::Id(name.to_string())
        } else {
            Self::validate_name(input, input)?;
            SelectorKind::Tag(input.to_string())
        };

        Ok(Selector { kind })
    }

    /// Whether an element with the given tag, id and classes matches
    ///
    /// Names compare exactly (case-sensitive); the in-memory page is not
    /// an HTML parser and performs no case folding.
    pub fn matches(&self, tag: &str, id: Option<&str>, classes: &[String]) -> bool {
        match &self.kind {
            SelectorKind::Class(class) => classes.iter().any(|c| c == class),
            SelectorKind::Id(want) => id == Some(want.as_str()),
            SelectorKind::Tag(want) => tag == want,
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            SelectorKind::Class(name) => write!(f, ".{}", name),
            SelectorKind::Id(name) => write!(f, "#{}", name),
            SelectorKind::Tag(name) => write!(f, "{}", name),
        }
    }
}

impl FromStr for Selector {
    type Err = EnhanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
