//! Typed selector segments.
//!
//! A [`Segment`] is one condition of a simple selector — `div`, `#main`,
//! `.btn`, `[href]`, `:hover`, `::before` — stored as an explicit
//! [`SegmentKind`] tag plus the raw value. The leading marker (`#`, `.`,
//! `[...]`, `:`, `::`) is applied only when the segment is rendered, so the
//! category is never sniffed back out of formatted text.

use std::fmt;

use serde::Serialize;
use strum_macros::{Display, EnumString};

/// The category of a selector segment.
///
/// [Selectors Level 4 § 3.3](https://www.w3.org/TR/selectors-4/#simple)
/// distinguishes type, ID, class, attribute, pseudo-class, and
/// pseudo-element simple selectors.
///
/// Variant order is the required ordering within a simple selector, so the
/// derived `Ord` compares categories by their position in that order:
/// element → id → class → attribute → pseudo-class → pseudo-element.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, Serialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum SegmentKind {
    /// Type selector: the bare element name (`div`).
    Element,
    /// ID selector: rendered with a leading `#` (`#main`).
    Id,
    /// Class selector: rendered with a leading `.` (`.btn`).
    Class,
    /// Attribute selector: rendered wrapped in brackets (`[href]`).
    #[strum(to_string = "attribute", serialize = "attr")]
    Attribute,
    /// Pseudo-class: rendered with a leading `:` (`:hover`).
    PseudoClass,
    /// Pseudo-element: rendered with a leading `::` (`::before`).
    PseudoElement,
}

impl SegmentKind {
    /// Whether this category may occur at most once per simple selector.
    ///
    /// Type, ID, and pseudo-element segments are unique; class, attribute,
    /// and pseudo-class segments may repeat.
    #[must_use]
    pub const fn is_unique(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }
}

/// One formatted token of a simple selector.
///
/// The value is stored raw; [`fmt::Display`] applies the category marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    /// The category tag, set at construction and never re-derived.
    pub kind: SegmentKind,
    /// The opaque raw value, without any category marker.
    pub value: String,
}

impl Segment {
    /// Create a segment of the given category.
    #[must_use]
    pub fn new(kind: SegmentKind, value: &str) -> Self {
        Self {
            kind,
            value: value.to_owned(),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            SegmentKind::Element => write!(f, "{}", self.value),
            SegmentKind::Id => write!(f, "#{}", self.value),
            SegmentKind::Class => write!(f, ".{}", self.value),
            SegmentKind::Attribute => write!(f, "[{}]", self.value),
            SegmentKind::PseudoClass => write!(f, ":{}", self.value),
            SegmentKind::PseudoElement => write!(f, "::{}", self.value),
        }
    }
}
