//! Selector values and the fluent append API.
//!
//! [`SimpleSelector`] accumulates [`Segment`]s under two rules:
//!
//! - **Ordering** — categories appear in the fixed order element → id →
//!   class → attribute → pseudo-class → pseudo-element. Appending a segment
//!   whose category precedes one already present fails with
//!   [`SelectorError::OrderViolation`].
//! - **Uniqueness** — element, id, and pseudo-element segments occur at most
//!   once. A repeat fails with [`SelectorError::DuplicateSegment`], checked
//!   before the ordering rule.
//!
//! Every append takes `&self` and returns a fresh value; a failed append
//! returns no selector at all and leaves the receiver usable.
//!
//! [`Selector`] is the union of a simple chain and a combinator-joined
//! composite ([Selectors Level 4 § 16](https://www.w3.org/TR/selectors-4/#combinators)).
//! Composites support only [`Selector::combine`] and rendering; the append
//! methods live on [`SimpleSelector`] alone, so appending onto a composite
//! is unrepresentable.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::segment::{Segment, SegmentKind};

/// Validation failure raised by an append.
///
/// Both variants are immediate and non-retryable: they signal a misuse of
/// the builder, not a transient condition, and carry a fixed description of
/// the violated rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// An element, id, or pseudo-element segment was appended a second time.
    #[error(
        "Element, id and pseudo-element should not occur more than one time inside the selector"
    )]
    DuplicateSegment,

    /// A segment was appended whose category precedes one already present.
    #[error(
        "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    OrderViolation,
}

/// An ordered, category-constrained sequence of segments.
///
/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
/// "A compound selector is a sequence of simple selectors that are not
/// separated by a combinator."
///
/// The empty value ([`SimpleSelector::new`] or `Default`) is the base of
/// every chain:
///
/// ```
/// use wallaby_selector::SimpleSelector;
///
/// # fn demo() -> Result<(), wallaby_selector::SelectorError> {
/// let selector = SimpleSelector::new()
///     .element("div")?
///     .id("main")?
///     .class("container")?;
/// assert_eq!(selector.stringify(), "div#main.container");
/// # Ok(())
/// # }
/// # demo().unwrap();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SimpleSelector {
    segments: Vec<Segment>,
}

impl SimpleSelector {
    /// The empty selector, holding no segments.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// The segments accumulated so far, in append order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Whether no segments have been appended yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Append a type segment (`div`).
    ///
    /// # Errors
    ///
    /// Fails with [`SelectorError::DuplicateSegment`] if an element segment
    /// is already present, or [`SelectorError::OrderViolation`] if any
    /// later-ordered segment is.
    pub fn element(&self, value: &str) -> Result<Self, SelectorError> {
        self.append(SegmentKind::Element, value)
    }

    /// Append an ID segment (`#main`).
    ///
    /// # Errors
    ///
    /// Fails with [`SelectorError::DuplicateSegment`] if an id segment is
    /// already present, or [`SelectorError::OrderViolation`] if any
    /// later-ordered segment is.
    pub fn id(&self, value: &str) -> Result<Self, SelectorError> {
        self.append(SegmentKind::Id, value)
    }

    /// Append a class segment (`.btn`). May repeat.
    ///
    /// # Errors
    ///
    /// Fails with [`SelectorError::OrderViolation`] if any later-ordered
    /// segment is already present.
    pub fn class(&self, value: &str) -> Result<Self, SelectorError> {
        self.append(SegmentKind::Class, value)
    }

    /// Append an attribute segment (`[href]`). May repeat.
    ///
    /// The value is wrapped in brackets verbatim; attribute-selector syntax
    /// inside the brackets is not validated.
    ///
    /// # Errors
    ///
    /// Fails with [`SelectorError::OrderViolation`] if any later-ordered
    /// segment is already present.
    pub fn attr(&self, value: &str) -> Result<Self, SelectorError> {
        self.append(SegmentKind::Attribute, value)
    }

    /// Append a pseudo-class segment (`:hover`). May repeat.
    ///
    /// # Errors
    ///
    /// Fails with [`SelectorError::OrderViolation`] if a pseudo-element
    /// segment is already present.
    pub fn pseudo_class(&self, value: &str) -> Result<Self, SelectorError> {
        self.append(SegmentKind::PseudoClass, value)
    }

    /// Append a pseudo-element segment (`::before`).
    ///
    /// # Errors
    ///
    /// Fails with [`SelectorError::DuplicateSegment`] if a pseudo-element
    /// segment is already present.
    pub fn pseudo_element(&self, value: &str) -> Result<Self, SelectorError> {
        self.append(SegmentKind::PseudoElement, value)
    }

    /// Render the chain: each segment's formatted text in append order,
    /// no separators.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.to_string()
    }

    /// Copy-on-append with validation.
    ///
    /// Uniqueness is checked before ordering, so a repeated unique category
    /// always reports `DuplicateSegment` (ordering against itself is
    /// trivially satisfied), and any other out-of-order append reports
    /// `OrderViolation`.
    fn append(&self, kind: SegmentKind, value: &str) -> Result<Self, SelectorError> {
        if kind.is_unique() && self.segments.iter().any(|s| s.kind == kind) {
            return Err(SelectorError::DuplicateSegment);
        }
        if self.segments.iter().any(|s| s.kind > kind) {
            return Err(SelectorError::OrderViolation);
        }

        let mut next = self.clone();
        next.segments.push(Segment::new(kind, value));
        Ok(next)
    }
}

impl fmt::Display for SimpleSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

/// Two selectors joined by a combinator token.
///
/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
///
/// The token is stored verbatim — the canonical four (` `, `>`, `+`, `~`)
/// are not privileged over any other string, and the operands' internal
/// structure is not inspected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompositeSelector {
    /// The left-hand selector.
    pub left: Selector,
    /// The combinator token, echoed literally when rendering.
    pub combinator: String,
    /// The right-hand selector.
    pub right: Selector,
}

/// A fully-formed selector: either a simple chain or a composite tree.
///
/// Composites are terminal for building — they can be combined further and
/// rendered, but not appended to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Selector {
    /// A flat segment chain.
    Simple(SimpleSelector),
    /// A combinator-joined pair, nestable to any depth.
    Composite(Box<CompositeSelector>),
}

impl Selector {
    /// Join two selectors with a combinator token.
    ///
    /// ```
    /// use wallaby_selector::{Selector, SimpleSelector};
    ///
    /// # fn demo() -> Result<(), wallaby_selector::SelectorError> {
    /// let left = SimpleSelector::new().element("div")?.id("main")?;
    /// let right = SimpleSelector::new().element("span")?;
    /// let combined = Selector::combine(left, "+", right);
    /// assert_eq!(combined.stringify(), "div#main + span");
    /// # Ok(())
    /// # }
    /// # demo().unwrap();
    /// ```
    #[must_use]
    pub fn combine(left: impl Into<Self>, combinator: impl Into<String>, right: impl Into<Self>) -> Self {
        Self::Composite(Box::new(CompositeSelector {
            left: left.into(),
            combinator: combinator.into(),
            right: right.into(),
        }))
    }

    /// Render to text.
    ///
    /// Simple selectors concatenate their segments with no separators.
    /// Composites render `left`, a single space, the combinator token, a
    /// single space, then `right`, recursing down to simple leaves.
    /// Non-mutating and idempotent.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.to_string()
    }
}

impl From<SimpleSelector> for Selector {
    fn from(simple: SimpleSelector) -> Self {
        Self::Simple(simple)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple(simple) => simple.fmt(f),
            Self::Composite(composite) => write!(
                f,
                "{} {} {}",
                composite.left, composite.combinator, composite.right
            ),
        }
    }
}
