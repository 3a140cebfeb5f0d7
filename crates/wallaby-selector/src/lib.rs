//! Fluent construction of CSS selector strings.
//!
//! # Scope
//!
//! This crate implements:
//! - **Typed segments** ([Selectors Level 4 § 3.3](https://www.w3.org/TR/selectors-4/#simple))
//!   - One segment per simple-selector condition: type, ID, class,
//!     attribute, pseudo-class, pseudo-element
//!   - Explicit category tags — a segment never re-derives its category
//!     from its formatted text
//!
//! - **Simple selector chains** ([§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound))
//!   - Immutable, copy-on-append fluent API: every append returns a new
//!     value and leaves the receiver untouched
//!   - Category ordering enforced (element → id → class → attribute →
//!     pseudo-class → pseudo-element)
//!   - At-most-once enforcement for type, ID, and pseudo-element segments
//!
//! - **Composite selectors** ([§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators))
//!   - Two selectors joined by a combinator token, nestable to any depth
//!   - Rendering with a single space on each side of every combinator
//!
//! # Not Implemented
//!
//! - Selector parsing (segment values are opaque strings)
//! - Matching against a document tree
//! - Specificity calculation
//! - Validation of attribute-selector syntax or pseudo-class names

/// Selector values, the fluent append API, and validation errors.
pub mod builder;
/// Typed selector segments and their categories.
pub mod segment;

pub use builder::{CompositeSelector, Selector, SelectorError, SimpleSelector};
pub use segment::{Segment, SegmentKind};
