//! Plain geometry value types.
//!
//! Currently a single type: [`Rectangle`], a pair of named dimensions with
//! a computed area.

use serde::{Deserialize, Serialize};

/// A width/height pair with a computed area.
///
/// Inputs are taken as given — no range or sign validation is performed, so
/// negative dimensions are accepted and simply produce a nonsensical area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// The first dimension.
    pub width: f64,
    /// The second dimension.
    pub height: f64,
}

impl Rectangle {
    /// Create a rectangle from its two dimensions.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The product of the two dimensions.
    #[must_use]
    pub const fn area(&self) -> f64 {
        self.width * self.height
    }
}
