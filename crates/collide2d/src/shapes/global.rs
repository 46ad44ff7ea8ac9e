//! Universal unbounded sentinel shape
//!
//! `Global` covers the entire plane for bounds and rectangle classification
//! purposes but is a sentinel, not a literal collider: it never reports
//! intersection or penetration against anything.

use crate::foundation::math::Rect;

/// Universal, unbounded sentinel shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Global;

impl Global {
    /// Create the global sentinel
    pub fn new() -> Self {
        Self
    }

    /// Bounds of the sentinel: the maximal rectangle
    pub fn bounds(&self) -> Rect {
        Rect::maximal()
    }
}
