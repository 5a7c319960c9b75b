use std::fmt;

pub use kurbo::{Point, Rect, Size, Vec2};

/// Stable identifier of a page section (also its DOM anchor id).
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct SectionId(pub String);

impl SectionId {
    /// Build a section id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl PartialEq<&str> for SectionId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Stable identifier of an element observed for entrance animations.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct ElementId(pub String);

impl ElementId {
    /// Build an element id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// Coerce a host-reported pixel offset into a finite, non-negative value.
pub fn non_negative_px(v: f64) -> f64 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}

/// Fraction of `element` covered by `viewport`, in `[0, 1]`.
///
/// Degenerate (zero-area) elements count as fully visible once they touch the viewport.
pub fn visible_fraction(element: Rect, viewport: Rect) -> f64 {
    let element = element.abs();
    let viewport = viewport.abs();
    let overlap = element.intersect(viewport);
    if overlap.width() < 0.0 || overlap.height() < 0.0 {
        return 0.0;
    }
    let area = element.area();
    if area <= 0.0 {
        let touches = element.x0 <= viewport.x1
            && element.x1 >= viewport.x0
            && element.y0 <= viewport.y1
            && element.y1 >= viewport.y0;
        return if touches { 1.0 } else { 0.0 };
    }
    (overlap.area() / area).clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
