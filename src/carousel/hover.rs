use crate::foundation::core::{Point, Rect, Size, Vec2};
use crate::foundation::error::{SiteError, SiteResult};

/// Card grid geometry: fixed-size cards flowing column by column across `rows` rows.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CardLayout {
    /// Card width.
    pub card_width_px: f64,
    /// Card height.
    pub card_height_px: f64,
    /// Gap between cards on both axes.
    pub gap_px: f64,
    /// Rows in the grid; at least 1.
    pub rows: u32,
}

impl Default for CardLayout {
    fn default() -> Self {
        Self {
            card_width_px: 320.0,
            card_height_px: 320.0,
            gap_px: 24.0,
            rows: 2,
        }
    }
}

impl CardLayout {
    /// At least one row; sizes finite and non-negative.
    pub fn validate(&self) -> SiteResult<()> {
        if self.rows == 0 {
            return Err(SiteError::validation("card layout rows must be >= 1"));
        }
        for (name, v) in [
            ("card_width_px", self.card_width_px),
            ("card_height_px", self.card_height_px),
            ("gap_px", self.gap_px),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(SiteError::validation(format!(
                    "card layout {name} must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }

    /// Columns needed for `count` cards.
    pub fn columns(&self, count: usize) -> usize {
        let rows = self.rows.max(1) as usize;
        count.div_ceil(rows)
    }

    /// Width of the row holding `count` cards, i.e. the carousel's scroll width.
    pub fn content_width(&self, count: usize) -> f64 {
        let cols = self.columns(count);
        if cols == 0 {
            return 0.0;
        }
        cols as f64 * self.card_width_px + (cols - 1) as f64 * self.gap_px
    }

    /// Rects for `count` cards, column-major from the origin.
    pub fn grid(&self, count: usize) -> CardGrid {
        let rows = self.rows.max(1) as usize;
        let size = Size::new(self.card_width_px, self.card_height_px);
        let rects = (0..count)
            .map(|i| {
                let col = (i / rows) as f64;
                let row = (i % rows) as f64;
                let origin = Point::new(
                    col * (self.card_width_px + self.gap_px),
                    row * (self.card_height_px + self.gap_px),
                );
                Rect::from_origin_size(origin, size)
            })
            .collect();
        CardGrid { rects }
    }
}

/// Last-measured card rects in content coordinates (offset 0).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CardGrid {
    rects: Vec<Rect>,
}

impl CardGrid {
    /// Grid from host-measured rects.
    pub fn from_rects(rects: Vec<Rect>) -> Self {
        Self { rects }
    }

    /// Number of cards.
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// No cards.
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Card rects at offset 0.
    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    /// Index of the card under `pointer` (viewport coordinates) with the row shifted by
    /// `offset_px`. Always `None` mid-drag so overlays don't flicker under the cursor.
    pub fn hovered(&self, pointer: Point, offset_px: f64, dragging: bool) -> Option<usize> {
        if dragging || !pointer.x.is_finite() || !pointer.y.is_finite() {
            return None;
        }
        let local = pointer - Vec2::new(offset_px, 0.0);
        self.rects.iter().position(|r| r.contains(local))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/carousel/hover.rs"]
mod tests;
