use std::collections::{BTreeMap, BTreeSet};

use crate::foundation::core::{SectionId, non_negative_px};
use crate::foundation::error::{SiteError, SiteResult};

/// Static registry entry: anchor id plus the label shown on the navigation rail.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SectionDef {
    /// Anchor id.
    pub id: SectionId,
    /// Rail label.
    pub label: String,
}

impl SectionDef {
    /// Definition with the given anchor id and rail label.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: SectionId::new(id),
            label: label.into(),
        }
    }
}

/// The site's page sections in display order.
pub fn default_sections() -> Vec<SectionDef> {
    vec![
        SectionDef::new("intro", "Intro"),
        SectionDef::new("work", "Work"),
        SectionDef::new("team", "Team"),
        SectionDef::new("contact", "Contact"),
    ]
}

/// Rendered position of a section anchor, measured from the document top.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnchorGeometry {
    /// Distance from the document top.
    pub offset_top: f64,
    /// Rendered height.
    pub height: f64,
}

impl AnchorGeometry {
    /// Negative or non-finite values are clamped to 0.
    pub fn new(offset_top: f64, height: f64) -> Self {
        Self {
            offset_top: non_negative_px(offset_top),
            height: non_negative_px(height),
        }
    }

    /// `offset_top + height`.
    pub fn bottom(self) -> f64 {
        self.offset_top + self.height
    }

    /// Half-open containment: `[offset_top, offset_top + height)`.
    pub fn contains(self, y: f64) -> bool {
        y >= self.offset_top && y < self.bottom()
    }
}

/// Host seam for measuring anchors in the rendered layout.
pub trait LayoutSource {
    /// `None` when the anchor is not mounted yet.
    fn anchor_geometry(&self, id: &SectionId) -> Option<AnchorGeometry>;
}

/// Fixed anchor table, for tests, the CLI and pre-measured layouts.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct StaticLayout {
    /// Geometry by anchor id.
    pub anchors: BTreeMap<SectionId, AnchorGeometry>,
}

impl StaticLayout {
    /// Add or replace one anchor.
    pub fn with(mut self, id: &str, offset_top: f64, height: f64) -> Self {
        self.anchors
            .insert(SectionId::new(id), AnchorGeometry::new(offset_top, height));
        self
    }
}

impl LayoutSource for StaticLayout {
    fn anchor_geometry(&self, id: &SectionId) -> Option<AnchorGeometry> {
        self.anchors.get(id).copied()
    }
}

/// A registry entry with its geometry, if measured.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    /// Static definition.
    pub def: SectionDef,
    /// `None` until the anchor is mounted.
    pub geometry: Option<AnchorGeometry>,
}

impl Section {
    /// Anchor id.
    pub fn id(&self) -> &SectionId {
        &self.def.id
    }

    /// Rail label.
    pub fn label(&self) -> &str {
        &self.def.label
    }
}

/// Ordered, uniquely-keyed list of page sections and their last-measured geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionRegistry {
    sections: Vec<Section>,
}

impl SectionRegistry {
    /// Build from display-ordered definitions. Fails on an empty list, a blank id or a
    /// duplicate id. No geometry is known until [`SectionRegistry::refresh_geometry`].
    pub fn new(defs: Vec<SectionDef>) -> SiteResult<Self> {
        if defs.is_empty() {
            return Err(SiteError::validation("section registry must not be empty"));
        }
        let mut seen = BTreeSet::new();
        for def in &defs {
            if def.id.as_str().trim().is_empty() {
                return Err(SiteError::validation("section id must not be empty"));
            }
            if !seen.insert(def.id.clone()) {
                return Err(SiteError::validation(format!(
                    "duplicate section id '{}'",
                    def.id
                )));
            }
        }
        Ok(Self {
            sections: defs
                .into_iter()
                .map(|def| Section {
                    def,
                    geometry: None,
                })
                .collect(),
        })
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Never true for a constructed registry.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Sections in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// The top-of-page default section.
    pub fn first(&self) -> &Section {
        // Construction rejects empty registries.
        &self.sections[0]
    }

    /// Section by id.
    pub fn get(&self, id: &SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| s.id() == id)
    }

    /// Display index of `id`.
    pub fn position(&self, id: &SectionId) -> Option<usize> {
        self.sections.iter().position(|s| s.id() == id)
    }

    /// Last-measured geometry; `None` for unknown or unmounted anchors.
    pub fn geometry(&self, id: &SectionId) -> Option<AnchorGeometry> {
        self.get(id).and_then(|s| s.geometry)
    }

    /// Re-measure every anchor. Returns how many anchors are currently mounted.
    #[tracing::instrument(skip_all)]
    pub fn refresh_geometry(&mut self, host: &dyn LayoutSource) -> usize {
        let mut mounted = 0usize;
        for section in &mut self.sections {
            section.geometry = host
                .anchor_geometry(&section.def.id)
                .map(|g| AnchorGeometry::new(g.offset_top, g.height));
            if section.geometry.is_some() {
                mounted += 1;
            } else {
                tracing::trace!(section = %section.def.id, "anchor not mounted");
            }
        }
        mounted
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sections/registry.rs"]
mod tests;
