use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::carousel::drag::CarouselConfig;
use crate::carousel::hover::CardLayout;
use crate::contact::endpoint::ContactConfig;
use crate::foundation::error::{SiteError, SiteResult};
use crate::nav::tracker::RailTiming;
use crate::reveal::gate::RevealConfig;
use crate::scroll::smooth::SmoothScrollConfig;
use crate::sections::registry::{SectionDef, SectionRegistry, default_sections};
use crate::sections::resolver::TrackerConfig;
use crate::team::effects::TeamConfig;

/// Publications list tuning.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PublicationsConfig {
    /// The list is shown while `scrollY` exceeds this value.
    pub reveal_scroll_y: f64,
}

impl Default for PublicationsConfig {
    fn default() -> Self {
        Self {
            reveal_scroll_y: 50.0,
        }
    }
}

/// Every tunable of the page, loadable from JSON. Missing keys take their defaults.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Tracked sections in page order.
    pub sections: Vec<SectionDef>,
    /// Active-section resolver tuning.
    pub tracker: TrackerConfig,
    /// Navigation rail transitions.
    pub rail: RailTiming,
    /// Click-to-scroll animation.
    pub smooth_scroll: SmoothScrollConfig,
    /// Drag and momentum.
    pub carousel: CarouselConfig,
    /// Project card grid.
    pub cards: CardLayout,
    /// Default entrance gate.
    pub reveal: RevealConfig,
    /// Team section effects.
    pub team: TeamConfig,
    /// Publications reveal threshold.
    pub publications: PublicationsConfig,
    /// Contact endpoint.
    pub contact: ContactConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            sections: default_sections(),
            tracker: TrackerConfig::default(),
            rail: RailTiming::default(),
            smooth_scroll: SmoothScrollConfig::default(),
            carousel: CarouselConfig::default(),
            cards: CardLayout::default(),
            reveal: RevealConfig::default(),
            team: TeamConfig::default(),
            publications: PublicationsConfig::default(),
            contact: ContactConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Parse a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> SiteResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| SiteError::validation(format!("parse site config JSON: {e}")))
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> SiteResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            SiteError::validation(format!("open site config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Validate every sub-config and the section list.
    pub fn validate(&self) -> SiteResult<()> {
        SectionRegistry::new(self.sections.clone())?;
        self.tracker.validate()?;
        self.rail.validate()?;
        self.smooth_scroll.validate()?;
        self.carousel.validate()?;
        self.cards.validate()?;
        self.reveal.validate()?;
        self.team.validate()?;
        if !self.publications.reveal_scroll_y.is_finite() {
            return Err(SiteError::validation(
                "publications reveal_scroll_y must be finite",
            ));
        }
        self.contact.validate()
    }

    /// Registry for the configured sections.
    pub fn registry(&self) -> SiteResult<SectionRegistry> {
        SectionRegistry::new(self.sections.clone())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/site.rs"]
mod tests;
