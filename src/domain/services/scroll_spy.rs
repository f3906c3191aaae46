//! Active-section tracking from page geometry.
//!
//! The DOM layer turns a scroll event into a [`ScrollSnapshot`]; everything
//! here is plain arithmetic over that snapshot so it can be tested natively.

use crate::config::NavbarConfig;
use crate::domain::models::Section;

/// Vertical extent of one `<section>` element, in document coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    /// Value of the element's `id` attribute, empty when absent.
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Start inclusive, end exclusive.
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// Page geometry captured at one scroll notification.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollSnapshot {
    pub scroll_y: f64,
    /// Sections in document order.
    pub sections: Vec<SectionBounds>,
}

/// What a scroll notification means for the navbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollOutcome {
    pub scrolled: bool,
    /// `None`: no section under the probe, keep the current active section.
    /// `Some(None)`: the section under the probe is not a nav entry.
    pub active: Option<Option<Section>>,
}

/// First section whose span contains `scroll_y + offset`.
pub fn locate(scroll_y: f64, offset: f64, sections: &[SectionBounds]) -> Option<&SectionBounds> {
    let probe = scroll_y + offset;
    sections.iter().find(|bounds| bounds.contains(probe))
}

/// Map a located section back to a nav entry; unknown or missing ids are
/// the empty default.
pub fn resolve(bounds: &SectionBounds) -> Option<Section> {
    bounds.id.parse().ok()
}

pub fn observe(snapshot: &ScrollSnapshot, config: &NavbarConfig) -> ScrollOutcome {
    let active = locate(snapshot.scroll_y, config.section_offset, &snapshot.sections).map(resolve);

    ScrollOutcome {
        scrolled: snapshot.scroll_y > config.scrolled_threshold,
        active,
    }
}
