//! Navbar configuration.
//!
//! Defaults match the portfolio page; a JSON document may override any
//! subset of fields.

use serde::Deserialize;

use crate::shared::constants::{BRAND_NAME, SCROLLED_THRESHOLD_PX, SECTION_PROBE_OFFSET_PX};
use crate::shared::errors::Result;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavbarConfig {
    /// Text of the brand link.
    pub brand: String,
    /// Scroll offset (px) past which the header gets its solid background.
    pub scrolled_threshold: f64,
    /// Distance (px) below the viewport top used to pick the active section.
    pub section_offset: f64,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            brand: BRAND_NAME.to_string(),
            scrolled_threshold: SCROLLED_THRESHOLD_PX,
            section_offset: SECTION_PROBE_OFFSET_PX,
        }
    }
}

impl NavbarConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
