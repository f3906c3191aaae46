pub const BRAND_NAME: &str = "Chard";

/// Header switches to its solid background once `scrollY` exceeds this.
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;

/// Offset added to `scrollY` before testing section spans.
pub const SECTION_PROBE_OFFSET_PX: f64 = 100.0;

/// localStorage key for the persisted theme.
pub const THEME_STORAGE_KEY: &str = "theme";

pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";
