//! Structured logging for the portfolio navbar
//!
//! Every event carries an `operation` field so browser-console output can be
//! filtered per concern.

use crate::domain::models::Section;
use crate::shared::errors::AppError;

#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    ScrollSpy,
    Navigation,
    MobileMenu,
    Theme,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::ScrollSpy => "scroll_spy",
            LogOperation::Navigation => "navigation",
            LogOperation::MobileMenu => "mobile_menu",
            LogOperation::Theme => "theme",
        }
    }
}

fn section_id(section: Option<Section>) -> &'static str {
    section.map(|s| s.id()).unwrap_or("")
}

/// Log scroll listener registration
pub fn log_scroll_listener_attached() {
    tracing::debug!(
        operation = LogOperation::ScrollSpy.as_str(),
        "Scroll listener attached"
    );
}

pub fn log_scroll_listener_detached() {
    tracing::debug!(
        operation = LogOperation::ScrollSpy.as_str(),
        "Scroll listener detached"
    );
}

/// Log an active-section change driven by scrolling
pub fn log_section_in_view(section: Option<Section>, scroll_y: f64) {
    tracing::trace!(
        operation = LogOperation::ScrollSpy.as_str(),
        section = section_id(section),
        scroll_y = scroll_y,
        "Section in view"
    );
}

/// Log a click on a nav entry (brand, desktop or mobile link)
pub fn log_nav_click(section: Section) {
    tracing::info!(
        operation = LogOperation::Navigation.as_str(),
        section = section.id(),
        "Navigating to section"
    );
}

pub fn log_menu_toggled(open: bool) {
    tracing::debug!(
        operation = LogOperation::MobileMenu.as_str(),
        open = open,
        "Mobile menu toggled"
    );
}

pub fn log_theme_applied(theme: &str) {
    tracing::debug!(
        operation = LogOperation::Theme.as_str(),
        theme = theme,
        "Theme applied"
    );
}

/// DOM lookups are best-effort: a miss is expected during SSR or before the
/// target section exists, so it stays at debug level.
pub fn log_dom_miss(operation: LogOperation, error: &AppError) {
    tracing::debug!(
        operation = operation.as_str(),
        error = %error,
        "DOM operation skipped"
    );
}
