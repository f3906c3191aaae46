// Custom Dioxus hooks
pub mod use_scroll_spy;
pub mod use_theme;

pub use use_scroll_spy::use_scroll_spy;
pub use use_theme::{Theme, apply_theme, save_theme, use_theme};
