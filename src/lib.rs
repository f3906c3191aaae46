// Public API exports
pub mod config;
pub mod domain;
pub mod shared;

// Dioxus views
pub mod app;
