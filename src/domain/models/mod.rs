// Domain models
// Pure Rust, no framework dependencies

pub mod navbar_state;
pub mod section;

pub use navbar_state::NavbarState;
pub use section::Section;
