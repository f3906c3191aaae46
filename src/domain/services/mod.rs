pub mod scroll_spy;

pub use scroll_spy::{ScrollOutcome, ScrollSnapshot, SectionBounds};
