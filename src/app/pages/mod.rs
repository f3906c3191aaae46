pub mod portfolio;

pub use portfolio::App;
