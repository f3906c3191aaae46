pub mod constants;
pub mod dom;
pub mod errors;
pub mod hooks;
pub mod logging;
