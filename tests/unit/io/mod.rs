pub mod configuration;
pub mod logging;
pub mod render;
