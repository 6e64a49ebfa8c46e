//! Input/output operations, external tools and error handling

/// Command-line parsing and command execution
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types and constructors
pub mod error;
/// Generator and solver invocation
pub mod launcher;
/// Diagnostic log setup
pub mod logging;
/// Progress display for exports
pub mod progress;
/// Frame rasterization
pub mod render;
/// GIF and PNG export
pub mod visualization;
