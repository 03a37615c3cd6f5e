//! Platform-specific configuration

/// Copy shortcut display for the status bar
/// Ctrl+Y works on all platforms; macOS terminals pass it through too
pub const COPY_SHORTCUT: &str = "^Y";

/// Generate shortcut display
pub const GENERATE_SHORTCUT: &str = "^G";
