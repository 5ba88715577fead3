//! Application-wide constants and default values
//!
//! Centralized location for all hard-coded values to improve maintainability

/// Node geometry constants
pub mod node {
    use egui::Vec2;

    /// Default size for operator nodes (two inputs, one output)
    pub const DEFAULT_SIZE: Vec2 = Vec2::new(100.0, 80.0);

    /// Default size for literal and display nodes
    pub const COMPACT_SIZE: Vec2 = Vec2::new(100.0, 60.0);

    /// Smallest extent a node can be resized down to
    pub const MIN_SIZE: Vec2 = Vec2::new(80.0, 50.0);

    /// Side length of the square resize handle in the bottom-right corner
    pub const RESIZE_HANDLE: f32 = 12.0;
}

/// Socket constants
pub mod port {
    /// Side length of the square hit region centered on a socket
    pub const HIT_SIZE: f32 = 10.0;
}

/// Interaction timing constants
pub mod interaction {
    /// Two presses on the same node within this window count as a double-click (milliseconds)
    pub const DOUBLE_CLICK_MS: u64 = 500;

    /// Full period of the edit caret blink cycle (milliseconds)
    pub const CARET_BLINK_MS: u64 = 1000;
}

/// Context menu constants
pub mod menu {
    /// Width of every menu item rectangle
    pub const ITEM_WIDTH: f32 = 150.0;

    /// Height of every menu item rectangle
    pub const ITEM_HEIGHT: f32 = 25.0;
}
