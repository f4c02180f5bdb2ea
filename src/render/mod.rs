pub mod color;
pub mod svg;

/// Drawn radius of a node circle.
pub const NODE_RADIUS: f64 = 5.0;
