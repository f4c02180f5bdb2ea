use crate::layout::{HEIGHT, PLOT_OFFSET, WIDTH};
use crate::render::NODE_RADIUS;
use crate::tree::{Hierarchy, NodeId};

/// Tooltip text size and the width-per-character estimate used in place of
/// real font metrics.
pub const TOOLTIP_FONT_SIZE: f64 = 12.0;
const CHAR_WIDTH_FACTOR: f64 = 0.6;

/// Axis-aligned bounds, in plot coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn max_x(&self) -> f64 {
        self.min_x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.min_y + self.height
    }

    /// The drawing surface expressed in plot coordinates (the plot group is
    /// translated by `PLOT_OFFSET` from the surface origin).
    pub fn surface() -> Bounds {
        Bounds {
            min_x: -PLOT_OFFSET.0,
            min_y: -PLOT_OFFSET.1,
            width: WIDTH,
            height: HEIGHT,
        }
    }
}

/// Horizontal text anchoring, relative to the tooltip's x position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// The single tooltip. Anchored at the hovered node's drawn position, with
/// offsets adjusted so the text never clips the surface's left, right, or
/// top edge. The bottom edge is not checked.
#[derive(Debug, Clone)]
pub struct Tooltip {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
    pub anchor: TextAnchor,
}

impl Tooltip {
    pub fn for_node(hierarchy: &Hierarchy, id: NodeId, bounds: Bounds) -> Tooltip {
        let node = &hierarchy.nodes[id];
        let text = format!("{} ({} cases)", node.key, si_format(node.value as f64));

        let half = NODE_RADIUS;
        let mut tooltip = Tooltip {
            text,
            x: node.x,
            y: node.y,
            dx: 0.0,
            dy: -half - 4.0,
            anchor: TextAnchor::Middle,
        };

        // Estimated extent of the middle-anchored text.
        let width = tooltip.text.chars().count() as f64 * TOOLTIP_FONT_SIZE * CHAR_WIDTH_FACTOR;
        let height = TOOLTIP_FONT_SIZE;
        let box_left = tooltip.x - width / 2.0;
        let box_right = tooltip.x + width / 2.0;
        let box_top = tooltip.y + tooltip.dy - height;

        if box_left < bounds.min_x {
            tooltip.anchor = TextAnchor::Start;
            tooltip.dx = -half;
        } else if box_right > bounds.max_x() {
            tooltip.anchor = TextAnchor::End;
            tooltip.dx = half;
        }

        if box_top < bounds.min_y {
            // Flip below the node.
            tooltip.dy = half + height;
        }

        tooltip
    }
}

/// Abbreviate a number to two significant digits with an SI suffix, trailing
/// zeros trimmed: 12345 → "12k", 1234 → "1.2k", 999 → "1k", 950 → "950".
pub fn si_format(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    // Round to two significant digits; the rounding can bump the exponent
    // (999 → 1000), so recompute it after.
    let exponent = value.abs().log10().floor() as i32;
    let scale = 10f64.powi(exponent - 1);
    let rounded = (value / scale).round() * scale;
    let exponent = rounded.abs().log10().floor() as i32;

    let tier = exponent.div_euclid(3).clamp(0, 4);
    let mantissa = rounded / 10f64.powi(tier * 3);

    let suffix = ["", "k", "M", "G", "T"][tier as usize];
    if (mantissa - mantissa.round()).abs() < 1e-9 {
        format!("{}{}", mantissa.round() as i64, suffix)
    } else {
        format!("{:.1}{}", mantissa, suffix)
    }
}
