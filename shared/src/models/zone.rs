//! Field-map zone model and geometry
//!
//! Zones are user-drawn rectangles over the schematic field map, stored in a
//! normalized 0-100 percent-of-container coordinate plane so they survive
//! container resizes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::timestamp_id;

/// Fill colors, cycled by creation order
pub const ZONE_COLORS: [&str; 5] = [
    "rgba(239, 68, 68, 0.4)",  // red-500
    "rgba(59, 130, 246, 0.4)", // blue-500
    "rgba(245, 158, 11, 0.4)", // amber-500
    "rgba(16, 185, 129, 0.4)", // emerald-500
    "rgba(139, 92, 246, 0.4)", // violet-500
];

/// Border colors, paired with `ZONE_COLORS` by index
pub const ZONE_BORDER_COLORS: [&str; 5] = [
    "#b91c1c", // red-700
    "#2563eb", // blue-600
    "#d97706", // amber-600
    "#059669", // emerald-600
    "#7c3aed", // violet-600
];

/// Drags smaller than this on either axis are accidental clicks, not zones
pub const MIN_ZONE_EDGE_PERCENT: f64 = 1.0;

/// Palette slot for the next zone, given the current collection size.
///
/// Color is a function of the count at creation time, not of identity:
/// deleting zones does not recolor the survivors, and an emptied collection
/// restarts the cycle at slot 0.
pub fn palette_index(existing_zone_count: usize) -> usize {
    existing_zone_count % ZONE_COLORS.len()
}

/// A point in normalized 0-100 coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Map a raw pointer offset within a container to normalized coordinates.
    ///
    /// The origin is clamped into the plane; degenerate container sizes
    /// collapse to the origin.
    pub fn from_pixels(offset_x: f64, offset_y: f64, container_width: f64, container_height: f64) -> Self {
        if container_width <= 0.0 || container_height <= 0.0 {
            return Self { x: 0.0, y: 0.0 };
        }
        Self {
            x: (offset_x / container_width * 100.0).clamp(0.0, 100.0),
            y: (offset_y / container_height * 100.0).clamp(0.0, 100.0),
        }
    }
}

/// An axis-aligned rectangle in normalized 0-100 coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Rectangle spanned by a drag anchor and the current pointer position
    pub fn from_corners(anchor: Point, current: Point) -> Self {
        Self {
            x: anchor.x.min(current.x),
            y: anchor.y.min(current.y),
            width: (anchor.x - current.x).abs(),
            height: (anchor.y - current.y).abs(),
        }
    }

    pub fn meets_minimum_size(&self) -> bool {
        self.width >= MIN_ZONE_EDGE_PERCENT && self.height >= MIN_ZONE_EDGE_PERCENT
    }

    /// Real-world area covered by this rectangle on a field of the given size
    pub fn area_hectares(&self, field_size_hectares: Decimal) -> Decimal {
        let fraction = (self.width / 100.0) * (self.height / 100.0);
        Decimal::from_f64_retain(fraction).unwrap_or_default() * field_size_hectares
    }
}

/// A named sub-region of the field map
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    pub id: String,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: String,
    pub border_color: String,
}

impl Zone {
    /// Build a zone from a committed candidate rectangle.
    ///
    /// `existing_zone_count` is the collection size at creation time and
    /// determines the palette slot.
    pub fn from_rect(name: &str, rect: Rect, existing_zone_count: usize) -> Self {
        let slot = palette_index(existing_zone_count);
        Self {
            id: timestamp_id(),
            name: name.trim().to_string(),
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            color: ZONE_COLORS[slot].to_string(),
            border_color: ZONE_BORDER_COLORS[slot].to_string(),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }

    pub fn area_hectares(&self, field_size_hectares: Decimal) -> Decimal {
        self.rect().area_hectares(field_size_hectares)
    }
}
