//! Serializable layout document value types
//!
//! The document schema is fixed by the consuming level-design tool; field
//! names and the constant attribute set of a blocker record are not
//! negotiable. Records are immutable once constructed.

use serde::Serialize;

use crate::io::configuration::{
    BLOCKER_DIRECTION, BLOCKER_IDENTIFIER, BLOCKER_INFLUENCE_RANGE, BLOCKER_SIZE, BLOCKER_TEMPLATE,
    LAYOUT_FILE_VERSION, LAYOUT_VERSION,
};

/// Display colour of a placement record as ARGB bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Color {
    /// Alpha channel
    #[serde(rename = "A")]
    pub a: u8,
    /// Red channel
    #[serde(rename = "R")]
    pub r: u8,
    /// Green channel
    #[serde(rename = "G")]
    pub g: u8,
    /// Blue channel
    #[serde(rename = "B")]
    pub b: u8,
}

impl Color {
    /// Build a colour from an `[a, r, g, b]` byte quadruple
    pub const fn from_argb(argb: [u8; 4]) -> Self {
        let [a, r, g, b] = argb;
        Self { a, r, g, b }
    }
}

/// One blocker tile in the layout document
///
/// Every attribute except position and colour is fixed: a borderless,
/// non-road, unpaved 1x1 tile with zero radius and blocked area and the
/// blocker influence range.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlacementRecord {
    identifier: &'static str,
    label: &'static str,
    position: String,
    size: &'static str,
    icon: Option<()>,
    template: &'static str,
    color: Color,
    borderless: bool,
    road: bool,
    radius: f64,
    influence_range: i32,
    paved_street: bool,
    blocked_area_length: u32,
    blocked_area_width: u32,
    direction: &'static str,
}

impl PlacementRecord {
    /// Create a blocker record at grid position `(x, y)` with the given colour
    pub fn blocker(x: usize, y: usize, color: Color) -> Self {
        Self {
            identifier: BLOCKER_IDENTIFIER,
            label: "",
            position: format!("{x},{y}"),
            size: BLOCKER_SIZE,
            icon: None,
            template: BLOCKER_TEMPLATE,
            color,
            borderless: true,
            road: false,
            radius: 0.0,
            influence_range: BLOCKER_INFLUENCE_RANGE,
            paved_street: false,
            blocked_area_length: 0,
            blocked_area_width: 0,
            direction: BLOCKER_DIRECTION,
        }
    }

    /// The record's `"x,y"` position string
    pub fn position(&self) -> &str {
        &self.position
    }

    /// The record's display colour
    pub const fn color(&self) -> Color {
        self.color
    }
}

/// The complete layout document with its fixed schema versions
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct LayoutDocument {
    file_version: u32,
    layout_version: &'static str,
    objects: Vec<PlacementRecord>,
}

impl LayoutDocument {
    /// Wrap an ordered record sequence in the versioned document envelope
    pub const fn new(objects: Vec<PlacementRecord>) -> Self {
        Self {
            file_version: LAYOUT_FILE_VERSION,
            layout_version: LAYOUT_VERSION,
            objects,
        }
    }

    /// The ordered placement records
    pub fn objects(&self) -> &[PlacementRecord] {
        &self.objects
    }
}
