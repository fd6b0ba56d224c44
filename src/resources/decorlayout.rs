//! Decoration layout resource.
//!
//! Describes what the decoration contains: the camera and food models of the
//! scene variant, and the glyphs and palette of the icon field. The built-in
//! [`Default`] reproduces the landing page; a JSON file can override any part.
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "camera": { "position": [0, 0, 15], "target": [0, 0, 0], "fovy": 75 },
//!   "models": [
//!     { "kind": "pizza", "anchor": [-8, 0, 0] },
//!     { "kind": "burger", "anchor": [8, 0, 0] },
//!     { "kind": "orange", "anchor": [0, -6, 0] }
//!   ],
//!   "toppings": 10,
//!   "icons": {
//!     "glyphs": ["hamburger", "pizza-slice", "egg"],
//!     "palette": ["#FF6B6B", "#4ECDC4"],
//!     "opacity": 0.2
//!   }
//! }
//! ```
//!
//! Missing fields fall back to the defaults.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Color;
use serde::{Deserialize, Serialize};

use crate::components::foodicon::IconGlyph;
use crate::components::foodmodel::{DEFAULT_TOPPINGS, FoodKind};

/// Parse `#RRGGBB` or `#RRGGBBAA` (the `#` is optional).
pub fn parse_hex_color(s: &str) -> Result<Color, String> {
    let hex = s.trim().trim_start_matches('#');
    if !(hex.len() == 6 || hex.len() == 8) || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("Invalid hex color '{}'", s));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16).map_err(|e| format!("Invalid hex color '{}': {}", s, e))
    };
    let alpha = if hex.len() == 8 { channel(6)? } else { 255 };
    Ok(Color::new(channel(0)?, channel(2)?, channel(4)?, alpha))
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CameraSpec {
    pub position: [f32; 3],
    pub target: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
}

impl Default for CameraSpec {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 15.0],
            target: [0.0, 0.0, 0.0],
            fovy: 75.0,
        }
    }
}

/// One food model of the scene variant.
///
/// The anchor's y coordinate is also the height the model bobs around.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ModelSpec {
    pub kind: FoodKind,
    pub anchor: [f32; 3],
}

impl ModelSpec {
    pub fn new(kind: FoodKind, anchor: [f32; 3]) -> Self {
        Self { kind, anchor }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct IconSpec {
    pub glyphs: Vec<IconGlyph>,
    pub palette: Vec<String>,
    /// Icon opacity in `0.0..=1.0`.
    pub opacity: f32,
}

impl Default for IconSpec {
    fn default() -> Self {
        Self {
            glyphs: IconGlyph::ALL.to_vec(),
            palette: ["#FF6B6B", "#4ECDC4", "#FFD166", "#F9F871", "#FC8621"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            opacity: 0.2,
        }
    }
}

impl IconSpec {
    /// Parse every palette entry.
    pub fn palette_colors(&self) -> Result<Vec<Color>, String> {
        self.palette.iter().map(|s| parse_hex_color(s)).collect()
    }
}

#[derive(Resource, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DecorLayout {
    pub camera: CameraSpec,
    pub models: Vec<ModelSpec>,
    /// Pepperoni slices per pizza.
    pub toppings: usize,
    pub icons: IconSpec,
}

impl Default for DecorLayout {
    fn default() -> Self {
        Self {
            camera: CameraSpec::default(),
            models: vec![
                ModelSpec::new(FoodKind::Pizza, [-8.0, 0.0, 0.0]),
                ModelSpec::new(FoodKind::Burger, [8.0, 0.0, 0.0]),
                ModelSpec::new(FoodKind::Orange, [0.0, -6.0, 0.0]),
            ],
            toppings: DEFAULT_TOPPINGS,
            icons: IconSpec::default(),
        }
    }
}

impl DecorLayout {
    /// Load and validate a layout from a JSON file.
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let file_content = std::fs::read_to_string(path)?;
        Self::from_json(&file_content)
    }

    /// Parse and validate a layout from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let layout: DecorLayout = serde_json::from_str(json)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Check the parts serde cannot: non-empty icon lists and parseable colors.
    pub fn validate(&self) -> Result<(), String> {
        if self.icons.glyphs.is_empty() {
            return Err("Layout icons.glyphs must not be empty".to_string());
        }
        if self.icons.palette.is_empty() {
            return Err("Layout icons.palette must not be empty".to_string());
        }
        self.icons.palette_colors()?;
        if !(0.0..=1.0).contains(&self.icons.opacity) {
            return Err(format!(
                "Layout icons.opacity {} is outside 0.0..=1.0",
                self.icons.opacity
            ));
        }
        Ok(())
    }
}
