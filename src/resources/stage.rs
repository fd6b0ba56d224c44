//! Render surface resource.
//!
//! The [`Stage`] describes the surface the decoration is drawn onto: which
//! variant it shows and its current size in pixels. Its presence is what
//! initialization checks for; without a stage no item is spawned.
//!
//! Resizes go through
//! [`SurfaceResizedEvent`](crate::events::resize::SurfaceResizedEvent) so that
//! each window geometry change updates the aspect exactly once.

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Width at or below which icons use the compact size.
pub const COMPACT_WIDTH: i32 = 768;

/// Which decoration is shown on the stage.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageVariant {
    /// 3D food models spinning and bobbing in front of a perspective camera.
    #[default]
    Scene,
    /// A field of flat food icons drifting back and forth.
    Icons,
}

impl FromStr for StageVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "scene" | "3d" => Ok(StageVariant::Scene),
            "icons" | "dom" => Ok(StageVariant::Icons),
            other => Err(format!("Unknown stage variant '{}'", other)),
        }
    }
}

impl fmt::Display for StageVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StageVariant::Scene => write!(f, "scene"),
            StageVariant::Icons => write!(f, "icons"),
        }
    }
}

/// The render surface.
#[derive(Resource, Clone, Copy, Debug)]
pub struct Stage {
    pub variant: StageVariant,
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
    /// Incremented on every resize so renderers can rebuild size-dependent state.
    pub revision: u32,
}

impl Stage {
    pub fn new(variant: StageVariant, w: i32, h: i32) -> Self {
        Self {
            variant,
            w,
            h,
            revision: 0,
        }
    }

    /// Width over height. A degenerate (minimized) surface reports 1.0.
    pub fn aspect(&self) -> f32 {
        if self.w <= 0 || self.h <= 0 {
            return 1.0;
        }
        self.w as f32 / self.h as f32
    }

    /// Apply a new surface size and bump the revision.
    pub fn resize(&mut self, w: i32, h: i32) {
        self.w = w;
        self.h = h;
        self.revision = self.revision.wrapping_add(1);
    }

    /// Whether the surface is narrow enough for compact icons.
    pub fn is_compact(&self) -> bool {
        self.w <= COMPACT_WIDTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_aspect() {
        let stage = Stage::new(StageVariant::Scene, 1280, 720);
        assert!((stage.aspect() - 16.0 / 9.0).abs() < EPSILON);
    }

    #[test]
    fn test_degenerate_aspect_is_one() {
        assert_eq!(Stage::new(StageVariant::Scene, 1280, 0).aspect(), 1.0);
        assert_eq!(Stage::new(StageVariant::Scene, 0, 0).aspect(), 1.0);
    }

    #[test]
    fn test_resize_bumps_revision() {
        let mut stage = Stage::new(StageVariant::Icons, 800, 600);
        stage.resize(600, 800);
        assert_eq!((stage.w, stage.h, stage.revision), (600, 800, 1));
        stage.resize(600, 800);
        assert_eq!(stage.revision, 2);
        assert!(stage.is_compact());
    }

    #[test]
    fn test_variant_parse() {
        assert_eq!("Scene".parse::<StageVariant>(), Ok(StageVariant::Scene));
        assert_eq!(" icons ".parse::<StageVariant>(), Ok(StageVariant::Icons));
        assert!("charts".parse::<StageVariant>().is_err());
        assert_eq!(StageVariant::Icons.to_string(), "icons");
    }
}
