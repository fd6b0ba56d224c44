//! Render texture the decoration is drawn into.
//!
//! The texture always matches the window size. When the
//! [`Stage`](crate::resources::stage::Stage) is resized the render system
//! calls [`RenderTarget::recreate`] so the 3D projection picks up the new
//! aspect ratio.

use raylib::ffi::{self, TextureFilter};
use raylib::prelude::*;

/// Render texture sized to the surface.
///
/// # Note
/// This is a NonSend resource because `RenderTexture2D` contains GPU resources
/// that must be accessed from the main thread.
pub struct RenderTarget {
    /// The underlying raylib render texture.
    pub texture: RenderTexture2D,
    /// Texture width in pixels.
    pub width: u32,
    /// Texture height in pixels.
    pub height: u32,
    /// Last [`Stage`](crate::resources::stage::Stage) revision this texture was built for.
    pub revision: u32,
}

impl RenderTarget {
    /// Create a render texture of the given size with bilinear filtering.
    pub fn new(
        rl: &mut RaylibHandle,
        th: &RaylibThread,
        width: u32,
        height: u32,
    ) -> Result<Self, String> {
        let texture = Self::load(rl, th, width, height)?;
        Ok(Self {
            texture,
            width,
            height,
            revision: 0,
        })
    }

    fn load(
        rl: &mut RaylibHandle,
        th: &RaylibThread,
        width: u32,
        height: u32,
    ) -> Result<RenderTexture2D, String> {
        // Minimized windows report 0x0.
        let texture = rl
            .load_render_texture(th, width.max(1), height.max(1))
            .map_err(|e| format!("Failed to create render texture: {}", e))?;
        unsafe {
            ffi::SetTextureFilter(
                texture.texture,
                TextureFilter::TEXTURE_FILTER_BILINEAR as i32,
            );
        }
        Ok(texture)
    }

    /// Recreate the render texture at a new size for stage `revision`.
    pub fn recreate(
        &mut self,
        rl: &mut RaylibHandle,
        th: &RaylibThread,
        width: u32,
        height: u32,
        revision: u32,
    ) -> Result<(), String> {
        self.texture = Self::load(rl, th, width, height)?;
        self.width = width;
        self.height = height;
        self.revision = revision;
        Ok(())
    }

    /// Source rectangle for presenting this texture.
    ///
    /// Returns a rectangle with negative height to flip the Y axis,
    /// compensating for OpenGL's inverted texture coordinates.
    pub fn source_rect(&self) -> Rectangle {
        Rectangle {
            x: 0.0,
            y: 0.0,
            width: self.width as f32,
            height: -(self.height as f32), // Negative to flip Y
        }
    }
}
