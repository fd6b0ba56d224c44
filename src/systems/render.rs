//! Render system.
//!
//! Draws the decoration into the [`RenderTarget`] texture and presents it to
//! the window. The texture is rebuilt whenever the [`Stage`] revision moves,
//! which is how a resize reaches the 3D projection.
//!
//! The placement math ([`part_center`], [`icon_center`], [`icon_size`]) is
//! kept free of raylib draw handles so it can be tested headless.

use bevy_ecs::prelude::*;
use log::error;
use raylib::prelude::*;

use crate::components::anchor::Anchor;
use crate::components::foodicon::FoodIcon;
use crate::components::foodmodel::{FoodModel, ModelPart, Primitive, rgb};
use crate::components::idletransform::IdleTransform;
use crate::components::tint::Tint;
use crate::resources::debugmode::DebugMode;
use crate::resources::decoritems::DecorItems;
use crate::resources::decorlayout::DecorLayout;
use crate::resources::rendertarget::RenderTarget;
use crate::resources::scenecamera::SceneCamera;
use crate::resources::stage::{Stage, StageVariant};
use crate::resources::worldtime::WorldTime;

const BACKGROUND: Color = Color {
    r: 0x1e,
    g: 0x1b,
    b: 0x18,
    a: 255,
};
const ICON_SIZE: f32 = 32.0;
const COMPACT_ICON_SIZE: f32 = 24.0;
const WIRE_SHADE: f32 = 0.7;
/// White ambient light intensity.
const AMBIENT_INTENSITY: f32 = 0.5;
/// Scene point lights: position and `0xRRGGBB` color, unit intensity.
const POINT_LIGHTS: [(Vector3, u32); 2] = [
    (Vector3 { x: 10.0, y: 10.0, z: 10.0 }, 0xff5722),
    (Vector3 { x: -10.0, y: -10.0, z: 10.0 }, 0x2ed573),
];

/// World-space center of `part` for a model at `anchor` with transform `tr`.
///
/// The model origin sits at the anchor's x/z and at `tr.offset_y` (which
/// already includes the resting height); the part's local offset is rotated
/// around the model's Y axis.
pub fn part_center(part: &ModelPart, anchor: &Anchor, tr: &IdleTransform) -> Vector3 {
    let local = part.rotated_about_y(tr.rotation);
    Vector3 {
        x: anchor.pos.x + tr.offset_x + local.x,
        y: tr.offset_y + local.y,
        z: anchor.pos.z + local.z,
    }
}

/// Icon edge length in pixels for the stage's width.
pub fn icon_size(stage: &Stage) -> f32 {
    if stage.is_compact() {
        COMPACT_ICON_SIZE
    } else {
        ICON_SIZE
    }
}

/// Screen-space center of an icon anchored at a percentage of the stage.
pub fn icon_center(stage: &Stage, anchor: &Anchor, tr: &IdleTransform) -> Vector2 {
    Vector2 {
        x: anchor.pos.x / 100.0 * stage.w as f32 + tr.offset_x,
        y: anchor.pos.y / 100.0 * stage.h as f32 + tr.offset_y,
    }
}

/// Color of a part centered at `center`, lit by the scene lights.
///
/// The part is shaded as a single surface facing the camera at `eye`:
/// white ambient plus Lambert diffuse from each point light, no falloff.
pub fn lit_color(base: Color, center: Vector3, eye: Vector3) -> Color {
    let normal = (eye - center).normalized();
    let mut light = [AMBIENT_INTENSITY; 3];
    for (position, hex) in POINT_LIGHTS {
        let diffuse = normal.dot((position - center).normalized()).max(0.0);
        let color = rgb(hex);
        light[0] += color.r as f32 / 255.0 * diffuse;
        light[1] += color.g as f32 / 255.0 * diffuse;
        light[2] += color.b as f32 / 255.0 * diffuse;
    }
    let channel = |c: u8, l: f32| (c as f32 * l).round().clamp(0.0, 255.0) as u8;
    Color::new(
        channel(base.r, light[0]),
        channel(base.g, light[1]),
        channel(base.b, light[2]),
        base.a,
    )
}

fn shade(color: Color, factor: f32) -> Color {
    Color::new(
        (color.r as f32 * factor) as u8,
        (color.g as f32 * factor) as u8,
        (color.b as f32 * factor) as u8,
        color.a,
    )
}

fn draw_model<D: RaylibDraw3D>(
    d: &mut D,
    model: &FoodModel,
    anchor: &Anchor,
    tr: &IdleTransform,
    eye: Vector3,
) {
    for part in model.parts.iter() {
        let center = part_center(part, anchor, tr);
        let color = lit_color(part.color, center, eye);
        match part.primitive {
            Primitive::Cylinder {
                radius_top,
                radius_bottom,
                height,
                slices,
            } => {
                // raylib cylinders grow upwards from their base.
                let base = Vector3::new(center.x, center.y - height * 0.5, center.z);
                d.draw_cylinder(base, radius_top, radius_bottom, height, slices, color);
                d.draw_cylinder_wires(
                    base,
                    radius_top,
                    radius_bottom,
                    height,
                    slices,
                    shade(color, WIRE_SHADE),
                );
            }
            Primitive::Sphere {
                radius,
                rings,
                slices,
            } => {
                d.draw_sphere_ex(center, radius, rings, slices, color);
            }
        }
    }
}

fn draw_icon<D: RaylibDraw>(d: &mut D, icon: &FoodIcon, center: Vector2, size: f32, rotation: f32, color: Color) {
    d.draw_poly(center, icon.glyph.sides(), size * 0.5, rotation.to_degrees(), color);
    let font_size = (size * 0.4) as i32;
    d.draw_text(
        icon.glyph.label(),
        (center.x - font_size as f32 * 0.55) as i32,
        (center.y - font_size as f32 * 0.5) as i32,
        font_size,
        color,
    );
}

fn draw_debug_overlay<D: RaylibDraw>(
    d: &mut D,
    fps: u32,
    item_count: usize,
    time: &WorldTime,
    stage: Option<&Stage>,
) {
    let text = format!("DEBUG MODE (press F11 to toggle) | FPS: {}", fps);
    d.draw_text(&text, 10, 10, 10, Color::RAYWHITE);

    let text = format!(
        "Items: {} | Elapsed: {:.2}s | Frame: {}",
        item_count, time.elapsed, time.frame_count
    );
    d.draw_text(&text, 10, 30, 10, Color::RAYWHITE);

    let text = match stage {
        Some(stage) => format!(
            "Surface: {} {}x{} aspect {:.3} rev {}",
            stage.variant,
            stage.w,
            stage.h,
            stage.aspect(),
            stage.revision
        ),
        None => "Surface: none".to_string(),
    };
    d.draw_text(&text, 10, 50, 10, Color::RAYWHITE);
}

/// Draw one frame.
///
/// Without a stage or render target only the background (and the debug
/// overlay, if enabled) is drawn.
#[allow(clippy::too_many_arguments)]
pub fn render_system(
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    render_target: Option<NonSendMut<RenderTarget>>,
    stage: Option<Res<Stage>>,
    camera: Res<SceneCamera>,
    layout: Res<DecorLayout>,
    world_time: Res<WorldTime>,
    items: Res<DecorItems>,
    debug: Option<Res<DebugMode>>,
    models: Query<(&FoodModel, &Anchor, &IdleTransform)>,
    icons: Query<(&FoodIcon, &Tint, &Anchor, &IdleTransform)>,
) {
    let fps = rl.get_fps();

    let (Some(stage), Some(mut target)) = (stage, render_target) else {
        let mut d = rl.begin_drawing(&th);
        d.clear_background(BACKGROUND);
        if debug.is_some() {
            draw_debug_overlay(&mut d, fps, items.len(), &world_time, None);
        }
        return;
    };

    if target.revision != stage.revision {
        let (w, h) = (stage.w.max(1) as u32, stage.h.max(1) as u32);
        if let Err(e) = target.recreate(&mut rl, &th, w, h, stage.revision) {
            error!("{}", e);
            // Keep drawing into the old texture until the next resize.
            target.revision = stage.revision;
        }
    }

    {
        let mut d = rl.begin_texture_mode(&th, &mut target.texture);
        d.clear_background(BACKGROUND);
        match stage.variant {
            StageVariant::Scene => {
                let mut d3 = d.begin_mode3D(camera.to_camera3d());
                for (model, anchor, tr) in models.iter() {
                    draw_model(&mut d3, model, anchor, tr, camera.position);
                }
            }
            StageVariant::Icons => {
                let size = icon_size(&stage);
                let opacity = layout.icons.opacity;
                for (icon, tint, anchor, tr) in icons.iter() {
                    let center = icon_center(&stage, anchor, tr);
                    draw_icon(&mut d, icon, center, size, tr.rotation, tint.faded(opacity));
                }
            }
        }
    }

    let mut d = rl.begin_drawing(&th);
    d.clear_background(Color::BLACK);
    let dest = Rectangle {
        x: 0.0,
        y: 0.0,
        width: stage.w as f32,
        height: stage.h as f32,
    };
    d.draw_texture_pro(
        &target.texture,
        target.source_rect(),
        dest,
        Vector2 { x: 0.0, y: 0.0 },
        0.0,
        Color::WHITE,
    );
    if debug.is_some() {
        draw_debug_overlay(&mut d, fps, items.len(), &world_time, Some(&*stage));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::foodmodel::FoodKind;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_part_center_follows_anchor_and_bob() {
        let burger = FoodModel::burger();
        let anchor = Anchor::new(8.0, 0.0, 0.0);
        let tr = IdleTransform {
            rotation: 1.0,
            offset_x: 0.0,
            offset_y: 0.3,
        };
        let patty = part_center(&burger.parts[1], &anchor, &tr);
        assert!(approx_eq(patty.x, 8.0));
        assert!(approx_eq(patty.y, 0.8));
        assert!(approx_eq(patty.z, 0.0));
    }

    #[test]
    fn test_part_center_rotates_off_axis_parts() {
        let mut model = FoodModel::burger();
        assert_eq!(model.kind, FoodKind::Burger);
        model.parts[0].local = Vector3::new(2.0, 0.0, 0.0);
        let anchor = Anchor::new(-8.0, 0.0, 0.0);
        let tr = IdleTransform {
            rotation: FRAC_PI_2,
            offset_x: 0.0,
            offset_y: -6.0,
        };
        let p = part_center(&model.parts[0], &anchor, &tr);
        assert!(approx_eq(p.x, -8.0));
        assert!(approx_eq(p.y, -6.0));
        assert!(approx_eq(p.z, -2.0));
    }

    #[test]
    fn test_icon_size_shrinks_on_narrow_surfaces() {
        assert_eq!(icon_size(&Stage::new(StageVariant::Icons, 1280, 720)), 32.0);
        assert_eq!(icon_size(&Stage::new(StageVariant::Icons, 768, 1024)), 24.0);
    }

    #[test]
    fn test_icon_center_scales_percent_and_adds_drift() {
        let stage = Stage::new(StageVariant::Icons, 1000, 500);
        let anchor = Anchor::new(25.0, 50.0, 0.0);
        let tr = IdleTransform {
            rotation: 0.0,
            offset_x: -10.0,
            offset_y: 20.0,
        };
        let c = icon_center(&stage, &anchor, &tr);
        assert!(approx_eq(c.x, 240.0));
        assert!(approx_eq(c.y, 270.0));
    }

    #[test]
    fn test_lit_color_is_ambient_only_when_lights_are_behind() {
        let c = lit_color(
            Color::new(200, 100, 50, 255),
            Vector3::zero(),
            Vector3::new(0.0, 0.0, -15.0),
        );
        assert_eq!((c.r, c.g, c.b, c.a), (100, 50, 25, 255));
    }

    #[test]
    fn test_lit_color_warms_parts_facing_the_lights() {
        let base = Color::new(100, 100, 100, 128);
        let c = lit_color(base, Vector3::zero(), Vector3::new(0.0, 0.0, 15.0));
        assert!(c.r > 100 && c.g > 100);
        assert!(c.b < c.r);
        assert!(c.b > 50);
        assert_eq!(c.a, 128);
    }

    #[test]
    fn test_lit_color_saturates() {
        let c = lit_color(Color::WHITE, Vector3::zero(), Vector3::new(0.0, 0.0, 15.0));
        assert_eq!((c.r, c.g), (255, 255));
    }

    #[test]
    fn test_shade_keeps_alpha() {
        let c = shade(Color::new(200, 100, 50, 77), 0.5);
        assert_eq!((c.r, c.g, c.b, c.a), (100, 50, 25, 77));
    }
}
