//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution.
//!
//! Overview
//! - `debugmode` – presence toggles the debug overlay
//! - `decorconfig` – INI-backed window and decoration settings
//! - `decoritems` – fixed-size collection of decorative item entities
//! - `decorlayout` – models, camera, glyphs and palette of the decoration
//! - `rendertarget` – render texture sized to the window
//! - `scenecamera` – perspective camera of the scene variant
//! - `stage` – the render surface: variant, size, aspect and resize revision
//! - `worldtime` – elapsed time and delta
pub mod debugmode;
pub mod decorconfig;
pub mod decoritems;
pub mod decorlayout;
pub mod rendertarget;
pub mod scenecamera;
pub mod stage;
pub mod worldtime;
