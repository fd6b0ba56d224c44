//! Decoration systems.
//!
//! Submodules overview
//! - [`drift`] – yoyo drift of the icon field
//! - [`idle`] – spin and bob of the scene items
//! - [`input`] – debug overlay toggle key
//! - [`render`] – draw the decoration and the debug overlay using Raylib
//! - [`setup`] – spawn the fixed collection of decorative items
//! - [`time`] – update elapsed time and delta

pub mod drift;
pub mod idle;
pub mod input;
pub mod render;
pub mod setup;
pub mod time;
