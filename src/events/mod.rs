//! Event types and observers.
//!
//! Submodules:
//! - [`resize`] – window geometry changes applied to the render surface
//! - [`switchdebug`] – toggle the debug overlay on/off
pub mod resize;
pub mod switchdebug;
