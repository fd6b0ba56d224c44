//! FoodFlex decoration library.
//!
//! This module exposes the decoration's ECS components, resources, systems,
//! and events for use in integration tests and by the executable.

pub mod components;
pub mod decor;
pub mod events;
pub mod resources;
pub mod systems;
pub mod trace;
