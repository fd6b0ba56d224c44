//! ECS components for decorative items.
//!
//! Submodules overview:
//! - [`anchor`] – fixed base position of an item
//! - [`floatitem`] – ordinal and resting height of a floating scene item
//! - [`foodicon`] – flat icon glyph and its yoyo drift parameters
//! - [`foodmodel`] – 3D food model assembled from primitive parts
//! - [`idletransform`] – rotation and offset derived every frame
//! - [`tint`] – palette color of an icon

pub mod anchor;
pub mod floatitem;
pub mod foodicon;
pub mod foodmodel;
pub mod idletransform;
pub mod tint;
