//! Interactive view transform layered over the base time scale.
//!
//! Zooming and panning only change the transform; the model and the
//! base layout are never recomputed.

pub mod transform;

pub use transform::{Gesture, ZoomConfig, ZoomTransform};
