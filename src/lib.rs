//! Red balls on a dark canvas, held together by springs.
//!
//! Hold the left mouse button over empty space to paint balls; grab a ball to
//! drag and fling it. Every pair of balls pulls toward a fixed rest distance.

pub mod config;
pub mod physics;
pub mod view;

pub use physics::PhysicsPlugin;
pub use view::{ViewPlugin, WorldBounds};
