use bevy::prelude::*;

/// Simulation timing: one tick per nominal display refresh.
pub const PHYSICS_HZ: f64 = 60.0;

/// Pair distance at which the spring force vanishes.
pub const REST_LENGTH: f32 = 300.0;
/// Fraction of velocity kept each tick before acceleration is added.
pub const VELOCITY_RETENTION: f32 = 0.98;

/// Ball defaults
pub const BALL_RADIUS: f32 = 10.0;
pub const BALL_MASS: f32 = 0.02;
pub const BALL_COLOR: Color = Color::srgb(1.0, 17.0 / 255.0, 0.0); // #ff1100

/// Surface fill (#03002E)
pub const BACKGROUND_COLOR: Color = Color::srgb(3.0 / 255.0, 0.0, 46.0 / 255.0);

/// Spawning stops here; the spring step is O(n^2).
pub const MAX_BALLS: usize = 1500;

/// Extra pick radius when grabbing a ball with the mouse.
pub const GRAB_SLOP: f32 = 4.0;

pub const CURSOR_GIZMO_RADIUS: f32 = 14.0;
