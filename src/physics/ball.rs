use bevy::prelude::*;

use crate::config::{BALL_MASS, BALL_RADIUS};

/// A single ball.
/// Stored as a Component on the rendered entity (which also has a Transform).
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Ball {
    /// Spawn order; newer balls have larger indices.
    pub index: u64,

    pub position: Vec2,
    /// World units per tick.
    pub velocity: Vec2,

    pub radius: f32,
    pub mass: f32,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            index: 0,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            radius: BALL_RADIUS,
            mass: BALL_MASS,
        }
    }
}

impl Ball {
    /// New ball at rest at `position`.
    pub fn new(position: Vec2, index: u64) -> Self {
        Self {
            index,
            position,
            ..Default::default()
        }
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    /// True if `point` lies within the ball grown by `slop`.
    pub fn contains(&self, point: Vec2, slop: f32) -> bool {
        let reach = self.radius + slop;
        self.position.distance_squared(point) <= reach * reach
    }

    /// Move by one tick of velocity. Returns the displacement.
    pub fn advance(&mut self) -> Vec2 {
        self.position += self.velocity;
        self.velocity
    }
}
