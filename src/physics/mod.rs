use bevy::prelude::*;

pub mod ball;
pub mod swarm;
pub mod systems;

pub use ball::Ball;
pub use swarm::{BallAssets, SpawnCounter, SwarmParams};
pub use systems::{PointerMode, PointerState};

use swarm::{drag_grabbed, integrate, spawn_from_pointer, step_springs, sync_transforms};
use systems::{clear_on_key, update_pointer_mode};

/// Plug this into your App with `.add_plugins(PhysicsPlugin)`.
/// Runs headless; pair it with `ViewPlugin` for a window.
pub struct PhysicsPlugin;

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SwarmParams>()
            .init_resource::<PointerState>()
            .init_resource::<SpawnCounter>()
            // Input is sampled once per render frame
            .add_systems(Update, (update_pointer_mode, clear_on_key))
            // One tick: spawn, springs, drag, move, then hand positions to the renderer.
            // Rate is set in main via Time::<Fixed>.
            .add_systems(
                FixedUpdate,
                (
                    spawn_from_pointer,
                    step_springs,
                    drag_grabbed,
                    integrate,
                    sync_transforms,
                )
                    .chain(),
            );
    }
}
