use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use tracing::info;

use crate::config::{BALL_COLOR, BALL_RADIUS, CURSOR_GIZMO_RADIUS};
use crate::physics::ball::Ball;
use crate::physics::swarm::{BallAssets, SpawnCounter, clear_swarm};
use crate::physics::systems::{PointerMode, PointerState, update_pointer_mode};

/// Resource: window half-extents (origin at center in Bevy 2D).
#[derive(Resource, Default, Copy, Clone, Debug)]
pub struct WorldBounds {
    pub half: Vec2,
}

/// Camera, ball visuals, cursor tracking and window reactions.
pub struct ViewPlugin;

impl Plugin for ViewPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WorldBounds>()
            .add_systems(Startup, (spawn_camera, load_ball_assets))
            .add_systems(
                Update,
                (
                    reset_on_resize,
                    update_cursor_world.before(update_pointer_mode),
                    draw_pointer_gizmo,
                    exit_on_esc_or_q_if_native,
                ),
            );
    }
}

pub fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// One circle mesh and one material shared by every ball.
pub fn load_ball_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    commands.insert_resource(BallAssets {
        mesh: meshes.add(Circle::new(BALL_RADIUS)),
        material: materials.add(BALL_COLOR),
    });
}

/// Keep `WorldBounds` current; a size change restarts the simulation.
/// Zero-sized reports (minimized window) are ignored.
pub fn reset_on_resize(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut bounds: ResMut<WorldBounds>,
    mut commands: Commands,
    q_balls: Query<Entity, With<Ball>>,
    mut pointer: ResMut<PointerState>,
    mut counter: ResMut<SpawnCounter>,
) {
    let Ok(w) = windows.single() else {
        return;
    };
    let half = 0.5 * w.size();
    if half.cmple(Vec2::ZERO).any() || half == bounds.half {
        return;
    }
    let first = bounds.half == Vec2::ZERO;
    bounds.half = half;
    if first {
        return;
    }
    let n = clear_swarm(&mut commands, &q_balls, &mut pointer, &mut counter);
    info!(width = w.width(), height = w.height(), balls = n, "surface resized; swarm reset");
}

/// Update the pointer's world position each frame (2D camera).
/// Outside the window the last known position is kept.
pub fn update_cursor_world(
    windows: Query<&Window, With<PrimaryWindow>>,
    q_cam: Query<(&Camera, &GlobalTransform), With<Camera2d>>,
    mut pointer: ResMut<PointerState>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(screen_pos) = window.cursor_position() else {
        return;
    };
    if let Ok((camera, cam_xform)) = q_cam.single() {
        if let Ok(world_pos) = camera.viewport_to_world_2d(cam_xform, screen_pos) {
            pointer.position = world_pos;
        }
    }
}

pub fn draw_pointer_gizmo(mut gizmos: Gizmos, pointer: Res<PointerState>) {
    let color = match pointer.mode {
        PointerMode::Idle => Color::srgba(1.0, 1.0, 1.0, 0.15),
        PointerMode::Painting => Color::srgba(1.0, 1.0, 1.0, 0.8),
        PointerMode::Dragging(_) => Color::srgb(0.3, 1.0, 0.4),
    };
    gizmos.circle_2d(pointer.position, CURSOR_GIZMO_RADIUS, color);
}

/// Native-only quit: press Esc or Q to exit the app.
/// (No-op on wasm32.)
pub fn exit_on_esc_or_q_if_native(
    keys: Res<ButtonInput<KeyCode>>,
    mut exit: MessageWriter<AppExit>,
) {
    if cfg!(not(target_arch = "wasm32")) && keys.any_just_pressed([KeyCode::Escape, KeyCode::KeyQ])
    {
        exit.write(AppExit::Success);
    }
}
