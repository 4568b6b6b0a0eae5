use bevy::prelude::*;
use tracing::{debug, info};

use crate::config::GRAB_SLOP;
use crate::physics::ball::Ball;
use crate::physics::swarm::{SpawnCounter, clear_swarm};

/// What the left mouse button is currently doing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PointerMode {
    #[default]
    Idle,
    /// Button held over empty space: a ball is spawned every tick.
    Painting,
    /// Button held on a ball: it follows the pointer.
    Dragging(Entity),
}

/// Pointer position (world space) and drag state, fed to the fixed-tick step.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct PointerState {
    pub position: Vec2,
    pub mode: PointerMode,
}

/// Closest ball whose pick circle (radius + `slop`) contains `point`.
/// Equal distances go to the newest ball.
pub fn pick_ball<'a>(
    balls: impl IntoIterator<Item = (Entity, &'a Ball)>,
    point: Vec2,
    slop: f32,
) -> Option<Entity> {
    let mut best: Option<(Entity, f32, u64)> = None;
    for (e, b) in balls {
        if !b.contains(point, slop) {
            continue;
        }
        let d2 = b.position.distance_squared(point);
        let better = match best {
            None => true,
            Some((_, best_d2, best_index)) => d2 < best_d2 || (d2 == best_d2 && b.index > best_index),
        };
        if better {
            best = Some((e, d2, b.index));
        }
    }
    best.map(|(e, _, _)| e)
}

/// Left press grabs the ball under the pointer, or starts painting over empty space.
/// Any frame with the button up returns to idle.
pub fn update_pointer_mode(
    buttons: Res<ButtonInput<MouseButton>>,
    mut pointer: ResMut<PointerState>,
    q_balls: Query<(Entity, &Ball)>,
) {
    if buttons.just_pressed(MouseButton::Left) {
        pointer.mode = match pick_ball(&q_balls, pointer.position, GRAB_SLOP) {
            Some(e) => {
                debug!(?e, "grabbed ball");
                PointerMode::Dragging(e)
            }
            None => PointerMode::Painting,
        };
    }
    if !buttons.pressed(MouseButton::Left) && pointer.mode != PointerMode::Idle {
        if let PointerMode::Dragging(e) = pointer.mode {
            debug!(?e, "released ball");
        }
        pointer.mode = PointerMode::Idle;
    }
}

/// C or Backspace wipes the canvas.
pub fn clear_on_key(
    keys: Res<ButtonInput<KeyCode>>,
    mut commands: Commands,
    q_balls: Query<Entity, With<Ball>>,
    mut pointer: ResMut<PointerState>,
    mut counter: ResMut<SpawnCounter>,
) {
    if !keys.any_just_pressed([KeyCode::KeyC, KeyCode::Backspace]) {
        return;
    }
    let n = clear_swarm(&mut commands, &q_balls, &mut pointer, &mut counter);
    info!(balls = n, "cleared swarm");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_prefers_closest_then_newest() {
        let mut world = World::new();
        let old = world.spawn_empty().id();
        let new = world.spawn_empty().id();
        let far = world.spawn_empty().id();

        let a = Ball::new(Vec2::new(5.0, 0.0), 0);
        let b = Ball::new(Vec2::new(5.0, 0.0), 1);
        let c = Ball::new(Vec2::new(2.0, 0.0), 2);

        // tie on distance goes to the higher index
        assert_eq!(pick_ball([(old, &a), (new, &b)], Vec2::ZERO, 0.0), Some(new));
        assert_eq!(pick_ball([(new, &b), (old, &a)], Vec2::ZERO, 0.0), Some(new));
        // closer wins regardless of index
        assert_eq!(pick_ball([(far, &c), (new, &b)], Vec2::new(1.0, 0.0), 0.0), Some(far));
    }

    #[test]
    fn pick_misses_outside_reach() {
        let mut world = World::new();
        let e = world.spawn_empty().id();
        let b = Ball::new(Vec2::ZERO, 0).with_radius(10.0);
        assert_eq!(pick_ball([(e, &b)], Vec2::new(13.0, 0.0), 2.0), None);
        assert_eq!(pick_ball([(e, &b)], Vec2::new(13.0, 0.0), GRAB_SLOP), Some(e));
        assert_eq!(pick_ball(std::iter::empty::<(Entity, &Ball)>(), Vec2::ZERO, GRAB_SLOP), None);
    }
}
