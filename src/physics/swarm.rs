use bevy::prelude::*;
use tracing::info;

use super::ball::Ball;
use super::systems::{PointerMode, PointerState};
use crate::config::*;

/// Tunables for the spring step. Defaults come from `config`.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct SwarmParams {
    pub rest_length: f32,
    pub velocity_retention: f32,
    pub ball_radius: f32,
    pub ball_mass: f32,
    pub max_balls: usize,
}

impl Default for SwarmParams {
    fn default() -> Self {
        Self {
            rest_length: REST_LENGTH,
            velocity_retention: VELOCITY_RETENTION,
            ball_radius: BALL_RADIUS,
            ball_mass: BALL_MASS,
            max_balls: MAX_BALLS,
        }
    }
}

/// Hands out spawn indices and remembers whether the population cap was reported.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct SpawnCounter {
    pub next: u64,
    pub cap_logged: bool,
}

impl SpawnCounter {
    pub fn take(&mut self) -> u64 {
        let i = self.next;
        self.next += 1;
        i
    }
}

/// Shared render handles for every ball. Absent in headless runs.
#[derive(Resource, Clone)]
pub struct BallAssets {
    pub mesh: Handle<Mesh>,
    pub material: Handle<ColorMaterial>,
}

/// Spring acceleration on every body from every other body.
///
/// `bodies` holds `(position, mass)`. A pair pulls together when farther than
/// `rest_length` apart and pushes apart when closer. Coincident bodies exert
/// nothing on each other. Only start-of-tick positions are read, so the result
/// does not depend on order.
pub fn spring_accelerations(bodies: &[(Vec2, f32)], rest_length: f32) -> Vec<Vec2> {
    let mut out = vec![Vec2::ZERO; bodies.len()];
    for (i, &(pos_a, _)) in bodies.iter().enumerate() {
        let mut acc = Vec2::ZERO;
        for (j, &(pos_b, mass_b)) in bodies.iter().enumerate() {
            if i == j {
                continue;
            }
            let delta = pos_b - pos_a;
            let mut dist = delta.length();
            if dist == 0.0 {
                dist = 1.0;
            }
            let force = (dist - rest_length) / dist * mass_b;
            acc += delta * force;
        }
        out[i] = acc;
    }
    out
}

/// One tick of velocity update: damp, then add spring acceleration scaled by own mass.
#[inline]
pub fn retained_velocity(velocity: Vec2, acceleration: Vec2, mass: f32, retention: f32) -> Vec2 {
    velocity * retention + acceleration * mass
}

/// Spring velocity update over a plain slice (no ECS). Positions are untouched.
pub fn apply_springs(balls: &mut [Ball], params: &SwarmParams) {
    let bodies: Vec<(Vec2, f32)> = balls.iter().map(|b| (b.position, b.mass)).collect();
    let acc = spring_accelerations(&bodies, params.rest_length);
    for (b, a) in balls.iter_mut().zip(acc) {
        b.velocity = retained_velocity(b.velocity, a, b.mass, params.velocity_retention);
    }
}

/// Full tick over a plain slice: springs, then integrate.
pub fn step_slice(balls: &mut [Ball], params: &SwarmParams) {
    apply_springs(balls, params);
    for b in balls.iter_mut() {
        b.advance();
    }
}

/// `n` balls at rest, uniformly scattered inside `half_extents` around the origin.
pub fn scatter_balls(n: usize, half_extents: Vec2, params: &SwarmParams) -> Vec<Ball> {
    (0..n)
        .map(|i| {
            let u = rand::random::<f32>() * 2.0 - 1.0;
            let v = rand::random::<f32>() * 2.0 - 1.0;
            Ball::new(Vec2::new(u, v) * half_extents, i as u64)
                .with_radius(params.ball_radius)
                .with_mass(params.ball_mass)
        })
        .collect()
}

/// Draw order follows spawn order. Indices restart on clear and the population is
/// capped, so z stays small; the clamp keeps it inside the 2D camera's range.
fn ball_depth(index: u64) -> f32 {
    (index as f32 * 1e-3).min(MAX_DEPTH)
}

const MAX_DEPTH: f32 = 900.0;

/// Spawn one ball entity, with visuals when `assets` is available.
pub fn spawn_ball(commands: &mut Commands, assets: Option<&BallAssets>, ball: Ball) -> Entity {
    let transform = Transform::from_xyz(ball.position.x, ball.position.y, ball_depth(ball.index))
        .with_scale(Vec3::splat(ball.radius / BALL_RADIUS));
    let mut entity = commands.spawn((ball, transform));
    if let Some(assets) = assets {
        entity.insert((
            Mesh2d(assets.mesh.clone()),
            MeshMaterial2d(assets.material.clone()),
        ));
    }
    entity.id()
}

/// Despawn every ball and drop any drag or paint in progress. Spawn indices start over.
/// Returns how many were removed.
pub fn clear_swarm(
    commands: &mut Commands,
    q_balls: &Query<Entity, With<Ball>>,
    pointer: &mut PointerState,
    counter: &mut SpawnCounter,
) -> usize {
    let mut n = 0;
    for e in q_balls {
        commands.entity(e).despawn();
        n += 1;
    }
    pointer.mode = PointerMode::Idle;
    *counter = SpawnCounter::default();
    n
}

/// While painting, drop one new ball at the pointer each tick.
pub fn spawn_from_pointer(
    mut commands: Commands,
    params: Res<SwarmParams>,
    pointer: Res<PointerState>,
    mut counter: ResMut<SpawnCounter>,
    assets: Option<Res<BallAssets>>,
    q_balls: Query<(), With<Ball>>,
) {
    if pointer.mode != PointerMode::Painting {
        return;
    }
    let population = q_balls.iter().count();
    if population >= params.max_balls {
        if !counter.cap_logged {
            info!(population, "ball cap reached; spawning paused");
            counter.cap_logged = true;
        }
        return;
    }
    counter.cap_logged = false;

    let ball = Ball::new(pointer.position, counter.take())
        .with_radius(params.ball_radius)
        .with_mass(params.ball_mass);
    spawn_ball(&mut commands, assets.as_deref(), ball);
}

/// Pairwise spring velocity update for every ball.
pub fn step_springs(params: Res<SwarmParams>, mut q_balls: Query<&mut Ball>) {
    let bodies: Vec<(Vec2, f32)> = q_balls.iter().map(|b| (b.position, b.mass)).collect();
    let acc = spring_accelerations(&bodies, params.rest_length);
    for (mut b, a) in q_balls.iter_mut().zip(acc) {
        let mass = b.mass;
        b.velocity = retained_velocity(b.velocity, a, mass, params.velocity_retention);
    }
}

/// Aim the grabbed ball at the pointer; the velocity survives release as a fling.
pub fn drag_grabbed(mut pointer: ResMut<PointerState>, mut q_balls: Query<&mut Ball>) {
    let PointerMode::Dragging(e) = pointer.mode else {
        return;
    };
    let target = pointer.position;
    match q_balls.get_mut(e) {
        Ok(mut b) => b.velocity = target - b.position,
        Err(_) => pointer.mode = PointerMode::Idle,
    }
}

pub fn integrate(mut q_balls: Query<&mut Ball>) {
    for mut b in &mut q_balls {
        b.advance();
    }
}

/// Write positions to `Transform` for rendering.
pub fn sync_transforms(mut q: Query<(&Ball, &mut Transform), Changed<Ball>>) {
    for (b, mut tf) in &mut q {
        tf.translation.x = b.position.x;
        tf.translation.y = b.position.y;
    }
}
