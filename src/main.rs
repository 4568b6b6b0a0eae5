use bevy::prelude::*;

use spring_canvas::config::{BACKGROUND_COLOR, PHYSICS_HZ};
use spring_canvas::{PhysicsPlugin, ViewPlugin};

fn main() {
    App::new()
        // Dark navy canvas
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        // Configure the fixed timestep clock (used in FixedUpdate)
        .insert_resource(Time::<Fixed>::from_hz(PHYSICS_HZ))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "spring-canvas".into(),
                fit_canvas_to_parent: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins((PhysicsPlugin, ViewPlugin))
        .run();
}
