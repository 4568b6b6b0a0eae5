//! Headless tick timing: scatter balls, run the spring step, report per-tick cost.
//!
//! Usage: benchmark [--balls N] [--ticks N]

use std::process::ExitCode;
use std::time::Instant;

use bevy::math::Vec2;
use spring_canvas::physics::swarm::{SwarmParams, scatter_balls, step_slice};

const USAGE: &str = "usage: benchmark [--balls N] [--ticks N]";

struct Args {
    balls: usize,
    ticks: usize,
}

fn parse_args(mut it: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut args = Args {
        balls: 500,
        ticks: 600,
    };
    while let Some(flag) = it.next() {
        let slot = match flag.as_str() {
            "--balls" => &mut args.balls,
            "--ticks" => &mut args.ticks,
            "-h" | "--help" => return Err(USAGE.to_string()),
            other => return Err(format!("unknown argument `{other}`\n{USAGE}")),
        };
        let value = it
            .next()
            .ok_or_else(|| format!("{flag} needs a value\n{USAGE}"))?;
        *slot = value
            .parse()
            .map_err(|e| format!("bad value for {flag}: {e}\n{USAGE}"))?;
    }
    Ok(args)
}

fn main() -> ExitCode {
    let args = match parse_args(std::env::args().skip(1)) {
        Ok(a) => a,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };

    let params = SwarmParams::default();
    let mut balls = scatter_balls(args.balls, Vec2::new(640.0, 360.0), &params);

    let start = Instant::now();
    for _ in 0..args.ticks {
        step_slice(&mut balls, &params);
    }
    let elapsed = start.elapsed();

    let per_tick = elapsed.as_secs_f64() * 1e3 / args.ticks.max(1) as f64;
    println!(
        "balls={} ticks={} total={:.1}ms per_tick={:.3}ms budget_at_60hz={:.0}%",
        args.balls,
        args.ticks,
        elapsed.as_secs_f64() * 1e3,
        per_tick,
        per_tick / (1000.0 / 60.0) * 100.0,
    );
    ExitCode::SUCCESS
}
