//! Windowless runner: drives the same frame loop as the viewer at a fixed
//! frame delta and reports where the particles ended up.

use glam::Vec2;
use particlesim_core::{advance_frame, build_simulation_context, SimError, SimulationConfig};

pub fn run_headless(
    config: SimulationConfig,
    frames: usize,
    frame_dt: f32,
) -> Result<(), Box<dyn std::error::Error>> {
    if !frame_dt.is_finite() || frame_dt <= 0.0 {
        return Err(SimError::config(format!("frame dt must be > 0, got {}", frame_dt)).into());
    }
    let mut ctx = build_simulation_context(config)?;
    log::info!(
        "headless run: {} particles, {} frames of {:.4}s",
        ctx.system.len(),
        frames,
        frame_dt
    );

    let report_every = (frames / 10).max(1);
    for frame in 1..=frames {
        advance_frame(&mut ctx, frame_dt);
        if frame % report_every == 0 {
            log::debug!(
                "frame {}: t = {:.3}s, kinetic energy = {:.2}",
                frame,
                ctx.elapsed,
                ctx.system.kinetic_energy()
            );
        }
    }

    println!("particles      = {}", ctx.system.len());
    println!("frames         = {}", ctx.frame_count);
    println!("steps          = {}", ctx.step_count);
    println!("simulated time = {:.4}s", ctx.elapsed);
    println!("kinetic energy = {:.4}", ctx.system.kinetic_energy());

    if let Some((min, max)) = bounding_box(ctx.particles().iter().map(|p| p.pos)) {
        println!(
            "extent         = ({:.2}, {:.2}) .. ({:.2}, {:.2})",
            min.x, min.y, max.x, max.y
        );
    }

    let outside = ctx
        .particles()
        .iter()
        .filter(|p| !ctx.bounds.contains(p.pos))
        .count();
    if outside > 0 {
        log::warn!("{} particles ended outside the viewport", outside);
    }

    Ok(())
}

fn bounding_box(points: impl Iterator<Item = Vec2>) -> Option<(Vec2, Vec2)> {
    points.fold(None, |acc, p| match acc {
        None => Some((p, p)),
        Some((min, max)) => Some((min.min(p), max.max(p))),
    })
}
