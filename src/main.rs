//! Dreadhall - Headless Demo Run
//!
//! Drives the simulation for a few seconds of scripted play on the
//! built-in arena: walk toward the monsters, fire the hitscan weapon once
//! in range, lob projectiles on a cadence. Rendering, audio and input are
//! external collaborators; this shell only exercises the core loop.

use dreadhall_game::{PlayerInput, Simulation};
use glam::Vec2;

const DT: f32 = 1.0 / 60.0;
const FRAMES: u64 = 600;

/// Aim and walk at the nearest live monster; pulse the triggers so each
/// press registers as its own shot.
fn scripted_input(sim: &Simulation, frame: u64) -> PlayerInput {
    let player = sim.player.position;
    let target = sim
        .live_agents()
        .map(|agent| agent.position)
        .min_by(|a, b| {
            let da = (*a - player).length();
            let db = (*b - player).length();
            da.total_cmp(&db)
        });

    let Some(target) = target else {
        return PlayerInput::default();
    };

    let to_target = Vec2::new(target.x - player.x, target.z - player.z);
    let aim = to_target.normalize_or_zero();
    let distance = to_target.length();

    PlayerInput {
        move_intent: if distance > 6.0 { aim } else { Vec2::ZERO },
        aim,
        fire_projectile: frame % 40 < 20,
        fire_hitscan: distance < 20.0 && frame % 90 < 45,
    }
}

fn main() {
    env_logger::init();

    let mut sim = Simulation::demo();
    log::info!(
        "arena {}x{} cells, {} monsters",
        sim.grid().cols(),
        sim.grid().rows(),
        sim.agents.len()
    );

    for frame in 0..FRAMES {
        let input = scripted_input(&sim, frame);
        sim.tick(&input, DT);

        for event in sim.drain_events() {
            log::info!("impact: {:?} at {:.1?}", event.kind, event.point);
        }

        if sim.live_agents().count() == 0 {
            log::info!("arena cleared on frame {frame}");
            break;
        }
    }

    log::info!(
        "done: frame {}, player health {}, {} monsters alive, {} projectiles in flight",
        sim.frame,
        sim.player.health,
        sim.live_agents().count(),
        sim.projectiles.len()
    );
}
