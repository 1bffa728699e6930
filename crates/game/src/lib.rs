//! Dreadhall Game - Frame-Stepped Simulation
//!
//! Agents, monster AI, projectiles and the per-frame update loop on top of
//! the world grid and the physics crate.
//!
//! # Determinism Rules
//!
//! 1. No `rand` - the strafe timer draws from the injected [`GameRng`]
//! 2. No system time - callers supply `dt` every tick
//! 3. Ordered iteration - `Vec` storage for agents and projectiles
//! 4. No async - every update runs to completion inside the frame

pub mod agent;
pub mod ai;
pub mod input;
pub mod player;
pub mod projectile;
pub mod random;
pub mod simulation;

pub use agent::{Agent, AgentKind, AgentState};
pub use input::PlayerInput;
pub use player::Player;
pub use projectile::Projectile;
pub use random::GameRng;
pub use simulation::{HitEvent, HitEventKind, Simulation, SimulationConfig};
