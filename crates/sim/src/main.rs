//! Headless combat simulation.
//!
//! Loads combat content, spawns a player and a pack of enemies, and runs a
//! scripted skirmish at a fixed timestep, logging every combat event.
//!
//! ```bash
//! RUST_LOG=debug SIM_ENEMY_COUNT=5 cargo run -p combat-sim
//! ```
mod config;
mod report;
mod skirmish;

use anyhow::Result;
use combat_content::{ContentFactory, GameContent};

use crate::config::SimConfig;
use crate::skirmish::Skirmish;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = SimConfig::from_env();
    tracing::info!(?config, "Starting combat simulation");

    let content = match &config.content_dir {
        Some(dir) => ContentFactory::new(dir.clone()).load_all()?,
        None => GameContent::embedded()?,
    };
    tracing::info!(
        attacks = content.attacks.len(),
        modules = content.modules.len(),
        "Content loaded"
    );

    let summary = Skirmish::new(&content, &config).run();
    tracing::info!(
        ticks = summary.ticks,
        casts = summary.casts,
        damage_dealt = summary.damage_dealt,
        damage_taken = summary.damage_taken,
        defeated = summary.defeated,
        outcome = summary.outcome.as_str(),
        "Simulation finished"
    );

    Ok(())
}
