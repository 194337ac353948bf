//! Simulation configuration from environment variables.
use std::env;
use std::path::PathBuf;

/// Parameters of one headless skirmish.
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    /// Simulated seconds before the skirmish is called a draw.
    pub duration_secs: f32,
    /// Fixed ticks per simulated second.
    pub tick_hz: u32,
    pub enemy_count: u32,
    pub player_level: u32,
    /// Directory with `combat.toml`, `attacks.ron` and `modules.ron`.
    pub content_dir: Option<PathBuf>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            duration_secs: 30.0,
            tick_hz: 60,
            enemy_count: 3,
            player_level: 3,
            content_dir: None,
        }
    }
}

impl SimConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SIM_DURATION_SECS` - Simulated seconds (default: 30)
    /// - `SIM_TICK_HZ` - Ticks per second (default: 60)
    /// - `SIM_ENEMY_COUNT` - Enemies to spawn (default: 3)
    /// - `SIM_PLAYER_LEVEL` - Player level (default: 3)
    /// - `SIM_CONTENT_DIR` - Content directory (default: embedded content)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(secs) = parse::<f32>(&lookup, "SIM_DURATION_SECS") {
            if secs.is_finite() && secs > 0.0 {
                config.duration_secs = secs;
            }
        }
        if let Some(hz) = parse::<u32>(&lookup, "SIM_TICK_HZ") {
            config.tick_hz = hz.max(1);
        }
        if let Some(count) = parse::<u32>(&lookup, "SIM_ENEMY_COUNT") {
            config.enemy_count = count;
        }
        if let Some(level) = parse::<u32>(&lookup, "SIM_PLAYER_LEVEL") {
            config.player_level = level;
        }
        config.content_dir = lookup("SIM_CONTENT_DIR").map(PathBuf::from);

        config
    }

    /// Seconds per tick.
    pub fn delta_seconds(&self) -> f32 {
        1.0 / self.tick_hz.max(1) as f32
    }

    pub fn total_ticks(&self) -> u32 {
        (self.duration_secs * self.tick_hz as f32).ceil() as u32
    }
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}
