//! Scripted player-versus-pack skirmish.

use combat_content::GameContent;
use combat_core::{
    AttackCatalog, CastError, Character, CharacterId, CombatEngine, CombatError, Combatant,
    ElementKind, Faction, PlayerVersusAll, ResourceState, Roster, Vec2,
};

use crate::config::SimConfig;
use crate::report::{Outcome, Report, Summary};

/// Attacks the player tries each tick, strongest first.
const PLAYER_ROTATION: &[&str] = &[
    "steamBurst",
    "emberNova",
    "glacialSpike",
    "frostShard",
    "fireDart",
];
const PLAYER_MODULES: &[&str] = &["emberRing", "capacitor", "vaporCore"];

const ENEMY_ATTACK: &str = "frostShard";
const ENEMY_SPEED: f32 = 1.2;
const ENEMY_REACH: f32 = 2.0;
const SPAWN_RADIUS: f32 = 6.0;

pub struct Skirmish<'a> {
    content: &'a GameContent,
    config: &'a SimConfig,
    roster: Roster,
}

impl<'a> Skirmish<'a> {
    pub fn new(content: &'a GameContent, config: &'a SimConfig) -> Self {
        let combat = &content.config;
        let mut roster = Roster::new();

        let mut resources = ResourceState::new(config.player_level, combat);
        for name in PLAYER_MODULES {
            let Some(module) = content.modules.get(name) else {
                tracing::warn!(module = name, "module not in catalog");
                continue;
            };
            if let Err(error) = resources.install_module(module.clone()) {
                tracing::warn!(module = name, code = error.error_code(), "{error}");
            }
        }
        roster.spawn(
            Combatant::new("hero", Faction::Player, 120 + 20 * config.player_level)
                .with_level(config.player_level)
                .with_equipment_bonus(10.0)
                .with_resources(resources),
        );

        for i in 0..config.enemy_count {
            let angle = std::f32::consts::TAU * i as f32 / config.enemy_count.max(1) as f32;
            let mut enemy = Combatant::new(format!("goblin-{i}"), Faction::Enemy, 60)
                .at(Vec2::from_angle(angle) * SPAWN_RADIUS)
                .with_resources(ResourceState::new(1, combat));
            // Alternate affinities so both elements matter.
            enemy = if i % 2 == 0 {
                enemy
                    .with_resistance(ElementKind::Secondary, 25.0)
                    .with_weakness(ElementKind::Primary, 20.0)
            } else {
                enemy.with_resistance(ElementKind::Primary, 30.0)
            };
            roster.spawn(enemy);
        }

        Self {
            content,
            config,
            roster,
        }
    }

    pub fn run(mut self) -> Summary {
        let content = self.content;
        let mut engine = CombatEngine::new(&content.attacks, &content.config);
        let mut report = Report::default();
        let dt = self.config.delta_seconds();

        for tick in 0..self.config.total_ticks() {
            self.player_turn(&mut engine, &mut report);
            self.enemy_turn(&mut engine, &mut report, dt);
            engine.tick(dt, &mut self.roster, &PlayerVersusAll, &mut report);
            report.summary.ticks = tick + 1;

            if !self.is_alive(CharacterId::PLAYER) {
                report.summary.outcome = Outcome::Defeat;
                break;
            }
            if self.living_enemies().next().is_none() {
                report.summary.outcome = Outcome::Victory;
                break;
            }
        }
        report.summary
    }

    fn player_turn(&mut self, engine: &mut CombatEngine<'_, AttackCatalog>, report: &mut Report) {
        let Some(player) = self.roster.get(CharacterId::PLAYER) else {
            return;
        };
        let origin = player.position;
        let Some(target) = self
            .living_enemies()
            .map(|(_, enemy)| enemy.position)
            .min_by(|a, b| a.distance(origin).total_cmp(&b.distance(origin)))
        else {
            return;
        };

        for attack in PLAYER_ROTATION {
            match engine.cast(&mut self.roster, report, CharacterId::PLAYER, attack, target) {
                Ok(_) => break,
                Err(CastError::CasterIncapacitated(_)) => break,
                Err(error) => tracing::trace!(attack, code = error.error_code(), "skipped"),
            }
        }
    }

    fn enemy_turn(
        &mut self,
        engine: &mut CombatEngine<'_, AttackCatalog>,
        report: &mut Report,
        dt: f32,
    ) {
        let Some(player) = self.roster.get(CharacterId::PLAYER).map(|p| p.position) else {
            return;
        };
        let enemies: Vec<CharacterId> = self.living_enemies().map(|(id, _)| id).collect();

        for id in enemies {
            let Some(enemy) = self.roster.get_mut(id) else {
                continue;
            };
            let offset = player - enemy.position;
            if offset.length() > ENEMY_REACH {
                if !enemy.status_effects.is_stunned() {
                    let step = ENEMY_SPEED * enemy.status_effects.movement_multiplier() * dt;
                    enemy.position += offset.normalize_or_zero() * step;
                }
                continue;
            }
            if let Err(error) = engine.cast(&mut self.roster, report, id, ENEMY_ATTACK, player) {
                tracing::trace!(%id, code = error.error_code(), "enemy held back");
            }
        }
    }

    fn is_alive(&self, id: CharacterId) -> bool {
        self.roster.get(id).is_some_and(Character::is_alive)
    }

    fn living_enemies(&self) -> impl Iterator<Item = (CharacterId, &Combatant)> {
        self.roster
            .iter()
            .filter(|(id, c)| !id.is_player() && c.is_alive())
    }
}
