use combat_core::{
    AttackCatalog, AttackDefinition, CastError, CharacterId, CombatConfig, CombatEngine,
    CombatEvent, Combatant, EffectSpec, ElementKind, EventLog, Faction, FactionTargeting,
    HitSource, PlayerVersusAll, ResourceState, Roster, StatusEffect, StatusKind, StatusTag, Vec2,
};

const STEP: f32 = 0.1;

fn catalog() -> AttackCatalog {
    AttackCatalog::from_definitions([
        AttackDefinition::new("fireDart", ElementKind::Primary)
            .with_damage(15.0)
            .with_range(1.5)
            .with_duration(1.0)
            .with_cost(10.0)
            .with_cooldown(0.5)
            .with_effect(EffectSpec::Burn {
                duration: 2.0,
                damage_per_second: 3.0,
            }),
        AttackDefinition::new("emberNova", ElementKind::Primary)
            .with_damage(20.0)
            .with_range(1.0)
            .with_duration(0.2)
            .with_cost(20.0)
            .with_effect(EffectSpec::AreaEffect { radius: 4.0 }),
        AttackDefinition::new("frostSlam", ElementKind::Secondary)
            .with_damage(10.0)
            .with_range(1.0)
            .with_duration(0.2)
            .with_cost(10.0)
            .with_effect(EffectSpec::Knockback { force: 2.0 }),
        AttackDefinition::new("arcBolt", ElementKind::Secondary)
            .with_damage(12.0)
            .with_range(0.5)
            .with_duration(2.0)
            .with_cost(10.0)
            .with_speed(10.0),
        AttackDefinition::new("mirrorLash", ElementKind::Secondary)
            .with_damage(10.0)
            .with_range(1.0)
            .with_duration(0.2)
            .with_cost(10.0)
            .with_effect(EffectSpec::Reflect { percent: 50.0 }),
        AttackDefinition::new("cinderNova", ElementKind::Primary)
            .with_damage(20.0)
            .with_range(1.0)
            .with_duration(0.2)
            .with_cost(20.0)
            .with_effect(EffectSpec::AreaEffect { radius: 4.0 })
            .with_effect(EffectSpec::Burn {
                duration: 2.0,
                damage_per_second: 3.0,
            })
            .with_effect(EffectSpec::Knockback { force: 2.0 }),
        AttackDefinition::new("rollingNova", ElementKind::Primary)
            .with_damage(12.0)
            .with_range(0.5)
            .with_duration(2.0)
            .with_cost(10.0)
            .with_speed(10.0)
            .with_effect(EffectSpec::AreaEffect { radius: 4.0 }),
    ])
}

fn hero(level: u32, config: &CombatConfig) -> Combatant {
    Combatant::new("hero", Faction::Player, 100)
        .with_level(level)
        .with_resources(ResourceState::new(level, config))
}

fn goblin(x: f32, y: f32) -> Combatant {
    Combatant::new("goblin", Faction::Enemy, 100).at(Vec2::new(x, y))
}

fn hp(roster: &Roster, id: CharacterId) -> u32 {
    roster.get(id).map_or(0, |c| c.hp)
}

fn count_hits(log: &EventLog, source: HitSource) -> usize {
    log.events()
        .iter()
        .filter(|event| matches!(event, CombatEvent::TargetHit { source: s, .. } if *s == source))
        .count()
}

#[test]
fn fire_dart_deals_fifteen_and_burns() {
    let catalog = catalog();
    let config = CombatConfig::default();
    let mut roster = Roster::new();
    let player = roster.spawn(hero(1, &config));
    let target = roster.spawn(goblin(1.0, 0.0));
    let mut engine = CombatEngine::new(&catalog, &config);
    let mut log = EventLog::new();

    engine
        .cast(&mut roster, &mut log, player, "fireDart", Vec2::new(1.0, 0.0))
        .unwrap();
    engine.tick(STEP, &mut roster, &PlayerVersusAll, &mut log);

    assert_eq!(hp(&roster, target), 85);
    let effects = &roster.get(target).unwrap().status_effects;
    assert_eq!(effects.count(StatusTag::Burn), 1);
    assert!(log.events().iter().any(|event| matches!(
        event,
        CombatEvent::EffectApplied { target: t, effect: StatusTag::Burn, duration }
            if *t == target && (*duration - 2.0).abs() < 1e-5
    )));
    match effects.get(StatusTag::Burn).map(|e| e.kind) {
        Some(StatusKind::Burn { damage_per_second }) => assert_eq!(damage_per_second, 3.0),
        other => panic!("unexpected burn state: {other:?}"),
    }
}

#[test]
fn burn_runs_its_course() {
    let catalog = catalog();
    let config = CombatConfig::default();
    let mut roster = Roster::new();
    let player = roster.spawn(hero(1, &config));
    let target = roster.spawn(goblin(1.0, 0.0));
    let mut engine = CombatEngine::new(&catalog, &config);
    let mut log = EventLog::new();

    engine
        .cast(&mut roster, &mut log, player, "fireDart", Vec2::new(1.0, 0.0))
        .unwrap();
    for _ in 0..30 {
        engine.tick(STEP, &mut roster, &PlayerVersusAll, &mut log);
    }

    // 15 direct + 2 pulses of 3
    assert_eq!(hp(&roster, target), 79);
    assert_eq!(count_hits(&log, HitSource::Periodic), 2);
    assert!(roster.get(target).unwrap().status_effects.is_empty());
    assert!(log.events().iter().any(|event| matches!(
        event,
        CombatEvent::EffectExpired { effect: StatusTag::Burn, .. }
    )));
}

#[test]
fn instance_hits_each_target_once() {
    let catalog = catalog();
    let config = CombatConfig::default();
    let mut roster = Roster::new();
    let player = roster.spawn(hero(1, &config));
    roster.spawn(goblin(1.0, 0.0));
    let mut engine = CombatEngine::new(&catalog, &config);
    let mut log = EventLog::new();

    let id = engine
        .cast(&mut roster, &mut log, player, "fireDart", Vec2::new(1.0, 0.0))
        .unwrap();
    for _ in 0..9 {
        engine.tick(STEP, &mut roster, &PlayerVersusAll, &mut log);
    }
    assert_eq!(engine.instance(id).map(|i| i.hit_count()), Some(1));

    for _ in 0..6 {
        engine.tick(STEP, &mut roster, &PlayerVersusAll, &mut log);
    }
    assert_eq!(count_hits(&log, HitSource::Direct), 1);
    assert!(engine.instances().is_empty());
    assert_eq!(
        log.events()
            .iter()
            .filter(|event| matches!(event, CombatEvent::InstanceExpired { instance } if *instance == id))
            .count(),
        1
    );
}

#[test]
fn area_damage_falls_off_from_primary_target() {
    let catalog = catalog();
    let config = CombatConfig::default();
    let mut roster = Roster::new();
    let player = roster.spawn(hero(1, &config));
    let primary = roster.spawn(goblin(0.5, 0.0));
    let halfway = roster.spawn(goblin(2.5, 0.0));
    let edge = roster.spawn(goblin(4.5, 0.0));
    let mut engine = CombatEngine::new(&catalog, &config);
    let mut log = EventLog::new();

    engine
        .cast(&mut roster, &mut log, player, "emberNova", Vec2::ZERO)
        .unwrap();
    engine.tick(STEP, &mut roster, &PlayerVersusAll, &mut log);

    assert_eq!(hp(&roster, primary), 80);
    // 20 × 0.5 falloff × 0.5 area factor
    assert_eq!(hp(&roster, halfway), 95);
    assert_eq!(hp(&roster, edge), 100);
    assert_eq!(count_hits(&log, HitSource::Area), 1);
}

#[test]
fn area_damage_scales_with_level_like_direct_hits() {
    let catalog = catalog();
    let config = CombatConfig::default();
    let mut roster = Roster::new();
    let player = roster.spawn(hero(3, &config));
    let primary = roster.spawn(goblin(0.5, 0.0));
    let halfway = roster.spawn(goblin(2.5, 0.0));
    let mut engine = CombatEngine::new(&catalog, &config);
    let mut log = EventLog::new();

    engine
        .cast(&mut roster, &mut log, player, "emberNova", Vec2::ZERO)
        .unwrap();
    engine.tick(STEP, &mut roster, &PlayerVersusAll, &mut log);

    // 20 × 1.2
    assert_eq!(hp(&roster, primary), 76);
    // 24 × 0.5 falloff × 0.5 area factor
    assert_eq!(hp(&roster, halfway), 94);
}

#[test]
fn area_effects_scale_with_falloff() {
    let catalog = catalog();
    let config = CombatConfig::default();
    let mut roster = Roster::new();
    let player = roster.spawn(hero(1, &config));
    let primary = roster.spawn(goblin(0.5, 0.0));
    let halfway = roster.spawn(goblin(2.5, 0.0));
    let mut engine = CombatEngine::new(&catalog, &config);
    let mut log = EventLog::new();

    engine
        .cast(&mut roster, &mut log, player, "cinderNova", Vec2::ZERO)
        .unwrap();
    engine.tick(STEP, &mut roster, &PlayerVersusAll, &mut log);

    let burn_applied = |who: CharacterId| {
        log.events().iter().find_map(|event| match event {
            CombatEvent::EffectApplied {
                target,
                effect: StatusTag::Burn,
                duration,
            } if *target == who => Some(*duration),
            _ => None,
        })
    };
    let primary_burn = burn_applied(primary).unwrap();
    let halfway_burn = burn_applied(halfway).unwrap();
    assert!((primary_burn - 2.0).abs() < 1e-5);
    assert!((halfway_burn - 1.0).abs() < 1e-5);

    // Primary pushed from the impact point by the full force, the secondary
    // away from the primary by half of it.
    let primary_pos = roster.get(primary).unwrap().position;
    let halfway_pos = roster.get(halfway).unwrap().position;
    assert!((primary_pos - Vec2::new(2.5, 0.0)).length() < 1e-5);
    assert!((halfway_pos - Vec2::new(3.5, 0.0)).length() < 1e-5);
}

#[test]
fn splashed_target_can_still_be_hit_directly() {
    let catalog = catalog();
    let config = CombatConfig::default();
    let mut roster = Roster::new();
    let player = roster.spawn(hero(1, &config));
    let near = roster.spawn(goblin(2.0, 0.0));
    let far = roster.spawn(goblin(4.0, 0.0));
    let mut engine = CombatEngine::new(&catalog, &config);
    let mut log = EventLog::new();

    let id = engine
        .cast(&mut roster, &mut log, player, "rollingNova", Vec2::new(4.0, 0.0))
        .unwrap();
    for _ in 0..2 {
        engine.tick(STEP, &mut roster, &PlayerVersusAll, &mut log);
    }
    // 12 × 0.5 falloff × 0.5 area factor
    assert_eq!(hp(&roster, near), 88);
    assert_eq!(hp(&roster, far), 97);
    let instance = engine.instance(id).unwrap();
    assert!(instance.has_hit(near));
    assert!(!instance.has_hit(far));

    for _ in 0..2 {
        engine.tick(STEP, &mut roster, &PlayerVersusAll, &mut log);
    }
    assert_eq!(hp(&roster, far), 85);
    assert_eq!(hp(&roster, near), 85);
    assert_eq!(engine.instance(id).map(|i| i.hit_count()), Some(2));
    assert_eq!(count_hits(&log, HitSource::Direct), 2);
    assert_eq!(count_hits(&log, HitSource::Area), 2);
}

#[test]
fn cooldown_gates_recast() {
    let catalog = catalog();
    let config = CombatConfig::default();
    let mut roster = Roster::new();
    let player = roster.spawn(hero(1, &config));
    let mut engine = CombatEngine::new(&catalog, &config);
    let mut log = EventLog::new();
    let aim = Vec2::new(10.0, 0.0);

    engine
        .cast(&mut roster, &mut log, player, "fireDart", aim)
        .unwrap();
    let err = engine
        .cast(&mut roster, &mut log, player, "fireDart", aim)
        .unwrap_err();
    assert!(matches!(err, CastError::OnCooldown { .. }));

    for _ in 0..5 {
        engine.tick(STEP, &mut roster, &PlayerVersusAll, &mut log);
    }
    assert!(engine.cast(&mut roster, &mut log, player, "fireDart", aim).is_ok());
}

#[test]
fn removed_owner_stops_collisions() {
    let catalog = catalog();
    let config = CombatConfig::default();
    let mut roster = Roster::new();
    let player = roster.spawn(hero(1, &config));
    let target = roster.spawn(goblin(5.0, 0.0));
    let mut engine = CombatEngine::new(&catalog, &config);
    let mut log = EventLog::new();

    engine
        .cast(&mut roster, &mut log, player, "arcBolt", Vec2::new(5.0, 0.0))
        .unwrap();
    engine.tick(STEP, &mut roster, &PlayerVersusAll, &mut log);
    assert_eq!(engine.instances().len(), 1);

    roster.remove(player);
    for _ in 0..10 {
        engine.tick(STEP, &mut roster, &PlayerVersusAll, &mut log);
    }

    assert!(engine.instances().is_empty());
    assert_eq!(hp(&roster, target), 100);
    assert_eq!(count_hits(&log, HitSource::Direct), 0);
}

#[test]
fn projectile_travels_to_its_target() {
    let catalog = catalog();
    let config = CombatConfig::default();
    let mut roster = Roster::new();
    let player = roster.spawn(hero(1, &config));
    let target = roster.spawn(goblin(5.0, 0.0));
    let mut engine = CombatEngine::new(&catalog, &config);
    let mut log = EventLog::new();

    engine
        .cast(&mut roster, &mut log, player, "arcBolt", Vec2::new(5.0, 0.0))
        .unwrap();
    for _ in 0..3 {
        engine.tick(STEP, &mut roster, &PlayerVersusAll, &mut log);
    }
    assert_eq!(hp(&roster, target), 100);

    for _ in 0..3 {
        engine.tick(STEP, &mut roster, &PlayerVersusAll, &mut log);
    }
    // 12 × 1.0 level factor
    assert_eq!(hp(&roster, target), 88);
}

#[test]
fn cancel_removes_without_hitting() {
    let catalog = catalog();
    let config = CombatConfig::default();
    let mut roster = Roster::new();
    let player = roster.spawn(hero(1, &config));
    let target = roster.spawn(goblin(1.0, 0.0));
    let mut engine = CombatEngine::new(&catalog, &config);
    let mut log = EventLog::new();

    let id = engine
        .cast(&mut roster, &mut log, player, "fireDart", Vec2::new(1.0, 0.0))
        .unwrap();
    assert!(engine.cancel(id));
    assert!(!engine.cancel(id));
    engine.tick(STEP, &mut roster, &PlayerVersusAll, &mut log);

    assert_eq!(hp(&roster, target), 100);
    assert_eq!(engine.cancel_owned_by(player), 0);
}

#[test]
fn knockback_pushes_away_from_impact() {
    let catalog = catalog();
    let config = CombatConfig::default();
    let mut roster = Roster::new();
    let player = roster.spawn(hero(1, &config));
    let target = roster.spawn(goblin(0.5, 0.0));
    let mut engine = CombatEngine::new(&catalog, &config);
    let mut log = EventLog::new();

    engine
        .cast(&mut roster, &mut log, player, "frostSlam", Vec2::ZERO)
        .unwrap();
    engine.tick(STEP, &mut roster, &PlayerVersusAll, &mut log);

    let position = roster.get(target).unwrap().position;
    assert!((position - Vec2::new(2.5, 0.0)).length() < 1e-5);
}

#[test]
fn knockback_on_coincident_target_is_noop() {
    let catalog = catalog();
    let config = CombatConfig::default();
    let mut roster = Roster::new();
    let player = roster.spawn(hero(1, &config));
    let target = roster.spawn(goblin(0.0, 0.0));
    let mut engine = CombatEngine::new(&catalog, &config);
    let mut log = EventLog::new();

    engine
        .cast(&mut roster, &mut log, player, "frostSlam", Vec2::ZERO)
        .unwrap();
    engine.tick(STEP, &mut roster, &PlayerVersusAll, &mut log);

    let goblin = roster.get(target).unwrap();
    assert_eq!(goblin.position, Vec2::ZERO);
    assert_eq!(goblin.hp, 90);
}

#[test]
fn reflect_status_returns_damage_to_attacker() {
    let catalog = catalog();
    let config = CombatConfig::default();
    let mut roster = Roster::new();
    let player = roster.spawn(hero(1, &config));
    let mut mirror = goblin(1.0, 0.0);
    mirror.status_effects.apply(StatusEffect::new(
        StatusKind::Reflect { percent: 50.0 },
        5.0,
        ElementKind::Secondary,
    ));
    roster.spawn(mirror);
    let mut engine = CombatEngine::new(&catalog, &config);
    let mut log = EventLog::new();

    engine
        .cast(&mut roster, &mut log, player, "fireDart", Vec2::new(1.0, 0.0))
        .unwrap();
    engine.tick(STEP, &mut roster, &PlayerVersusAll, &mut log);

    // 15 × 50% = 7.5, rounded
    assert_eq!(hp(&roster, player), 92);
    assert_eq!(count_hits(&log, HitSource::Reflect), 1);
}

#[test]
fn reflect_effect_bounces_part_of_the_hit_to_the_caster() {
    let catalog = catalog();
    let config = CombatConfig::default();
    let mut roster = Roster::new();
    let player = roster.spawn(hero(1, &config));
    let target = roster.spawn(goblin(1.0, 0.0));
    let mut engine = CombatEngine::new(&catalog, &config);
    let mut log = EventLog::new();

    engine
        .cast(&mut roster, &mut log, player, "mirrorLash", Vec2::new(1.0, 0.0))
        .unwrap();
    for _ in 0..3 {
        engine.tick(STEP, &mut roster, &PlayerVersusAll, &mut log);
    }

    assert_eq!(hp(&roster, target), 90);
    // 10 × 50%
    assert_eq!(hp(&roster, player), 95);
    assert_eq!(count_hits(&log, HitSource::Reflect), 1);
    assert!(log.events().iter().any(|event| matches!(
        event,
        CombatEvent::TargetHit { target: t, amount: 5, source: HitSource::Reflect, .. } if *t == player
    )));
}

#[test]
fn reflect_effect_skips_removed_caster() {
    let catalog = catalog();
    let config = CombatConfig::default();
    let mut roster = Roster::new();
    let player = roster.spawn(hero(1, &config));
    let target = roster.spawn(goblin(1.0, 0.0));
    let mut engine = CombatEngine::new(&catalog, &config);
    let mut log = EventLog::new();

    engine
        .cast(&mut roster, &mut log, player, "mirrorLash", Vec2::new(1.0, 0.0))
        .unwrap();
    roster.remove(player);
    engine.tick(STEP, &mut roster, &PlayerVersusAll, &mut log);

    assert_eq!(hp(&roster, target), 100);
    assert_eq!(count_hits(&log, HitSource::Reflect), 0);
    assert!(engine.instances().is_empty());
}

#[test]
fn reflect_that_fells_the_caster_stops_the_instance() {
    let catalog = catalog();
    let config = CombatConfig::default();
    let mut roster = Roster::new();
    let player = roster.spawn(hero(1, &config));
    roster.get_mut(player).unwrap().hp = 4;
    roster.spawn(goblin(1.0, 0.0));
    roster.spawn(goblin(0.5, 0.5));
    let mut engine = CombatEngine::new(&catalog, &config);
    let mut log = EventLog::new();

    engine
        .cast(&mut roster, &mut log, player, "mirrorLash", Vec2::new(1.0, 0.0))
        .unwrap();
    engine.tick(STEP, &mut roster, &PlayerVersusAll, &mut log);

    assert_eq!(hp(&roster, player), 0);
    assert_eq!(count_hits(&log, HitSource::Direct), 1);
    assert_eq!(count_hits(&log, HitSource::Reflect), 1);
}

#[test]
fn effects_on_the_dead_still_expire() {
    let catalog = catalog();
    let config = CombatConfig::default();
    let mut roster = Roster::new();
    roster.spawn(hero(1, &config));
    let mut corpse = goblin(3.0, 0.0);
    corpse.hp = 0;
    corpse.status_effects.apply(StatusEffect::new(
        StatusKind::Freeze { slow_percent: 50.0 },
        0.5,
        ElementKind::Secondary,
    ));
    corpse.status_effects.apply(StatusEffect::new(
        StatusKind::Burn {
            damage_per_second: 3.0,
        },
        2.0,
        ElementKind::Primary,
    ));
    corpse.status_effects.apply(StatusEffect::new(
        StatusKind::Regeneration {
            heal_per_second: 5.0,
        },
        2.0,
        ElementKind::Secondary,
    ));
    let corpse = roster.spawn(corpse);
    let mut engine = CombatEngine::new(&catalog, &config);
    let mut log = EventLog::new();

    for _ in 0..6 {
        engine.tick(STEP, &mut roster, &PlayerVersusAll, &mut log);
    }
    let effects = &roster.get(corpse).unwrap().status_effects;
    assert_eq!(effects.count(StatusTag::Freeze), 0);
    assert_eq!(effects.count(StatusTag::Burn), 1);

    for _ in 0..20 {
        engine.tick(STEP, &mut roster, &PlayerVersusAll, &mut log);
    }
    assert!(roster.get(corpse).unwrap().status_effects.is_empty());
    assert_eq!(
        log.events()
            .iter()
            .filter(|event| matches!(event, CombatEvent::EffectExpired { target, .. } if *target == corpse))
            .count(),
        3
    );
    assert_eq!(hp(&roster, corpse), 0);
    assert_eq!(count_hits(&log, HitSource::Periodic), 0);
    assert!(!log.events().iter().any(|event| matches!(event, CombatEvent::Healed { .. })));
}

#[test]
fn stunned_caster_cannot_cast() {
    let catalog = catalog();
    let config = CombatConfig::default();
    let mut roster = Roster::new();
    let player = roster.spawn(hero(1, &config));
    roster.get_mut(player).unwrap().status_effects.apply(StatusEffect::new(
        StatusKind::Stun,
        1.0,
        ElementKind::Secondary,
    ));
    let mut engine = CombatEngine::new(&catalog, &config);
    let mut log = EventLog::new();

    let err = engine
        .cast(&mut roster, &mut log, player, "fireDart", Vec2::X)
        .unwrap_err();
    assert_eq!(err, CastError::CasterIncapacitated(player));

    let err = engine
        .cast(&mut roster, &mut log, CharacterId(42), "fireDart", Vec2::X)
        .unwrap_err();
    assert_eq!(err, CastError::CasterNotFound(CharacterId(42)));
    assert!(log.is_empty());
}

#[test]
fn lethal_hit_reports_defeat_once() {
    let catalog = catalog();
    let config = CombatConfig::default();
    let mut roster = Roster::new();
    let player = roster.spawn(hero(1, &config));
    let mut weak = goblin(1.0, 0.0);
    weak.hp = 10;
    let target = roster.spawn(weak);
    let mut engine = CombatEngine::new(&catalog, &config);
    let mut log = EventLog::new();

    engine
        .cast(&mut roster, &mut log, player, "fireDart", Vec2::new(1.0, 0.0))
        .unwrap();
    for _ in 0..25 {
        engine.tick(STEP, &mut roster, &PlayerVersusAll, &mut log);
    }

    assert_eq!(hp(&roster, target), 0);
    assert_eq!(
        log.events()
            .iter()
            .filter(|event| matches!(event, CombatEvent::CharacterDefeated { .. }))
            .count(),
        1
    );
    assert_eq!(count_hits(&log, HitSource::Periodic), 0);
}

#[test]
fn faction_targeting_spares_allies() {
    let catalog = catalog();
    let config = CombatConfig::default();
    let mut roster = Roster::new();
    let player = roster.spawn(hero(1, &config));
    let squire = roster.spawn(Combatant::new("squire", Faction::Player, 50).at(Vec2::new(0.5, 0.0)));
    let wolf = roster.spawn(Combatant::new("wolf", Faction::Wildlife, 50).at(Vec2::new(1.0, 0.0)));
    let mut engine = CombatEngine::new(&catalog, &config);
    let mut log = EventLog::new();

    engine
        .cast(&mut roster, &mut log, player, "fireDart", Vec2::new(1.0, 0.0))
        .unwrap();
    engine.tick(STEP, &mut roster, &FactionTargeting, &mut log);

    assert_eq!(hp(&roster, squire), 50);
    assert_eq!(hp(&roster, wolf), 35);
}
