//! Tests for the simulation engine, player physics, level ingestion and the
//! per-tick systems.

use glam::DVec2;
use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use transforr_core::commands::{HostCommand, InputFrame};
use transforr_core::components::*;
use transforr_core::enums::*;
use transforr_core::error::{LevelDiagnostic, LevelError};
use transforr_core::events::GameEvent;
use transforr_core::types::{Aabb, Body};

use crate::engine::{SimConfig, SimulationEngine};
use crate::level::{self, Camera, Spawn};
use crate::levels;
use crate::player::Player;
use crate::systems::{boss, cleanup, collision, enemy_ai, hazards, pickups, platforms, projectiles};
use crate::transform::Transformer;
use crate::world_setup;

const WIDTH: usize = 141;
const FLOOR_Y: f64 = 640.0;

/// A full-width floor on row 10 with glyphs dropped onto row 9.
fn flat_level(actors: &[(usize, char)]) -> Vec<String> {
    let mut rows = vec![".".repeat(WIDTH); 12];
    rows[10] = "X".repeat(WIDTH);
    let mut row: Vec<char> = rows[9].chars().collect();
    for &(column, glyph) in actors {
        row[column] = glyph;
    }
    rows[9] = row.into_iter().collect();
    rows
}

/// Overwrite `columns` of `row` with `glyph`.
fn paint(rows: &mut [String], row: usize, columns: std::ops::Range<usize>, glyph: char) {
    let mut cells: Vec<char> = rows[row].chars().collect();
    for column in columns {
        cells[column] = glyph;
    }
    rows[row] = cells.into_iter().collect();
}

fn engine_on(levels: Vec<Vec<String>>) -> SimulationEngine {
    let mut engine = SimulationEngine::with_levels(SimConfig::default(), levels);
    engine.queue_command(HostCommand::StartRun { level: 0 });
    engine
}

fn settle(engine: &mut SimulationEngine, ticks: usize) {
    for _ in 0..ticks {
        engine.tick(&InputFrame::IDLE);
    }
}

fn player_shot() -> Projectile {
    Projectile {
        owner: ProjectileOwner::Player,
        kind: ProjectileKind::Bolt,
        damage: 1,
        slow_effect: false,
    }
}

fn count<T: hecs::Component>(world: &World) -> usize {
    world.query::<&T>().iter().count()
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let mut engine_a = SimulationEngine::new(SimConfig {
        seed: 12345,
        ..Default::default()
    });
    let mut engine_b = SimulationEngine::new(SimConfig {
        seed: 12345,
        ..Default::default()
    });

    engine_a.queue_command(HostCommand::StartRun { level: 0 });
    engine_b.queue_command(HostCommand::StartRun { level: 0 });

    for i in 0..300 {
        let input = if i % 20 < 10 {
            InputFrame::right()
        } else {
            InputFrame {
                right: true,
                jump: true,
                fire: true,
                ..InputFrame::IDLE
            }
        };
        let snap_a = engine_a.tick(&input);
        let snap_b = engine_b.tick(&input);

        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
    }
}

#[test]
fn test_determinism_different_seeds() {
    let mut engine_a = SimulationEngine::new(SimConfig {
        seed: 111,
        ..Default::default()
    });
    let mut engine_b = SimulationEngine::new(SimConfig {
        seed: 222,
        ..Default::default()
    });

    engine_a.queue_command(HostCommand::StartRun { level: 0 });
    engine_b.queue_command(HostCommand::StartRun { level: 0 });

    // Enemy start directions come from the gameplay RNG.
    let mut diverged = false;
    for _ in 0..100 {
        let snap_a = engine_a.tick(&InputFrame::IDLE);
        let snap_b = engine_b.tick(&InputFrame::IDLE);
        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        if json_a != json_b {
            diverged = true;
            break;
        }
    }
    assert!(diverged, "Different seeds should produce divergent output");
}

// ---- Player physics ----

#[test]
fn test_player_comes_to_rest_on_ground() {
    let mut engine = engine_on(vec![flat_level(&[])]);
    settle(&mut engine, 60);

    let player = engine.player();
    assert_eq!(player.rect().bottom(), FLOOR_Y);
    assert_eq!(player.body.vel.y, 0.0);
    assert!(player.body.on_ground);

    // Another idle tick: gravity pulls 0.8 in, resolution puts it back.
    engine.tick(&InputFrame::IDLE);
    assert_eq!(engine.player().rect().bottom(), FLOOR_Y);
    assert_eq!(engine.player().body.vel.y, 0.0);
}

#[test]
fn test_player_jump_and_land() {
    let mut engine = engine_on(vec![flat_level(&[])]);
    settle(&mut engine, 60);

    engine.tick(&InputFrame::jump());
    assert!(engine.player().rect().bottom() < FLOOR_Y);
    assert!(!engine.player().body.on_ground);

    settle(&mut engine, 60);
    assert_eq!(engine.player().rect().bottom(), FLOOR_Y);
    assert!(engine.player().body.on_ground);
}

#[test]
fn test_vehicle_cannot_jump() {
    let mut player = Player::new(100.0, 550.0);
    assert!(player.refit_within(Mode::Vehicle, &[]));
    let floor = [Aabb::new(0.0, FLOOR_Y, 2000.0, 64.0)];

    player.update(&InputFrame::IDLE, &floor, 0.0);
    assert!(player.body.on_ground);

    player.update(&InputFrame::jump(), &floor, 0.0);
    assert!(player.body.on_ground);
    assert_eq!(player.rect().bottom(), FLOOR_Y);
}

#[test]
fn test_player_walks_into_wall() {
    let mut player = Player::new(100.0, 550.0);
    let solids = [
        Aabb::new(0.0, FLOOR_Y, 2000.0, 64.0),
        Aabb::new(170.0, 500.0, 64.0, 140.0),
    ];
    for _ in 0..10 {
        player.update(&InputFrame::right(), &solids, 0.0);
    }
    assert_eq!(player.rect().right(), 170.0);
    assert_eq!(player.facing, Facing::Right);
}

#[test]
fn test_player_kept_inside_window() {
    let mut player = Player::new(10.0, 550.0);
    let floor = [Aabb::new(0.0, FLOOR_Y, 2000.0, 64.0)];
    for _ in 0..10 {
        player.update(&InputFrame::left(), &floor, 0.0);
    }
    assert_eq!(player.rect().left(), 0.0);
}

#[test]
fn test_player_dies_below_screen() {
    let mut player = Player::new(100.0, 700.0);
    for _ in 0..10 {
        player.update(&InputFrame::IDLE, &[], 0.0);
    }
    assert!(player.dead);
}

#[test]
fn test_player_health_bounds() {
    let mut player = Player::new(0.0, 0.0);
    assert!(player.take_damage(100));
    assert_eq!(player.health, 0);

    // Invincible right after a hit.
    assert!(!player.take_damage(1));
    assert_eq!(player.health, 0);

    player.heal(10);
    assert_eq!(player.health, player.max_health);
}

#[test]
fn test_weapon_power_expires() {
    let mut player = Player::new(0.0, 0.0);
    player.add_powerup(PowerupKind::Weapon);
    assert!(player.has_weapon);
    assert_eq!(player.weapon_power, 2);

    player.powerup_timer = 1;
    player.update(&InputFrame::IDLE, &[], 0.0);
    assert_eq!(player.weapon_power, 1);
    assert!(player.has_weapon, "the weapon itself is kept");
}

// ---- Firing ----

#[test]
fn test_fire_cooldown() {
    let mut engine = engine_on(vec![flat_level(&[])]);
    settle(&mut engine, 60);
    engine.player_mut().has_weapon = true;

    let snap = engine.tick(&InputFrame::fire());
    assert_eq!(snap.projectiles.len(), 1);
    assert_eq!(snap.projectiles[0].owner, ProjectileOwner::Player);
    assert_eq!(engine.player().weapon_cooldown, 15);
    assert_eq!(snap.score, 5);
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::ShotFired { power: 1 })));

    let snap = engine.tick(&InputFrame::fire());
    assert_eq!(snap.projectiles.len(), 1, "second shot rejected on cooldown");
    assert_eq!(engine.player().weapon_cooldown, 14);
    assert_eq!(snap.score, 5);
}

#[test]
fn test_boosted_fire_cooldown_and_damage() {
    let mut player = Player::new(100.0, 100.0);
    player.add_powerup(PowerupKind::Weapon);

    let (body, shot) = player.shoot().unwrap();
    assert_eq!(player.weapon_cooldown, 8);
    assert_eq!(shot.damage, 2);
    assert_eq!(body.vel, DVec2::new(5.0, 0.0));
    assert_eq!(body.rect.center_x(), player.rect().center_x() + 30.0);
}

#[test]
fn test_unarmed_player_cannot_fire() {
    let mut player = Player::new(100.0, 100.0);
    assert!(player.shoot().is_none());
}

// ---- Transformation ----

#[test]
fn test_transform_takes_thirty_ticks() {
    let mut engine = engine_on(vec![flat_level(&[])]);
    settle(&mut engine, 60);
    let x = engine.player().rect().x;

    let snap = engine.tick(&InputFrame::transform());
    assert_eq!(snap.phase, GamePhase::Transforming);
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::TransformStarted { from: Mode::Hero })));

    for _ in 2..30 {
        let snap = engine.tick(&InputFrame::right());
        assert_eq!(snap.phase, GamePhase::Transforming);
        assert_eq!(snap.player.mode, Mode::Hero);
        assert_eq!(engine.player().rect().x, x, "world is frozen");
    }

    let snap = engine.tick(&InputFrame::IDLE);
    assert_eq!(snap.phase, GamePhase::Playing);
    assert_eq!(snap.player.mode, Mode::Vehicle);
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::TransformCompleted { mode: Mode::Vehicle })));

    let rect = engine.player().rect();
    assert_eq!(rect.w, 100.0);
    assert_eq!(rect.h, 50.0);
    assert_eq!(rect.bottom(), FLOOR_Y);
    assert_eq!(rect.center_x(), x + 30.0);
}

#[test]
fn test_transform_blocked_during_cooldown() {
    let mut engine = engine_on(vec![flat_level(&[])]);
    settle(&mut engine, 60);

    engine.tick(&InputFrame::transform());
    settle(&mut engine, 29);
    assert_eq!(engine.player().mode, Mode::Vehicle);

    let snap = engine.tick(&InputFrame::transform());
    assert_eq!(snap.phase, GamePhase::Playing);
    assert_eq!(snap.player.mode, Mode::Vehicle);

    settle(&mut engine, 30);
    let snap = engine.tick(&InputFrame::transform());
    assert_eq!(snap.phase, GamePhase::Transforming);
}

#[test]
fn test_transform_beside_wall_slides_clear() {
    let mut rows = flat_level(&[]);
    paint(&mut rows, 8, 6..7, 'X');
    paint(&mut rows, 9, 6..7, 'X');
    let mut engine = engine_on(vec![rows]);
    for _ in 0..60 {
        engine.tick(&InputFrame::right());
    }
    assert_eq!(engine.player().rect().right(), 384.0);

    engine.tick(&InputFrame::transform());
    settle(&mut engine, 29);
    assert_eq!(engine.player().mode, Mode::Vehicle);
    let rect = *engine.player().rect();
    assert_eq!(rect.right(), 384.0, "wider box slid out of the wall");
    assert_eq!(rect.bottom(), FLOOR_Y);

    for _ in 0..10 {
        engine.tick(&InputFrame::right());
    }
    assert_eq!(engine.player().rect().right(), 384.0, "wall still holds");
}

#[test]
fn test_no_room_to_transform_under_low_ceiling() {
    let mut rows = flat_level(&[]);
    paint(&mut rows, 8, 6..11, 'X');
    let mut engine = engine_on(vec![rows]);
    settle(&mut engine, 30);
    engine.tick(&InputFrame::transform());
    settle(&mut engine, 29);
    assert_eq!(engine.player().mode, Mode::Vehicle);

    // The vehicle (590..640) clears the 512..576 ceiling tiles.
    for _ in 0..35 {
        engine.tick(&InputFrame::right());
    }
    let parked = *engine.player().rect();
    assert!(parked.left() > 384.0 && parked.right() < 704.0);
    assert_eq!(engine.player().transform_cooldown, 0);

    let snap = engine.tick(&InputFrame::transform());
    assert_eq!(snap.phase, GamePhase::Playing);
    assert!(!snap
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::TransformStarted { .. })));
    settle(&mut engine, 5);
    assert_eq!(engine.player().mode, Mode::Vehicle);
    assert_eq!(*engine.player().rect(), parked);

    for _ in 0..20 {
        engine.tick(&InputFrame::right());
    }
    let snap = engine.tick(&InputFrame::transform());
    assert_eq!(snap.phase, GamePhase::Transforming);
}

#[test]
fn test_vehicle_does_not_fit_in_narrow_gap() {
    let solids = [
        Aabb::new(0.0, FLOOR_Y, 2000.0, 64.0),
        Aabb::new(320.0, 512.0, 64.0, 128.0),
        Aabb::new(448.0, 512.0, 64.0, 128.0),
    ];
    let mut player = Player::new(386.0, FLOOR_Y - 90.0);

    assert!(player.fitted_rect(Mode::Vehicle, &solids).is_none());
    let mut transformer = Transformer::default();
    assert!(!transformer.try_start(&player, &solids));
    assert!(!transformer.is_active());
    assert!(!player.refit_within(Mode::Vehicle, &solids));
    assert_eq!(player.mode, Mode::Hero);
    assert_eq!(player.rect().w, 60.0);
}

// ---- Camera ----

#[test]
fn test_camera_target_clamped() {
    assert_eq!(Camera::target(0.0), 0.0);
    assert_eq!(Camera::target(100_000.0), Camera::MAX_SCROLL);
    assert_eq!(Camera::target(1640.0), 1000.0);
}

#[test]
fn test_camera_converges_monotonically() {
    let mut camera = Camera::default();
    let mut last = camera.scroll_x;
    for _ in 0..500 {
        camera.follow(20_000.0);
        assert!(camera.scroll_x >= last);
        assert!(camera.scroll_x <= Camera::MAX_SCROLL);
        last = camera.scroll_x;
    }
    assert!((Camera::MAX_SCROLL - camera.scroll_x).abs() < 1.0);

    for _ in 0..500 {
        camera.follow(-50.0);
        assert!(camera.scroll_x <= last);
        assert!(camera.scroll_x >= 0.0);
        last = camera.scroll_x;
    }
}

// ---- Enemies ----

#[test]
fn test_mantis_leaps_at_mid_range() {
    let mut world = World::new();
    let floor = [Aabb::new(0.0, FLOOR_Y, 9000.0, 64.0)];
    let mantis = world_setup::spawn_enemy_facing(
        &mut world,
        EnemyArchetype::Mantis,
        1000.0,
        FLOOR_Y - 80.0,
        Facing::Right,
    );
    world.get::<&mut Body>(mantis).unwrap().on_ground = true;

    // Player centre 200 units to the left of the mantis centre (1030).
    let player_rect = Aabb::new(800.0, 550.0, 60.0, 90.0);
    let mut events = Vec::new();
    enemy_ai::run(&mut world, &player_rect, &floor, &mut events);

    let body = world.get::<&Body>(mantis).unwrap();
    let enemy = world.get::<&Enemy>(mantis).unwrap();
    assert_eq!(body.vel.y, -15.0);
    assert_eq!(body.vel.x, -10.0);
    assert_eq!(enemy.jump_cooldown, 120);
    assert!(enemy.leaping);
    assert_eq!(enemy.direction, Facing::Left);
}

#[test]
fn test_snail_turns_at_ledge() {
    let mut world = World::new();
    let floor = [Aabb::new(0.0, FLOOR_Y, 300.0, 64.0)];
    let snail = world_setup::spawn_enemy_facing(
        &mut world,
        EnemyArchetype::Snail,
        240.0,
        FLOOR_Y - 40.0,
        Facing::Right,
    );
    let far_away = Aabb::new(5000.0, 0.0, 60.0, 90.0);
    let mut events = Vec::new();

    for _ in 0..10 {
        enemy_ai::run(&mut world, &far_away, &floor, &mut events);
    }

    let enemy = world.get::<&Enemy>(snail).unwrap();
    let body = world.get::<&Body>(snail).unwrap();
    assert_eq!(enemy.direction, Facing::Left);
    assert_eq!(body.rect.bottom(), FLOOR_Y);
}

#[test]
fn test_caterpillar_lays_sticky_trail() {
    let mut world = World::new();
    let floor = [Aabb::new(0.0, FLOOR_Y, 9000.0, 64.0)];
    world_setup::spawn_enemy_facing(
        &mut world,
        EnemyArchetype::Caterpillar,
        1000.0,
        FLOOR_Y - 30.0,
        Facing::Right,
    );
    let far_away = Aabb::new(5000.0, 0.0, 60.0, 90.0);
    let mut events = Vec::new();

    for _ in 0..60 {
        enemy_ai::run(&mut world, &far_away, &floor, &mut events);
    }

    assert_eq!(count::<StickyTrail>(&world), 1);
    let mut trails = world.query::<(&StickyTrail, &Aabb)>();
    let (_, (_, rect)) = trails.iter().next().unwrap();
    assert_eq!(rect.bottom(), FLOOR_Y);
    assert!(events.iter().any(|e| matches!(
        e,
        GameEvent::EnemyAttacked {
            attack: EnemyAttack::StickyTrail,
            ..
        }
    )));
}

#[test]
fn test_enemy_attacks_spawn_their_projectiles() {
    // (archetype, attack interval, kind, velocity, damage)
    let cases = [
        (EnemyArchetype::Scorpion, 100, ProjectileKind::Sting, DVec2::new(8.0, 0.0), 1),
        (EnemyArchetype::Beetle, 140, ProjectileKind::HeavyBlast, DVec2::new(4.0, 0.0), 2),
        (EnemyArchetype::Bee, 60, ProjectileKind::Honey, DVec2::new(0.0, 5.0), 1),
        (EnemyArchetype::Mantis, 80, ProjectileKind::Blade, DVec2::new(12.0, 0.0), 1),
    ];
    let floor = [Aabb::new(0.0, FLOOR_Y, 9000.0, 64.0)];

    for (archetype, interval, kind, velocity, damage) in cases {
        let mut world = World::new();
        let height = transforr_ai::profiles::get_profile(archetype).height;
        let enemy = world_setup::spawn_enemy_facing(
            &mut world,
            archetype,
            1000.0,
            FLOOR_Y - height,
            Facing::Right,
        );
        world.get::<&mut Enemy>(enemy).unwrap().attack_timer = interval - 1;
        let center_x = world.get::<&Body>(enemy).unwrap().rect.center_x();

        // 30 units to the right: under the bee, inside the mantis strike zone.
        let player_rect = Aabb::new(center_x, 550.0, 60.0, 90.0);
        let mut events = Vec::new();
        enemy_ai::run(&mut world, &player_rect, &floor, &mut events);

        let fired: Vec<(Projectile, DVec2)> = world
            .query::<(&Projectile, &Body)>()
            .iter()
            .map(|(_, (projectile, body))| (projectile.clone(), body.vel))
            .collect();
        assert_eq!(fired.len(), 1, "{archetype:?}");
        let (projectile, vel) = &fired[0];
        assert_eq!(projectile.owner, ProjectileOwner::Hostile);
        assert_eq!(projectile.kind, kind, "{archetype:?}");
        assert_eq!(projectile.damage, damage, "{archetype:?}");
        assert!(!projectile.slow_effect, "{archetype:?}");
        assert_eq!(*vel, velocity, "{archetype:?}");
        assert!(events.iter().any(|e| matches!(
            e,
            GameEvent::EnemyAttacked { archetype: a, .. } if *a == archetype
        )));
    }
}

#[test]
fn test_fallen_enemy_culled_without_score() {
    let mut world = World::new();
    let fallen =
        world_setup::spawn_enemy_facing(&mut world, EnemyArchetype::Snail, 100.0, 900.0, Facing::Left);
    let standing =
        world_setup::spawn_enemy_facing(&mut world, EnemyArchetype::Snail, 100.0, 500.0, Facing::Left);
    let mut buffer = Vec::new();

    cleanup::run(&mut world, &mut buffer);

    assert!(!world.contains(fallen));
    assert!(world.contains(standing));
}

// ---- Collision ----

#[test]
fn test_enemy_killed_exactly_once() {
    let mut world = World::new();
    let snail =
        world_setup::spawn_enemy_facing(&mut world, EnemyArchetype::Snail, 1000.0, 500.0, Facing::Left);
    world.get::<&mut Enemy>(snail).unwrap().health = 1;

    let center = DVec2::new(1025.0, 520.0);
    for _ in 0..2 {
        world_setup::spawn_projectile(
            &mut world,
            center,
            DVec2::new(25.0, 12.0),
            DVec2::ZERO,
            player_shot(),
        );
    }

    let mut player = Player::new(0.0, 0.0);
    let mut score = 0;
    let mut particles = Vec::new();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut events = Vec::new();
    let mut buffer = Vec::new();
    collision::run(
        &mut world,
        &mut player,
        &mut score,
        &mut particles,
        &mut rng,
        &mut events,
        &mut buffer,
    );

    assert_eq!(score, 100);
    let kills = events
        .iter()
        .filter(|e| matches!(e, GameEvent::EnemyKilled { .. }))
        .count();
    assert_eq!(kills, 1);
    assert!(!world.contains(snail));
    assert_eq!(count::<Projectile>(&world), 1, "second shot not consumed");
    assert_eq!(particles.len(), 25);
}

#[test]
fn test_hostile_web_slows_and_damages_player() {
    let mut world = World::new();
    let mut player = Player::new(100.0, 100.0);
    world_setup::spawn_hostile_shot(
        &mut world,
        player.rect().center(),
        DVec2::ZERO,
        ProjectileKind::Web,
        1,
        true,
    );

    let mut score = 0;
    let mut particles = Vec::new();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut events = Vec::new();
    let mut buffer = Vec::new();
    collision::run(
        &mut world,
        &mut player,
        &mut score,
        &mut particles,
        &mut rng,
        &mut events,
        &mut buffer,
    );

    assert_eq!(player.health, 4);
    assert!(player.slowed);
    assert!(player.is_invincible());
    assert_eq!(score, -25);
    assert_eq!(count::<Projectile>(&world), 0);
}

#[test]
fn test_honey_drop_damages_without_slowing() {
    let mut world = World::new();
    let mut player = Player::new(100.0, 100.0);
    world_setup::spawn_hostile_shot(
        &mut world,
        player.rect().center(),
        DVec2::new(0.0, 5.0),
        ProjectileKind::Honey,
        1,
        false,
    );

    let mut score = 0;
    let mut particles = Vec::new();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut events = Vec::new();
    let mut buffer = Vec::new();
    collision::run(
        &mut world,
        &mut player,
        &mut score,
        &mut particles,
        &mut rng,
        &mut events,
        &mut buffer,
    );

    assert_eq!(player.health, 4);
    assert!(!player.slowed);
    assert_eq!(score, -25);
    assert_eq!(count::<Projectile>(&world), 0);
}

#[test]
fn test_enemy_contact_damages_player() {
    let mut world = World::new();
    let mut player = Player::new(100.0, 100.0);
    world_setup::spawn_enemy_facing(&mut world, EnemyArchetype::Snail, 120.0, 150.0, Facing::Left);

    let mut score = 0;
    let mut particles = Vec::new();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut events = Vec::new();
    let mut buffer = Vec::new();
    for _ in 0..2 {
        collision::run(
            &mut world,
            &mut player,
            &mut score,
            &mut particles,
            &mut rng,
            &mut events,
            &mut buffer,
        );
    }

    assert_eq!(player.health, 4, "invincibility absorbs the second contact");
    assert_eq!(score, -50);
}

// ---- Boss ----

#[test]
fn test_boss_phase_two_from_hit() {
    let mut world = World::new();
    let entity = world_setup::spawn_boss(&mut world, 0.0, 0.0, 101);
    let mut boss_state = world.get::<&mut Boss>(entity).unwrap();

    let hit = boss::take_damage(&mut boss_state, 36).unwrap();
    assert!(hit.phase_changed);
    assert!(!hit.defeated);
    assert_eq!(boss_state.health, 65);
    assert_eq!(boss_state.phase, BossPhase::Two);

    assert!(
        boss::take_damage(&mut boss_state, 1).is_none(),
        "invincible right after a hit"
    );
}

#[test]
fn test_boss_health_clamped_and_defeated_once() {
    let mut world = World::new();
    let entity = world_setup::spawn_boss(&mut world, 1000.0, 300.0, 1);
    let center = world.get::<&Boss>(entity).unwrap().body.rect.center();
    for _ in 0..2 {
        world_setup::spawn_projectile(
            &mut world,
            center,
            DVec2::new(25.0, 12.0),
            DVec2::ZERO,
            Projectile {
                damage: 2,
                ..player_shot()
            },
        );
    }

    let mut player = Player::new(0.0, 0.0);
    let mut score = 0;
    let mut particles = Vec::new();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut events = Vec::new();
    let mut buffer = Vec::new();
    for _ in 0..2 {
        collision::run(
            &mut world,
            &mut player,
            &mut score,
            &mut particles,
            &mut rng,
            &mut events,
            &mut buffer,
        );
    }

    assert_eq!(world.get::<&Boss>(entity).unwrap().health, 0);
    let defeats = events
        .iter()
        .filter(|e| matches!(e, GameEvent::BossDefeated))
        .count();
    assert_eq!(defeats, 1);
    assert_eq!(score, 50);
    assert_eq!(count::<Projectile>(&world), 1, "shots pass a defeated boss");
}

#[test]
fn test_boss_volleys_on_first_tick_then_cooldown() {
    let mut world = World::new();
    let entity = world_setup::spawn_boss(&mut world, 1000.0, 100.0, 100);
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut events = Vec::new();
    let player_center = DVec2::new(600.0, 500.0);

    boss::run(&mut world, player_center, &mut rng, &mut events);
    assert_eq!(count::<Projectile>(&world), 5);
    assert_eq!(world.get::<&Boss>(entity).unwrap().attack_timer, 80);

    for _ in 0..79 {
        boss::run(&mut world, player_center, &mut rng, &mut events);
    }
    assert_eq!(count::<Projectile>(&world), 5);

    boss::run(&mut world, player_center, &mut rng, &mut events);
    assert_eq!(count::<Projectile>(&world), 10);
    let volleys = events
        .iter()
        .filter(|e| matches!(e, GameEvent::BossVolley { .. }))
        .count();
    assert_eq!(volleys, 2);
}

#[test]
fn test_boss_volley_kinds_by_phase() {
    // Player far off to the left of the boss.
    let player_center = DVec2::new(-10_000.0, 300.0);
    let cases = [
        (BossPhase::One, 100, ProjectileKind::Web, 5, 1, true),
        (BossPhase::Two, 50, ProjectileKind::Energy, 5, 2, false),
        (BossPhase::Three, 20, ProjectileKind::Aimed, 3, 3, false),
    ];

    for (phase, health, kind, volley_size, damage, slows) in cases {
        let mut world = World::new();
        let entity = world_setup::spawn_boss(&mut world, 1000.0, 100.0, 100);
        {
            let mut boss_state = world.get::<&mut Boss>(entity).unwrap();
            boss_state.health = health;
            boss_state.phase = phase;
        }
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut events = Vec::new();
        boss::run(&mut world, player_center, &mut rng, &mut events);

        let mut shots = world.query::<(&Projectile, &Body)>();
        let shots: Vec<_> = shots.iter().map(|(_, (p, b))| (p.clone(), b.vel)).collect();
        assert_eq!(shots.len(), volley_size, "{phase:?}");
        for (projectile, vel) in &shots {
            assert_eq!(projectile.owner, ProjectileOwner::Hostile);
            assert_eq!(projectile.kind, kind);
            assert_eq!(projectile.damage, damage);
            assert_eq!(projectile.slow_effect, slows);
            if phase != BossPhase::Two {
                assert!(vel.x < 0.0, "{phase:?} opens toward the player");
            }
            if phase == BossPhase::Three {
                assert!((vel.length() - 6.0).abs() < 1e-9);
            }
        }
    }
}

#[test]
fn test_defeated_boss_is_inert() {
    let mut world = World::new();
    let entity = world_setup::spawn_boss(&mut world, 1000.0, 100.0, 100);
    world.get::<&mut Boss>(entity).unwrap().health = 0;
    let before = world.get::<&Boss>(entity).unwrap().body.rect;

    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut events = Vec::new();
    for _ in 0..100 {
        boss::run(&mut world, DVec2::ZERO, &mut rng, &mut events);
    }

    assert_eq!(count::<Projectile>(&world), 0);
    assert_eq!(world.get::<&Boss>(entity).unwrap().body.rect, before);
    assert!(events.is_empty());
}

// ---- Projectiles and level geometry ----

#[test]
fn test_projectile_culled_outside_window() {
    assert!(projectiles::outside_window(&Aabb::new(-600.0, 300.0, 25.0, 12.0), 0.0));
    assert!(projectiles::outside_window(&Aabb::new(1385.0, 300.0, 25.0, 12.0), 0.0));
    assert!(projectiles::outside_window(&Aabb::new(500.0, 830.0, 25.0, 12.0), 0.0));
    assert!(!projectiles::outside_window(&Aabb::new(1000.0, 300.0, 25.0, 12.0), 0.0));
    assert!(!projectiles::outside_window(&Aabb::new(2000.0, 300.0, 25.0, 12.0), 1000.0));
}

#[test]
fn test_breakable_block_takes_three_hits() {
    let mut world = World::new();
    world.spawn((Platform {
        rect: Aabb::new(500.0, 500.0, 64.0, 64.0),
        kind: PlatformKind::Breakable { hits_remaining: 3 },
    },));
    let mut particles = Vec::new();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut events = Vec::new();
    let mut buffer = Vec::new();

    for hit in 1..=3 {
        world_setup::spawn_projectile(
            &mut world,
            DVec2::new(532.0, 532.0),
            DVec2::new(25.0, 12.0),
            DVec2::ZERO,
            player_shot(),
        );
        projectiles::run(
            &mut world,
            0.0,
            &mut particles,
            &mut rng,
            &mut events,
            &mut buffer,
        );
        assert_eq!(count::<Projectile>(&world), 0, "shot {hit} destroyed on impact");
        if hit < 3 {
            assert_eq!(count::<Platform>(&world), 1);
        }
    }

    assert_eq!(count::<Platform>(&world), 0);
    assert!(events
        .iter()
        .any(|e| matches!(e, GameEvent::BlockBroken { .. })));
}

#[test]
fn test_hostile_shot_does_not_chip_blocks() {
    let mut world = World::new();
    let block = world.spawn((Platform {
        rect: Aabb::new(500.0, 500.0, 64.0, 64.0),
        kind: PlatformKind::Breakable { hits_remaining: 1 },
    },));
    world_setup::spawn_hostile_shot(
        &mut world,
        DVec2::new(532.0, 532.0),
        DVec2::ZERO,
        ProjectileKind::Sting,
        1,
        false,
    );
    let mut particles = Vec::new();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut events = Vec::new();
    let mut buffer = Vec::new();
    projectiles::run(
        &mut world,
        0.0,
        &mut particles,
        &mut rng,
        &mut events,
        &mut buffer,
    );

    assert!(world.contains(block));
    assert_eq!(count::<Projectile>(&world), 0);
    assert_eq!(particles.len(), 5);
}

#[test]
fn test_moving_platforms_stay_in_range() {
    let layout = level::build(1, &flat_level(&[])).unwrap();
    let mut world = World::new();
    for platform in &layout.platforms {
        world.spawn((*platform,));
    }

    for _ in 0..1000 {
        platforms::run(&mut world);
        for (_, platform) in world.query::<&Platform>().iter() {
            if let PlatformKind::Moving { start_x, range, .. } = platform.kind {
                assert!(platform.rect.x >= start_x - range);
                assert!(platform.rect.x <= start_x + range);
            }
        }
    }

    let first_level = level::build(0, &flat_level(&[])).unwrap();
    assert!(first_level
        .platforms
        .iter()
        .all(|p| !matches!(p.kind, PlatformKind::Moving { .. })));
}

// ---- Power-ups and hazards ----

#[test]
fn test_weapon_powerup_collected() {
    let mut world = World::new();
    let mut cosmetic = ChaCha8Rng::seed_from_u64(1);
    world_setup::spawn_powerup(&mut world, &mut cosmetic, PowerupKind::Weapon, 110.0, 110.0);
    let mut player = Player::new(100.0, 100.0);
    let mut particles = Vec::new();
    let mut events = Vec::new();

    pickups::run(&mut world, &mut player, &mut particles, &mut cosmetic, &mut events);

    assert!(player.has_weapon);
    assert_eq!(player.weapon_power, 2);
    assert_eq!(player.powerup_timer, 600);
    assert_eq!(count::<Powerup>(&world), 0);
    assert_eq!(particles.len(), 30);
    assert_eq!(
        events,
        vec![GameEvent::PowerupCollected {
            kind: PowerupKind::Weapon
        }]
    );
}

#[test]
fn test_health_powerup_capped() {
    let mut world = World::new();
    let mut cosmetic = ChaCha8Rng::seed_from_u64(1);
    let mut player = Player::new(100.0, 100.0);
    player.health = 4;
    world_setup::spawn_powerup(&mut world, &mut cosmetic, PowerupKind::Health, 110.0, 110.0);
    let mut particles = Vec::new();
    let mut events = Vec::new();

    pickups::run(&mut world, &mut player, &mut particles, &mut cosmetic, &mut events);

    assert_eq!(player.health, 5);
}

#[test]
fn test_uncollected_powerup_bobs() {
    let mut world = World::new();
    let mut cosmetic = ChaCha8Rng::seed_from_u64(1);
    let entity =
        world_setup::spawn_powerup(&mut world, &mut cosmetic, PowerupKind::Health, 3000.0, 110.0);
    let phase = world.get::<&Powerup>(entity).unwrap().bob_phase;
    let mut player = Player::new(100.0, 100.0);

    pickups::run(&mut world, &mut player, &mut Vec::new(), &mut cosmetic, &mut Vec::new());

    let after = world.get::<&Powerup>(entity).unwrap().bob_phase;
    assert!((after - phase - 0.1).abs() < 1e-9);
    assert_eq!(*world.get::<&Aabb>(entity).unwrap(), Aabb::new(3000.0, 110.0, 40.0, 40.0));
}

#[test]
fn test_sticky_trail_slows_hero_only() {
    let mut world = World::new();
    world_setup::spawn_sticky_trail(&mut world, 130.0, 190.0);
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut events = Vec::new();
    let mut buffer = Vec::new();

    let mut hero = Player::new(100.0, 100.0);
    hazards::run(&mut world, &mut hero, &mut rng, &mut events, &mut buffer);
    assert!(hero.slowed);

    let mut vehicle = Player::new(100.0, 100.0);
    assert!(vehicle.refit_within(Mode::Vehicle, &[]));
    hazards::run(&mut world, &mut vehicle, &mut rng, &mut events, &mut buffer);
    assert!(!vehicle.slowed);
    assert_eq!(vehicle.health, vehicle.max_health);
}

#[test]
fn test_sticky_trail_dries_up() {
    let mut world = World::new();
    let trail = world_setup::spawn_sticky_trail(&mut world, 1000.0, 640.0);
    world.get::<&mut StickyTrail>(trail).unwrap().lifetime = 2;
    let mut player = Player::new(100.0, 100.0);
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut buffer = Vec::new();

    hazards::run(&mut world, &mut player, &mut rng, &mut Vec::new(), &mut buffer);
    assert!(world.contains(trail));
    hazards::run(&mut world, &mut player, &mut rng, &mut Vec::new(), &mut buffer);
    assert!(!world.contains(trail));
}

#[test]
fn test_slowed_player_moves_slower() {
    let floor = [Aabb::new(0.0, FLOOR_Y, 2000.0, 64.0)];
    let mut player = Player::new(100.0, 550.0);
    player.slowed = true;
    player.update(&InputFrame::right(), &floor, 0.0);
    assert!((player.rect().x - (100.0 + 6.0 * 0.3)).abs() < 1e-9);
    assert!(!player.slowed);

    player.update(&InputFrame::right(), &floor, 0.0);
    assert!((player.rect().x - (100.0 + 6.0 * 1.3)).abs() < 1e-9);
}

// ---- Level ingestion ----

#[test]
fn test_level_parse_diagnostics() {
    let layout = level::parse_grid(&["X?X", "XX"]).unwrap();
    assert_eq!(layout.platforms.len(), 4);
    assert!(layout.diagnostics.contains(&LevelDiagnostic::UnknownGlyph {
        glyph: '?',
        row: 0,
        column: 1
    }));
    assert!(layout.diagnostics.contains(&LevelDiagnostic::RaggedRow {
        row: 1,
        len: 2,
        expected: 3
    }));
}

#[test]
fn test_level_parse_empty_grid() {
    let empty: [&str; 0] = [];
    assert_eq!(level::parse_grid(&empty).unwrap_err(), LevelError::EmptyGrid);
    assert_eq!(level::parse_grid(&[""]).unwrap_err(), LevelError::EmptyGrid);
}

#[test]
fn test_level_parse_spawn_positions() {
    let layout = level::parse_grid(&["..D.D", "N.W.R"]).unwrap();
    assert_eq!(
        layout.spawns,
        vec![
            Spawn::Boss {
                x: 128.0 - 125.0,
                y: -150.0
            },
            Spawn::Enemy {
                archetype: EnemyArchetype::Snail,
                x: 0.0,
                y: 64.0
            },
            Spawn::Powerup {
                kind: PowerupKind::Weapon,
                x: 140.0,
                y: 76.0
            },
        ]
    );
    assert_eq!(
        layout.diagnostics,
        vec![LevelDiagnostic::DuplicateBoss { row: 0, column: 4 }]
    );
    assert!(matches!(
        layout.platforms[0].kind,
        PlatformKind::Breakable { hits_remaining: 3 }
    ));
}

#[test]
fn test_builtin_levels_parse_cleanly() {
    let levels = levels::builtin();
    assert_eq!(levels.len(), 5);
    assert_eq!(SimulationEngine::new(SimConfig::default()).level_count(), 5);
    for (index, rows) in levels.iter().enumerate() {
        let layout = level::build(index, rows).unwrap();
        assert!(layout.diagnostics.is_empty(), "level {index}");
        assert_eq!(layout.has_boss(), index == 4, "level {index}");
    }
}

#[test]
fn test_unknown_level_rejected() {
    let mut engine = SimulationEngine::with_levels(SimConfig::default(), vec![flat_level(&[])]);
    assert_eq!(engine.level_count(), 1);
    assert_eq!(
        engine.start_run(3),
        Err(LevelError::UnknownLevel {
            index: 3,
            available: 1
        })
    );
    assert_eq!(engine.phase(), GamePhase::Menu);
}

// ---- Lifecycle ----

#[test]
fn test_start_run_phase_and_snapshot() {
    let mut engine = engine_on(vec![flat_level(&[(20, 'N'), (30, 'W')])]);
    let snap = engine.tick(&InputFrame::IDLE);

    assert_eq!(snap.phase, GamePhase::Playing);
    assert_eq!(snap.lives, 3);
    assert_eq!(snap.score, 0);
    assert_eq!(snap.enemies.len(), 1);
    assert_eq!(snap.powerups.len(), 1);
    assert_eq!(snap.platforms.len(), WIDTH);
    assert!(snap.boss.is_none());
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::LevelStarted { level: 0 })));
}

#[test]
fn test_menu_does_not_simulate() {
    let mut engine = SimulationEngine::with_levels(SimConfig::default(), vec![flat_level(&[])]);
    let snap = engine.tick(&InputFrame::right());
    assert_eq!(snap.phase, GamePhase::Menu);
    assert_eq!(snap.time.tick, 0);
}

#[test]
fn test_pause_stops_simulation() {
    let mut engine = engine_on(vec![flat_level(&[])]);
    settle(&mut engine, 60);

    let snap = engine.tick(&InputFrame {
        pause: true,
        ..InputFrame::IDLE
    });
    assert_eq!(snap.phase, GamePhase::Paused);
    let x = engine.player().rect().x;
    let tick = engine.time().tick;

    for _ in 0..10 {
        engine.tick(&InputFrame::right());
    }
    assert_eq!(engine.player().rect().x, x);
    assert_eq!(engine.time().tick, tick);

    let snap = engine.tick(&InputFrame {
        pause: true,
        ..InputFrame::IDLE
    });
    assert_eq!(snap.phase, GamePhase::Playing);

    engine.queue_command(HostCommand::Pause);
    assert_eq!(engine.tick(&InputFrame::IDLE).phase, GamePhase::Paused);
    engine.queue_command(HostCommand::Resume);
    engine.tick(&InputFrame::right());
    assert_eq!(engine.phase(), GamePhase::Playing);
    assert!(engine.player().rect().x > x);
}

#[test]
fn test_pause_during_transform_resumes_transform() {
    let mut engine = engine_on(vec![flat_level(&[])]);
    settle(&mut engine, 60);
    engine.tick(&InputFrame::transform());

    engine.queue_command(HostCommand::Pause);
    assert_eq!(engine.tick(&InputFrame::IDLE).phase, GamePhase::Paused);
    engine.queue_command(HostCommand::Resume);
    assert_eq!(engine.tick(&InputFrame::IDLE).phase, GamePhase::Transforming);
}

#[test]
fn test_reset_restores_level_content() {
    let mut engine = SimulationEngine::with_levels(
        SimConfig::default(),
        vec![flat_level(&[(20, 'N'), (40, 'N'), (60, 'N')])],
    );
    engine.start_run(0).unwrap();

    let positions = |engine: &SimulationEngine| {
        let mut found: Vec<(f64, f64)> = engine
            .world()
            .query::<(&Enemy, &Body)>()
            .iter()
            .map(|(_, (_, body))| (body.rect.x, body.rect.y))
            .collect();
        found.sort_by(|a, b| a.partial_cmp(b).unwrap());
        found
    };
    let initial = positions(&engine);
    assert_eq!(initial.len(), 3);

    settle(&mut engine, 100);
    assert_ne!(positions(&engine), initial);

    engine.start_run(0).unwrap();
    assert_eq!(positions(&engine), initial);
    engine.start_run(0).unwrap();
    assert_eq!(positions(&engine), initial);
}

#[test]
fn test_death_rebuilds_level_and_keeps_score() {
    // Floor pit at columns 8..11 (x 512..704).
    let mut rows = flat_level(&[(15, 'N'), (30, 'W')]);
    paint(&mut rows, 10, 8..11, '.');
    let mut engine = engine_on(vec![rows]);
    settle(&mut engine, 30);
    let start_enemies = count::<Enemy>(engine.world());
    let start_powerups = count::<Powerup>(engine.world());
    assert_eq!((start_enemies, start_powerups), (1, 1));

    engine.tick(&InputFrame::transform());
    settle(&mut engine, 29);
    assert_eq!(engine.player().mode, Mode::Vehicle);
    engine.player_mut().has_weapon = true;

    let run_and_gun = InputFrame {
        right: true,
        fire: true,
        ..InputFrame::IDLE
    };
    let mut score_before = 0;
    let mut death = None;
    for _ in 0..300 {
        let snap = engine.tick(&run_and_gun);
        if snap
            .events
            .iter()
            .any(|e| matches!(e, GameEvent::LifeLost { .. }))
        {
            death = Some(snap);
            break;
        }
        score_before = snap.score;
    }
    let snap = death.expect("fell into the pit");

    assert!(score_before > 0, "shots were scored before the fall");
    assert_eq!(snap.score, score_before);
    assert_eq!(snap.lives, 2);
    assert_eq!(snap.phase, GamePhase::Playing);
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::LevelStarted { level: 0 })));

    assert_eq!(snap.player.mode, Mode::Hero);
    assert!(!engine.transformer().is_active());
    let player = engine.player();
    assert_eq!((player.rect().x, player.rect().y), (200.0, 420.0));
    assert_eq!(player.health, player.max_health);
    assert!(!player.has_weapon);
    assert!(!player.dead);

    assert!(snap.projectiles.is_empty());
    assert!(snap.particles.is_empty());
    assert_eq!(count::<Projectile>(engine.world()), 0);
    assert_eq!(count::<Enemy>(engine.world()), start_enemies);
    assert_eq!(count::<Powerup>(engine.world()), start_powerups);
}

#[test]
fn test_respawn_in_place_keeps_lives() {
    let mut engine = engine_on(vec![flat_level(&[])]);
    settle(&mut engine, 30);
    engine.player_mut().has_weapon = true;
    engine.tick(&InputFrame::fire());
    assert_eq!(count::<Projectile>(engine.world()), 1);

    engine.queue_command(HostCommand::RespawnInPlace);
    let snap = engine.tick(&InputFrame::IDLE);

    assert_eq!(snap.lives, 3);
    assert!(snap.projectiles.is_empty());
    assert!(!engine.player().has_weapon);
    assert_eq!(engine.player().rect().x, 200.0);
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::LevelStarted { level: 0 })));
}

#[test]
fn test_falling_costs_lives_then_game_over() {
    let empty = vec![".".repeat(WIDTH); 12];
    let mut engine = SimulationEngine::with_levels(
        SimConfig {
            starting_lives: 2,
            ..Default::default()
        },
        vec![empty],
    );
    engine.queue_command(HostCommand::StartRun { level: 0 });

    let mut lives_lost = 0;
    let mut game_overs = 0;
    for _ in 0..200 {
        let snap = engine.tick(&InputFrame::IDLE);
        for event in &snap.events {
            match event {
                GameEvent::LifeLost { .. } => lives_lost += 1,
                GameEvent::GameOver { .. } => game_overs += 1,
                _ => {}
            }
        }
    }

    assert_eq!(engine.phase(), GamePhase::GameOver);
    assert_eq!(engine.lives(), 0);
    assert_eq!(lives_lost, 2);
    assert_eq!(game_overs, 1);

    // A new run starts over.
    engine.queue_command(HostCommand::StartRun { level: 0 });
    let snap = engine.tick(&InputFrame::IDLE);
    assert_eq!(snap.phase, GamePhase::Playing);
    assert_eq!(snap.lives, 2);
}

#[test]
fn test_goal_completes_level_then_mission() {
    let mut engine = engine_on(vec![flat_level(&[]), flat_level(&[])]);

    let mut completed = false;
    for _ in 0..3000 {
        let snap = engine.tick(&InputFrame::right());
        if snap.phase == GamePhase::LevelComplete {
            assert!(snap.events.contains(&GameEvent::LevelComplete {
                level: 0,
                bonus: 1000
            }));
            completed = true;
            break;
        }
    }
    assert!(completed, "walking right reaches the goal");
    assert_eq!(engine.score(), 1000);

    engine.queue_command(HostCommand::AdvanceLevel);
    let snap = engine.tick(&InputFrame::IDLE);
    assert_eq!(snap.phase, GamePhase::Playing);
    assert_eq!(snap.level, 1);
    assert_eq!(snap.score, 1000);

    // Moving platforms hang at hero head height; drive under them.
    engine.tick(&InputFrame::transform());
    settle(&mut engine, 29);
    assert_eq!(engine.player().mode, Mode::Vehicle);

    for _ in 0..3000 {
        if engine.tick(&InputFrame::right()).phase == GamePhase::LevelComplete {
            break;
        }
    }
    assert_eq!(engine.score(), 3000);

    engine.queue_command(HostCommand::AdvanceLevel);
    let snap = engine.tick(&InputFrame::IDLE);
    assert_eq!(snap.phase, GamePhase::MissionComplete);
    assert!(snap
        .events
        .contains(&GameEvent::MissionComplete { score: 3000 }));
}

#[test]
fn test_living_boss_blocks_goal() {
    let mut rows = flat_level(&[]);
    let mut top: Vec<char> = rows[2].chars().collect();
    top[130] = 'D';
    rows[2] = top.into_iter().collect();

    let mut engine = SimulationEngine::with_levels(SimConfig::default(), vec![rows]);
    engine.start_run(0).unwrap();
    for (_, boss_state) in engine.world_mut().query_mut::<&mut Boss>() {
        boss_state.attack_timer = u32::MAX;
    }

    for _ in 0..3000 {
        engine.tick(&InputFrame::right());
    }
    assert_eq!(engine.phase(), GamePhase::Playing);
    assert!(engine.player().rect().center_x() > level::goal_x());

    for (_, boss_state) in engine.world_mut().query_mut::<&mut Boss>() {
        boss_state.health = 0;
    }
    let snap = engine.tick(&InputFrame::right());
    assert_eq!(snap.phase, GamePhase::LevelComplete);
}

#[test]
fn test_return_to_menu_clears_world() {
    let mut engine = engine_on(vec![flat_level(&[(20, 'N')])]);
    settle(&mut engine, 5);

    engine.queue_command(HostCommand::ReturnToMenu);
    let snap = engine.tick(&InputFrame::IDLE);
    assert_eq!(snap.phase, GamePhase::Menu);
    assert!(snap.enemies.is_empty());
    assert!(snap.platforms.is_empty());
}
