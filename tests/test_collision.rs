use side_scroller::collision::{resolve, CollisionReport};
use side_scroller::config::{GameConfig, FOX_ADVENTURE, TANK_BATTLE};
use side_scroller::entities::*;
use side_scroller::level::Level;

fn empty_level() -> Level {
    Level {
        index: 1,
        enemies: Vec::new(),
        collectibles: Vec::new(),
    }
}

fn player_for(config: &GameConfig) -> Player {
    Player::spawn(&config.player, config.ground_y)
}

fn enemy(config: &GameConfig, kind: EnemyKind, x: f32) -> Enemy {
    Enemy::spawn(config.enemy(kind).unwrap(), x, config.ground_y)
}

/// A shot of `owner` sitting in the middle of `target`.
fn shot_into(config: &GameConfig, target: &Rect, owner: Owner) -> Projectile {
    let shot = match owner {
        Owner::Player => config.player.shot,
        Owner::Enemy => config.roster[0].fire.shot,
    };
    Projectile::fire(target.center_x(), target.center_y(), Facing::Right, &shot, owner)
}

// ── Player shots ──────────────────────────────────────────────────────────────

#[test]
fn two_hits_kill_a_soldier_and_score_once() {
    let cfg = &FOX_ADVENTURE;
    let mut player = player_for(cfg);
    let mut level = empty_level();
    level.enemies.push(enemy(cfg, EnemyKind::Soldier, 500.0));
    let target = level.enemies[0].rect;

    let mut shots = vec![shot_into(cfg, &target, Owner::Player)];
    let first = resolve(&mut player, &mut level, &mut shots, &cfg.pickups);
    assert!(first.kills.is_empty());
    assert_eq!(first.score, 0);
    assert_eq!(level.enemies[0].health, 25);
    assert!(shots.is_empty());

    let mut shots = vec![shot_into(cfg, &target, Owner::Player)];
    let second = resolve(&mut player, &mut level, &mut shots, &cfg.pickups);
    assert_eq!(second.kills, vec![EnemyKind::Soldier]);
    assert_eq!(second.score, 100);
    assert!(!level.enemies[0].alive);

    // Dead enemies no longer absorb shots
    let mut shots = vec![shot_into(cfg, &target, Owner::Player)];
    let third = resolve(&mut player, &mut level, &mut shots, &cfg.pickups);
    assert!(third.kills.is_empty());
    assert_eq!(third.score, 0);
    assert_eq!(shots.len(), 1);
}

#[test]
fn one_shot_damages_only_one_enemy() {
    let cfg = &TANK_BATTLE;
    let mut player = player_for(cfg);
    let mut level = empty_level();
    level.enemies.push(enemy(cfg, EnemyKind::Basic, 800.0));
    level.enemies.push(enemy(cfg, EnemyKind::Basic, 800.0));
    let target = level.enemies[0].rect;

    let mut shots = vec![shot_into(cfg, &target, Owner::Player)];
    resolve(&mut player, &mut level, &mut shots, &cfg.pickups);
    assert_eq!(level.enemies[0].health, 1);
    assert_eq!(level.enemies[1].health, 2);
    assert!(shots.is_empty());
}

#[test]
fn tank_bounties_follow_enemy_kind() {
    let cfg = &TANK_BATTLE;
    let mut player = player_for(cfg);
    let mut level = empty_level();
    level.enemies.push(enemy(cfg, EnemyKind::Heavy, 800.0));
    level.enemies[0].health = 1;
    let target = level.enemies[0].rect;

    let mut shots = vec![shot_into(cfg, &target, Owner::Player)];
    let report = resolve(&mut player, &mut level, &mut shots, &cfg.pickups);
    assert_eq!(report.kills, vec![EnemyKind::Heavy]);
    assert_eq!(report.score, 100);
}

#[test]
fn shots_that_miss_are_kept() {
    let cfg = &TANK_BATTLE;
    let mut player = player_for(cfg);
    let mut level = empty_level();
    level.enemies.push(enemy(cfg, EnemyKind::Basic, 800.0));

    let mut shots = vec![Projectile::fire(400.0, 100.0, Facing::Right, &cfg.player.shot, Owner::Player)];
    let report = resolve(&mut player, &mut level, &mut shots, &cfg.pickups);
    assert_eq!(report, CollisionReport::default());
    assert_eq!(shots.len(), 1);
}

// ── Enemy shots & contact ─────────────────────────────────────────────────────

#[test]
fn enemy_shot_hurts_player_and_is_consumed() {
    let cfg = &TANK_BATTLE;
    let mut player = player_for(cfg);
    let mut level = empty_level();
    let mut shots = vec![shot_into(cfg, &player.rect, Owner::Enemy)];

    let report = resolve(&mut player, &mut level, &mut shots, &cfg.pickups);
    assert_eq!(player.health, 4);
    assert_eq!(report.player_hits, 1);
    assert!(shots.is_empty());
}

#[test]
fn player_shot_never_hurts_player() {
    let cfg = &TANK_BATTLE;
    let mut player = player_for(cfg);
    let mut level = empty_level();
    let mut shots = vec![shot_into(cfg, &player.rect, Owner::Player)];

    resolve(&mut player, &mut level, &mut shots, &cfg.pickups);
    assert_eq!(player.health, 5);
    assert_eq!(shots.len(), 1);
}

#[test]
fn fox_contact_damage_respects_invulnerability() {
    let cfg = &FOX_ADVENTURE;
    let mut player = player_for(cfg);
    let mut level = empty_level();
    level.enemies.push(enemy(cfg, EnemyKind::Soldier, 110.0));

    let first = resolve(&mut player, &mut level, &mut Vec::new(), &cfg.pickups);
    assert_eq!(player.health, 80);
    assert_eq!(first.player_hits, 1);

    resolve(&mut player, &mut level, &mut Vec::new(), &cfg.pickups);
    assert_eq!(player.health, 80);
}

#[test]
fn tank_enemies_are_harmless_to_touch() {
    let cfg = &TANK_BATTLE;
    let mut player = player_for(cfg);
    let mut level = empty_level();
    level.enemies.push(enemy(cfg, EnemyKind::Basic, 110.0));

    let report = resolve(&mut player, &mut level, &mut Vec::new(), &cfg.pickups);
    assert_eq!(player.health, 5);
    assert_eq!(report.player_hits, 0);
}

#[test]
fn lethal_hit_reports_lost_life() {
    let cfg = &FOX_ADVENTURE;
    let mut player = player_for(cfg);
    player.lives = 1;
    player.health = 10;
    let mut level = empty_level();
    let mut shots = vec![shot_into(cfg, &player.rect, Owner::Enemy)];

    let report = resolve(&mut player, &mut level, &mut shots, &cfg.pickups);
    assert_eq!(report.lives_lost, 1);
    assert!(!player.alive);
    assert_eq!(player.health, 0);
    assert_eq!(player.lives, 0);
}

// ── Collectibles ──────────────────────────────────────────────────────────────

#[test]
fn health_pickup_applies_once() {
    let cfg = &FOX_ADVENTURE;
    let mut player = player_for(cfg);
    player.health = 50;
    let mut level = empty_level();
    level.collectibles.push(Collectible::new(
        player.rect.x,
        player.rect.y,
        CollectibleKind::Health,
        &cfg.pickups,
    ));

    let first = resolve(&mut player, &mut level, &mut Vec::new(), &cfg.pickups);
    assert_eq!(first.pickups, vec![CollectibleKind::Health]);
    for _ in 0..5 {
        let again = resolve(&mut player, &mut level, &mut Vec::new(), &cfg.pickups);
        assert!(again.pickups.is_empty());
    }
    assert_eq!(player.health, 75);
    assert!(level.collectibles[0].collected);
}

#[test]
fn score_and_life_pickups() {
    let cfg = &TANK_BATTLE;
    let mut player = player_for(cfg);
    let mut level = empty_level();
    for kind in [CollectibleKind::Score, CollectibleKind::ExtraLife] {
        level.collectibles.push(Collectible::new(
            player.rect.x,
            player.rect.y,
            kind,
            &cfg.pickups,
        ));
    }

    let first = resolve(&mut player, &mut level, &mut Vec::new(), &cfg.pickups);
    assert_eq!(first.score, 100);
    assert_eq!(player.lives, 4);

    let second = resolve(&mut player, &mut level, &mut Vec::new(), &cfg.pickups);
    assert_eq!(second.score, 0);
    assert_eq!(player.lives, 4);
}
