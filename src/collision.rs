/// Collision resolution and scoring for one tick.
///
/// Every pair is tested independently.  Spent projectiles are only marked
/// during the scan and compacted once at the end, so a projectile is
/// consumed by at most one hit.
use crate::config::PickupConfig;
use crate::entities::{CollectibleKind, EnemyKind, Owner, Player, Projectile};
use crate::level::Level;

/// What happened during one collision pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CollisionReport {
    /// Enemies destroyed this tick, in scan order.
    pub kills: Vec<EnemyKind>,
    pub pickups: Vec<CollectibleKind>,
    /// Hits that reached the player (including ones absorbed by
    /// invulnerability).
    pub player_hits: u32,
    /// Score earned from kills and score pickups.
    pub score: u32,
    pub lives_lost: u32,
}

pub fn resolve(
    player: &mut Player,
    level: &mut Level,
    projectiles: &mut Vec<Projectile>,
    pickups: &PickupConfig,
) -> CollisionReport {
    let mut report = CollisionReport::default();
    let mut spent = vec![false; projectiles.len()];
    let lives_before = player.lives;

    // ── Player shots ↔ enemies ───────────────────────────────────────────────
    for (i, shot) in projectiles.iter().enumerate() {
        if shot.owner != Owner::Player {
            continue;
        }
        let target = level
            .enemies
            .iter_mut()
            .find(|e| e.alive && shot.rect.intersects(&e.rect));
        if let Some(enemy) = target {
            spent[i] = true;
            if enemy.take_damage(shot.damage) {
                report.kills.push(enemy.kind);
                report.score += enemy.stats.bounty;
            }
        }
    }

    // ── Enemy shots ↔ player ─────────────────────────────────────────────────
    for (i, shot) in projectiles.iter().enumerate() {
        if shot.owner != Owner::Enemy || spent[i] || !player.alive {
            continue;
        }
        if shot.rect.intersects(&player.rect) {
            spent[i] = true;
            report.player_hits += 1;
            player.take_damage(shot.damage);
        }
    }

    // ── Body contact ─────────────────────────────────────────────────────────
    for enemy in &level.enemies {
        if enemy.alive
            && enemy.stats.contact_damage > 0
            && player.alive
            && enemy.rect.intersects(&player.rect)
        {
            report.player_hits += 1;
            player.take_damage(enemy.stats.contact_damage);
        }
    }

    report.lives_lost = lives_before.saturating_sub(player.lives);

    // ── Player ↔ collectibles ────────────────────────────────────────────────
    for item in level.collectibles.iter_mut() {
        if item.collected || !item.rect.intersects(&player.rect) {
            continue;
        }
        item.collected = true;
        report.pickups.push(item.kind);
        match item.kind {
            CollectibleKind::Health => player.heal(pickups.heal),
            CollectibleKind::ExtraLife => player.add_life(),
            CollectibleKind::Score => report.score += pickups.score,
        }
    }

    *projectiles = projectiles
        .drain(..)
        .zip(spent)
        .filter(|(_, used)| !used)
        .map(|(p, _)| p)
        .collect();

    report
}
