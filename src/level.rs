/// Level layouts.
///
/// Tank Battle places everything at fixed positions.  Fox Adventure
/// scatters its collectibles, using an RNG seeded from the level index so a
/// given level always looks the same.
use log::warn;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::config::{GameConfig, Variant};
use crate::entities::{Collectible, CollectibleKind, Enemy, EnemyKind};

use crate::entities::CollectibleKind::{ExtraLife, Health, Score};

/// Collectibles in Tank Battle cycle through this order.
const TANK_PICKUP_CYCLE: [CollectibleKind; 3] = [Health, Score, ExtraLife];

static FOX_FOREST_PICKUPS: [CollectibleKind; 4] = [Health, Score, Score, Score];
static FOX_DESERT_PICKUPS: [CollectibleKind; 4] = [Health, ExtraLife, Score, Score];
static FOX_BOSS_PICKUPS: [CollectibleKind; 3] = [Health, ExtraLife, Score];

/// Seed base for Fox Adventure scatter; mixed with the level index.
const FOX_SEED: u64 = 0xF0C5_2024;

#[derive(Clone, Debug)]
pub struct Level {
    pub index: u32,
    pub enemies: Vec<Enemy>,
    pub collectibles: Vec<Collectible>,
}

impl Level {
    /// Build level `index` (1-based).  Indices past the final level reuse
    /// the final layout.
    pub fn generate(variant: Variant, index: u32) -> Level {
        let config = variant.config();
        let index = index.clamp(1, config.final_level);
        let mut level = Level {
            index,
            enemies: Vec::new(),
            collectibles: Vec::new(),
        };
        match variant {
            Variant::TankBattle => level.fill_tank(config),
            Variant::FoxAdventure => level.fill_fox(config),
        }
        level
    }

    pub fn is_final(&self, config: &GameConfig) -> bool {
        self.index >= config.final_level
    }

    pub fn enemies_alive(&self) -> usize {
        self.enemies.iter().filter(|e| e.alive).count()
    }

    /// True once every enemy has been destroyed.
    pub fn is_cleared(&self) -> bool {
        self.enemies.iter().all(|e| !e.alive)
    }

    fn add_enemy(&mut self, config: &GameConfig, kind: EnemyKind, x: f32) {
        match config.enemy(kind) {
            Some(stats) => self.enemies.push(Enemy::spawn(stats, x, config.ground_y)),
            None => warn!("{} has no {} enemy; skipped", config.title, kind.label()),
        }
    }

    fn add_collectible(&mut self, config: &GameConfig, kind: CollectibleKind, x: f32, y: f32) {
        self.collectibles.push(Collectible::new(x, y, kind, &config.pickups));
    }

    fn fill_tank(&mut self, config: &GameConfig) {
        let pickup_y = config.screen_height - 150.0;
        let (enemies, pickups): (Vec<(EnemyKind, f32)>, Vec<f32>) = match self.index {
            1 => (
                (0..5).map(|i| (EnemyKind::Basic, 800.0 + i as f32 * 300.0)).collect(),
                (0..3).map(|i| 600.0 + i as f32 * 400.0).collect(),
            ),
            2 => (
                (0..3)
                    .map(|i| (EnemyKind::Basic, 800.0 + i as f32 * 400.0))
                    .chain((0..2).map(|i| (EnemyKind::Heavy, 1000.0 + i as f32 * 500.0)))
                    .collect(),
                (0..4).map(|i| 700.0 + i as f32 * 300.0).collect(),
            ),
            _ => (
                (0..4)
                    .map(|i| {
                        let kind = if i % 2 == 0 { EnemyKind::Heavy } else { EnemyKind::Basic };
                        (kind, 800.0 + i as f32 * 350.0)
                    })
                    .chain(std::iter::once((EnemyKind::Boss, 2000.0)))
                    .collect(),
                (0..5).map(|i| 600.0 + i as f32 * 350.0).collect(),
            ),
        };

        for (kind, x) in enemies {
            self.add_enemy(config, kind, x);
        }
        for (i, x) in pickups.into_iter().enumerate() {
            let kind = TANK_PICKUP_CYCLE[i % TANK_PICKUP_CYCLE.len()];
            self.add_collectible(config, kind, x, pickup_y);
        }
    }

    fn fill_fox(&mut self, config: &GameConfig) {
        let width = config.level_width.unwrap_or(config.screen_width);
        let ground = config.ground_y;
        let mut rng = StdRng::seed_from_u64(FOX_SEED ^ u64::from(self.index));

        let (kinds, count, max_x): (&[CollectibleKind], usize, f32) = match self.index {
            1 => {
                for i in 0..5 {
                    self.add_enemy(config, EnemyKind::Soldier, 300.0 + i as f32 * 200.0);
                }
                (&FOX_FOREST_PICKUPS[..], 8, width - 200.0)
            }
            2 => {
                for i in 0..7 {
                    self.add_enemy(config, EnemyKind::Soldier, 250.0 + i as f32 * 180.0);
                }
                (&FOX_DESERT_PICKUPS[..], 10, width - 200.0)
            }
            _ => {
                self.add_enemy(config, EnemyKind::Boss, width - 300.0);
                for i in 0..3 {
                    self.add_enemy(config, EnemyKind::Soldier, 400.0 + i as f32 * 200.0);
                }
                (&FOX_BOSS_PICKUPS[..], 12, width - 400.0)
            }
        };

        for _ in 0..count {
            let x = rng.gen_range(200.0..=max_x).round();
            let y = rng.gen_range((ground - 200.0)..=(ground - 50.0)).round();
            let kind = *kinds.choose(&mut rng).unwrap_or(&Score);
            self.add_collectible(config, kind, x, y);
        }
    }
}
