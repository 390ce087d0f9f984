/// Per-tick world simulation.
///
/// `World` holds everything that moves during play.  `tick` advances it by
/// one frame; the only side effects go through the injected RNG, so tests can
/// drive it deterministically with a seeded one.
use log::debug;
use rand::Rng;

use crate::camera::Camera;
use crate::collision::{self, CollisionReport};
use crate::config::{GameConfig, Variant};
use crate::entities::{Player, Projectile};
use crate::input::Controls;
use crate::level::Level;

#[derive(Clone, Debug)]
pub struct World {
    pub variant: Variant,
    pub config: &'static GameConfig,
    pub player: Player,
    pub level: Level,
    pub projectiles: Vec<Projectile>,
    pub camera: Camera,
    /// Ticks played on the current level.
    pub frame: u64,
}

impl World {
    /// A fresh run: new player at spawn, level `level_index` loaded.
    pub fn new(variant: Variant, level_index: u32) -> Self {
        let config = variant.config();
        World {
            variant,
            config,
            player: Player::spawn(&config.player, config.ground_y),
            level: Level::generate(variant, level_index),
            projectiles: Vec::new(),
            camera: Camera::new(
                config.camera_lead,
                config.camera_smoothing,
                config.max_camera_offset(),
            ),
            frame: 0,
        }
    }

    /// Swap in level `index`, keeping the player's health, lives and score
    /// but moving them back to the spawn point.
    pub fn load_level(&mut self, index: u32) {
        self.level = Level::generate(self.variant, index);
        self.projectiles.clear();
        self.frame = 0;
        self.player.return_to_spawn();
        self.camera.reset();
        debug!(
            "level {} loaded: {} enemies, {} collectibles",
            self.level.index,
            self.level.enemies.len(),
            self.level.collectibles.len()
        );
    }

    /// Advance the simulation by one frame.
    pub fn tick(&mut self, controls: &Controls, rng: &mut impl Rng) -> CollisionReport {
        self.frame += 1;
        let config = self.config;

        // ── 1. Player ────────────────────────────────────────────────────────
        if let Some(shot) = self
            .player
            .update(controls, config.ground_y, config.level_width)
        {
            self.projectiles.push(shot);
        }

        // ── 2. Camera ────────────────────────────────────────────────────────
        self.camera.update(self.player.rect.center_x());

        // ── 3. Enemies ───────────────────────────────────────────────────────
        let target = self.player.rect;
        for enemy in self.level.enemies.iter_mut() {
            if let Some(shot) = enemy.update(&target, rng) {
                self.projectiles.push(shot);
            }
        }

        // ── 4. Collectibles ──────────────────────────────────────────────────
        for item in self.level.collectibles.iter_mut() {
            item.update();
        }

        // ── 5. Projectiles: move, then drop anything out of bounds ──────────
        for shot in self.projectiles.iter_mut() {
            shot.update();
        }
        self.projectiles
            .retain(|p| p.in_bounds(config.projectile_bounds));

        // ── 6. Collisions ────────────────────────────────────────────────────
        collision::resolve(
            &mut self.player,
            &mut self.level,
            &mut self.projectiles,
            &config.pickups,
        )
    }
}
