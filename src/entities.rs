/// Game entity types and their per-tick behaviour.
///
/// Each entity owns its own update and damage rules; the cross-entity work
/// (collisions, scoring, level flow) lives in `compute` and `game`.
use std::f32::consts::TAU;

use rand::Rng;

use crate::config::{Aim, Behaviour, EnemyStats, PickupConfig, PlayerConfig, ShotConfig};
use crate::input::Controls;

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned bounding box in world pixels, y growing downward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Rect { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.w / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.h / 2.0
    }

    /// Strict overlap: rectangles that only share an edge do not touch.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    pub fn translated(&self, dx: f32, dy: f32) -> Rect {
        Rect { x: self.x + dx, y: self.y + dy, ..*self }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }

    fn toward(from: f32, to: f32) -> Facing {
        if to < from {
            Facing::Left
        } else {
            Facing::Right
        }
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Owner {
    Player,
    Enemy,
}

#[derive(Clone, Debug)]
pub struct Projectile {
    pub rect: Rect,
    pub direction: Facing,
    pub speed: f32,
    pub damage: i32,
    pub owner: Owner,
}

impl Projectile {
    /// Spawn a shot whose top-left corner sits at `(x, y)`.
    pub fn fire(x: f32, y: f32, direction: Facing, shot: &ShotConfig, owner: Owner) -> Self {
        Projectile {
            rect: Rect::new(x, y, shot.width, shot.height),
            direction,
            speed: shot.speed,
            damage: shot.damage,
            owner,
        }
    }

    pub fn update(&mut self) {
        self.rect.x += self.direction.sign() * self.speed;
    }

    pub fn in_bounds(&self, (min_x, max_x): (f32, f32)) -> bool {
        self.rect.x >= min_x && self.rect.x <= max_x
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Player {
    pub rect: Rect,
    pub vx: f32,
    pub vy: f32,
    pub on_ground: bool,
    pub health: i32,
    pub max_health: i32,
    pub lives: u32,
    pub facing: Facing,
    /// Ticks until the next shot is allowed.
    pub shoot_cooldown: u32,
    /// Ticks of remaining damage immunity.
    pub invulnerable: u32,
    pub alive: bool,
    pub config: PlayerConfig,
}

impl Player {
    /// A fresh player standing on the ground at the configured spawn point.
    pub fn spawn(config: &PlayerConfig, ground_y: f32) -> Self {
        Player {
            rect: Rect::new(
                config.spawn_x,
                ground_y - config.height,
                config.width,
                config.height,
            ),
            vx: 0.0,
            vy: 0.0,
            on_ground: true,
            health: config.max_health,
            max_health: config.max_health,
            lives: config.lives,
            facing: Facing::Right,
            shoot_cooldown: 0,
            invulnerable: 0,
            alive: true,
            config: *config,
        }
    }

    /// Advance one tick: movement, gravity, ground/edge clamping, timers and
    /// shooting.  Returns the shot fired this tick, if any.
    pub fn update(
        &mut self,
        controls: &Controls,
        ground_y: f32,
        level_width: Option<f32>,
    ) -> Option<Projectile> {
        if !self.alive {
            return None;
        }
        let cfg = self.config;

        // Horizontal: opposite keys cancel out
        let mut dir = 0.0;
        if controls.left {
            dir -= 1.0;
        }
        if controls.right {
            dir += 1.0;
        }
        self.vx = dir * cfg.speed;
        if dir < 0.0 {
            self.facing = Facing::Left;
        } else if dir > 0.0 {
            self.facing = Facing::Right;
        }

        if controls.jump && self.on_ground {
            self.vy = -cfg.jump_speed;
            self.on_ground = false;
        }

        self.vy += cfg.gravity;
        self.rect.x += self.vx;
        self.rect.y += self.vy;

        if self.rect.bottom() >= ground_y {
            self.rect.y = ground_y - self.rect.h;
            self.vy = 0.0;
            self.on_ground = true;
        }

        if self.rect.x < 0.0 {
            self.rect.x = 0.0;
        }
        if let Some(width) = level_width {
            if self.rect.right() > width {
                self.rect.x = width - self.rect.w;
            }
        }

        self.invulnerable = self.invulnerable.saturating_sub(1);
        self.shoot_cooldown = self.shoot_cooldown.saturating_sub(1);

        if controls.shoot && self.shoot_cooldown == 0 {
            self.shoot_cooldown = cfg.shoot_cooldown;
            return Some(self.muzzle_shot());
        }
        None
    }

    fn muzzle_shot(&self) -> Projectile {
        let shot = &self.config.shot;
        match self.config.aim {
            Aim::Forward => Projectile::fire(
                self.rect.right(),
                self.rect.center_y(),
                Facing::Right,
                shot,
                Owner::Player,
            ),
            Aim::Facing => Projectile::fire(
                self.rect.center_x(),
                self.rect.center_y(),
                self.facing,
                shot,
                Owner::Player,
            ),
        }
    }

    /// Apply damage.  Losing all health costs a life and refills health if
    /// any lives remain.  Returns `true` only when the last life is lost.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        if !self.alive || self.invulnerable > 0 {
            return false;
        }
        self.health -= amount;
        self.invulnerable = self.config.invulnerability;
        if self.health > 0 {
            return false;
        }
        self.lives = self.lives.saturating_sub(1);
        if self.lives > 0 {
            self.health = self.max_health;
            false
        } else {
            self.health = 0;
            self.alive = false;
            true
        }
    }

    pub fn heal(&mut self, amount: i32) {
        self.health = (self.health + amount).min(self.max_health);
    }

    pub fn add_life(&mut self) {
        self.lives += 1;
    }

    /// Put the player back at the spawn x, keeping health, lives and height.
    pub fn return_to_spawn(&mut self) {
        self.rect.x = self.config.spawn_x;
        self.vx = 0.0;
    }
}

// ── Enemies ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EnemyKind {
    Basic,
    Heavy,
    Soldier,
    Boss,
}

impl EnemyKind {
    pub fn label(self) -> &'static str {
        match self {
            EnemyKind::Basic => "basic",
            EnemyKind::Heavy => "heavy",
            EnemyKind::Soldier => "soldier",
            EnemyKind::Boss => "boss",
        }
    }
}

/// What an enemy is doing this tick, derived from its distance to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AiMode {
    Patrol,
    Chase,
}

#[derive(Clone, Debug)]
pub struct Enemy {
    pub rect: Rect,
    pub kind: EnemyKind,
    pub health: i32,
    pub max_health: i32,
    pub direction: Facing,
    pub spawn_x: f32,
    pub mode: AiMode,
    pub shoot_cooldown: u32,
    pub alive: bool,
    pub stats: EnemyStats,
}

impl Enemy {
    /// Place an enemy with its feet on the ground line, facing left.
    pub fn spawn(stats: &EnemyStats, x: f32, ground_y: f32) -> Self {
        Enemy {
            rect: Rect::new(x, ground_y - stats.height, stats.width, stats.height),
            kind: stats.kind,
            health: stats.max_health,
            max_health: stats.max_health,
            direction: Facing::Left,
            spawn_x: x,
            mode: AiMode::Patrol,
            shoot_cooldown: 0,
            alive: true,
            stats: *stats,
        }
    }

    /// Move and maybe shoot.  Shots are aimed at the player's current x.
    pub fn update(&mut self, player: &Rect, rng: &mut impl Rng) -> Option<Projectile> {
        if !self.alive {
            return None;
        }
        let distance = (self.rect.x - player.x).abs();

        match self.stats.behaviour {
            Behaviour::Stationary => {}
            Behaviour::Wander { reverse_chance, range } => {
                self.rect.x += self.direction.sign() * self.stats.speed;
                let from_spawn = self.rect.x - self.spawn_x;
                if from_spawn > range {
                    self.direction = Facing::Left;
                } else if from_spawn < -range {
                    self.direction = Facing::Right;
                } else if rng.gen_bool(reverse_chance) {
                    self.direction = match self.direction {
                        Facing::Left => Facing::Right,
                        Facing::Right => Facing::Left,
                    };
                }
            }
            Behaviour::PatrolChase { chase_radius, patrol_range } => {
                if distance < chase_radius {
                    self.mode = AiMode::Chase;
                    self.direction = Facing::toward(self.rect.x, player.x);
                } else {
                    self.mode = AiMode::Patrol;
                    let from_spawn = self.rect.x - self.spawn_x;
                    if from_spawn > patrol_range {
                        self.direction = Facing::Left;
                    } else if from_spawn < -patrol_range {
                        self.direction = Facing::Right;
                    }
                }
                self.rect.x += self.direction.sign() * self.stats.speed;
            }
        }

        if self.shoot_cooldown > 0 {
            self.shoot_cooldown -= 1;
            return None;
        }
        let fire = &self.stats.fire;
        if distance < fire.range && rng.gen_bool(fire.chance) {
            self.shoot_cooldown = fire.cooldown;
            return Some(Projectile::fire(
                self.rect.center_x(),
                self.rect.center_y(),
                Facing::toward(self.rect.center_x(), player.center_x()),
                &fire.shot,
                Owner::Enemy,
            ));
        }
        None
    }

    /// Returns `true` exactly once: on the hit that takes health to zero.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        if !self.alive {
            return false;
        }
        self.health = (self.health - amount).max(0);
        if self.health == 0 {
            self.alive = false;
            return true;
        }
        false
    }

    pub fn health_ratio(&self) -> f32 {
        self.health as f32 / self.max_health as f32
    }
}

// ── Collectibles ──────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CollectibleKind {
    Health,
    ExtraLife,
    Score,
}

#[derive(Clone, Debug)]
pub struct Collectible {
    pub rect: Rect,
    pub kind: CollectibleKind,
    pub collected: bool,
    /// Bobbing animation phase in radians, kept within [0, 2π).
    pub bob_phase: f32,
    bob_speed: f32,
}

impl Collectible {
    pub fn new(x: f32, y: f32, kind: CollectibleKind, pickups: &PickupConfig) -> Self {
        Collectible {
            rect: Rect::new(x, y, pickups.size, pickups.size),
            kind,
            collected: false,
            bob_phase: 0.0,
            bob_speed: pickups.bob_speed,
        }
    }

    pub fn update(&mut self) {
        self.bob_phase = (self.bob_phase + self.bob_speed) % TAU;
    }

    /// Vertical draw offset for the bobbing animation.
    pub fn bob_offset(&self) -> f32 {
        self.bob_phase.sin() * 3.0
    }
}
