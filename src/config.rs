/// Tuning tables for both games.
///
/// Every number the simulation reads lives here, grouped per game so the
/// shared core stays free of variant checks.  Timers are in ticks at
/// `GameConfig::fps`.
use crate::entities::EnemyKind;

// ── Variants ──────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    TankBattle,
    FoxAdventure,
}

impl Variant {
    pub fn config(self) -> &'static GameConfig {
        match self {
            Variant::TankBattle => &TANK_BATTLE,
            Variant::FoxAdventure => &FOX_ADVENTURE,
        }
    }
}

// ── Config types ──────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShotConfig {
    pub speed: f32,
    pub damage: i32,
    pub width: f32,
    pub height: f32,
}

/// Which way the player's gun points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Aim {
    /// Always fires rightward, from the front of the hull.
    Forward,
    /// Fires the way the player last moved, from the body centre.
    Facing,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerConfig {
    pub spawn_x: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub jump_speed: f32,
    pub gravity: f32,
    pub max_health: i32,
    pub lives: u32,
    pub shoot_cooldown: u32,
    /// Ticks of damage immunity after a hit; 0 disables the window.
    pub invulnerability: u32,
    pub aim: Aim,
    pub shot: ShotConfig,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Behaviour {
    /// Drive along the current heading, flipping it at random.  Turns back
    /// once more than `range` from the spawn point, which keeps it where the
    /// player's shots can reach.
    Wander { reverse_chance: f64, range: f32 },
    /// Hold position and only shoot.
    Stationary,
    /// Walk back and forth around the spawn point; chase the player when close.
    PatrolChase { chase_radius: f32, patrol_range: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FireConfig {
    pub cooldown: u32,
    pub range: f32,
    /// Probability of firing on a tick where everything else allows it.
    pub chance: f64,
    pub shot: ShotConfig,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnemyStats {
    pub kind: EnemyKind,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub max_health: i32,
    /// Damage dealt by touching the player; 0 means harmless on contact.
    pub contact_damage: i32,
    /// Score awarded when destroyed.
    pub bounty: u32,
    pub behaviour: Behaviour,
    pub fire: FireConfig,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickupConfig {
    pub size: f32,
    pub heal: i32,
    pub score: u32,
    /// Radians added to the bob phase each tick.
    pub bob_speed: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndScreenKeys {
    /// Enter returns to the menu, R restarts.
    ConfirmToMenu,
    /// Enter restarts, Esc returns to the menu.
    ConfirmRestarts,
}

#[derive(Debug)]
pub struct GameConfig {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub screen_width: f32,
    pub screen_height: f32,
    pub fps: u32,
    /// Y coordinate of the ground line; everything stands on it.
    pub ground_y: f32,
    /// `None` means the world scrolls forever to the right.
    pub level_width: Option<f32>,
    pub final_level: u32,
    pub camera_lead: f32,
    pub camera_smoothing: f32,
    /// Projectiles whose x leaves this range are discarded.
    pub projectile_bounds: (f32, f32),
    pub player: PlayerConfig,
    pub pickups: PickupConfig,
    pub roster: &'static [EnemyStats],
    /// Show a "level complete" screen between levels instead of loading
    /// the next level straight away.
    pub level_complete_screen: bool,
    pub end_screen_keys: EndScreenKeys,
    pub high_score_file: &'static str,
    pub log_file: &'static str,
}

impl GameConfig {
    pub fn enemy(&self, kind: EnemyKind) -> Option<&'static EnemyStats> {
        let roster: &'static [EnemyStats] = self.roster;
        roster.iter().find(|s| s.kind == kind)
    }

    /// Largest camera offset, if the level has a right edge.
    pub fn max_camera_offset(&self) -> Option<f32> {
        self.level_width.map(|w| (w - self.screen_width).max(0.0))
    }
}

// ── Tank Battle ───────────────────────────────────────────────────────────────

const TANK_SCREEN_W: f32 = 1200.0;
const TANK_SCREEN_H: f32 = 800.0;

const TANK_ENEMY_SHOT: ShotConfig = ShotConfig {
    speed: 5.0,
    damage: 1,
    width: 8.0,
    height: 4.0,
};

const TANK_ROSTER: [EnemyStats; 3] = [
    EnemyStats {
        kind: EnemyKind::Basic,
        width: 60.0,
        height: 40.0,
        speed: 1.0,
        max_health: 2,
        contact_damage: 0,
        bounty: 50,
        behaviour: Behaviour::Wander { reverse_chance: 1.0 / 200.0, range: 100.0 },
        fire: FireConfig { cooldown: 120, range: 400.0, chance: 1.0, shot: TANK_ENEMY_SHOT },
    },
    EnemyStats {
        kind: EnemyKind::Heavy,
        width: 60.0,
        height: 40.0,
        speed: 0.5,
        max_health: 4,
        contact_damage: 0,
        bounty: 100,
        behaviour: Behaviour::Wander { reverse_chance: 1.0 / 200.0, range: 100.0 },
        fire: FireConfig { cooldown: 90, range: 400.0, chance: 1.0, shot: TANK_ENEMY_SHOT },
    },
    EnemyStats {
        kind: EnemyKind::Boss,
        width: 100.0,
        height: 60.0,
        speed: 0.0,
        max_health: 10,
        contact_damage: 0,
        bounty: 500,
        behaviour: Behaviour::Stationary,
        fire: FireConfig { cooldown: 90, range: 400.0, chance: 1.0, shot: TANK_ENEMY_SHOT },
    },
];

pub static TANK_BATTLE: GameConfig = GameConfig {
    title: "TANK BATTLE",
    subtitle: "Side-Scrolling Tank Combat",
    screen_width: TANK_SCREEN_W,
    screen_height: TANK_SCREEN_H,
    fps: 60,
    ground_y: TANK_SCREEN_H - 100.0,
    level_width: None,
    final_level: 3,
    camera_lead: TANK_SCREEN_W / 2.0,
    camera_smoothing: 0.1,
    projectile_bounds: (-50.0, TANK_SCREEN_W + 1000.0),
    player: PlayerConfig {
        spawn_x: 100.0,
        width: 50.0,
        height: 35.0,
        speed: 5.0,
        jump_speed: 15.0,
        gravity: 0.8,
        max_health: 5,
        lives: 3,
        shoot_cooldown: 12,
        invulnerability: 0,
        aim: Aim::Forward,
        shot: ShotConfig { speed: 10.0, damage: 1, width: 8.0, height: 4.0 },
    },
    pickups: PickupConfig { size: 20.0, heal: 1, score: 100, bob_speed: 0.2 },
    roster: &TANK_ROSTER,
    level_complete_screen: true,
    end_screen_keys: EndScreenKeys::ConfirmToMenu,
    high_score_file: "high_score.txt",
    log_file: "tank_battle.log",
};

// ── Fox Adventure ─────────────────────────────────────────────────────────────

const FOX_SCREEN_W: f32 = 1024.0;
const FOX_SCREEN_H: f32 = 768.0;
const FOX_LEVEL_W: f32 = 2000.0;

const FOX_ENEMY_SHOT: ShotConfig = ShotConfig {
    speed: 8.0,
    damage: 15,
    width: 6.0,
    height: 3.0,
};

const FOX_ROSTER: [EnemyStats; 2] = [
    EnemyStats {
        kind: EnemyKind::Soldier,
        width: 35.0,
        height: 45.0,
        speed: 2.0,
        max_health: 50,
        contact_damage: 20,
        bounty: 100,
        behaviour: Behaviour::PatrolChase { chase_radius: 200.0, patrol_range: 150.0 },
        fire: FireConfig { cooldown: 60, range: 300.0, chance: 0.02, shot: FOX_ENEMY_SHOT },
    },
    EnemyStats {
        kind: EnemyKind::Boss,
        width: 35.0,
        height: 45.0,
        speed: 1.0,
        max_health: 100,
        contact_damage: 30,
        bounty: 100,
        behaviour: Behaviour::PatrolChase { chase_radius: 200.0, patrol_range: 150.0 },
        fire: FireConfig { cooldown: 60, range: 300.0, chance: 0.02, shot: FOX_ENEMY_SHOT },
    },
];

pub static FOX_ADVENTURE: GameConfig = GameConfig {
    title: "FOX ADVENTURE",
    subtitle: "Run, jump and shoot through three lands",
    screen_width: FOX_SCREEN_W,
    screen_height: FOX_SCREEN_H,
    fps: 60,
    ground_y: FOX_SCREEN_H - 100.0,
    level_width: Some(FOX_LEVEL_W),
    final_level: 3,
    camera_lead: FOX_SCREEN_W / 3.0,
    camera_smoothing: 0.1,
    projectile_bounds: (0.0, FOX_LEVEL_W),
    player: PlayerConfig {
        spawn_x: 100.0,
        width: 40.0,
        height: 50.0,
        speed: 5.0,
        jump_speed: 15.0,
        gravity: 0.8,
        max_health: 100,
        lives: 3,
        shoot_cooldown: 20,
        invulnerability: 60,
        aim: Aim::Facing,
        shot: ShotConfig { speed: 8.0, damage: 25, width: 6.0, height: 3.0 },
    },
    pickups: PickupConfig { size: 20.0, heal: 25, score: 50, bob_speed: 0.1 },
    roster: &FOX_ROSTER,
    level_complete_screen: false,
    end_screen_keys: EndScreenKeys::ConfirmRestarts,
    high_score_file: "fox_high_score.txt",
    log_file: "fox_adventure.log",
};
