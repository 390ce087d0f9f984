/// Full-frame composition: one function per screen plus the in-game HUD.
use super::sprites::Sprite;
use super::{
    Align, Rgb, Surface, BLACK, BROWN, DARK_GREEN, GRAY, GREEN, ORANGE, RED, SKY_BLUE, WHITE,
    YELLOW,
};
use crate::config::{EndScreenKeys, Variant};
use crate::entities::Rect;
use crate::game::{Game, GameStatus};

const TANK_SKY: Rgb = Rgb(50, 50, 100);
const DESERT_SAND: Rgb = Rgb(255, 218, 185);
const NIGHT: Rgb = Rgb(64, 64, 128);

/// Render one complete frame for the current screen.
pub fn render(surface: &mut dyn Surface, game: &Game) {
    match game.status {
        GameStatus::Menu => draw_menu(surface, game),
        GameStatus::Playing => draw_game(surface, game),
        GameStatus::LevelComplete => draw_level_complete(surface, game),
        GameStatus::GameOver => draw_game_over(surface, game),
        GameStatus::Victory => draw_victory(surface, game),
    }
}

fn centered(surface: &mut dyn Surface, y: f32, text: &str, color: Rgb) {
    let (w, _) = surface.size();
    surface.text(w / 2.0, y, text, color, Align::Center);
}

// ── Menu ──────────────────────────────────────────────────────────────────────

fn draw_menu(surface: &mut dyn Surface, game: &Game) {
    let cfg = game.config;
    surface.clear(BLACK);

    let title_color = match game.variant {
        Variant::TankBattle => WHITE,
        Variant::FoxAdventure => ORANGE,
    };
    centered(surface, 200.0, cfg.title, title_color);
    centered(surface, 250.0, cfg.subtitle, GRAY);
    centered(surface, 350.0, "Press ENTER to Start", WHITE);

    let controls = [
        "Controls:",
        "Arrow Keys / WASD - Move",
        "SPACE / UP - Jump",
        "X - Shoot",
        "ESC / Q - Quit",
    ];
    for (i, line) in controls.iter().enumerate() {
        centered(surface, 450.0 + i as f32 * 30.0, line, WHITE);
    }

    let high = format!("High Score: {}", game.high_score);
    centered(surface, cfg.screen_height - 100.0, &high, YELLOW);
}

// ── Playing ───────────────────────────────────────────────────────────────────

fn draw_game(surface: &mut dyn Surface, game: &Game) {
    let world = &game.world;
    let camera = &world.camera;
    let variant = game.variant;

    draw_background(surface, game);

    world.player.draw(surface, camera, variant);
    for enemy in &world.level.enemies {
        enemy.draw(surface, camera, variant);
    }
    for item in &world.level.collectibles {
        item.draw(surface, camera, variant);
    }
    for shot in &world.projectiles {
        shot.draw(surface, camera, variant);
    }

    draw_hud(surface, game);
}

fn draw_background(surface: &mut dyn Surface, game: &Game) {
    let cfg = game.config;
    let ground = cfg.ground_y;
    let (w, h) = surface.size();
    let level_w = cfg.level_width.unwrap_or(w);
    let scroll = game.world.camera.offset;

    match (game.variant, game.level_index()) {
        (Variant::TankBattle, _) => surface.clear(TANK_SKY),
        // Forest: trees at half scroll speed
        (Variant::FoxAdventure, 1) => {
            surface.clear(SKY_BLUE);
            for i in (0..level_w as i32).step_by(100) {
                let x = i as f32 - (scroll * 0.5) % 100.0;
                if x > -50.0 && x < w + 50.0 {
                    surface.fill_rect(Rect::new(x, ground - 150.0, 20.0, 150.0), BROWN);
                    surface.fill_circle(x + 10.0, ground - 140.0, 30.0, DARK_GREEN);
                }
            }
        }
        // Desert: cacti at a slower scroll
        (Variant::FoxAdventure, 2) => {
            surface.clear(DESERT_SAND);
            for i in (0..level_w as i32).step_by(150) {
                let x = i as f32 - (scroll * 0.3) % 150.0;
                if x > -50.0 && x < w + 50.0 {
                    surface.fill_rect(Rect::new(x, ground - 80.0, 15.0, 80.0), DARK_GREEN);
                    surface.fill_rect(Rect::new(x - 10.0, ground - 60.0, 35.0, 10.0), DARK_GREEN);
                }
            }
        }
        (Variant::FoxAdventure, _) => surface.clear(NIGHT),
    }

    surface.fill_rect(Rect::new(0.0, ground, w, h - ground), BROWN);
}

fn draw_hud(surface: &mut dyn Surface, game: &Game) {
    let player = &game.world.player;
    let (w, _) = surface.size();

    surface.fill_rect(Rect::new(20.0, 20.0, 200.0, 20.0), RED);
    if player.alive {
        let ratio = player.health as f32 / player.max_health as f32;
        surface.fill_rect(Rect::new(20.0, 20.0, 200.0 * ratio, 20.0), GREEN);
    }

    let lives = format!("Lives: {}", player.lives);
    let score = format!("Score: {}", game.score);
    let level = format!("Level: {}", game.level_index());

    match game.variant {
        Variant::TankBattle => {
            let health = format!("Health: {}/{}", player.health, player.max_health);
            let enemies = format!("Enemies: {}", game.world.level.enemies_alive());
            surface.text(20.0, 45.0, &health, WHITE, Align::Left);
            surface.text(20.0, 70.0, &lives, WHITE, Align::Left);
            surface.text(w - 200.0, 20.0, &score, WHITE, Align::Left);
            surface.text(w - 200.0, 50.0, &level, WHITE, Align::Left);
            surface.text(w - 200.0, 80.0, &enemies, WHITE, Align::Left);
        }
        Variant::FoxAdventure => {
            surface.text(20.0, 50.0, &lives, WHITE, Align::Left);
            surface.text(20.0, 80.0, &score, WHITE, Align::Left);
            surface.text(20.0, 110.0, &level, WHITE, Align::Left);
        }
    }
}

// ── Between levels ────────────────────────────────────────────────────────────

fn draw_level_complete(surface: &mut dyn Surface, game: &Game) {
    surface.clear(BLACK);
    let level = game.level_index();
    let (title, subtitle) = if level >= game.config.final_level {
        ("CONGRATULATIONS!".to_string(), "You completed all levels!".to_string())
    } else {
        (
            format!("LEVEL {} COMPLETE!", level),
            format!("Preparing Level {}...", level + 1),
        )
    };
    centered(surface, 300.0, &title, GREEN);
    centered(surface, 350.0, &subtitle, WHITE);
    centered(surface, 400.0, &format!("Score: {}", game.score), WHITE);
    centered(surface, 500.0, "Press ENTER to Continue", WHITE);
}

// ── End of run ────────────────────────────────────────────────────────────────

fn end_hints(game: &Game) -> [&'static str; 2] {
    match game.config.end_screen_keys {
        EndScreenKeys::ConfirmToMenu => ["Press R to Restart", "Press ENTER for Main Menu"],
        EndScreenKeys::ConfirmRestarts => ["Press ENTER to Play Again", "Press ESC for Main Menu"],
    }
}

fn draw_final_score(surface: &mut dyn Surface, game: &Game, y: f32) {
    centered(surface, y, &format!("Final Score: {}", game.score), WHITE);
    if game.new_high_score {
        centered(surface, y + 40.0, "NEW HIGH SCORE!", YELLOW);
    }
}

fn draw_game_over(surface: &mut dyn Surface, game: &Game) {
    surface.clear(BLACK);
    centered(surface, 250.0, "GAME OVER", RED);
    draw_final_score(surface, game, 320.0);
    let [first, second] = end_hints(game);
    centered(surface, 450.0, first, WHITE);
    centered(surface, 490.0, second, WHITE);
}

fn draw_victory(surface: &mut dyn Surface, game: &Game) {
    surface.clear(BLACK);
    centered(surface, 200.0, "VICTORY!", GREEN);
    centered(surface, 300.0, "You defeated all enemies!", WHITE);
    draw_final_score(surface, game, 380.0);
    let [first, second] = end_hints(game);
    centered(surface, 480.0, first, WHITE);
    centered(surface, 520.0, second, WHITE);
}
