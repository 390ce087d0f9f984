use side_scroller::config::Variant;
use side_scroller::display::canvas::Cell;
use side_scroller::display::*;
use side_scroller::entities::Rect;
use side_scroller::game::{Game, GameStatus};
use side_scroller::input::Command;

fn row_text(canvas: &Canvas, row: usize) -> String {
    (0..canvas.cols())
        .filter_map(|col| canvas.cell(col, row))
        .map(|cell| cell.glyph)
        .collect()
}

// Ten logical pixels per cell in both directions.
fn small_canvas() -> Canvas {
    Canvas::new(10, 10, 100.0, 100.0)
}

// ── Canvas ────────────────────────────────────────────────────────────────────

#[test]
fn fill_rect_paints_overlapped_cells() {
    let mut c = small_canvas();
    c.fill_rect(Rect::new(10.0, 10.0, 20.0, 20.0), RED);
    assert_eq!(c.cell(1, 1).unwrap().bg, RED);
    assert_eq!(c.cell(2, 2).unwrap().bg, RED);
    assert_eq!(*c.cell(3, 3).unwrap(), Cell::BLANK);
    assert_eq!(*c.cell(0, 0).unwrap(), Cell::BLANK);
}

#[test]
fn thin_rect_still_shows() {
    let mut c = small_canvas();
    c.fill_rect(Rect::new(55.0, 55.0, 2.0, 2.0), YELLOW);
    assert_eq!(c.cell(5, 5).unwrap().bg, YELLOW);
}

#[test]
fn shapes_off_canvas_are_clipped() {
    let mut c = small_canvas();
    c.fill_rect(Rect::new(-50.0, -50.0, 20.0, 20.0), RED);
    c.fill_rect(Rect::new(150.0, 150.0, 20.0, 20.0), RED);
    c.fill_circle(-40.0, 50.0, 5.0, RED);
    assert!(c.cells().iter().all(|cell| *cell == Cell::BLANK));
}

#[test]
fn tiny_circle_falls_back_to_its_centre_cell() {
    let mut c = small_canvas();
    c.fill_circle(52.0, 52.0, 1.0, GREEN);
    assert_eq!(c.cell(5, 5).unwrap().bg, GREEN);
    assert_eq!(c.cells().iter().filter(|cell| cell.bg == GREEN).count(), 1);
}

#[test]
fn large_circle_fills_its_middle_only() {
    let mut c = small_canvas();
    c.fill_circle(50.0, 50.0, 30.0, BLUE);
    assert_eq!(c.cell(5, 5).unwrap().bg, BLUE);
    assert_eq!(c.cell(4, 4).unwrap().bg, BLUE);
    assert_eq!(*c.cell(2, 2).unwrap(), Cell::BLANK);
}

#[test]
fn text_keeps_background() {
    let mut c = small_canvas();
    c.clear(SKY_BLUE);
    c.text(0.0, 0.0, "HI", WHITE, Align::Left);
    assert!(row_text(&c, 0).starts_with("HI"));
    let cell = c.cell(0, 0).unwrap();
    assert_eq!(cell.bg, SKY_BLUE);
    assert_eq!(cell.glyph, 'H');
}

#[test]
fn centred_text_straddles_x() {
    let mut c = small_canvas();
    c.text(50.0, 50.0, "ABCD", WHITE, Align::Center);
    assert_eq!(row_text(&c, 5), "   ABCD   ");
}

#[test]
fn resize_resets_cells() {
    let mut c = small_canvas();
    c.clear(RED);
    c.resize(20, 5);
    assert_eq!((c.cols(), c.rows()), (20, 5));
    assert!(c.cells().iter().all(|cell| *cell == Cell::BLANK));
}

// ── Screens ───────────────────────────────────────────────────────────────────

fn tank_canvas() -> Canvas {
    // 1200×800 logical → 10×20 px per cell
    Canvas::new(120, 40, 1200.0, 800.0)
}

fn fox_canvas() -> Canvas {
    // 1024×768 logical → 8×16 px per cell
    Canvas::new(128, 48, 1024.0, 768.0)
}

#[test]
fn menu_shows_title_and_high_score() {
    let game = Game::new(Variant::TankBattle, 1234);
    let mut c = tank_canvas();
    render(&mut c, &game);
    assert!(row_text(&c, 10).contains("TANK BATTLE"));
    assert!(row_text(&c, 35).contains("High Score: 1234"));
}

#[test]
fn hud_shows_score_and_lives() {
    let mut game = Game::new(Variant::TankBattle, 0);
    game.handle(Command::Confirm);
    let mut c = tank_canvas();
    render(&mut c, &game);
    assert!(row_text(&c, 1).contains("Score: 0"));
    assert!(row_text(&c, 3).contains("Lives: 3"));

    let mut game = Game::new(Variant::FoxAdventure, 0);
    game.handle(Command::Confirm);
    let mut c = fox_canvas();
    render(&mut c, &game);
    assert!(row_text(&c, 5).contains("Score: 0"));
    assert!(row_text(&c, 3).contains("Lives: 3"));
}

#[test]
fn ground_is_painted_below_ground_line() {
    let mut game = Game::new(Variant::FoxAdventure, 0);
    game.handle(Command::Confirm);
    let mut c = fox_canvas();
    render(&mut c, &game);
    // Ground starts at y=668 → row 41
    assert_eq!(c.cell(100, 45).unwrap().bg, BROWN);
}

#[test]
fn hud_tracks_level_number() {
    for (variant, mut canvas, row) in [
        (Variant::TankBattle, tank_canvas(), 2),
        (Variant::FoxAdventure, fox_canvas(), 6),
    ] {
        let mut game = Game::new(variant, 0);
        game.handle(Command::Confirm);
        for index in 1..=3 {
            game.world.load_level(index);
            render(&mut canvas, &game);
            assert!(row_text(&canvas, row).contains(&format!("Level: {index}")));
        }
    }
}

#[test]
fn end_screens_show_their_banners() {
    let mut game = Game::new(Variant::TankBattle, 0);
    game.status = GameStatus::GameOver;
    let mut c = tank_canvas();
    render(&mut c, &game);
    assert!(row_text(&c, 12).contains("GAME OVER"));
    assert!(row_text(&c, 22).contains("Press R to Restart"));

    let mut game = Game::new(Variant::FoxAdventure, 0);
    game.status = GameStatus::Victory;
    game.new_high_score = true;
    let mut c = fox_canvas();
    render(&mut c, &game);
    assert!(row_text(&c, 12).contains("VICTORY!"));
    assert!(row_text(&c, 26).contains("NEW HIGH SCORE!"));
    assert!(row_text(&c, 30).contains("Press ENTER to Play Again"));
}

#[test]
fn level_complete_announces_next_level() {
    let mut game = Game::new(Variant::TankBattle, 0);
    game.handle(Command::Confirm);
    game.status = GameStatus::LevelComplete;
    let mut c = tank_canvas();
    render(&mut c, &game);
    assert!(row_text(&c, 15).contains("LEVEL 1 COMPLETE!"));
    assert!(row_text(&c, 17).contains("Preparing Level 2..."));
}
