/// The frame loop: terminal session, input thread and fixed-rate ticking.
use std::io::{self, stdout, BufWriter, Write};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event};
use log::{error, info};
use rand::thread_rng;

use crate::config::Variant;
use crate::display::{self, terminal::Screen, Canvas};
use crate::error::GameError;
use crate::game::{Flow, Game};
use crate::highscore::HighScoreFile;
use crate::input::KeyTracker;

/// Run one game until the player quits.
pub fn run(variant: Variant) -> Result<(), GameError> {
    let config = variant.config();
    let scores = HighScoreFile::new(config.high_score_file);
    let high_score = scores.load();
    info!("{} starting, high score {}", config.title, high_score);

    let mut game = Game::new(variant, high_score);
    let mut screen = Screen::enter(BufWriter::new(stdout()))?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the frame loop never blocks on I/O.
    let (tx, rx) = mpsc::channel::<io::Result<Event>>();
    thread::spawn(move || loop {
        let read = event::read();
        let failed = read.is_err();
        // receiver dropped → program exiting
        if tx.send(read).is_err() || failed {
            break;
        }
    });

    // Always restore the terminal
    let result = frame_loop(&mut screen, &mut game, &rx, &scores);
    screen.leave();
    info!("{} closed", config.title);
    result
}

/// What one pass over the pending input events asked the frame loop to do.
#[derive(Debug, Default, PartialEq, Eq)]
struct InputOutcome {
    quit: bool,
    /// Latest terminal size reported this frame.
    resized: Option<(u16, u16)>,
}

/// Apply every queued event to the game.  A failed or vanished input reader
/// is an error: the game can no longer be controlled.
fn drain_input(
    rx: &Receiver<io::Result<Event>>,
    game: &mut Game,
    keys: &mut KeyTracker,
    frame: u64,
) -> Result<InputOutcome, GameError> {
    let mut outcome = InputOutcome::default();
    loop {
        match rx.try_recv() {
            Ok(Ok(Event::Key(key))) => {
                let status = game.status;
                if let Some(command) = keys.record(&key, frame) {
                    if game.handle(command) == Flow::Quit {
                        outcome.quit = true;
                        return Ok(outcome);
                    }
                }
                if game.status != status {
                    // Keys held on one screen should not leak into the next
                    keys.clear();
                }
            }
            Ok(Ok(Event::Resize(cols, rows))) => outcome.resized = Some((cols, rows)),
            Ok(Ok(_)) => {}
            Ok(Err(e)) => return Err(GameError::Terminal(e)),
            Err(TryRecvError::Empty) => return Ok(outcome),
            Err(TryRecvError::Disconnected) => {
                return Err(GameError::Terminal(io::Error::new(
                    io::ErrorKind::BrokenPipe,
                    "input reader stopped",
                )));
            }
        }
    }
}

fn frame_loop<W: Write>(
    screen: &mut Screen<W>,
    game: &mut Game,
    rx: &Receiver<io::Result<Event>>,
    scores: &HighScoreFile,
) -> Result<(), GameError> {
    let config = game.config;
    let frame_time = Duration::from_secs_f64(1.0 / f64::from(config.fps));
    let mut rng = thread_rng();
    let mut keys = KeyTracker::new();
    let (cols, rows) = Screen::<W>::size()?;
    let mut canvas = Canvas::new(cols, rows, config.screen_width, config.screen_height);
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        let input = drain_input(rx, game, &mut keys, frame)?;
        if input.quit {
            return Ok(());
        }
        if let Some((cols, rows)) = input.resized {
            canvas.resize(cols as usize, rows as usize);
            screen.invalidate();
        }

        // ── Simulate ──────────────────────────────────────────────────────────
        let controls = keys.controls(frame);
        game.tick(&controls, &mut rng);
        if let Some(score) = game.take_unsaved_high_score() {
            scores.save(score);
        }

        // ── Draw ──────────────────────────────────────────────────────────────
        display::render(&mut canvas, game);
        if let Err(e) = screen.present(&canvas) {
            error!("frame {frame}: {e}");
            screen.invalidate();
        }

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::game::GameStatus;

    fn key(code: KeyCode) -> io::Result<Event> {
        Ok(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    #[test]
    fn vanished_reader_is_an_error() {
        let (tx, rx) = mpsc::channel();
        drop(tx);
        let mut game = Game::new(Variant::TankBattle, 0);
        let result = drain_input(&rx, &mut game, &mut KeyTracker::new(), 1);
        assert!(matches!(result, Err(GameError::Terminal(_))));
    }

    #[test]
    fn read_failure_is_forwarded() {
        let (tx, rx) = mpsc::channel();
        tx.send(Err(io::Error::new(io::ErrorKind::Other, "tty gone")))
            .unwrap();
        let mut game = Game::new(Variant::FoxAdventure, 0);
        let result = drain_input(&rx, &mut game, &mut KeyTracker::new(), 1);
        assert!(matches!(result, Err(GameError::Terminal(e)) if e.to_string() == "tty gone"));
    }

    #[test]
    fn escape_on_menu_quits_cleanly() {
        let (tx, rx) = mpsc::channel();
        tx.send(key(KeyCode::Esc)).unwrap();
        let mut game = Game::new(Variant::TankBattle, 0);
        let outcome = drain_input(&rx, &mut game, &mut KeyTracker::new(), 1).unwrap();
        assert!(outcome.quit);
    }

    #[test]
    fn resize_and_screen_change_are_reported() {
        let (tx, rx) = mpsc::channel();
        tx.send(key(KeyCode::Left)).unwrap();
        tx.send(key(KeyCode::Enter)).unwrap();
        tx.send(Ok(Event::Resize(80, 24))).unwrap();
        let mut game = Game::new(Variant::TankBattle, 0);
        let mut keys = KeyTracker::new();

        let outcome = drain_input(&rx, &mut game, &mut keys, 5).unwrap();
        assert_eq!(outcome, InputOutcome { quit: false, resized: Some((80, 24)) });
        assert_eq!(game.status, GameStatus::Playing);
        assert!(!keys.controls(5).left);
    }
}
