pub mod app;
pub mod camera;
pub mod collision;
pub mod compute;
pub mod config;
pub mod display;
pub mod entities;
pub mod error;
pub mod game;
pub mod highscore;
pub mod input;
pub mod level;
pub mod logging;
