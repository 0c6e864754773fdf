//! Window setup and the frame loop.
use std::thread;
use std::time::{Duration, Instant};

use raylib::prelude::*;
use tracing::{debug, info};

use crate::audio::AudioManager;
use crate::config::Config;
use crate::core::events::GameEvent;
use crate::core::maze::Maze;
use crate::core::session::Session;
use crate::error::{Error, Result};
use crate::input::process_events;
use crate::render::{draw_frame, textures::TextureManager};

/// Builds the session from config. Kept apart from the window so it can fail before one opens.
pub fn build_session(cfg: &Config) -> Result<Session> {
    let maze = match &cfg.maze {
        Some(path) => Maze::load(path)?,
        None => Maze::authored(),
    };
    let start_err = |source| Error::Maze {
        path: cfg.maze.clone().unwrap_or_else(|| "<built-in>".into()),
        source,
    };
    let mut session = Session::new(maze, cfg.rules.clone(), cfg.window.layout(), cfg.seed).map_err(start_err)?;
    if let Some(d) = cfg.difficulty {
        session.choose_difficulty(d);
    }
    Ok(session)
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::Moved { .. } | GameEvent::LowFuel { .. } => {}
        other => debug!(?other, "game event"),
    }
}

/// Runs until the session ends or the window is closed.
pub fn run(cfg: &Config) -> Result<()> {
    let mut session = build_session(cfg)?;

    let (mut window, raylib_thread) = raylib::init()
        .size(cfg.window.width, cfg.window.height)
        .title(&cfg.window.title)
        .build();

    let texman = TextureManager::new(&mut window, &raylib_thread, &cfg.asset_dir());
    let mut audio = if cfg.audio.enabled { AudioManager::new(&cfg.audio) } else { None };
    if let Some(a) = audio.as_mut() {
        a.load_sfx_auto(&cfg.asset_dir());
    }

    let frame = Duration::from_secs_f64(1.0 / f64::from(cfg.window.fps.max(1)));
    info!(fps = cfg.window.fps, "entering frame loop");

    while !window.window_should_close() {
        let started = Instant::now();

        let inputs = process_events(&mut window);
        session.frame(inputs);

        for event in session.drain_events() {
            log_event(&event);
            if let Some(a) = audio.as_mut() {
                a.handle(&event);
            }
        }

        {
            let mut d = window.begin_drawing(&raylib_thread);
            draw_frame(&mut d, &session, &texman);
        }

        if session.phase().is_over() {
            thread::sleep(Duration::from_millis(cfg.window.end_hold_ms));
            return Ok(());
        }

        if let Some(left) = frame.checked_sub(started.elapsed()) {
            thread::sleep(left);
        }
    }

    info!(phase = ?session.phase(), "window closed");
    Ok(())
}
