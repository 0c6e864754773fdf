//! Rendering on top of raylib.
//!
//! Re-exports:
//! - `textures`: Sprite textures with flat-colour fallbacks
//! - `scene`: Maze, truck, effects and HUD
//! - `screens`: Difficulty menu, briefing and outcome screens

pub mod textures;
pub mod scene;
pub mod screens;

use raylib::prelude::*;

use crate::core::session::{Phase, Session};
use textures::TextureManager;

/// Draws whatever the current phase shows.
pub fn draw_frame<D: RaylibDraw>(d: &mut D, session: &Session, tex: &TextureManager) {
    d.clear_background(Color::BLACK);
    let layout = session.layout();
    match session.phase() {
        Phase::DifficultySelect => screens::draw_difficulty_menu(d, layout),
        Phase::Briefing => screens::draw_briefing(d, layout, &session.state.rules),
        Phase::Playing => scene::draw_scene(d, &session.state, layout, tex),
        phase @ (Phase::Won | Phase::Lost) => {
            scene::draw_scene(d, &session.state, layout, tex);
            screens::draw_outcome(d, layout, phase);
        }
    }
}
