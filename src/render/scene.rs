//! In-game drawing: maze, truck, particles, notices and the HUD.
use raylib::prelude::*;

use crate::core::layout::Layout;
use crate::core::maze::Cell;
use crate::core::player::{Direction, MAX_FUEL};
use crate::core::state::GameState;
use crate::render::textures::{Sprite, TextureManager};

const FONT_SIZE: i32 = 28;
const WALL: Color = Color::new(255, 255, 255, 255);
const NOTICE: Color = Color::new(255, 0, 0, 255);
const PARTICLE: Color = Color::new(255, 255, 0, 255);
const BAR_EMPTY: Color = Color::new(255, 0, 0, 255);
const BAR_FULL: Color = Color::new(0, 255, 0, 255);
const BAR_W: i32 = 300;
const BAR_H: i32 = 20;

pub fn draw_scene<D: RaylibDraw>(d: &mut D, state: &GameState, layout: &Layout, tex: &TextureManager) {
    draw_maze(d, state, tex);
    draw_player(d, state, tex);
    draw_particles(d, state);
    draw_notices(d, state, layout);
    draw_hud(d, state, layout);
}

fn draw_maze<D: RaylibDraw>(d: &mut D, state: &GameState, tex: &TextureManager) {
    let size = state.cell_size;
    for ((row, col), cell) in state.maze.iter() {
        let x = col as f32 * size;
        let y = row as f32 * size;
        match cell {
            Cell::Wall => d.draw_rectangle(x as i32, y as i32, size as i32, size as i32, WALL),
            Cell::Path => tex.draw_cell(d, Sprite::Grass, x, y, size, 0.0),
            Cell::FuelStation => tex.draw_cell(d, Sprite::Station, x, y, size, 0.0),
        }
    }
}

fn draw_player<D: RaylibDraw>(d: &mut D, state: &GameState, tex: &TextureManager) {
    let size = state.cell_size;
    let p = &state.player;
    let x = p.col as f32 * size;
    let y = p.row as f32 * size;
    tex.draw_cell(d, Sprite::Truck, x, y, size, p.facing.rotation_degrees());

    if tex.get(Sprite::Truck).is_none() {
        // no art: mark the nose so facing is still visible
        let (cx, cy) = state.pixel_center(p.pos());
        let reach = size * 0.35;
        let (nx, ny) = match p.facing {
            Direction::Up => (cx, cy - reach),
            Direction::Down => (cx, cy + reach),
            Direction::Left => (cx - reach, cy),
            Direction::Right => (cx + reach, cy),
        };
        d.draw_circle(nx as i32, ny as i32, size * 0.12, Color::BLACK);
    }
}

fn draw_particles<D: RaylibDraw>(d: &mut D, state: &GameState) {
    for p in &state.effects.particles {
        d.draw_circle(p.x as i32, p.y as i32, 3.0, PARTICLE);
    }
}

fn draw_notices<D: RaylibDraw>(d: &mut D, state: &GameState, layout: &Layout) {
    let mut y = layout.notice_top(state.maze.rows());
    for n in &state.effects.notices {
        let alpha = (n.opacity() * 255.0).clamp(0.0, 255.0) as u8;
        let color = Color::new(NOTICE.r, NOTICE.g, NOTICE.b, alpha);
        d.draw_text(&n.message, 10, y, FONT_SIZE, color);
        y += 30;
    }
}

fn draw_hud<D: RaylibDraw>(d: &mut D, state: &GameState, layout: &Layout) {
    let h = layout.height;
    let fuel = state.player.fuel();
    let filled = ((fuel / MAX_FUEL) * BAR_W as f32) as i32;

    d.draw_rectangle(10, h - 70, BAR_W, BAR_H, BAR_EMPTY);
    d.draw_rectangle(10, h - 70, filled, BAR_H, BAR_FULL);
    d.draw_text(&format!("Fuel: {}%", fuel as i32), 10, h - 95, FONT_SIZE, Color::WHITE);
    d.draw_text(
        &format!("Points: {}/{}", state.player.score, state.rules.target_score),
        10,
        h - 120,
        FONT_SIZE,
        Color::WHITE,
    );
    d.draw_text(
        &format!("Stations: {}", state.counters.stations_built),
        10,
        h - 40,
        FONT_SIZE,
        Color::WHITE,
    );
}
