//! Menu, briefing and outcome screens.
use raylib::prelude::*;

use crate::core::layout::{Layout, Rect};
use crate::core::rules::{Difficulty, Rules};
use crate::core::session::Phase;

const FONT_SIZE: i32 = 28;
const TITLE_SIZE: i32 = 44;

/// Rough width for centring; raylib's default font is about half as wide as it is tall.
fn approx_width(text: &str, size: i32) -> i32 {
    text.chars().count() as i32 * size / 2
}

fn draw_button<D: RaylibDraw>(d: &mut D, r: Rect, fill: Color, label: &str) {
    d.draw_rectangle(r.x as i32, r.y as i32, r.w as i32, r.h as i32, fill);
    let tx = (r.x + r.w / 2.0) as i32 - approx_width(label, FONT_SIZE) / 2;
    let ty = (r.y + r.h / 2.0) as i32 - FONT_SIZE / 2;
    d.draw_text(label, tx, ty, FONT_SIZE, Color::BLACK);
}

pub fn draw_difficulty_menu<D: RaylibDraw>(d: &mut D, layout: &Layout) {
    for (difficulty, rect) in layout.difficulty_buttons() {
        let fill = match difficulty {
            Difficulty::Easy => Color::new(0, 255, 0, 255),
            Difficulty::Medium => Color::new(255, 255, 0, 255),
            Difficulty::Hard => Color::new(255, 0, 0, 255),
        };
        draw_button(d, rect, fill, difficulty.label());
    }
}

pub fn briefing_lines(rules: &Rules) -> [String; 5] {
    [
        "Use arrow keys to move your truck.".to_string(),
        "Collect fuel cells (blue) to refuel.".to_string(),
        format!("Build stations (press 'B') using {} points.", rules.station_cost),
        format!("Unlock new paths automatically by collecting {} fuel cells.", rules.unlock_threshold),
        format!("Your goal: Earn {} points before running out of fuel.", rules.target_score),
    ]
}

pub fn draw_briefing<D: RaylibDraw>(d: &mut D, layout: &Layout, rules: &Rules) {
    let title = "Welcome to the HydroDrive Challenge!";
    d.draw_text(title, layout.width / 2 - approx_width(title, TITLE_SIZE) / 2, 100, TITLE_SIZE, Color::WHITE);
    for (i, line) in briefing_lines(rules).iter().enumerate() {
        d.draw_text(line, 50, 200 + i as i32 * 40, FONT_SIZE, Color::WHITE);
    }
    draw_button(d, layout.start_button(), Color::new(0, 200, 0, 255), "Start");
}

pub fn outcome_message(phase: Phase) -> Option<&'static str> {
    match phase {
        Phase::Won => Some("Mission Complete!"),
        Phase::Lost => Some("Game Over!"),
        _ => None,
    }
}

pub fn draw_outcome<D: RaylibDraw>(d: &mut D, layout: &Layout, phase: Phase) {
    if let Some(msg) = outcome_message(phase) {
        d.draw_text(msg, layout.width / 2 - 100, layout.height / 2, FONT_SIZE, Color::WHITE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_message() {
        assert_eq!(outcome_message(Phase::Won), Some("Mission Complete!"));
        assert_eq!(outcome_message(Phase::Lost), Some("Game Over!"));
        assert_eq!(outcome_message(Phase::Playing), None);
        assert_eq!(outcome_message(Phase::DifficultySelect), None);
        assert_eq!(outcome_message(Phase::Briefing), None);
    }
}
