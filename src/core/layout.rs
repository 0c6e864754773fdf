//! Screen geometry shared by hit-testing and drawing.
use crate::core::rules::Difficulty;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Half-open on the far edges, like a pixel grid.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.w && py >= self.y && py < self.y + self.h
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Layout {
    pub width: i32,
    pub height: i32,
    pub cell_size: f32,
}

impl Layout {
    pub fn new(width: i32, height: i32, cell_size: f32) -> Self {
        Self { width, height, cell_size }
    }

    pub fn difficulty_buttons(&self) -> [(Difficulty, Rect); 3] {
        let x = self.width as f32 / 2.0 - 200.0;
        Difficulty::ALL.map(|d| {
            let slot = match d {
                Difficulty::Easy => 0.0,
                Difficulty::Medium => 1.0,
                Difficulty::Hard => 2.0,
            };
            (d, Rect::new(x, 200.0 + slot * 100.0, 400.0, 50.0))
        })
    }

    pub fn difficulty_at(&self, px: f32, py: f32) -> Option<Difficulty> {
        self.difficulty_buttons().into_iter().find(|(_, r)| r.contains(px, py)).map(|(d, _)| d)
    }

    pub fn start_button(&self) -> Rect {
        Rect::new(self.width as f32 / 2.0 - 100.0, self.height as f32 / 2.0 + 100.0, 200.0, 50.0)
    }

    /// Top of the notice stack, just under a maze with `rows` rows.
    pub fn notice_top(&self, rows: usize) -> i32 {
        (rows as f32 * self.cell_size) as i32 + 10
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(1000, 800, 40.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_buttons_match_menu() {
        let l = Layout::default();
        let [(_, easy), (_, medium), (_, hard)] = l.difficulty_buttons();
        assert_eq!(easy, Rect::new(300.0, 200.0, 400.0, 50.0));
        assert_eq!(medium, Rect::new(300.0, 300.0, 400.0, 50.0));
        assert_eq!(hard, Rect::new(300.0, 400.0, 400.0, 50.0));
    }

    #[test]
    fn test_hit_testing() {
        let l = Layout::default();
        assert_eq!(l.difficulty_at(300.0, 200.0), Some(Difficulty::Easy));
        assert_eq!(l.difficulty_at(699.0, 349.0), Some(Difficulty::Medium));
        assert_eq!(l.difficulty_at(500.0, 425.0), Some(Difficulty::Hard));
        assert_eq!(l.difficulty_at(500.0, 260.0), None);
        assert_eq!(l.difficulty_at(700.0, 210.0), None);
    }

    #[test]
    fn test_start_button_centered_below_middle() {
        let b = Layout::default().start_button();
        assert_eq!(b, Rect::new(400.0, 500.0, 200.0, 50.0));
        assert!(b.contains(450.0, 520.0));
    }
}
