//! Sprite textures with flat-colour fallbacks when an image is missing.
use std::collections::HashMap;
use std::path::Path;

use raylib::core::texture::RaylibTexture2D;
use raylib::prelude::*;
use tracing::{debug, warn};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Sprite {
    Truck,
    Station,
    Grass,
}

impl Sprite {
    const ALL: [Sprite; 3] = [Sprite::Truck, Sprite::Station, Sprite::Grass];

    fn candidates(self) -> &'static [&'static str] {
        match self {
            Sprite::Truck => &["truck.jpg", "truck.png", "images/truck.png"],
            Sprite::Station => &["hydrogen.png", "station.png", "images/station.png"],
            Sprite::Grass => &["grass.jpg", "grass.png", "images/grass.png"],
        }
    }

    /// Drawn instead of the texture when no image was found.
    pub fn fallback_color(self) -> Color {
        match self {
            Sprite::Truck => Color::new(250, 210, 40, 255),
            Sprite::Station => Color::new(40, 120, 230, 255),
            Sprite::Grass => Color::new(40, 110, 50, 255),
        }
    }
}

pub struct TextureManager {
    textures: HashMap<Sprite, Texture2D>,
}

impl TextureManager {
    pub fn new(rl: &mut RaylibHandle, thread: &RaylibThread, dir: &Path) -> Self {
        let mut tm = Self { textures: HashMap::new() };

        for sprite in Sprite::ALL {
            let loaded = sprite.candidates().iter().find_map(|name| {
                let path = dir.join(name);
                let img = Image::load_image(path.to_str()?).ok()?;
                let tex = rl.load_texture_from_image(thread, &img).ok()?;
                debug!(?sprite, path = %path.display(), "texture loaded");
                Some(tex)
            });
            match loaded {
                Some(tex) => {
                    tm.textures.insert(sprite, tex);
                }
                None => warn!(?sprite, dir = %dir.display(), "texture missing, using flat colour"),
            }
        }
        tm
    }

    pub fn get(&self, sprite: Sprite) -> Option<&Texture2D> {
        self.textures.get(&sprite)
    }

    /// Draws `sprite` scaled into the square cell at (x, y), rotated clockwise about its centre.
    pub fn draw_cell<D: RaylibDraw>(&self, d: &mut D, sprite: Sprite, x: f32, y: f32, size: f32, rotation: f32) {
        match self.get(sprite) {
            Some(tex) => {
                let src = Rectangle::new(0.0, 0.0, tex.width() as f32, tex.height() as f32);
                let half = size / 2.0;
                let dest = Rectangle::new(x + half, y + half, size, size);
                d.draw_texture_pro(tex, src, dest, Vector2::new(half, half), rotation, Color::WHITE);
            }
            None => {
                d.draw_rectangle(x as i32, y as i32, size as i32, size as i32, sprite.fallback_color());
            }
        }
    }
}
