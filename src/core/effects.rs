//! Notices and particle bursts. Cosmetic only; nothing here feeds back into gameplay.
use rand::Rng;

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub message: String,
    pub remaining: u32,
    pub lifetime: u32,
}

impl Notice {
    /// 1.0 when fresh, approaching 0.0 as it expires. Drives the fade-out.
    pub fn opacity(&self) -> f32 {
        if self.lifetime == 0 {
            return 0.0;
        }
        self.remaining as f32 / self.lifetime as f32
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
    pub remaining: u32,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BurstShape {
    pub count: usize,
    pub spread: i32,
    pub max_speed: f32,
    pub lifetime: u32,
}

#[derive(Clone, Debug, Default)]
pub struct Effects {
    pub notices: Vec<Notice>,
    pub particles: Vec<Particle>,
}

impl Effects {
    pub fn notify(&mut self, message: impl Into<String>, lifetime: u32) {
        if lifetime == 0 {
            return;
        }
        self.notices.push(Notice { message: message.into(), remaining: lifetime, lifetime });
    }

    pub fn burst<R: Rng + ?Sized>(&mut self, rng: &mut R, x: f32, y: f32, shape: BurstShape) {
        if shape.lifetime == 0 {
            return;
        }
        for _ in 0..shape.count {
            let ox = rng.gen_range(-shape.spread..=shape.spread) as f32;
            let oy = rng.gen_range(-shape.spread..=shape.spread) as f32;
            let (dx, dy) = if shape.max_speed > 0.0 {
                (
                    rng.gen_range(-shape.max_speed..=shape.max_speed),
                    rng.gen_range(-shape.max_speed..=shape.max_speed),
                )
            } else {
                (0.0, 0.0)
            };
            self.particles.push(Particle { x: x + ox, y: y + oy, dx, dy, remaining: shape.lifetime });
        }
    }

    /// One frame: move particles, count every lifetime down, drop what expired.
    pub fn tick(&mut self) {
        for p in &mut self.particles {
            p.x += p.dx;
            p.y += p.dy;
            p.remaining = p.remaining.saturating_sub(1);
        }
        self.particles.retain(|p| p.remaining > 0);

        for n in &mut self.notices {
            n.remaining = n.remaining.saturating_sub(1);
        }
        self.notices.retain(|n| n.remaining > 0);
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty() && self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const SHAPE: BurstShape = BurstShape { count: 10, spread: 5, max_speed: 1.0, lifetime: 50 };

    #[test]
    fn test_notice_lives_exactly_its_lifetime() {
        let mut fx = Effects::default();
        fx.notify("hello", 3);
        fx.tick();
        fx.tick();
        assert_eq!(fx.notices.len(), 1);
        assert_eq!(fx.notices[0].remaining, 1);
        fx.tick();
        assert!(fx.notices.is_empty());
    }

    #[test]
    fn test_zero_lifetime_is_never_live() {
        let mut fx = Effects::default();
        fx.notify("gone", 0);
        let mut rng = StdRng::seed_from_u64(0);
        fx.burst(&mut rng, 0.0, 0.0, BurstShape { lifetime: 0, ..SHAPE });
        assert!(fx.is_empty());
    }

    #[test]
    fn test_burst_spawns_around_origin() {
        let mut fx = Effects::default();
        let mut rng = StdRng::seed_from_u64(42);
        fx.burst(&mut rng, 100.0, 60.0, SHAPE);
        assert_eq!(fx.particles.len(), 10);
        for p in &fx.particles {
            assert!((95.0..=105.0).contains(&p.x));
            assert!((55.0..=65.0).contains(&p.y));
            assert!(p.dx.abs() <= 1.0 && p.dy.abs() <= 1.0);
            assert_eq!(p.remaining, 50);
        }
    }

    #[test]
    fn test_particles_drift_by_velocity() {
        let mut fx = Effects::default();
        fx.particles.push(Particle { x: 10.0, y: 10.0, dx: 0.5, dy: -1.0, remaining: 5 });
        fx.tick();
        fx.tick();
        let p = &fx.particles[0];
        assert!((p.x - 11.0).abs() < f32::EPSILON);
        assert!((p.y - 8.0).abs() < f32::EPSILON);
        assert_eq!(p.remaining, 3);
    }

    #[test]
    fn test_particles_expire_after_lifetime() {
        let mut fx = Effects::default();
        let mut rng = StdRng::seed_from_u64(9);
        fx.burst(&mut rng, 0.0, 0.0, SHAPE);
        for _ in 0..49 {
            fx.tick();
        }
        assert_eq!(fx.particles.len(), 10);
        fx.tick();
        assert!(fx.particles.is_empty());
    }

    #[test]
    fn test_opacity_fades() {
        let mut fx = Effects::default();
        fx.notify("fade", 4);
        assert_eq!(fx.notices[0].opacity(), 1.0);
        fx.tick();
        fx.tick();
        assert!((fx.notices[0].opacity() - 0.5).abs() < f32::EPSILON);
    }
}
