//! Hero background particles: a fixed population bouncing inside the canvas.

use rand::Rng;

use crate::prefs::Theme;

/// Fill colour for the current theme.
pub fn particle_color(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "rgba(0, 245, 212, 0.3)",  // teal
        Theme::Light => "rgba(0, 123, 255, 0.3)", // blue
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
    pub color: &'static str,
}

impl Particle {
    pub fn random<R: Rng>(rng: &mut R, width: f64, height: f64, theme: Theme) -> Self {
        Self {
            x: rng.r#gen::<f64>() * width,
            y: rng.r#gen::<f64>() * height,
            vx: rng.r#gen::<f64>() - 0.5,
            vy: rng.r#gen::<f64>() - 0.5,
            radius: rng.r#gen::<f64>() * 3.0 + 1.0,
            color: particle_color(theme),
        }
    }

    /// Move one frame; reverse the velocity component whose edge was touched.
    fn advance(&mut self, width: f64, height: f64) {
        self.x += self.vx;
        self.y += self.vy;
        if self.x + self.radius > width || self.x - self.radius < 0.0 {
            self.vx = -self.vx;
        }
        if self.y + self.radius > height || self.y - self.radius < 0.0 {
            self.vy = -self.vy;
        }
    }
}

#[derive(Clone, Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
    theme: Theme,
}

impl ParticleField {
    pub fn new<R: Rng>(
        rng: &mut R,
        count: usize,
        width: f64,
        height: f64,
        theme: Theme,
    ) -> Self {
        let particles = (0..count)
            .map(|_| Particle::random(&mut *rng, width, height, theme))
            .collect();
        Self {
            particles,
            width,
            height,
            theme,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Particles keep their positions; out-of-bounds ones bounce back in.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        let color = particle_color(theme);
        for p in &mut self.particles {
            p.color = color;
        }
    }

    /// One animation frame.
    pub fn step(&mut self) {
        let color = particle_color(self.theme);
        for p in &mut self.particles {
            p.advance(self.width, self.height);
            p.color = color;
        }
    }
}
