//! Magic cursor effect
//!
//! A rainbow cursor that sheds particles every frame. Holding the pointer
//! down switches to "magic mode": bigger white particles and a background
//! that follows the rainbow.

use crate::color::Rgb;
use crate::params::CursorParams;
use crate::GameRng;
use glam::Vec2;
use rand::Rng;

/// Cycles through the rainbow palette, blending between neighbours
#[derive(Debug, Clone)]
pub struct RainbowCycle {
    palette: Vec<Rgb>,
    index: usize,
    progress: f32,
    speed: f32,
}

impl RainbowCycle {
    pub fn new(palette: Vec<Rgb>, speed: f32) -> Self {
        Self {
            palette,
            index: 0,
            progress: 0.0,
            speed,
        }
    }

    pub fn rainbow() -> Self {
        let palette = CursorParams::RAINBOW
            .iter()
            .filter_map(|hex| Rgb::from_hex(hex).ok())
            .collect();
        Self::new(palette, CursorParams::COLOR_TRANSITION_SPEED)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn advance(&mut self) {
        if self.palette.is_empty() {
            return;
        }
        self.progress += self.speed;
        if self.progress >= 1.0 {
            self.progress = 0.0;
            self.index = (self.index + 1) % self.palette.len();
        }
    }

    /// Current colour, rounded per channel
    pub fn current(&self) -> Rgb {
        let len = self.palette.len();
        if len == 0 {
            return Rgb::WHITE;
        }
        let from = self.palette[self.index];
        let to = self.palette[(self.index + 1) % len];
        let [r, g, b] = from.lerp(to, self.progress).to_bytes();
        Rgb::new(r.into(), g.into(), b.into())
    }
}

/// Where a particle is painted
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParticleShape {
    /// Magic mode: glowing disc centred on the particle
    Disc { center: Vec2, radius: f32 },
    /// Normal mode: square with its top-left corner on the particle
    Square { origin: Vec2, side: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub life: f32,
    pub decay: f32,
    pub color: Rgb,
}

impl Particle {
    pub fn update(&mut self) {
        self.pos += self.vel;
        self.life -= self.decay;
    }

    pub fn is_dead(&self) -> bool {
        self.life <= 0.0
    }

    pub fn shape(&self, magic: bool) -> ParticleShape {
        if magic {
            ParticleShape::Disc {
                center: self.pos,
                radius: self.size,
            }
        } else {
            ParticleShape::Square {
                origin: self.pos,
                side: self.size,
            }
        }
    }
}

pub struct CursorFx {
    pub pointer: Vec2,
    pub particles: Vec<Particle>,
    pub max_particles: usize,
    magic: bool,
    cycle: RainbowCycle,
    rng: GameRng,
}

impl CursorFx {
    pub fn new(seed: u64) -> Self {
        Self {
            pointer: Vec2::ZERO,
            particles: Vec::with_capacity(CursorParams::MAX_PARTICLES),
            max_particles: CursorParams::MAX_PARTICLES,
            magic: false,
            cycle: RainbowCycle::rainbow(),
            rng: GameRng::new(seed),
        }
    }

    pub fn is_magic(&self) -> bool {
        self.magic
    }

    pub fn pointer_move(&mut self, pos: Vec2) {
        self.pointer = pos;
    }

    pub fn press(&mut self) {
        self.magic = true;
    }

    pub fn release(&mut self) {
        self.magic = false;
    }

    pub fn color(&self) -> Rgb {
        self.cycle.current()
    }

    /// Page background: the rainbow while held, black otherwise
    pub fn background(&self) -> Rgb {
        if self.magic {
            self.color()
        } else {
            Rgb::BLACK
        }
    }

    pub fn caption(&self) -> &'static str {
        if self.magic {
            CursorParams::CAPTION_MAGIC
        } else {
            CursorParams::CAPTION_IDLE
        }
    }

    /// One animation frame: colour, emit, integrate, cull
    pub fn step(&mut self) {
        self.cycle.advance();
        self.emit();
        for particle in &mut self.particles {
            particle.update();
        }
        self.particles.retain(|particle| !particle.is_dead());
    }

    fn emit(&mut self) {
        if self.particles.len() >= self.max_particles {
            return;
        }

        let rng = &mut self.rng.0;
        let vel = Vec2::new(
            (rng.gen::<f32>() - 0.5) * 4.0,
            rng.gen::<f32>() * 2.0 + 1.0,
        );
        let (size, color) = if self.magic {
            (rng.gen::<f32>() * 8.0 + 4.0, Rgb::WHITE)
        } else {
            (rng.gen::<f32>() * 4.0 + 2.0, self.cycle.current())
        };
        let decay = 0.02 + rng.gen::<f32>() * 0.03;

        self.particles.push(Particle {
            pos: self.pointer,
            vel,
            size,
            life: 1.0,
            decay,
            color,
        });
    }
}
