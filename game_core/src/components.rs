use crate::color::Rgb;
use crate::geometry::Aabb;
use crate::{Config, GameRng};
use glam::Vec2;

/// Bird component - the player
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bird {
    pub pos: Vec2,
    pub vel: f32, // Vertical only, positive is down
    pub color: Rgb,
    pub hover_time: f32,
}

impl Bird {
    pub fn new(config: &Config) -> Self {
        Self {
            pos: config.bird_spawn(),
            vel: 0.0,
            color: config.bird_color,
            hover_time: 0.0,
        }
    }

    /// Back to the centre of the canvas, at rest
    pub fn reset(&mut self, config: &Config) {
        *self = Self::new(config);
    }

    pub fn jump(&mut self, config: &Config) {
        self.vel = config.jump_strength;
        self.color = config.jump_color;
    }

    /// Idle bobbing while waiting for the first input
    pub fn hover(&mut self, config: &Config) {
        self.hover_time += config.hover_speed;
        self.pos.y = hover_y(self.hover_time, config);
    }

    /// One frame of gravity plus the colour fade back to rest
    pub fn fall(&mut self, config: &Config) {
        self.vel += config.gravity;
        self.pos.y += self.vel;
        self.color = self
            .color
            .lerp(config.bird_color, config.color_transition_speed);
    }

    pub fn is_out_of_bounds(&self, config: &Config) -> bool {
        self.pos.y + config.bird_radius > config.canvas_height
            || self.pos.y - config.bird_radius < 0.0
    }

    /// Elliptical hitbox: bird radius across, radius plus padding vertically
    pub fn collides_with(&self, rect: &Aabb, config: &Config) -> bool {
        let radii = Vec2::new(
            config.bird_radius,
            config.bird_radius + config.hitbox_padding,
        );
        rect.intersects_ellipse(self.pos, radii)
    }
}

/// Bird height while hovering, a pure function of hover time
pub fn hover_y(hover_time: f32, config: &Config) -> f32 {
    config.canvas_height / 2.0 + hover_time.sin() * config.hover_amount
}

/// Pipe component - one top/bottom pair around a gap
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pipe {
    pub seq: u32, // Creation order within a session
    pub x: f32,
    pub top_height: f32,
    pub bottom_height: f32,
    pub scored: bool,
}

impl Pipe {
    /// Pipe at the right edge with its gap starting at `gap_start`
    pub fn with_gap(seq: u32, gap_start: f32, config: &Config) -> Self {
        Self {
            seq,
            x: config.canvas_width,
            top_height: gap_start,
            bottom_height: config.canvas_height - gap_start - config.pipe_gap,
            scored: false,
        }
    }

    /// Pipe at the right edge with a uniformly random gap
    pub fn random(seq: u32, config: &Config, rng: &mut GameRng) -> Self {
        use rand::Rng;
        let (min, max) = config.gap_range();
        let gap_start = min + rng.0.gen::<f32>() * (max - min);
        Self::with_gap(seq, gap_start, config)
    }

    pub fn advance(&mut self, config: &Config) {
        self.x -= config.pipe_speed;
    }

    /// Edge-triggered: true only on the first call after the trailing edge
    /// passes `bird_x`
    pub fn check_score(&mut self, bird_x: f32, config: &Config) -> bool {
        if !self.scored && self.x + config.pipe_width < bird_x {
            self.scored = true;
            return true;
        }
        false
    }

    pub fn is_off_screen(&self, config: &Config) -> bool {
        self.x + config.pipe_width < 0.0
    }

    pub fn top_rect(&self, config: &Config) -> Aabb {
        Aabb::from_origin_size(self.x, 0.0, config.pipe_width, self.top_height)
    }

    pub fn bottom_rect(&self, config: &Config) -> Aabb {
        Aabb::from_origin_size(
            self.x,
            config.canvas_height - self.bottom_height,
            config.pipe_width,
            self.bottom_height,
        )
    }

    pub fn gap_start(&self) -> f32 {
        self.top_height
    }
}
