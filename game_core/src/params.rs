/// Game tuning parameters for Flappy
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Canvas (pixels)
    pub const CANVAS_WIDTH: f32 = 400.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    // Bird
    pub const BIRD_RADIUS: f32 = 20.0;
    pub const JUMP_STRENGTH: f32 = -10.0; // px per frame, negative is up
    pub const GRAVITY: f32 = 0.5; // px per frame squared
    pub const BIRD_COLOR: &'static str = "#FFD700";
    pub const JUMP_COLOR: &'static str = "#FFA500";
    pub const BIRD_STROKE_COLOR: &'static str = "#B8860B";
    pub const COLOR_TRANSITION_SPEED: f32 = 0.1;
    pub const HOVER_AMOUNT: f32 = 8.0;
    pub const HOVER_SPEED: f32 = 0.02; // radians per frame
    pub const HITBOX_PADDING: f32 = 5.0; // extra vertical reach of the hitbox

    // Pipes
    pub const PIPE_WIDTH: f32 = 60.0;
    pub const PIPE_GAP: f32 = 170.0;
    pub const PIPE_SPEED: f32 = 2.0; // px per frame
    pub const PIPE_MIN_HEIGHT: f32 = 50.0;
    pub const PIPE_MIN_SPACING: f32 = 220.0;
    pub const PIPE_SEED_OFFSET: f32 = 50.0; // seeded pipe starts past the right edge
    pub const PIPE_COLOR: &'static str = "#43A047";
    pub const PIPE_STROKE_COLOR: &'static str = "#2E7D32";

    // Timing (milliseconds)
    pub const SPAWN_INTERVAL_MS: f64 = 1800.0;
    pub const INITIAL_DELAY_MS: f64 = 2000.0;
    pub const RESTART_COOLDOWN_MS: f64 = 500.0;
}

/// Tuning for the magic cursor effect
#[derive(Debug, Clone, Copy)]
pub struct CursorParams;

impl CursorParams {
    pub const MAX_PARTICLES: usize = 50;
    pub const COLOR_TRANSITION_SPEED: f32 = 0.04;
    pub const CURSOR_RADIUS: f32 = 8.0;
    pub const CURSOR_CORE_RADIUS: f32 = 4.0;
    pub const CURSOR_GLOW: f32 = 15.0;
    pub const PARTICLE_GLOW: f32 = 10.0;

    pub const RAINBOW: [&'static str; 12] = [
        "#ff0000", "#ff8000", "#ffff00", "#80ff00", "#00ff00", "#00ff80", "#00ffff", "#0080ff",
        "#0000ff", "#8000ff", "#ff00ff", "#ff0080",
    ];

    pub const CAPTION_IDLE: &'static str = "Click to see magic.";
    pub const CAPTION_MAGIC: &'static str = "Isn't it cool?!";
}
