//! Canvas 2D drawing for the Flappy play field

use game_core::{Config, Phase, Pipe, Snapshot};
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const OUTLINE_WIDTH: f64 = 2.0;
const SCORE_FONT: &str = "48px Arial";
const SCORE_COLOR: &str = "white";
const SCORE_STROKE: &str = "#2c3e50";
const SCORE_STROKE_WIDTH: f64 = 4.0;
const SCORE_TOP: f64 = 20.0;
const PROMPT_FONT: &str =
    "20px system-ui, -apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, sans-serif";
const PROMPT_COLOR: &str = "rgba(255, 255, 255, 0.8)";
const PROMPT_TEXT: &str = "Press any key or tap to start";
const BANNER_FONT: &str = "bold 40px Arial";
const BANNER_SHADE: &str = "rgba(0, 0, 0, 0.45)";

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement, config: &Config) -> Result<Self, JsValue> {
        canvas.set_width(config.canvas_width as u32);
        canvas.set_height(config.canvas_height as u32);

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("Context is not a CanvasRenderingContext2d"))?;

        Ok(Self {
            ctx,
            width: config.canvas_width as f64,
            height: config.canvas_height as f64,
        })
    }

    pub fn draw(&self, snapshot: &Snapshot, config: &Config) -> Result<(), JsValue> {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);

        for pipe in &snapshot.pipes {
            self.draw_pipe(pipe, config);
        }
        self.draw_bird(snapshot, config)?;

        match snapshot.phase {
            Phase::Ready => self.draw_prompt()?,
            Phase::Playing => self.draw_score(snapshot.score)?,
            Phase::GameOver => self.draw_game_over(snapshot.score)?,
        }
        Ok(())
    }

    fn draw_pipe(&self, pipe: &Pipe, config: &Config) {
        let fill = config.pipe_color.to_hex();
        let stroke = config.pipe_stroke_color.to_hex();
        for rect in [pipe.top_rect(config), pipe.bottom_rect(config)] {
            self.ctx.begin_path();
            self.ctx.rect(
                rect.min.x as f64,
                rect.min.y as f64,
                rect.width() as f64,
                rect.height() as f64,
            );
            self.ctx.set_fill_style_str(&fill);
            self.ctx.fill();
            self.ctx.set_stroke_style_str(&stroke);
            self.ctx.set_line_width(OUTLINE_WIDTH);
            self.ctx.stroke();
        }
    }

    fn draw_bird(&self, snapshot: &Snapshot, config: &Config) -> Result<(), JsValue> {
        let bird = &snapshot.bird;
        self.ctx.begin_path();
        self.ctx.arc(
            bird.pos.x as f64,
            bird.pos.y as f64,
            config.bird_radius as f64,
            0.0,
            TAU,
        )?;
        self.ctx.set_fill_style_str(&bird.color.to_hex());
        self.ctx.fill();
        self.ctx.set_stroke_style_str(&config.bird_stroke_color.to_hex());
        self.ctx.set_line_width(OUTLINE_WIDTH);
        self.ctx.stroke();
        Ok(())
    }

    fn draw_score(&self, score: u32) -> Result<(), JsValue> {
        let text = score.to_string();
        self.ctx.save();
        self.ctx.set_font(SCORE_FONT);
        self.ctx.set_fill_style_str(SCORE_COLOR);
        self.ctx.set_stroke_style_str(SCORE_STROKE);
        self.ctx.set_line_width(SCORE_STROKE_WIDTH);
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("top");
        self.ctx.stroke_text(&text, self.width / 2.0, SCORE_TOP)?;
        self.ctx.fill_text(&text, self.width / 2.0, SCORE_TOP)?;
        self.ctx.restore();
        Ok(())
    }

    fn draw_prompt(&self) -> Result<(), JsValue> {
        self.ctx.save();
        self.ctx.set_fill_style_str(PROMPT_COLOR);
        self.ctx.set_font(PROMPT_FONT);
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        self.ctx
            .fill_text(PROMPT_TEXT, self.width / 2.0, self.height * 0.4)?;
        self.ctx.restore();
        Ok(())
    }

    /// Shaded overlay with the final score
    fn draw_game_over(&self, score: u32) -> Result<(), JsValue> {
        self.ctx.save();
        self.ctx.set_fill_style_str(BANNER_SHADE);
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);

        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        self.ctx.set_fill_style_str(SCORE_COLOR);
        self.ctx.set_stroke_style_str(SCORE_STROKE);
        self.ctx.set_line_width(SCORE_STROKE_WIDTH);

        self.ctx.set_font(BANNER_FONT);
        let y = self.height * 0.4;
        self.ctx.stroke_text("Game Over", self.width / 2.0, y)?;
        self.ctx.fill_text("Game Over", self.width / 2.0, y)?;

        let line = format!("Score: {score}");
        self.ctx.set_font(PROMPT_FONT);
        self.ctx.fill_text(&line, self.width / 2.0, y + 50.0)?;
        self.ctx.restore();
        Ok(())
    }
}
