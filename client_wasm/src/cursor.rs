//! Canvas drawing for the magic cursor page

use game_core::cursor::{CursorFx, ParticleShape};
use game_core::CursorParams;
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

#[wasm_bindgen]
pub struct MagicCursor {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    fx: CursorFx,
}

#[wasm_bindgen]
impl MagicCursor {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<MagicCursor, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("Context is not a CanvasRenderingContext2d"))?;

        Ok(Self {
            canvas,
            ctx,
            fx: CursorFx::new((js_sys::Math::random() * u64::MAX as f64) as u64),
        })
    }

    pub fn resize(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.fx.pointer_move(Vec2::new(x, y));
    }

    pub fn pointer_down(&mut self) {
        self.fx.press();
    }

    pub fn pointer_up(&mut self) {
        self.fx.release();
    }

    pub fn background_css(&self) -> String {
        self.fx.background().to_css()
    }

    pub fn caption(&self) -> String {
        self.fx.caption().to_string()
    }

    pub fn frame(&mut self) -> Result<(), JsValue> {
        self.fx.step();

        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;
        self.ctx.clear_rect(0.0, 0.0, width, height);

        self.draw_particles()?;
        self.draw_pointer()
    }
}

impl MagicCursor {
    fn draw_particles(&self) -> Result<(), JsValue> {
        let magic = self.fx.is_magic();
        for particle in &self.fx.particles {
            let color = particle.color.to_css();
            self.ctx.save();
            self.ctx.set_global_alpha(particle.life as f64);
            self.ctx.set_fill_style_str(&color);
            match particle.shape(magic) {
                ParticleShape::Disc { center, radius } => {
                    self.ctx.set_shadow_blur(CursorParams::PARTICLE_GLOW as f64);
                    self.ctx.set_shadow_color(&color);
                    self.ctx.begin_path();
                    self.ctx
                        .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)?;
                    self.ctx.fill();
                }
                ParticleShape::Square { origin, side } => {
                    let side = side as f64;
                    self.ctx
                        .fill_rect(origin.x as f64, origin.y as f64, side, side);
                }
            }
            self.ctx.restore();
        }
        Ok(())
    }

    /// Glowing disc in the current rainbow colour with a white core
    fn draw_pointer(&self) -> Result<(), JsValue> {
        let x = self.fx.pointer.x as f64;
        let y = self.fx.pointer.y as f64;
        let color = self.fx.color().to_css();

        self.ctx.save();
        self.ctx.set_shadow_blur(CursorParams::CURSOR_GLOW as f64);
        self.ctx.set_shadow_color(&color);
        self.ctx.set_fill_style_str(&color);
        self.ctx.begin_path();
        self.ctx
            .arc(x, y, CursorParams::CURSOR_RADIUS as f64, 0.0, TAU)?;
        self.ctx.fill();

        self.ctx.set_shadow_blur(0.0);
        self.ctx.set_fill_style_str("white");
        self.ctx.begin_path();
        self.ctx
            .arc(x, y, CursorParams::CURSOR_CORE_RADIUS as f64, 0.0, TAU)?;
        self.ctx.fill();
        self.ctx.restore();
        Ok(())
    }
}
