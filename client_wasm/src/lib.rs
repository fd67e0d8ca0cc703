//! Browser client for Flappy
//!
//! Canvas 2D rendering and Web Audio playback around the `game_core`
//! session. The page owns the `requestAnimationFrame` loop and the DOM
//! listeners and forwards them to `FlappyClient` and `MagicCursor`.

pub mod input;
pub mod layout;

#[cfg(target_arch = "wasm32")]
mod audio;
#[cfg(target_arch = "wasm32")]
mod cursor;
#[cfg(target_arch = "wasm32")]
mod render;

#[cfg(target_arch = "wasm32")]
pub use cursor::MagicCursor;
#[cfg(target_arch = "wasm32")]
pub use wasm::*;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use crate::audio::SoundManager;
    use crate::input::{handle_pointer_down, key_event};
    use crate::layout::display_size;
    use crate::render::CanvasRenderer;
    use game_core::*;
    use wasm_bindgen::prelude::*;
    use web_sys::{AudioBuffer, AudioContext, HtmlCanvasElement};

    /// Game session plus the browser pieces it drives
    #[wasm_bindgen]
    pub struct FlappyClient {
        session: GameSession,
        renderer: CanvasRenderer,
        canvas: HtmlCanvasElement,
        audio: SoundManager,
    }

    fn random_seed() -> u64 {
        (js_sys::Math::random() * u64::MAX as f64) as u64
    }

    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"logger already initialized".into());
        }
    }

    impl FlappyClient {
        /// Returns the new mute state when the input toggled it
        fn input(&mut self, event: InputEvent) -> Option<bool> {
            self.audio.unlock();
            let outcome = self.session.handle_input(event);
            log::debug!("input {:?} -> {:?}", event.kind, outcome);
            self.flush_audio()
        }

        fn flush_audio(&mut self) -> Option<bool> {
            let events = self.session.take_events();
            dispatch(events.audio, &mut self.audio)
        }
    }

    #[wasm_bindgen]
    impl FlappyClient {
        /// Create the game on `canvas`, optionally overriding settings with JSON
        #[wasm_bindgen(constructor)]
        pub fn new(
            canvas: HtmlCanvasElement,
            config_json: Option<String>,
        ) -> Result<FlappyClient, JsValue> {
            let config = match config_json {
                Some(json) => Config::from_json(&json)
                    .map_err(|e| JsValue::from_str(&format!("Invalid config: {e}")))?,
                None => Config::new(),
            };
            let renderer = CanvasRenderer::new(&canvas, &config)?;
            let session = GameSession::new(config, random_seed());
            log::info!("flappy client ready");
            Ok(Self {
                session,
                renderer,
                canvas,
                audio: SoundManager::new(),
            })
        }

        /// Mute state after the key, if the key was the mute toggle
        pub fn handle_key(&mut self, key: &str, timestamp: f64) -> Option<bool> {
            self.input(key_event(key, timestamp))
        }

        pub fn handle_pointer(&mut self, timestamp: f64) {
            self.input(handle_pointer_down(timestamp));
        }

        /// Flip the mute flag, returning the new state
        pub fn toggle_mute(&mut self, timestamp: f64) -> bool {
            self.session
                .handle_input(InputEvent::toggle_mute(timestamp));
            let muted = self.flush_audio();
            muted.unwrap_or_else(|| self.audio.is_muted())
        }

        pub fn unlock_audio(&mut self) {
            self.audio.unlock();
        }

        /// Audio context used by the page to decode sound files
        pub fn audio_context(&self) -> Option<AudioContext> {
            self.audio.context().cloned()
        }

        /// Hand over a decoded buffer: "jump", "score", "gameOver" or "bgMusic"
        pub fn register_sound(&mut self, name: &str, buffer: AudioBuffer) {
            if name != crate::audio::MUSIC && SoundCue::from_name(name).is_none() {
                log::warn!("ignoring unknown sound {name}");
                return;
            }
            self.audio.register(name, buffer);
        }

        pub fn run_frame(&mut self, timestamp: f64) -> Result<(), JsValue> {
            self.session.run_frame(timestamp);
            self.flush_audio();
            self.renderer
                .draw(&self.session.snapshot(), &self.session.config)
        }

        pub fn phase(&self) -> String {
            self.session.phase().as_str().to_string()
        }

        pub fn score(&self) -> u32 {
            self.session.score()
        }

        /// Scale the canvas CSS size to the window, keeping its aspect ratio
        pub fn fit_to_window(&self, window_w: f64, window_h: f64) -> Result<(), JsValue> {
            let config = &self.session.config;
            let (w, h) = display_size(
                config.canvas_width as f64,
                config.canvas_height as f64,
                window_w,
                window_h,
            );
            let style = self.canvas.style();
            style.set_property("width", &format!("{w}px"))?;
            style.set_property("height", &format!("{h}px"))
        }
    }
}
