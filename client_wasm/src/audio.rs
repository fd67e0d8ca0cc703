//! Web Audio playback for game sound cues and background music
//!
//! Buffers are fetched and decoded by the page and handed over by name.
//! Every failure here is logged and swallowed.

use game_core::{AudioSink, SoundCue};
use std::collections::HashMap;
use wasm_bindgen::JsValue;
use web_sys::{AudioBuffer, AudioBufferSourceNode, AudioContext, AudioContextState, GainNode};

pub const MUSIC: &str = "bgMusic";
const MUSIC_VOLUME: f32 = 0.2;
const MUSIC_FADE_IN_S: f64 = 1.0;
const MUTE_RAMP_S: f64 = 0.3;

pub struct SoundManager {
    ctx: Option<AudioContext>,
    buffers: HashMap<String, AudioBuffer>,
    music_source: Option<AudioBufferSourceNode>,
    music_gain: Option<GainNode>,
    muted: bool,
    interacted: bool,
}

impl SoundManager {
    pub fn new() -> Self {
        Self {
            ctx: None,
            buffers: HashMap::new(),
            music_source: None,
            music_gain: None,
            muted: false,
            interacted: false,
        }
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Create the audio context on the first user gesture
    pub fn unlock(&mut self) {
        self.interacted = true;
        if self.ctx.is_some() {
            return;
        }
        match AudioContext::new() {
            Ok(ctx) => {
                log::info!("audio context created");
                self.ctx = Some(ctx);
            }
            Err(err) => log::error!("failed to create audio context: {:?}", err),
        }
    }

    /// Context for the page to decode buffers with
    pub fn context(&self) -> Option<&AudioContext> {
        self.ctx.as_ref()
    }

    pub fn register(&mut self, name: &str, buffer: AudioBuffer) {
        log::debug!("registered sound {name}");
        self.buffers.insert(name.to_string(), buffer);
        if name == MUSIC {
            self.play_music();
        }
    }

    pub fn play_music(&mut self) {
        if self.muted {
            return;
        }
        if let Err(err) = self.try_play_music() {
            log::error!("failed to play background music: {:?}", err);
        }
    }

    fn try_play_music(&mut self) -> Result<(), JsValue> {
        let (Some(ctx), Some(buffer)) = (self.ctx.as_ref(), self.buffers.get(MUSIC)) else {
            log::debug!("skipping background music, not loaded yet");
            return Ok(());
        };

        if let Some(old) = self.music_source.take() {
            old.stop()?;
            old.disconnect()?;
        }

        let source = ctx.create_buffer_source()?;
        source.set_buffer(Some(buffer));
        source.set_loop(true);

        let gain = match &self.music_gain {
            Some(gain) => gain.clone(),
            None => {
                let gain = ctx.create_gain()?;
                gain.connect_with_audio_node(&ctx.destination())?;
                self.music_gain = Some(gain.clone());
                gain
            }
        };

        let now = ctx.current_time();
        gain.gain().set_value_at_time(0.0, now)?;
        gain.gain()
            .linear_ramp_to_value_at_time(MUSIC_VOLUME, now + MUSIC_FADE_IN_S)?;

        source.connect_with_audio_node(&gain)?;
        source.start()?;
        self.music_source = Some(source);
        Ok(())
    }

    fn try_play(&self, cue: SoundCue) -> Result<(), JsValue> {
        let (Some(ctx), Some(buffer)) = (self.ctx.as_ref(), self.buffers.get(cue.name())) else {
            return Ok(());
        };

        if ctx.state() == AudioContextState::Suspended {
            let _ = ctx.resume()?;
        }

        let source = ctx.create_buffer_source()?;
        source.set_buffer(Some(buffer));

        let gain = ctx.create_gain()?;
        gain.gain().set_value(cue.volume());

        source.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&ctx.destination())?;
        source.start()?;
        Ok(())
    }
}

impl Default for SoundManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioSink for SoundManager {
    fn play(&mut self, cue: SoundCue) {
        if self.muted || !self.interacted {
            log::debug!("skipping {} sound", cue.name());
            return;
        }
        if let Err(err) = self.try_play(cue) {
            log::error!("failed to play {} sound: {:?}", cue.name(), err);
        }
    }

    fn resume(&mut self) {
        let Some(ctx) = self.ctx.as_ref() else {
            return;
        };
        if ctx.state() == AudioContextState::Suspended {
            if let Err(err) = ctx.resume() {
                log::error!("failed to resume audio: {:?}", err);
            }
        }
        if self.music_source.is_none() {
            self.play_music();
        }
    }

    fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        log::info!("sound muted: {}", self.muted);

        let target = if self.muted { 0.0 } else { MUSIC_VOLUME };
        let ramped = match (self.ctx.as_ref(), self.music_gain.as_ref()) {
            (Some(ctx), Some(gain)) => {
                let end = ctx.current_time() + MUTE_RAMP_S;
                if let Err(err) = gain.gain().linear_ramp_to_value_at_time(target, end) {
                    log::error!("failed to ramp music volume: {:?}", err);
                }
                true
            }
            _ => false,
        };
        if !ramped && !self.muted {
            self.play_music();
        }
        self.muted
    }
}
