//! Sound effects and background music, fed fire-and-forget from game events.
use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::Path;
use std::sync::Arc;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};
use tracing::{debug, warn};

use crate::config::AudioConfig;
use crate::core::events::GameEvent;
use crate::core::session::Phase;

type Clip = Option<Arc<Vec<u8>>>;

fn load_bytes(path: &Path) -> Option<Vec<u8>> {
    let mut f = File::open(path).ok()?;
    let mut buf = Vec::new();
    f.read_to_end(&mut buf).ok()?;
    Some(buf)
}

fn load_bytes_any(dir: &Path, names: &[&str]) -> Option<Vec<u8>> {
    let found = names.iter().find_map(|n| load_bytes(&dir.join(n)));
    if found.is_none() {
        debug!(dir = %dir.display(), candidates = ?names, "no sound file found");
    }
    found
}

fn decode(bytes: &Arc<Vec<u8>>) -> Option<Decoder<BufReader<Cursor<Vec<u8>>>>> {
    Decoder::new(BufReader::new(Cursor::new(bytes.as_ref().clone()))).ok()
}

pub struct AudioManager {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    sfx_sink: Sink,
    alert_sink: Sink,
    bg_sink: Option<Sink>,
    engine: Clip,
    collect: Clip,
    unlock: Clip,
    low_fuel: Clip,
    music: Clip,
    music_volume: f32,
    alert_volume: f32,
}

impl AudioManager {
    /// Opens the default output device. `None` when there is no device.
    pub fn new(cfg: &AudioConfig) -> Option<Self> {
        let (_stream, handle) = match OutputStream::try_default() {
            Ok(pair) => pair,
            Err(e) => {
                warn!(error = %e, "no audio output device, continuing without sound");
                return None;
            }
        };
        let sinks = Sink::try_new(&handle).and_then(|sfx| Ok((sfx, Sink::try_new(&handle)?)));
        let (sfx_sink, alert_sink) = match sinks {
            Ok(pair) => pair,
            Err(e) => {
                warn!(error = %e, "could not open audio sinks, continuing without sound");
                return None;
            }
        };
        Some(Self {
            _stream,
            handle,
            sfx_sink,
            alert_sink,
            bg_sink: None,
            engine: None,
            collect: None,
            unlock: None,
            low_fuel: None,
            music: None,
            music_volume: cfg.music_volume,
            alert_volume: cfg.alert_volume,
        })
    }

    pub fn load_sfx_auto(&mut self, dir: &Path) {
        self.engine = load_bytes_any(dir, &["carmove.wav", "sounds/carmove.wav", "sounds/move.wav"]).map(Arc::new);
        self.collect = load_bytes_any(
            dir,
            &["Collectsound.mp3", "collect.wav", "sounds/collect.wav", "sounds/collect.mp3"],
        )
        .map(Arc::new);
        self.unlock = load_bytes_any(dir, &["Unlock.wav", "unlock.wav", "sounds/unlock.wav"]).map(Arc::new);
        self.low_fuel = load_bytes_any(
            dir,
            &["low battery.wav", "low_fuel.wav", "sounds/low_fuel.wav", "sounds/alert.wav"],
        )
        .map(Arc::new);
        self.music = load_bytes_any(
            dir,
            &["backgroundmusic.mp3", "music.mp3", "sounds/music.mp3", "sounds/music.ogg", "sounds/music.wav"],
        )
        .map(Arc::new);
    }

    pub fn handle(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Moved { .. } => self.play_data(&self.engine),
            GameEvent::FuelCollected { .. } => self.play_detached(&self.collect),
            GameEvent::WallUnlocked { .. } => self.play_detached(&self.unlock),
            GameEvent::LowFuel { .. } => self.play_alert(),
            GameEvent::PhaseChanged { to: Phase::Briefing, .. } => self.play_music_loop(),
            GameEvent::PhaseChanged { to, .. } if to.is_over() => self.stop_music(),
            _ => {}
        }
    }

    fn play_data(&self, clip: &Clip) {
        if let Some(dec) = clip.as_ref().and_then(decode) {
            self.sfx_sink.append(dec);
        }
    }

    /// Own sink so pickups never queue behind engine noise.
    fn play_detached(&self, clip: &Clip) {
        if let Some(dec) = clip.as_ref().and_then(decode) {
            if let Ok(sink) = Sink::try_new(&self.handle) {
                sink.append(dec);
                sink.detach();
            }
        }
    }

    /// The alert fires on every low-fuel move; skip it while one is still playing.
    fn play_alert(&self) {
        if !self.alert_sink.empty() {
            return;
        }
        if let Some(dec) = self.low_fuel.as_ref().and_then(decode) {
            self.alert_sink.append(dec.amplify(self.alert_volume.clamp(0.0, 2.5)));
        }
    }

    pub fn play_music_loop(&mut self) {
        if self.bg_sink.is_some() {
            return;
        }
        let Some(bytes) = self.music.clone() else { return };
        if let Ok(dec) = Decoder::new_looped(Cursor::new(bytes.as_ref().clone())) {
            if let Ok(sink) = Sink::try_new(&self.handle) {
                sink.append(dec);
                sink.set_volume(self.music_volume.clamp(0.0, 1.5));
                self.bg_sink = Some(sink);
            }
        }
    }

    pub fn stop_music(&mut self) {
        if let Some(s) = self.bg_sink.take() {
            s.stop();
        }
    }
}
