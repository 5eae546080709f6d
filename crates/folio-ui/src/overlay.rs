//! Full-screen matrix-rain overlay and its key listener.

use folio_terminal::OverlayMode;
use folio_types::input::Key;

const RAIN_GLYPHS: &str = "01アイウエオカキクケコ日月火水木金土";
const FRAME_INTERVAL_MS: u32 = 80;

/// Frame-based glyph rain driven by a deterministic PRNG.
///
/// Each tick past the frame interval renders one full frame of `height`
/// rows. The generator is a plain LCG, so a fixed seed produces a fixed
/// frame sequence.
#[derive(Debug)]
pub struct RainAnimation {
    width: usize,
    height: usize,
    seed: u64,
    accum_ms: u32,
    running: bool,
}

impl RainAnimation {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            seed: 0,
            accum_ms: 0,
            running: false,
        }
    }

    /// Begin producing frames from the given seed.
    pub fn start(&mut self, seed: u64) {
        self.seed = seed;
        self.accum_ms = 0;
        self.running = true;
    }

    /// Stop producing frames; pending elapsed time is discarded.
    pub fn cancel(&mut self) {
        self.running = false;
        self.accum_ms = 0;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance by `dt_ms`. Returns the next frame once enough time has
    /// accumulated, otherwise `None`.
    pub fn tick(&mut self, dt_ms: u32) -> Option<Vec<String>> {
        if !self.running {
            return None;
        }
        self.accum_ms += dt_ms;
        if self.accum_ms < FRAME_INTERVAL_MS {
            return None;
        }
        self.accum_ms -= FRAME_INTERVAL_MS;
        Some(self.render_frame())
    }

    fn render_frame(&mut self) -> Vec<String> {
        let glyphs: Vec<char> = RAIN_GLYPHS.chars().collect();
        let mut rows = Vec::with_capacity(self.height);
        for _ in 0..self.height {
            let mut row = String::new();
            for _ in 0..self.width {
                self.seed = self.seed.wrapping_mul(6364136223846793005).wrapping_add(1);
                let idx = ((self.seed >> 33) as usize) % (glyphs.len() + 2);
                // The two out-of-range slots render as gaps.
                if idx < glyphs.len() {
                    row.push(glyphs[idx]);
                } else {
                    row.push(' ');
                }
            }
            rows.push(row);
        }
        rows
    }
}

/// Ties the overlay flag to the rain animation and its key listener.
///
/// The controller never activates the flag; only the `matrix` command
/// does that. It follows the flag via [`sync`](Self::sync) and clears it
/// from the key listener.
#[derive(Debug)]
pub struct OverlayController {
    rain: RainAnimation,
}

impl OverlayController {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            rain: RainAnimation::new(width, height),
        }
    }

    pub fn rain(&self) -> &RainAnimation {
        &self.rain
    }

    /// Align the animation with the flag: start it when the flag went
    /// active since the last sync, cancel it when the flag went inactive
    /// (for example after the executor cleared it on a submission).
    pub fn sync(&mut self, overlay: &OverlayMode, seed: u64) {
        if overlay.is_active() && !self.rain.is_running() {
            log::debug!("overlay activated, starting rain");
            self.rain.start(seed);
        } else if !overlay.is_active() && self.rain.is_running() {
            self.rain.cancel();
        }
    }

    /// Advance the animation; returns a frame when one is due.
    pub fn tick(&mut self, dt_ms: u32) -> Option<Vec<String>> {
        self.rain.tick(dt_ms)
    }

    /// Overlay key listener. Returns `true` when the key was consumed.
    ///
    /// While the overlay is active every key is swallowed, and every key
    /// except Tab dismisses it. Tab is the "hold" key: the overlay keeps
    /// running.
    pub fn handle_key(&mut self, key: Key, overlay: &mut OverlayMode) -> bool {
        if !overlay.is_active() {
            return false;
        }
        if key == Key::Tab {
            return true;
        }
        log::debug!("overlay dismissed by key: {key:?}");
        overlay.deactivate();
        self.rain.cancel();
        true
    }
}
