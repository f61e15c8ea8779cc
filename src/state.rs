use crate::constants::*;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum FadePhase {
    Idle,      // Displayed slide fully opaque, nothing pending
    FadingOut, // Opacity falling toward zero, swap happens at the bottom
    FadingIn,  // Swap done, opacity rising back to one
}

/// Repeating auto-advance timer driven by frame time.
///
/// Starting the timer always discards the previous accumulation, so two
/// consecutive starts still produce exactly one advance per interval.
#[derive(Debug)]
pub struct AutoAdvance {
    interval: f32,
    elapsed: f32,
    running: bool,
}

impl AutoAdvance {
    fn new(interval: f32) -> Self {
        Self {
            interval,
            elapsed: 0.0,
            running: false,
        }
    }

    pub fn start(&mut self) {
        self.elapsed = 0.0;
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    fn tick(&mut self, dt: f32) -> bool {
        if !self.running {
            return false;
        }
        self.elapsed += dt;
        if self.elapsed >= self.interval {
            self.elapsed = 0.0;
            true
        } else {
            false
        }
    }
}

/// Pure carousel state: cursor, auto-advance timer and cross-fade.
///
/// `cursor` is where navigation is heading; `shown` is what the render step
/// displays. They differ only while a fade-out is in flight, and `shown`
/// always converges to the latest `cursor`.
pub struct CarouselState {
    slide_count: usize,
    cursor: usize,
    shown: usize,
    fade: FadePhase,
    opacity: f32,
    timer: AutoAdvance,
}

impl CarouselState {
    /// `slide_count` must be >= 1; configuration validation guarantees it.
    pub fn new(slide_count: usize, interval: f32) -> Self {
        debug_assert!(slide_count >= 1);
        Self {
            slide_count,
            cursor: 0,
            shown: 0,
            // The first slide fades in from black, like the initial render
            fade: FadePhase::FadingIn,
            opacity: 0.0,
            timer: AutoAdvance::new(interval),
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn shown(&self) -> usize {
        self.shown
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn is_fading(&self) -> bool {
        self.fade != FadePhase::Idle
    }

    pub fn start_auto_advance(&mut self) {
        self.timer.start();
    }

    pub fn stop_auto_advance(&mut self) {
        self.timer.stop();
    }

    /// Resume after a hover pause. Always a fresh interval, never the
    /// remainder of the interrupted one.
    pub fn resume_auto_advance(&mut self) {
        self.timer.start();
    }

    pub fn next(&mut self) {
        let target = (self.cursor + 1) % self.slide_count;
        self.timer.start();
        self.begin_transition(target);
    }

    pub fn previous(&mut self) {
        let target = (self.cursor + self.slide_count - 1) % self.slide_count;
        self.timer.start();
        self.begin_transition(target);
    }

    /// Jump straight to slide `k` (dot indicator click).
    pub fn jump_to(&mut self, k: usize) {
        debug_assert!(k < self.slide_count);
        self.timer.start();
        self.begin_transition(k);
    }

    fn begin_transition(&mut self, target: usize) {
        if target == self.cursor {
            // Single-slide deck, or a dot click on the slide already heading
            // in. The timer reset above still applies.
            return;
        }
        self.cursor = target;
        // Redirect any in-flight fade: opacity keeps falling from its
        // current value and the swap picks up the latest cursor.
        self.fade = FadePhase::FadingOut;
    }

    /// Advance the timer and the fade by one frame.
    pub fn tick(&mut self, dt: f32) {
        if self.timer.tick(dt) {
            let target = (self.cursor + 1) % self.slide_count;
            self.begin_transition(target);
        }

        match self.fade {
            FadePhase::Idle => {}
            FadePhase::FadingOut => {
                self.opacity -= dt / FADE_OUT_DURATION;
                if self.opacity <= 0.0 {
                    self.opacity = 0.0;
                    self.shown = self.cursor;
                    self.fade = FadePhase::FadingIn;
                }
            }
            FadePhase::FadingIn => {
                self.opacity += dt / FADE_IN_DURATION;
                if self.opacity >= 1.0 {
                    self.opacity = 1.0;
                    self.fade = FadePhase::Idle;
                }
            }
        }
    }
}
