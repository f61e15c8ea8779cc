use anyhow::Result;
use raylib::prelude::*;

/// Per-frame input snapshot, gathered once by the host loop and routed to
/// the mounted widgets. Widgets never subscribe to global input themselves,
/// so teardown can never leave a dangling handler behind.
pub struct FrameInput {
    pub mouse: Vector2,
    pub clicked: bool,
    pub previous_pressed: bool,
    pub next_pressed: bool,
    pub window_width: f32,
    pub window_height: f32,
}

impl FrameInput {
    pub fn gather(rl: &RaylibHandle) -> Self {
        Self {
            mouse: rl.get_mouse_position(),
            clicked: rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT),
            previous_pressed: rl.is_key_pressed(KeyboardKey::KEY_LEFT),
            next_pressed: rl.is_key_pressed(KeyboardKey::KEY_RIGHT),
            window_width: rl.get_screen_width() as f32,
            window_height: rl.get_screen_height() as f32,
        }
    }
}

/// A self-contained UI element driven by the host frame loop.
pub trait Widget {
    /// Acquire resources and wire the widget up. Called once before the
    /// first frame.
    fn mount(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) -> Result<()>;

    /// React to this frame's input. Only called while mounted.
    fn handle_input(&mut self, _input: &FrameInput) {}

    /// Advance time-driven behavior by `dt` seconds.
    fn update(&mut self, _dt: f32) {}

    fn draw(&self, d: &mut RaylibDrawHandle);

    /// Release resources and stop timers. Idempotent.
    fn unmount(&mut self) {}
}
