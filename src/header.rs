use anyhow::Result;
use raylib::core::text::measure_text;
use raylib::prelude::*;
use tracing::debug;

use crate::constants::*;
use crate::widget::Widget;

#[derive(Debug, Clone)]
pub struct NavLink {
    pub label: String,
    pub target: String,
}

impl NavLink {
    pub fn new(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
        }
    }
}

/// Static navigation bar across the top of the window. Render-only: no
/// state, no input handling, no teardown behavior.
pub struct HeaderNav {
    links: Vec<NavLink>,
}

impl HeaderNav {
    pub fn new(links: Vec<NavLink>) -> Self {
        Self { links }
    }

    pub fn with_default_links() -> Self {
        Self::new(vec![
            NavLink::new("Home", "/"),
            NavLink::new("About", "/about"),
            NavLink::new("Contact", "/contact"),
        ])
    }

}

impl Widget for HeaderNav {
    fn mount(&mut self, _rl: &mut RaylibHandle, _thread: &RaylibThread) -> Result<()> {
        for link in &self.links {
            debug!(label = %link.label, target = %link.target, "nav link");
        }
        Ok(())
    }

    fn draw(&self, d: &mut RaylibDrawHandle) {
        let bar = Rectangle::new(0.0, 0.0, d.get_screen_width() as f32, HEADER_HEIGHT);
        d.draw_rectangle_rec(bar, Color::new(17, 24, 39, 255));

        let mut x = CAROUSEL_MARGIN;
        let y = ((HEADER_HEIGHT - NAV_FONT_SIZE as f32) * 0.5) as i32;
        for link in &self.links {
            d.draw_text(&link.label, x as i32, y, NAV_FONT_SIZE, Color::WHITE);
            x += measure_text(&link.label, NAV_FONT_SIZE) as f32 + NAV_LINK_GAP;
        }
    }
}
