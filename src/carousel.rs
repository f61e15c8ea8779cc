use anyhow::Result;
use raylib::core::text::measure_text;
use raylib::prelude::*;
use tracing::{debug, info, warn};

use crate::config::{CarouselOptions, IndicatorStyle};
use crate::constants::*;
use crate::slide::Slide;
use crate::state::CarouselState;
use crate::texture_loader::{prefetch_slide_images, upload_texture};
use crate::widget::{FrameInput, Widget};

/// Screen-space placement of the carousel parts, recomputed per frame so
/// window resizes just work.
pub struct Layout {
    pub frame: Rectangle,
    pub prev_center: Vector2,
    pub next_center: Vector2,
    pub dots: Vec<Vector2>,
}

impl Layout {
    pub fn compute(
        window_width: f32,
        window_height: f32,
        slide_count: usize,
        indicator: IndicatorStyle,
    ) -> Self {
        let frame_width = (window_width - 2.0 * CAROUSEL_MARGIN).min(CAROUSEL_MAX_WIDTH);
        let frame_height = frame_width * 9.0 / 16.0;
        let frame_x = (window_width - frame_width) * 0.5;
        let available = window_height - HEADER_HEIGHT;
        let frame_y = HEADER_HEIGHT + ((available - frame_height) * 0.5).max(CAROUSEL_MARGIN * 0.5);
        let frame = Rectangle::new(frame_x, frame_y, frame_width, frame_height);

        let mid_y = frame.y + frame.height * 0.5;
        let prev_center = Vector2::new(frame.x + BUTTON_INSET + BUTTON_RADIUS, mid_y);
        let next_center = Vector2::new(
            frame.x + frame.width - BUTTON_INSET - BUTTON_RADIUS,
            mid_y,
        );

        let dots = match indicator {
            IndicatorStyle::Counter => Vec::new(),
            IndicatorStyle::Dots => {
                let strip_width = (slide_count.saturating_sub(1)) as f32 * DOT_GAP;
                let first_x = frame.x + (frame.width - strip_width) * 0.5;
                let y = frame.y + frame.height - INDICATOR_INSET;
                (0..slide_count)
                    .map(|i| Vector2::new(first_x + i as f32 * DOT_GAP, y))
                    .collect()
            }
        };

        Self {
            frame,
            prev_center,
            next_center,
            dots,
        }
    }

    pub fn hit_prev(&self, point: Vector2) -> bool {
        point.distance_to(self.prev_center) <= BUTTON_RADIUS
    }

    pub fn hit_next(&self, point: Vector2) -> bool {
        point.distance_to(self.next_center) <= BUTTON_RADIUS
    }

    pub fn dot_at(&self, point: Vector2) -> Option<usize> {
        self.dots
            .iter()
            .position(|center| point.distance_to(*center) < DOT_HIT_RADIUS)
    }
}

/// The carousel widget: slide deck, navigation controls, indicator and
/// timer-driven auto-advance.
pub struct ImageCarousel {
    slides: Vec<Slide>,
    indicator: IndicatorStyle,
    state: CarouselState,
    textures: Vec<Option<Texture2D>>,
    layout: Layout,
    hovered: bool,
    mounted: bool,
}

impl ImageCarousel {
    pub fn new(options: CarouselOptions) -> Self {
        let slide_count = options.slides.len();
        let layout = Layout::compute(
            DEFAULT_WINDOW_WIDTH as f32,
            DEFAULT_WINDOW_HEIGHT as f32,
            slide_count,
            options.indicator,
        );
        Self {
            slides: options.slides,
            indicator: options.indicator,
            state: CarouselState::new(slide_count, options.interval),
            textures: Vec::new(),
            layout,
            hovered: false,
            mounted: false,
        }
    }

    fn draw_current_slide(&self, d: &mut RaylibDrawHandle) {
        let frame = self.layout.frame;
        let alpha = (self.state.opacity().clamp(0.0, 1.0) * 255.0) as u8;
        let shown = self.state.shown();

        match self.textures.get(shown) {
            Some(Some(texture)) => {
                // Fill the frame like object-fit: cover, cropping the source
                let tex_width = texture.width() as f32;
                let tex_height = texture.height() as f32;
                let scale = (frame.width / tex_width).max(frame.height / tex_height);
                let src_width = frame.width / scale;
                let src_height = frame.height / scale;
                let source = Rectangle::new(
                    (tex_width - src_width) * 0.5,
                    (tex_height - src_height) * 0.5,
                    src_width,
                    src_height,
                );
                d.draw_texture_pro(
                    texture,
                    source,
                    frame,
                    Vector2::zero(),
                    0.0,
                    Color::new(255, 255, 255, alpha),
                );
            }
            _ => {
                // The resource never loaded; the slide stays navigable and
                // shows its alt text instead
                let slide = &self.slides[shown];
                d.draw_rectangle_rec(frame, Color::new(31, 41, 55, alpha));
                let text_width = measure_text(&slide.alt_text, NAV_FONT_SIZE);
                d.draw_text(
                    &slide.alt_text,
                    (frame.x + (frame.width - text_width as f32) * 0.5) as i32,
                    (frame.y + frame.height * 0.5) as i32 - NAV_FONT_SIZE / 2,
                    NAV_FONT_SIZE,
                    Color::new(255, 255, 255, alpha),
                );
            }
        }
    }

    fn draw_controls(&self, d: &mut RaylibDrawHandle) {
        for (center, glyph) in [
            (self.layout.prev_center, "<"),
            (self.layout.next_center, ">"),
        ] {
            d.draw_circle_v(center, BUTTON_RADIUS, Color::new(0, 0, 0, 120));
            let glyph_size = NAV_FONT_SIZE + 4;
            let glyph_width = measure_text(glyph, glyph_size);
            d.draw_text(
                glyph,
                (center.x - glyph_width as f32 * 0.5) as i32,
                (center.y - glyph_size as f32 * 0.5) as i32,
                glyph_size,
                Color::WHITE,
            );
        }
    }

    fn draw_indicator(&self, d: &mut RaylibDrawHandle) {
        match self.indicator {
            IndicatorStyle::Counter => {
                let frame = self.layout.frame;
                let label = format!("{} / {}", self.state.shown() + 1, self.slides.len());
                let font_size = 16;
                let text_width = measure_text(&label, font_size);
                let badge = Rectangle::new(
                    frame.x + frame.width - INDICATOR_INSET - text_width as f32 - 24.0,
                    frame.y + frame.height - INDICATOR_INSET - 28.0,
                    text_width as f32 + 24.0,
                    28.0,
                );
                d.draw_rectangle_rounded(badge, 1.0, 8, Color::new(0, 0, 0, 153));
                d.draw_text(
                    &label,
                    (badge.x + 12.0) as i32,
                    (badge.y + (badge.height - font_size as f32) * 0.5) as i32,
                    font_size,
                    Color::WHITE,
                );
            }
            IndicatorStyle::Dots => {
                for (i, center) in self.layout.dots.iter().enumerate() {
                    let color = if i == self.state.cursor() {
                        Color::WHITE
                    } else {
                        Color::new(255, 255, 255, 127)
                    };
                    d.draw_circle_v(*center, DOT_RADIUS, color);
                }
            }
        }
    }
}

impl Widget for ImageCarousel {
    fn mount(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) -> Result<()> {
        // Fan out over all slides and wait for every fetch to settle; a
        // failed slide mounts as a placeholder
        let fetched = prefetch_slide_images(&self.slides);

        self.textures = fetched
            .iter()
            .zip(&self.slides)
            .map(|(outcome, slide)| {
                let fetched = outcome.as_ref()?;
                match upload_texture(rl, thread, &slide.source, fetched) {
                    Ok(texture) => Some(texture),
                    Err(e) => {
                        warn!(source = %slide.source.display(), error = %e, "failed to upload texture");
                        None
                    }
                }
            })
            .collect();

        let loaded = self.textures.iter().filter(|t| t.is_some()).count();
        info!(
            slides = self.slides.len(),
            loaded,
            "carousel mounted"
        );

        self.layout = Layout::compute(
            rl.get_screen_width() as f32,
            rl.get_screen_height() as f32,
            self.slides.len(),
            self.indicator,
        );
        self.state.start_auto_advance();
        self.mounted = true;
        Ok(())
    }

    fn handle_input(&mut self, input: &FrameInput) {
        if !self.mounted {
            return;
        }

        self.layout = Layout::compute(
            input.window_width,
            input.window_height,
            self.slides.len(),
            self.indicator,
        );

        // Hovering pauses auto-advance in the dots variant; leaving resumes
        // from a fresh interval
        if self.indicator == IndicatorStyle::Dots {
            let over = self.layout.frame.check_collision_point_rec(input.mouse);
            if over != self.hovered {
                self.hovered = over;
                if over {
                    self.state.stop_auto_advance();
                } else {
                    self.state.resume_auto_advance();
                }
            }
        }

        if input.previous_pressed {
            self.state.previous();
        }
        if input.next_pressed {
            self.state.next();
        }

        if input.clicked {
            if self.layout.hit_prev(input.mouse) {
                self.state.previous();
            } else if self.layout.hit_next(input.mouse) {
                self.state.next();
            } else if let Some(k) = self.layout.dot_at(input.mouse) {
                debug!(dot = k, "jump to slide");
                self.state.jump_to(k);
            }
        }
    }

    fn update(&mut self, dt: f32) {
        if self.mounted {
            self.state.tick(dt);
        }
    }

    fn draw(&self, d: &mut RaylibDrawHandle) {
        d.draw_rectangle_rec(self.layout.frame, Color::new(243, 244, 246, 255));
        self.draw_current_slide(d);
        self.draw_controls(d);
        self.draw_indicator(d);
    }

    fn unmount(&mut self) {
        self.state.stop_auto_advance();
        self.textures.clear();
        self.mounted = false;
        debug!("carousel unmounted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_centers_frame_and_respects_max_width() {
        let layout = Layout::compute(1280.0, 720.0, 3, IndicatorStyle::Counter);
        assert_eq!(layout.frame.width, CAROUSEL_MAX_WIDTH);
        assert_eq!(layout.frame.x, (1280.0 - CAROUSEL_MAX_WIDTH) * 0.5);
        assert!(layout.frame.y >= HEADER_HEIGHT);
        assert!(layout.dots.is_empty());
    }

    #[test]
    fn narrow_window_shrinks_frame() {
        let layout = Layout::compute(640.0, 480.0, 3, IndicatorStyle::Counter);
        assert_eq!(layout.frame.width, 640.0 - 2.0 * CAROUSEL_MARGIN);
    }

    #[test]
    fn dots_layout_has_one_dot_per_slide() {
        let layout = Layout::compute(1280.0, 720.0, 5, IndicatorStyle::Dots);
        assert_eq!(layout.dots.len(), 5);
        // Strip is centered on the frame
        let first = layout.dots.first().unwrap().x;
        let last = layout.dots.last().unwrap().x;
        let frame_center = layout.frame.x + layout.frame.width * 0.5;
        assert!(((first + last) * 0.5 - frame_center).abs() < 0.001);
    }

    #[test]
    fn dot_hit_testing_resolves_exact_dot() {
        let layout = Layout::compute(1280.0, 720.0, 5, IndicatorStyle::Dots);
        for (k, center) in layout.dots.iter().enumerate() {
            assert_eq!(layout.dot_at(*center), Some(k));
        }
        // Midway between two dots resolves to neither
        let between = Vector2::new(
            (layout.dots[0].x + layout.dots[1].x) * 0.5,
            layout.dots[0].y,
        );
        assert_eq!(layout.dot_at(between), None);
        // Far away misses entirely
        assert_eq!(layout.dot_at(Vector2::new(0.0, 0.0)), None);
    }

    #[test]
    fn button_hit_testing_uses_radius() {
        let layout = Layout::compute(1280.0, 720.0, 3, IndicatorStyle::Counter);
        assert!(layout.hit_prev(layout.prev_center));
        assert!(layout.hit_next(layout.next_center));
        let off = Vector2::new(
            layout.prev_center.x,
            layout.prev_center.y + BUTTON_RADIUS + 1.0,
        );
        assert!(!layout.hit_prev(off));
    }
}
