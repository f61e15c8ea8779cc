pub const DEFAULT_WINDOW_WIDTH: i32 = 1280;   // Initial window width
pub const DEFAULT_WINDOW_HEIGHT: i32 = 720;   // Initial window height
pub const FPS: u32 = 60;                      // Frames per second

pub const FADE_OUT_DURATION: f32 = 0.3;       // Fade-out before the slide swap (seconds)
pub const FADE_IN_DURATION: f32 = 0.5;        // Fade-in after the slide swap (seconds)

pub const COUNTER_INTERVAL: f32 = 7.0;        // Default auto-advance interval, counter style (seconds)
pub const DOTS_INTERVAL: f32 = 5.0;           // Default auto-advance interval, dots style (seconds)

pub const HEADER_HEIGHT: f32 = 56.0;          // Navigation bar height
pub const NAV_FONT_SIZE: i32 = 20;            // Navigation link label size
pub const NAV_LINK_GAP: f32 = 32.0;           // Horizontal gap between navigation links

pub const CAROUSEL_MAX_WIDTH: f32 = 800.0;    // Image frame never grows wider than this
pub const CAROUSEL_MARGIN: f32 = 32.0;        // Minimum space around the image frame
pub const BUTTON_RADIUS: f32 = 24.0;          // Prev/next control radius
pub const BUTTON_INSET: f32 = 16.0;           // Distance from frame edge to control center
pub const DOT_RADIUS: f32 = 5.0;              // Indicator dot radius
pub const DOT_HIT_RADIUS: f32 = 9.0;          // Click tolerance around a dot center
pub const DOT_GAP: f32 = 18.0;                // Center-to-center dot spacing
pub const INDICATOR_INSET: f32 = 16.0;        // Distance from frame bottom to the indicator

// Fallback slide list used when neither an image list nor a directory is given
pub const DEFAULT_SLIDES: [(&str, &str); 3] = [
    ("gallery-images/kate.jpg", "Child with owl"),
    ("gallery-images/trunk.jpg", "Tree trunk"),
    ("gallery-images/owl.jpg", "Owl"),
];
