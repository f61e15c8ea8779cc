use std::path::{Path, PathBuf};

use clap::ValueEnum;
use thiserror::Error;

use crate::constants::{COUNTER_INTERVAL, DOTS_INTERVAL};
use crate::slide::{Slide, default_slides, slides_from_paths, zip_slide_lists};
use crate::texture_loader::load_sorted_image_paths;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no slides configured")]
    EmptySlideList,

    #[error("--images and an image directory are mutually exclusive")]
    ConflictingSources,

    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("no image files found in directory: {0}")]
    NoImagesFound(PathBuf),

    #[error("auto-advance interval must be positive, got {0}")]
    NonPositiveInterval(f32),
}

/// Which slide-position indicator the carousel renders.
///
/// `Dots` additionally enables click-to-jump and hover-pause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IndicatorStyle {
    Counter,
    Dots,
}

impl IndicatorStyle {
    pub fn default_interval(self) -> f32 {
        match self {
            IndicatorStyle::Counter => COUNTER_INTERVAL,
            IndicatorStyle::Dots => DOTS_INTERVAL,
        }
    }
}

/// Resolved carousel configuration: the slide deck plus behavior knobs.
#[derive(Debug)]
pub struct CarouselOptions {
    pub slides: Vec<Slide>,
    pub interval: f32,
    pub indicator: IndicatorStyle,
}

impl CarouselOptions {
    /// Resolve the slide list from, in priority order: explicit `--images`
    /// and `--alts` lists, a scanned directory, or the baked-in defaults.
    /// Fails fast on an empty resolved list so the cursor arithmetic can
    /// never see a zero slide count.
    pub fn resolve(
        images: Option<&str>,
        alts: Option<&str>,
        directory: Option<&Path>,
        interval: Option<f32>,
        indicator: IndicatorStyle,
    ) -> Result<Self, ConfigError> {
        let slides = match (images, directory) {
            (Some(_), Some(_)) => return Err(ConfigError::ConflictingSources),
            (Some(images), None) => zip_slide_lists(images, alts.unwrap_or("")),
            (None, Some(dir)) => slides_from_paths(load_sorted_image_paths(dir)?),
            (None, None) => default_slides(),
        };

        if slides.is_empty() {
            return Err(ConfigError::EmptySlideList);
        }

        let interval = interval.unwrap_or_else(|| indicator.default_interval());
        if interval <= 0.0 {
            return Err(ConfigError::NonPositiveInterval(interval));
        }

        Ok(Self {
            slides,
            interval,
            indicator,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_lists_are_zipped_with_defaulted_alts() {
        let options = CarouselOptions::resolve(
            Some("a.jpg,b.jpg"),
            Some("Alpha"),
            None,
            None,
            IndicatorStyle::Counter,
        )
        .unwrap();

        assert_eq!(options.slides.len(), 2);
        assert_eq!(options.slides[0].source, PathBuf::from("a.jpg"));
        assert_eq!(options.slides[0].alt_text, "Alpha");
        assert_eq!(options.slides[1].alt_text, "Image 2");
    }

    #[test]
    fn no_sources_fall_back_to_defaults() {
        let options =
            CarouselOptions::resolve(None, None, None, None, IndicatorStyle::Counter).unwrap();
        assert_eq!(options.slides.len(), 3);
    }

    #[test]
    fn empty_image_list_is_rejected() {
        let err = CarouselOptions::resolve(Some(" , "), None, None, None, IndicatorStyle::Counter)
            .unwrap_err();
        assert!(matches!(err, ConfigError::EmptySlideList));
    }

    #[test]
    fn images_and_directory_conflict() {
        let err = CarouselOptions::resolve(
            Some("a.jpg"),
            None,
            Some(Path::new("/tmp")),
            None,
            IndicatorStyle::Counter,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::ConflictingSources));
    }

    #[test]
    fn interval_defaults_follow_indicator_style() {
        let counter =
            CarouselOptions::resolve(Some("a.jpg"), None, None, None, IndicatorStyle::Counter)
                .unwrap();
        assert_eq!(counter.interval, COUNTER_INTERVAL);

        let dots = CarouselOptions::resolve(Some("a.jpg"), None, None, None, IndicatorStyle::Dots)
            .unwrap();
        assert_eq!(dots.interval, DOTS_INTERVAL);
    }

    #[test]
    fn explicit_interval_wins() {
        let options = CarouselOptions::resolve(
            Some("a.jpg"),
            None,
            None,
            Some(2.5),
            IndicatorStyle::Counter,
        )
        .unwrap();
        assert_eq!(options.interval, 2.5);
    }

    #[test]
    fn non_positive_interval_is_rejected() {
        let err = CarouselOptions::resolve(
            Some("a.jpg"),
            None,
            None,
            Some(0.0),
            IndicatorStyle::Counter,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::NonPositiveInterval(_)));
    }
}
