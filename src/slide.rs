use std::path::PathBuf;

use crate::constants::DEFAULT_SLIDES;

/// One entry in the carousel's ordered slide sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub source: PathBuf,
    pub alt_text: String,
}

impl Slide {
    pub fn new(source: impl Into<PathBuf>, alt_text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            alt_text: alt_text.into(),
        }
    }
}

/// Zip comma-separated source and alt lists into slides.
///
/// Entries are trimmed; empty source entries are dropped. A missing alt is
/// defaulted to `"Image N"` (1-based); surplus alts are ignored.
pub fn zip_slide_lists(images: &str, alts: &str) -> Vec<Slide> {
    let alts: Vec<&str> = alts.split(',').map(str::trim).collect();

    images
        .split(',')
        .map(str::trim)
        .filter(|src| !src.is_empty())
        .enumerate()
        .map(|(index, src)| {
            let alt = match alts.get(index) {
                Some(alt) if !alt.is_empty() => (*alt).to_string(),
                _ => format!("Image {}", index + 1),
            };
            Slide::new(src, alt)
        })
        .collect()
}

/// Build slides from scanned paths, deriving alt text from the file stem.
pub fn slides_from_paths(paths: Vec<PathBuf>) -> Vec<Slide> {
    paths
        .into_iter()
        .enumerate()
        .map(|(index, path)| {
            let alt = match path.file_stem().and_then(|s| s.to_str()) {
                Some(stem) => stem.to_string(),
                None => format!("Image {}", index + 1),
            };
            Slide::new(path, alt)
        })
        .collect()
}

pub fn default_slides() -> Vec<Slide> {
    DEFAULT_SLIDES
        .iter()
        .map(|(src, alt)| Slide::new(*src, *alt))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_alts_default_by_position() {
        let slides = zip_slide_lists("a.jpg,b.jpg", "Alpha");
        assert_eq!(
            slides,
            vec![
                Slide::new("a.jpg", "Alpha"),
                Slide::new("b.jpg", "Image 2"),
            ]
        );
    }

    #[test]
    fn entries_are_trimmed() {
        let slides = zip_slide_lists(" a.jpg , b.jpg ", " Alpha , Beta ");
        assert_eq!(slides[0], Slide::new("a.jpg", "Alpha"));
        assert_eq!(slides[1], Slide::new("b.jpg", "Beta"));
    }

    #[test]
    fn surplus_alts_are_ignored() {
        let slides = zip_slide_lists("a.jpg", "Alpha,Beta,Gamma");
        assert_eq!(slides, vec![Slide::new("a.jpg", "Alpha")]);
    }

    #[test]
    fn empty_source_entries_are_dropped() {
        let slides = zip_slide_lists("a.jpg,,b.jpg", "");
        assert_eq!(slides.len(), 2);
        assert_eq!(slides[0].alt_text, "Image 1");
        assert_eq!(slides[1].alt_text, "Image 2");
    }

    #[test]
    fn blank_list_yields_no_slides() {
        assert!(zip_slide_lists("  ", "").is_empty());
    }

    #[test]
    fn scanned_paths_use_file_stem_as_alt() {
        let slides = slides_from_paths(vec![
            PathBuf::from("/gallery/owl.jpg"),
            PathBuf::from("/gallery/corn.png"),
        ]);
        assert_eq!(slides[0].alt_text, "owl");
        assert_eq!(slides[1].alt_text, "corn");
    }

    #[test]
    fn default_list_has_three_slides() {
        assert_eq!(default_slides().len(), 3);
    }
}
