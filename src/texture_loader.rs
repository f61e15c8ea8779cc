use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::thread;

use anyhow::{Context, Result, anyhow};
use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;
use tracing::{debug, warn};

use crate::config::ConfigError;
use crate::slide::Slide;

// --- Load and Sort Image Paths ---
pub fn load_sorted_image_paths(dir_path: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let mut paths = Vec::new();
    let entries = fs::read_dir(dir_path).map_err(|e| ConfigError::DirectoryRead {
        path: dir_path.to_path_buf(),
        source: e,
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| ConfigError::DirectoryRead {
            path: dir_path.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if path.is_file() {
            if let Some(ext) = path.extension().and_then(|s| s.to_str()) {
                match ext.to_lowercase().as_str() {
                    "png" | "jpg" | "jpeg" | "bmp" | "gif" => {
                        paths.push(path);
                    }
                    _ => {}
                }
            }
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    if paths.is_empty() {
        Err(ConfigError::NoImagesFound(dir_path.to_path_buf()))
    } else {
        Ok(paths)
    }
}

/// Raw image bytes plus the EXIF orientation to apply at decode time.
pub struct FetchedImage {
    pub bytes: Vec<u8>,
    pub orientation: u16,
}

/// Fetch every slide's image in parallel and wait for all of them to settle.
///
/// One outcome per slide, order preserved. A failed fetch is logged and
/// recorded as `None`; it never aborts the others and never fails the mount.
pub fn prefetch_slide_images(slides: &[Slide]) -> Vec<Option<FetchedImage>> {
    thread::scope(|scope| {
        let handles: Vec<_> = slides
            .iter()
            .map(|slide| scope.spawn(move || fetch_image(&slide.source)))
            .collect();

        handles
            .into_iter()
            .zip(slides)
            .map(|(handle, slide)| match handle.join() {
                Ok(Ok(fetched)) => Some(fetched),
                Ok(Err(e)) => {
                    warn!(source = %slide.source.display(), error = %e, "failed to load image");
                    None
                }
                Err(_) => {
                    warn!(source = %slide.source.display(), "image fetch panicked");
                    None
                }
            })
            .collect()
    })
}

fn fetch_image(path: &Path) -> Result<FetchedImage> {
    let bytes =
        fs::read(path).with_context(|| format!("failed to read file {}", path.display()))?;
    let orientation = read_exif_orientation(path, &bytes);
    Ok(FetchedImage { bytes, orientation })
}

// Orientation tag is only read for JPEG; everything else renders as-is.
fn read_exif_orientation(path: &Path, bytes: &[u8]) -> u16 {
    let extension = file_extension(path);
    if extension != "jpg" && extension != "jpeg" {
        return 1;
    }

    match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => {
            if let Some(field) = exif.get_field(Tag::Orientation, In::PRIMARY) {
                if let Value::Short(values) = &field.value {
                    if let Some(&value) = values.first() {
                        return value;
                    }
                }
            }
            1
        }
        Err(e) => {
            // Non-critical: proceed without rotation
            warn!(source = %path.display(), error = %e, "could not read EXIF data");
            1
        }
    }
}

// --- Decode Fetched Bytes, Apply EXIF Rotation, Create Texture ---
pub fn upload_texture(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    path: &Path,
    fetched: &FetchedImage,
) -> Result<Texture2D> {
    let extension = file_extension(path);

    // Extension hint is required when decoding from memory
    let mut image = Image::load_image_from_mem(&(".".to_string() + &extension), &fetched.bytes)
        .map_err(|e| anyhow!("failed to decode image data for {}: {}", path.display(), e))?;

    // 1 = normal, 3 = 180 deg, 6 = 90 deg CW, 8 = 90 deg CCW.
    // Flipped orientations are ignored.
    match fetched.orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
            debug!(source = %path.display(), "applied 180 deg rotation");
        }
        6 => {
            image.rotate_cw();
            debug!(source = %path.display(), "applied 90 deg CW rotation");
        }
        8 => {
            image.rotate_ccw();
            debug!(source = %path.display(), "applied 90 deg CCW rotation");
        }
        _ => {}
    }

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| anyhow!("failed to create texture for {}: {}", path.display(), e))?;

    Ok(texture)
}

fn file_extension(path: &Path) -> String {
    path.extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = File::create(&path).unwrap();
        // Content is irrelevant at fetch time; decoding happens at upload
        file.write_all(b"not really an image").unwrap();
        path
    }

    #[test]
    fn scan_picks_up_only_image_extensions_sorted() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "b.jpg");
        touch(dir.path(), "a.png");
        touch(dir.path(), "notes.txt");
        touch(dir.path(), "c.gif");

        let paths = load_sorted_image_paths(dir.path()).unwrap();
        let names: Vec<_> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.png", "b.jpg", "c.gif"]);
    }

    #[test]
    fn empty_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_sorted_image_paths(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::NoImagesFound(_)));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let err = load_sorted_image_paths(Path::new("/nonexistent/gallery")).unwrap_err();
        assert!(matches!(err, ConfigError::DirectoryRead { .. }));
    }

    #[test]
    fn prefetch_settles_with_one_outcome_per_slide() {
        let dir = tempfile::tempdir().unwrap();
        let a = touch(dir.path(), "a.png");
        let c = touch(dir.path(), "c.png");

        let slides = vec![
            Slide::new(a, "A"),
            Slide::new(dir.path().join("missing.png"), "B"),
            Slide::new(c, "C"),
        ];

        let outcomes = prefetch_slide_images(&slides);
        assert_eq!(outcomes.len(), 3);
        assert!(outcomes[0].is_some());
        assert!(outcomes[1].is_none());
        assert!(outcomes[2].is_some());
    }

    #[test]
    fn non_jpeg_bytes_skip_exif_probing() {
        let orientation = read_exif_orientation(Path::new("x.png"), b"whatever");
        assert_eq!(orientation, 1);
    }

    #[test]
    fn jpeg_without_exif_defaults_to_no_rotation() {
        let orientation = read_exif_orientation(Path::new("x.jpg"), b"not a jpeg at all");
        assert_eq!(orientation, 1);
    }
}
