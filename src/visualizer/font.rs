// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Font asset lookup for plot text.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use ab_glyph::FontVec;

use crate::config::PlotConfig;
use crate::warn;

/// Assets URL for downloading fonts
const ASSETS_URL: &str = "https://github.com/ultralytics/assets/releases/download/v0.0.0";

/// Directory under the user config dir where fonts are cached.
const CACHE_DIR: &str = "pose-angles";

/// Cached location of a font asset, if a config directory exists.
fn cached_font_path(font: &str) -> Option<PathBuf> {
    let font_name = Path::new(font).file_name()?.to_string_lossy().to_string();
    Some(dirs::config_dir()?.join(CACHE_DIR).join(font_name))
}

/// Check if a font exists locally, downloading it when allowed.
pub fn check_font(font: &str, download: bool) -> Option<PathBuf> {
    let font_path = cached_font_path(font)?;
    if font_path.exists() {
        return Some(font_path);
    }
    if !download {
        return None;
    }

    if let Some(parent) = font_path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create font cache directory: {e}");
        return None;
    }

    let font_name = font_path.file_name()?.to_string_lossy();
    let url = format!("{ASSETS_URL}/{font_name}");
    crate::verbose!("Downloading {url} to {}", font_path.display());

    match ureq::get(&url).call() {
        Ok(response) => {
            let mut file = match File::create(&font_path) {
                Ok(f) => f,
                Err(e) => {
                    warn!("Failed to create font file: {e}");
                    return None;
                }
            };

            let mut reader = response.into_body().into_reader();
            if let Err(e) = io::copy(&mut reader, &mut file) {
                warn!("Failed to download font: {e}");
                let _ = fs::remove_file(&font_path);
                return None;
            }

            Some(font_path)
        }
        Err(e) => {
            warn!("Failed to download font from {url}: {e}");
            None
        }
    }
}

/// Load the font a plot should use; `None` means text is not drawn.
pub fn load_font(config: &PlotConfig) -> Option<FontVec> {
    let path = match &config.font {
        Some(path) => Some(path.clone()),
        None => check_font(crate::config::DEFAULT_FONT, config.download_font),
    }?;

    let data = match fs::read(&path) {
        Ok(data) => data,
        Err(e) => {
            warn!("Failed to read font {}: {e}", path.display());
            return None;
        }
    };

    match FontVec::try_from_vec(data) {
        Ok(font) => Some(font),
        Err(e) => {
            warn!("Invalid font {}: {e}", path.display());
            None
        }
    }
}
