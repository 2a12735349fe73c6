/// Saving the displayed image to disk
///
/// The bytes were already downloaded for display, so saving never
/// touches the network.
use chrono::Local;
use reqwest::Url;
use rfd::FileDialog;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::Result;

/// Suggested file name for an image URL.
///
/// Uses the last path segment of the URL when there is one, adding
/// `extension` if the segment has none. Otherwise falls back to a
/// timestamped name.
pub fn default_file_name(url: &str, extension: &str) -> String {
    let segment = Url::parse(url).ok().and_then(|parsed| {
        parsed
            .path_segments()
            .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
            .map(sanitize)
    });

    match segment {
        Some(name) if !name.is_empty() => {
            if Path::new(&name).extension().is_some() {
                name
            } else {
                format!("{}.{}", name, extension)
            }
        }
        _ => format!(
            "waifu-{}.{}",
            Local::now().format("%Y%m%d-%H%M%S"),
            extension
        ),
    }
}

/// Keep file names portable
fn sanitize(segment: &str) -> String {
    segment
        .chars()
        .map(|c| match c {
            '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '%' => '_',
            c => c,
        })
        .collect()
}

/// Initial directory for the save dialog
pub fn default_directory(configured: Option<&Path>) -> PathBuf {
    configured
        .map(Path::to_path_buf)
        .or_else(dirs::download_dir)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Show the native save dialog. Returns None if the user cancelled.
pub fn pick_destination(directory: &Path, file_name: &str) -> Option<PathBuf> {
    FileDialog::new()
        .set_title("Save Image")
        .set_directory(directory)
        .set_file_name(file_name)
        .save_file()
}

/// Write the image bytes to `path`
pub async fn save_image(path: PathBuf, bytes: Arc<Vec<u8>>) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    tokio::fs::write(&path, bytes.as_slice()).await?;

    tracing::info!("💾 Saved {}KB to {}", bytes.len() / 1024, path.display());

    Ok(path)
}
