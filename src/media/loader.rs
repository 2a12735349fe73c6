/// Decoding of downloaded images
/// Turns raw bytes into display and thumbnail handles
use iced::widget::image::Handle;
use std::sync::Arc;

use crate::error::FetchError;

/// Longest side of history grid thumbnails
pub const THUMBNAIL_SIZE: u32 = 128;

/// A fully loaded image, ready to display and save
#[derive(Debug, Clone)]
pub struct LoadedImage {
    /// Where the bytes came from
    pub url: String,
    /// Decoded dimensions (first frame for animations)
    pub width: u32,
    pub height: u32,
    /// File extension matching the detected format (e.g. "png", "gif")
    pub extension: &'static str,
    /// Original bytes, kept for saving without a second download
    pub bytes: Arc<Vec<u8>>,
    /// Full-size handle for the viewer. Animated GIFs show their first frame.
    pub handle: Handle,
    /// Downscaled handle for the history grid
    pub thumbnail: Handle,
}

/// Decode image bytes on the blocking pool
pub async fn decode_async(url: String, bytes: Vec<u8>) -> Result<LoadedImage, FetchError> {
    tokio::task::spawn_blocking(move || decode(url, bytes))
        .await
        .map_err(|e| FetchError::image_load(format!("decode task failed: {}", e)))?
}

/// Decode image bytes and build the display handles
pub fn decode(url: String, bytes: Vec<u8>) -> Result<LoadedImage, FetchError> {
    let format = image::guess_format(&bytes)
        .map_err(|e| FetchError::image_load(format!("unrecognized image data: {}", e)))?;

    let img = image::load_from_memory_with_format(&bytes, format)
        .map_err(|e| FetchError::image_load(format!("failed to decode {:?}: {}", format, e)))?;

    // Generate the grid thumbnail once, up front
    let thumb = img.thumbnail(THUMBNAIL_SIZE, THUMBNAIL_SIZE).to_rgba8();
    let (thumb_width, thumb_height) = thumb.dimensions();
    let thumbnail = Handle::from_rgba(thumb_width, thumb_height, thumb.into_raw());

    let extension = format.extensions_str().first().copied().unwrap_or("img");

    tracing::debug!(
        "Decoded {}x{} {} ({}KB) from {}",
        img.width(),
        img.height(),
        extension,
        bytes.len() / 1024,
        url
    );

    let handle = Handle::from_bytes(bytes.clone());

    Ok(LoadedImage {
        url,
        width: img.width(),
        height: img.height(),
        extension,
        bytes: Arc::new(bytes),
        handle,
        thumbnail,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn encode(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([255, 105, 180, 255]));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, format).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_decode_png() {
        let bytes = encode(300, 150, ImageFormat::Png);
        let loaded = decode("https://x/1.png".to_string(), bytes.clone()).unwrap();

        assert_eq!(loaded.url, "https://x/1.png");
        assert_eq!((loaded.width, loaded.height), (300, 150));
        assert_eq!(loaded.extension, "png");
        assert_eq!(loaded.bytes.as_slice(), bytes.as_slice());
    }

    #[test]
    fn test_extension_follows_content_not_url() {
        let bytes = encode(8, 8, ImageFormat::Gif);
        let loaded = decode("https://x/1.png".to_string(), bytes).unwrap();
        assert_eq!(loaded.extension, "gif");
    }

    #[test]
    fn test_animated_gif_keeps_every_frame_for_saving() {
        use image::codecs::gif::GifEncoder;
        use image::Frame;

        let mut bytes = Vec::new();
        {
            let mut encoder = GifEncoder::new(&mut bytes);
            encoder
                .encode_frames([
                    Frame::new(RgbaImage::from_pixel(10, 6, Rgba([255, 0, 0, 255]))),
                    Frame::new(RgbaImage::from_pixel(10, 6, Rgba([0, 0, 255, 255]))),
                ])
                .unwrap();
        }

        let loaded = decode("https://x/hug.gif".to_string(), bytes.clone()).unwrap();

        assert_eq!(loaded.extension, "gif");
        assert_eq!((loaded.width, loaded.height), (10, 6));
        assert_eq!(loaded.bytes.as_slice(), bytes.as_slice());
    }

    #[test]
    fn test_decode_garbage_is_image_load_error() {
        let result = decode("https://x/broken".to_string(), b"<html>nope</html>".to_vec());
        assert!(matches!(result, Err(FetchError::ImageLoad(_))));
    }

    #[test]
    fn test_decode_truncated_png_is_image_load_error() {
        let mut bytes = encode(64, 64, ImageFormat::Png);
        bytes.truncate(40);
        let result = decode("https://x/cut.png".to_string(), bytes);
        assert!(matches!(result, Err(FetchError::ImageLoad(_))));
    }

    #[tokio::test]
    async fn test_decode_async_runs_on_blocking_pool() {
        let bytes = encode(16, 32, ImageFormat::Png);
        let loaded = decode_async("https://x/2.png".to_string(), bytes).await.unwrap();
        assert_eq!((loaded.width, loaded.height), (16, 32));
    }
}
