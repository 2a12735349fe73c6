use std::collections::HashMap;

use super::data::Origin;
use crate::media::LoadedImage;

/// What is known about one history entry
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub origin: Origin,
    /// None until the image has finished loading
    pub image: Option<LoadedImage>,
}

/// Loaded images for the URLs currently in the history.
///
/// Entries only exist for history URLs; evicting a URL from the history
/// must also remove it here.
#[derive(Debug, Clone, Default)]
pub struct ImageCache {
    entries: HashMap<String, CacheEntry>,
}

impl ImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record where a URL came from. Keeps an already loaded image.
    pub fn insert_origin(&mut self, url: &str, origin: Origin) {
        self.entries
            .entry(url.to_string())
            .and_modify(|entry| entry.origin = origin.clone())
            .or_insert(CacheEntry {
                origin,
                image: None,
            });
    }

    /// Store a loaded image. Ignored for URLs that are not tracked.
    pub fn store_image(&mut self, image: LoadedImage) -> bool {
        match self.entries.get_mut(&image.url) {
            Some(entry) => {
                entry.image = Some(image);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, url: &str) -> Option<&CacheEntry> {
        self.entries.get(url)
    }

    pub fn image(&self, url: &str) -> Option<&LoadedImage> {
        self.entries.get(url).and_then(|entry| entry.image.as_ref())
    }

    pub fn remove(&mut self, url: &str) -> Option<CacheEntry> {
        self.entries.remove(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::ImageType;

    fn loaded(url: &str) -> LoadedImage {
        let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([1, 2, 3, 255]));
        let mut buf = std::io::Cursor::new(Vec::new());
        img.write_to(&mut buf, image::ImageFormat::Png).unwrap();
        crate::media::loader::decode(url.to_string(), buf.into_inner()).unwrap()
    }

    #[test]
    fn test_store_requires_origin() {
        let mut cache = ImageCache::new();
        assert!(!cache.store_image(loaded("https://x/1.png")));
        assert!(cache.get("https://x/1.png").is_none());

        cache.insert_origin("https://x/1.png", Origin::new(ImageType::Sfw, "waifu"));
        assert!(cache.image("https://x/1.png").is_none());
        assert!(cache.store_image(loaded("https://x/1.png")));
        assert!(cache.image("https://x/1.png").is_some());
    }

    #[test]
    fn test_reinserting_origin_keeps_image() {
        let mut cache = ImageCache::new();
        cache.insert_origin("https://x/1.png", Origin::new(ImageType::Sfw, "waifu"));
        cache.store_image(loaded("https://x/1.png"));

        cache.insert_origin("https://x/1.png", Origin::new(ImageType::Sfw, "neko"));

        let entry = cache.get("https://x/1.png").unwrap();
        assert_eq!(entry.origin.category, "neko");
        assert!(entry.image.is_some());
    }

    #[test]
    fn test_remove() {
        let mut cache = ImageCache::new();
        cache.insert_origin("https://x/1.png", Origin::new(ImageType::Nsfw, "neko"));
        assert!(cache.remove("https://x/1.png").is_some());
        assert!(cache.get("https://x/1.png").is_none());
    }
}
