/// Shared data structures for the application state
///
/// These types describe what the user can ask the image API for
/// and where a displayed image came from.

/// Categories offered for safe-for-work images, in display order
pub const SFW_CATEGORIES: &[&str] = &[
    "waifu", "neko", "shinobu", "megumin", "bully", "cuddle", "cry", "hug", "awoo", "kiss",
    "lick", "pat", "smug", "bonk", "yeet", "blush", "smile", "wave", "highfive", "handhold",
    "nom", "bite", "glomp", "slap", "kill", "kick", "happy", "wink", "poke", "dance", "cringe",
];

/// Categories offered for not-safe-for-work images, in display order
pub const NSFW_CATEGORIES: &[&str] = &["waifu", "neko", "trap"];

/// Content rating of an image request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageType {
    #[default]
    Sfw,
    Nsfw,
}

impl ImageType {
    pub const ALL: [ImageType; 2] = [ImageType::Sfw, ImageType::Nsfw];

    /// Path segment used by the API
    pub fn as_str(self) -> &'static str {
        match self {
            ImageType::Sfw => "sfw",
            ImageType::Nsfw => "nsfw",
        }
    }

    /// Upper-cased form shown in the UI
    pub fn label(self) -> &'static str {
        match self {
            ImageType::Sfw => "SFW",
            ImageType::Nsfw => "NSFW",
        }
    }

    /// Categories valid for this type
    pub fn categories(self) -> &'static [&'static str] {
        match self {
            ImageType::Sfw => SFW_CATEGORIES,
            ImageType::Nsfw => NSFW_CATEGORIES,
        }
    }

    /// The category selected after switching to this type
    pub fn default_category(self) -> &'static str {
        self.categories()[0]
    }

    pub fn has_category(self, category: &str) -> bool {
        self.categories().contains(&category)
    }
}

impl std::fmt::Display for ImageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The request that produced an image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    pub image_type: ImageType,
    pub category: String,
}

impl Origin {
    pub fn new(image_type: ImageType, category: impl Into<String>) -> Self {
        Self {
            image_type,
            category: category.into(),
        }
    }

    /// e.g. "Category: WAIFU | Type: SFW"
    pub fn metadata_line(&self) -> String {
        format!(
            "Category: {} | Type: {}",
            self.category.to_uppercase(),
            self.image_type.label()
        )
    }
}
