use super::data::ImageType;

/// Current selection and the generation guard.
///
/// `category` always belongs to the category set of `image_type`.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    image_type: ImageType,
    category: String,
    is_loading: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            image_type: ImageType::default(),
            category: ImageType::default().default_category().to_string(),
            is_loading: false,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn image_type(&self) -> ImageType {
        self.image_type
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Categories offered for the current type
    pub fn categories(&self) -> &'static [&'static str] {
        self.image_type.categories()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Switch type and reset the category to that type's default
    pub fn set_type(&mut self, image_type: ImageType) {
        self.image_type = image_type;
        self.category = image_type.default_category().to_string();
    }

    /// Select a category of the current type. Unknown categories are ignored.
    pub fn set_category(&mut self, category: &str) -> bool {
        if !self.image_type.has_category(category) {
            return false;
        }
        self.category = category.to_string();
        true
    }

    /// Enter the loading state. Returns false if a fetch is already in flight.
    pub fn begin_loading(&mut self) -> bool {
        if self.is_loading {
            return false;
        }
        self.is_loading = true;
        true
    }

    pub fn end_loading(&mut self) {
        self.is_loading = false;
    }
}
