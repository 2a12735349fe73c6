/// The current image panel
use iced::widget::{button, column, container, image, text};
use iced::{Alignment, ContentFit, Element, Length};

use crate::media::LoadedImage;
use crate::state::data::Origin;
use crate::Message;

const VIEWER_HEIGHT: f32 = 480.0;

/// Load progress of the displayed image
#[derive(Debug, Clone)]
pub enum ImageStatus {
    /// URL known, bytes not yet downloaded and decoded
    Loading,
    Loaded(LoadedImage),
    Failed,
}

/// The image on screen and where it came from
#[derive(Debug, Clone)]
pub struct CurrentImage {
    pub url: String,
    pub origin: Origin,
    pub status: ImageStatus,
}

impl CurrentImage {
    pub fn pending(url: String, origin: Origin) -> Self {
        Self {
            url,
            origin,
            status: ImageStatus::Loading,
        }
    }

    pub fn loaded(image: LoadedImage, origin: Origin) -> Self {
        Self {
            url: image.url.clone(),
            origin,
            status: ImageStatus::Loaded(image),
        }
    }

    /// The loaded image, once its load has finished
    pub fn image(&self) -> Option<&LoadedImage> {
        match &self.status {
            ImageStatus::Loaded(image) => Some(image),
            _ => None,
        }
    }

    /// Download is only offered after the image has loaded
    pub fn can_download(&self) -> bool {
        self.image().is_some()
    }
}

fn placeholder(message: &str) -> Element<'_, Message> {
    container(text(message).size(18))
        .width(Length::Fill)
        .height(Length::Fixed(VIEWER_HEIGHT))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(VIEWER_HEIGHT))
        .into()
}

/// Render the current image, its metadata line and the download button
pub fn view(current: Option<&CurrentImage>) -> Element<'_, Message> {
    let Some(current) = current else {
        return placeholder("✨ Click the button to generate a waifu! ✨");
    };

    let picture: Element<'_, Message> = match &current.status {
        ImageStatus::Loaded(loaded) => image(loaded.handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(VIEWER_HEIGHT))
            .content_fit(ContentFit::Contain)
            .into(),
        ImageStatus::Loading => placeholder("Loading image..."),
        ImageStatus::Failed => placeholder("💔 Image unavailable"),
    };

    let download = button(text("⬇️ Download Image").size(16))
        .padding([10, 24])
        .style(button::success)
        .on_press_maybe(current.can_download().then_some(Message::Download));

    column![
        picture,
        text(current.origin.metadata_line()).size(16),
        download,
    ]
    .spacing(12)
    .align_x(Alignment::Center)
    .into()
}
