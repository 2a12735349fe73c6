/// History grid
/// One thumbnail per history entry, most recent first
use iced::widget::{button, container, image, text};
use iced::{ContentFit, Element, Length};
use iced_aw::Wrap;

use crate::state::Session;
use crate::Message;

const THUMB_SIDE: f32 = 96.0;

pub const EMPTY_HISTORY: &str = "There is no history yet";

/// Render the history grid.
///
/// `on_select` builds the message sent when a thumbnail is clicked.
pub fn view<'a, F>(session: &'a Session, on_select: F) -> Element<'a, Message>
where
    F: Fn(String) -> Message + 'a,
{
    let history = session.history();

    if history.is_empty() {
        return text(EMPTY_HISTORY).size(16).into();
    }

    let thumbnails: Vec<Element<'a, Message>> = history
        .list()
        .map(|url| {
            // Entries still loading (or that failed) get a placeholder tile
            let tile: Element<'a, Message> = match session.cache().image(url) {
                Some(loaded) => image(loaded.thumbnail.clone())
                    .width(Length::Fixed(THUMB_SIDE))
                    .height(Length::Fixed(THUMB_SIDE))
                    .content_fit(ContentFit::Cover)
                    .into(),
                None => container(text("💭").size(28))
                    .center_x(Length::Fixed(THUMB_SIDE))
                    .center_y(Length::Fixed(THUMB_SIDE))
                    .into(),
            };

            button(tile)
                .padding(2)
                .style(button::text)
                .on_press(on_select(url.to_string()))
                .into()
        })
        .collect();

    Wrap::with_elements(thumbnails)
        .spacing(10.0)
        .line_spacing(10.0)
        .into()
}
