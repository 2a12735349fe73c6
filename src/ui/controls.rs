/// Type toggle, category selector and the generate button
use iced::widget::{button, row, text};
use iced::{Element, Length, Theme};
use iced_aw::Wrap;

use crate::state::data::ImageType;
use crate::state::view::ViewState;
use crate::Message;

/// Highlight the active choice of a selector
fn selector_style(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        if active {
            button::primary(theme, status)
        } else {
            button::secondary(theme, status)
        }
    }
}

/// SFW / NSFW toggle
pub fn type_selector(view: &ViewState) -> Element<'_, Message> {
    let buttons: Vec<Element<'_, Message>> = ImageType::ALL
        .into_iter()
        .map(|image_type| {
            button(text(image_type.label()).size(18))
                .padding([8, 24])
                .style(selector_style(view.image_type() == image_type))
                .on_press(Message::TypeSelected(image_type))
                .into()
        })
        .collect();

    row(buttons).spacing(10).into()
}

/// Categories of the current type only
pub fn category_selector(view: &ViewState) -> Element<'_, Message> {
    let buttons: Vec<Element<'_, Message>> = view
        .categories()
        .iter()
        .map(|&category| {
            button(text(category).size(14))
                .padding([6, 14])
                .style(selector_style(view.category() == category))
                .on_press(Message::CategorySelected(category.to_string()))
                .into()
        })
        .collect();

    Wrap::with_elements(buttons)
        .spacing(8.0)
        .line_spacing(8.0)
        .into()
}

/// Disabled with an alternate label while a fetch is in flight
pub fn generate_button(is_loading: bool) -> Element<'static, Message> {
    let label = if is_loading {
        "Loading..."
    } else {
        "🎲 Generate Waifu"
    };

    button(text(label).size(22))
        .padding([14, 40])
        .width(Length::Shrink)
        .style(button::primary)
        .on_press_maybe((!is_loading).then_some(Message::Generate))
        .into()
}
