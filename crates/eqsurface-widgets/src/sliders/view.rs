//! View function for the slider bank

use iced::widget::{column, container, text, vertical_slider, Row};
use iced::{Alignment, Element, Length};

use super::{SliderBank, SliderId};
use crate::theme::{TEXT_DISABLED, TEXT_PRIMARY, TEXT_SECONDARY};

/// Height of each slider track
const SLIDER_HEIGHT: f32 = 160.0;

/// Render one vertical slider per band
///
/// `on_change` receives the slider identity and the new value. While the bank
/// is disabled the sliders are still drawn; their changes are dropped by
/// [`SliderBank::user_changed`].
pub fn slider_bank<'a, Message: Clone + 'a>(
    bank: &'a SliderBank,
    on_change: impl Fn(SliderId, i32) -> Message + 'a + Clone,
) -> Element<'a, Message> {
    let range = bank.range();
    let (label_color, value_color) = if bank.is_enabled() {
        (TEXT_SECONDARY, TEXT_PRIMARY)
    } else {
        (TEXT_DISABLED, TEXT_DISABLED)
    };

    let columns: Vec<Element<'a, Message>> = bank
        .sliders()
        .iter()
        .map(|slider| {
            let id = slider.id;
            let on_change = on_change.clone();
            let control = vertical_slider(range.min()..=range.max(), slider.value, move |value| {
                on_change(id, value)
            })
            .step(1)
            .height(Length::Fixed(SLIDER_HEIGHT));

            column![
                text(slider.label.as_str()).size(10).color(label_color),
                container(control).center_x(Length::Fill),
                text(slider.value_label.as_str()).size(11).color(value_color),
            ]
            .spacing(4)
            .align_x(Alignment::Center)
            .width(Length::FillPortion(1))
            .into()
        })
        .collect();

    Row::from_vec(columns)
        .spacing(2)
        .width(Length::Fill)
        .into()
}
