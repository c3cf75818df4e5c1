//! View for the equalizer editor

use eqsurface_core::PresetCatalog;
use iced::widget::{column, container};
use iced::{Element, Length};

use super::message::EqualizerMessage;
use super::state::EqualizerEditor;
use crate::curve::curve_view;
use crate::sliders::slider_bank;

/// Render the curve above the slider bank
pub fn equalizer_editor<C: PresetCatalog>(editor: &EqualizerEditor<C>) -> Element<'_, EqualizerMessage> {
    let curve = curve_view(editor.curve(), EqualizerMessage::Curve);
    let sliders = slider_bank(editor.sliders(), |slider, value| {
        EqualizerMessage::SliderChanged { slider, value }
    });

    container(column![curve, sliders].spacing(12))
        .width(Length::Fill)
        .into()
}
