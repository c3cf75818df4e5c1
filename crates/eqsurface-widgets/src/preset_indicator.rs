//! Active-preset indicator
//!
//! Shows which catalog preset the current values match, or "Custom" when
//! none does. Choosing an entry from the list asks the editor to apply it.

use eqsurface_core::{match_preset_name, PresetMatch};
use iced::widget::pick_list;
use iced::{Element, Length};

/// Label shown when no preset matches
pub const CUSTOM_LABEL: &str = "Custom";

/// Preset names and the current match
#[derive(Debug, Clone)]
pub struct PresetIndicator {
    names: Vec<String>,
    current: PresetMatch,
}

impl PresetIndicator {
    pub fn new(names: Vec<String>) -> Self {
        Self {
            names,
            current: PresetMatch::Custom,
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn current(&self) -> &PresetMatch {
        &self.current
    }

    /// Select a preset by name (case-insensitive)
    ///
    /// Returns false and shows "Custom" if the name is not listed.
    pub fn select(&mut self, name: &str) -> bool {
        match match_preset_name(&self.names, name) {
            Some(found) => {
                self.current = PresetMatch::Named(found.to_string());
                true
            }
            None => {
                self.current = PresetMatch::Custom;
                false
            }
        }
    }

    pub fn set_custom(&mut self) {
        self.current = PresetMatch::Custom;
    }

    /// Show a detection result
    pub fn show(&mut self, detected: &PresetMatch) {
        match detected {
            PresetMatch::Named(name) => {
                self.select(name);
            }
            PresetMatch::Custom => self.set_custom(),
        }
    }

    /// Text for the indicator
    pub fn label(&self) -> &str {
        self.current.name().unwrap_or(CUSTOM_LABEL)
    }
}

/// Render the preset selector
///
/// The list shows the matched preset, or the "Custom" placeholder.
pub fn preset_selector<'a, Message: Clone + 'a>(
    indicator: &'a PresetIndicator,
    on_select: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    let selected = indicator.current().name().map(str::to_string);

    pick_list(indicator.names().to_vec(), selected, on_select)
        .placeholder(CUSTOM_LABEL)
        .width(Length::Fixed(180.0))
        .into()
}
