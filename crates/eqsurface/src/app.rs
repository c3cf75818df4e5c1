//! Main window: preset selector, reset, bypass, editor and status line

use std::path::PathBuf;
use std::time::Duration;

use eqsurface_core::config::{save_editor_config, EditorConfig};
use eqsurface_core::{BuiltinPresets, PresetMatch};
use eqsurface_widgets::{
    equalizer_editor, preset_selector, EditorEvent, EqualizerEditor, EqualizerMessage,
};
use iced::widget::{button, checkbox, column, container, row, text, Space};
use iced::{Alignment, Element, Length, Task, Theme};

/// How long a status message stays visible
const STATUS_TIMEOUT: Duration = Duration::from_secs(4);

#[derive(Debug, Clone)]
pub enum Message {
    Editor(EqualizerMessage),
    /// Clear the status line if it still shows message `generation`
    ClearStatus(u64),
    SaveComplete(Result<(), String>),
}

pub struct EqualizerApp {
    editor: EqualizerEditor,
    config: EditorConfig,
    config_path: PathBuf,
    status: String,
    status_generation: u64,
}

impl EqualizerApp {
    /// Build the editor from `config` and apply its start-up preset
    pub fn new(config: EditorConfig, config_path: PathBuf) -> Self {
        let catalog = BuiltinPresets::new(config.bands.count);
        let mut editor = EqualizerEditor::new(catalog, &config);
        let detected = editor.apply_preset(&config.initial_preset);
        log::info!("Start-up preset: {}", detected);

        Self {
            editor,
            config,
            config_path,
            status: String::new(),
            status_generation: 0,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Editor(editor_message) => {
                let persist = matches!(
                    editor_message,
                    EqualizerMessage::SelectPreset(_)
                        | EqualizerMessage::Reset
                        | EqualizerMessage::SetBypassed(_)
                );

                let events = self.editor.update(editor_message);
                let mut tasks: Vec<Task<Message>> = events
                    .iter()
                    .filter_map(|event| self.handle_editor_event(event))
                    .collect();

                if persist && !events.is_empty() {
                    tasks.push(self.save_settings());
                }
                Task::batch(tasks)
            }
            Message::ClearStatus(generation) => {
                if generation == self.status_generation {
                    self.status.clear();
                }
                Task::none()
            }
            Message::SaveComplete(result) => {
                if let Err(e) = result {
                    log::warn!("Failed to save settings: {}", e);
                    return self.set_status(format!("Settings save failed: {}", e));
                }
                Task::none()
            }
        }
    }

    fn handle_editor_event(&mut self, event: &EditorEvent) -> Option<Task<Message>> {
        let status = match event {
            EditorEvent::BandValueChanged(_) => return None,
            EditorEvent::PresetDetected(PresetMatch::Named(name)) => format!("Preset: {}", name),
            EditorEvent::PresetDetected(PresetMatch::Custom) => {
                "Custom equalizer settings".to_string()
            }
            EditorEvent::BypassChanged(true) => "Equalizer bypassed".to_string(),
            EditorEvent::BypassChanged(false) => "Equalizer active".to_string(),
        };

        // A drag reports "Custom" on every step; keep the first timeout
        if status == self.status {
            return None;
        }
        Some(self.set_status(status))
    }

    fn set_status(&mut self, status: String) -> Task<Message> {
        self.status = status;
        self.status_generation += 1;
        let generation = self.status_generation;

        Task::perform(
            async move { tokio::time::sleep(STATUS_TIMEOUT).await },
            move |_| Message::ClearStatus(generation),
        )
    }

    /// Persist the selected preset and bypass state in the background
    fn save_settings(&mut self) -> Task<Message> {
        if let Some(name) = self.editor.active_preset().name() {
            self.config.initial_preset = name.to_string();
        }
        self.config.start_bypassed = self.editor.is_bypassed();

        let config = self.config.clone();
        let config_path = self.config_path.clone();
        Task::perform(
            async move {
                save_editor_config(&config, &config_path).map_err(|e| format!("{:#}", e))
            },
            Message::SaveComplete,
        )
    }

    pub fn view(&self) -> Element<'_, Message> {
        let presets = preset_selector(self.editor.presets(), |name| {
            Message::Editor(EqualizerMessage::SelectPreset(name))
        });

        let reset = button(text("Reset")).on_press(Message::Editor(EqualizerMessage::Reset));

        let bypass = checkbox(self.editor.is_bypassed())
            .label("Bypass")
            .on_toggle(|bypassed| Message::Editor(EqualizerMessage::SetBypassed(bypassed)));

        let toolbar = row![
            text("Preset").size(14),
            presets,
            reset,
            Space::new().width(Length::Fill),
            bypass,
        ]
        .spacing(10)
        .align_y(Alignment::Center);

        let editor = equalizer_editor(&self.editor).map(Message::Editor);

        let status = text(&self.status).size(12);

        container(column![toolbar, editor, status].spacing(16))
            .padding(16)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> (tempfile::TempDir, EqualizerApp) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        let mut config = EditorConfig::default();
        config.initial_preset = "rock".to_string();
        (dir, EqualizerApp::new(config, path))
    }

    #[test]
    fn test_startup_applies_initial_preset() {
        let (_dir, app) = app();
        assert_eq!(app.editor.active_preset(), &PresetMatch::Named("Rock".into()));
        assert_eq!(app.editor.band_values(), vec![-1, 3, 5, 4, 1, -1, -2, -1, 2, 4]);
    }

    #[test]
    fn test_unknown_initial_preset_falls_back_to_first_entry() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = EditorConfig::default();
        config.initial_preset = "Polka".to_string();
        let app = EqualizerApp::new(config, dir.path().join("config.yaml"));
        assert_eq!(app.editor.active_preset(), &PresetMatch::Named("Flat".into()));
    }

    #[test]
    fn test_status_follows_editor_events() {
        let (_dir, mut app) = app();

        let _ = app.update(Message::Editor(EqualizerMessage::Reset));
        assert_eq!(app.status, "Preset: Flat");

        let _ = app.update(Message::Editor(EqualizerMessage::SetBypassed(true)));
        assert_eq!(app.status, "Equalizer bypassed");

        let _ = app.update(Message::Editor(EqualizerMessage::SetBypassed(false)));
        assert_eq!(app.status, "Equalizer active");

        let _ = app.update(Message::Editor(EqualizerMessage::SliderChanged {
            slider: eqsurface_widgets::SliderId(0),
            value: 5,
        }));
        assert_eq!(app.status, "Custom equalizer settings");
    }

    #[test]
    fn test_stale_timeout_keeps_newer_status() {
        let (_dir, mut app) = app();
        let _ = app.update(Message::Editor(EqualizerMessage::Reset));
        let first = app.status_generation;
        let _ = app.update(Message::Editor(EqualizerMessage::SetBypassed(true)));

        let _ = app.update(Message::ClearStatus(first));
        assert_eq!(app.status, "Equalizer bypassed");

        let _ = app.update(Message::ClearStatus(app.status_generation));
        assert!(app.status.is_empty());
    }

    #[test]
    fn test_save_settings_updates_config() {
        let (_dir, mut app) = app();
        let _ = app.update(Message::Editor(EqualizerMessage::SelectPreset("Jazz".into())));
        assert_eq!(app.config.initial_preset, "Jazz");

        let _ = app.update(Message::Editor(EqualizerMessage::SetBypassed(true)));
        assert!(app.config.start_bypassed);
    }
}
