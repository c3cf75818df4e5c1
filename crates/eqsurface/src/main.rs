//! Equalizer control surface
//!
//! Loads `~/.config/eqsurface/config.yaml` (defaults if missing or invalid)
//! and opens the editor window. Set `RUST_LOG=debug` to trace every band
//! change as it is propagated between the curve and the sliders.

#![cfg_attr(all(windows, not(feature = "console")), windows_subsystem = "windows")]

mod app;

use eqsurface_core::config::{default_config_path, load_editor_config};
use iced::{Size, Task};

use app::{EqualizerApp, Message};

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("eqsurface starting up");

    let config_path = default_config_path();
    let config = load_editor_config(&config_path);
    log::info!(
        "{} bands, gain {}..={} dB",
        config.bands.count,
        config.gain.min,
        config.gain.max
    );

    iced::application(
        move || {
            let app = EqualizerApp::new(config.clone(), config_path.clone());
            (app, Task::none())
        },
        update,
        view,
    )
    .theme(theme)
    .title("Equalizer")
    .window_size(Size::new(760.0, 560.0))
    .run()
}

/// Update function for iced
fn update(app: &mut EqualizerApp, message: Message) -> Task<Message> {
    app.update(message)
}

/// View function for iced
fn view(app: &EqualizerApp) -> iced::Element<'_, Message> {
    app.view()
}

/// Theme function for iced
fn theme(app: &EqualizerApp) -> iced::Theme {
    app.theme()
}
