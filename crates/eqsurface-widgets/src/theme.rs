//! Shared colors for the equalizer widgets

use iced::Color;

/// Canvas background
pub const CURVE_BACKGROUND: Color = Color::from_rgb(0.1, 0.1, 0.12);
/// Grid lines and curve frame
pub const GRID_COLOR: Color = Color::from_rgba(0.5, 0.5, 0.55, 0.35);
/// Curve line and points while enabled
pub const CURVE_COLOR: Color = Color::from_rgba(0.3, 0.7, 0.9, 0.86);
/// Curve line and points while bypassed
pub const CURVE_DISABLED_COLOR: Color = Color::from_rgba(0.45, 0.45, 0.5, 0.6);
/// Point under the pointer or being dragged
pub const POINT_ACTIVE_COLOR: Color = Color::from_rgb(1.0, 0.8, 0.3);
/// Point outline
pub const POINT_OUTLINE: Color = Color::from_rgba(0.05, 0.05, 0.06, 0.86);

/// Primary label text
pub const TEXT_PRIMARY: Color = Color::from_rgb(0.9, 0.9, 0.9);
/// Secondary label text
pub const TEXT_SECONDARY: Color = Color::from_rgb(0.6, 0.6, 0.65);
/// Labels while bypassed
pub const TEXT_DISABLED: Color = Color::from_rgb(0.4, 0.4, 0.42);
